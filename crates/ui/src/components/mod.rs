mod hint_modal;

pub use hint_modal::{HintModalHandle, HintModalHost, HintModalView, HintTriggerButton, use_hint_modal};
