use dioxus::document::eval;
use dioxus::prelude::*;
use quiz_core::{CloseTrigger, HintModal, HintTrigger, OpenOptions};

use crate::vm::sanitize_html;

/// Shared access to the hint dialog, provided by [`HintModalHost`].
#[derive(Clone, Copy, PartialEq)]
pub struct HintModalHandle {
    modal: Signal<HintModal>,
}

impl HintModalHandle {
    pub fn open(self, options: OpenOptions) {
        let mut modal = self.modal;
        modal.write().open(options);
    }

    pub fn open_trigger(self, trigger: &HintTrigger) {
        self.open(trigger.resolve());
    }

    pub fn close(self) {
        let mut modal = self.modal;
        modal.write().close();
    }

    /// Returns `true` when the gesture closed the dialog.
    pub fn dismiss(self, trigger: CloseTrigger) -> bool {
        let mut modal = self.modal;
        modal.write().dismiss(trigger)
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        self.modal.read().is_visible()
    }
}

/// The nearest host's handle, or `None` when no host is mounted above.
///
/// Callers treat `None` as "do nothing".
#[must_use]
pub fn use_hint_modal() -> Option<HintModalHandle> {
    try_use_context::<HintModalHandle>()
}

const DIALOG_ID: &str = "helpDialog";

/// Script that mirrors the dialog state onto the page.
///
/// An open dialog locks body scrolling and takes focus, so Escape keydowns
/// reach the host even after the user clicks non-interactive dialog content.
fn modal_sync_script(modal: &HintModal) -> String {
    if modal.is_visible() {
        format!(
            "document.body.style.overflow = 'hidden'; document.getElementById({DIALOG_ID:?})?.focus();"
        )
    } else if modal.scroll_locked() {
        "document.body.style.overflow = 'hidden';".to_string()
    } else {
        "document.body.style.overflow = '';".to_string()
    }
}

/// Owns the dialog and makes it available to every descendant.
///
/// Escape anywhere inside the host closes an open dialog.
#[component]
pub fn HintModalHost(children: Element) -> Element {
    let modal = use_signal(HintModal::mounted);
    let handle = use_context_provider(|| HintModalHandle { modal });

    use_effect(move || {
        let js = modal_sync_script(&modal.read());
        let _ = eval(&js);
    });

    let state = modal.read().clone();
    rsx! {
        div {
            class: "hint-modal-host",
            id: "hintModalHost",
            tabindex: "0",
            onkeydown: move |evt: KeyboardEvent| {
                if evt.data.key() == Key::Escape && handle.dismiss(CloseTrigger::EscapeKey) {
                    evt.prevent_default();
                }
            },
            {children}
            HintModalView {
                state,
                on_dismiss: move |trigger: CloseTrigger| {
                    handle.dismiss(trigger);
                },
            }
        }
    }
}

/// Renders the dialog. The body is passed through `sanitize_html`, so only
/// simple formatting tags and `class` attributes survive.
#[component]
pub fn HintModalView(state: HintModal, on_dismiss: EventHandler<CloseTrigger>) -> Element {
    if !state.is_present() {
        return rsx! {};
    }
    let class = if state.is_visible() {
        "hint-modal"
    } else {
        "hint-modal hidden"
    };
    let body = sanitize_html(state.body_html());

    rsx! {
        div { id: "helpModal", class,
            div {
                class: "hint-modal-overlay",
                aria_label: "Close overlay",
                onclick: move |evt| {
                    evt.prevent_default();
                    on_dismiss.call(CloseTrigger::Overlay);
                },
            }
            div {
                class: "hint-modal-dialog",
                id: DIALOG_ID,
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "helpTitle",
                tabindex: "-1",
                button {
                    class: "hint-modal-x",
                    r#type: "button",
                    aria_label: "Close",
                    onclick: move |evt| {
                        evt.prevent_default();
                        on_dismiss.call(CloseTrigger::CloseButton);
                    },
                    "✕"
                }
                h2 { id: "helpTitle", class: "hint-modal-title", "{state.title()}" }
                div { id: "helpBody", class: "hint-modal-body", dangerous_inner_html: "{body}" }
                div { class: "hint-modal-actions",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |evt| {
                            evt.prevent_default();
                            on_dismiss.call(CloseTrigger::CloseButton);
                        },
                        "Close"
                    }
                }
            }
        }
    }
}

/// A button that opens the shared dialog with the trigger's content.
#[component]
pub fn HintTriggerButton(
    trigger: HintTrigger,
    label: String,
    #[props(default = "btn btn-link".to_string())] class: String,
) -> Element {
    let handle = use_hint_modal();
    rsx! {
        button {
            class,
            r#type: "button",
            onclick: move |evt| {
                evt.prevent_default();
                if let Some(handle) = handle {
                    handle.open_trigger(&trigger);
                }
            },
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn open_modal_renders_title_and_body() {
        let html = render(|| {
            let mut state = HintModal::mounted();
            state.open(OpenOptions::new().title("More Help").html("<p>Dogs pant to cool down.</p>"));
            rsx! { HintModalView { state, on_dismiss: |_| {} } }
        });
        assert!(html.contains("More Help"), "missing title in {html}");
        assert!(html.contains("Dogs pant to cool down."), "missing body in {html}");
        assert!(!html.contains("hint-modal hidden"), "modal hidden in {html}");
        assert!(html.contains("type=\"button\""), "missing button type in {html}");
    }

    #[test]
    fn closed_modal_is_hidden() {
        let html = render(|| {
            rsx! { HintModalView { state: HintModal::mounted(), on_dismiss: |_| {} } }
        });
        assert!(html.contains("hint-modal hidden"), "modal visible in {html}");
    }

    #[test]
    fn blank_open_shows_placeholder() {
        let html = render(|| {
            let mut state = HintModal::mounted();
            state.open(OpenOptions::new());
            rsx! { HintModalView { state, on_dismiss: |_| {} } }
        });
        assert!(html.contains("No extra info for this one yet."), "missing placeholder in {html}");
        assert!(html.contains(">Hint<"), "missing default title in {html}");
    }

    #[test]
    fn missing_structure_renders_nothing() {
        let html = render(|| {
            rsx! { HintModalView { state: HintModal::new(), on_dismiss: |_| {} } }
        });
        assert!(!html.contains("helpModal"), "unexpected modal in {html}");
    }

    #[test]
    fn host_wraps_children_and_mounts_hidden_modal() {
        let html = render(|| {
            rsx! {
                HintModalHost {
                    HintTriggerButton {
                        trigger: HintTrigger::hint1("<p>Sniff first.</p>"),
                        label: "How it works",
                    }
                }
            }
        });
        assert!(html.contains("How it works"), "missing trigger in {html}");
        assert!(html.contains("helpModal"), "missing modal in {html}");
        assert!(html.contains("hint-modal hidden"), "modal should start hidden in {html}");
    }

    #[test]
    fn host_and_dialog_are_focusable() {
        let html = render(|| {
            rsx! {
                HintModalHost {
                    p { "Sit." }
                }
            }
        });
        assert!(html.contains(r#"id="hintModalHost""#), "missing host id in {html}");
        assert!(html.contains(r#"tabindex="0""#), "host not focusable in {html}");
        assert!(html.contains(r#"id="helpDialog""#), "missing dialog id in {html}");
        assert!(html.contains(r#"tabindex="-1""#), "dialog not focusable in {html}");
    }

    #[test]
    fn opening_requests_dialog_focus() {
        let mut modal = HintModal::mounted();
        let closed = modal_sync_script(&modal);
        assert!(!closed.contains("focus()"), "closed dialog grabs focus: {closed}");
        assert!(closed.contains("overflow = ''"), "scroll not restored: {closed}");

        modal.open(OpenOptions::new().html("<p>Stay.</p>"));
        let open = modal_sync_script(&modal);
        assert!(
            open.contains(r#"document.getElementById("helpDialog")?.focus()"#),
            "open dialog does not request focus: {open}"
        );
        assert!(open.contains("overflow = 'hidden'"), "scroll not locked: {open}");

        modal.dismiss(CloseTrigger::EscapeKey);
        assert!(!modal_sync_script(&modal).contains("focus()"));
    }

    #[test]
    fn trigger_without_host_still_renders() {
        let html = render(|| {
            rsx! {
                HintTriggerButton { trigger: HintTrigger::default(), label: "Help" }
            }
        });
        assert!(html.contains("Help"), "missing trigger in {html}");
    }
}
