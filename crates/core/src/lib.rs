#![forbid(unsafe_code)]

pub mod hint_modal;
pub mod model;
pub mod scoring;
pub mod session;

pub use hint_modal::{CloseTrigger, HintModal, HintTrigger, OpenOptions};
pub use scoring::{QuizResult, points_for};
pub use session::{
    CertificateOutcome, CertificateRequest, CertificateStatus, HintPanel, OptionMark,
    QuizEffect, QuizEvent, QuizMachine, Screen, SessionState, ADVANCE_DELAY,
};
