#![forbid(unsafe_code)]

pub mod api_client;
pub mod error;
pub mod quiz_service;

pub use api_client::{ApiConfig, CertificateReply, DEFAULT_SERVER_URL, HttpQuizApi, QuizApi};
pub use error::{ApiError, CertificateError};
pub use quiz_service::{LOAD_ERROR_MESSAGE, QuizDriver, QuizService};
