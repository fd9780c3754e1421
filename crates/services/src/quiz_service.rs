use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use quiz_core::{CertificateOutcome, CertificateRequest, QuizEffect, QuizEvent, QuizMachine};

use crate::api_client::{CertificateReply, QuizApi};
use crate::error::CertificateError;

pub const LOAD_ERROR_MESSAGE: &str =
    "Could not load questions. Check your connection and try again.";

/// Runs the side effects a `QuizMachine` asks for and turns their results
/// back into events.
#[derive(Clone)]
pub struct QuizService {
    api: Arc<dyn QuizApi>,
    certificate_dir: PathBuf,
}

impl QuizService {
    #[must_use]
    pub fn new(api: Arc<dyn QuizApi>) -> Self {
        Self {
            api,
            certificate_dir: std::env::temp_dir(),
        }
    }

    /// Directory where PDF certificates are written when the server returns
    /// the document instead of emailing it.
    #[must_use]
    pub fn with_certificate_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.certificate_dir = dir.into();
        self
    }

    #[must_use]
    pub fn certificate_dir(&self) -> &Path {
        &self.certificate_dir
    }

    /// Execute one effect.
    ///
    /// Returns the follow-up event, if any. `ScheduleAdvance` resolves only
    /// after its delay; cancelling it is up to the caller.
    pub async fn run_effect(&self, effect: QuizEffect) -> Option<QuizEvent> {
        match effect {
            QuizEffect::FetchQuestions {
                ticket,
                mode,
                level,
            } => {
                let event = match self.api.fetch_questions(mode, &level).await {
                    Ok(questions) => {
                        tracing::debug!(ticket, count = questions.len(), "questions loaded");
                        QuizEvent::QuestionsLoaded { ticket, questions }
                    }
                    Err(err) => {
                        tracing::warn!(ticket, error = %err, "question fetch failed");
                        QuizEvent::QuestionsFailed {
                            ticket,
                            message: LOAD_ERROR_MESSAGE.to_string(),
                        }
                    }
                };
                Some(event)
            }
            QuizEffect::ScheduleAdvance { ticket, delay } => {
                tokio::time::sleep(delay).await;
                Some(QuizEvent::Advance { ticket })
            }
            QuizEffect::SubmitCertificate(request) => {
                let outcome = match self.submit_certificate(&request).await {
                    Ok(outcome) => outcome,
                    Err(err) => {
                        tracing::warn!(error = %err, "certificate request failed");
                        CertificateOutcome::Rejected { error: None }
                    }
                };
                Some(QuizEvent::CertificateResolved(outcome))
            }
            QuizEffect::CancelAdvance | QuizEffect::Show(_) => None,
        }
    }

    /// # Errors
    ///
    /// Returns `CertificateError` when the request fails or a returned PDF
    /// cannot be written.
    pub async fn submit_certificate(
        &self,
        request: &CertificateRequest,
    ) -> Result<CertificateOutcome, CertificateError> {
        match self.api.request_certificate(request).await? {
            CertificateReply::Ack { ok: true, .. } => Ok(CertificateOutcome::Sent),
            CertificateReply::Ack { ok: false, error } => {
                tracing::info!(error = ?error, "certificate rejected by server");
                Ok(CertificateOutcome::Rejected { error })
            }
            CertificateReply::Pdf(bytes) => {
                let path = self
                    .certificate_dir
                    .join(certificate_file_name(&request.name));
                tokio::fs::create_dir_all(&self.certificate_dir).await?;
                tokio::fs::write(&path, bytes).await?;
                tracing::info!(path = %path.display(), "certificate saved");
                Ok(CertificateOutcome::Saved {
                    path: path.display().to_string(),
                })
            }
        }
    }
}

fn certificate_file_name(name: &str) -> String {
    let safe: String = name
        .chars()
        .map(|ch| {
            if ch.is_alphanumeric() || ch == '-' || ch == '_' {
                ch
            } else {
                '_'
            }
        })
        .collect();
    format!("dog-certificate-{safe}.pdf")
}

/// Headless host for a `QuizMachine`.
///
/// Effects run one after another, so a scheduled advance always completes
/// before the next event is handled.
pub struct QuizDriver {
    machine: QuizMachine,
    service: Arc<QuizService>,
}

impl QuizDriver {
    #[must_use]
    pub fn new(service: Arc<QuizService>) -> Self {
        Self {
            machine: QuizMachine::new(),
            service,
        }
    }

    #[must_use]
    pub fn machine(&self) -> &QuizMachine {
        &self.machine
    }

    pub async fn dispatch(&mut self, event: QuizEvent) {
        let mut queue = VecDeque::from([event]);
        while let Some(event) = queue.pop_front() {
            for effect in self.machine.apply(event) {
                if let Some(next) = self.service.run_effect(effect).await {
                    queue.push_back(next);
                }
            }
        }
    }
}
