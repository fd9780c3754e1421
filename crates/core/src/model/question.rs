use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::mode::HintTier;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question {id} has no answer options")]
    NoOptions { id: QuestionId },

    #[error("question {id} answer index {index} is out of range for {len} options")]
    AnswerOutOfRange {
        id: QuestionId,
        index: usize,
        len: usize,
    },
}

/// A single question as served by `/api/questions`.
///
/// Read-only for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub lesson_image: Option<String>,
    #[serde(default)]
    pub lesson: Option<String>,
    pub options: Vec<String>,
    pub answer_index: usize,
    #[serde(default)]
    pub aid1: Option<String>,
    #[serde(default)]
    pub aid2: Option<String>,
}

impl Question {
    /// Check the option invariants the server is expected to uphold.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::NoOptions` when there is nothing to pick from and
    /// `QuestionError::AnswerOutOfRange` when `answer_index` points past the options.
    pub fn validate(&self) -> Result<(), QuestionError> {
        if self.options.is_empty() {
            return Err(QuestionError::NoOptions {
                id: self.id.clone(),
            });
        }
        if self.answer_index >= self.options.len() {
            return Err(QuestionError::AnswerOutOfRange {
                id: self.id.clone(),
                index: self.answer_index,
                len: self.options.len(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.answer_index
    }

    /// Hint text for the given tier, treating blank strings as absent.
    #[must_use]
    pub fn aid(&self, tier: HintTier) -> Option<&str> {
        let text = match tier {
            HintTier::Aid1 => self.aid1.as_deref(),
            HintTier::Aid2 => self.aid2.as_deref(),
        };
        text.filter(|value| !value.trim().is_empty())
    }
}
