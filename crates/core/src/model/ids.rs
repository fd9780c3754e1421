use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a question as issued by the question server.
///
/// The server may hand out numeric or textual ids; both are accepted and
/// compared structurally, so `7` and `"7"` are distinct keys.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuestionId {
    Number(i64),
    Text(String),
}

impl QuestionId {
    /// Creates a numeric `QuestionId`
    #[must_use]
    pub fn number(id: i64) -> Self {
        Self::Number(id)
    }

    /// Creates a textual `QuestionId`
    #[must_use]
    pub fn text(id: impl Into<String>) -> Self {
        Self::Text(id.into())
    }
}

impl From<i64> for QuestionId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for QuestionId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionId::Number(id) => write!(f, "QuestionId({id})"),
            QuestionId::Text(id) => write!(f, "QuestionId({id:?})"),
        }
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionId::Number(id) => write!(f, "{id}"),
            QuestionId::Text(id) => f.write_str(id),
        }
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_id_display() {
        assert_eq!(QuestionId::number(42).to_string(), "42");
        assert_eq!(QuestionId::text("u10-bark").to_string(), "u10-bark");
    }

    #[test]
    fn test_question_id_deserializes_number_or_string() {
        let numeric: QuestionId = serde_json::from_str("12").unwrap();
        let textual: QuestionId = serde_json::from_str("\"q-12\"").unwrap();
        assert_eq!(numeric, QuestionId::number(12));
        assert_eq!(textual, QuestionId::text("q-12"));
    }

    #[test]
    fn test_numeric_and_textual_ids_are_distinct() {
        assert_ne!(QuestionId::number(7), QuestionId::text("7"));
    }
}
