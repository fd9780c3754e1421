use serde::{Deserialize, Serialize};
use std::fmt;

/// How a session walks through its questions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Answer-only.
    #[default]
    Quiz,
    /// A lesson screen precedes every question.
    Learn,
}

impl Mode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Quiz => "quiz",
            Mode::Learn => "learn",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Difficulty / category tag selecting the question set.
///
/// Opaque to the client: any value is forwarded to the server as-is.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Level(String);

impl Level {
    /// Levels the question server knows about, in display order.
    pub const PRESETS: [&'static str; 3] = ["U10", "11-15", "16+"];

    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::new(Self::PRESETS[0])
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which of the two per-question aids was requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HintTier {
    Aid1,
    Aid2,
}

impl HintTier {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            HintTier::Aid1 => "Hint 1",
            HintTier::Aid2 => "Hint 2",
        }
    }
}
