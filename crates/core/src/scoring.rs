//! Per-question points and the final pass/fail computation.

/// Points awarded for a correct answer with no aid used.
pub const MAX_POINTS_PER_QUESTION: u32 = 4;

/// Minimum rounded percentage that counts as a pass.
pub const PASS_PERCENT: u32 = 75;

pub const PASS_MESSAGE: &str = "Amazing work! You really know your dogs. 🐶";
pub const FAIL_MESSAGE: &str = "Good effort! Keep learning and try again. 🐾";

/// Points for one answered question.
///
/// Aid 2 dominates aid 1: if both were used the answer is worth 1.
#[must_use]
pub fn points_for(correct: bool, used_aid1: bool, used_aid2: bool) -> u32 {
    match (correct, used_aid1, used_aid2) {
        (false, _, _) => 0,
        (true, _, true) => 1,
        (true, true, false) => 2,
        (true, false, false) => MAX_POINTS_PER_QUESTION,
    }
}

/// Final outcome of a finished session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizResult {
    pub score: u32,
    pub total: u32,
    pub percent: u32,
    pub passed: bool,
}

impl QuizResult {
    #[must_use]
    pub fn compute(score: u32, question_count: usize) -> Self {
        let count = u32::try_from(question_count).unwrap_or(u32::MAX);
        let total = count.saturating_mul(MAX_POINTS_PER_QUESTION);
        let percent = rounded_percent(score, total);
        Self {
            score,
            total,
            percent,
            passed: percent >= PASS_PERCENT,
        }
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        if self.passed { PASS_MESSAGE } else { FAIL_MESSAGE }
    }
}

// Half-up rounding in integer space.
fn rounded_percent(score: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let score = u64::from(score);
    let total = u64::from(total);
    let percent = (score * 200 + total) / (total * 2);
    u32::try_from(percent).unwrap_or(u32::MAX)
}
