mod learning;
mod quiz;
mod quiz_page;
mod result;
mod welcome;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use learning::LearningScreen;
pub use quiz::QuizScreen;
pub use quiz_page::QuizPage;
pub use result::ResultScreen;
pub use welcome::WelcomeScreen;
