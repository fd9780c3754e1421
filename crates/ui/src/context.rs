use std::sync::Arc;

use quiz_core::model::Level;
use services::QuizService;

pub trait UiApp: Send + Sync {
    fn quiz_service(&self) -> Arc<QuizService>;

    /// Level preselected on the welcome screen.
    fn default_level(&self) -> Level {
        Level::default()
    }
}

#[derive(Clone)]
pub struct AppContext {
    quiz_service: Arc<QuizService>,
    default_level: Level,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_service: app.quiz_service(),
            default_level: app.default_level(),
        }
    }

    #[must_use]
    pub fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }

    #[must_use]
    pub fn default_level(&self) -> &Level {
        &self.default_level
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
