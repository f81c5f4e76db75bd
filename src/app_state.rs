use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    repositories::{InMemoryStudyHierarchyRepository, StudyHierarchyRepository},
    services::{
        model_service::{OpenAiQuizGenerator, QuizGenerator},
        page_extractor::{PageTextExtractor, PdfPageExtractor},
        quiz_composer::QuizComposer,
        session_controller::SessionController,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub session_controller: Arc<SessionController>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let repository = Arc::new(InMemoryStudyHierarchyRepository::new());
        let extractor = Arc::new(PdfPageExtractor);
        let generator = Arc::new(OpenAiQuizGenerator::from_config(&config));

        Ok(Self::with_components(config, repository, extractor, generator))
    }

    /// Wires the controller from explicit collaborators.
    pub fn with_components(
        config: Config,
        repository: Arc<dyn StudyHierarchyRepository>,
        extractor: Arc<dyn PageTextExtractor>,
        generator: Arc<dyn QuizGenerator>,
    ) -> Self {
        let composer = Arc::new(QuizComposer::new(generator));
        let session_controller = Arc::new(SessionController::new(
            repository,
            extractor,
            composer,
            config.quiz_generation_attempts,
        ));

        Self {
            session_controller,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[tokio::test]
    async fn test_app_state_starts_with_empty_hierarchy() {
        let state = AppState::new(Config::test_config()).await.unwrap();

        let subjects = state.session_controller.list_subjects().await.unwrap();
        assert!(subjects.is_empty());
        assert!(state
            .session_controller
            .active_selection()
            .await
            .unwrap()
            .is_none());
    }
}
