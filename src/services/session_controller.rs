use std::sync::Arc;

use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{
        ActiveSelection, PageText, QuizArtifact, QuizDocument, QuizStyle, SourceDocument,
        StudySession, Subject, SubjectCreation,
    },
    repositories::StudyHierarchyRepository,
    services::{page_extractor::PageTextExtractor, quiz_composer::QuizComposer},
};

/// Drives the per-session state machine: EMPTY → GENERATING → READY → EMPTY.
#[derive(Clone)]
pub struct SessionController {
    repository: Arc<dyn StudyHierarchyRepository>,
    extractor: Arc<dyn PageTextExtractor>,
    composer: Arc<QuizComposer>,
    generation_attempts: u32,
}

impl SessionController {
    pub fn new(
        repository: Arc<dyn StudyHierarchyRepository>,
        extractor: Arc<dyn PageTextExtractor>,
        composer: Arc<QuizComposer>,
        generation_attempts: u32,
    ) -> Self {
        Self {
            repository,
            extractor,
            composer,
            generation_attempts: generation_attempts.max(1),
        }
    }

    pub async fn create_subject(&self, name: &str) -> AppResult<SubjectCreation> {
        let outcome = self.repository.create_subject(name).await?;
        match outcome {
            SubjectCreation::Created => log::info!("Created subject '{}'", name),
            SubjectCreation::AlreadyExists => {
                log::debug!("Subject '{}' already exists, selecting it", name)
            }
        }
        Ok(outcome)
    }

    pub async fn list_subjects(&self) -> AppResult<Vec<Subject>> {
        self.repository.list_subjects().await
    }

    pub async fn select_subject(&self, name: &str) -> AppResult<()> {
        self.repository.select_subject(name).await
    }

    pub async fn delete_subject(&self, name: &str) -> AppResult<Subject> {
        let removed = self.repository.delete_subject(name).await?;
        log::info!(
            "Deleted subject '{}' with {} sessions",
            name,
            removed.sessions.len()
        );
        Ok(removed)
    }

    /// A missing display name falls back to the creation timestamp.
    pub async fn create_session(
        &self,
        subject: &str,
        display_name: Option<&str>,
    ) -> AppResult<StudySession> {
        let session = self
            .repository
            .create_session(subject, display_name.unwrap_or_default())
            .await?;
        log::info!(
            "Created session {} ('{}') in subject '{}'",
            session.id,
            session.display_name,
            subject
        );
        Ok(session)
    }

    pub async fn list_sessions(&self, subject: &str) -> AppResult<Vec<StudySession>> {
        self.repository.list_sessions(subject).await
    }

    pub async fn get_session(&self, subject: &str, id: &Uuid) -> AppResult<StudySession> {
        self.repository.find_session(subject, id).await
    }

    pub async fn select_session(&self, subject: &str, id: &Uuid) -> AppResult<()> {
        self.repository.select_session(subject, id).await
    }

    pub async fn delete_session(&self, subject: &str, id: &Uuid) -> AppResult<StudySession> {
        let removed = self.repository.delete_session(subject, id).await?;
        log::info!("Deleted session {} from subject '{}'", id, subject);
        Ok(removed)
    }

    pub async fn active_selection(&self) -> AppResult<Option<ActiveSelection>> {
        self.repository.active_selection().await
    }

    /// EMPTY → GENERATING → READY (or back to EMPTY on failure).
    ///
    /// Once admitted, the generation runs on its own task so that a dropped
    /// request cannot leave the session stuck in GENERATING.
    pub async fn submit_document(
        &self,
        subject: &str,
        id: &Uuid,
        document: Vec<u8>,
        style: QuizStyle,
    ) -> AppResult<QuizDocument> {
        if document.is_empty() {
            return Err(AppError::ValidationError(
                "uploaded document is empty".to_string(),
            ));
        }

        self.repository.begin_generation(subject, id).await?;
        log::info!(
            "Generating {} quiz for session {} in subject '{}'",
            style,
            id,
            subject
        );

        let controller = self.clone();
        let task_subject = subject.to_string();
        let task_id = *id;
        let handle = tokio::spawn(async move {
            controller
                .run_generation(&task_subject, &task_id, document, style)
                .await
        });

        match handle.await {
            Ok(result) => result,
            Err(e) => {
                log::error!("Generation task for session {} failed: {}", id, e);
                if let Err(abort_err) = self.repository.abort_generation(subject, id).await {
                    log::warn!("Could not reset session {}: {}", id, abort_err);
                }
                Err(AppError::InternalError(format!(
                    "generation task failed: {}",
                    e
                )))
            }
        }
    }

    async fn run_generation(
        &self,
        subject: &str,
        id: &Uuid,
        document: Vec<u8>,
        style: QuizStyle,
    ) -> AppResult<QuizDocument> {
        let outcome = self.extract_and_compose(document, style).await;

        match outcome {
            Ok((raw, parsed, source)) => {
                self.repository
                    .attach_quiz(subject, id, QuizArtifact::new(raw, style, source))
                    .await?;
                log::info!("Quiz ready for session {} in subject '{}'", id, subject);
                Ok(parsed)
            }
            Err(e) => {
                log::warn!("Quiz generation for session {} failed: {}", id, e);
                if let Err(abort_err) = self.repository.abort_generation(subject, id).await {
                    log::warn!("Could not reset session {}: {}", id, abort_err);
                }
                Err(e)
            }
        }
    }

    async fn extract_and_compose(
        &self,
        document: Vec<u8>,
        style: QuizStyle,
    ) -> AppResult<(String, QuizDocument, SourceDocument)> {
        let extractor = Arc::clone(&self.extractor);
        let (pages, document): (Vec<PageText>, Vec<u8>) = tokio::task::spawn_blocking(move || {
            extractor.extract(&document).map(|pages| (pages, document))
        })
        .await
        .map_err(|e| AppError::ExtractionFailure(format!("extraction task failed: {}", e)))??;

        if pages.is_empty() {
            return Err(AppError::ExtractionFailure(
                "document contains no extractable text".to_string(),
            ));
        }

        let source = SourceDocument::describe(&document, pages.len());
        let mut attempt = 1;
        loop {
            let raw = self.composer.compose(&pages, style).await?;

            match QuizDocument::parse(&raw) {
                Ok(parsed) => return Ok((raw, parsed, source)),
                Err(e) if attempt < self.generation_attempts => {
                    log::warn!(
                        "Attempt {}/{} produced a malformed quiz document: {}",
                        attempt,
                        self.generation_attempts,
                        e
                    );
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Parsed sections of the session's quiz.
    pub async fn quiz_document(&self, subject: &str, id: &Uuid) -> AppResult<(StudySession, QuizDocument)> {
        let session = self.repository.find_session(subject, id).await?;
        let document = match &session.quiz {
            Some(artifact) => QuizDocument::parse(&artifact.raw)?,
            None => {
                return Err(AppError::InvalidTransition(format!(
                    "session {} has no quiz yet (state {})",
                    id,
                    session.state()
                )))
            }
        };
        Ok((session, document))
    }

    /// READY → EMPTY. The discarded quiz is not kept anywhere.
    pub async fn regenerate(&self, subject: &str, id: &Uuid) -> AppResult<StudySession> {
        if self.repository.clear_quiz(subject, id).await?.is_some() {
            log::info!("Cleared quiz of session {} for regeneration", id);
        }
        self.repository.find_session(subject, id).await
    }
}
