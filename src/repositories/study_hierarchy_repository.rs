use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    errors::AppResult,
    models::domain::{
        ActiveSelection, QuizArtifact, StudyHierarchy, StudySession, Subject, SubjectCreation,
    },
};

#[async_trait]
pub trait StudyHierarchyRepository: Send + Sync {
    async fn create_subject(&self, name: &str) -> AppResult<SubjectCreation>;
    async fn list_subjects(&self) -> AppResult<Vec<Subject>>;
    async fn select_subject(&self, name: &str) -> AppResult<()>;
    async fn delete_subject(&self, name: &str) -> AppResult<Subject>;
    async fn create_session(&self, subject: &str, display_name: &str) -> AppResult<StudySession>;
    async fn list_sessions(&self, subject: &str) -> AppResult<Vec<StudySession>>;
    async fn find_session(&self, subject: &str, id: &Uuid) -> AppResult<StudySession>;
    async fn select_session(&self, subject: &str, id: &Uuid) -> AppResult<()>;
    async fn delete_session(&self, subject: &str, id: &Uuid) -> AppResult<StudySession>;
    async fn active_selection(&self) -> AppResult<Option<ActiveSelection>>;
    async fn begin_generation(&self, subject: &str, id: &Uuid) -> AppResult<()>;
    async fn abort_generation(&self, subject: &str, id: &Uuid) -> AppResult<()>;
    async fn attach_quiz(&self, subject: &str, id: &Uuid, artifact: QuizArtifact) -> AppResult<()>;
    async fn clear_quiz(&self, subject: &str, id: &Uuid) -> AppResult<Option<QuizArtifact>>;
}

/// Process-lifetime hierarchy behind one coarse lock. The lock is never held
/// across a generation call.
#[derive(Default)]
pub struct InMemoryStudyHierarchyRepository {
    hierarchy: RwLock<StudyHierarchy>,
}

impl InMemoryStudyHierarchyRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StudyHierarchyRepository for InMemoryStudyHierarchyRepository {
    async fn create_subject(&self, name: &str) -> AppResult<SubjectCreation> {
        let mut hierarchy = self.hierarchy.write().await;
        Ok(hierarchy.create_subject(name))
    }

    async fn list_subjects(&self) -> AppResult<Vec<Subject>> {
        let hierarchy = self.hierarchy.read().await;
        Ok(hierarchy.subjects().to_vec())
    }

    async fn select_subject(&self, name: &str) -> AppResult<()> {
        let mut hierarchy = self.hierarchy.write().await;
        hierarchy.select_subject(name)
    }

    async fn delete_subject(&self, name: &str) -> AppResult<Subject> {
        let mut hierarchy = self.hierarchy.write().await;
        hierarchy.delete_subject(name)
    }

    async fn create_session(&self, subject: &str, display_name: &str) -> AppResult<StudySession> {
        let mut hierarchy = self.hierarchy.write().await;
        hierarchy.create_session(subject, display_name).cloned()
    }

    async fn list_sessions(&self, subject: &str) -> AppResult<Vec<StudySession>> {
        let hierarchy = self.hierarchy.read().await;
        Ok(hierarchy.list_sessions(subject)?.to_vec())
    }

    async fn find_session(&self, subject: &str, id: &Uuid) -> AppResult<StudySession> {
        let hierarchy = self.hierarchy.read().await;
        hierarchy.session(subject, id).cloned()
    }

    async fn select_session(&self, subject: &str, id: &Uuid) -> AppResult<()> {
        let mut hierarchy = self.hierarchy.write().await;
        hierarchy.select_session(subject, id)
    }

    async fn delete_session(&self, subject: &str, id: &Uuid) -> AppResult<StudySession> {
        let mut hierarchy = self.hierarchy.write().await;
        hierarchy.delete_session(subject, id)
    }

    async fn active_selection(&self) -> AppResult<Option<ActiveSelection>> {
        let hierarchy = self.hierarchy.read().await;
        Ok(hierarchy.active().cloned())
    }

    async fn begin_generation(&self, subject: &str, id: &Uuid) -> AppResult<()> {
        let mut hierarchy = self.hierarchy.write().await;
        hierarchy.begin_generation(subject, id)
    }

    async fn abort_generation(&self, subject: &str, id: &Uuid) -> AppResult<()> {
        let mut hierarchy = self.hierarchy.write().await;
        hierarchy.abort_generation(subject, id)
    }

    async fn attach_quiz(&self, subject: &str, id: &Uuid, artifact: QuizArtifact) -> AppResult<()> {
        let mut hierarchy = self.hierarchy.write().await;
        hierarchy.attach_quiz(subject, id, artifact)
    }

    async fn clear_quiz(&self, subject: &str, id: &Uuid) -> AppResult<Option<QuizArtifact>> {
        let mut hierarchy = self.hierarchy.write().await;
        hierarchy.clear_quiz(subject, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_repository_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InMemoryStudyHierarchyRepository>();
    }

    #[tokio::test]
    async fn test_concurrent_subject_inserts_do_not_interfere() {
        let repository = Arc::new(InMemoryStudyHierarchyRepository::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let repository = Arc::clone(&repository);
                tokio::spawn(async move {
                    let name = format!("Subject {}", i);
                    repository.create_subject(&name).await.unwrap();
                    repository.create_session(&name, "Week 1").await.unwrap();
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        let subjects = repository.list_subjects().await.unwrap();
        assert_eq!(subjects.len(), 16);
        assert!(subjects.iter().all(|s| s.sessions.len() == 1));
    }
}
