use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::domain::quiz_artifact::QuizArtifact;
use crate::models::domain::study_session::{SessionState, StudySession};
use crate::models::domain::subject::Subject;

/// Outcome of `create_subject`. An existing name is not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectCreation {
    Created,
    AlreadyExists,
}

/// The active subject and, optionally, a session inside it.
/// A session pointer cannot exist without its subject pointer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ActiveSelection {
    pub subject: String,
    pub session_id: Option<Uuid>,
}

/// Subjects → sessions → quiz, plus the active selection.
#[derive(Clone, Debug, Default)]
pub struct StudyHierarchy {
    subjects: Vec<Subject>,
    active: Option<ActiveSelection>,
}

impl StudyHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn active(&self) -> Option<&ActiveSelection> {
        self.active.as_ref()
    }

    pub fn subject(&self, name: &str) -> AppResult<&Subject> {
        self.subjects
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| AppError::NoSuchSubject(name.to_string()))
    }

    fn subject_mut(&mut self, name: &str) -> AppResult<&mut Subject> {
        self.subjects
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| AppError::NoSuchSubject(name.to_string()))
    }

    pub fn session(&self, subject: &str, id: &Uuid) -> AppResult<&StudySession> {
        self.subject(subject)?
            .session(id)
            .ok_or_else(|| AppError::NoSuchSession(id.to_string()))
    }

    fn session_mut(&mut self, subject: &str, id: &Uuid) -> AppResult<&mut StudySession> {
        self.subject_mut(subject)?
            .session_mut(id)
            .ok_or_else(|| AppError::NoSuchSession(id.to_string()))
    }

    /// Creating an existing name only selects it.
    pub fn create_subject(&mut self, name: &str) -> SubjectCreation {
        let outcome = if self.subjects.iter().any(|s| s.name == name) {
            SubjectCreation::AlreadyExists
        } else {
            self.subjects.push(Subject::new(name));
            SubjectCreation::Created
        };

        self.activate_subject(name);
        outcome
    }

    pub fn select_subject(&mut self, name: &str) -> AppResult<()> {
        self.subject(name)?;
        self.activate_subject(name);
        Ok(())
    }

    /// The session pointer survives only when the subject does not change.
    fn activate_subject(&mut self, name: &str) {
        let unchanged = self.active.as_ref().is_some_and(|a| a.subject == name);
        if !unchanged {
            self.active = Some(ActiveSelection {
                subject: name.to_string(),
                session_id: None,
            });
        }
    }

    pub fn delete_subject(&mut self, name: &str) -> AppResult<Subject> {
        let index = self
            .subjects
            .iter()
            .position(|s| s.name == name)
            .ok_or_else(|| AppError::NoSuchSubject(name.to_string()))?;

        if self.active.as_ref().is_some_and(|a| a.subject == name) {
            self.active = None;
        }

        Ok(self.subjects.remove(index))
    }

    pub fn create_session(&mut self, subject: &str, display_name: &str) -> AppResult<&StudySession> {
        let session = StudySession::new(display_name);
        let id = session.id;

        self.subject_mut(subject)?.sessions.push(session);
        self.active = Some(ActiveSelection {
            subject: subject.to_string(),
            session_id: Some(id),
        });

        self.session(subject, &id)
    }

    pub fn list_sessions(&self, subject: &str) -> AppResult<&[StudySession]> {
        Ok(&self.subject(subject)?.sessions)
    }

    pub fn select_session(&mut self, subject: &str, id: &Uuid) -> AppResult<()> {
        self.session(subject, id)?;

        self.active = Some(ActiveSelection {
            subject: subject.to_string(),
            session_id: Some(*id),
        });

        Ok(())
    }

    pub fn delete_session(&mut self, subject: &str, id: &Uuid) -> AppResult<StudySession> {
        let parent = self.subject_mut(subject)?;
        let index = parent
            .sessions
            .iter()
            .position(|s| &s.id == id)
            .ok_or_else(|| AppError::NoSuchSession(id.to_string()))?;
        let removed = parent.sessions.remove(index);

        if let Some(active) = self.active.as_mut() {
            if active.subject == subject && active.session_id.as_ref() == Some(id) {
                active.session_id = None;
            }
        }

        Ok(removed)
    }

    /// EMPTY → GENERATING. Performed under the same lock as every other mutation,
    /// so at most one generation per session can be admitted.
    pub fn begin_generation(&mut self, subject: &str, id: &Uuid) -> AppResult<()> {
        let session = self.session_mut(subject, id)?;

        match session.state() {
            SessionState::Empty => {
                session.generating = true;
                Ok(())
            }
            SessionState::Generating => Err(AppError::GenerationInProgress(format!(
                "session {} is already generating a quiz",
                id
            ))),
            SessionState::Ready => Err(AppError::InvalidTransition(format!(
                "session {} already has a quiz; regenerate it first",
                id
            ))),
        }
    }

    /// GENERATING → EMPTY after a failed generation.
    pub fn abort_generation(&mut self, subject: &str, id: &Uuid) -> AppResult<()> {
        self.session_mut(subject, id)?.generating = false;
        Ok(())
    }

    pub fn attach_quiz(&mut self, subject: &str, id: &Uuid, artifact: QuizArtifact) -> AppResult<()> {
        let session = self.session_mut(subject, id)?;
        session.quiz = Some(artifact);
        session.generating = false;
        Ok(())
    }

    /// READY → EMPTY. Returns the discarded artifact, if any.
    pub fn clear_quiz(&mut self, subject: &str, id: &Uuid) -> AppResult<Option<QuizArtifact>> {
        let session = self.session_mut(subject, id)?;

        if session.generating {
            return Err(AppError::GenerationInProgress(format!(
                "session {} is generating a quiz",
                id
            )));
        }

        Ok(session.quiz.take())
    }
}
