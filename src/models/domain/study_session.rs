use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::quiz_artifact::QuizArtifact;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionState {
    Empty,
    Generating,
    Ready,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::Empty => write!(f, "EMPTY"),
            SessionState::Generating => write!(f, "GENERATING"),
            SessionState::Ready => write!(f, "READY"),
        }
    }
}

/// One study occasion inside a subject, holding at most one quiz.
#[derive(Clone, Debug, PartialEq)]
pub struct StudySession {
    pub id: Uuid,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
    pub quiz: Option<QuizArtifact>,
    pub(crate) generating: bool,
}

const DEFAULT_NAME_FORMAT: &str = "%Y-%m-%d %H:%M";

impl StudySession {
    /// A blank display name is replaced by the session's own creation time.
    pub fn new(display_name: &str) -> Self {
        let created_at = Utc::now();
        let display_name = match display_name.trim() {
            "" => created_at.format(DEFAULT_NAME_FORMAT).to_string(),
            name => name.to_string(),
        };

        StudySession {
            id: Uuid::new_v4(),
            display_name,
            created_at,
            quiz: None,
            generating: false,
        }
    }

    pub fn state(&self) -> SessionState {
        if self.generating {
            SessionState::Generating
        } else if self.quiz.is_some() {
            SessionState::Ready
        } else {
            SessionState::Empty
        }
    }
}
