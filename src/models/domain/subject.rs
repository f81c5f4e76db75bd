use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::domain::study_session::StudySession;

/// A named folder of study sessions. Sessions keep their creation order.
#[derive(Clone, Debug, PartialEq)]
pub struct Subject {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub sessions: Vec<StudySession>,
}

impl Subject {
    pub fn new(name: &str) -> Self {
        Subject {
            name: name.to_string(),
            created_at: Utc::now(),
            sessions: Vec::new(),
        }
    }

    pub fn session(&self, id: &Uuid) -> Option<&StudySession> {
        self.sessions.iter().find(|s| &s.id == id)
    }

    pub fn session_mut(&mut self, id: &Uuid) -> Option<&mut StudySession> {
        self.sessions.iter_mut().find(|s| &s.id == id)
    }
}
