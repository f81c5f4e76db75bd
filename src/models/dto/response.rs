use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::domain::{
    ActiveSelection, Citation, QuizArtifact, QuizDocument, QuizStyle, SessionState,
    SourceDocument, StudySession, Subject, SubjectCreation,
};

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubjectDto {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub session_count: usize,
}

impl From<&Subject> for SubjectDto {
    fn from(subject: &Subject) -> Self {
        SubjectDto {
            name: subject.name.clone(),
            created_at: subject.created_at,
            session_count: subject.sessions.len(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateSubjectResponse {
    pub name: String,
    pub outcome: SubjectCreation,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizSummaryDto {
    pub style: QuizStyle,
    pub generated_at: DateTime<Utc>,
    pub source: SourceDocument,
}

impl From<&QuizArtifact> for QuizSummaryDto {
    fn from(artifact: &QuizArtifact) -> Self {
        QuizSummaryDto {
            style: artifact.style,
            generated_at: artifact.generated_at,
            source: artifact.source.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StudySessionDto {
    pub id: Uuid,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
    pub state: SessionState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiz: Option<QuizSummaryDto>,
}

impl From<&StudySession> for StudySessionDto {
    fn from(session: &StudySession) -> Self {
        StudySessionDto {
            id: session.id,
            display_name: session.display_name.clone(),
            created_at: session.created_at,
            state: session.state(),
            quiz: session.quiz.as_ref().map(QuizSummaryDto::from),
        }
    }
}

impl From<StudySession> for StudySessionDto {
    fn from(session: StudySession) -> Self {
        StudySessionDto::from(&session)
    }
}

#[derive(Debug, Serialize)]
pub struct QuizDocumentDto {
    pub session_id: Uuid,
    pub summary_block: String,
    pub question_block: String,
    pub answer_block: String,
    pub citations: Vec<Citation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiz: Option<QuizSummaryDto>,
}

impl QuizDocumentDto {
    pub fn new(session_id: Uuid, document: QuizDocument, quiz: Option<&QuizArtifact>) -> Self {
        let citations = document.citations();
        QuizDocumentDto {
            session_id,
            summary_block: document.summary_block,
            question_block: document.question_block,
            answer_block: document.answer_block,
            citations,
            quiz: quiz.map(QuizSummaryDto::from),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ActiveSelectionDto {
    pub subject: Option<String>,
    pub session_id: Option<Uuid>,
}

impl From<Option<ActiveSelection>> for ActiveSelectionDto {
    fn from(active: Option<ActiveSelection>) -> Self {
        match active {
            Some(selection) => ActiveSelectionDto {
                subject: Some(selection.subject),
                session_id: selection.session_id,
            },
            None => ActiveSelectionDto {
                subject: None,
                session_id: None,
            },
        }
    }
}
