use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::models::domain::quiz_style::QuizStyle;

/// What a quiz was generated from. The document bytes themselves are not kept.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceDocument {
    pub sha256: String,
    pub byte_len: usize,
    pub page_count: usize,
}

impl SourceDocument {
    pub fn describe(document: &[u8], page_count: usize) -> Self {
        SourceDocument {
            sha256: format!("{:x}", Sha256::digest(document)),
            byte_len: document.len(),
            page_count,
        }
    }
}

/// Raw generated quiz text for one session. Never edited in place; regeneration replaces it.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct QuizArtifact {
    pub raw: String,
    pub style: QuizStyle,
    pub source: SourceDocument,
    pub generated_at: DateTime<Utc>,
}

impl QuizArtifact {
    pub fn new(raw: String, style: QuizStyle, source: SourceDocument) -> Self {
        QuizArtifact {
            raw,
            style,
            source,
            generated_at: Utc::now(),
        }
    }
}
