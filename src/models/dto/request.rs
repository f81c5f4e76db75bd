use serde::Deserialize;
use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::models::domain::QuizStyle;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSubjectRequestDto {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

impl CreateSubjectRequestDto {
    /// Trimmed, validated subject name.
    pub fn into_name(self) -> AppResult<String> {
        let request = CreateSubjectRequestDto {
            name: self.name.trim().to_string(),
        };
        request.validate()?;
        Ok(request.name)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateSessionRequestDto {
    #[validate(length(max = 100))]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateQuizParams {
    pub style: QuizStyle,
}

/// Path segments addressing one session.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionPath {
    pub subject: String,
    pub session_id: String,
}

impl SessionPath {
    pub fn session_uuid(&self) -> AppResult<uuid::Uuid> {
        uuid::Uuid::parse_str(&self.session_id)
            .map_err(|_| AppError::NoSuchSession(self.session_id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_name_is_trimmed() {
        let request = CreateSubjectRequestDto {
            name: "  Biology ".to_string(),
        };
        assert_eq!(request.into_name().unwrap(), "Biology");
    }

    #[test]
    fn test_blank_subject_name_is_rejected() {
        let request = CreateSubjectRequestDto {
            name: "   ".to_string(),
        };
        assert!(matches!(
            request.into_name(),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_long_display_name_is_rejected() {
        let request = CreateSessionRequestDto {
            display_name: Some("x".repeat(101)),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_malformed_session_id_is_no_such_session() {
        let path = SessionPath {
            subject: "Biology".to_string(),
            session_id: "not-a-uuid".to_string(),
        };
        assert!(matches!(
            path.session_uuid(),
            Err(AppError::NoSuchSession(_))
        ));
    }
}
