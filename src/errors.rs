use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("No such subject: {0}")]
    NoSuchSubject(String),

    #[error("No such session: {0}")]
    NoSuchSession(String),

    #[error("Extraction failed: {0}")]
    ExtractionFailure(String),

    #[error("Generation failed: {0}")]
    GenerationFailure(String),

    #[error("Malformed quiz document: {0}")]
    MalformedQuizDocument(String),

    #[error("Generation already in progress: {0}")]
    GenerationInProgress(String),

    #[error("Invalid state transition: {0}")]
    InvalidTransition(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NoSuchSubject(_) => "NO_SUCH_SUBJECT",
            AppError::NoSuchSession(_) => "NO_SUCH_SESSION",
            AppError::ExtractionFailure(_) => "EXTRACTION_FAILURE",
            AppError::GenerationFailure(_) => "GENERATION_FAILURE",
            AppError::MalformedQuizDocument(_) => "MALFORMED_QUIZ_DOCUMENT",
            AppError::GenerationInProgress(_) => "GENERATION_IN_PROGRESS",
            AppError::InvalidTransition(_) => "INVALID_TRANSITION",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub kind: &'static str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NoSuchSubject(_) => StatusCode::NOT_FOUND,
            AppError::NoSuchSession(_) => StatusCode::NOT_FOUND,
            AppError::ExtractionFailure(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::GenerationFailure(_) => StatusCode::BAD_GATEWAY,
            AppError::MalformedQuizDocument(_) => StatusCode::BAD_GATEWAY,
            AppError::GenerationInProgress(_) => StatusCode::CONFLICT,
            AppError::InvalidTransition(_) => StatusCode::CONFLICT,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
            kind: self.error_code(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::GenerationFailure(format!("HTTP request failed: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
