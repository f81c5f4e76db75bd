use std::env;
use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: String,
    pub openai_api_key: SecretString,
    pub openai_base_url: String,
    pub quiz_model: String,
    pub quiz_temperature: f32,
    pub quiz_max_tokens: u32,
    pub quiz_generation_attempts: u32,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            openai_api_key: SecretString::from(env::var("OPENAI_API_KEY").unwrap_or_default()),
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com".to_string()),
            quiz_model: env::var("QUIZ_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),
            quiz_temperature: env::var("QUIZ_TEMPERATURE")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(0.5),
            quiz_max_tokens: env::var("QUIZ_MAX_TOKENS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(4096),
            quiz_generation_attempts: env::var("QUIZ_GENERATION_ATTEMPTS")
                .ok()
                .and_then(|a| a.parse::<u32>().ok())
                .unwrap_or(2)
                .max(1),
            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|b| b.parse().ok())
                .unwrap_or(20 * 1024 * 1024),
        }
    }

    /// Validate that the generation backend is usable
    pub fn validate_for_production(&self) -> AppResult<()> {
        use secrecy::ExposeSecret;

        if self.openai_api_key.expose_secret().trim().is_empty() {
            return Err(AppError::ValidationError(
                "OPENAI_API_KEY is not set; quiz generation cannot run".to_string(),
            ));
        }

        if !self.openai_base_url.starts_with("http://") && !self.openai_base_url.starts_with("https://") {
            return Err(AppError::ValidationError(format!(
                "OPENAI_BASE_URL must be an http(s) URL, got '{}'",
                self.openai_base_url
            )));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: "http://localhost:3000".to_string(),
            openai_api_key: SecretString::from("test_api_key".to_string()),
            openai_base_url: "http://127.0.0.1:9".to_string(),
            quiz_model: "gpt-4o".to_string(),
            quiz_temperature: 0.5,
            quiz_max_tokens: 4096,
            quiz_generation_attempts: 2,
            max_upload_bytes: 1024 * 1024,
        }
    }
}
