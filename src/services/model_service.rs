use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    constants::QUIZ_SYSTEM_PROMPT,
    errors::{AppError, AppResult},
};

/// Language-model capability: fully rendered prompt in, plain text out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> AppResult<String>;
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// OpenAI-compatible chat-completions backend.
pub struct OpenAiQuizGenerator {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiQuizGenerator {
    pub fn from_config(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.openai_api_key.clone(),
            base_url: config.openai_base_url.trim_end_matches('/').to_string(),
            model: config.quiz_model.clone(),
            temperature: config.quiz_temperature,
            max_tokens: config.quiz_max_tokens,
        }
    }

    fn request_body<'a>(&'a self, prompt: &'a str) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: QUIZ_SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

#[async_trait]
impl QuizGenerator for OpenAiQuizGenerator {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        log::debug!("Requesting quiz from {} with model {}", url, self.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&self.request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::GenerationFailure(format!(
                "model API returned {}: {}",
                status.as_u16(),
                body
            )));
        }

        let completion: ChatCompletionResponse = response.json().await?;
        first_choice_text(completion)
    }
}

fn first_choice_text(completion: ChatCompletionResponse) -> AppResult<String> {
    let content = completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| AppError::GenerationFailure("No response choices received".to_string()))?;

    if content.trim().is_empty() {
        return Err(AppError::GenerationFailure(
            "model returned an empty response".to_string(),
        ));
    }

    Ok(content)
}
