use std::sync::Arc;

use crate::{
    constants::{QUIZ_PROMPT_TEMPLATE, QUIZ_SECTION_DELIMITER},
    errors::{AppError, AppResult},
    models::domain::{PageText, QuizStyle},
    services::model_service::QuizGenerator,
};

pub struct QuizComposer {
    generator: Arc<dyn QuizGenerator>,
}

impl QuizComposer {
    pub fn new(generator: Arc<dyn QuizGenerator>) -> Self {
        Self { generator }
    }

    /// One generation call over the whole document. No chunking.
    pub async fn compose(&self, pages: &[PageText], style: QuizStyle) -> AppResult<String> {
        if pages.is_empty() {
            return Err(AppError::ExtractionFailure(
                "no page text to compose a quiz from".to_string(),
            ));
        }

        let prompt = render_prompt(&build_context(pages), style);
        let raw = self.generator.generate(&prompt).await?;

        if raw.trim().is_empty() {
            return Err(AppError::GenerationFailure(
                "model returned an empty response".to_string(),
            ));
        }

        Ok(raw)
    }
}

/// `[Page N] content` per page, ascending page order, newline separated.
pub fn build_context(pages: &[PageText]) -> String {
    let mut ordered: Vec<&PageText> = pages.iter().collect();
    ordered.sort_by_key(|p| p.page_number);

    ordered
        .iter()
        .map(|p| format!("[Page {}] {}", p.page_number, p.content))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_prompt(context: &str, style: QuizStyle) -> String {
    QUIZ_PROMPT_TEMPLATE
        .replace("{delimiter}", QUIZ_SECTION_DELIMITER)
        .replace("{quiz_type}", style.prompt_label())
        .replace("{context}", context)
}
