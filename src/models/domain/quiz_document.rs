use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::QUIZ_SECTION_DELIMITER;
use crate::errors::{AppError, AppResult};

static CITATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bpage\s*(\d+)\s*[:：]\s*(.+)").expect("CITATION_REGEX is a valid regex pattern")
});

static MARKUP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]+>").expect("MARKUP_REGEX is a valid regex pattern"));

/// A generated quiz split into its three sections. Blocks are kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizDocument {
    pub summary_block: String,
    pub question_block: String,
    pub answer_block: String,
}

/// Page reference backing one answer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Citation {
    pub page_number: u32,
    pub phrase: String,
}

impl QuizDocument {
    /// Split raw generated text on the section delimiter.
    ///
    /// The first two delimiters are structural. Anything after the second one,
    /// further delimiters included, belongs to the answer block.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let mut parts = raw.splitn(3, QUIZ_SECTION_DELIMITER);

        match (parts.next(), parts.next(), parts.next()) {
            (Some(summary), Some(questions), Some(answers)) => Ok(QuizDocument {
                summary_block: summary.to_string(),
                question_block: questions.to_string(),
                answer_block: answers.to_string(),
            }),
            _ => Err(AppError::MalformedQuizDocument(format!(
                "expected 2 '{}' section delimiters, found {}",
                QUIZ_SECTION_DELIMITER,
                raw.matches(QUIZ_SECTION_DELIMITER).count()
            ))),
        }
    }

    /// `Page N: phrase` citations found in the answer block, one per line at most.
    pub fn citations(&self) -> Vec<Citation> {
        self.answer_block
            .lines()
            .filter_map(|line| {
                let line = MARKUP_REGEX.replace_all(line, "");
                let captures = CITATION_REGEX.captures(&line)?;
                let page_number = captures.get(1)?.as_str().parse().ok()?;
                let phrase = clean_phrase(captures.get(2)?.as_str());

                (!phrase.is_empty()).then(|| Citation {
                    page_number,
                    phrase,
                })
            })
            .collect()
    }
}

fn clean_phrase(phrase: &str) -> String {
    phrase
        .trim()
        .trim_matches(|c: char| {
            c.is_whitespace()
                || matches!(c, '"' | '\'' | '“' | '”' | '‘' | '’' | '*' | '_' | '`' | '(' | ')' | '[' | ']')
        })
        .to_string()
}
