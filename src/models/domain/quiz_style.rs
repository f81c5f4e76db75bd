use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuizStyle {
    ShortAnswer,
    MultipleChoice,
    TrueFalse,
}

impl QuizStyle {
    /// Wording used inside the generation prompt.
    pub fn prompt_label(&self) -> &'static str {
        match self {
            QuizStyle::ShortAnswer => "short answer",
            QuizStyle::MultipleChoice => "multiple choice (four options, one correct)",
            QuizStyle::TrueFalse => "true/false (O/X)",
        }
    }
}

impl std::fmt::Display for QuizStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizStyle::ShortAnswer => write!(f, "SHORT_ANSWER"),
            QuizStyle::MultipleChoice => write!(f, "MULTIPLE_CHOICE"),
            QuizStyle::TrueFalse => write!(f, "TRUE_FALSE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_deserializes_from_wire_name() {
        let style: QuizStyle = serde_json::from_str("\"MULTIPLE_CHOICE\"").unwrap();
        assert_eq!(style, QuizStyle::MultipleChoice);
        assert_eq!(style.to_string(), "MULTIPLE_CHOICE");
    }

    #[test]
    fn test_unknown_style_is_rejected() {
        let result: Result<QuizStyle, _> = serde_json::from_str("\"ESSAY\"");
        assert!(result.is_err());
    }
}
