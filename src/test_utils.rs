#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::PageText;

    /// Two pages of biology notes
    pub fn sample_pages() -> Vec<PageText> {
        vec![
            PageText::new(1, "Cells are the basic unit of life."),
            PageText::new(2, "Mitochondria produce ATP."),
        ]
    }

    /// A well-formed generated quiz with both section delimiters
    pub fn sample_quiz_raw() -> String {
        [
            "### 1. Overview summary",
            "Cell biology grew out of microscopy and moves from cells to organelles.",
            "### 2. Key keywords",
            "cell, organelle, mitochondria, ATP, life",
            "---",
            "### 3. Quiz questions (answers excluded)",
            "Q1. What is the basic unit of life?",
            "Q2. Which organelle produces ATP?",
            "Q3. What molecule stores cellular energy?",
            "Q4. Are all living things made of cells?",
            "Q5. Where is ATP produced?",
            "---",
            "### 4. Answers and explanations (with sources)",
            "A1. The cell. <small>Page 1: \"Cells are the basic unit of life\"</small>",
            "A2. Mitochondria. <small>Page 2: \"Mitochondria produce ATP\"</small>",
            "A3. ATP. <small>Page 2: \"produce ATP\"</small>",
            "A4. Yes. <small>Page 1: \"basic unit of life\"</small>",
            "A5. In mitochondria. <small>Page 2: \"Mitochondria produce ATP\"</small>",
        ]
        .join("\n")
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::QuizDocument;

    #[test]
    fn test_sample_quiz_parses_with_five_citations() {
        let document = QuizDocument::parse(&sample_quiz_raw()).unwrap();

        assert_eq!(document.citations().len(), 5);
        assert!(document.question_block.contains("Q5."));
    }

    #[test]
    fn test_sample_pages_are_ordered() {
        let pages = sample_pages();
        assert!(pages.windows(2).all(|w| w[0].page_number < w[1].page_number));
    }
}
