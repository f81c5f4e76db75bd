pub mod quiz_prompt;

pub use quiz_prompt::{QUIZ_PROMPT_TEMPLATE, QUIZ_SECTION_DELIMITER, QUIZ_SYSTEM_PROMPT};
