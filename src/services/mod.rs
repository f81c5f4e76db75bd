pub mod model_service;
pub mod page_extractor;
pub mod quiz_composer;
pub mod session_controller;

pub use model_service::{OpenAiQuizGenerator, QuizGenerator};
pub use page_extractor::{PageTextExtractor, PdfPageExtractor};
pub use quiz_composer::QuizComposer;
pub use session_controller::SessionController;
