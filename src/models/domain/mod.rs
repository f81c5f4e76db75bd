pub mod page_text;
pub mod quiz_artifact;
pub mod quiz_document;
pub mod quiz_style;
pub mod study_hierarchy;
pub mod study_session;
pub mod subject;
pub use page_text::PageText;
pub use quiz_artifact::{QuizArtifact, SourceDocument};
pub use quiz_document::{Citation, QuizDocument};
pub use quiz_style::QuizStyle;
pub use study_hierarchy::{ActiveSelection, StudyHierarchy, SubjectCreation};
pub use study_session::{SessionState, StudySession};
pub use subject::Subject;
