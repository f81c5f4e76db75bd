use serde::{Deserialize, Serialize};

/// Text of one physical page. Pages without extractable text never produce a `PageText`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PageText {
    pub page_number: u32,
    pub content: String,
}

impl PageText {
    pub fn new(page_number: u32, content: impl Into<String>) -> Self {
        PageText {
            page_number,
            content: content.into(),
        }
    }
}
