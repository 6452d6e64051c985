use serde::{Deserialize, Serialize};

/// A single generated quiz question.
///
/// Questions exist only for the lifetime of one response. The `answer` is
/// expected to be one of `options` but this is not checked anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Question {
    /// Opaque identifier, unique within one response.
    pub id: String,
    /// The question prompt.
    pub text: String,
    /// Answer choices in presentation order.
    pub options: Vec<String>,
    /// The correct answer text.
    pub answer: String,
}

impl Question {
    /// Create a question from its parts.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        options: Vec<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            options,
            answer: answer.into(),
        }
    }
}
