use std::fmt;

use crate::CoreError;

/// The subject questions are generated for. Never empty.
///
/// Only the empty string is rejected; whitespace-only topics are passed
/// through to the generator untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Topic(String);

impl Topic {
    /// Validate and wrap a topic string.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyTopic`] if `value` is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, CoreError> {
        let value = value.into();
        if value.is_empty() {
            return Err(CoreError::EmptyTopic);
        }
        Ok(Self(value))
    }

    /// Returns the topic as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated request to generate questions for a topic.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GenerationRequest {
    /// The topic to generate questions for.
    pub topic: Topic,
}

impl GenerationRequest {
    /// Build a request from an optional raw topic.
    ///
    /// A missing topic is treated the same as an empty one.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyTopic`] if `topic` is `None` or empty.
    pub fn from_raw(topic: Option<String>) -> Result<Self, CoreError> {
        let topic = Topic::new(topic.unwrap_or_default())?;
        Ok(Self { topic })
    }
}
