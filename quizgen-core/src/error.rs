/// Errors produced by the `quizgen-core` crate.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum CoreError {
    /// A generation was requested with an empty topic string.
    #[error("topic must not be empty")]
    EmptyTopic,
}
