//! Question generator abstraction trait.
//!
//! Lets the gateway talk to the subprocess bridge, a concurrency-limited
//! wrapper around it, or an in-memory stub without knowing which.

use std::sync::Arc;

use async_trait::async_trait;
use quizgen_core::{Question, Topic};

use crate::GenerationError;

/// Produces quiz questions for a topic.
///
/// Implementations must be `Send + Sync` to be shared across request handlers.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Generate questions for `topic`, in the order the source emitted them.
    ///
    /// Output is all-or-nothing: either the complete list or an error.
    ///
    /// # Errors
    /// Returns a [`GenerationError`] describing why no questions were produced.
    async fn generate(&self, topic: &Topic) -> Result<Vec<Question>, GenerationError>;
}

/// A generator shared between request handlers.
pub type SharedGenerator = Arc<dyn Generator>;

#[async_trait]
impl<G: Generator + ?Sized> Generator for Arc<G> {
    async fn generate(&self, topic: &Topic) -> Result<Vec<Question>, GenerationError> {
        (**self).generate(topic).await
    }
}
