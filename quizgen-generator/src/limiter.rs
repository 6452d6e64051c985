//! Concurrency limiter in front of a [`Generator`].
//!
//! Every generation of the subprocess bridge is a child process, so the
//! number of in-flight generations is the number of live children. Callers
//! over the limit wait for a permit rather than being rejected.

use async_trait::async_trait;
use quizgen_core::{Question, Topic};
use tokio::sync::Semaphore;

use crate::{GenerationError, Generator};

/// Wraps a [`Generator`] so that at most `max_concurrent` generations run
/// at the same time.
pub struct BoundedGenerator<G: Generator> {
    inner: G,
    permits: Semaphore,
    max_concurrent: usize,
}

impl<G: Generator> BoundedGenerator<G> {
    /// Wrap `inner` with a limit of `max_concurrent` (at least 1).
    #[must_use]
    pub fn new(inner: G, max_concurrent: usize) -> Self {
        let max_concurrent = max_concurrent.max(1);
        Self {
            inner,
            permits: Semaphore::new(max_concurrent),
            max_concurrent,
        }
    }

    /// The configured concurrency limit.
    #[must_use]
    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }

    /// Number of generations that could start right now without waiting.
    #[must_use]
    pub fn available_permits(&self) -> usize {
        self.permits.available_permits()
    }

    /// Stop admitting new generations.
    ///
    /// Generations already running finish normally; waiting and future
    /// callers get [`GenerationError::Unavailable`].
    pub fn close(&self) {
        self.permits.close();
    }
}

#[async_trait]
impl<G: Generator> Generator for BoundedGenerator<G> {
    async fn generate(&self, topic: &Topic) -> Result<Vec<Question>, GenerationError> {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| GenerationError::Unavailable)?;
        self.inner.generate(topic).await
    }
}
