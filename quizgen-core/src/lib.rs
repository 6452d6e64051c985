//! Core types for the quizgen question generation gateway.
//!
//! Defines the question record returned to clients, the validated topic
//! and generation request, and the identifier used to correlate log lines
//! of a single generation attempt.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod id;
pub mod question;
pub mod request;

pub use error::CoreError;
pub use id::GenerationId;
pub use question::Question;
pub use request::{GenerationRequest, Topic};
