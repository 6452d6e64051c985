//! Generator bridge for the quizgen gateway.
//!
//! Runs the external question generation script for a topic, decodes its
//! stdout into question records, and bounds how many scripts run at once.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod decode;
pub mod error;
pub mod generator;
pub mod limiter;
pub mod script;

pub use config::GeneratorConfig;
pub use decode::parse_questions;
pub use error::GenerationError;
pub use generator::{Generator, SharedGenerator};
pub use limiter::BoundedGenerator;
pub use script::ScriptGenerator;
