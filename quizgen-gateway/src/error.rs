//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use quizgen_core::CoreError;
use quizgen_generator::GenerationError;

/// Errors that can occur during gateway request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// The request body is not a JSON object of the expected shape.
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    /// The topic is absent or empty.
    #[error("topic is required: {0}")]
    TopicRequired(#[from] CoreError),

    /// An error propagated from the generator bridge.
    #[error("question generation failed: {0}")]
    Generation(#[from] GenerationError),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            GatewayError::InvalidBody(_) => (StatusCode::BAD_REQUEST, "Invalid request body"),
            GatewayError::TopicRequired(_) => (StatusCode::BAD_REQUEST, "Topic is required"),
            GatewayError::Generation(err) => {
                // Full detail stays in the server log; clients get a generic message.
                tracing::error!(error = %err, "error generating questions");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to generate questions")
            }
        };
        (status, message).into_response()
    }
}
