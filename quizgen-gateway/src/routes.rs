//! Axum route handlers for the quizgen gateway API.

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use quizgen_core::{GenerationRequest, Question};
use quizgen_generator::{Generator, SharedGenerator};
use serde::Deserialize;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::error::GatewayError;

/// Payload of `GET /success`.
pub const SUCCESS_MESSAGE: &str = "Server is running successfully!";

/// Largest request body accepted; larger bodies get `413 Payload Too Large`.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

// ── Request types ─────────────────────────────────────────────────────────────

/// Wire shape of the `POST /generate-questions` body.
///
/// `Topic` is accepted as a spelling of `topic` for clients written against
/// case-insensitive JSON decoders.
#[derive(Debug, Deserialize)]
pub struct GenerateQuestionsBody {
    #[serde(alias = "Topic")]
    pub topic: Option<String>,
}

/// Decode and validate a `POST /generate-questions` body.
///
/// A literal `null` body, a missing `topic`, and `"topic": null` are all
/// treated as an empty topic.
///
/// # Errors
/// Returns [`GatewayError::InvalidBody`] if `bytes` is not a single JSON value
/// of the expected shape, or [`GatewayError::TopicRequired`] if the topic is
/// missing or empty.
pub fn parse_generate_body(bytes: &[u8]) -> Result<GenerationRequest, GatewayError> {
    let body: Option<GenerateQuestionsBody> = serde_json::from_slice(bytes)?;
    Ok(GenerationRequest::from_raw(body.and_then(|b| b.topic))?)
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router around the given generator.
///
/// Requests with a method a route does not serve get `405 Method not allowed`
/// and never reach the generator. That includes `HEAD` and any `OPTIONS`
/// request that is not a CORS preflight.
pub fn create_router(generator: SharedGenerator, cors: CorsLayer) -> Router {
    Router::new()
        .route(
            "/success",
            get(success)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .route(
            "/generate-questions",
            post(generate_questions).fallback(method_not_allowed),
        )
        .with_state(generator)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(middleware::from_fn(reject_non_preflight_options))
}

/// The CORS layer answers every `OPTIONS` request; only a real preflight,
/// one carrying `Access-Control-Request-Method`, may reach it.
async fn reject_non_preflight_options(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS
        && !req
            .headers()
            .contains_key(header::ACCESS_CONTROL_REQUEST_METHOD)
    {
        return method_not_allowed().await.into_response();
    }
    next.run(req).await
}

/// CORS policy for browser clients: credentialed requests from `origins`
/// only, with any request header.
///
/// Request headers are mirrored rather than answered with `*`, which browsers
/// reject on credentialed requests.
#[must_use]
pub fn cors_layer(origins: &[HeaderValue]) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins.iter().cloned()))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /success` — liveness probe.
pub async fn success() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({"message": SUCCESS_MESSAGE})),
    )
}

/// `POST /generate-questions` — generate questions for a topic.
///
/// # Errors
/// Returns [`GatewayError::InvalidBody`] or [`GatewayError::TopicRequired`]
/// before the generator is invoked, or [`GatewayError::Generation`] if the
/// generator fails.
pub async fn generate_questions(
    State(generator): State<SharedGenerator>,
    body: Bytes,
) -> Result<Json<Vec<Question>>, GatewayError> {
    let request = parse_generate_body(&body)?;
    let questions = generator.generate(&request.topic).await?;
    Ok(Json(questions))
}

async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}
