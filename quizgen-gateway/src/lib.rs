//! HTTP gateway for quizgen.
//!
//! Accepts a topic over HTTP, delegates question generation to a
//! [`quizgen_generator::Generator`], and maps the outcome onto HTTP
//! responses without leaking generator diagnostics to clients.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
