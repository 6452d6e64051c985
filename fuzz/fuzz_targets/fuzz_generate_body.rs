//! Fuzz target: `POST /generate-questions` body parsing.
//!
//! Arbitrary bytes fed to the request body parser must never panic; every
//! input is either a valid request or a client error.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(request) = quizgen_gateway::routes::parse_generate_body(data) {
        assert!(!request.topic.as_str().is_empty());
    }
});
