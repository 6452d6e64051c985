//! Fuzz target: generator stdout decoder.
//!
//! Whatever the generator script prints, decoding must either yield
//! questions or an error, never a panic.
#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = quizgen_generator::parse_questions(data);
});
