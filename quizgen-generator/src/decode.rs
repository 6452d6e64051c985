//! Decoding of generator stdout into question records.

use quizgen_core::Question;

/// Parse generator stdout as a JSON array of questions.
///
/// Surrounding whitespace (such as the trailing newline of `print`) is
/// accepted. Unknown fields on a question are ignored; missing ones are not.
///
/// # Errors
/// Returns the underlying [`serde_json::Error`] if `stdout` is not a JSON
/// array of question-shaped objects.
pub fn parse_questions(stdout: &[u8]) -> Result<Vec<Question>, serde_json::Error> {
    serde_json::from_slice(stdout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_questions_preserves_emitted_order() {
        let raw = br#"[
            {"id":"2","text":"b","options":["x"],"answer":"x"},
            {"id":"1","text":"a","options":["y","z"],"answer":"z"}
        ]"#;
        let questions = match parse_questions(raw) {
            Ok(q) => q,
            Err(e) => panic!("valid output must parse: {e}"),
        };
        let ids: Vec<&str> = questions.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, ["2", "1"]);
        assert_eq!(questions[1].options, ["y", "z"]);
    }

    #[test]
    fn parse_questions_accepts_trailing_newline() {
        assert!(parse_questions(b"[]\n").is_ok());
    }

    #[test]
    fn parse_questions_rejects_garbage() {
        assert!(parse_questions(b"garbage\n").is_err());
    }

    #[test]
    fn parse_questions_rejects_object_wrapper() {
        assert!(parse_questions(br#"{"questions":[]}"#).is_err());
    }

    #[test]
    fn parse_questions_rejects_non_string_options() {
        let raw = br#"[{"id":"1","text":"t","options":[1,2],"answer":"1"}]"#;
        assert!(parse_questions(raw).is_err());
    }

    proptest::proptest! {
        #[test]
        fn proptest_parse_questions_never_panics(
            data in proptest::collection::vec(proptest::prelude::any::<u8>(), 0..512usize),
        ) {
            let _ = parse_questions(&data);
        }
    }
}
