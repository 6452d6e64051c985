//! Error types for the generator crate.

use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

/// Errors that can occur while generating questions for a topic.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GenerationError {
    /// The generator process could not be started.
    #[error("failed to spawn {}: {source}", .program.display())]
    SpawnFailed {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The generator process exited unsuccessfully.
    #[error("generator exited with {status}, stdout: {stdout:?}, stderr: {stderr:?}")]
    ScriptFailed {
        status: ExitStatus,
        stdout: String,
        stderr: String,
    },

    /// The generator exited cleanly but its stdout is not a question array.
    #[error("failed to decode generator output: {source}, output: {output:?}")]
    MalformedOutput {
        #[source]
        source: serde_json::Error,
        output: String,
    },

    /// The generator did not exit before the deadline and was killed.
    #[error("generator did not exit within {timeout:?}")]
    TimedOut { timeout: Duration },

    /// The concurrency limiter has been closed; no new generations are admitted.
    #[error("generator is not accepting new work")]
    Unavailable,

    /// I/O failure while collecting the output of a running generator.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_output_display_includes_raw_output() {
        let source = match serde_json::from_str::<serde_json::Value>("garbage") {
            Ok(v) => panic!("garbage must not parse, got {v}"),
            Err(e) => e,
        };
        let err = GenerationError::MalformedOutput {
            source,
            output: "garbage\n".to_owned(),
        };
        let msg = err.to_string();
        assert!(msg.contains("garbage"), "Display must include the raw output");
    }

    #[test]
    fn spawn_failed_display_names_program() {
        let err = GenerationError::SpawnFailed {
            program: PathBuf::from("/opt/python3"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("/opt/python3"));
    }
}
