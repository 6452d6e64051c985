//! Subprocess generator: runs the external question generation script.
//!
//! The topic is handed to the child as a single argv entry, never through a
//! shell, so its contents cannot be interpreted as commands. stdout carries
//! the JSON payload; stderr is captured separately for diagnostics only.

use std::process::{Output, Stdio};
use std::time::Instant;

use async_trait::async_trait;
use quizgen_core::{GenerationId, Question, Topic};
use tokio::process::Command;

use crate::{parse_questions, GenerationError, Generator, GeneratorConfig};

/// Generates questions by running `<interpreter> <script> <topic>`.
///
/// # Cancel Safety
/// Cancel safe. Dropping the future kills the child via `kill_on_drop`.
/// Only the direct child is killed; processes the script itself started
/// (for example a `sleep` run by a shell script) are not reaped and keep
/// running until they exit on their own.
#[derive(Debug, Clone)]
pub struct ScriptGenerator {
    config: GeneratorConfig,
}

impl ScriptGenerator {
    /// Create a generator that runs the configured script.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    fn build_command(&self, topic: &Topic) -> Command {
        let mut cmd = Command::new(&self.config.interpreter);
        cmd.arg(&self.config.script)
            .arg(topic.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }

    /// Spawn the script and wait for it to exit, bounded by the configured
    /// timeout.
    async fn run(&self, topic: &Topic) -> Result<Output, GenerationError> {
        let child = self
            .build_command(topic)
            .spawn()
            .map_err(|source| GenerationError::SpawnFailed {
                program: self.config.interpreter.clone(),
                source,
            })?;

        // Dropping `wait` on timeout drops the child, which kills it.
        let wait = child.wait_with_output();
        let output = match self.config.timeout {
            Some(timeout) => tokio::time::timeout(timeout, wait)
                .await
                .map_err(|_| GenerationError::TimedOut { timeout })??,
            None => wait.await?,
        };
        Ok(output)
    }
}

#[async_trait]
impl Generator for ScriptGenerator {
    async fn generate(&self, topic: &Topic) -> Result<Vec<Question>, GenerationError> {
        let generation_id = GenerationId::new();
        let start = Instant::now();

        tracing::debug!(
            %generation_id,
            %topic,
            interpreter = %self.config.interpreter.display(),
            script = %self.config.script.display(),
            "spawning question generator"
        );

        let output = self.run(topic).await?;

        if !output.status.success() {
            tracing::warn!(
                %generation_id,
                status = %output.status,
                elapsed_ms = start.elapsed().as_millis(),
                "question generator exited unsuccessfully"
            );
            return Err(GenerationError::ScriptFailed {
                status: output.status,
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let questions = parse_questions(&output.stdout).map_err(|source| {
            tracing::warn!(%generation_id, error = %source, "question generator output is malformed");
            GenerationError::MalformedOutput {
                source,
                output: String::from_utf8_lossy(&output.stdout).into_owned(),
            }
        })?;

        if !output.stderr.is_empty() {
            tracing::debug!(
                %generation_id,
                stderr = %String::from_utf8_lossy(&output.stderr),
                "question generator wrote to stderr"
            );
        }

        tracing::info!(
            %generation_id,
            questions = questions.len(),
            elapsed_ms = start.elapsed().as_millis(),
            "question generation complete"
        );

        Ok(questions)
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsStr;

    use super::*;

    fn topic(s: &str) -> Topic {
        match Topic::new(s) {
            Ok(t) => t,
            Err(e) => panic!("invalid test topic: {e}"),
        }
    }

    #[test]
    fn build_command_passes_topic_as_single_argument() {
        let generator = ScriptGenerator::new(GeneratorConfig::new("python3", "/app/gen.py"));
        let cmd = generator.build_command(&topic("rust; rm -rf / && echo $HOME"));
        let std_cmd = cmd.as_std();
        assert_eq!(std_cmd.get_program(), OsStr::new("python3"));
        let args: Vec<&OsStr> = std_cmd.get_args().collect();
        assert_eq!(
            args,
            [OsStr::new("/app/gen.py"), OsStr::new("rust; rm -rf / && echo $HOME")],
            "topic must be passed verbatim as one argv entry"
        );
    }

    #[tokio::test]
    async fn generate_missing_interpreter_returns_spawn_failed() {
        let generator = ScriptGenerator::new(GeneratorConfig::new(
            "/nonexistent/quizgen-interpreter",
            "/nonexistent/script.py",
        ));
        let result = generator.generate(&topic("history")).await;
        assert!(
            matches!(result, Err(GenerationError::SpawnFailed { .. })),
            "missing interpreter must map to SpawnFailed, got {result:?}"
        );
    }
}
