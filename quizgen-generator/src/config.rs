//! Generator process configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Default deadline for a single generator run.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Default number of generator processes allowed to run at once.
pub const DEFAULT_MAX_CONCURRENT: usize = 8;

/// How to invoke the external question generator.
///
/// The generator is run as `<interpreter> <script> <topic>`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GeneratorConfig {
    /// Program that runs the script, e.g. `python3`.
    pub interpreter: PathBuf,

    /// Script passed to the interpreter as its first argument.
    pub script: PathBuf,

    /// Deadline for one run. `None` waits for the process indefinitely.
    pub timeout: Option<Duration>,

    /// Maximum number of generator processes running at the same time.
    pub max_concurrent: usize,
}

impl GeneratorConfig {
    /// Create a config with the default timeout and concurrency limit.
    ///
    /// # Arguments
    /// - `interpreter`: program used to run the script
    /// - `script`: path to the generator script
    #[must_use]
    pub fn new(interpreter: impl Into<PathBuf>, script: impl Into<PathBuf>) -> Self {
        Self {
            interpreter: interpreter.into(),
            script: script.into(),
            timeout: Some(DEFAULT_TIMEOUT),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
        }
    }

    /// Replace the run deadline. `None` disables it.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the concurrency limit. Values below 1 are raised to 1.
    #[must_use]
    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent.max(1);
        self
    }
}
