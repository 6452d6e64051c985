//! Gateway configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! - `PORT` - TCP port to listen on, all interfaces (default: `8080`)
//! - `QUIZGEN_INTERPRETER` - program that runs the generator script (default: `python3`)
//! - `QUIZGEN_SCRIPT` - generator script path (default: `/app/generate_questions.py`)
//! - `QUIZGEN_TIMEOUT_SECS` - per-run deadline, `0` disables it (default: `120`)
//! - `QUIZGEN_MAX_CONCURRENT` - generator processes allowed at once (default: `8`)
//! - `QUIZGEN_ALLOWED_ORIGINS` - comma-separated CORS origins (default: the
//!   production frontend and `http://localhost:3000`)
//!
//! Unset and empty variables fall back to their defaults. Set but invalid
//! values are an error.

use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use axum::http::HeaderValue;
use quizgen_generator::GeneratorConfig;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_INTERPRETER: &str = "python3";
pub const DEFAULT_SCRIPT: &str = "/app/generate_questions.py";
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = [
    "https://enchanting-truffle-462314.netlify.app",
    "http://localhost:3000",
];

/// A configuration value could not be used.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// An environment variable is set to an unusable value.
    #[error("invalid value {value:?} for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Everything the gateway binary needs to start.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct GatewayConfig {
    /// Address the HTTP listener binds to.
    pub listen_addr: SocketAddr,
    /// Origins allowed to make credentialed cross-origin requests.
    pub allowed_origins: Vec<HeaderValue>,
    /// How to run the question generator.
    pub generator: GeneratorConfig,
}

impl GatewayConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] naming the first unusable variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] naming the first unusable variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = parse_var("PORT", get("PORT"))?.unwrap_or(DEFAULT_PORT);

        let interpreter =
            get("QUIZGEN_INTERPRETER").unwrap_or_else(|| DEFAULT_INTERPRETER.to_owned());
        let script = get("QUIZGEN_SCRIPT").unwrap_or_else(|| DEFAULT_SCRIPT.to_owned());
        let mut generator = GeneratorConfig::new(interpreter, script);

        let timeout_secs = parse_var::<u64>("QUIZGEN_TIMEOUT_SECS", get("QUIZGEN_TIMEOUT_SECS"))?;
        if let Some(secs) = timeout_secs {
            generator = generator.with_timeout((secs > 0).then(|| Duration::from_secs(secs)));
        }
        let max_concurrent =
            parse_var::<usize>("QUIZGEN_MAX_CONCURRENT", get("QUIZGEN_MAX_CONCURRENT"))?;
        if let Some(max) = max_concurrent {
            if max == 0 {
                return Err(ConfigError::Invalid {
                    var: "QUIZGEN_MAX_CONCURRENT",
                    value: max.to_string(),
                    reason: "must be at least 1".to_owned(),
                });
            }
            generator = generator.with_max_concurrent(max);
        }

        let allowed_origins = match get("QUIZGEN_ALLOWED_ORIGINS") {
            Some(raw) => parse_origins(&raw)?,
            None => DEFAULT_ALLOWED_ORIGINS
                .into_iter()
                .map(HeaderValue::from_static)
                .collect(),
        };

        Ok(Self {
            listen_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
            allowed_origins,
            generator,
        })
    }
}

fn parse_var<T>(var: &'static str, value: Option<String>) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .map(|raw| {
            let parsed = raw.trim().parse::<T>();
            parsed.map_err(|e| ConfigError::Invalid {
                var,
                reason: e.to_string(),
                value: raw,
            })
        })
        .transpose()
}

fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    let origins = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(|o| {
            if o == "*" {
                return Err(ConfigError::Invalid {
                    var: "QUIZGEN_ALLOWED_ORIGINS",
                    value: raw.to_owned(),
                    reason: "wildcard origin cannot be combined with credentials".to_owned(),
                });
            }
            HeaderValue::from_str(o).map_err(|e| ConfigError::Invalid {
                var: "QUIZGEN_ALLOWED_ORIGINS",
                value: raw.to_owned(),
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if origins.is_empty() {
        return Err(ConfigError::Invalid {
            var: "QUIZGEN_ALLOWED_ORIGINS",
            value: raw.to_owned(),
            reason: "no origins listed".to_owned(),
        });
    }
    Ok(origins)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<GatewayConfig, ConfigError> {
        let env: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        GatewayConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = match load(&[]) {
            Ok(c) => c,
            Err(e) => panic!("defaults must load: {e}"),
        };
        assert_eq!(
            config.listen_addr,
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8080))
        );
        assert_eq!(config.generator.interpreter, PathBuf::from("python3"));
        assert_eq!(config.generator.script, PathBuf::from("/app/generate_questions.py"));
        assert_eq!(config.generator.timeout, Some(Duration::from_secs(120)));
        assert_eq!(config.generator.max_concurrent, 8);
        assert_eq!(config.allowed_origins.len(), 2);
        assert_eq!(config.allowed_origins[1], "http://localhost:3000");
    }

    #[test]
    fn empty_port_falls_back_to_default() {
        let config = load(&[("PORT", "")]).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(config.listen_addr.port(), DEFAULT_PORT);
    }

    #[test]
    fn overrides_are_applied() {
        let config = load(&[
            ("PORT", "9090"),
            ("QUIZGEN_INTERPRETER", "/usr/bin/python3.12"),
            ("QUIZGEN_SCRIPT", "/srv/gen.py"),
            ("QUIZGEN_TIMEOUT_SECS", "15"),
            ("QUIZGEN_MAX_CONCURRENT", "2"),
            ("QUIZGEN_ALLOWED_ORIGINS", "https://quiz.example.com, http://localhost:5173"),
        ])
        .unwrap_or_else(|e| panic!("{e}"));

        assert_eq!(config.listen_addr.port(), 9090);
        assert_eq!(config.generator.interpreter, PathBuf::from("/usr/bin/python3.12"));
        assert_eq!(config.generator.script, PathBuf::from("/srv/gen.py"));
        assert_eq!(config.generator.timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.generator.max_concurrent, 2);
        assert_eq!(
            config.allowed_origins,
            [
                HeaderValue::from_static("https://quiz.example.com"),
                HeaderValue::from_static("http://localhost:5173"),
            ]
        );
    }

    #[test]
    fn zero_timeout_disables_deadline() {
        let config = load(&[("QUIZGEN_TIMEOUT_SECS", "0")]).unwrap_or_else(|e| panic!("{e}"));
        assert!(config.generator.timeout.is_none());
    }

    #[test]
    fn invalid_port_names_the_variable() {
        let err = match load(&[("PORT", "eighty")]) {
            Ok(c) => panic!("invalid port must fail, got {c:?}"),
            Err(e) => e,
        };
        assert!(err.to_string().contains("PORT"), "error must name the variable: {err}");
    }

    #[test]
    fn zero_max_concurrent_rejects() {
        assert!(load(&[("QUIZGEN_MAX_CONCURRENT", "0")]).is_err());
    }

    #[test]
    fn wildcard_origin_rejects() {
        assert!(load(&[("QUIZGEN_ALLOWED_ORIGINS", "*")]).is_err());
    }

    #[test]
    fn origins_of_only_separators_reject() {
        assert!(load(&[("QUIZGEN_ALLOWED_ORIGINS", " , ,")]).is_err());
    }
}
