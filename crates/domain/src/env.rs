//! Environment overrides attached to a command, and their editor text form.
//!
//! The command editor shows envs as one `key=value` pair per line. Lines are
//! split at the first `=`, so values may contain `=` but keys may not. Values
//! spanning several lines cannot be expressed.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A single environment variable override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVar {
    pub key: String,
    pub value: String,
}

impl EnvVar {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Parse editor text into an ordered list of env overrides.
///
/// Keys and values are trimmed and blank lines are skipped. Error line
/// numbers are 1-based and count blank lines.
///
/// # Errors
///
/// Returns [`ValidationError::MissingEnvSeparator`] for a line without `=`
/// and [`ValidationError::EmptyEnvKey`] for a line starting with `=`.
pub fn parse_env_text(text: &str) -> Result<Vec<EnvVar>, ValidationError> {
    let mut envs = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = index + 1;
        let Some((key, value)) = line.split_once('=') else {
            return Err(ValidationError::MissingEnvSeparator { line: line_no });
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(ValidationError::EmptyEnvKey { line: line_no });
        }
        envs.push(EnvVar::new(key, value.trim()));
    }
    Ok(envs)
}

/// Render env overrides as editor text, one `key=value` per line.
#[must_use]
pub fn format_env_text(envs: &[EnvVar]) -> String {
    envs.iter()
        .map(|env| format!("{}={}", env.key, env.value))
        .collect::<Vec<_>>()
        .join("\n")
}
