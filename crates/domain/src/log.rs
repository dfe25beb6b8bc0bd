//! Log snapshot — the captured output of a command's latest run.

use serde::{Deserialize, Serialize};

/// Text shown when a command has not produced any output.
pub const EMPTY_LOG_PLACEHOLDER: &str = "(no output yet)";

/// Body of `GET /api/logs/{id}`.
///
/// When nothing has been captured the backend answers `{"logs": []}`,
/// which decodes to a snapshot with every field absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSnapshot {
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl LogSnapshot {
    /// Raw output, or [`EMPTY_LOG_PLACEHOLDER`] when there is none.
    #[must_use]
    pub fn display_text(&self) -> String {
        match self.output.as_deref() {
            Some(output) if !output.is_empty() => output.to_string(),
            _ => EMPTY_LOG_PLACEHOLDER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_show_placeholder_when_no_logs_captured() {
        let snapshot: LogSnapshot = serde_json::from_str(r#"{"logs": []}"#).unwrap();
        assert_eq!(snapshot.display_text(), EMPTY_LOG_PLACEHOLDER);
    }

    #[test]
    fn should_show_placeholder_when_output_empty() {
        let snapshot: LogSnapshot =
            serde_json::from_str(r#"{"path": "/tmp/x.log", "status": "running", "output": ""}"#)
                .unwrap();
        assert_eq!(snapshot.display_text(), EMPTY_LOG_PLACEHOLDER);
        assert_eq!(snapshot.status.as_deref(), Some("running"));
    }

    #[test]
    fn should_show_raw_output_verbatim() {
        let snapshot = LogSnapshot {
            output: Some("line 1\nline 2\n".to_string()),
            ..LogSnapshot::default()
        };
        assert_eq!(snapshot.display_text(), "line 1\nline 2\n");
    }
}
