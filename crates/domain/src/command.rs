//! Command — a named shell-command template scoped to a site.

use serde::{Deserialize, Serialize};

use crate::env::{EnvVar, format_env_text};
use crate::id::{CommandId, SiteId};

/// A command as listed by `GET /api/sites/{id}/commands`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub id: CommandId,
    pub site_id: SiteId,
    pub name: String,
    pub command_template: String,
    #[serde(default)]
    pub envs: Vec<EnvVar>,
}

/// Full command record from `GET /api/commands/{id}`.
///
/// Besides the command itself the backend reports the pid of the running
/// process (if any) and the shell line it would execute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDetail {
    #[serde(flatten)]
    pub command: Command,
    #[serde(default)]
    pub current_pid: Option<i64>,
    #[serde(default)]
    pub run_command: Option<String>,
}

impl CommandDetail {
    /// The envs rendered for the editor textarea.
    #[must_use]
    pub fn env_text(&self) -> String {
        format_env_text(&self.command.envs)
    }
}

/// Body of `POST /api/commands`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCommand {
    pub name: String,
    pub command_template: String,
    pub site_id: SiteId,
}

/// Body of `PUT /api/commands/{id}`.
///
/// `site_id` is omitted so the backend keeps the command on its site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandUpdate {
    pub name: String,
    pub command_template: String,
    pub envs: Vec<EnvVar>,
}
