//! Site — a managed filesystem location with a default shell command.

use serde::{Deserialize, Serialize};

use crate::id::SiteId;

/// A site as returned by `GET /api/sites`.
///
/// The backend stores `base_path` and `base_command` as nullable columns,
/// so both may arrive as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub id: SiteId,
    pub name: String,
    #[serde(default)]
    pub base_path: Option<String>,
    #[serde(default)]
    pub base_command: Option<String>,
}

impl Site {
    /// Editable copy of this site, with missing optional fields as empty text.
    #[must_use]
    pub fn draft(&self) -> SiteDraft {
        SiteDraft {
            name: self.name.clone(),
            base_path: self.base_path.clone().unwrap_or_default(),
            base_command: self.base_command.clone().unwrap_or_default(),
        }
    }
}

/// Body of `POST /api/sites` and `PUT /api/sites/{id}`.
///
/// Fields are sent exactly as typed; the client performs no normalisation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteDraft {
    pub name: String,
    pub base_path: String,
    pub base_command: String,
}

impl SiteDraft {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        base_path: impl Into<String>,
        base_command: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            base_path: base_path.into(),
            base_command: base_command.into(),
        }
    }
}
