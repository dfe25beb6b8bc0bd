//! The backend's REST surface as a typed table.
//!
//! Every call the dashboard makes is one [`Endpoint`]; adapters turn it into
//! a concrete HTTP request with [`Endpoint::method`] and [`Endpoint::path`].

use std::fmt;

use crate::id::{CommandId, SiteId};

/// Path prefix shared by all backend routes.
pub const API_PREFIX: &str = "/api";

/// HTTP method subset used by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One backend operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Login,
    ListSites,
    CreateSite,
    UpdateSite(SiteId),
    DeleteSite(SiteId),
    ListCommands(SiteId),
    CreateCommand,
    GetCommand(CommandId),
    UpdateCommand(CommandId),
    DeleteCommand(CommandId),
    StartCommand(CommandId),
    StopCommand(CommandId),
    Log(CommandId),
}

impl Endpoint {
    #[must_use]
    pub const fn method(self) -> Method {
        match self {
            Self::ListSites | Self::ListCommands(_) | Self::GetCommand(_) | Self::Log(_) => {
                Method::Get
            }
            Self::Login
            | Self::CreateSite
            | Self::CreateCommand
            | Self::StartCommand(_)
            | Self::StopCommand(_) => Method::Post,
            Self::UpdateSite(_) | Self::UpdateCommand(_) => Method::Put,
            Self::DeleteSite(_) | Self::DeleteCommand(_) => Method::Delete,
        }
    }

    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::Login => format!("{API_PREFIX}/login"),
            Self::ListSites | Self::CreateSite => format!("{API_PREFIX}/sites"),
            Self::UpdateSite(id) | Self::DeleteSite(id) => format!("{API_PREFIX}/sites/{id}"),
            Self::ListCommands(id) => format!("{API_PREFIX}/sites/{id}/commands"),
            Self::CreateCommand => format!("{API_PREFIX}/commands"),
            Self::GetCommand(id) | Self::UpdateCommand(id) | Self::DeleteCommand(id) => {
                format!("{API_PREFIX}/commands/{id}")
            }
            Self::StartCommand(id) => format!("{API_PREFIX}/commands/{id}/start"),
            Self::StopCommand(id) => format!("{API_PREFIX}/commands/{id}/stop"),
            Self::Log(id) => format!("{API_PREFIX}/logs/{id}"),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}
