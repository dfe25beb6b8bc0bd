//! Effects — side effects requested by [`crate::update::update`].

use sitedeck_domain::command::{CommandUpdate, NewCommand};
use sitedeck_domain::endpoint::Endpoint;
use sitedeck_domain::id::{CommandId, SiteId};
use sitedeck_domain::session::{Credentials, Token};
use sitedeck_domain::site::SiteDraft;

use crate::message::Msg;
use crate::model::Generation;

/// Process control actions on a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessAction {
    Start,
    Stop,
}

impl ProcessAction {
    #[must_use]
    pub const fn endpoint(self, id: CommandId) -> Endpoint {
        match self {
            Self::Start => Endpoint::StartCommand(id),
            Self::Stop => Endpoint::StopCommand(id),
        }
    }

    /// Text of the acknowledgement shown once the request resolves.
    #[must_use]
    pub const fn acknowledgement(self) -> &'static str {
        match self {
            Self::Start => "Started",
            Self::Stop => "Stopped",
        }
    }
}

/// An authenticated backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListSites {
        generation: Generation,
    },
    CreateSite(SiteDraft),
    UpdateSite {
        id: SiteId,
        draft: SiteDraft,
    },
    DeleteSite(SiteId),
    ListCommands {
        site_id: SiteId,
        generation: Generation,
    },
    CreateCommand(NewCommand),
    GetCommand(CommandId),
    UpdateCommand {
        id: CommandId,
        site_id: SiteId,
        update: CommandUpdate,
    },
    DeleteCommand {
        id: CommandId,
        site_id: SiteId,
    },
    Signal {
        id: CommandId,
        action: ProcessAction,
    },
    FetchLog(CommandId),
}

impl Call {
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::ListSites { .. } => Endpoint::ListSites,
            Self::CreateSite(_) => Endpoint::CreateSite,
            Self::UpdateSite { id, .. } => Endpoint::UpdateSite(*id),
            Self::DeleteSite(id) => Endpoint::DeleteSite(*id),
            Self::ListCommands { site_id, .. } => Endpoint::ListCommands(*site_id),
            Self::CreateCommand(_) => Endpoint::CreateCommand,
            Self::GetCommand(id) => Endpoint::GetCommand(*id),
            Self::UpdateCommand { id, .. } => Endpoint::UpdateCommand(*id),
            Self::DeleteCommand { id, .. } => Endpoint::DeleteCommand(*id),
            Self::Signal { id, action } => action.endpoint(*id),
            Self::FetchLog(id) => Endpoint::Log(*id),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Login(Credentials),
    Call { token: Token, call: Call },
    /// Blocking notification.
    Alert(String),
    /// Ask first; dispatch `on_confirm` only when accepted.
    Confirm {
        prompt: String,
        on_confirm: Box<Msg>,
    },
}

impl Effect {
    /// Backend endpoint this effect hits, if any.
    #[must_use]
    pub fn endpoint(&self) -> Option<Endpoint> {
        match self {
            Self::Login(_) => Some(Endpoint::Login),
            Self::Call { call, .. } => Some(call.endpoint()),
            Self::Alert(_) | Self::Confirm { .. } => None,
        }
    }
}
