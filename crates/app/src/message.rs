//! Messages — every user event and every completed request.

use sitedeck_domain::command::{Command, CommandDetail, NewCommand};
use sitedeck_domain::id::{CommandId, SiteId};
use sitedeck_domain::log::LogSnapshot;
use sitedeck_domain::session::{Credentials, Session};
use sitedeck_domain::site::{Site, SiteDraft};

use crate::client::ApiError;
use crate::effect::ProcessAction;
use crate::model::Generation;

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Login form submitted.
    LoginSubmitted(Credentials),
    LoginFinished(Result<Session, ApiError>),
    LogoutClicked,

    /// Reload the site list.
    RefreshSitesClicked,
    SitesLoaded {
        generation: Generation,
        result: Result<Vec<Site>, ApiError>,
    },
    /// "Add site" form submitted.
    CreateSiteSubmitted(SiteDraft),
    EditSiteClicked(SiteId),
    CloseSiteEditorClicked,
    SaveSiteClicked {
        id: SiteId,
        draft: SiteDraft,
    },
    DeleteSiteClicked(SiteId),
    DeleteSiteConfirmed(SiteId),
    /// A create, update or delete of a site completed.
    SiteChanged(Result<(), ApiError>),

    /// "Open" on a site entry.
    OpenSiteClicked(SiteId),
    CommandsLoaded {
        site_id: SiteId,
        generation: Generation,
        result: Result<Vec<Command>, ApiError>,
    },
    /// "Add command" form submitted.
    CreateCommandSubmitted(NewCommand),
    /// A create or delete of a command completed.
    CommandChanged {
        site_id: SiteId,
        result: Result<(), ApiError>,
    },

    StartClicked(CommandId),
    StopClicked(CommandId),
    ProcessSignalled {
        action: ProcessAction,
        result: Result<(), ApiError>,
    },

    ViewLogClicked(CommandId),
    LogLoaded {
        id: CommandId,
        result: Result<LogSnapshot, ApiError>,
    },

    /// "Edit" on a command card; closes the editor when it is open.
    EditCommandClicked(CommandId),
    CommandDetailLoaded {
        id: CommandId,
        result: Result<CommandDetail, ApiError>,
    },
    SaveCommandClicked {
        id: CommandId,
        name: String,
        command_template: String,
        env_text: String,
    },
    CommandSaved {
        id: CommandId,
        site_id: SiteId,
        result: Result<(), ApiError>,
    },
    DeleteCommandClicked(CommandId),
    DeleteCommandConfirmed {
        id: CommandId,
        site_id: SiteId,
    },
}
