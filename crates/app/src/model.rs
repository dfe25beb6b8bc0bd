//! The dashboard's complete UI state.
//!
//! The view is a function of [`Model`]; nothing else holds UI state. The
//! model is only mutated by [`crate::update::update`].

use sitedeck_domain::command::{Command, CommandDetail};
use sitedeck_domain::id::{CommandId, SiteId};
use sitedeck_domain::session::{Session, Token};
use sitedeck_domain::site::{Site, SiteDraft};

/// Which top-level panel is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Login,
    Main,
}

/// Monotonic counter identifying one list load.
///
/// A response is applied only if it carries the latest generation issued for
/// its list, so overlapping reloads resolve to the most recently issued one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Inline editor for one site, prefilled from the list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteEditor {
    pub site_id: SiteId,
    pub initial: SiteDraft,
    /// Bumped on every Edit click so the form is rebuilt from `initial`.
    pub opened: u64,
}

/// Inline editor of a command card, prefilled from the command detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEditor {
    pub name: String,
    pub command_template: String,
    /// Envs as `key=value` lines.
    pub env_text: String,
    pub run_command: Option<String>,
    pub current_pid: Option<i64>,
}

impl CommandEditor {
    #[must_use]
    pub fn from_detail(detail: &CommandDetail) -> Self {
        Self {
            name: detail.command.name.clone(),
            command_template: detail.command.command_template.clone(),
            env_text: detail.env_text(),
            run_command: detail.run_command.clone(),
            current_pid: detail.current_pid,
        }
    }
}

/// One command in the command panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandCard {
    pub command: Command,
    pub editor: Option<CommandEditor>,
    /// Last fetched log text; `None` until "View Log" is clicked.
    pub log: Option<String>,
}

impl CommandCard {
    fn new(command: Command) -> Self {
        Self {
            command,
            editor: None,
            log: None,
        }
    }
}

/// Commands of the opened site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPanel {
    pub site_id: SiteId,
    pub cards: Vec<CommandCard>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    pub session: Option<Session>,
    pub sites: Vec<Site>,
    pub site_editor: Option<SiteEditor>,
    pub commands: Option<CommandPanel>,
    sites_generation: Generation,
    commands_generation: Generation,
}

impl Model {
    #[must_use]
    pub fn panel(&self) -> Panel {
        if self.session.is_some() {
            Panel::Main
        } else {
            Panel::Login
        }
    }

    #[must_use]
    pub fn token(&self) -> Option<&Token> {
        self.session.as_ref().map(|session| &session.token)
    }

    #[must_use]
    pub fn site(&self, id: SiteId) -> Option<&Site> {
        self.sites.iter().find(|site| site.id == id)
    }

    #[must_use]
    pub fn card(&self, id: CommandId) -> Option<&CommandCard> {
        self.commands
            .as_ref()?
            .cards
            .iter()
            .find(|card| card.command.id == id)
    }

    pub(crate) fn card_mut(&mut self, id: CommandId) -> Option<&mut CommandCard> {
        self.commands
            .as_mut()?
            .cards
            .iter_mut()
            .find(|card| card.command.id == id)
    }

    /// Start a fresh signed-in state for `session`.
    pub(crate) fn sign_in(&mut self, session: Session) {
        self.clear_views();
        self.session = Some(session);
    }

    /// Drop the session and everything fetched with it.
    pub(crate) fn sign_out(&mut self) {
        self.clear_views();
        self.session = None;
    }

    fn clear_views(&mut self) {
        self.sites.clear();
        self.site_editor = None;
        self.commands = None;
        // Responses still in flight belong to the previous session.
        self.sites_generation = self.sites_generation.next();
        self.commands_generation = self.commands_generation.next();
    }

    pub(crate) fn issue_sites_generation(&mut self) -> Generation {
        self.sites_generation = self.sites_generation.next();
        self.sites_generation
    }

    pub(crate) fn issue_commands_generation(&mut self) -> Generation {
        self.commands_generation = self.commands_generation.next();
        self.commands_generation
    }

    pub(crate) fn is_current_sites(&self, generation: Generation) -> bool {
        self.session.is_some() && generation == self.sites_generation
    }

    pub(crate) fn is_current_commands(&self, generation: Generation) -> bool {
        self.session.is_some() && generation == self.commands_generation
    }

    /// Replace the site list and close views of sites that no longer exist.
    pub(crate) fn replace_sites(&mut self, sites: Vec<Site>) {
        self.sites = sites;
        if let Some(editor) = &self.site_editor
            && self.site(editor.site_id).is_none()
        {
            self.site_editor = None;
        }
        if let Some(panel) = &self.commands
            && self.site(panel.site_id).is_none()
        {
            self.commands = None;
        }
    }

    /// Replace the command panel; every card starts with editor and log closed.
    pub(crate) fn replace_commands(&mut self, site_id: SiteId, commands: Vec<Command>) {
        self.commands = Some(CommandPanel {
            site_id,
            cards: commands.into_iter().map(CommandCard::new).collect(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitedeck_domain::session::Permissions;

    fn session() -> Session {
        Session {
            username: "alice".to_string(),
            token: Token::new("t"),
            permissions: Permissions::All,
        }
    }

    fn site(id: i64) -> Site {
        Site {
            id: SiteId::new(id),
            name: format!("site-{id}"),
            base_path: None,
            base_command: None,
        }
    }

    #[test]
    fn should_show_login_panel_without_session() {
        let model = Model::default();
        assert_eq!(model.panel(), Panel::Login);
        assert!(model.token().is_none());
    }

    #[test]
    fn should_show_main_panel_with_session() {
        let mut model = Model::default();
        model.sign_in(session());
        assert_eq!(model.panel(), Panel::Main);
    }

    #[test]
    fn should_reject_generation_issued_before_latest() {
        let mut model = Model::default();
        model.sign_in(session());
        let first = model.issue_sites_generation();
        let second = model.issue_sites_generation();
        assert!(!model.is_current_sites(first));
        assert!(model.is_current_sites(second));
    }

    #[test]
    fn should_invalidate_pending_generations_on_sign_out() {
        let mut model = Model::default();
        model.sign_in(session());
        let pending = model.issue_commands_generation();
        model.sign_out();
        model.sign_in(session());
        assert!(!model.is_current_commands(pending));
    }

    #[test]
    fn should_close_views_of_removed_site_when_list_replaced() {
        let mut model = Model::default();
        model.sign_in(session());
        model.replace_sites(vec![site(1), site(2)]);
        model.site_editor = Some(SiteEditor {
            site_id: SiteId::new(2),
            initial: site(2).draft(),
            opened: 0,
        });
        model.replace_commands(SiteId::new(2), Vec::new());

        model.replace_sites(vec![site(1)]);

        assert!(model.site_editor.is_none());
        assert!(model.commands.is_none());
    }
}
