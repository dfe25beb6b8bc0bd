//! The update function: `(Model, Msg) -> [Effect]`.
//!
//! No IO happens here. Every mutating action is followed by a full reload of
//! the affected list; results are applied only when they belong to the
//! current session and the latest load.

use sitedeck_domain::command::CommandUpdate;
use sitedeck_domain::env::parse_env_text;
use sitedeck_domain::id::{CommandId, SiteId};

use crate::effect::{Call, Effect, ProcessAction};
use crate::message::Msg;
use crate::model::{CommandEditor, Model, SiteEditor};

pub const LOGIN_FAILED: &str = "Login failed";
pub const SAVED: &str = "Saved";
pub const DELETE_SITE_PROMPT: &str = "Delete this site and its commands?";
pub const DELETE_COMMAND_PROMPT: &str = "Delete this command?";

#[must_use]
pub fn update(model: &mut Model, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::LoginSubmitted(credentials) => vec![Effect::Login(credentials)],
        Msg::LoginFinished(Ok(session)) => {
            tracing::info!(username = %session.username, "signed in");
            model.sign_in(session);
            load_sites(model)
        }
        Msg::LoginFinished(Err(err)) => {
            tracing::warn!(error = %err, "login failed");
            vec![Effect::Alert(LOGIN_FAILED.to_string())]
        }
        Msg::LogoutClicked => {
            model.sign_out();
            Vec::new()
        }

        Msg::RefreshSitesClicked => load_sites(model),
        Msg::SitesLoaded { generation, result } => {
            if !model.is_current_sites(generation) {
                tracing::debug!(?generation, "discarding stale site list");
                return Vec::new();
            }
            match result {
                Ok(sites) => model.replace_sites(sites),
                Err(err) => tracing::warn!(error = %err, "failed to load sites"),
            }
            Vec::new()
        }
        Msg::CreateSiteSubmitted(draft) => authed(model, Call::CreateSite(draft)),
        Msg::EditSiteClicked(id) => {
            if let Some(site) = model.site(id) {
                let opened = model
                    .site_editor
                    .as_ref()
                    .map_or(0, |editor| editor.opened + 1);
                model.site_editor = Some(SiteEditor {
                    site_id: id,
                    initial: site.draft(),
                    opened,
                });
            }
            Vec::new()
        }
        Msg::CloseSiteEditorClicked => {
            model.site_editor = None;
            Vec::new()
        }
        Msg::SaveSiteClicked { id, draft } => authed(model, Call::UpdateSite { id, draft }),
        Msg::DeleteSiteClicked(id) => vec![Effect::Confirm {
            prompt: DELETE_SITE_PROMPT.to_string(),
            on_confirm: Box::new(Msg::DeleteSiteConfirmed(id)),
        }],
        Msg::DeleteSiteConfirmed(id) => authed(model, Call::DeleteSite(id)),
        Msg::SiteChanged(result) => match result {
            Ok(()) => load_sites(model),
            Err(err) => {
                tracing::warn!(error = %err, "site change not delivered");
                Vec::new()
            }
        },

        Msg::OpenSiteClicked(site_id) => load_commands(model, site_id),
        Msg::CommandsLoaded {
            site_id,
            generation,
            result,
        } => {
            if !model.is_current_commands(generation) {
                tracing::debug!(%site_id, ?generation, "discarding stale command list");
                return Vec::new();
            }
            match result {
                Ok(commands) => model.replace_commands(site_id, commands),
                Err(err) => tracing::warn!(%site_id, error = %err, "failed to load commands"),
            }
            Vec::new()
        }
        Msg::CreateCommandSubmitted(command) => authed(model, Call::CreateCommand(command)),
        Msg::CommandChanged { site_id, result } => match result {
            Ok(()) => load_commands(model, site_id),
            Err(err) => {
                tracing::warn!(%site_id, error = %err, "command change not delivered");
                Vec::new()
            }
        },

        Msg::StartClicked(id) => authed(
            model,
            Call::Signal {
                id,
                action: ProcessAction::Start,
            },
        ),
        Msg::StopClicked(id) => authed(
            model,
            Call::Signal {
                id,
                action: ProcessAction::Stop,
            },
        ),
        Msg::ProcessSignalled { action, result } => match result {
            Ok(()) => vec![Effect::Alert(action.acknowledgement().to_string())],
            Err(err) => {
                tracing::warn!(?action, error = %err, "process signal not delivered");
                Vec::new()
            }
        },

        Msg::ViewLogClicked(id) => authed(model, Call::FetchLog(id)),
        Msg::LogLoaded { id, result } => {
            match result {
                Ok(snapshot) => {
                    if let Some(card) = model.card_mut(id) {
                        card.log = Some(snapshot.display_text());
                    }
                }
                Err(err) => tracing::warn!(%id, error = %err, "failed to load log"),
            }
            Vec::new()
        }

        Msg::EditCommandClicked(id) => {
            let Some(card) = model.card_mut(id) else {
                return Vec::new();
            };
            if card.editor.take().is_some() {
                return Vec::new();
            }
            authed(model, Call::GetCommand(id))
        }
        Msg::CommandDetailLoaded { id, result } => {
            match result {
                Ok(detail) => {
                    if let Some(card) = model.card_mut(id) {
                        card.editor = Some(CommandEditor::from_detail(&detail));
                    }
                }
                Err(err) => tracing::warn!(%id, error = %err, "failed to load command detail"),
            }
            Vec::new()
        }
        Msg::SaveCommandClicked {
            id,
            name,
            command_template,
            env_text,
        } => {
            let Some(site_id) = card_site(model, id) else {
                return Vec::new();
            };
            match parse_env_text(&env_text) {
                Ok(envs) => authed(
                    model,
                    Call::UpdateCommand {
                        id,
                        site_id,
                        update: CommandUpdate {
                            name,
                            command_template,
                            envs,
                        },
                    },
                ),
                Err(err) => vec![Effect::Alert(format!("Cannot save: {err}"))],
            }
        }
        Msg::CommandSaved {
            id,
            site_id,
            result,
        } => match result {
            Ok(()) => {
                if let Some(card) = model.card_mut(id) {
                    card.editor = None;
                }
                let mut effects = vec![Effect::Alert(SAVED.to_string())];
                effects.extend(load_commands(model, site_id));
                effects
            }
            Err(err) => {
                tracing::warn!(%id, error = %err, "command update not delivered");
                Vec::new()
            }
        },
        Msg::DeleteCommandClicked(id) => match card_site(model, id) {
            Some(site_id) => vec![Effect::Confirm {
                prompt: DELETE_COMMAND_PROMPT.to_string(),
                on_confirm: Box::new(Msg::DeleteCommandConfirmed { id, site_id }),
            }],
            None => Vec::new(),
        },
        Msg::DeleteCommandConfirmed { id, site_id } => {
            authed(model, Call::DeleteCommand { id, site_id })
        }
    }
}

fn authed(model: &Model, call: Call) -> Vec<Effect> {
    match model.token() {
        Some(token) => vec![Effect::Call {
            token: token.clone(),
            call,
        }],
        None => {
            tracing::debug!(?call, "dropping call without session");
            Vec::new()
        }
    }
}

fn load_sites(model: &mut Model) -> Vec<Effect> {
    let generation = model.issue_sites_generation();
    authed(model, Call::ListSites { generation })
}

fn load_commands(model: &mut Model, site_id: SiteId) -> Vec<Effect> {
    let generation = model.issue_commands_generation();
    authed(
        model,
        Call::ListCommands {
            site_id,
            generation,
        },
    )
}

fn card_site(model: &Model, id: CommandId) -> Option<SiteId> {
    model.card(id).map(|card| card.command.site_id)
}
