//! Effect runtime — executes [`Effect`]s through the ports.

use std::collections::VecDeque;

use sitedeck_domain::session::Token;

use crate::client::ApiClient;
use crate::effect::{Call, Effect, ProcessAction};
use crate::message::Msg;
use crate::model::Model;
use crate::ports::{Dialogs, HttpTransport};
use crate::update::update;

/// Runs effects against a backend transport and a dialog surface.
pub struct Runtime<T, D> {
    client: ApiClient<T>,
    dialogs: D,
}

impl<T: HttpTransport, D: Dialogs> Runtime<T, D> {
    pub fn new(transport: T, dialogs: D) -> Self {
        Self {
            client: ApiClient::new(transport),
            dialogs,
        }
    }

    /// Execute one effect, returning the message to dispatch next (if any).
    pub async fn perform(&self, effect: Effect) -> Option<Msg> {
        match effect {
            Effect::Login(credentials) => {
                Some(Msg::LoginFinished(self.client.login(&credentials).await))
            }
            Effect::Call { token, call } => Some(self.call(&token, call).await),
            Effect::Alert(message) => {
                self.dialogs.alert(&message);
                None
            }
            Effect::Confirm { prompt, on_confirm } => {
                if self.dialogs.confirm(&prompt) {
                    Some(*on_confirm)
                } else {
                    tracing::debug!(%prompt, "confirmation declined");
                    None
                }
            }
        }
    }

    /// Dispatch `msg` and keep running the resulting effects one at a time
    /// until nothing is left to do.
    pub async fn settle(&self, model: &mut Model, msg: Msg) {
        let mut queue = VecDeque::from([msg]);
        while let Some(msg) = queue.pop_front() {
            for effect in update(model, msg) {
                if let Some(next) = self.perform(effect).await {
                    queue.push_back(next);
                }
            }
        }
    }

    async fn call(&self, token: &Token, call: Call) -> Msg {
        let client = &self.client;
        match call {
            Call::ListSites { generation } => Msg::SitesLoaded {
                generation,
                result: client.list_sites(token).await,
            },
            Call::CreateSite(draft) => Msg::SiteChanged(client.create_site(token, &draft).await),
            Call::UpdateSite { id, draft } => {
                Msg::SiteChanged(client.update_site(token, id, &draft).await)
            }
            Call::DeleteSite(id) => Msg::SiteChanged(client.delete_site(token, id).await),
            Call::ListCommands {
                site_id,
                generation,
            } => Msg::CommandsLoaded {
                site_id,
                generation,
                result: client.list_commands(token, site_id).await,
            },
            Call::CreateCommand(command) => {
                let site_id = command.site_id;
                Msg::CommandChanged {
                    site_id,
                    result: client.create_command(token, &command).await,
                }
            }
            Call::GetCommand(id) => Msg::CommandDetailLoaded {
                id,
                result: client.get_command(token, id).await,
            },
            Call::UpdateCommand {
                id,
                site_id,
                update,
            } => Msg::CommandSaved {
                id,
                site_id,
                result: client.update_command(token, id, &update).await,
            },
            Call::DeleteCommand { id, site_id } => Msg::CommandChanged {
                site_id,
                result: client.delete_command(token, id).await,
            },
            Call::Signal { id, action } => {
                let result = match action {
                    ProcessAction::Start => client.start_command(token, id).await,
                    ProcessAction::Stop => client.stop_command(token, id).await,
                };
                Msg::ProcessSignalled { action, result }
            }
            Call::FetchLog(id) => Msg::LogLoaded {
                id,
                result: client.fetch_log(token, id).await,
            },
        }
    }
}
