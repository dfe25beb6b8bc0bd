//! In-memory backend and dialogs used by the controller tests.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use sitedeck_domain::command::{Command, CommandDetail, CommandUpdate, NewCommand};
use sitedeck_domain::endpoint::{Endpoint, Method};
use sitedeck_domain::id::{CommandId, SiteId};
use sitedeck_domain::session::Credentials;
use sitedeck_domain::site::{Site, SiteDraft};

use crate::ports::{Dialogs, HttpRequest, HttpResponse, HttpTransport, TransportError};

const USERNAME: &str = "alice";
const PASSWORD: &str = "secret";
const TOKEN: &str = "token-alice";
const BEARER: &str = "Bearer token-alice";

#[derive(Default)]
struct State {
    last_id: i64,
    sites: BTreeMap<SiteId, Site>,
    commands: BTreeMap<CommandId, Command>,
    logs: BTreeMap<CommandId, String>,
    pids: BTreeMap<CommandId, i64>,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn insert_site(&mut self, draft: SiteDraft) -> Site {
        let site = Site {
            id: SiteId::new(self.next_id()),
            name: draft.name,
            base_path: Some(draft.base_path),
            base_command: Some(draft.base_command),
        };
        self.sites.insert(site.id, site.clone());
        site
    }

    fn insert_command(&mut self, new: NewCommand) -> Command {
        let command = Command {
            id: CommandId::new(self.next_id()),
            site_id: new.site_id,
            name: new.name,
            command_template: new.command_template,
            envs: Vec::new(),
        };
        self.commands.insert(command.id, command.clone());
        command
    }
}

/// Backend double speaking the REST surface over [`HttpTransport`].
///
/// Knows a single user (`alice` / `secret`) and records every request.
#[derive(Default)]
pub struct FakeBackend {
    state: RefCell<State>,
    requests: RefCell<Vec<HttpRequest>>,
    offline: Cell<bool>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_site(&self, name: &str, base_path: &str, base_command: &str) -> SiteId {
        self.state
            .borrow_mut()
            .insert_site(SiteDraft::new(name, base_path, base_command))
            .id
    }

    pub fn seed_command(&self, site_id: SiteId, name: &str, command_template: &str) -> CommandId {
        self.state
            .borrow_mut()
            .insert_command(NewCommand {
                name: name.to_string(),
                command_template: command_template.to_string(),
                site_id,
            })
            .id
    }

    pub fn set_log(&self, id: CommandId, output: &str) {
        self.state.borrow_mut().logs.insert(id, output.to_string());
    }

    /// Fail every following request at the transport level.
    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    /// Number of requests sent to `endpoint`.
    pub fn count(&self, endpoint: Endpoint) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|request| targets(request, endpoint))
            .count()
    }

    pub fn last_body(&self, endpoint: Endpoint) -> Option<Value> {
        self.requests
            .borrow()
            .iter()
            .rev()
            .find(|request| targets(request, endpoint))
            .and_then(|request| request.body.clone())
    }

    fn handle(&self, request: &HttpRequest) -> HttpResponse {
        let Some(rest) = request.path.strip_prefix("/api/") else {
            return respond(404, &json!({"detail": "Not Found"}));
        };
        let segments: Vec<&str> = rest.split('/').collect();

        if request.method == Method::Post && segments == ["login"] {
            return login(request.body.as_ref());
        }
        if request.authorization.as_deref() != Some(BEARER) {
            return respond(401, &json!({"detail": "Invalid token"}));
        }

        let mut state = self.state.borrow_mut();
        let response = match (request.method, segments.as_slice()) {
            (Method::Get, ["sites"]) => Some(json!(state.sites.values().collect::<Vec<_>>())),
            (Method::Post, ["sites"]) => {
                body::<SiteDraft>(request).map(|draft| json!(state.insert_site(draft)))
            }
            (Method::Put, ["sites", id]) => {
                parse::<SiteId>(id).zip(body::<SiteDraft>(request)).and_then(|(id, draft)| {
                    let site = state.sites.get_mut(&id)?;
                    site.name = draft.name;
                    site.base_path = Some(draft.base_path);
                    site.base_command = Some(draft.base_command);
                    Some(json!(site))
                })
            }
            (Method::Delete, ["sites", id]) => parse::<SiteId>(id).and_then(|id| {
                state.sites.remove(&id)?;
                state.commands.retain(|_, command| command.site_id != id);
                Some(json!({"detail": "Site deleted"}))
            }),
            (Method::Get, ["sites", id, "commands"]) => parse::<SiteId>(id).map(|id| {
                json!(
                    state
                        .commands
                        .values()
                        .filter(|command| command.site_id == id)
                        .collect::<Vec<_>>()
                )
            }),
            (Method::Post, ["commands"]) => {
                body::<NewCommand>(request).map(|new| json!(state.insert_command(new)))
            }
            (Method::Get, ["commands", id]) => parse::<CommandId>(id).and_then(|id| {
                let command = state.commands.get(&id)?.clone();
                let base_path = state
                    .sites
                    .get(&command.site_id)
                    .and_then(|site| site.base_path.clone())
                    .unwrap_or_default();
                let run_command = format!("cd {base_path} && {}", command.command_template);
                Some(json!(CommandDetail {
                    command,
                    current_pid: state.pids.get(&id).copied(),
                    run_command: Some(run_command),
                }))
            }),
            (Method::Put, ["commands", id]) => parse::<CommandId>(id)
                .zip(body::<CommandUpdate>(request))
                .and_then(|(id, update)| {
                    let command = state.commands.get_mut(&id)?;
                    command.name = update.name;
                    command.command_template = update.command_template;
                    command.envs = update.envs;
                    Some(json!(command))
                }),
            (Method::Delete, ["commands", id]) => parse::<CommandId>(id).and_then(|id| {
                state.commands.remove(&id)?;
                Some(json!({"detail": "Command deleted"}))
            }),
            (Method::Post, ["commands", id, "start"]) => parse::<CommandId>(id).and_then(|id| {
                if !state.commands.contains_key(&id) {
                    return None;
                }
                let pid = 1000 + state.next_id();
                state.pids.insert(id, pid);
                Some(json!({"status": "started", "pid": pid}))
            }),
            (Method::Post, ["commands", id, "stop"]) => parse::<CommandId>(id).map(|id| {
                match state.pids.remove(&id) {
                    Some(_) => json!({"status": "stopped"}),
                    None => json!({"status": "not_running"}),
                }
            }),
            (Method::Get, ["logs", id]) => parse::<CommandId>(id).map(|id| {
                match state.logs.get(&id) {
                    Some(output) => json!({"path": format!("/tmp/{id}.log"), "output": output}),
                    None => json!({"logs": []}),
                }
            }),
            _ => None,
        };

        match response {
            Some(body) => respond(200, &body),
            None => respond(404, &json!({"detail": "Not Found"})),
        }
    }
}

impl HttpTransport for FakeBackend {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request.clone());
        if self.offline.get() {
            return Err(TransportError::new("connection refused"));
        }
        Ok(self.handle(&request))
    }
}

/// Records alerts and prompts; answers every confirm the same way.
pub struct RecordingDialogs {
    answer: bool,
    alerts: RefCell<Vec<String>>,
    prompts: RefCell<Vec<String>>,
}

impl RecordingDialogs {
    fn answering(answer: bool) -> Self {
        Self {
            answer,
            alerts: RefCell::default(),
            prompts: RefCell::default(),
        }
    }

    pub fn accepting() -> Self {
        Self::answering(true)
    }

    pub fn declining() -> Self {
        Self::answering(false)
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl Dialogs for RecordingDialogs {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, prompt: &str) -> bool {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.answer
    }
}

fn targets(request: &HttpRequest, endpoint: Endpoint) -> bool {
    request.method == endpoint.method() && request.path == endpoint.path()
}

fn login(body: Option<&Value>) -> HttpResponse {
    let credentials = body
        .cloned()
        .and_then(|value| serde_json::from_value::<Credentials>(value).ok());
    match credentials {
        Some(credentials) if credentials.username == USERNAME && credentials.password == PASSWORD => {
            respond(200, &json!({"token": TOKEN, "perms": "all"}))
        }
        _ => respond(400, &json!({"detail": "Invalid credentials"})),
    }
}

fn parse<I: FromStr>(raw: &str) -> Option<I> {
    raw.parse().ok()
}

fn body<B: DeserializeOwned>(request: &HttpRequest) -> Option<B> {
    serde_json::from_value(request.body.clone()?).ok()
}

fn respond(status: u16, body: &Value) -> HttpResponse {
    HttpResponse {
        status,
        body: body.to_string(),
    }
}
