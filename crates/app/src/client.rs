//! Typed client for the backend REST API.
//!
//! Status handling follows what each screen needs: login and command detail
//! require a success status, list and log reads decode whatever body comes
//! back, and fire-and-forget actions only fail when no response arrives.

use serde::Serialize;
use serde::de::DeserializeOwned;
use sitedeck_domain::command::{Command, CommandDetail, CommandUpdate, NewCommand};
use sitedeck_domain::endpoint::Endpoint;
use sitedeck_domain::id::{CommandId, SiteId};
use sitedeck_domain::log::LogSnapshot;
use sitedeck_domain::session::{Credentials, LoginResponse, Session, Token};
use sitedeck_domain::site::{Site, SiteDraft};

use crate::ports::{HttpRequest, HttpResponse, HttpTransport, TransportError};

/// Error returned by [`ApiClient`] methods.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response arrived.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The backend answered with a non-2xx status where success was required.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The response body did not match the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(String),
}

/// Backend client over an [`HttpTransport`].
pub struct ApiClient<T> {
    transport: T,
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Exchange credentials for a session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] when the backend rejects the credentials.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        let request = HttpRequest::new(Endpoint::Login).json(encode(credentials)?);
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(ApiError::Status(response.status));
        }
        let body: LoginResponse = decode(&response)?;
        Ok(Session::from_login(&credentials.username, body))
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when the body is not a site list
    /// (including error bodies), or a transport error.
    pub async fn list_sites(&self, token: &Token) -> Result<Vec<Site>, ApiError> {
        let response = self.send(Endpoint::ListSites, token, None).await?;
        decode(&response)
    }

    /// # Errors
    ///
    /// Returns a transport error when no response arrives.
    pub async fn create_site(&self, token: &Token, draft: &SiteDraft) -> Result<(), ApiError> {
        self.fire(Endpoint::CreateSite, token, Some(encode(draft)?))
            .await
    }

    /// # Errors
    ///
    /// Returns a transport error when no response arrives.
    pub async fn update_site(
        &self,
        token: &Token,
        id: SiteId,
        draft: &SiteDraft,
    ) -> Result<(), ApiError> {
        self.fire(Endpoint::UpdateSite(id), token, Some(encode(draft)?))
            .await
    }

    /// # Errors
    ///
    /// Returns a transport error when no response arrives.
    pub async fn delete_site(&self, token: &Token, id: SiteId) -> Result<(), ApiError> {
        self.fire(Endpoint::DeleteSite(id), token, None).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when the body is not a command list,
    /// or a transport error.
    pub async fn list_commands(
        &self,
        token: &Token,
        site_id: SiteId,
    ) -> Result<Vec<Command>, ApiError> {
        let response = self
            .send(Endpoint::ListCommands(site_id), token, None)
            .await?;
        decode(&response)
    }

    /// # Errors
    ///
    /// Returns a transport error when no response arrives.
    pub async fn create_command(&self, token: &Token, command: &NewCommand) -> Result<(), ApiError> {
        self.fire(Endpoint::CreateCommand, token, Some(encode(command)?))
            .await
    }

    /// Fetch the full record used to prefill the command editor.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] for a non-2xx answer, [`ApiError::Decode`]
    /// for an unexpected body, or a transport error.
    pub async fn get_command(&self, token: &Token, id: CommandId) -> Result<CommandDetail, ApiError> {
        let response = self.send(Endpoint::GetCommand(id), token, None).await?;
        if !response.is_success() {
            return Err(ApiError::Status(response.status));
        }
        decode(&response)
    }

    /// # Errors
    ///
    /// Returns a transport error when no response arrives.
    pub async fn update_command(
        &self,
        token: &Token,
        id: CommandId,
        update: &CommandUpdate,
    ) -> Result<(), ApiError> {
        self.fire(Endpoint::UpdateCommand(id), token, Some(encode(update)?))
            .await
    }

    /// # Errors
    ///
    /// Returns a transport error when no response arrives.
    pub async fn delete_command(&self, token: &Token, id: CommandId) -> Result<(), ApiError> {
        self.fire(Endpoint::DeleteCommand(id), token, None).await
    }

    /// # Errors
    ///
    /// Returns a transport error when no response arrives.
    pub async fn start_command(&self, token: &Token, id: CommandId) -> Result<(), ApiError> {
        self.fire(Endpoint::StartCommand(id), token, None).await
    }

    /// # Errors
    ///
    /// Returns a transport error when no response arrives.
    pub async fn stop_command(&self, token: &Token, id: CommandId) -> Result<(), ApiError> {
        self.fire(Endpoint::StopCommand(id), token, None).await
    }

    /// One-shot snapshot of a command's captured output.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] for a non-object body, or a transport error.
    pub async fn fetch_log(&self, token: &Token, id: CommandId) -> Result<LogSnapshot, ApiError> {
        let response = self.send(Endpoint::Log(id), token, None).await?;
        decode(&response)
    }

    async fn send(
        &self,
        endpoint: Endpoint,
        token: &Token,
        body: Option<serde_json::Value>,
    ) -> Result<HttpResponse, ApiError> {
        let mut request = HttpRequest::new(endpoint).bearer(token);
        request.body = body;
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            tracing::debug!(%endpoint, status = response.status, "backend returned error status");
        }
        Ok(response)
    }

    async fn fire(
        &self,
        endpoint: Endpoint,
        token: &Token,
        body: Option<serde_json::Value>,
    ) -> Result<(), ApiError> {
        self.send(endpoint, token, body).await.map(|_| ())
    }
}

fn encode<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|err| ApiError::Encode(err.to_string()))
}

fn decode<R: DeserializeOwned>(response: &HttpResponse) -> Result<R, ApiError> {
    serde_json::from_str(&response.body).map_err(|err| ApiError::Decode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitedeck_domain::endpoint::Method;
    use sitedeck_domain::session::Permissions;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Replays canned responses and records every request.
    #[derive(Default)]
    struct StubTransport {
        responses: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
        requests: RefCell<Vec<HttpRequest>>,
    }

    impl StubTransport {
        fn respond(self, status: u16, body: &str) -> Self {
            self.responses.borrow_mut().push_back(Ok(HttpResponse {
                status,
                body: body.to_string(),
            }));
            self
        }

        fn fail(self) -> Self {
            self.responses
                .borrow_mut()
                .push_back(Err(TransportError::new("connection refused")));
            self
        }

        fn last_request(&self) -> HttpRequest {
            self.requests.borrow().last().cloned().unwrap()
        }
    }

    impl HttpTransport for StubTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.requests.borrow_mut().push(request);
            self.responses.borrow_mut().pop_front().unwrap()
        }
    }

    fn token() -> Token {
        Token::new("tok")
    }

    #[tokio::test]
    async fn should_return_session_when_login_succeeds() {
        let client = ApiClient::new(
            StubTransport::default().respond(200, r#"{"token": "t-1", "perms": "all"}"#),
        );

        let session = client
            .login(&Credentials::new("alice", "secret"))
            .await
            .unwrap();

        assert_eq!(session.username, "alice");
        assert_eq!(session.token, Token::new("t-1"));
        assert_eq!(session.permissions, Permissions::All);
        let request = client.transport().last_request();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/api/login");
        assert!(request.authorization.is_none());
        assert_eq!(
            request.body,
            Some(serde_json::json!({"username": "alice", "password": "secret"}))
        );
    }

    #[tokio::test]
    async fn should_return_status_error_when_login_rejected() {
        let client = ApiClient::new(
            StubTransport::default().respond(400, r#"{"detail": "Invalid credentials"}"#),
        );

        let result = client.login(&Credentials::new("alice", "wrong")).await;

        assert_eq!(result, Err(ApiError::Status(400)));
    }

    #[tokio::test]
    async fn should_send_bearer_token_when_listing_sites() {
        let client = ApiClient::new(
            StubTransport::default()
                .respond(200, r#"[{"id": 1, "name": "a", "base_path": "/a", "base_command": null}]"#),
        );

        let sites = client.list_sites(&token()).await.unwrap();

        assert_eq!(sites.len(), 1);
        let request = client.transport().last_request();
        assert_eq!(request.path, "/api/sites");
        assert_eq!(request.authorization.as_deref(), Some("Bearer tok"));
    }

    #[tokio::test]
    async fn should_fail_decoding_when_list_returns_error_body() {
        let client = ApiClient::new(
            StubTransport::default().respond(401, r#"{"detail": "Invalid token"}"#),
        );

        let result = client.list_sites(&token()).await;

        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn should_ignore_status_for_start_and_stop() {
        let client = ApiClient::new(
            StubTransport::default()
                .respond(400, r#"{"detail": "boom"}"#)
                .respond(200, r#"{"status": "not_running"}"#),
        );

        client.start_command(&token(), CommandId::new(4)).await.unwrap();
        client.stop_command(&token(), CommandId::new(4)).await.unwrap();

        let requests = client.transport().requests.borrow();
        assert_eq!(requests[0].path, "/api/commands/4/start");
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[1].path, "/api/commands/4/stop");
    }

    #[tokio::test]
    async fn should_surface_transport_failure_for_fire_and_forget_calls() {
        let client = ApiClient::new(StubTransport::default().fail());

        let result = client.delete_site(&token(), SiteId::new(1)).await;

        assert!(matches!(result, Err(ApiError::Transport(_))));
    }

    #[tokio::test]
    async fn should_require_success_for_command_detail() {
        let client = ApiClient::new(
            StubTransport::default().respond(404, r#"{"detail": "Command not found"}"#),
        );

        let result = client.get_command(&token(), CommandId::new(9)).await;

        assert_eq!(result, Err(ApiError::Status(404)));
    }

    #[tokio::test]
    async fn should_send_site_draft_verbatim() {
        let client = ApiClient::new(StubTransport::default().respond(200, "{}"));
        let draft = SiteDraft::new(" spaced ", "", "make run");

        client.create_site(&token(), &draft).await.unwrap();

        let request = client.transport().last_request();
        assert_eq!(request.method, Method::Post);
        assert_eq!(
            request.body,
            Some(serde_json::json!({"name": " spaced ", "base_path": "", "base_command": "make run"}))
        );
    }

    #[tokio::test]
    async fn should_decode_empty_log_listing() {
        let client = ApiClient::new(StubTransport::default().respond(200, r#"{"logs": []}"#));

        let snapshot = client.fetch_log(&token(), CommandId::new(2)).await.unwrap();

        assert_eq!(snapshot, LogSnapshot::default());
        assert_eq!(client.transport().last_request().path, "/api/logs/2");
    }
}
