//! Session — the bearer token and permissions held for the page lifetime.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/login`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Opaque bearer credential issued by the backend.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(<redacted>)")
    }
}

/// Successful `POST /api/login` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: Token,
    #[serde(default)]
    pub perms: Option<String>,
}

/// Permission names the backend checks before mutating anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    AddSite,
    EditSite,
    AddService,
    EditService,
    StartService,
    StopService,
    AddUser,
}

impl Permission {
    pub const ALL: [Self; 7] = [
        Self::AddSite,
        Self::EditSite,
        Self::AddService,
        Self::EditService,
        Self::StartService,
        Self::StopService,
        Self::AddUser,
    ];

    /// Name as written in the backend's permission string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AddSite => "add site",
            Self::EditSite => "edit site",
            Self::AddService => "add service",
            Self::EditService => "edit service",
            Self::StartService => "start service",
            Self::StopService => "stop service",
            Self::AddUser => "add user",
        }
    }
}

/// Parsed permission string: either `all` or a comma-separated list.
///
/// Names the client does not know are kept so they can still be displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Permissions {
    All,
    Listed(Vec<String>),
    #[default]
    None,
}

impl Permissions {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.trim() == "all" {
            return Self::All;
        }
        let names: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();
        if names.is_empty() {
            Self::None
        } else {
            Self::Listed(names)
        }
    }

    #[must_use]
    pub fn allows(&self, permission: Permission) -> bool {
        match self {
            Self::All => true,
            Self::Listed(names) => names.iter().any(|name| name == permission.as_str()),
            Self::None => false,
        }
    }

    /// Known permissions granted, in declaration order.
    #[must_use]
    pub fn granted(&self) -> Vec<Permission> {
        Permission::ALL
            .into_iter()
            .filter(|permission| self.allows(*permission))
            .collect()
    }

    /// Listed names the client has no [`Permission`] for.
    fn unknown(&self) -> impl Iterator<Item = &str> {
        let names: &[String] = match self {
            Self::Listed(names) => names.as_slice(),
            Self::All | Self::None => &[],
        };
        names
            .iter()
            .map(String::as_str)
            .filter(|name| Permission::ALL.iter().all(|known| known.as_str() != *name))
    }
}

/// Header label: known permissions first, then any unknown names as sent.
impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all permissions"),
            Self::None => f.write_str("no permissions"),
            Self::Listed(_) => {
                let known = self.granted();
                let labels = known
                    .iter()
                    .map(|permission| permission.as_str())
                    .chain(self.unknown());
                for (index, label) in labels.enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(label)?;
                }
                Ok(())
            }
        }
    }
}

/// The signed-in user's session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub token: Token,
    pub permissions: Permissions,
}

impl Session {
    /// Build a session from the login response for `username`.
    #[must_use]
    pub fn from_login(username: impl Into<String>, response: LoginResponse) -> Self {
        Self {
            username: username.into(),
            token: response.token,
            permissions: Permissions::parse(response.perms.as_deref().unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_grant_everything_when_all() {
        let perms = Permissions::parse("all");
        assert_eq!(perms, Permissions::All);
        assert!(perms.allows(Permission::AddUser));
        assert_eq!(perms.granted().len(), Permission::ALL.len());
    }

    #[test]
    fn should_parse_comma_separated_list_with_spaces() {
        let perms = Permissions::parse("add site, start service ,,stop service");
        assert!(perms.allows(Permission::AddSite));
        assert!(perms.allows(Permission::StartService));
        assert!(perms.allows(Permission::StopService));
        assert!(!perms.allows(Permission::EditSite));
    }

    #[test]
    fn should_keep_unknown_names() {
        let perms = Permissions::parse("view reports");
        assert_eq!(perms, Permissions::Listed(vec!["view reports".to_string()]));
        assert!(perms.granted().is_empty());
    }

    #[test]
    fn should_label_known_permissions_in_order_then_unknown_names() {
        let perms = Permissions::parse("stop service, view reports, add site");
        assert_eq!(perms.to_string(), "add site, stop service, view reports");
        assert_eq!(Permissions::All.to_string(), "all permissions");
        assert_eq!(Permissions::None.to_string(), "no permissions");
    }

    #[test]
    fn should_treat_blank_string_as_no_permissions() {
        assert_eq!(Permissions::parse(""), Permissions::None);
        assert_eq!(Permissions::parse(" , "), Permissions::None);
    }

    #[test]
    fn should_build_session_from_login_without_perms() {
        let response: LoginResponse = serde_json::from_str(r#"{"token": "t-1"}"#).unwrap();
        let session = Session::from_login("alice", response);
        assert_eq!(session.token.as_str(), "t-1");
        assert_eq!(session.permissions, Permissions::None);
    }

    #[test]
    fn should_format_bearer_header() {
        assert_eq!(Token::new("abc").bearer_header(), "Bearer abc");
    }

    #[test]
    fn should_redact_secrets_in_debug_output() {
        let creds = Credentials::new("alice", "hunter2");
        let token = Token::new("secret-token");
        assert!(!format!("{creds:?}").contains("hunter2"));
        assert!(!format!("{token:?}").contains("secret-token"));
    }
}
