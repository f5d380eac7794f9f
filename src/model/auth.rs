//! Authentication payloads and the client-side session identity.
//!
//! A [`Session`] can only be built through [`Session::new`] (or deserialized through the
//! same validation), so a partially populated session is unrepresentable: either every
//! field is present with a non-empty bearer token, or there is no session at all.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role tag attached to an account, used only for route gating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ROLE_USER")]
    User,
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
    /// Any role name this client does not know about. Never grants access.
    #[serde(other)]
    Other,
}

impl Role {
    /// Short display label, `ROLE_ADMIN` -> `admin`
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::Other => "other",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("Session is missing a value for `{0}`")]
    MissingField(&'static str),
    #[error("Session has no roles")]
    NoRoles,
}

/// The authenticated identity held by the session store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SessionRecord", into = "SessionRecord")]
pub struct Session {
    id: Option<i64>,
    username: String,
    email: String,
    roles: BTreeSet<Role>,
    token: String,
}

impl Session {
    pub fn new(
        id: Option<i64>,
        username: impl Into<String>,
        email: impl Into<String>,
        roles: impl IntoIterator<Item = Role>,
        token: impl Into<String>,
    ) -> Result<Self, SessionError> {
        let username = username.into();
        let email = email.into();
        let token = token.into();
        let roles: BTreeSet<Role> = roles.into_iter().collect();

        if username.trim().is_empty() {
            return Err(SessionError::MissingField("username"));
        }
        if email.trim().is_empty() {
            return Err(SessionError::MissingField("email"));
        }
        if token.trim().is_empty() {
            return Err(SessionError::MissingField("token"));
        }
        if roles.is_empty() {
            return Err(SessionError::NoRoles);
        }

        Ok(Self {
            id,
            username,
            email,
            roles,
            token,
        })
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn roles(&self) -> &BTreeSet<Role> {
        &self.roles
    }

    /// Bearer token sent with every authenticated request
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn has_role(&self, role: Role) -> bool {
        role != Role::Other && self.roles.contains(&role)
    }

    /// True when the session holds at least one of `required`.
    ///
    /// An empty `required` slice is satisfied by any session.
    pub fn has_any_role(&self, required: &[Role]) -> bool {
        required.is_empty() || required.iter().any(|role| self.has_role(*role))
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    /// Upper-cased first letter of the username, shown as the sidebar avatar
    pub fn initial(&self) -> String {
        self.username
            .chars()
            .next()
            .map(|first| first.to_uppercase().collect())
            .unwrap_or_default()
    }

    /// The role shown under the username in the sidebar
    pub fn primary_role(&self) -> Role {
        if self.is_admin() {
            Role::Admin
        } else {
            self.roles.iter().next().copied().unwrap_or(Role::Other)
        }
    }
}

/// Unvalidated wire/persisted form of [`Session`].
#[derive(Clone, Debug, Serialize, Deserialize)]
struct SessionRecord {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    username: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    roles: Vec<Role>,
    #[serde(default)]
    token: String,
}

impl TryFrom<SessionRecord> for Session {
    type Error = SessionError;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        Session::new(
            record.id,
            record.username,
            record.email,
            record.roles,
            record.token,
        )
    }
}

impl From<Session> for SessionRecord {
    fn from(session: Session) -> Self {
        Self {
            id: session.id,
            username: session.username,
            email: session.email,
            roles: session.roles.into_iter().collect(),
            token: session.token,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Role requested at registration time, sent as `"user"` or `"admin"`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationRole {
    User,
    Admin,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "role")]
    pub roles: Vec<RegistrationRole>,
}

/// Body of a successful `POST /api/auth/signin`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JwtResponse {
    #[serde(alias = "accessToken")]
    pub token: String,
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl TryFrom<JwtResponse> for Session {
    type Error = SessionError;

    fn try_from(response: JwtResponse) -> Result<Self, Self::Error> {
        Session::new(
            response.id,
            response.username,
            response.email,
            response.roles,
            response.token,
        )
    }
}
