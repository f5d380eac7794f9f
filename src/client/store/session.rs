//! The single source of truth for "who is logged in".
//!
//! [`SessionStore`] is owned by the application root and handed to the view tree through
//! context. Views only read it; [`SessionSlot::login`] and [`SessionSlot::logout`] are the
//! only paths that write it.

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api::{ApiClient, HttpTransport},
    error::Error,
    store::persistence::{MemoryPersistence, SessionPersistence},
};
use crate::model::auth::{LoginRequest, RegistrationRole, Session, SignupRequest};

#[derive(Clone, Debug, PartialEq)]
pub enum SessionState {
    /// The persisted session has not been read yet
    Unknown,
    Absent,
    Present(Session),
}

impl SessionState {
    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Present(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_determined(&self) -> bool {
        !matches!(self, SessionState::Unknown)
    }
}

pub struct SessionStore {
    state: SessionState,
    persistence: Box<dyn SessionPersistence>,
}

impl SessionStore {
    pub fn new(persistence: Box<dyn SessionPersistence>) -> Self {
        Self {
            state: SessionState::Unknown,
            persistence,
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryPersistence::default()))
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// `None` exactly when nobody is logged in, or the persisted session has not been read yet
    pub fn current_session(&self) -> Option<&Session> {
        self.state.session()
    }

    /// Reads the persisted session once, moving out of [`SessionState::Unknown`].
    ///
    /// Unreadable or incomplete persisted data is discarded and yields an absent session.
    pub fn hydrate(&mut self) -> &SessionState {
        if self.state.is_determined() {
            return &self.state;
        }

        self.state = match self.persistence.load() {
            Ok(Some(raw)) => match serde_json::from_str::<Session>(&raw) {
                Ok(session) => {
                    tracing::info!(username = %session.username(), "Restored session");
                    SessionState::Present(session)
                }
                Err(e) => {
                    tracing::warn!("Discarding unreadable persisted session: {}", e);
                    if let Err(e) = self.persistence.clear() {
                        tracing::error!("{}", e);
                    }
                    SessionState::Absent
                }
            },
            Ok(None) => SessionState::Absent,
            Err(e) => {
                tracing::error!("{}", e);
                SessionState::Absent
            }
        };

        &self.state
    }

    /// Replaces the current session and persists it
    pub fn establish(&mut self, session: Session) {
        match serde_json::to_string(&session) {
            Ok(raw) => {
                if let Err(e) = self.persistence.save(&raw) {
                    tracing::error!("{}", e);
                }
            }
            Err(e) => tracing::error!("Failed to serialize session: {}", e),
        }

        tracing::info!(username = %session.username(), "Session established");
        self.state = SessionState::Present(session);
    }

    /// Drops the session and its persisted copy. Never fails.
    pub fn clear(&mut self) {
        if let Err(e) = self.persistence.clear() {
            tracing::error!("{}", e);
        }

        if let SessionState::Present(session) = &self.state {
            tracing::info!(username = %session.username(), "Session cleared");
        }
        self.state = SessionState::Absent;
    }
}

/// A handle through which the session store can be reached.
///
/// Implemented for the store itself and for the reactive signal the view tree shares, so
/// the session operations below run unchanged in tests and in the UI.
#[allow(async_fn_in_trait)]
pub trait SessionSlot {
    fn read_store<R>(&self, f: impl FnOnce(&SessionStore) -> R) -> R;
    fn write_store<R>(&mut self, f: impl FnOnce(&mut SessionStore) -> R) -> R;

    fn current_session(&self) -> Option<Session> {
        self.read_store(|store| store.current_session().cloned())
    }

    fn session_state(&self) -> SessionState {
        self.read_store(|store| store.state().clone())
    }

    /// Signs in and publishes the session. A failed sign in leaves the previous session
    /// untouched.
    async fn login<T: HttpTransport>(
        &mut self,
        api: &ApiClient<T>,
        username: &str,
        password: &str,
    ) -> Result<Session, Error> {
        let credentials = LoginRequest {
            username: username.trim().to_string(),
            password: password.to_string(),
        };

        let session = match api.sign_in(&credentials).await {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(username = %credentials.username, "{}", e);
                return Err(e);
            }
        };

        self.write_store(|store| store.establish(session.clone()));

        Ok(session)
    }

    /// Creates an account. The caller still has to log in afterwards.
    async fn register<T: HttpTransport>(
        &self,
        api: &ApiClient<T>,
        username: &str,
        email: &str,
        password: &str,
        roles: &[RegistrationRole],
    ) -> Result<(), Error> {
        let request = SignupRequest {
            username: username.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
            roles: roles.to_vec(),
        };

        if let Err(e) = api.sign_up(&request).await {
            tracing::warn!(username = %request.username, "{}", e);
            return Err(e);
        }

        tracing::info!(username = %request.username, "Registered account");

        Ok(())
    }

    fn logout(&mut self) {
        self.write_store(SessionStore::clear);
    }
}

impl SessionSlot for SessionStore {
    fn read_store<R>(&self, f: impl FnOnce(&SessionStore) -> R) -> R {
        f(self)
    }

    fn write_store<R>(&mut self, f: impl FnOnce(&mut SessionStore) -> R) -> R {
        f(self)
    }
}

impl SessionSlot for Signal<SessionStore> {
    fn read_store<R>(&self, f: impl FnOnce(&SessionStore) -> R) -> R {
        f(&self.read())
    }

    fn write_store<R>(&mut self, f: impl FnOnce(&mut SessionStore) -> R) -> R {
        f(&mut self.write())
    }
}
