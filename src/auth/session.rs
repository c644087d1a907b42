// src/auth/session.rs
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::db::KeyValueStorage;
use crate::errors::ServerError;

/// Storage key holding the serialized signed-in user.
pub const SESSION_STORAGE_KEY: &str = "remediuser";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "photoURL", default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl SessionUser {
    /// The fixed identity every mock login produces.
    pub fn mock() -> Self {
        Self {
            id: "user123".to_string(),
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            photo_url: Some(
                "https://images.unsplash.com/photo-1599566150163-29194dcaad36?q=80&w=987&auto=format&fit=crop"
                    .to_string(),
            ),
        }
    }

    /// Avatar fallback letter.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

/// Identity providers offered on the sign-in button. Only the name is
/// recorded; no real identity is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthProvider {
    Google,
}

impl AuthProvider {
    pub fn parse(raw: &str) -> Result<Self, ServerError> {
        match raw.trim() {
            "google" | "" => Ok(AuthProvider::Google),
            other => Err(ServerError::BadRequest(format!("unknown provider: {other}"))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AuthProvider::Google => "google",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Loading,
    Unauthenticated,
    Authenticated(SessionUser),
}

impl SessionState {
    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

pub type SessionObserver = Box<dyn Fn(&SessionState) + Send + Sync>;

/// Mock authentication context.
///
/// Owned by the application context and handed to whatever needs it; there is
/// no global instance. Writes go through [`SessionStore::login`] and
/// [`SessionStore::logout`] only, and every transition is published to the
/// subscribed observers.
pub struct SessionStore {
    storage: Arc<dyn KeyValueStorage>,
    state: RwLock<SessionState>,
    observers: RwLock<Vec<SessionObserver>>,
    /// Held across store-and-publish so observers see transitions in the
    /// order they were applied.
    transitions: Mutex<()>,
    login_delay: Duration,
}

impl SessionStore {
    /// Starts in `Loading`; call [`SessionStore::rehydrate`] to resolve.
    pub fn new(storage: Arc<dyn KeyValueStorage>, login_delay: Duration) -> Self {
        Self {
            storage,
            state: RwLock::new(SessionState::Loading),
            observers: RwLock::new(Vec::new()),
            transitions: Mutex::new(()),
            login_delay,
        }
    }

    pub fn subscribe(&self, observer: SessionObserver) {
        self.observers.write().push(observer);
    }

    pub fn state(&self) -> SessionState {
        self.state.read().clone()
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        self.state.read().user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(*self.state.read(), SessionState::Authenticated(_))
    }

    /// Settled in the signed-out state. `Loading` does not count: a login
    /// in progress from an authenticated session has not signed anyone out.
    pub fn is_signed_out(&self) -> bool {
        matches!(*self.state.read(), SessionState::Unauthenticated)
    }

    /// Restore the persisted session. Unreadable or corrupt data counts as
    /// "no session"; the corrupt entry is dropped.
    pub fn rehydrate(&self) -> SessionState {
        let next = match self.storage.get_item(SESSION_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<SessionUser>(&raw) {
                Ok(user) => {
                    info!(user_id = %user.id, "session restored");
                    SessionState::Authenticated(user)
                }
                Err(e) => {
                    warn!(error = %e, "discarding unparseable stored session");
                    if let Err(e) = self.storage.remove_item(SESSION_STORAGE_KEY) {
                        warn!(error = %e, "failed to remove corrupt session entry");
                    }
                    SessionState::Unauthenticated
                }
            },
            Ok(None) => SessionState::Unauthenticated,
            Err(e) => {
                warn!(error = %e, "session storage unreadable, starting signed out");
                SessionState::Unauthenticated
            }
        };

        self.transition(next.clone());
        next
    }

    /// Mock sign-in. Succeeds unless persisting the user fails, in which case
    /// the store ends up signed out.
    pub fn login(&self, provider: AuthProvider) -> Result<SessionUser, ServerError> {
        self.transition(SessionState::Loading);
        debug!(provider = provider.as_str(), "login started");

        if !self.login_delay.is_zero() {
            std::thread::sleep(self.login_delay);
        }

        let user = SessionUser::mock();
        let persisted = serde_json::to_string(&user)
            .map_err(|e| ServerError::DbError(format!("serialize session failed: {e}")))
            .and_then(|json| self.storage.set_item(SESSION_STORAGE_KEY, &json));

        match persisted {
            Ok(()) => {
                info!(user_id = %user.id, provider = provider.as_str(), "login successful");
                self.transition(SessionState::Authenticated(user.clone()));
                Ok(user)
            }
            Err(e) => {
                warn!(error = %e, "login failed");
                self.transition(SessionState::Unauthenticated);
                Err(e)
            }
        }
    }

    /// Clear the session. The in-memory user is dropped even when removing
    /// the stored entry fails.
    pub fn logout(&self) -> Result<(), ServerError> {
        self.transition(SessionState::Loading);

        let removed = self.storage.remove_item(SESSION_STORAGE_KEY);
        self.transition(SessionState::Unauthenticated);

        match removed {
            Ok(()) => {
                info!("logged out");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "logout could not clear stored session");
                Err(e)
            }
        }
    }

    /// Observers must not call back into `login`/`logout`.
    fn transition(&self, next: SessionState) {
        let _order = self.transitions.lock();
        *self.state.write() = next.clone();
        for observer in self.observers.read().iter() {
            observer(&next);
        }
    }
}
