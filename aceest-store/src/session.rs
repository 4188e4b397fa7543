use std::{fmt, str::FromStr, sync::Arc};

use async_trait::async_trait;
use log::debug;
use rustc_hash::FxHashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Opaque token identifying a logged-in client.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct SessionToken(Uuid);

impl SessionToken {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_simple())
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionToken(..)")
    }
}

impl FromStr for SessionToken {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[mockall::automock]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Opens a session for `registration_id`, replacing any session that
    /// user already had.
    async fn open(&self, registration_id: &str) -> SessionToken;
    async fn resolve(&self, token: SessionToken) -> Option<String>;
    async fn close(&self, token: SessionToken);
}

/// Live sessions, at most one per registration ID.
#[derive(Debug, Default)]
struct Sessions {
    tokens: FxHashMap<SessionToken, String>,
    by_user: FxHashMap<String, SessionToken>,
}

impl Sessions {
    fn remove(&mut self, token: SessionToken) -> Option<String> {
        let registration_id = self.tokens.remove(&token)?;
        if self.by_user.get(&registration_id) == Some(&token) {
            self.by_user.remove(&registration_id);
        }
        Some(registration_id)
    }
}

#[derive(Clone, Default)]
pub struct SessionRepositoryImpl {
    sessions: Arc<Mutex<Sessions>>,
}

impl SessionRepositoryImpl {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for SessionRepositoryImpl {
    async fn open(&self, registration_id: &str) -> SessionToken {
        let token = SessionToken::generate();
        let mut sessions = self.sessions.lock().await;
        if let Some(previous) = sessions.by_user.insert(registration_id.to_owned(), token) {
            sessions.tokens.remove(&previous);
            debug!("Replaced previous session of {}", registration_id);
        }
        sessions.tokens.insert(token, registration_id.to_owned());
        debug!("Opened session for {}", registration_id);
        token
    }

    async fn resolve(&self, token: SessionToken) -> Option<String> {
        self.sessions.lock().await.tokens.get(&token).cloned()
    }

    async fn close(&self, token: SessionToken) {
        if let Some(registration_id) = self.sessions.lock().await.remove(token) {
            debug!("Closed session for {}", registration_id);
        }
    }
}
