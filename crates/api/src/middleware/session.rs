//! In-process table of admin login tokens.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use rand::{Rng, distributions::Alphanumeric};
use tokio::sync::RwLock;

const TOKEN_LENGTH: usize = 48;

/// Opaque bearer tokens mapped to their expiry.
#[derive(Debug)]
pub struct SessionStore {
    ttl: Duration,
    tokens: RwLock<HashMap<String, DateTime<Utc>>>,
}

fn generate_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            tokens: RwLock::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Starts a session and returns its token. Expired sessions are dropped.
    pub async fn issue(&self) -> String {
        let token = generate_token();
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(self.ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        let mut tokens = self.tokens.write().await;
        tokens.retain(|_, expires_at| *expires_at > now);
        tokens.insert(token.clone(), expires_at);
        token
    }

    /// Whether `token` names a live session. Expired sessions are dropped.
    pub async fn validate(&self, token: &str) -> bool {
        let now = Utc::now();
        {
            let tokens = self.tokens.read().await;
            match tokens.get(token) {
                Some(expires_at) if *expires_at > now => return true,
                Some(_) => {}
                None => return false,
            }
        }

        self.tokens.write().await.retain(|_, expires_at| *expires_at > now);
        false
    }

    /// Ends a session. Returns whether it existed.
    pub async fn revoke(&self, token: &str) -> bool {
        self.tokens.write().await.remove(token).is_some()
    }

    pub async fn active_count(&self) -> usize {
        let now = Utc::now();
        self.tokens
            .read()
            .await
            .values()
            .filter(|expires_at| **expires_at > now)
            .count()
    }
}
