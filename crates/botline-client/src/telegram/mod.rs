//! Telegram Bot API client.
//!
//! Long polling via `getUpdates`, webhook management, and the send family.
//! Docs: <https://core.telegram.org/bots/api>

mod location;
mod request;
mod send;
mod updates;


use botline_core::{
    config::{Config, PollingConfig},
    traits::Transport,
};
use std::sync::Arc;

use crate::http::{HttpTransport, DEFAULT_API_URL};

pub use updates::DEFAULT_MAX_CONNECTIONS;

/// Bot API client owning the credential and the update cursor.
///
/// Mutating methods take `&mut self`; share one client across tasks only
/// behind a lock.
pub struct BotClient {
    token: String,
    /// Identifier of the last update returned by a successful poll.
    last_update_id: i64,
    debug: bool,
    transport: Arc<dyn Transport>,
    poll_limit: u32,
    poll_timeout_secs: u32,
    allowed_updates: Vec<String>,
}

impl BotClient {
    /// Create a client talking to the public Bot API endpoint.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_transport(token, Arc::new(HttpTransport::new(DEFAULT_API_URL)))
    }

    /// Create a client over an arbitrary transport, polling with the
    /// default [`PollingConfig`].
    pub fn with_transport(token: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        let polling = PollingConfig::default();
        Self {
            token: token.into(),
            last_update_id: 0,
            debug: false,
            transport,
            poll_limit: polling.limit,
            poll_timeout_secs: polling.timeout_secs,
            allowed_updates: polling.allowed_updates,
        }
    }

    /// Create a client from a loaded config: credential, endpoint, debug
    /// mode, and the parameters used by [`BotClient::poll_next`].
    pub fn from_config(config: &Config) -> Self {
        let transport = Arc::new(HttpTransport::new(config.bot.api_url.clone()));
        let mut client = Self::with_transport(config.bot.token.clone(), transport);
        client.debug = config.bot.debug;
        client.poll_limit = config.polling.limit;
        client.poll_timeout_secs = config.polling.timeout_secs;
        client.allowed_updates = config.polling.allowed_updates.clone();
        client
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Replace the credential. Not validated locally.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = token.into();
    }

    pub fn last_update_id(&self) -> i64 {
        self.last_update_id
    }

    /// Replace the cursor unconditionally.
    pub fn set_last_update_id(&mut self, last_update_id: i64) {
        self.last_update_id = last_update_id;
    }

    pub fn debug_mode(&self) -> bool {
        self.debug
    }

    /// When enabled, every raw response body is logged at info level.
    pub fn set_debug_mode(&mut self, enabled: bool) {
        self.debug = enabled;
    }

    pub fn transport_name(&self) -> &str {
        self.transport.name()
    }
}
