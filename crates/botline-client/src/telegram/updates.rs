//! Update polling, webhook management, and bot identity.

use super::request::ApiRequest;
use super::BotClient;
use botline_core::{error::BotError, types::Update};
use serde_json::Value;
use tracing::{debug, warn};

/// Server-side default for `max_connections`.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 40;

impl BotClient {
    /// Long-poll `getUpdates`.
    ///
    /// On success with a non-empty batch the cursor moves to the highest
    /// returned `update_id`. Empty batches and failures leave it alone.
    /// An empty `allowed_updates` is not sent, keeping the server's
    /// previous setting.
    pub async fn get_updates(
        &mut self,
        offset: i64,
        limit: u32,
        timeout_secs: u32,
        allowed_updates: &[&str],
    ) -> Result<Vec<Update>, BotError> {
        let mut request = ApiRequest::new("getUpdates")
            .param("offset", offset)
            .param("limit", limit)
            .param("timeout", timeout_secs);
        if !allowed_updates.is_empty() {
            request = request.json("allowed_updates", allowed_updates)?;
        }

        let updates: Vec<Update> = self.call(request).await?;
        self.advance_cursor(&updates);
        Ok(updates)
    }

    /// Poll for the updates after the cursor using the configured limit,
    /// timeout, and allowed kinds.
    pub async fn poll_next(&mut self) -> Result<Vec<Update>, BotError> {
        let offset = if self.last_update_id > 0 {
            self.last_update_id.saturating_add(1)
        } else {
            0
        };
        let owned = self.allowed_updates.clone();
        let allowed: Vec<&str> = owned.iter().map(String::as_str).collect();
        self.get_updates(offset, self.poll_limit, self.poll_timeout_secs, &allowed)
            .await
    }

    fn advance_cursor(&mut self, updates: &[Update]) {
        let Some(highest) = updates.iter().map(|u| u.update_id).max() else {
            return;
        };
        if highest < self.last_update_id {
            warn!(
                "telegram getUpdates returned update {highest} behind cursor {}, keeping cursor",
                self.last_update_id
            );
            return;
        }
        debug!("telegram cursor {} -> {highest}", self.last_update_id);
        self.last_update_id = highest;
    }

    /// Register an HTTPS webhook. `ip_address` overrides DNS resolution.
    pub async fn set_webhook(
        &self,
        url: &str,
        ip_address: Option<&str>,
        max_connections: u32,
        allowed_updates: &[&str],
    ) -> Result<bool, BotError> {
        let mut request = ApiRequest::new("setWebhook")
            .param("url", url)
            .param_opt("ip_address", ip_address.filter(|ip| !ip.is_empty()))
            .param("max_connections", max_connections);
        if !allowed_updates.is_empty() {
            request = request.json("allowed_updates", allowed_updates)?;
        }
        self.call(request).await
    }

    pub async fn delete_webhook(&self, drop_pending_updates: bool) -> Result<bool, BotError> {
        let request =
            ApiRequest::new("deleteWebhook").param("drop_pending_updates", drop_pending_updates);
        self.call(request).await
    }

    /// Current webhook status (a `WebhookInfo` object).
    pub async fn get_webhook_info(&self) -> Result<Value, BotError> {
        self.call(ApiRequest::new("getWebhookInfo")).await
    }

    /// The bot's own `User` object.
    pub async fn get_me(&self) -> Result<Value, BotError> {
        self.call(ApiRequest::new("getMe")).await
    }

    /// Bot username, or an empty string if it cannot be fetched.
    pub async fn username(&self) -> String {
        self.identity_field("username").await
    }

    /// Bot first name, or an empty string if it cannot be fetched.
    pub async fn first_name(&self) -> String {
        self.identity_field("first_name").await
    }

    async fn identity_field(&self, field: &str) -> String {
        match self.get_me().await {
            Ok(me) => me
                .get(field)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            Err(e) => {
                debug!("telegram getMe for {field} failed: {e}");
                String::new()
            }
        }
    }
}
