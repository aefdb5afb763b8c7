//! Identifiers and the update wrapper shared by every Bot API call.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Target chat: numeric id or `@channelusername`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatId {
    Integer(i64),
    Username(String),
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(id) => write!(f, "{id}"),
            Self::Username(name) => f.write_str(name),
        }
    }
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        Self::Integer(id)
    }
}

impl From<&str> for ChatId {
    fn from(name: &str) -> Self {
        Self::Username(name.to_string())
    }
}

impl From<String> for ChatId {
    fn from(name: String) -> Self {
        Self::Username(name)
    }
}

/// One inbound event from `getUpdates`.
///
/// Only `update_id` is interpreted; everything else is kept verbatim in
/// `payload` (e.g. `{"message": {...}}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl Update {
    /// Name of the populated update kind (`"message"`, `"callback_query"`, ...).
    pub fn kind(&self) -> Option<&str> {
        self.payload.keys().next().map(String::as_str)
    }
}

/// Which message an edit applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageTarget {
    /// A message sent by the bot into a chat.
    Chat { chat_id: ChatId, message_id: i64 },
    /// A message sent via the bot in inline mode.
    Inline(String),
}

impl MessageTarget {
    pub fn chat(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self::Chat {
            chat_id: chat_id.into(),
            message_id,
        }
    }

    pub fn inline(inline_message_id: impl Into<String>) -> Self {
        Self::Inline(inline_message_id.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_id_display() {
        assert_eq!(ChatId::from(-100123).to_string(), "-100123");
        assert_eq!(ChatId::from("@news").to_string(), "@news");
    }

    #[test]
    fn test_update_keeps_payload() {
        let json = r#"{"update_id": 42, "message": {"message_id": 1, "text": "hi"}}"#;
        let update: Update = serde_json::from_str(json).unwrap();
        assert_eq!(update.update_id, 42);
        assert_eq!(update.kind(), Some("message"));
        assert_eq!(update.payload["message"]["text"], "hi");
    }

    #[test]
    fn test_update_serializes_flat() {
        let update: Update =
            serde_json::from_str(r#"{"update_id": 7, "edited_message": {"message_id": 3}}"#)
                .unwrap();
        let back = serde_json::to_value(&update).unwrap();
        assert_eq!(
            back,
            serde_json::json!({"update_id": 7, "edited_message": {"message_id": 3}})
        );
    }
}
