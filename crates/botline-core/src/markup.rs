//! Reply markup builders: inline keyboards, reply keyboards, keyboard
//! removal and forced replies.
//!
//! Docs: <https://core.telegram.org/bots/api#inlinekeyboardmarkup>

use serde::{Deserialize, Serialize};

/// What pressing an inline button does. Exactly one per button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InlineAction {
    /// Open an HTTP or `tg://` URL.
    Url(String),
    /// Send a callback query carrying 1-64 bytes of data.
    CallbackData(String),
    /// Let the user pick a chat and insert the bot's username plus this query.
    SwitchInlineQuery(String),
    /// Insert the bot's username plus this query in the current chat.
    SwitchInlineQueryCurrentChat(String),
}

/// One button of an inline keyboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    #[serde(flatten)]
    pub action: InlineAction,
}

impl InlineKeyboardButton {
    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: InlineAction::Url(url.into()),
        }
    }

    pub fn callback(text: impl Into<String>, callback_data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: InlineAction::CallbackData(callback_data.into()),
        }
    }

    /// An empty query inserts only the bot's username.
    pub fn switch_inline(text: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: InlineAction::SwitchInlineQuery(query.into()),
        }
    }

    pub fn switch_inline_current_chat(text: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: InlineAction::SwitchInlineQueryCurrentChat(query.into()),
        }
    }
}

/// Keyboard attached under a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

/// Build an inline keyboard from rows of buttons.
pub fn inline_keyboard(rows: Vec<Vec<InlineKeyboardButton>>) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup {
        inline_keyboard: rows,
    }
}

/// Restricts which polls a poll-request button may create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardButtonPollType {
    /// `"quiz"`, `"regular"`, or empty for any kind.
    #[serde(rename = "type")]
    pub kind: String,
}

impl KeyboardButtonPollType {
    pub fn any() -> Self {
        Self::default()
    }

    pub fn quiz() -> Self {
        Self {
            kind: "quiz".into(),
        }
    }

    pub fn regular() -> Self {
        Self {
            kind: "regular".into(),
        }
    }
}

/// One button of a reply keyboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardButton {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_contact: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_location: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_poll: Option<KeyboardButtonPollType>,
}

impl KeyboardButton {
    /// Plain text button; both request flags are sent as `false`.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_requests(text, false, false)
    }

    pub fn with_requests(
        text: impl Into<String>,
        request_contact: bool,
        request_location: bool,
    ) -> Self {
        Self {
            text: text.into(),
            request_contact: Some(request_contact),
            request_location: Some(request_location),
            request_poll: None,
        }
    }

    /// Button asking the user to create a poll and send it to the bot.
    pub fn poll(text: impl Into<String>, poll_type: KeyboardButtonPollType) -> Self {
        Self {
            text: text.into(),
            request_contact: None,
            request_location: None,
            request_poll: Some(poll_type),
        }
    }
}

/// Custom keyboard replacing the user's letter keyboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyKeyboardMarkup {
    pub keyboard: Vec<Vec<KeyboardButton>>,
    pub resize_keyboard: bool,
    pub one_time_keyboard: bool,
    pub selective: bool,
}

/// Build a reply keyboard with every flag off.
pub fn reply_keyboard(rows: Vec<Vec<KeyboardButton>>) -> ReplyKeyboardMarkup {
    ReplyKeyboardMarkup {
        keyboard: rows,
        resize_keyboard: false,
        one_time_keyboard: false,
        selective: false,
    }
}

impl ReplyKeyboardMarkup {
    pub fn resize(mut self, resize_keyboard: bool) -> Self {
        self.resize_keyboard = resize_keyboard;
        self
    }

    pub fn one_time(mut self, one_time_keyboard: bool) -> Self {
        self.one_time_keyboard = one_time_keyboard;
        self
    }

    pub fn selective(mut self, selective: bool) -> Self {
        self.selective = selective;
        self
    }
}

/// Removes the current custom keyboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyKeyboardRemove {
    /// Always `true` on the wire.
    pub remove_keyboard: bool,
    pub selective: bool,
}

pub fn reply_keyboard_remove(selective: bool) -> ReplyKeyboardRemove {
    ReplyKeyboardRemove {
        remove_keyboard: true,
        selective,
    }
}

/// Makes clients show a reply interface, as if the user tapped "Reply".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForceReply {
    /// Always `true` on the wire.
    pub force_reply: bool,
    pub selective: bool,
}

pub fn force_reply(selective: bool) -> ForceReply {
    ForceReply {
        force_reply: true,
        selective,
    }
}

/// Any markup accepted by the `reply_markup` parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReplyMarkup {
    InlineKeyboard(InlineKeyboardMarkup),
    ReplyKeyboard(ReplyKeyboardMarkup),
    Remove(ReplyKeyboardRemove),
    ForceReply(ForceReply),
}

impl From<InlineKeyboardMarkup> for ReplyMarkup {
    fn from(markup: InlineKeyboardMarkup) -> Self {
        Self::InlineKeyboard(markup)
    }
}

impl From<ReplyKeyboardMarkup> for ReplyMarkup {
    fn from(markup: ReplyKeyboardMarkup) -> Self {
        Self::ReplyKeyboard(markup)
    }
}

impl From<ReplyKeyboardRemove> for ReplyMarkup {
    fn from(markup: ReplyKeyboardRemove) -> Self {
        Self::Remove(markup)
    }
}

impl From<ForceReply> for ReplyMarkup {
    fn from(markup: ForceReply) -> Self {
        Self::ForceReply(markup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_inline_keyboard_wire_shape() {
        let kb = inline_keyboard(vec![vec![InlineKeyboardButton::url("A", "http://x")]]);
        assert_eq!(
            serde_json::to_value(&kb).unwrap(),
            json!({"inline_keyboard": [[{"text": "A", "url": "http://x"}]]})
        );
    }

    #[test]
    fn test_inline_button_variants() {
        let row = vec![
            InlineKeyboardButton::callback("Yes", "vote:yes"),
            InlineKeyboardButton::switch_inline("Share", ""),
            InlineKeyboardButton::switch_inline_current_chat("Here", "q"),
        ];
        assert_eq!(
            serde_json::to_value(&row).unwrap(),
            json!([
                {"text": "Yes", "callback_data": "vote:yes"},
                {"text": "Share", "switch_inline_query": ""},
                {"text": "Here", "switch_inline_query_current_chat": "q"}
            ])
        );
    }

    #[test]
    fn test_inline_button_parses_back() {
        let button: InlineKeyboardButton =
            serde_json::from_str(r#"{"text": "Go", "url": "tg://resolve"}"#).unwrap();
        assert_eq!(button, InlineKeyboardButton::url("Go", "tg://resolve"));
    }

    #[test]
    fn test_reply_keyboard_defaults() {
        let kb = reply_keyboard(vec![vec![KeyboardButton::new("Menu")]]);
        assert_eq!(
            serde_json::to_value(&kb).unwrap(),
            json!({
                "keyboard": [[{"text": "Menu", "request_contact": false, "request_location": false}]],
                "resize_keyboard": false,
                "one_time_keyboard": false,
                "selective": false
            })
        );
    }

    #[test]
    fn test_reply_keyboard_flags() {
        let kb = reply_keyboard(vec![vec![KeyboardButton::with_requests("Share", true, false)]])
            .resize(true)
            .one_time(true);
        let value = serde_json::to_value(&kb).unwrap();
        assert_eq!(value["resize_keyboard"], true);
        assert_eq!(value["one_time_keyboard"], true);
        assert_eq!(value["selective"], false);
        assert_eq!(value["keyboard"][0][0]["request_contact"], true);
    }

    #[test]
    fn test_poll_button() {
        let button = KeyboardButton::poll("New quiz", KeyboardButtonPollType::quiz());
        assert_eq!(
            serde_json::to_value(&button).unwrap(),
            json!({"text": "New quiz", "request_poll": {"type": "quiz"}})
        );
        let any = KeyboardButton::poll("Any poll", KeyboardButtonPollType::any());
        assert_eq!(
            serde_json::to_value(&any).unwrap()["request_poll"],
            json!({"type": ""})
        );
    }

    #[test]
    fn test_remove_and_force_reply() {
        assert_eq!(
            serde_json::to_value(reply_keyboard_remove(false)).unwrap(),
            json!({"remove_keyboard": true, "selective": false})
        );
        assert_eq!(
            serde_json::to_value(force_reply(true)).unwrap(),
            json!({"force_reply": true, "selective": true})
        );
    }

    #[test]
    fn test_reply_markup_is_untagged() {
        let markup: ReplyMarkup = force_reply(false).into();
        assert_eq!(
            serde_json::to_string(&markup).unwrap(),
            r#"{"force_reply":true,"selective":false}"#
        );
    }
}
