//! # botline-client
//!
//! Telegram Bot API client: one method per remote operation, one HTTP call
//! per method.

pub mod http;
pub mod options;
pub mod telegram;

pub use botline_core::{
    error::BotError,
    markup, media,
    types::{ChatId, MessageTarget, Update},
};
pub use http::HttpTransport;
pub use telegram::BotClient;
