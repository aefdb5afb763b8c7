//! Optional fields of each send operation.
//!
//! Every struct serializes to a flat set of request parameters; unset
//! (`None`) fields are left off the wire so the server applies its own
//! defaults.

use botline_core::markup::{InlineKeyboardMarkup, ReplyMarkup};
use botline_core::media::InputFile;
use serde::Serialize;

/// Delivery options shared by every message-producing call.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SendOptions {
    /// Deliver silently.
    pub disable_notification: Option<bool>,
    pub reply_to_message_id: Option<i64>,
    pub allow_sending_without_reply: Option<bool>,
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendOptions {
    pub fn reply_to(message_id: i64) -> Self {
        Self {
            reply_to_message_id: Some(message_id),
            ..Self::default()
        }
    }

    pub fn with_markup(markup: impl Into<ReplyMarkup>) -> Self {
        Self {
            reply_markup: Some(markup.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TextOptions {
    /// `"MarkdownV2"`, `"HTML"` or `"Markdown"`.
    pub parse_mode: Option<String>,
    pub disable_web_page_preview: Option<bool>,
    #[serde(flatten)]
    pub send: SendOptions,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CopyOptions {
    /// Replaces the original caption; unset keeps it.
    pub caption: Option<String>,
    pub parse_mode: Option<String>,
    #[serde(flatten)]
    pub send: SendOptions,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PhotoOptions {
    pub caption: Option<String>,
    pub parse_mode: Option<String>,
    #[serde(flatten)]
    pub send: SendOptions,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AudioOptions {
    pub caption: Option<String>,
    pub parse_mode: Option<String>,
    /// Seconds.
    pub duration: Option<u32>,
    pub performer: Option<String>,
    pub title: Option<String>,
    #[serde(skip)]
    pub thumb: Option<InputFile>,
    #[serde(flatten)]
    pub send: SendOptions,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DocumentOptions {
    pub caption: Option<String>,
    pub parse_mode: Option<String>,
    pub disable_content_type_detection: Option<bool>,
    #[serde(skip)]
    pub thumb: Option<InputFile>,
    #[serde(flatten)]
    pub send: SendOptions,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct VideoOptions {
    pub caption: Option<String>,
    pub parse_mode: Option<String>,
    pub duration: Option<u32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub supports_streaming: Option<bool>,
    #[serde(skip)]
    pub thumb: Option<InputFile>,
    #[serde(flatten)]
    pub send: SendOptions,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AnimationOptions {
    pub caption: Option<String>,
    pub parse_mode: Option<String>,
    pub duration: Option<u32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    #[serde(skip)]
    pub thumb: Option<InputFile>,
    #[serde(flatten)]
    pub send: SendOptions,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct VoiceOptions {
    pub caption: Option<String>,
    pub parse_mode: Option<String>,
    pub duration: Option<u32>,
    #[serde(flatten)]
    pub send: SendOptions,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct VideoNoteOptions {
    pub duration: Option<u32>,
    /// Diameter of the round video.
    pub length: Option<u32>,
    #[serde(skip)]
    pub thumb: Option<InputFile>,
    #[serde(flatten)]
    pub send: SendOptions,
}

/// Albums accept no reply markup.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MediaGroupOptions {
    pub disable_notification: Option<bool>,
    pub reply_to_message_id: Option<i64>,
    pub allow_sending_without_reply: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LocationOptions {
    /// Radius of uncertainty in meters, 0-1500.
    pub horizontal_accuracy: Option<f64>,
    /// Seconds the location stays live, 60-86400.
    pub live_period: Option<u32>,
    /// Degrees, 1-360. Live locations only.
    pub heading: Option<u32>,
    /// Meters. Live locations only.
    pub proximity_alert_radius: Option<u32>,
    #[serde(flatten)]
    pub send: SendOptions,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LiveLocationOptions {
    pub horizontal_accuracy: Option<f64>,
    pub heading: Option<u32>,
    pub proximity_alert_radius: Option<u32>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct VenueOptions {
    pub foursquare_id: Option<String>,
    pub foursquare_type: Option<String>,
    pub google_place_id: Option<String>,
    pub google_place_type: Option<String>,
    #[serde(flatten)]
    pub send: SendOptions,
}
