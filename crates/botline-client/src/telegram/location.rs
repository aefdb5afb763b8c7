use super::request::ApiRequest;
use super::BotClient;
use crate::options::{LiveLocationOptions, LocationOptions, VenueOptions};
use botline_core::{
    error::BotError,
    markup::InlineKeyboardMarkup,
    types::{ChatId, MessageTarget},
};
use serde_json::Value;

impl ApiRequest {
    fn target(self, target: MessageTarget) -> Self {
        match target {
            MessageTarget::Chat {
                chat_id,
                message_id,
            } => self
                .param("chat_id", chat_id)
                .param("message_id", message_id),
            MessageTarget::Inline(inline_message_id) => {
                self.param("inline_message_id", inline_message_id)
            }
        }
    }
}

impl BotClient {
    /// Send a point on the map; set `live_period` for a live location.
    pub async fn send_location(
        &self,
        chat_id: impl Into<ChatId>,
        latitude: f64,
        longitude: f64,
        options: &LocationOptions,
    ) -> Result<Value, BotError> {
        let request = ApiRequest::new("sendLocation")
            .param("chat_id", chat_id.into())
            .param("latitude", latitude)
            .param("longitude", longitude)
            .fields(options)?;
        self.call(request).await
    }

    /// Move a live location. Returns the edited `Message`, or `true` for
    /// inline messages.
    pub async fn edit_message_live_location(
        &self,
        target: MessageTarget,
        latitude: f64,
        longitude: f64,
        options: &LiveLocationOptions,
    ) -> Result<Value, BotError> {
        let request = ApiRequest::new("editMessageLiveLocation")
            .target(target)
            .param("latitude", latitude)
            .param("longitude", longitude)
            .fields(options)?;
        self.call(request).await
    }

    /// Stop updating a live location before `live_period` expires.
    pub async fn stop_message_live_location(
        &self,
        target: MessageTarget,
        reply_markup: Option<&InlineKeyboardMarkup>,
    ) -> Result<Value, BotError> {
        let mut request = ApiRequest::new("stopMessageLiveLocation").target(target);
        if let Some(markup) = reply_markup {
            request = request.json("reply_markup", markup)?;
        }
        self.call(request).await
    }

    pub async fn send_venue(
        &self,
        chat_id: impl Into<ChatId>,
        latitude: f64,
        longitude: f64,
        title: &str,
        address: &str,
        options: &VenueOptions,
    ) -> Result<Value, BotError> {
        let request = ApiRequest::new("sendVenue")
            .param("chat_id", chat_id.into())
            .param("latitude", latitude)
            .param("longitude", longitude)
            .param("title", title)
            .param("address", address)
            .fields(options)?;
        self.call(request).await
    }
}
