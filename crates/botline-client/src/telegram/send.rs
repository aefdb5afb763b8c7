//! Message sending: text, forwards, copies, and media.
//!
//! Passing [`InputFile::Local`] anywhere switches the call to a multipart
//! upload; an unreadable path fails before any request is made.

use super::request::ApiRequest;
use super::BotClient;
use crate::options::{
    AnimationOptions, AudioOptions, CopyOptions, DocumentOptions, MediaGroupOptions,
    PhotoOptions, TextOptions, VideoNoteOptions, VideoOptions, VoiceOptions,
};
use botline_core::{
    error::BotError,
    media::{InputFile, InputMedia},
    types::ChatId,
};
use serde_json::Value;

impl BotClient {
    /// Send a text message. Returns the sent `Message`.
    pub async fn send_message(
        &self,
        chat_id: impl Into<ChatId>,
        text: &str,
        options: &TextOptions,
    ) -> Result<Value, BotError> {
        let request = ApiRequest::new("sendMessage")
            .param("chat_id", chat_id.into())
            .param("text", text)
            .fields(options)?;
        self.call(request).await
    }

    pub async fn forward_message(
        &self,
        chat_id: impl Into<ChatId>,
        from_chat_id: impl Into<ChatId>,
        message_id: i64,
        disable_notification: bool,
    ) -> Result<Value, BotError> {
        let request = ApiRequest::new("forwardMessage")
            .param("chat_id", chat_id.into())
            .param("from_chat_id", from_chat_id.into())
            .param("message_id", message_id)
            .param("disable_notification", disable_notification);
        self.call(request).await
    }

    /// Copy a message without the forward header. Returns a `MessageId`.
    pub async fn copy_message(
        &self,
        chat_id: impl Into<ChatId>,
        from_chat_id: impl Into<ChatId>,
        message_id: i64,
        options: &CopyOptions,
    ) -> Result<Value, BotError> {
        let request = ApiRequest::new("copyMessage")
            .param("chat_id", chat_id.into())
            .param("from_chat_id", from_chat_id.into())
            .param("message_id", message_id)
            .fields(options)?;
        self.call(request).await
    }

    pub async fn send_photo(
        &self,
        chat_id: impl Into<ChatId>,
        photo: InputFile,
        options: &PhotoOptions,
    ) -> Result<Value, BotError> {
        let request = ApiRequest::new("sendPhoto")
            .param("chat_id", chat_id.into())
            .file("photo", photo)
            .fields(options)?;
        self.call(request).await
    }

    pub async fn send_audio(
        &self,
        chat_id: impl Into<ChatId>,
        audio: InputFile,
        options: &AudioOptions,
    ) -> Result<Value, BotError> {
        let request = ApiRequest::new("sendAudio")
            .param("chat_id", chat_id.into())
            .file("audio", audio)
            .attached_file("thumb", options.thumb.clone())
            .fields(options)?;
        self.call(request).await
    }

    pub async fn send_document(
        &self,
        chat_id: impl Into<ChatId>,
        document: InputFile,
        options: &DocumentOptions,
    ) -> Result<Value, BotError> {
        let request = ApiRequest::new("sendDocument")
            .param("chat_id", chat_id.into())
            .file("document", document)
            .attached_file("thumb", options.thumb.clone())
            .fields(options)?;
        self.call(request).await
    }

    pub async fn send_video(
        &self,
        chat_id: impl Into<ChatId>,
        video: InputFile,
        options: &VideoOptions,
    ) -> Result<Value, BotError> {
        let request = ApiRequest::new("sendVideo")
            .param("chat_id", chat_id.into())
            .file("video", video)
            .attached_file("thumb", options.thumb.clone())
            .fields(options)?;
        self.call(request).await
    }

    /// GIF or H.264/MPEG-4 AVC video without sound.
    pub async fn send_animation(
        &self,
        chat_id: impl Into<ChatId>,
        animation: InputFile,
        options: &AnimationOptions,
    ) -> Result<Value, BotError> {
        let request = ApiRequest::new("sendAnimation")
            .param("chat_id", chat_id.into())
            .file("animation", animation)
            .attached_file("thumb", options.thumb.clone())
            .fields(options)?;
        self.call(request).await
    }

    /// OGG/OPUS voice note.
    pub async fn send_voice(
        &self,
        chat_id: impl Into<ChatId>,
        voice: InputFile,
        options: &VoiceOptions,
    ) -> Result<Value, BotError> {
        let request = ApiRequest::new("sendVoice")
            .param("chat_id", chat_id.into())
            .file("voice", voice)
            .fields(options)?;
        self.call(request).await
    }

    /// Rounded square MPEG-4 video.
    pub async fn send_video_note(
        &self,
        chat_id: impl Into<ChatId>,
        video_note: InputFile,
        options: &VideoNoteOptions,
    ) -> Result<Value, BotError> {
        let request = ApiRequest::new("sendVideoNote")
            .param("chat_id", chat_id.into())
            .file("video_note", video_note)
            .attached_file("thumb", options.thumb.clone())
            .fields(options)?;
        self.call(request).await
    }

    /// Send 2-10 items as an album. Returns the array of sent messages.
    pub async fn send_media_group(
        &self,
        chat_id: impl Into<ChatId>,
        media: Vec<InputMedia>,
        options: &MediaGroupOptions,
    ) -> Result<Value, BotError> {
        let request = ApiRequest::new("sendMediaGroup")
            .param("chat_id", chat_id.into())
            .media("media", media)?
            .fields(options)?;
        self.call(request).await
    }
}
