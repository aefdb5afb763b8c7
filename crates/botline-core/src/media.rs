//! File references and input-media descriptors.
//!
//! Docs: <https://core.telegram.org/bots/api#inputmedia>

use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

/// Where the bytes of a file come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputFile {
    /// A `file_id` known to Telegram, or an HTTP URL Telegram can fetch.
    Remote(String),
    /// A path on local disk, uploaded as a multipart part.
    Local(PathBuf),
}

impl InputFile {
    pub fn remote(file_id_or_url: impl Into<String>) -> Self {
        Self::Remote(file_id_or_url.into())
    }

    pub fn path(path: impl AsRef<Path>) -> Self {
        Self::Local(path.as_ref().to_path_buf())
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local(_))
    }
}

/// Only remote references have a wire form. Local files must be swapped for
/// an `attach://<name>` reference before the descriptor is serialized.
impl Serialize for InputFile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Remote(reference) => serializer.serialize_str(reference),
            Self::Local(path) => Err(serde::ser::Error::custom(format!(
                "local file {} was not attached",
                path.display()
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputMediaPhoto {
    pub media: InputFile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputMediaVideo {
    pub media: InputFile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<InputFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_streaming: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputMediaAnimation {
    pub media: InputFile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<InputFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputMediaAudio {
    pub media: InputFile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<InputFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputMediaDocument {
    pub media: InputFile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<InputFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_content_type_detection: Option<bool>,
}

/// One item of a media group, tagged by `type` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputMedia {
    Photo(InputMediaPhoto),
    Video(InputMediaVideo),
    Animation(InputMediaAnimation),
    Audio(InputMediaAudio),
    Document(InputMediaDocument),
}

impl InputMedia {
    pub fn photo(media: InputFile) -> Self {
        Self::Photo(InputMediaPhoto {
            media,
            caption: None,
            parse_mode: None,
        })
    }

    pub fn video(media: InputFile) -> Self {
        Self::Video(InputMediaVideo {
            media,
            thumb: None,
            caption: None,
            parse_mode: None,
            width: None,
            height: None,
            duration: None,
            supports_streaming: None,
        })
    }

    pub fn animation(media: InputFile) -> Self {
        Self::Animation(InputMediaAnimation {
            media,
            thumb: None,
            caption: None,
            parse_mode: None,
            width: None,
            height: None,
            duration: None,
        })
    }

    pub fn audio(media: InputFile) -> Self {
        Self::Audio(InputMediaAudio {
            media,
            thumb: None,
            caption: None,
            parse_mode: None,
            duration: None,
            performer: None,
            title: None,
        })
    }

    pub fn document(media: InputFile) -> Self {
        Self::Document(InputMediaDocument {
            media,
            thumb: None,
            caption: None,
            parse_mode: None,
            disable_content_type_detection: None,
        })
    }

    pub fn with_caption(mut self, text: impl Into<String>) -> Self {
        let text = Some(text.into());
        match &mut self {
            Self::Photo(m) => m.caption = text,
            Self::Video(m) => m.caption = text,
            Self::Animation(m) => m.caption = text,
            Self::Audio(m) => m.caption = text,
            Self::Document(m) => m.caption = text,
        }
        self
    }

    pub fn with_parse_mode(mut self, mode: impl Into<String>) -> Self {
        let mode = Some(mode.into());
        match &mut self {
            Self::Photo(m) => m.parse_mode = mode,
            Self::Video(m) => m.parse_mode = mode,
            Self::Animation(m) => m.parse_mode = mode,
            Self::Audio(m) => m.parse_mode = mode,
            Self::Document(m) => m.parse_mode = mode,
        }
        self
    }

    /// Thumbnail is ignored for photos, which have none.
    pub fn with_thumb(mut self, thumb: InputFile) -> Self {
        match &mut self {
            Self::Photo(_) => {}
            Self::Video(m) => m.thumb = Some(thumb),
            Self::Animation(m) => m.thumb = Some(thumb),
            Self::Audio(m) => m.thumb = Some(thumb),
            Self::Document(m) => m.thumb = Some(thumb),
        }
        self
    }

    /// The main file and, when set, the thumbnail.
    pub fn files_mut(&mut self) -> (&mut InputFile, Option<&mut InputFile>) {
        match self {
            Self::Photo(m) => (&mut m.media, None),
            Self::Video(m) => (&mut m.media, m.thumb.as_mut()),
            Self::Animation(m) => (&mut m.media, m.thumb.as_mut()),
            Self::Audio(m) => (&mut m.media, m.thumb.as_mut()),
            Self::Document(m) => (&mut m.media, m.thumb.as_mut()),
        }
    }
}
