//! Request envelope: parameter building, upload collection, one call,
//! response unwrapping.

use super::BotClient;
use botline_core::{
    envelope::{decode, Params, RequestBody, Upload},
    error::BotError,
    media::{InputFile, InputMedia},
};
use serde::{de::DeserializeOwned, Serialize};
use std::path::PathBuf;
use tracing::{debug, info};

/// One pending Bot API call.
#[derive(Debug)]
pub(crate) struct ApiRequest {
    method: &'static str,
    params: Params,
    /// Form field name → local path, read only when the request is executed.
    files: Vec<(String, PathBuf)>,
}

impl ApiRequest {
    pub(crate) fn new(method: &'static str) -> Self {
        Self {
            method,
            params: Params::new(),
            files: Vec::new(),
        }
    }

    pub(crate) fn param(mut self, name: &str, value: impl ToString) -> Self {
        self.params.push(name, value);
        self
    }

    pub(crate) fn param_opt<V: ToString>(mut self, name: &str, value: Option<V>) -> Self {
        self.params.push_opt(name, value);
        self
    }

    /// Structured value as one JSON-text field.
    pub(crate) fn json<T: Serialize + ?Sized>(
        mut self,
        name: &str,
        value: &T,
    ) -> Result<Self, BotError> {
        self.params.push_json(name, value)?;
        Ok(self)
    }

    /// Flatten an options struct into parameters.
    pub(crate) fn fields<T: Serialize>(mut self, fields: &T) -> Result<Self, BotError> {
        self.params.extend_from(fields)?;
        Ok(self)
    }

    /// Main file of a send call: remote references go in as text, local
    /// files become a multipart part under the same field name.
    pub(crate) fn file(mut self, field: &str, file: InputFile) -> Self {
        match file {
            InputFile::Remote(reference) => {
                self.params.push(field, reference);
            }
            InputFile::Local(path) => self.files.push((field.to_string(), path)),
        }
        self
    }

    /// Secondary file (thumbnails) that must be referenced via `attach://`.
    pub(crate) fn attached_file(mut self, field: &str, file: Option<InputFile>) -> Self {
        if let Some(mut file) = file {
            self.attach(&mut file, format!("{field}_file"));
            self.params.push(field, reference_of(&file));
        }
        self
    }

    /// Media descriptors as a JSON array; local files inside them are
    /// rewritten to `attach://` references and queued for upload.
    pub(crate) fn media(mut self, name: &str, mut media: Vec<InputMedia>) -> Result<Self, BotError> {
        for (i, item) in media.iter_mut().enumerate() {
            let (main, thumb) = item.files_mut();
            self.attach(main, format!("media{i}"));
            if let Some(thumb) = thumb {
                self.attach(thumb, format!("thumb{i}"));
            }
        }
        self.params.push_json(name, &media)?;
        Ok(self)
    }

    fn attach(&mut self, file: &mut InputFile, attach_name: String) {
        if let InputFile::Local(path) = file {
            self.files.push((attach_name.clone(), path.clone()));
            *file = InputFile::Remote(format!("attach://{attach_name}"));
        }
    }

    pub(crate) fn method(&self) -> &'static str {
        self.method
    }

    /// Read every queued file and build the wire body.
    ///
    /// Fails with [`BotError::BadFilePath`] before anything is sent.
    pub(crate) async fn into_body(self) -> Result<RequestBody, BotError> {
        if self.files.is_empty() {
            return Ok(RequestBody::Query(self.params));
        }

        let mut uploads = Vec::with_capacity(self.files.len());
        for (field, path) in self.files {
            let bytes = match tokio::fs::read(&path).await {
                Ok(bytes) => bytes,
                Err(source) => return Err(BotError::BadFilePath { path, source }),
            };
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| field.clone());
            uploads.push(Upload {
                field,
                file_name,
                bytes,
            });
        }

        Ok(RequestBody::Multipart {
            params: self.params,
            uploads,
        })
    }
}

fn reference_of(file: &InputFile) -> String {
    match file {
        InputFile::Remote(reference) => reference.clone(),
        InputFile::Local(path) => path.display().to_string(),
    }
}

impl BotClient {
    /// Perform exactly one call and unwrap its envelope.
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<T, BotError> {
        let method = request.method();
        let body = request.into_body().await?;

        debug!(
            "telegram {method}: {} params, {} uploads",
            body.params().len(),
            body.uploads().len()
        );

        let raw = self.transport.execute(&self.token, method, body).await?;

        if self.debug {
            info!("telegram {method} response: {}", String::from_utf8_lossy(&raw));
        }

        decode(method, &raw)
    }
}
