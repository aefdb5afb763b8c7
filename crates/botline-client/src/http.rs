//! `reqwest`-backed [`Transport`].

use async_trait::async_trait;
use botline_core::{envelope::RequestBody, error::BotError, traits::Transport};
use reqwest::multipart::{Form, Part};
use tracing::debug;

/// Public Bot API root.
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// Transport issuing real HTTPS calls.
pub struct HttpTransport {
    client: reqwest::Client,
    api_url: String,
}

impl HttpTransport {
    /// `api_url` is the root without `/bot<token>`, e.g. a local Bot API server.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
        }
    }

    fn endpoint(&self, token: &str, method: &str) -> String {
        format!("{}/bot{token}/{method}", self.api_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn name(&self) -> &str {
        "http"
    }

    async fn execute(
        &self,
        token: &str,
        method: &str,
        body: RequestBody,
    ) -> Result<Vec<u8>, BotError> {
        let url = self.endpoint(token, method);

        let request = match body {
            RequestBody::Query(params) => {
                let query: Vec<(&str, &str)> = params.iter().collect();
                self.client.get(&url).query(&query)
            }
            RequestBody::Multipart { params, uploads } => {
                let mut form = Form::new();
                for (name, value) in params.iter() {
                    form = form.text(name.to_string(), value.to_string());
                }
                for upload in uploads {
                    let part = Part::bytes(upload.bytes).file_name(upload.file_name);
                    form = form.part(upload.field, part);
                }
                self.client.post(&url).multipart(form)
            }
        };

        // Errors must never carry the URL: it embeds the token.
        let resp = request.send().await.map_err(|e| {
            BotError::Transport(format!("telegram {method} failed: {}", e.without_url()))
        })?;

        let status = resp.status();
        if !status.is_success() {
            debug!("telegram {method} got {status}");
        }

        let bytes = resp.bytes().await.map_err(|e| {
            BotError::Transport(format!("telegram {method} read failed: {}", e.without_url()))
        })?;

        Ok(bytes.to_vec())
    }
}
