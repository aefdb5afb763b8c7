//! Wire-level request parameters and the `{ok, result, description}` envelope.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::BotError;

/// Raw Bot API response envelope.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
    pub error_code: Option<i64>,
}

impl<T> ApiResponse<T> {
    /// Collapse the envelope into the payload or a [`BotError::Api`].
    pub fn into_result(self, method: &str) -> Result<T, BotError> {
        if !self.ok {
            return Err(BotError::Api {
                method: method.to_string(),
                description: self.description.unwrap_or_default(),
                error_code: self.error_code,
            });
        }
        self.result.ok_or_else(|| BotError::Decode {
            method: method.to_string(),
            message: "envelope has ok=true but no result".into(),
        })
    }
}

/// Parse a raw response body for `method` into its payload.
pub fn decode<T: DeserializeOwned>(method: &str, body: &[u8]) -> Result<T, BotError> {
    let envelope: ApiResponse<T> =
        serde_json::from_slice(body).map_err(|e| BotError::Decode {
            method: method.to_string(),
            message: e.to_string(),
        })?;
    envelope.into_result(method)
}

/// Ordered name/value request parameters.
///
/// Scalars are stored as their plain text form; structured values
/// (keyboards, media arrays, lists) as JSON text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl ToString) -> &mut Self {
        self.0.push((name.into(), value.to_string()));
        self
    }

    pub fn push_opt<V: ToString>(&mut self, name: impl Into<String>, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.push(name, value);
        }
        self
    }

    /// Push a structured value as a single JSON-text field.
    pub fn push_json<T: Serialize + ?Sized>(
        &mut self,
        name: impl Into<String>,
        value: &T,
    ) -> Result<&mut Self, BotError> {
        let text = serde_json::to_string(value)?;
        Ok(self.push(name, text))
    }

    /// Flatten every field of a serializable struct into parameters.
    ///
    /// `null` fields are skipped, strings are pushed verbatim, and nested
    /// objects or arrays become JSON text.
    pub fn extend_from<T: Serialize>(&mut self, fields: &T) -> Result<&mut Self, BotError> {
        let Value::Object(map) = serde_json::to_value(fields)? else {
            return Err(BotError::Serialization(
                <serde_json::Error as serde::ser::Error>::custom(
                    "parameter set must serialize to an object",
                ),
            ));
        };
        for (name, value) in map {
            match value {
                Value::Null => {}
                Value::String(s) => {
                    self.push(name, s);
                }
                other => {
                    self.push(name, other);
                }
            }
        }
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One local file already read into memory for a multipart request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    /// Form field name (`photo`, `thumb`, or an `attach://` name).
    pub field: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// What a transport puts on the wire for one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// Plain GET with query-string parameters.
    Query(Params),
    /// POST `multipart/form-data` with text fields and file parts.
    Multipart { params: Params, uploads: Vec<Upload> },
}

impl RequestBody {
    pub fn params(&self) -> &Params {
        match self {
            Self::Query(params) => params,
            Self::Multipart { params, .. } => params,
        }
    }

    pub fn uploads(&self) -> &[Upload] {
        match self {
            Self::Query(_) => &[],
            Self::Multipart { uploads, .. } => uploads,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success() {
        let ids: Vec<i64> = decode("getStuff", br#"{"ok": true, "result": [1, 2]}"#).unwrap();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_decode_failure_carries_method_and_description() {
        let err = decode::<Value>(
            "sendMessage",
            br#"{"ok": false, "error_code": 401, "description": "Unauthorized"}"#,
        )
        .unwrap_err();
        match &err {
            BotError::Api {
                method,
                description,
                error_code,
            } => {
                assert_eq!(method, "sendMessage");
                assert_eq!(description, "Unauthorized");
                assert_eq!(*error_code, Some(401));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("sendMessage"));
        assert!(err.to_string().contains("Unauthorized"));
    }

    #[test]
    fn test_decode_garbage_is_decode_error() {
        let err = decode::<Value>("getMe", b"<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, BotError::Decode { .. }));
    }

    #[test]
    fn test_decode_ok_without_result() {
        let err = decode::<Value>("getMe", br#"{"ok": true}"#).unwrap_err();
        assert!(matches!(err, BotError::Decode { .. }));
    }

    #[test]
    fn test_params_keep_order() {
        let mut params = Params::new();
        params.push("chat_id", 5).push("text", "hi").push_opt("parse_mode", None::<&str>);
        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("chat_id", "5"), ("text", "hi")]);
    }

    #[test]
    fn test_params_json_field() {
        let mut params = Params::new();
        params.push_json("allowed_updates", &["message", "poll"]).unwrap();
        assert_eq!(params.get("allowed_updates"), Some(r#"["message","poll"]"#));
    }

    #[test]
    fn test_extend_from_flattens_struct() {
        #[derive(Serialize)]
        struct Fields {
            caption: Option<String>,
            duration: Option<u32>,
            disable_notification: bool,
            nested: Value,
        }
        let mut params = Params::new();
        params
            .extend_from(&Fields {
                caption: Some("look".into()),
                duration: None,
                disable_notification: true,
                nested: serde_json::json!({"a": 1}),
            })
            .unwrap();
        assert_eq!(params.get("caption"), Some("look"));
        assert_eq!(params.get("duration"), None);
        assert_eq!(params.get("disable_notification"), Some("true"));
        assert_eq!(params.get("nested"), Some(r#"{"a":1}"#));
    }

    #[test]
    fn test_extend_from_rejects_scalars() {
        let mut params = Params::new();
        assert!(params.extend_from(&5).is_err());
    }
}
