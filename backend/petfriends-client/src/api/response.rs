use common::HttpStatusCode;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// A response body, tagged by what it actually decoded as.
///
/// The service answers success with JSON and rejection with plain text
/// ("403 Forbidden, ..."), so the tag is itself part of the contract.
/// Scenarios branch on the tag instead of probing the body and catching
/// a shape mismatch.
#[derive(Debug, Clone)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    /// Defensive decode: attempt JSON, fall back to the raw text.
    pub fn from_raw(raw: String) -> Self {
        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => ResponseBody::Json(value),
            Err(_) => ResponseBody::Text(raw),
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, ResponseBody::Json(_))
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResponseBody::Json(_) => None,
            ResponseBody::Text(text) => Some(text),
        }
    }

    /// Named field of a JSON object body, if there is one.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.as_json().and_then(|value| value.get(name))
    }

    /// Decode a JSON body into a typed view. Text bodies decode as nothing.
    pub fn decode<T: DeserializeOwned>(&self) -> Option<T> {
        match self {
            ResponseBody::Json(value) => serde_json::from_value(value.clone()).ok(),
            ResponseBody::Text(_) => None,
        }
    }

    /// Whether this is a text body containing `needle`.
    pub fn text_contains(&self, needle: &str) -> bool {
        matches!(self, ResponseBody::Text(text) if text.contains(needle))
    }
}

/// The uniform return shape of every client operation.
///
/// Callers must branch on `status` before trusting the body's shape.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: HttpStatusCode,
    pub body: ResponseBody,
}

impl ApiResponse {
    pub fn is_ok(&self) -> bool {
        self.status.is_success()
    }

    pub fn is_forbidden(&self) -> bool {
        self.status.is_forbidden()
    }
}
