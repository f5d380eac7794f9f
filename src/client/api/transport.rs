//! The HTTP seam between the API client and the platform's network stack.
//!
//! The browser build sends requests through `fetch` via reqwasm, native builds (desktop and
//! the integration tests) through reqwest. Both only move bytes; status handling and JSON
//! decoding live in [`ApiClient`](super::ApiClient).

use serde::de::DeserializeOwned;

use crate::client::error::TransportError;
use crate::model::api::MessageDto;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Sent as `Authorization: Bearer <token>`
    pub bearer: Option<String>,
    /// JSON encoded body
    pub body: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_empty(&self) -> bool {
        self.body.iter().all(u8::is_ascii_whitespace)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// The backend's `{ "message": ... }` payload, if the body carries one
    pub fn message(&self) -> Option<String> {
        self.json::<MessageDto>()
            .ok()
            .map(|dto| dto.message)
            .filter(|message| !message.trim().is_empty())
    }

    /// Describes a failed response for logs and error values
    pub fn failure_reason(&self) -> String {
        let detail = match self.message() {
            Some(message) => message,
            None if self.is_empty() => "Unknown error".to_string(),
            None => self.text(),
        };

        format!("Request failed with status {}: {}", self.status, detail)
    }
}

#[allow(async_fn_in_trait)]
pub trait HttpTransport: Clone + 'static {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}
