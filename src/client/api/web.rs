use reqwasm::http::Request;

use crate::client::{
    api::transport::{ApiRequest, ApiResponse, HttpTransport, Method},
    error::TransportError,
};

/// Browser transport built on the `fetch` API
#[derive(Clone, Copy, Default)]
pub struct ReqwasmTransport;

impl HttpTransport for ReqwasmTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };

        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }
        if let Some(body) = request.body {
            builder = builder.header("Content-Type", "application/json").body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .binary()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}
