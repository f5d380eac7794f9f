//! Typed client for the BudgetWise REST backend.
//!
//! Every endpoint the views use is a method on [`ApiClient`], grouped by resource in the
//! submodules. Read-side failures come back as [`Error::FetchFailed`], write-side failures
//! as [`Error::MutationFailed`], both carrying the resource or action that failed.

pub mod auth;
pub mod budgets;
pub mod export;
pub mod forum;
pub mod goals;
pub mod insights;
pub mod profile;
pub mod transactions;
pub mod transport;

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;

use serde::{de::DeserializeOwned, Serialize};

use crate::client::error::{Error, TransportError};
use crate::model::auth::Session;

pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method};

#[cfg(not(target_arch = "wasm32"))]
pub type AppTransport = native::ReqwestTransport;
#[cfg(target_arch = "wasm32")]
pub type AppTransport = web::ReqwasmTransport;

#[derive(Clone)]
pub struct ApiClient<T = AppTransport> {
    transport: T,
    base_url: String,
    bearer: Option<String>,
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bearer: None,
        }
    }

    /// A copy of this client that sends the session's bearer token
    pub fn authorized(&self, session: &Session) -> Self {
        Self {
            transport: self.transport.clone(),
            base_url: self.base_url.clone(),
            bearer: Some(session.token().to_string()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_authorized(&self) -> bool {
        self.bearer.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<ApiResponse, TransportError> {
        self.transport
            .send(ApiRequest {
                method,
                url: self.url(path),
                bearer: self.bearer.clone(),
                body,
            })
            .await
    }

    /// Sends a request without requiring a bearer token, used by the auth endpoints
    pub(crate) async fn send_public<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse, TransportError> {
        let body = serde_json::to_string(body).map_err(|e| TransportError::Body(e.to_string()))?;

        self.send(method, path, Some(body)).await
    }

    async fn fetch(&self, resource: &'static str, path: &str) -> Result<ApiResponse, Error> {
        if !self.is_authorized() {
            return Err(Error::NotAuthenticated);
        }

        let response =
            self.send(Method::Get, path, None)
                .await
                .map_err(|e| Error::FetchFailed {
                    resource,
                    reason: e.to_string(),
                })?;

        if !response.is_success() {
            return Err(Error::FetchFailed {
                resource,
                reason: response.failure_reason(),
            });
        }

        Ok(response)
    }

    pub(crate) async fn fetch_json<R: DeserializeOwned>(
        &self,
        resource: &'static str,
        path: &str,
    ) -> Result<R, Error> {
        let response = self.fetch(resource, path).await?;

        response.json().map_err(|e| Error::FetchFailed {
            resource,
            reason: format!("Failed to parse {} data: {}", resource, e),
        })
    }

    /// Like [`Self::fetch_json`] but an empty or `null` body yields `None`
    pub(crate) async fn fetch_optional_json<R: DeserializeOwned>(
        &self,
        resource: &'static str,
        path: &str,
    ) -> Result<Option<R>, Error> {
        let response = self.fetch(resource, path).await?;

        if response.is_empty() {
            return Ok(None);
        }

        response.json().map_err(|e| Error::FetchFailed {
            resource,
            reason: format!("Failed to parse {} data: {}", resource, e),
        })
    }

    pub(crate) async fn fetch_bytes(
        &self,
        resource: &'static str,
        path: &str,
    ) -> Result<Vec<u8>, Error> {
        Ok(self.fetch(resource, path).await?.body)
    }

    async fn mutate(
        &self,
        action: &'static str,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<ApiResponse, Error> {
        if !self.is_authorized() {
            return Err(Error::NotAuthenticated);
        }

        let response = self
            .send(method, path, body)
            .await
            .map_err(|e| Error::MutationFailed {
                action,
                reason: e.to_string(),
            })?;

        if !response.is_success() {
            return Err(Error::MutationFailed {
                action,
                reason: response.failure_reason(),
            });
        }

        Ok(response)
    }

    fn encode<B: Serialize>(action: &'static str, body: &B) -> Result<String, Error> {
        serde_json::to_string(body).map_err(|e| Error::MutationFailed {
            action,
            reason: format!("Failed to encode request body: {}", e),
        })
    }

    /// Sends `body` and decodes the entity the backend answers with
    pub(crate) async fn mutate_json<B: Serialize, R: DeserializeOwned>(
        &self,
        action: &'static str,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<R, Error> {
        let body = Self::encode(action, body)?;
        let response = self.mutate(action, method, path, Some(body)).await?;

        response.json().map_err(|e| Error::MutationFailed {
            action,
            reason: format!("Failed to parse response: {}", e),
        })
    }

    /// Sends a write whose response body is ignored
    pub(crate) async fn mutate_discard<B: Serialize>(
        &self,
        action: &'static str,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), Error> {
        let body = body.map(|body| Self::encode(action, body)).transpose()?;
        self.mutate(action, method, path, body).await?;

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-process transport for unit tests that never touch the network

    use std::{cell::RefCell, collections::VecDeque, rc::Rc};

    use super::*;

    #[derive(Clone, Default)]
    pub struct ScriptedTransport {
        responses: Rc<RefCell<VecDeque<Result<ApiResponse, TransportError>>>>,
        pub requests: Rc<RefCell<Vec<ApiRequest>>>,
    }

    impl ScriptedTransport {
        pub fn respond(&self, status: u16, body: &str) -> &Self {
            self.responses.borrow_mut().push_back(Ok(ApiResponse {
                status,
                body: body.as_bytes().to_vec(),
            }));
            self
        }

        pub fn fail(&self, reason: &str) -> &Self {
            self.responses
                .borrow_mut()
                .push_back(Err(TransportError::Network(reason.to_string())));
            self
        }
    }

    impl HttpTransport for ScriptedTransport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
            self.requests.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(TransportError::Network("no scripted response".into())))
        }
    }
}
