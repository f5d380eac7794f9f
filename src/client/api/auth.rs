use dioxus_logger::tracing;

use crate::client::{
    api::{ApiClient, HttpTransport, Method},
    error::Error,
};
use crate::model::auth::{JwtResponse, LoginRequest, Session, SignupRequest};

const DEFAULT_SIGNIN_FAILURE: &str = "Invalid username or password";

impl<T: HttpTransport> ApiClient<T> {
    /// `POST /api/auth/signin`, normalizing the response into a [`Session`]
    pub async fn sign_in(&self, credentials: &LoginRequest) -> Result<Session, Error> {
        let response = self
            .send_public(Method::Post, "/api/auth/signin", credentials)
            .await
            .map_err(|e| Error::AuthenticationFailed(e.to_string()))?;

        if !response.is_success() {
            tracing::debug!(
                username = %credentials.username,
                status = response.status,
                "Sign in rejected"
            );

            return Err(Error::AuthenticationFailed(
                response
                    .message()
                    .unwrap_or_else(|| DEFAULT_SIGNIN_FAILURE.to_string()),
            ));
        }

        let jwt = response.json::<JwtResponse>().map_err(|e| {
            Error::AuthenticationFailed(format!("Failed to parse sign in response: {}", e))
        })?;

        Ok(Session::try_from(jwt)?)
    }

    /// `POST /api/auth/signup`. Never signs the new account in.
    pub async fn sign_up(&self, request: &SignupRequest) -> Result<(), Error> {
        let response = self
            .send_public(Method::Post, "/api/auth/signup", request)
            .await
            .map_err(|e| Error::RegistrationFailed {
                status: 0,
                message: e.to_string(),
            })?;

        if !response.is_success() {
            return Err(Error::RegistrationFailed {
                status: response.status,
                message: response
                    .message()
                    .unwrap_or_else(|| "Failed to register.".to_string()),
            });
        }

        Ok(())
    }
}
