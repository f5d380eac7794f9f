use thiserror::Error;

use crate::model::auth::SessionError;

/// Failure below the HTTP status level: the request never produced a usable response
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("Failed to read response body: {0}")]
    Body(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Bad credentials, or the sign-in request could not be completed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),
    /// Validation or conflict reported by the backend at sign-up
    #[error("Registration failed with status {status}: {message}")]
    RegistrationFailed { status: u16, message: String },
    #[error("Failed to fetch {resource}: {reason}")]
    FetchFailed {
        resource: &'static str,
        reason: String,
    },
    #[error("Failed to {action}: {reason}")]
    MutationFailed {
        action: &'static str,
        reason: String,
    },
    #[error("There is no active session")]
    NotAuthenticated,
    #[error(transparent)]
    IncompleteSession(#[from] SessionError),
    #[error("Failed to persist session: {0}")]
    Persistence(String),
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidConfig { var: &'static str, reason: String },
    #[error("Failed to save {file_name}: {reason}")]
    Download {
        file_name: String,
        reason: String,
    },
    #[error("{0}")]
    Validation(String),
}

impl Error {
    /// Message suitable for showing inline on the login and registration forms.
    ///
    /// Status codes and transport details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            Error::AuthenticationFailed(message) => message.clone(),
            Error::RegistrationFailed { message, .. } => message.clone(),
            Error::Validation(message) => message.clone(),
            Error::IncompleteSession(_) => {
                "The server returned an incomplete account, please try again.".to_string()
            }
            _ => "Something went wrong, please try again.".to_string(),
        }
    }
}
