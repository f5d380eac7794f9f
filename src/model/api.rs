use serde::{Deserialize, Serialize};

/// The body returned by the backend alongside a failed request or a plain acknowledgement
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageDto {
    /// The message
    pub message: String,
}
