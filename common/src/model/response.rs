use serde::{Deserialize, Serialize};

use crate::api::ApiError;

/// Envelope every API response is wrapped in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: bool,
    #[serde(default)]
    pub message: String,
    /// Absent on failures. No `default` here: it would bound `T: Default`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: true,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: false,
            message: message.into(),
            data: None,
        }
    }

    /// Unwraps the payload of a successful response.
    pub fn into_data(self) -> Result<T, ApiError> {
        match self.data {
            Some(data) if self.status => Ok(data),
            _ => Err(ApiError::Network(format!(
                "response carried no data: {}",
                self.message
            ))),
        }
    }
}
