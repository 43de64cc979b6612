use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// `{ success, data, message, error }` wrapper carried by every backend response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Payload of a successful response; anything else is a rejection.
    pub fn into_data(self) -> Result<T, ApiError> {
        match self {
            Envelope {
                success: true,
                data: Some(data),
                ..
            } => Ok(data),
            Envelope { message, error, .. } => Err(ApiError::Rejected { message, error }),
        }
    }

    /// For endpoints that only acknowledge; `data` may be absent.
    pub fn into_ack(self) -> Result<(), ApiError> {
        if self.success {
            Ok(())
        } else {
            Err(ApiError::Rejected {
                message: self.message,
                error: self.error,
            })
        }
    }
}
