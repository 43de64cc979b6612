use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::http::Envelope;

/// Raw outcome of a failed round trip, as seen by the HTTP wrapper.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: unable to connect to server")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("server responded with {status}")]
    Status {
        status: StatusCode,
        envelope: Option<Envelope<Value>>,
    },

    /// 2xx response whose envelope is not `success: true` with a payload.
    #[error("request was not successful")]
    Rejected {
        message: Option<String>,
        error: Option<String>,
    },

    /// The body could not be decoded into the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message supplied by the server, `message` first, then `error`.
    pub fn server_message(&self) -> Option<&str> {
        let (message, error) = match self {
            ApiError::Status {
                envelope: Some(env),
                ..
            } => (env.message.as_deref(), env.error.as_deref()),
            ApiError::Rejected { message, error } => (message.as_deref(), error.as_deref()),
            _ => (None, None),
        };
        message
            .or(error)
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No response reached the client.
    Network,
    /// The server reported a failure. `status` is `None` for 2xx rejections.
    Server { status: Option<u16> },
    /// The response did not have the expected shape.
    Malformed,
}

/// Normalized error returned by every accessor.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<ApiError>,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Builds the caller-facing error, preferring the server's text over `fallback`.
    pub fn from_api(err: ApiError, fallback: &str) -> Self {
        let message = err.server_message().unwrap_or(fallback).to_string();
        let kind = match &err {
            ApiError::Transport(_) => ErrorKind::Network,
            ApiError::Status { status, .. } => ErrorKind::Server {
                status: Some(status.as_u16()),
            },
            ApiError::Rejected { .. } => ErrorKind::Server { status: None },
            ApiError::Decode(_) => ErrorKind::Malformed,
        };
        Self {
            kind,
            message,
            source: Some(err),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Collapses any [`ApiError`] into an [`Error`] with a call-site fallback message.
pub(crate) trait OrFallback<T> {
    fn or_fallback(self, fallback: &str) -> Result<T, Error>;
}

impl<T> OrFallback<T> for Result<T, ApiError> {
    fn or_fallback(self, fallback: &str) -> Result<T, Error> {
        self.map_err(|e| Error::from_api(e, fallback))
    }
}
