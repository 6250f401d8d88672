//! Error types shared by the transport client, the view-models and startup.

use thiserror::Error;

use crate::models::CommentId;

/// Failures of a call to the comments REST API.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("Server responded with {status}: {message}")]
    Status { status: u16, message: String },

    /// An id-addressed call hit a comment that does not exist
    #[error("Comment {0} not found")]
    NotFound(CommentId),

    /// The response body was not the JSON we expected
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Transport failures and error statuses both count as network errors.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Status { .. })
    }

    pub(crate) fn or_not_found(self, id: CommentId) -> Self {
        match self {
            Self::Status { status: 404, .. } => Self::NotFound(id),
            other => other,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Client-side guards; these never reach the server.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Comment text cannot be empty")]
    EmptyText,

    #[error("A submission is already in progress")]
    SubmissionPending,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be an http(s) URL, got {value:?}")]
    InvalidUrl { key: &'static str, value: String },

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("Config already initialized")]
    AlreadyInitialized,
}
