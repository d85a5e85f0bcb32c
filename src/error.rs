//! Error types surfaced by the API access layer
//!
//! Every failure is returned to the caller unchanged; nothing here retries or
//! logs.

use reqwest::StatusCode;
use thiserror::Error;

use crate::client::Payload;

/// Message used when a failed response carries no usable `message` field.
pub const DEFAULT_ERROR_MESSAGE: &str = "Erro na comunicação com o servidor";

/// A non-2xx HTTP response.
#[derive(Debug, Clone, Error)]
#[error("{message} (HTTP {status})")]
pub struct ApiError {
    pub message: String,
    pub status: StatusCode,
    /// Raw response body, kept for caller inspection.
    pub payload: Payload,
}

impl ApiError {
    /// Build the error for a failed response, preferring the payload's own
    /// `message` over the generic fallback.
    pub fn from_response(status: StatusCode, payload: Payload) -> Self {
        let message = payload
            .message()
            .map(str::to_string)
            .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());

        Self {
            message,
            status,
            payload,
        }
    }
}

/// Failures simulated by the fixture backends.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MockError {
    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Registro não encontrado: {resource} {id}")]
    NotFound { resource: &'static str, id: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Mock(#[from] MockError),

    /// The request never produced a response (DNS, refused connection, timeout).
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("session storage failure: {0}")]
    Storage(#[from] std::io::Error),

    /// The stored token cannot be sent as an `Authorization` header.
    #[error("stored token is not a valid header value: {0}")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),
}

impl Error {
    /// HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api(e) => Some(e.status),
            Self::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// True for a 404 response and for the fixture equivalent.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Api(e) => e.status == StatusCode::NOT_FOUND,
            Self::Mock(MockError::NotFound { .. }) => true,
            _ => false,
        }
    }

    pub fn is_invalid_credentials(&self) -> bool {
        match self {
            Self::Api(e) => e.status == StatusCode::UNAUTHORIZED,
            Self::Mock(MockError::InvalidCredentials) => true,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
