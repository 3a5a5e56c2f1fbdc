//! Status translation - the single boundary where domain errors become wire
//! statuses.

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use blog_core::DomainError;
use blog_shared::{Code, StatusBody};

/// Message sent for every `Internal` status, whatever the cause.
pub const INTERNAL_MESSAGE: &str = "internal error";

/// A failed call: status code plus a caller-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcError {
    pub code: Code,
    pub message: String,
}

impl RpcError {
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(Code::InvalidArgument, message)
    }

    pub fn internal() -> Self {
        Self::new(Code::Internal, INTERNAL_MESSAGE)
    }
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl ResponseError for RpcError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.code.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(StatusBody::new(self.code, &self.message))
    }
}

impl From<DomainError> for RpcError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::PostNotFound => {
                tracing::warn!("post not found");
                Self::new(Code::NotFound, err.to_string())
            }
            DomainError::InvalidInput => {
                tracing::warn!("invalid input");
                Self::new(Code::InvalidArgument, err.to_string())
            }
            DomainError::DuplicatePost => {
                tracing::error!("duplicate post");
                Self::new(Code::AlreadyExists, err.to_string())
            }
            DomainError::Internal(detail) => {
                tracing::error!(%detail, "internal error");
                Self::internal()
            }
        }
    }
}

/// Result type alias for call handlers.
pub type RpcResult<T> = Result<T, RpcError>;
