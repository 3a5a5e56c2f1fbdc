//! Status codes and the failure body returned by the blog RPC surface.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical RPC status codes used by the service.
///
/// The numeric values are the canonical RPC status numbers and must not
/// change; clients compare on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Code {
    Ok = 0,
    InvalidArgument = 3,
    NotFound = 5,
    AlreadyExists = 6,
    Internal = 13,
}

impl Code {
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Unknown numbers collapse to `Internal`.
    pub const fn from_i32(value: i32) -> Self {
        match value {
            0 => Self::Ok,
            3 => Self::InvalidArgument,
            5 => Self::NotFound,
            6 => Self::AlreadyExists,
            _ => Self::Internal,
        }
    }

    /// Canonical upper-snake name, e.g. `NOT_FOUND`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::NotFound => "NOT_FOUND",
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::Internal => "INTERNAL",
        }
    }

    /// HTTP status carrying this code.
    pub const fn http_status(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::InvalidArgument => 400,
            Self::NotFound => 404,
            Self::AlreadyExists => 409,
            Self::Internal => 500,
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Body of every failed call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBody {
    /// Canonical status number.
    pub code: i32,

    /// Canonical status name.
    pub status: String,

    /// Human-readable message. Generic for `Internal`.
    pub message: String,
}

impl StatusBody {
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Self {
            code: code.as_i32(),
            status: code.name().to_string(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> Code {
        Code::from_i32(self.code)
    }
}

impl fmt::Display for StatusBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.status, self.code, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_numbers() {
        assert_eq!(Code::Ok.as_i32(), 0);
        assert_eq!(Code::InvalidArgument.as_i32(), 3);
        assert_eq!(Code::NotFound.as_i32(), 5);
        assert_eq!(Code::AlreadyExists.as_i32(), 6);
        assert_eq!(Code::Internal.as_i32(), 13);
    }

    #[test]
    fn test_unknown_number_is_internal() {
        assert_eq!(Code::from_i32(2), Code::Internal);
        assert_eq!(Code::from_i32(5), Code::NotFound);
    }

    #[test]
    fn test_status_body_serializes_code_and_name() {
        let body = StatusBody::new(Code::NotFound, "post not found");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["code"], 5);
        assert_eq!(json["status"], "NOT_FOUND");
        assert_eq!(json["message"], "post not found");
        assert_eq!(body.code(), Code::NotFound);
    }
}
