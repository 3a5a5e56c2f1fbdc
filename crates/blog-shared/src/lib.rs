//! # Blog Shared
//!
//! Types shared between the server and its clients: wire messages, the
//! status body returned on failure, and the configuration loader.

pub mod config;
pub mod dto;
pub mod response;

pub use config::{AppConfig, ConfigError};
pub use response::{Code, StatusBody};
