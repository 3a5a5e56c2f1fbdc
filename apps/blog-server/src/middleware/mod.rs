//! Middleware modules.

pub mod error;

pub use error::{RpcError, RpcResult};
