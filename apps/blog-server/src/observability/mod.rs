//! Observability module - correlation ids and call logging.

mod correlation;
mod interceptor;

pub use correlation::{CallIds, CorrelationMiddleware};
pub use interceptor::CallLogger;
