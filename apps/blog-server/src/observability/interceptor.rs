//! Call logging interceptor.
//!
//! Wraps every RPC method: logs the method and its input before the call,
//! the outcome and elapsed time after it, and hands back the result as is.

use std::fmt::Debug;
use std::future::Future;
use std::time::Instant;

use tracing::Instrument;

use super::correlation::CallIds;
use crate::middleware::RpcResult;

#[derive(Debug, Clone, Copy, Default)]
pub struct CallLogger {
    /// Attach log and session ids to the call span.
    enable_request_ids: bool,
}

impl CallLogger {
    pub fn new(enable_request_ids: bool) -> Self {
        Self { enable_request_ids }
    }

    pub async fn intercept<Req, Resp, F, Fut>(
        &self,
        ids: &CallIds,
        method: &'static str,
        req: Req,
        call: F,
    ) -> RpcResult<Resp>
    where
        Req: Debug,
        Resp: Debug,
        F: FnOnce(Req) -> Fut,
        Fut: Future<Output = RpcResult<Resp>>,
    {
        let span = if self.enable_request_ids {
            tracing::info_span!(
                "call",
                method,
                log_id = %ids.log_id,
                session_id = %ids.session_id,
            )
        } else {
            tracing::info_span!("call", method)
        };

        async move {
            let start = Instant::now();
            tracing::info!(input = ?req, "incoming request {method}");

            let result = call(req).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(resp) => tracing::info!(?elapsed, output = ?resp, "request succeeded"),
                Err(err) => tracing::error!(?elapsed, code = %err.code, error = %err.message, "request failed"),
            }

            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use blog_shared::Code;

    use super::*;
    use crate::middleware::RpcError;

    #[actix_web::test]
    async fn test_success_is_returned_unaltered() {
        let logger = CallLogger::new(true);
        let ids = CallIds::generate();

        let result = logger
            .intercept(&ids, "Echo", 21, |n| async move { Ok::<_, RpcError>(n * 2) })
            .await;

        assert_eq!(result, Ok(42));
    }

    #[actix_web::test]
    async fn test_error_is_returned_unaltered() {
        let logger = CallLogger::default();
        let ids = CallIds::generate();
        let expected = RpcError::new(Code::NotFound, "post not found");

        let failing = expected.clone();
        let result: RpcResult<()> = logger
            .intercept(&ids, "Fail", (), |_| async move { Err::<(), _>(failing) })
            .await;

        assert_eq!(result, Err(expected));
    }
}
