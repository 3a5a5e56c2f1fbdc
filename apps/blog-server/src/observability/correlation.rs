//! Correlation middleware - resolves log and session ids for each call.

use std::future::{Future, Ready, ready};
use std::pin::Pin;

use actix_web::{
    Error, HttpMessage,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::header::{HeaderName, HeaderValue},
};
use tracing::Instrument;
use uuid::Uuid;

/// Header carrying the per-call correlation id.
pub static LOG_ID_HEADER: &str = "x-log-id";

/// Header carrying the caller's session id.
pub static SESSION_ID_HEADER: &str = "x-session-id";

/// Return the inbound value when present and non-empty, otherwise a freshly
/// generated one.
pub fn resolve_or_generate<F>(inbound: Option<&str>, generate: F) -> String
where
    F: FnOnce() -> String,
{
    match inbound {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => generate(),
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Correlation ids attached to one inbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallIds {
    pub log_id: String,
    pub session_id: String,
}

impl CallIds {
    pub fn generate() -> Self {
        Self {
            log_id: new_id(),
            session_id: new_id(),
        }
    }

    fn from_request(req: &ServiceRequest) -> Self {
        Self {
            log_id: resolve_or_generate(header(req, LOG_ID_HEADER), new_id),
            session_id: resolve_or_generate(header(req, SESSION_ID_HEADER), new_id),
        }
    }
}

fn header<'a>(req: &'a ServiceRequest, name: &str) -> Option<&'a str> {
    req.headers().get(name).and_then(|v| v.to_str().ok())
}

/// Middleware that resolves [`CallIds`] for every request, exposes them to
/// handlers and echoes them on the response.
pub struct CorrelationMiddleware;

impl<S, B> Transform<S, ServiceRequest> for CorrelationMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = CorrelationService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CorrelationService { service }))
    }
}

pub struct CorrelationService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for CorrelationService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let ids = CallIds::from_request(&req);
        req.extensions_mut().insert(ids.clone());

        let span = tracing::debug_span!("rpc", path = %req.path());
        let fut = self.service.call(req);

        Box::pin(
            async move {
                let mut res = fut.await?;

                for (name, value) in [
                    (LOG_ID_HEADER, &ids.log_id),
                    (SESSION_ID_HEADER, &ids.session_id),
                ] {
                    res.headers_mut().insert(
                        HeaderName::from_static(name),
                        HeaderValue::from_str(value)
                            .unwrap_or_else(|_| HeaderValue::from_static("unknown")),
                    );
                }

                Ok(res)
            }
            .instrument(span),
        )
    }
}

/// Extractor to get the call ids in handlers.
impl actix_web::FromRequest for CallIds {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &actix_web::HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let ids = req
            .extensions()
            .get::<CallIds>()
            .cloned()
            .unwrap_or_else(CallIds::generate);

        ready(Ok(ids))
    }
}
