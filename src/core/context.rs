//! Per-request deadline carried from the controller down to storage calls,
//! together with the request id for log correlation.

use actix_web::{dev::Payload, web, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Future, Ready};
use std::time::Duration;
use tokio::time::Instant;

use crate::core::error::{AppError, Result};
use crate::middleware::request_id::RequestIdValue;

/// Configured storage budget for one request, registered as app data
#[derive(Debug, Clone, Copy)]
pub struct RequestTimeout(pub Duration);

#[derive(Debug, Clone)]
pub struct RequestContext {
    deadline: Option<(Instant, Duration)>,
    request_id: Option<String>,
}

impl RequestContext {
    /// No deadline; storage calls may wait indefinitely
    pub fn background() -> Self {
        Self {
            deadline: None,
            request_id: None,
        }
    }

    pub fn with_timeout(budget: Duration) -> Self {
        Self {
            deadline: Some((Instant::now() + budget, budget)),
            request_id: None,
        }
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// `X-Request-ID` of the originating request, or `"-"` outside one
    pub fn request_id(&self) -> &str {
        self.request_id.as_deref().unwrap_or("-")
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline.map(|(at, _)| at)
    }

    /// Run one storage operation under this context's deadline.
    ///
    /// An elapsed deadline drops the pending operation and yields
    /// [`AppError::Timeout`].
    pub async fn run<T, F>(&self, operation: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        match self.deadline {
            Some((at, budget)) => tokio::time::timeout_at(at, operation)
                .await
                .unwrap_or(Err(AppError::Timeout(budget))),
            None => operation.await,
        }
    }
}

impl FromRequest for RequestContext {
    type Error = actix_web::Error;
    type Future = Ready<std::result::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let mut ctx = req
            .app_data::<web::Data<RequestTimeout>>()
            .map(|timeout| RequestContext::with_timeout(timeout.0))
            .unwrap_or_else(RequestContext::background);
        if let Some(RequestIdValue(id)) = req.extensions().get::<RequestIdValue>() {
            ctx = ctx.with_request_id(id.clone());
        }
        ready(Ok(ctx))
    }
}
