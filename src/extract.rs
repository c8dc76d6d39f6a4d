//! Axum extractors for the redirect handler.

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::error::ServerError;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// The parts of an inbound request the redirect handler looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingRequest {
    path: String,
    request_id: String,
}

impl IncomingRequest {
    /// Create a request from a raw path and a correlation id.
    pub fn new(path: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            request_id: request_id.into(),
        }
    }

    /// Raw request path as delivered by the gateway.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Correlation id used in log lines.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for IncomingRequest
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let request_id = parts
            .extensions
            .get::<lambda_http::Context>()
            .map(|ctx| ctx.request_id.clone())
            .or_else(|| {
                parts
                    .headers
                    .get(REQUEST_ID_HEADER)
                    .and_then(|h| h.to_str().ok())
                    .map(str::to_owned)
            })
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        Ok(Self::new(parts.uri.path(), request_id))
    }
}
