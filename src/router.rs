//! Router for the redirect signer.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::{handler::redirect, state::RedirectState};

/// Builds the router for the redirect signer.
///
/// Every method and path is answered by the redirect handler; the path is
/// the object key.
pub fn build_redirect_router(state: Arc<RedirectState>) -> Router {
    Router::new()
        .fallback(redirect)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
