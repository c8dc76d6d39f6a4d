//! Handler turning a request path into a signed redirect.

use std::sync::Arc;

use axum::{
    debug_handler,
    extract::State,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Duration, Utc};
use tracing::{info_span, Instrument};

use crate::{
    config::SigningConfig,
    error::{Result, ServerError},
    extract::IncomingRequest,
    response::SignedRedirect,
    signer::{CloudFrontUrlSigner, PrivateKey, UrlSigner},
    state::RedirectState,
};

/// Minutes a signed url stays valid after the invocation started.
pub const SIGNED_URL_VALIDITY_MINUTES: i64 = 90;

/// Instant at which a url signed at `now` stops granting access.
pub fn expiry_for(now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::minutes(SIGNED_URL_VALIDITY_MINUTES)
}

/// Sign the object addressed by `request` and redirect to it.
///
/// The private key is decoded on every call, so a broken key fails each
/// invocation with a configuration error instead of taking the process down.
pub async fn handle(
    request: &IncomingRequest,
    config: &SigningConfig,
    now: DateTime<Utc>,
) -> Result<SignedRedirect> {
    let object_key = object_key(request.path())?;

    let private_key = PrivateKey::from_pem(config.private_key_pem())?;
    let signer = CloudFrontUrlSigner::new(config.key_pair_id(), private_key);

    sign_redirect(&signer, object_key, config, now).await
}

pub(crate) async fn sign_redirect(
    signer: &dyn UrlSigner,
    object_key: &str,
    config: &SigningConfig,
    now: DateTime<Utc>,
) -> Result<SignedRedirect> {
    let expires_at = expiry_for(now);
    let origin_url = config.origin_url(object_key);

    let signed_url = signer.sign_url(&origin_url, expires_at).await?;
    tracing::info!(signed_url = %signed_url.url(), %expires_at, "signed url");

    Ok(SignedRedirect::new(signed_url))
}

/// Validate a raw request path for use as an object key.
///
/// The path is otherwise used verbatim: no normalization, no decoding.
pub fn object_key(path: &str) -> Result<&str> {
    if path.is_empty() || path == "/" {
        return Err(ServerError::invalid_request("request path is empty"));
    }
    if !path.starts_with('/') {
        return Err(ServerError::invalid_request(format!(
            "request path `{path}` must start with `/`"
        )));
    }
    if path
        .chars()
        .any(|c| c == '?' || c == '#' || c.is_whitespace() || c.is_control())
    {
        return Err(ServerError::invalid_request(format!(
            "request path `{}` contains characters not allowed in a url path",
            path.escape_debug()
        )));
    }
    Ok(path)
}

#[debug_handler]
pub(crate) async fn redirect(
    State(state): State<Arc<RedirectState>>,
    request: IncomingRequest,
) -> Response {
    let span = info_span!(
        "redirect",
        request_id = %request.request_id(),
        path = %request.path()
    );
    let result = handle(&request, state.config(), Utc::now())
        .instrument(span.clone())
        .await;
    span.in_scope(|| result.into_response())
}
