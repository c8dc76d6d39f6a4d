//! Responses produced by the redirect handler.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::signer::SignedUrl;

/// A 302 redirect to a signed url.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRedirect {
    signed_url: SignedUrl,
}

impl SignedRedirect {
    pub(crate) fn new(signed_url: SignedUrl) -> Self {
        Self { signed_url }
    }

    /// The url the client is redirected to.
    pub fn signed_url(&self) -> &SignedUrl {
        &self.signed_url
    }
}

impl IntoResponse for SignedRedirect {
    fn into_response(self) -> Response {
        // `Redirect::to` answers 303, the gateway contract is 302 Found.
        (
            StatusCode::FOUND,
            [(header::LOCATION, self.signed_url.into_url())],
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn renders_found_with_location_and_empty_body() {
        let url = "https://example.cloudfront.net/000.jpg?Expires=1&Signature=s&Key-Pair-Id=K";
        let response = SignedRedirect::new(SignedUrl::new(url, Utc::now())).into_response();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], url);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }
}
