//! Traits and types for creating signed urls.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

mod cloudfront;
pub mod error;
mod key;
mod policy;

pub use cloudfront::CloudFrontUrlSigner;
pub use error::{SigningError, SigningErrorKind};
pub use key::PrivateKey;

#[cfg(test)]
pub(crate) use key::tests::{TEST_EC_KEY_PEM, TEST_RSA_KEY_PEM};

/// Trait implemented by CDN clients to derive a time-limited signed url from
/// a plain resource url.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlSigner: Send + Sync {
    /// Sign `url` so that it grants access until `expires_at`.
    async fn sign_url(&self, url: &str, expires_at: DateTime<Utc>)
        -> Result<SignedUrl, SigningError>;
}

/// A signed url with the instant it stops granting access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedUrl {
    url: String,
    expires_at: DateTime<Utc>,
}

impl SignedUrl {
    /// Create a signed url from its parts.
    pub fn new(url: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            url: url.into(),
            expires_at,
        }
    }

    /// Get the signed url.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the time the signed url expires.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Consume the signed url, returning the url string.
    pub fn into_url(self) -> String {
        self.url
    }
}
