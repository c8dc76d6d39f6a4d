//! Signing configuration sourced from the process environment.

use std::fmt;

use crate::error::{Result, ServerError};

/// Environment variable holding the PEM encoded RSA private key.
pub const PRIVATE_KEY_VAR: &str = "SIGNING_PRIVATE_KEY";
/// Environment variable holding the CloudFront key pair id.
pub const KEY_PAIR_ID_VAR: &str = "SIGNING_PUBLIC_ID";
/// Environment variable holding the distribution hostname.
pub const DISTRIBUTION_DOMAIN_VAR: &str = "CLOUDFRONT_DOMAIN";

/// Everything needed to sign a url for a distribution.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningConfig {
    private_key_pem: String,
    key_pair_id: String,
    distribution_domain: String,
}

impl SigningConfig {
    /// Create a new signing configuration.
    pub fn new(
        private_key_pem: impl Into<String>,
        key_pair_id: impl Into<String>,
        distribution_domain: impl Into<String>,
    ) -> Self {
        Self {
            private_key_pem: private_key_pem.into(),
            key_pair_id: key_pair_id.into(),
            distribution_domain: distribution_domain.into(),
        }
    }

    /// Load the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load the configuration through `lookup`, failing on the first
    /// variable that is unset or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| {
                    ServerError::configuration(format!(
                        "environment variable `{name}` is not set"
                    ))
                })
        };

        Ok(Self {
            private_key_pem: require(PRIVATE_KEY_VAR)?,
            key_pair_id: require(KEY_PAIR_ID_VAR)?.trim().to_string(),
            distribution_domain: require(DISTRIBUTION_DOMAIN_VAR)?.trim().to_string(),
        })
    }

    /// PEM text of the private key.
    pub fn private_key_pem(&self) -> &str {
        &self.private_key_pem
    }

    /// CloudFront key pair id.
    pub fn key_pair_id(&self) -> &str {
        &self.key_pair_id
    }

    /// Hostname of the distribution.
    pub fn distribution_domain(&self) -> &str {
        &self.distribution_domain
    }

    /// Origin url for an object key, by plain concatenation.
    pub fn origin_url(&self, object_key: &str) -> String {
        format!("https://{}{}", self.distribution_domain, object_key)
    }
}

impl fmt::Debug for SigningConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningConfig")
            .field("private_key_pem", &"<redacted>")
            .field("key_pair_id", &self.key_pair_id)
            .field("distribution_domain", &self.distribution_domain)
            .finish()
    }
}
