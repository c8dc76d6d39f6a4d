//! UrlSigner for CloudFront distributions using canned policies.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, Utc};
use url::Url;

use super::{error::SigningError, key::PrivateKey, policy::CannedPolicy, SignedUrl, UrlSigner};

/// Signs CloudFront urls with a canned policy.
///
/// The resulting url carries `Expires`, `Signature` and `Key-Pair-Id` query
/// parameters and can be verified by the edge with the public key registered
/// under the key pair id.
#[derive(Debug, Clone)]
pub struct CloudFrontUrlSigner {
    key_pair_id: String,
    private_key: PrivateKey,
}

impl CloudFrontUrlSigner {
    /// Create a new `CloudFrontUrlSigner` for a key pair.
    pub fn new(key_pair_id: impl Into<String>, private_key: PrivateKey) -> Self {
        Self {
            key_pair_id: key_pair_id.into(),
            private_key,
        }
    }

    /// The key pair id embedded in every signed url.
    pub fn key_pair_id(&self) -> &str {
        &self.key_pair_id
    }

    fn sign_canned(&self, url: &str, expires_at: DateTime<Utc>) -> Result<String, SigningError> {
        validate_resource_url(url)?;

        let policy = CannedPolicy::new(url, expires_at)?;
        let signature = self.private_key.sign(policy.to_json()?.as_bytes())?;

        let separator = if url.contains('?') { '&' } else { '?' };
        Ok(format!(
            "{url}{separator}Expires={}&Signature={}&Key-Pair-Id={}",
            policy.expires(),
            encode_signature(&signature),
            self.key_pair_id
        ))
    }
}

#[async_trait]
impl UrlSigner for CloudFrontUrlSigner {
    async fn sign_url(
        &self,
        url: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<SignedUrl, SigningError> {
        let signed = self.sign_canned(url, expires_at)?;
        Ok(SignedUrl::new(signed, expires_at))
    }
}

fn validate_resource_url(url: &str) -> Result<(), SigningError> {
    // `Url::parse` refuses the `*` and `http*` wildcard schemes, check those first.
    let scheme = url.split_once("://").map(|(scheme, _)| scheme);
    if matches!(scheme, Some("*" | "http*")) {
        return Ok(());
    }

    let parsed = Url::parse(url)
        .map_err(|e| SigningError::invalid_input(format!("unable to parse url: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(SigningError::invalid_input(format!(
            "invalid url scheme, must be http or https, provided: {other}"
        ))),
    }
}

/// Base64 with the CloudFront substitutions for characters that are not
/// query-string safe.
fn encode_signature(signature: &[u8]) -> String {
    STANDARD
        .encode(signature)
        .chars()
        .map(|c| match c {
            '+' => '-',
            '=' => '_',
            '/' => '~',
            c => c,
        })
        .collect()
}
