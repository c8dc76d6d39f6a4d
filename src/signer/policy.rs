//! Canned policy statements.
//!
//! A canned policy grants access to exactly one resource until a fixed
//! instant. The JSON document is never sent to CloudFront; the edge rebuilds
//! it from the `Expires` query parameter and the request url, so the
//! serialization here must be byte-for-byte what the edge computes.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::error::SigningError;

#[derive(Debug, Clone, Serialize)]
pub(crate) struct CannedPolicy {
    #[serde(rename = "Statement")]
    statement: [Statement; 1],
}

#[derive(Debug, Clone, Serialize)]
struct Statement {
    #[serde(rename = "Resource")]
    resource: String,
    #[serde(rename = "Condition")]
    condition: Condition,
}

#[derive(Debug, Clone, Serialize)]
struct Condition {
    #[serde(rename = "DateLessThan")]
    date_less_than: EpochTime,
}

#[derive(Debug, Clone, Copy, Serialize)]
struct EpochTime {
    #[serde(rename = "AWS:EpochTime")]
    epoch_time: u64,
}

impl CannedPolicy {
    pub(crate) fn new(
        resource: impl Into<String>,
        expires_at: DateTime<Utc>,
    ) -> Result<Self, SigningError> {
        let resource = resource.into();
        if resource.is_empty() {
            return Err(SigningError::invalid_input("resource cannot be empty"));
        }
        if !resource.is_ascii() {
            return Err(SigningError::invalid_input(format!(
                "unable to sign resource {resource}, resources must only contain ascii characters"
            )));
        }

        let epoch_time = u64::try_from(expires_at.timestamp())
            .map_err(|_| SigningError::invalid_policy("expiry must be after the unix epoch"))?;

        Ok(Self {
            statement: [Statement {
                resource,
                condition: Condition {
                    date_less_than: EpochTime { epoch_time },
                },
            }],
        })
    }

    /// Seconds since the epoch at which the policy stops granting access.
    pub(crate) fn expires(&self) -> u64 {
        self.statement[0].condition.date_less_than.epoch_time
    }

    pub(crate) fn to_json(&self) -> Result<String, SigningError> {
        serde_json::to_string(self).map_err(SigningError::signing_failure)
    }
}
