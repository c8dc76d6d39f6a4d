//! Errors raised while signing urls.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

/// The category of a [`SigningError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SigningErrorKind {
    /// The private key could not be decoded or is not an RSA key.
    InvalidKey,
    /// The policy statement cannot be expressed, e.g. an expiry before the epoch.
    InvalidPolicy,
    /// The resource url was rejected.
    InvalidInput,
    /// The RSA signing operation itself failed.
    SigningFailure,
}

/// Error returned by a [`UrlSigner`](super::UrlSigner).
#[derive(Debug)]
pub struct SigningError {
    kind: SigningErrorKind,
    source: Option<Box<dyn StdError + Send + Sync>>,
    message: Option<Cow<'static, str>>,
}

impl SigningError {
    fn new(
        kind: SigningErrorKind,
        source: Option<Box<dyn StdError + Send + Sync>>,
        message: Option<Cow<'static, str>>,
    ) -> Self {
        Self {
            kind,
            source,
            message,
        }
    }

    pub(crate) fn invalid_key(source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self::new(SigningErrorKind::InvalidKey, Some(source.into()), None)
    }

    pub(crate) fn invalid_policy(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(SigningErrorKind::InvalidPolicy, None, Some(message.into()))
    }

    pub(crate) fn invalid_input(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(SigningErrorKind::InvalidInput, None, Some(message.into()))
    }

    pub(crate) fn signing_failure(source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self::new(SigningErrorKind::SigningFailure, Some(source.into()), None)
    }

    /// The category of this error.
    pub fn kind(&self) -> SigningErrorKind {
        self.kind
    }
}

impl fmt::Display for SigningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            SigningErrorKind::InvalidKey => write!(f, "invalid private key")?,
            SigningErrorKind::InvalidPolicy => write!(f, "invalid policy")?,
            SigningErrorKind::InvalidInput => write!(f, "invalid input")?,
            SigningErrorKind::SigningFailure => write!(f, "signing operation failed")?,
        }
        if let Some(ref msg) = self.message {
            write!(f, ": {msg}")?;
        } else if let Some(ref source) = self.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl StdError for SigningError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as _)
    }
}
