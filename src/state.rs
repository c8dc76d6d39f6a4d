//! Redirect signer state.

use crate::config::SigningConfig;

/// State shared by every invocation. Immutable once built.
#[derive(Debug, Clone)]
pub struct RedirectState {
    config: SigningConfig,
}

impl RedirectState {
    /// Create a new redirect state.
    pub fn new(config: SigningConfig) -> Self {
        Self { config }
    }

    /// Get the signing configuration from the state.
    pub fn config(&self) -> &SigningConfig {
        &self.config
    }
}
