use crate::config::types::CheckerConfig;
use crate::error::Result;

/// Builder for CheckerConfig to improve API ergonomics
pub struct CheckerConfigBuilder {
    config: CheckerConfig,
}

impl CheckerConfigBuilder {
    /// Create a builder seeded with the default configuration
    pub fn new() -> Self {
        Self {
            config: CheckerConfig::default(),
        }
    }

    /// Set timeout in seconds
    #[must_use]
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.config.timeout_seconds = seconds;
        self
    }

    /// Set whether to follow redirects
    #[must_use]
    pub fn follow_redirects(mut self, follow: bool) -> Self {
        self.config.follow_redirects = follow;
        self
    }

    /// Set the `Accept` header value
    #[must_use]
    pub fn accept<S: Into<String>>(mut self, media_type: S) -> Self {
        self.config.accept = media_type.into();
        self
    }

    #[must_use]
    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Swap the disambiguation predicate for another knowledge base's vocabulary
    #[must_use]
    pub fn disambiguation_predicate<S: Into<String>>(mut self, iri: S) -> Self {
        self.config.disambiguation_predicate = iri.into();
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<CheckerConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for CheckerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
