use crate::config::types::CheckerConfig;
use crate::config::validator::ConfigValidatorImpl;
use crate::error::{AuditError, Result};
use crate::traits::ConfigValidator;
use std::path::Path;

/// Configuration loader trait
pub trait ConfigLoader {
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<CheckerConfig>;
    fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<CheckerConfig>;
}

/// Default configuration loader implementation
pub struct DefaultConfigLoader;

impl ConfigLoader for DefaultConfigLoader {
    /// Load configuration from a TOML file
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<CheckerConfig> {
        let path_ref = path.as_ref();
        if !path_ref.exists() {
            return Err(AuditError::ConfigNotFound {
                path: path_ref.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path_ref)?;
        let config: CheckerConfig = toml::from_str(&content).map_err(|e| {
            AuditError::invalid_config(format!(
                "Failed to parse TOML in {}: {}",
                path_ref.display(),
                e
            ))
        })?;

        Ok(config)
    }

    /// Load configuration and reject values the checker cannot work with
    fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<CheckerConfig> {
        let config = Self::load_from_file(&path)?;
        ConfigValidatorImpl::new().validate_with_context(&config, path)?;
        Ok(config)
    }
}

impl CheckerConfig {
    /// Create a new config builder
    pub fn builder() -> crate::config::builder::CheckerConfigBuilder {
        crate::config::builder::CheckerConfigBuilder::new()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_from_file(path)
    }

    pub fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_with_validation(path)
    }

    /// Validate using the default validator
    pub fn validate(&self) -> Result<()> {
        ConfigValidatorImpl::new().validate(self)
    }
}
