use crate::config::types::CheckerConfig;
use crate::error::{AuditError, Result};
use crate::rdf::RdfSyntax;
use crate::traits::ConfigValidator;
use sophia_iri::Iri;
use std::path::Path;

/// Configuration validator implementation
pub struct ConfigValidatorImpl;

impl ConfigValidator for ConfigValidatorImpl {
    type Config = CheckerConfig;

    fn validate(&self, config: &CheckerConfig) -> Result<()> {
        self.validate_with_context(config, "configuration")
    }
}

impl ConfigValidatorImpl {
    pub fn new() -> Self {
        Self
    }

    /// Validation with the config source named in error messages
    pub fn validate_with_context<P: AsRef<Path>>(
        &self,
        config: &CheckerConfig,
        config_path: P,
    ) -> Result<()> {
        let source = config_path.as_ref().to_string_lossy();

        if config.timeout_seconds == 0 {
            return Err(AuditError::invalid_config(format!(
                "timeout_seconds in {} must be greater than zero",
                source
            )));
        }

        if config.accept.trim().is_empty() {
            return Err(AuditError::invalid_config(format!(
                "accept in {} must name an RDF media type",
                source
            )));
        }

        if RdfSyntax::from_content_type(&config.accept).is_none() {
            return Err(AuditError::invalid_config(format!(
                "accept '{}' in {} is not a supported RDF media type. Supported: {}",
                config.accept,
                source,
                RdfSyntax::supported_media_types().join(", ")
            )));
        }

        if Iri::new(config.disambiguation_predicate.as_str()).is_err() {
            return Err(AuditError::invalid_iri(config.disambiguation_predicate.clone()));
        }

        Ok(())
    }
}

impl Default for ConfigValidatorImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConfigValidatorImpl::new().validate(&CheckerConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = CheckerConfig {
            timeout_seconds: 0,
            ..CheckerConfig::default()
        };
        let error = ConfigValidatorImpl::new()
            .validate_with_context(&config, "nel-audit.toml")
            .unwrap_err();
        assert!(error.to_string().contains("nel-audit.toml"));
    }

    #[test]
    fn test_accept_must_be_rdf() {
        let config = CheckerConfig {
            accept: "application/json".to_string(),
            ..CheckerConfig::default()
        };
        let error = ConfigValidatorImpl::new().validate(&config).unwrap_err();
        assert!(error.to_string().contains("application/rdf+xml"));

        let config = CheckerConfig {
            accept: "text/turtle; charset=utf-8".to_string(),
            ..CheckerConfig::default()
        };
        assert!(ConfigValidatorImpl::new().validate(&config).is_ok());
    }

    #[test]
    fn test_relative_predicate_rejected() {
        let config = CheckerConfig {
            disambiguation_predicate: "ontology/wikiPageDisambiguates".to_string(),
            ..CheckerConfig::default()
        };
        assert!(matches!(
            ConfigValidatorImpl::new().validate(&config),
            Err(AuditError::InvalidIri { .. })
        ));
    }

    #[test]
    fn test_predicate_must_be_a_valid_iri() {
        for predicate in [
            "http://dbpedia.org/ontology/wiki Page Disambiguates",
            "http://dbpedia.org/ontology/\"wikiPageDisambiguates\"",
        ] {
            let config = CheckerConfig {
                disambiguation_predicate: predicate.to_string(),
                ..CheckerConfig::default()
            };
            assert!(
                matches!(
                    ConfigValidatorImpl::new().validate(&config),
                    Err(AuditError::InvalidIri { .. })
                ),
                "{} should be rejected",
                predicate
            );
        }
    }
}
