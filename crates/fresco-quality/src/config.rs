//! Configuration for the quality layer

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration shared by the three checkers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityConfig {
    /// Maximum time for a single judge call (seconds)
    pub assessment_timeout_secs: u64,

    /// Maximum scene-code length submitted for review (characters)
    pub max_code_length: usize,

    /// Maximum segments included in a coherence prompt
    pub segment_limit: usize,

    /// Score below which an assessment is treated as failing
    pub min_acceptable_score: f64,
}

impl QualityConfig {
    /// Get the judge-call timeout as a Duration
    pub fn assessment_timeout(&self) -> Duration {
        Duration::from_secs(self.assessment_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.assessment_timeout_secs == 0 {
            return Err("assessment_timeout_secs must be greater than 0".to_string());
        }
        if self.max_code_length == 0 {
            return Err("max_code_length must be greater than 0".to_string());
        }
        if self.segment_limit == 0 {
            return Err("segment_limit must be greater than 0".to_string());
        }
        if !(0.0..=100.0).contains(&self.min_acceptable_score) {
            return Err("min_acceptable_score must be within 0..=100".to_string());
        }
        Ok(())
    }

    /// Strict preset: tighter timeouts, higher bar
    pub fn strict() -> Self {
        Self {
            assessment_timeout_secs: 60,
            max_code_length: 20_000,
            segment_limit: 10,
            min_acceptable_score: 85.0,
        }
    }

    /// Lenient preset: longer timeouts, lower bar for drafts
    pub fn lenient() -> Self {
        Self {
            assessment_timeout_secs: 300,
            max_code_length: 100_000,
            segment_limit: 50,
            min_acceptable_score: 60.0,
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for QualityConfig {
    /// Default configuration with balanced settings
    fn default() -> Self {
        Self {
            assessment_timeout_secs: 120,
            max_code_length: 50_000,
            segment_limit: 20,
            min_acceptable_score: 75.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(QualityConfig::default().validate().is_ok());
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(QualityConfig::strict().validate().is_ok());
        assert!(QualityConfig::lenient().validate().is_ok());
    }

    #[test]
    fn test_invalid_timeout() {
        let mut config = QualityConfig::default();
        config.assessment_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_score_threshold() {
        let mut config = QualityConfig::default();
        config.min_acceptable_score = 150.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = QualityConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = QualityConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.assessment_timeout_secs, parsed.assessment_timeout_secs);
        assert_eq!(config.max_code_length, parsed.max_code_length);
        assert_eq!(config.segment_limit, parsed.segment_limit);
    }
}
