//! Scene/narration match validation

use crate::config::QualityConfig;
use crate::error::QualityError;
use crate::judge;
use crate::prompt::{match_prompt, MATCH_SYSTEM_ROLE};
use crate::types::{MatchReport, MATCH_REQUIRED_KEYS};
use fresco_domain::{AnimationStyle, LlmProvider};
use fresco_salvage::{ensure_keys, extract_json};
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Verifies that a generated scene actually covers its narration
pub struct SceneMatcher<L>
where
    L: LlmProvider,
{
    provider: Arc<L>,
    config: QualityConfig,
}

impl<L> SceneMatcher<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a new matcher
    pub fn new(provider: L, config: QualityConfig) -> Self {
        Self {
            provider: Arc::new(provider),
            config,
        }
    }

    /// Validate the scene code against the narration
    ///
    /// Judges sometimes return the verdict wrapped in a single-element
    /// list; the repair step unwraps it, so callers always get one report.
    pub async fn validate_match(
        &self,
        code: &str,
        content: &str,
        style: AnimationStyle,
    ) -> Result<MatchReport, QualityError> {
        if code.len() > self.config.max_code_length {
            return Err(QualityError::CodeTooLong(
                code.len(),
                self.config.max_code_length,
            ));
        }

        let prompt = match_prompt(code, content, style);
        debug!("Match prompt length: {} chars", prompt.len());

        let response = match timeout(
            self.config.assessment_timeout(),
            judge::call_blocking(Arc::clone(&self.provider), MATCH_SYSTEM_ROLE, prompt),
        )
        .await
        {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                warn!("Judge call failed, using fallback match report: {}", e);
                return Ok(MatchReport::fallback());
            }
            Err(_) => {
                warn!("Judge call timed out, using fallback match report");
                return Ok(MatchReport::fallback());
            }
        };

        let repaired = ensure_keys(extract_json(&response), MATCH_REQUIRED_KEYS);
        let report = MatchReport::from_map(&repaired);

        info!(
            "Match validation complete: score {:?}, acceptable {:?}",
            report.match_score, report.is_acceptable
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fresco_llm::MockProvider;

    #[tokio::test]
    async fn test_validate_match_parses_response() {
        let response = r#"{"match_score": 88, "is_acceptable": true, "confidence": 0.8}"#;
        let matcher =
            SceneMatcher::new(MockProvider::new(response), QualityConfig::default());

        let report = matcher
            .validate_match("code", "content", AnimationStyle::Basic)
            .await
            .unwrap();

        assert_eq!(report.match_score, Some(88.0));
        assert_eq!(report.is_acceptable, Some(true));
        // Repaired-to-null keys map to empty fields
        assert!(report.concept_coverage.is_none());
    }

    #[tokio::test]
    async fn test_validate_match_unwraps_single_element_list() {
        let response = r#"[{"match_score": 91, "is_acceptable": false, "confidence": 0.7}]"#;
        let matcher =
            SceneMatcher::new(MockProvider::new(response), QualityConfig::default());

        let report = matcher
            .validate_match("code", "content", AnimationStyle::Basic)
            .await
            .unwrap();

        assert_eq!(report.match_score, Some(91.0));
        assert_eq!(report.is_acceptable, Some(false));
    }

    #[tokio::test]
    async fn test_validate_match_falls_back_when_judge_fails() {
        let matcher =
            SceneMatcher::new(MockProvider::failing(), QualityConfig::default());

        let report = matcher
            .validate_match("code", "content", AnimationStyle::Basic)
            .await
            .unwrap();

        assert_eq!(report, MatchReport::fallback());
    }

    #[tokio::test]
    async fn test_validate_match_rejects_oversized_code() {
        let mut config = QualityConfig::default();
        config.max_code_length = 4;
        let matcher = SceneMatcher::new(MockProvider::new("{}"), config);

        let result = matcher
            .validate_match("longer than four", "content", AnimationStyle::Basic)
            .await;

        assert!(matches!(result, Err(QualityError::CodeTooLong(_, _))));
    }
}
