//! Scene quality assessment

use crate::config::QualityConfig;
use crate::error::QualityError;
use crate::judge;
use crate::prompt::{quality_prompt, QUALITY_SYSTEM_ROLE};
use crate::types::{QualityAssessment, QUALITY_REQUIRED_KEYS};
use fresco_domain::{AnimationStyle, LlmProvider};
use fresco_salvage::{ensure_keys, extract_json};
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Reasonings too generic to carry information; flagged, never rejected
const LOW_SIGNAL_REASONINGS: &[&str] = &[
    "looks good",
    "no problems",
    "fine",
    "meets requirements",
    "perfect",
];

/// Scores a generated scene against its narration using an LLM judge
pub struct QualityAssessor<L>
where
    L: LlmProvider,
{
    provider: Arc<L>,
    config: QualityConfig,
}

impl<L> QualityAssessor<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a new assessor
    pub fn new(provider: L, config: QualityConfig) -> Self {
        Self {
            provider: Arc::new(provider),
            config,
        }
    }

    /// Assess one generated scene
    ///
    /// `improvement_hints` carries upstream revision notes into the prompt
    /// so a regenerated scene is judged against them.
    ///
    /// A judge that fails or times out yields the deterministic
    /// [`QualityAssessment::fallback`] rather than an error; an unparsable
    /// judge response yields an assessment with empty fields.
    pub async fn assess(
        &self,
        code: &str,
        content: &str,
        style: AnimationStyle,
        improvement_hints: Option<&str>,
    ) -> Result<QualityAssessment, QualityError> {
        if code.len() > self.config.max_code_length {
            return Err(QualityError::CodeTooLong(
                code.len(),
                self.config.max_code_length,
            ));
        }

        let prompt = quality_prompt(code, content, style, improvement_hints);
        debug!("Quality prompt length: {} chars", prompt.len());

        let response = match timeout(
            self.config.assessment_timeout(),
            judge::call_blocking(Arc::clone(&self.provider), QUALITY_SYSTEM_ROLE, prompt),
        )
        .await
        {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                warn!("Judge call failed, using fallback assessment: {}", e);
                return Ok(QualityAssessment::fallback());
            }
            Err(_) => {
                warn!("Judge call timed out, using fallback assessment");
                return Ok(QualityAssessment::fallback());
            }
        };

        debug!("Judge response length: {} chars", response.len());

        let repaired = ensure_keys(extract_json(&response), QUALITY_REQUIRED_KEYS);
        let assessment = QualityAssessment::from_map(&repaired);
        flag_generic_reasoning(&assessment);

        info!(
            "Quality assessment complete: score {:?}, needs_revision {:?}",
            assessment.quality_score, assessment.needs_revision
        );

        Ok(assessment)
    }
}

/// Warn when the judge pads sub-scores with empty phrases
fn flag_generic_reasoning(assessment: &QualityAssessment) {
    let details = [
        &assessment.content_alignment,
        &assessment.visual_richness,
        &assessment.educational_value,
        &assessment.technical_quality,
    ];

    for detail in details.into_iter().flatten() {
        if let Some(reasoning) = &detail.reasoning {
            let normalized = reasoning.trim().to_lowercase();
            if LOW_SIGNAL_REASONINGS.contains(&normalized.as_str()) {
                warn!("Judge gave a low-signal reasoning: {:?}", reasoning);
            }
        }
    }
}
