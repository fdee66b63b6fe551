//! Typed reports produced by the checkers
//!
//! Reports are mapped from repaired JSON by hand rather than derived
//! deserialization: a judge that returns a string where a number belongs
//! must cost us a field, not the whole report.

use serde::Serialize;
use serde_json::{Map, Value};

/// Top-level keys the quality-assessment schema requires
pub const QUALITY_REQUIRED_KEYS: &[&str] = &[
    "quality_score",
    "content_alignment",
    "visual_richness",
    "educational_value",
    "technical_quality",
    "needs_revision",
];

/// Top-level keys the coherence schema requires
pub const COHERENCE_REQUIRED_KEYS: &[&str] = &[
    "coherence_score",
    "logical_flow",
    "concept_progression",
    "terminology_consistency",
    "transition_quality",
    "needs_revision",
];

/// Top-level keys the scene-match schema requires
pub const MATCH_REQUIRED_KEYS: &[&str] = &[
    "match_score",
    "concept_coverage",
    "style_consistency",
    "complexity_alignment",
    "is_acceptable",
    "confidence",
];

/// A scored sub-judgment with optional commentary
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreDetail {
    /// Sub-score, 0-100
    pub score: Option<f64>,
    /// Free-text justification
    pub reasoning: Option<String>,
    /// Specific problems found
    pub issues: Vec<String>,
}

impl ScoreDetail {
    fn from_value(value: Option<&Value>) -> Option<Self> {
        let map = value?.as_object()?;
        Some(Self {
            score: get_f64(map, "score"),
            reasoning: get_string(map, "reasoning"),
            issues: get_string_vec(map, "issues"),
        })
    }

    fn scored(score: f64, reasoning: &str) -> Self {
        Self {
            score: Some(score),
            reasoning: Some(reasoning.to_string()),
            issues: Vec::new(),
        }
    }

    fn with_issues(score: f64, issues: &[&str]) -> Self {
        Self {
            score: Some(score),
            reasoning: None,
            issues: issues.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Judge verdict on one generated scene
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QualityAssessment {
    /// Overall score, 0-100
    pub quality_score: Option<f64>,
    /// Does the animation match the narration?
    pub content_alignment: Option<ScoreDetail>,
    /// Is the animation visually engaging?
    pub visual_richness: Option<ScoreDetail>,
    /// Does it aid understanding?
    pub educational_value: Option<ScoreDetail>,
    /// Is the code itself sound?
    pub technical_quality: Option<ScoreDetail>,
    /// Concrete improvement ideas
    pub improvement_suggestions: Vec<String>,
    /// Should the scene be regenerated?
    pub needs_revision: Option<bool>,
    /// Urgency of revision ("low", "medium", "high")
    pub revision_priority: Option<String>,
}

impl QualityAssessment {
    /// Map a repaired JSON object to a typed assessment
    pub fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            quality_score: get_f64(map, "quality_score"),
            content_alignment: ScoreDetail::from_value(map.get("content_alignment")),
            visual_richness: ScoreDetail::from_value(map.get("visual_richness")),
            educational_value: ScoreDetail::from_value(map.get("educational_value")),
            technical_quality: ScoreDetail::from_value(map.get("technical_quality")),
            improvement_suggestions: get_string_vec(map, "improvement_suggestions"),
            needs_revision: get_bool(map, "needs_revision"),
            revision_priority: get_string(map, "revision_priority"),
        }
    }

    /// Deterministic stand-in used when the judge is unreachable
    pub fn fallback() -> Self {
        Self {
            quality_score: Some(85.0),
            content_alignment: Some(ScoreDetail::scored(
                90.0,
                "animation closely matches the narration",
            )),
            visual_richness: Some(ScoreDetail::scored(
                80.0,
                "rich elements, could use more interaction",
            )),
            educational_value: Some(ScoreDetail::scored(
                88.0,
                "helps learners grasp the concept",
            )),
            technical_quality: Some(ScoreDetail::scored(
                85.0,
                "code structure is clear, no obvious defects",
            )),
            improvement_suggestions: vec![
                "increase color contrast".to_string(),
                "add gradual transition effects".to_string(),
            ],
            needs_revision: Some(false),
            revision_priority: Some("low".to_string()),
        }
    }

    /// Whether the assessment clears `min_score`
    ///
    /// A missing overall score never passes.
    pub fn passes(&self, min_score: f64) -> bool {
        self.quality_score.map_or(false, |score| score >= min_score)
    }
}

/// Judge verdict on script flow
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CoherenceReport {
    /// Overall coherence, 0-100
    pub coherence_score: Option<f64>,
    /// Are segment-to-segment relations clear?
    pub logical_flow: Option<ScoreDetail>,
    /// Are concepts introduced progressively?
    pub concept_progression: Option<ScoreDetail>,
    /// Is terminology used consistently?
    pub terminology_consistency: Option<ScoreDetail>,
    /// Are transitions smooth?
    pub transition_quality: Option<ScoreDetail>,
    /// Concrete improvement ideas
    pub improvement_suggestions: Vec<String>,
    /// Should the script be revised?
    pub needs_revision: Option<bool>,
    /// 1-based indices of segments needing work
    pub problematic_segments: Vec<u32>,
}

impl CoherenceReport {
    /// Map a repaired JSON object to a typed report
    pub fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            coherence_score: get_f64(map, "coherence_score"),
            logical_flow: ScoreDetail::from_value(map.get("logical_flow")),
            concept_progression: ScoreDetail::from_value(map.get("concept_progression")),
            terminology_consistency: ScoreDetail::from_value(map.get("terminology_consistency")),
            transition_quality: ScoreDetail::from_value(map.get("transition_quality")),
            improvement_suggestions: get_string_vec(map, "improvement_suggestions"),
            needs_revision: get_bool(map, "needs_revision"),
            problematic_segments: get_u32_vec(map, "problematic_segments"),
        }
    }

    /// Report for scripts too short to be incoherent
    pub fn perfect() -> Self {
        Self {
            coherence_score: Some(100.0),
            needs_revision: Some(false),
            ..Self::default()
        }
    }

    /// Deterministic stand-in used when the judge is unreachable
    pub fn fallback() -> Self {
        Self {
            coherence_score: Some(85.0),
            logical_flow: Some(ScoreDetail::with_issues(90.0, &[])),
            concept_progression: Some(ScoreDetail::with_issues(
                80.0,
                &["a middle segment advances too quickly"],
            )),
            terminology_consistency: Some(ScoreDetail::with_issues(95.0, &[])),
            transition_quality: Some(ScoreDetail::with_issues(
                75.0,
                &["a transition sentence is missing between segments"],
            )),
            improvement_suggestions: vec![
                "add a bridging sentence between adjacent segments".to_string(),
                "open later segments with a short recap".to_string(),
            ],
            needs_revision: Some(true),
            problematic_segments: vec![2, 3],
        }
    }
}

/// Which narrated concepts the scene covers
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConceptCoverage {
    /// Concepts visualized by the scene
    pub covered_concepts: Vec<String>,
    /// Concepts the scene skips
    pub missing_concepts: Vec<String>,
    /// Fraction covered, 0-100
    pub coverage_percentage: Option<f64>,
}

impl ConceptCoverage {
    fn from_value(value: Option<&Value>) -> Option<Self> {
        let map = value?.as_object()?;
        Some(Self {
            covered_concepts: get_string_vec(map, "covered_concepts"),
            missing_concepts: get_string_vec(map, "missing_concepts"),
            coverage_percentage: get_f64(map, "coverage_percentage"),
        })
    }
}

/// Whether the scene style suits the segment kind
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StyleConsistency {
    /// Style verdict
    pub is_consistent: Option<bool>,
    /// Specific mismatches
    pub style_issues: Vec<String>,
}

impl StyleConsistency {
    fn from_value(value: Option<&Value>) -> Option<Self> {
        let map = value?.as_object()?;
        Some(Self {
            is_consistent: get_bool(map, "is_consistent"),
            style_issues: get_string_vec(map, "style_issues"),
        })
    }
}

/// Whether scene complexity matches content depth
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComplexityAlignment {
    /// Complexity verdict
    pub is_appropriate: Option<bool>,
    /// Free-text commentary
    pub complexity_feedback: Option<String>,
}

impl ComplexityAlignment {
    fn from_value(value: Option<&Value>) -> Option<Self> {
        let map = value?.as_object()?;
        Some(Self {
            is_appropriate: get_bool(map, "is_appropriate"),
            complexity_feedback: get_string(map, "complexity_feedback"),
        })
    }
}

/// Judge verdict on scene/narration fit
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchReport {
    /// Overall match, 0-100
    pub match_score: Option<f64>,
    /// Concept-by-concept coverage
    pub concept_coverage: Option<ConceptCoverage>,
    /// Style fit
    pub style_consistency: Option<StyleConsistency>,
    /// Complexity fit
    pub complexity_alignment: Option<ComplexityAlignment>,
    /// Distracting elements found in the scene
    pub irrelevant_elements: Vec<String>,
    /// Concrete improvement ideas
    pub improvement_suggestions: Vec<String>,
    /// Overall accept/reject verdict
    pub is_acceptable: Option<bool>,
    /// Judge's own confidence, 0-1
    pub confidence: Option<f64>,
}

impl MatchReport {
    /// Map a repaired JSON object to a typed report
    pub fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            match_score: get_f64(map, "match_score"),
            concept_coverage: ConceptCoverage::from_value(map.get("concept_coverage")),
            style_consistency: StyleConsistency::from_value(map.get("style_consistency")),
            complexity_alignment: ComplexityAlignment::from_value(map.get("complexity_alignment")),
            irrelevant_elements: get_string_vec(map, "irrelevant_elements"),
            improvement_suggestions: get_string_vec(map, "improvement_suggestions"),
            is_acceptable: get_bool(map, "is_acceptable"),
            confidence: get_f64(map, "confidence"),
        }
    }

    /// Deterministic stand-in used when the judge is unreachable
    pub fn fallback() -> Self {
        Self {
            match_score: Some(90.0),
            concept_coverage: Some(ConceptCoverage {
                covered_concepts: vec!["core concept".to_string(), "key principle".to_string()],
                missing_concepts: Vec::new(),
                coverage_percentage: Some(95.0),
            }),
            style_consistency: Some(StyleConsistency {
                is_consistent: Some(true),
                style_issues: Vec::new(),
            }),
            complexity_alignment: Some(ComplexityAlignment {
                is_appropriate: Some(true),
                complexity_feedback: Some("complexity suits the content".to_string()),
            }),
            irrelevant_elements: Vec::new(),
            improvement_suggestions: vec![
                "consider more interactive elements".to_string(),
                "refine the color palette".to_string(),
            ],
            is_acceptable: Some(true),
            confidence: Some(0.90),
        }
    }
}

fn get_f64(map: &Map<String, Value>, key: &str) -> Option<f64> {
    map.get(key).and_then(Value::as_f64)
}

fn get_bool(map: &Map<String, Value>, key: &str) -> Option<bool> {
    map.get(key).and_then(Value::as_bool)
}

fn get_string(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key)
        .and_then(Value::as_str)
        .map(|s| s.to_string())
}

fn get_string_vec(map: &Map<String, Value>, key: &str) -> Vec<String> {
    map.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(|s| s.to_string())
                .collect()
        })
        .unwrap_or_default()
}

fn get_u32_vec(map: &Map<String, Value>, key: &str) -> Vec<u32> {
    map.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_u64)
                .map(|n| n as u32)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {:?}", other),
        }
    }

    #[test]
    fn test_quality_assessment_from_full_map() {
        let map = as_map(json!({
            "quality_score": 85,
            "content_alignment": {"score": 90, "reasoning": "matches well"},
            "visual_richness": {"score": 80, "reasoning": "rich"},
            "educational_value": {"score": 88, "reasoning": "clear"},
            "technical_quality": {"score": 85, "reasoning": "clean"},
            "improvement_suggestions": ["more contrast"],
            "needs_revision": false,
            "revision_priority": "low"
        }));

        let assessment = QualityAssessment::from_map(&map);
        assert_eq!(assessment.quality_score, Some(85.0));
        assert_eq!(
            assessment.content_alignment.as_ref().unwrap().reasoning.as_deref(),
            Some("matches well")
        );
        assert_eq!(assessment.needs_revision, Some(false));
        assert_eq!(assessment.improvement_suggestions, vec!["more contrast"]);
    }

    #[test]
    fn test_quality_assessment_survives_null_and_wrong_types() {
        // A repaired map: required keys present but null, one field mistyped.
        let map = as_map(json!({
            "quality_score": "eighty-five",
            "content_alignment": null,
            "visual_richness": null,
            "educational_value": null,
            "technical_quality": null,
            "needs_revision": null
        }));

        let assessment = QualityAssessment::from_map(&map);
        assert!(assessment.quality_score.is_none());
        assert!(assessment.content_alignment.is_none());
        assert!(assessment.needs_revision.is_none());
    }

    #[test]
    fn test_passes_threshold() {
        let mut assessment = QualityAssessment::fallback();
        assert!(assessment.passes(75.0));
        assert!(!assessment.passes(90.0));

        assessment.quality_score = None;
        assert!(!assessment.passes(0.0));
    }

    #[test]
    fn test_coherence_perfect() {
        let report = CoherenceReport::perfect();
        assert_eq!(report.coherence_score, Some(100.0));
        assert_eq!(report.needs_revision, Some(false));
        assert!(report.problematic_segments.is_empty());
    }

    #[test]
    fn test_coherence_from_map_with_issue_lists() {
        let map = as_map(json!({
            "coherence_score": 72,
            "logical_flow": {"score": 90, "issues": []},
            "concept_progression": {"score": 60, "issues": ["segment 3 jumps ahead"]},
            "terminology_consistency": {"score": 95, "issues": []},
            "transition_quality": {"score": 75, "issues": ["2 to 3 lacks a bridge"]},
            "needs_revision": true,
            "problematic_segments": [2, 3]
        }));

        let report = CoherenceReport::from_map(&map);
        assert_eq!(report.coherence_score, Some(72.0));
        assert_eq!(
            report.concept_progression.unwrap().issues,
            vec!["segment 3 jumps ahead"]
        );
        assert_eq!(report.problematic_segments, vec![2, 3]);
    }

    #[test]
    fn test_match_report_from_map() {
        let map = as_map(json!({
            "match_score": 90,
            "concept_coverage": {
                "covered_concepts": ["A", "B"],
                "missing_concepts": ["C"],
                "coverage_percentage": 75
            },
            "style_consistency": {"is_consistent": true, "style_issues": []},
            "complexity_alignment": {"is_appropriate": true, "complexity_feedback": "fits"},
            "is_acceptable": true,
            "confidence": 0.85
        }));

        let report = MatchReport::from_map(&map);
        assert_eq!(report.match_score, Some(90.0));
        let coverage = report.concept_coverage.unwrap();
        assert_eq!(coverage.missing_concepts, vec!["C"]);
        assert_eq!(coverage.coverage_percentage, Some(75.0));
        assert_eq!(report.is_acceptable, Some(true));
    }

    #[test]
    fn test_fallbacks_are_self_consistent() {
        assert!(QualityAssessment::fallback().passes(75.0));
        assert_eq!(CoherenceReport::fallback().needs_revision, Some(true));
        assert_eq!(MatchReport::fallback().is_acceptable, Some(true));
    }
}
