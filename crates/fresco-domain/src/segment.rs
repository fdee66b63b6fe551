//! Script segments - the narrated units an animation script is built from

use serde::{Deserialize, Serialize};

/// The role a segment plays in the overall script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    /// Opens the script and frames the topic
    Introduction,
    /// Develops a concept in detail
    Explanation,
    /// Grounds a concept in a worked example
    Example,
    /// Recaps and closes the script
    Summary,
    /// Anything the model invented that we do not recognize
    #[serde(other)]
    Other,
}

impl Default for SegmentKind {
    fn default() -> Self {
        SegmentKind::Explanation
    }
}

/// One narrated unit of an educational script
///
/// Segments come back from the segmentation model as JSON. Only `type` and
/// `content` are guaranteed by the segmentation schema gate; everything else
/// is best-effort and defaults when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    /// 1-based position in the script
    #[serde(default)]
    pub segment_id: u32,

    /// Short heading for the segment
    #[serde(default)]
    pub title: String,

    /// The narration text
    pub content: String,

    /// Role of the segment in the script
    #[serde(rename = "type", default)]
    pub kind: SegmentKind,

    /// Estimated on-screen duration in seconds
    #[serde(default)]
    pub duration: f64,

    /// Suggested animation treatment (e.g. "fade_in", "step_by_step")
    #[serde(default)]
    pub animation_type: Option<String>,

    /// Visual elements the scene should include
    #[serde(default)]
    pub visual_elements: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_deserializes_minimal_json() {
        let json = r#"{"type": "introduction", "content": "Welcome."}"#;
        let segment: Segment = serde_json::from_str(json).unwrap();
        assert_eq!(segment.kind, SegmentKind::Introduction);
        assert_eq!(segment.content, "Welcome.");
        assert_eq!(segment.segment_id, 0);
        assert!(segment.visual_elements.is_empty());
    }

    #[test]
    fn test_segment_deserializes_full_json() {
        let json = r#"{
            "segment_id": 2,
            "title": "Detailed explanation",
            "content": "The core of this concept is...",
            "type": "explanation",
            "duration": 8.0,
            "animation_type": "step_by_step",
            "visual_elements": ["explanation_text", "animated_diagram"]
        }"#;
        let segment: Segment = serde_json::from_str(json).unwrap();
        assert_eq!(segment.segment_id, 2);
        assert_eq!(segment.kind, SegmentKind::Explanation);
        assert_eq!(segment.duration, 8.0);
        assert_eq!(segment.animation_type.as_deref(), Some("step_by_step"));
        assert_eq!(segment.visual_elements.len(), 2);
    }

    #[test]
    fn test_unknown_kind_maps_to_other() {
        let json = r#"{"type": "cliffhanger", "content": "..."}"#;
        let segment: Segment = serde_json::from_str(json).unwrap();
        assert_eq!(segment.kind, SegmentKind::Other);
    }
}
