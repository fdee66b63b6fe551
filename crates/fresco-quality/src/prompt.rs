//! Judge prompts for the three checkers
//!
//! Each prompt ends with the exact JSON shape the judge must return,
//! rendered from a canonical example. Responses still go through
//! `fresco-salvage`; the shape block just raises the hit rate of the
//! earliest, most trustworthy extraction strategies.

use fresco_domain::AnimationStyle;
use serde_json::json;

/// System role for quality assessment
pub const QUALITY_SYSTEM_ROLE: &str =
    "You are a professional science education animation quality assessor.";

/// System role for coherence checking
pub const COHERENCE_SYSTEM_ROLE: &str =
    "You are a professional science education content editor.";

/// System role for scene/narration match review
pub const MATCH_SYSTEM_ROLE: &str =
    "You are a professional science education animation reviewer.";

/// Build the quality-assessment prompt
pub fn quality_prompt(
    code: &str,
    content: &str,
    style: AnimationStyle,
    improvement_hints: Option<&str>,
) -> String {
    let shape = json!({
        "quality_score": 85,
        "content_alignment": {"score": 90, "reasoning": "animation matches the narration closely"},
        "visual_richness": {"score": 80, "reasoning": "rich elements, could add interaction"},
        "educational_value": {"score": 88, "reasoning": "helps learners grasp the concept"},
        "technical_quality": {"score": 85, "reasoning": "clear structure, no obvious defects"},
        "improvement_suggestions": ["increase color contrast", "add gradual transitions"],
        "needs_revision": false,
        "revision_priority": "low"
    });

    let mut prompt = format!(
        r#"As a professional educational-animation quality assessor, evaluate whether the following scene code fits the teaching content:

**Criteria:**
1. Is the animation highly relevant to the narration and vivid?
2. Is the animation rich and visually engaging?
3. Does the animation aid understanding of the concept?
4. Is the code clear and readable?
5. Is there visual clutter or overlap?

**Narration:**
{}

**Animation style:**
{}

**Generated scene code:**
```python
{}
```
"#,
        content, style, code
    );

    if let Some(hints) = improvement_hints {
        prompt.push_str(&format!("\n[Upstream improvement notes]\n{}\n", hints));
    }

    prompt.push_str(&format!(
        "\n**Return a strict JSON assessment in this exact shape:**\n```json\n{}\n```\n",
        pretty(&shape)
    ));

    prompt
}

/// Build the coherence prompt over segment narrations
pub fn coherence_prompt(contents: &[String]) -> String {
    let shape = json!({
        "coherence_score": 85,
        "logical_flow": {"score": 90, "issues": []},
        "concept_progression": {"score": 80, "issues": ["segment 3 advances too quickly"]},
        "terminology_consistency": {"score": 95, "issues": []},
        "transition_quality": {"score": 75, "issues": ["segment 2 to 3 lacks a transition"]},
        "improvement_suggestions": [
            "add a transition sentence at the end of segment 2",
            "open segment 3 with a short recap"
        ],
        "needs_revision": true,
        "problematic_segments": [2, 3]
    });

    format!(
        r#"As a professional educational content editor, check the coherence of the following script segments:

**Criteria:**
1. Are the logical relations between segments clear?
2. Are concepts introduced progressively?
3. Is terminology used consistently?
4. Are there abrupt topic jumps?
5. Does the narration flow naturally overall?

**Script segments:**
{}

**Return a strict JSON analysis in this exact shape:**
```json
{}
```
"#,
        format_segments(contents),
        pretty(&shape)
    )
}

/// Build the scene/narration match prompt
pub fn match_prompt(code: &str, content: &str, style: AnimationStyle) -> String {
    let shape = json!({
        "match_score": 90,
        "concept_coverage": {
            "covered_concepts": ["concept A", "concept B"],
            "missing_concepts": ["concept C"],
            "coverage_percentage": 75
        },
        "style_consistency": {"is_consistent": true, "style_issues": []},
        "complexity_alignment": {"is_appropriate": true, "complexity_feedback": "complexity suits the content"},
        "irrelevant_elements": [],
        "improvement_suggestions": ["visualize concept C", "smooth the transitions"],
        "is_acceptable": true,
        "confidence": 0.85
    });

    format!(
        r#"As a professional educational-animation reviewer, verify that the scene code matches the narration:

**Checks:**
1. Do the animation elements reflect the narration's key concepts?
2. Does the animation style fit the content type ({})?
3. Does scene complexity match the depth of the content?
4. Are there irrelevant or distracting elements?

**Narration:**
{}

**Scene code:**
```python
{}
```

**Return a strict JSON verdict in this exact shape:**
```json
{}
```
"#,
        style,
        content,
        code,
        pretty(&shape)
    )
}

fn format_segments(contents: &[String]) -> String {
    let mut formatted = String::new();
    for (idx, content) in contents.iter().enumerate() {
        formatted.push_str(&format!("Segment {}: {}\n\n", idx + 1, content));
    }
    formatted
}

fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}
