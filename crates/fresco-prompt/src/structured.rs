//! Example-driven prompts for structured (JSON) responses
//!
//! Each prompt embeds a canonical example payload. Models copy the shape of
//! a concrete example far more reliably than they follow schema prose.

use serde_json::json;

/// Build the segmentation prompt for `content`
pub fn segmentation_prompt(content: &str) -> String {
    let example = json!({
        "segments": [
            {
                "segment_id": 1,
                "title": "Concept introduction",
                "content": "Today we look at an important concept.",
                "type": "introduction",
                "duration": 5.0,
                "animation_type": "fade_in",
                "visual_elements": ["title_text", "concept_diagram"]
            },
            {
                "segment_id": 2,
                "title": "Detailed explanation",
                "content": "The core of this concept is...",
                "type": "explanation",
                "duration": 8.0,
                "animation_type": "step_by_step",
                "visual_elements": ["explanation_text", "animated_diagram"]
            }
        ],
        "total_segments": 2,
        "estimated_duration": 13.0
    });

    format!(
        r#"Split the following content into segments suitable for animated presentation.

**Important: return the result in EXACTLY the JSON format below, with no additional commentary!**

**Canonical JSON example:**
```json
{}
```

**Requirements:**
1. Each segment is one complete conceptual unit
2. Keep content length moderate so a scene can carry it
3. Types: introduction, explanation, example, summary
4. Animation types: fade_in, step_by_step, emphasis, comparison

**Content to split:**
{}

**Return the JSON result:**
"#,
        pretty(&example),
        content
    )
}

/// Build the script-analysis prompt for `content`
pub fn analysis_prompt(content: &str) -> String {
    let example = json!({
        "topic": "Foundations of artificial intelligence",
        "style": "popular science",
        "key_concepts": ["machine learning", "neural networks", "algorithms"],
        "audience_considerations": "aimed at beginners, plain language",
        "complexity_level": "beginner",
        "estimated_duration": "300",
        "visual_opportunities": [
            "neural network structure diagram",
            "algorithm flow animation",
            "data processing demo"
        ],
        "teaching_strategy": "progressive, theory grounded in examples"
    });

    format!(
        r#"Analyze the teaching characteristics and production requirements of the following content.

**Important: return the result in EXACTLY the JSON format below, with no additional commentary!**

**Canonical JSON example:**
```json
{}
```

**Requirements:**
1. Identify the core concepts and teaching goals accurately
2. Assess content complexity and audience
3. Propose suitable visualization ideas
4. Estimate a reasonable duration

**Content to analyze:**
{}

**Return the JSON result:**
"#,
        pretty(&example),
        content
    )
}

fn pretty(value: &serde_json::Value) -> String {
    // Pretty-printing a value built with json! cannot fail
    serde_json::to_string_pretty(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segmentation_prompt_embeds_content_and_example() {
        let prompt = segmentation_prompt("Gravity bends spacetime.");
        assert!(prompt.contains("Gravity bends spacetime."));
        assert!(prompt.contains("\"segments\""));
        assert!(prompt.contains("step_by_step"));
    }

    #[test]
    fn test_analysis_prompt_embeds_content_and_example() {
        let prompt = analysis_prompt("Sorting algorithms compared.");
        assert!(prompt.contains("Sorting algorithms compared."));
        assert!(prompt.contains("\"key_concepts\""));
        assert!(prompt.contains("\"teaching_strategy\""));
    }

    #[test]
    fn test_analysis_example_matches_domain_type() {
        // The example the model imitates must deserialize into the type
        // downstream callers read it into.
        let prompt = analysis_prompt("x");
        let start = prompt.find("```json\n").unwrap() + "```json\n".len();
        let end = prompt[start..].find("```").unwrap() + start;
        let analysis: fresco_domain::ScriptAnalysis =
            serde_json::from_str(prompt[start..end].trim()).unwrap();
        assert!(!analysis.topic.is_empty());
        assert_eq!(analysis.key_concepts.len(), 3);
    }

    #[test]
    fn test_embedded_examples_are_valid_json() {
        // The fenced example inside each prompt must itself survive a parse,
        // since it is what the model will imitate.
        for prompt in [segmentation_prompt("x"), analysis_prompt("x")] {
            let start = prompt.find("```json\n").unwrap() + "```json\n".len();
            let end = prompt[start..].find("```").unwrap() + start;
            let example: serde_json::Value = serde_json::from_str(prompt[start..end].trim()).unwrap();
            assert!(example.is_object());
        }
    }
}
