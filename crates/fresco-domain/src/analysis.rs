//! Script analysis - the model's reading of a source text

use serde::{Deserialize, Serialize};

/// Teaching-oriented analysis of a source text
///
/// Produced by the analysis prompt in `fresco-prompt` and salvaged from the
/// model response. `topic`, `style`, and `key_concepts` are guarded by the
/// analysis schema gate; the remaining fields default when the model omits
/// them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScriptAnalysis {
    /// Central topic of the text
    #[serde(default)]
    pub topic: String,

    /// Presentation style (e.g. "popular science")
    #[serde(default)]
    pub style: String,

    /// Concepts the script must cover
    #[serde(default)]
    pub key_concepts: Vec<String>,

    /// Notes on the intended audience
    #[serde(default)]
    pub audience_considerations: Option<String>,

    /// Rough difficulty rating (e.g. "beginner")
    #[serde(default)]
    pub complexity_level: Option<String>,

    /// Estimated total runtime in seconds, as reported by the model
    #[serde(default)]
    pub estimated_duration: Option<String>,

    /// Ideas for visualizing the material
    #[serde(default)]
    pub visual_opportunities: Vec<String>,

    /// Suggested pedagogical approach
    #[serde(default)]
    pub teaching_strategy: Option<String>,
}
