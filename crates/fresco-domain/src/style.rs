//! Animation style families

use serde::{Deserialize, Serialize};

/// The family of scene-generation prompt used for a segment
///
/// Each style selects a different system prompt, few-shot set, and list of
/// validation markers in `fresco-prompt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationStyle {
    /// General-purpose scene generation
    Basic,
    /// LaTeX-heavy mathematical scenes with color-coded notation
    Mathematical,
    /// Paced, progressively revealed educational scenes
    Educational,
}

impl Default for AnimationStyle {
    fn default() -> Self {
        AnimationStyle::Basic
    }
}

impl AnimationStyle {
    /// Stable lowercase name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationStyle::Basic => "basic",
            AnimationStyle::Mathematical => "mathematical",
            AnimationStyle::Educational => "educational",
        }
    }
}

impl std::fmt::Display for AnimationStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
