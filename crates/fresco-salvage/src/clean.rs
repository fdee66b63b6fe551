//! Wrapper-phrase stripping for responses with known boilerplate
//!
//! Not part of the extraction cascade. An optional pre-pass for callers
//! whose models reliably frame JSON with the same pleasantries.

/// Leading phrases removed by default, exact match only
const DEFAULT_PREFIXES: &[&str] = &[
    "这是分析结果：",
    "分析结果如下：",
    "以下是JSON格式的结果：",
    "Here is the result:",
    "Here's the analysis:",
];

/// Trailing phrases removed by default, exact match only
const DEFAULT_SUFFIXES: &[&str] = &[
    "以上就是分析结果。",
    "希望这个结果对您有帮助。",
    "如有疑问请随时询问。",
    "Hope this helps.",
];

/// Known boilerplate phrases a model wraps around its payload
///
/// Stripping is exact prefix/suffix matching, not regex, with whitespace
/// trimmed after each removal. Re-applying to already-clean text is a no-op.
#[derive(Debug, Clone)]
pub struct WrapperPhrases {
    prefixes: Vec<String>,
    suffixes: Vec<String>,
}

impl Default for WrapperPhrases {
    fn default() -> Self {
        Self {
            prefixes: DEFAULT_PREFIXES.iter().map(|s| s.to_string()).collect(),
            suffixes: DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl WrapperPhrases {
    /// Phrase set with no defaults
    pub fn empty() -> Self {
        Self {
            prefixes: Vec::new(),
            suffixes: Vec::new(),
        }
    }

    /// Add a leading phrase to strip
    pub fn with_prefix(mut self, phrase: impl Into<String>) -> Self {
        self.prefixes.push(phrase.into());
        self
    }

    /// Add a trailing phrase to strip
    pub fn with_suffix(mut self, phrase: impl Into<String>) -> Self {
        self.suffixes.push(phrase.into());
        self
    }

    /// Remove known wrapper phrases from `text`
    ///
    /// Each phrase in the list is tried once, in order, against the current
    /// ends of the text.
    pub fn strip(&self, text: &str) -> String {
        let mut cleaned = text.trim();

        for prefix in &self.prefixes {
            if let Some(rest) = cleaned.strip_prefix(prefix.as_str()) {
                cleaned = rest.trim();
            }
        }

        for suffix in &self.suffixes {
            if let Some(rest) = cleaned.strip_suffix(suffix.as_str()) {
                cleaned = rest.trim();
            }
        }

        cleaned.to_string()
    }
}

/// Strip the default wrapper phrases from `text`
pub fn strip_wrapper_text(text: &str) -> String {
    WrapperPhrases::default().strip(text)
}
