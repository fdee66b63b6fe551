//! Fresco Quality Layer
//!
//! Scores generated animation scenes and scripts using an LLM judge.
//!
//! # Overview
//!
//! Three checkers live here, all built on the same pattern: build a prompt,
//! call the judge model, salvage JSON out of whatever comes back, repair
//! missing keys, and map to a typed report. A judge that is unreachable
//! degrades to a deterministic fallback report rather than failing the
//! pipeline.
//!
//! # Architecture
//!
//! ```text
//! Scene code / script → prompt → LLM judge → fresco-salvage → typed report
//! ```
//!
//! # Checkers
//!
//! - [`QualityAssessor`]: is the animation rich, relevant, and teachable?
//! - [`CoherenceChecker`]: do the script segments flow?
//! - [`SceneMatcher`]: does the scene code actually cover the narration?
//!
//! # Example Usage
//!
//! ```no_run
//! use fresco_quality::{QualityAssessor, QualityConfig};
//! use fresco_domain::AnimationStyle;
//! use fresco_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let judge = MockProvider::new(r#"{"quality_score": 85, "needs_revision": false}"#);
//! let assessor = QualityAssessor::new(judge, QualityConfig::default());
//!
//! let assessment = assessor
//!     .assess("from manim import *", "Gravity bends spacetime.", AnimationStyle::Educational, None)
//!     .await?;
//!
//! println!("score: {:?}", assessment.quality_score);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod assessor;
mod coherence;
mod config;
mod error;
mod judge;
mod matcher;
mod prompt;
mod types;


pub use assessor::QualityAssessor;
pub use coherence::CoherenceChecker;
pub use config::QualityConfig;
pub use error::QualityError;
pub use matcher::SceneMatcher;
pub use types::{
    ComplexityAlignment, ConceptCoverage, CoherenceReport, MatchReport, QualityAssessment,
    ScoreDetail, StyleConsistency, COHERENCE_REQUIRED_KEYS, MATCH_REQUIRED_KEYS,
    QUALITY_REQUIRED_KEYS,
};
