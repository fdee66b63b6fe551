//! Fresco Domain Layer
//!
//! Core types and trait seams for the Fresco animation-script pipeline.
//!
//! ## Key Concepts
//!
//! - **Segment**: one narrated unit of an educational script, paired with
//!   an animation treatment
//! - **Animation Style**: the family of scene-generation prompt used for a
//!   segment (basic, mathematical, educational)
//! - **Script Analysis**: the model's reading of a source text - topic,
//!   audience, key concepts
//!
//! ## Architecture
//!
//! This crate sits at the bottom of the workspace:
//! - Only `serde` as an external dependency
//! - Trait definitions for the LLM boundary; implementations live in
//!   `fresco-llm`
//! - No I/O, no logging

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod segment;
pub mod style;
pub mod traits;

// Re-exports for convenience
pub use analysis::ScriptAnalysis;
pub use segment::{Segment, SegmentKind};
pub use style::AnimationStyle;
pub use traits::LlmProvider;
