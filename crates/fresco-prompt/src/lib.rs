//! Fresco Prompt Catalog
//!
//! Prompt construction for the animation-script pipeline.
//!
//! # Overview
//!
//! Two families of prompt live here:
//!
//! - **Scene prompts**: drive the scene-code generator. Each
//!   [`AnimationStyle`](fresco_domain::AnimationStyle) selects a system
//!   prompt, a few-shot example set, and a list of validation markers the
//!   generated code must contain.
//! - **Structured prompts**: ask the model for JSON (segmentation, script
//!   analysis). These embed a canonical example payload, which measurably
//!   improves format compliance over schema prose alone.
//!
//! Prompt assembly is static string building - responses come back through
//! `fresco-salvage`, never through this crate.

#![warn(missing_docs)]

mod scene;
mod structured;

pub use scene::{code_passes_markers, template_for, FewShotExample, ScenePrompt, ScenePromptTemplate};
pub use structured::{analysis_prompt, segmentation_prompt};
