//! Fresco Salvage
//!
//! Turns unreliable, free-form LLM responses into usable JSON values.
//!
//! # Overview
//!
//! Models asked for "strict JSON" return JSON wrapped in prose, markdown
//! fences, apologies, or nothing recognizable at all. This crate is the
//! pipeline's recovery layer: an ordered cascade of parsing strategies that
//! extracts the best candidate value, plus a repairer that fills missing
//! required keys so downstream consumers never have to special-case a
//! half-complete response.
//!
//! # Architecture
//!
//! ```text
//! Response text → extract_json → Option<Value> → ensure_keys → Map (all keys present)
//! ```
//!
//! # Key Properties
//!
//! - **Never fails on malformed input**: total extraction failure is
//!   `None`, not an error
//! - **Most-trustworthy-first**: a well-formed response is parsed whole and
//!   never subjected to lossy regex heuristics
//! - **Repair, don't reject**: missing required keys are filled with null
//!   and logged; present keys are never touched
//!
//! # Example Usage
//!
//! ```
//! use fresco_salvage::{extract_json, ensure_keys};
//!
//! let response = "Sure! Here you go:\n```json\n{\"quality_score\": 85}\n```";
//! let value = extract_json(response);
//! let repaired = ensure_keys(value, &["quality_score", "needs_revision"]);
//!
//! assert_eq!(repaired["quality_score"], 85);
//! assert!(repaired["needs_revision"].is_null());
//! ```

#![warn(missing_docs)]

mod clean;
mod extract;
mod repair;
mod schema;


pub use clean::{strip_wrapper_text, WrapperPhrases};
pub use extract::{extract_json, extract_json_or};
pub use repair::ensure_keys;
pub use schema::{is_valid_analysis, is_valid_segments};
