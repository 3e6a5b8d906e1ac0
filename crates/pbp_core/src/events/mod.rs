//! # Event Extraction Module
//!
//! Derives structured events from free-form play text.
//!
//! - `patterns` - Ordered per-category name matchers, passer and yardage parsing
//! - `extractor` - Play classification and comprehensive-record derivation

pub mod extractor;
pub mod patterns;

pub use extractor::build_comprehensive;
pub use patterns::{extract_passer, extract_player, extract_yards, EventKind};
