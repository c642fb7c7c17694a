//! # Recommendation Engine
//!
//! This crate scores campsites against a visitor's stated preferences and
//! returns a ranked list, each entry carrying the reasons it was scored.

/// Validated preference profile
mod preferences;
pub use preferences::*;

/// Scoring rules and ranking
mod scoring;
pub use scoring::*;
