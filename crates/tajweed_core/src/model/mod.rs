//! Domain vocabulary shared by the classifier, color mapper and cache.
//!
//! # Responsibility
//! - Define the rule enumeration, theme switch and segment value.
//!
//! # Invariants
//! - Every type here is a plain value; nothing holds mutable shared state.

pub mod rule;
pub mod segment;
