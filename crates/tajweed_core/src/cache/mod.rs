//! Memoization layer for parse results.
//!
//! # Responsibility
//! - Define the storage contract the service depends on.
//! - Provide the bounded FIFO store used in production.

pub mod segment_cache;
