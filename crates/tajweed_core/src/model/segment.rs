//! Colorized segment model.
//!
//! # Invariants
//! - Segments are produced in input order; joining every `text` rebuilds the
//!   input exactly.
//! - A segment is immutable once produced and is shared via `Arc`.

use crate::model::rule::TajweedRule;
use serde::{Deserialize, Serialize};

/// One run of text painted with a single rule color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Base character plus its attached diacritics, verbatim from input.
    pub text: String,
    pub rule: TajweedRule,
    /// `#RRGGBB` color resolved for the active theme.
    pub color: String,
}

impl Segment {
    pub fn new(text: impl Into<String>, rule: TajweedRule, color: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rule,
            color: color.into(),
        }
    }
}

/// Joins segment texts back into the source string.
pub fn join_segments(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| segment.text.as_str())
        .collect()
}
