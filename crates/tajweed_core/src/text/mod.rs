//! Arabic text segmentation and rule classification.
//!
//! # Responsibility
//! - Turn a raw string into ordered, colorized segments without caching.
//!
//! # Invariants
//! - The pipeline never fails: any string, including empty or non-Arabic
//!   input, yields a deterministic segment list.
//! - Segment texts joined in order equal the input.

pub mod classifier;
pub(crate) mod grapheme;
pub mod letters;

use crate::color::palette::color_for;
use crate::model::rule::Theme;
use crate::model::segment::Segment;

/// Runs segmentation, classification and color mapping for one string.
pub fn colorize(text: &str, theme: Theme) -> Vec<Segment> {
    let units = grapheme::segment_units(text);
    let rules = classifier::classify_units(&units);

    units
        .iter()
        .zip(rules)
        .map(|(unit, rule)| Segment::new(unit.text(), rule, color_for(rule, theme)))
        .collect()
}
