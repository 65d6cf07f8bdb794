//! Grapheme segmenter.
//!
//! # Responsibility
//! - Split input into atomic units: one base character followed by the
//!   maximal run of diacritics attached to it.
//!
//! # Invariants
//! - Units borrow contiguous slices of the input; concatenating them in
//!   order yields the input exactly.
//! - Leading diacritics with no base form one base-less unit.

use crate::text::letters::{is_diacritic, is_tanween};

/// One classification unit borrowed from the input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AtomicUnit<'a> {
    text: &'a str,
    base: Option<char>,
}

impl<'a> AtomicUnit<'a> {
    pub(crate) fn text(&self) -> &'a str {
        self.text
    }

    /// Base character, `None` for a run of leading diacritics.
    pub(crate) fn base(&self) -> Option<char> {
        self.base
    }

    /// Diacritics attached after the base character.
    pub(crate) fn marks(&self) -> impl Iterator<Item = char> + 'a {
        let skip = usize::from(self.base.is_some());
        self.text.chars().skip(skip)
    }

    pub(crate) fn has_mark(&self, mark: char) -> bool {
        self.marks().any(|ch| ch == mark)
    }

    pub(crate) fn has_tanween(&self) -> bool {
        self.marks().any(is_tanween)
    }

    /// Whether any codepoint of the unit, base included, equals `ch`.
    pub(crate) fn contains(&self, ch: char) -> bool {
        self.text.contains(ch)
    }

    pub(crate) fn last_char(&self) -> Option<char> {
        self.text.chars().next_back()
    }
}

/// Splits `text` into atomic units in input order.
pub(crate) fn segment_units(text: &str) -> Vec<AtomicUnit<'_>> {
    let mut units = Vec::new();
    let mut current: Option<(usize, Option<char>)> = None;

    for (index, ch) in text.char_indices() {
        if is_diacritic(ch) {
            if current.is_none() {
                current = Some((index, None));
            }
            continue;
        }

        if let Some((start, base)) = current {
            units.push(AtomicUnit {
                text: &text[start..index],
                base,
            });
        }
        current = Some((index, Some(ch)));
    }

    if let Some((start, base)) = current {
        units.push(AtomicUnit {
            text: &text[start..],
            base,
        });
    }

    units
}
