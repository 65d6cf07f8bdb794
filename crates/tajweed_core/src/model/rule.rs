//! Tajweed rule and theme vocabulary.
//!
//! # Responsibility
//! - Define the closed set of rules the classifier and color mapper share.
//! - Provide stable string ids for FFI/wire use and user-facing legend text.
//!
//! # Invariants
//! - Rule ids are lowercase snake_case and never change once published.
//! - `HamzatWasl` is part of the vocabulary but is never assigned by the
//!   classifier.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Pronunciation rule attached to one segment of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TajweedRule {
    /// No special rule; rendered in the theme's text color.
    Normal,
    /// Emphatic/heavy letter.
    Tafkheem,
    /// Nasalization on noon/meem.
    Ghunnah,
    /// Hidden noon before one of fifteen letters.
    Ikhfa,
    /// Written but not pronounced.
    Silent,
    /// Vowel elongation.
    Mad,
    /// Noon merged into the following letter.
    Idghaam,
    /// Noon/tanween turned into meem before ba.
    Iqlab,
    /// Echoing release of a letter carrying sukun.
    Qalqalah,
    /// Connecting hamza. Colored, never assigned.
    HamzatWasl,
}

/// Rule id for `TajweedRule::Normal`.
pub const TAJWEED_RULE_NORMAL: &str = "normal";
/// Rule id for `TajweedRule::Tafkheem`.
pub const TAJWEED_RULE_TAFKHEEM: &str = "tafkheem";
/// Rule id for `TajweedRule::Ghunnah`.
pub const TAJWEED_RULE_GHUNNAH: &str = "ghunnah";
/// Rule id for `TajweedRule::Ikhfa`.
pub const TAJWEED_RULE_IKHFA: &str = "ikhfa";
/// Rule id for `TajweedRule::Silent`.
pub const TAJWEED_RULE_SILENT: &str = "silent";
/// Rule id for `TajweedRule::Mad`.
pub const TAJWEED_RULE_MAD: &str = "mad";
/// Rule id for `TajweedRule::Idghaam`.
pub const TAJWEED_RULE_IDGHAAM: &str = "idghaam";
/// Rule id for `TajweedRule::Iqlab`.
pub const TAJWEED_RULE_IQLAB: &str = "iqlab";
/// Rule id for `TajweedRule::Qalqalah`.
pub const TAJWEED_RULE_QALQALAH: &str = "qalqalah";
/// Rule id for `TajweedRule::HamzatWasl`.
pub const TAJWEED_RULE_HAMZAT_WASL: &str = "hamzat_wasl";

impl TajweedRule {
    /// Every rule in declaration order.
    pub const ALL: [TajweedRule; 10] = [
        Self::Normal,
        Self::Tafkheem,
        Self::Ghunnah,
        Self::Ikhfa,
        Self::Silent,
        Self::Mad,
        Self::Idghaam,
        Self::Iqlab,
        Self::Qalqalah,
        Self::HamzatWasl,
    ];

    /// Stable string id, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => TAJWEED_RULE_NORMAL,
            Self::Tafkheem => TAJWEED_RULE_TAFKHEEM,
            Self::Ghunnah => TAJWEED_RULE_GHUNNAH,
            Self::Ikhfa => TAJWEED_RULE_IKHFA,
            Self::Silent => TAJWEED_RULE_SILENT,
            Self::Mad => TAJWEED_RULE_MAD,
            Self::Idghaam => TAJWEED_RULE_IDGHAAM,
            Self::Iqlab => TAJWEED_RULE_IQLAB,
            Self::Qalqalah => TAJWEED_RULE_QALQALAH,
            Self::HamzatWasl => TAJWEED_RULE_HAMZAT_WASL,
        }
    }

    /// Display name shown in the legend.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Tafkheem => "Tafkheem",
            Self::Ghunnah => "Ghunnah",
            Self::Ikhfa => "Ikhfa",
            Self::Silent => "Silent",
            Self::Mad => "Mad",
            Self::Idghaam => "Idghaam",
            Self::Iqlab => "Iqlab",
            Self::Qalqalah => "Qalqalah",
            Self::HamzatWasl => "Hamzat al-Wasl",
        }
    }

    /// User-facing short description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Normal => "Regular pronunciation without a special rule.",
            Self::Tafkheem => "Heavy, emphatic pronunciation of the letter.",
            Self::Ghunnah => "Nasalization held for two counts on noon or meem.",
            Self::Ikhfa => "Noon is partially hidden with nasalization before the next letter.",
            Self::Silent => "Written letter that is not pronounced.",
            Self::Mad => "Vowel sound is elongated.",
            Self::Idghaam => "Noon merges into the following letter.",
            Self::Iqlab => "Noon or tanween sound turns into meem before ba.",
            Self::Qalqalah => "Echoing bounce when the letter carries sukun.",
            Self::HamzatWasl => "Connecting hamza, pronounced only when starting from it.",
        }
    }
}

impl Display for TajweedRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses one rule from its stable string id.
///
/// Surrounding whitespace is ignored; ids are case-sensitive.
pub fn parse_tajweed_rule(value: &str) -> Result<TajweedRule, TajweedRuleParseError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(TajweedRuleParseError::Empty);
    }

    TajweedRule::ALL
        .into_iter()
        .find(|rule| rule.as_str() == normalized)
        .ok_or_else(|| TajweedRuleParseError::Unsupported(normalized.to_string()))
}

/// Rule id parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TajweedRuleParseError {
    Empty,
    Unsupported(String),
}

impl Display for TajweedRuleParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "tajweed rule id must not be empty"),
            Self::Unsupported(value) => write!(f, "tajweed rule id is unsupported: {value}"),
        }
    }
}

impl Error for TajweedRuleParseError {}

/// Display theme; only affects the `normal` rule color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Maps the host's `is_dark_mode` flag to a theme.
    pub fn from_dark_mode(is_dark_mode: bool) -> Self {
        if is_dark_mode {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Stable string id used in logs and wire payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}
