//! Legend metadata for the help UI.

use crate::color::palette::color_for;
use crate::model::rule::{TajweedRule, Theme};
use crate::text::classifier::classification_order;
use serde::{Deserialize, Serialize};

/// One legend row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub rule: TajweedRule,
    pub color: String,
    pub name: String,
    pub description: String,
}

/// Returns legend rows for every rule the classifier can assign.
///
/// Rows follow rule declaration order. `Normal` and `HamzatWasl` are never
/// listed; the theme does not matter because neither is included.
pub fn legend() -> Vec<LegendEntry> {
    let assignable = classification_order();

    TajweedRule::ALL
        .into_iter()
        .filter(|rule| assignable.contains(rule))
        .map(|rule| LegendEntry {
            rule,
            color: color_for(rule, Theme::default()).to_string(),
            name: rule.display_name().to_string(),
            description: rule.description().to_string(),
        })
        .collect()
}
