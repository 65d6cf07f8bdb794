//! Rule color table.
//!
//! # Invariants
//! - Every rule color is theme-invariant except `Normal`.
//! - Colors are uppercase `#RRGGBB` strings.

use crate::model::rule::{TajweedRule, Theme};

pub const NORMAL_COLOR_DARK: &str = "#FFFFFF";
pub const NORMAL_COLOR_LIGHT: &str = "#000000";

/// Resolves the display color of `rule` for `theme`.
pub fn color_for(rule: TajweedRule, theme: Theme) -> &'static str {
    match rule {
        TajweedRule::Normal => match theme {
            Theme::Dark => NORMAL_COLOR_DARK,
            Theme::Light => NORMAL_COLOR_LIGHT,
        },
        TajweedRule::Tafkheem => "#E53935",
        TajweedRule::Ghunnah => "#1E88E5",
        TajweedRule::Ikhfa => "#43A047",
        TajweedRule::Silent => "#9E9E9E",
        TajweedRule::Mad => "#8E24AA",
        TajweedRule::Idghaam => "#FB8C00",
        TajweedRule::Iqlab => "#EC407A",
        TajweedRule::Qalqalah => "#26C6DA",
        TajweedRule::HamzatWasl => "#78909C",
    }
}

/// Returns every rule with its color for `theme`, in declaration order.
pub fn all_colors(theme: Theme) -> Vec<(TajweedRule, &'static str)> {
    TajweedRule::ALL
        .into_iter()
        .map(|rule| (rule, color_for(rule, theme)))
        .collect()
}
