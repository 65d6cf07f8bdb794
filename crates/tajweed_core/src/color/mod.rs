//! Rule-to-color mapping and legend metadata.
//!
//! # Responsibility
//! - Resolve display colors per rule and theme.
//! - Describe assignable rules for the legend/help UI.
//!
//! # Invariants
//! - The color table is static; any change to it requires clearing cached
//!   segments.

pub mod legend;
pub mod palette;
