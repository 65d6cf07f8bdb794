//! Core Tajweed segmentation logic.
//! This crate is the single source of truth for rule and color invariants.

pub mod cache;
pub mod color;
pub mod logging;
pub mod model;
pub mod service;
pub mod text;

pub use cache::segment_cache::{
    CacheConfig, CacheConfigError, CacheStats, FifoSegmentCache, SegmentStore, SharedSegments,
    DEFAULT_CACHE_CAPACITY,
};
pub use color::legend::{legend, LegendEntry};
pub use color::palette::{all_colors, color_for};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::rule::{parse_tajweed_rule, TajweedRule, TajweedRuleParseError, Theme};
pub use model::segment::{join_segments, Segment};
pub use service::tajweed_service::TajweedService;
pub use text::classifier::classification_order;
pub use text::colorize;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
