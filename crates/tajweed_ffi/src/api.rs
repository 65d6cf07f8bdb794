//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Own the single process-wide `TajweedService` used by the renderer.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Rule ids crossing the boundary are the stable snake_case ids.

use log::warn;
use once_cell::sync::Lazy;
use tajweed_core::{
    core_version as core_version_inner, default_log_level as default_log_level_inner,
    init_logging as init_logging_inner, ping as ping_inner, CacheConfig, CacheStats, FifoSegmentCache, LegendEntry, Segment, TajweedService, Theme,
};

const CACHE_CAPACITY_ENV: &str = "TAJWEED_CACHE_CAPACITY";

static SERVICE: Lazy<TajweedService<FifoSegmentCache>> = Lazy::new(build_service);

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Log level the host should pass to `init_logging` when it has no override.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Returns `debug` for debug builds and `info` for release builds.
#[flutter_rust_bridge::frb(sync)]
pub fn default_log_level() -> String {
    default_log_level_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One colorized run of verse text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TajweedSegment {
    /// Verbatim slice of the input.
    pub text: String,
    /// Stable rule id (`normal|tafkheem|...`).
    pub rule: String,
    /// `#RRGGBB` display color.
    pub color: String,
}

/// One row of the Tajweed legend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TajweedLegendItem {
    pub rule: String,
    pub color: String,
    pub name: String,
    pub description: String,
}

/// Rule color pair for the active theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TajweedColorItem {
    pub rule: String,
    pub color: String,
}

/// Cache counters for diagnostics screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TajweedCacheStats {
    pub entries: u32,
    pub capacity: u32,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

/// Splits verse text into colorized Tajweed segments.
///
/// # FFI contract
/// - Sync call, CPU-only; repeated calls with the same input hit the cache.
/// - Never panics; empty input returns an empty list.
/// - Concatenating every `text` yields the input exactly.
#[flutter_rust_bridge::frb(sync)]
pub fn tajweed_parse(text: String, is_dark_mode: bool) -> Vec<TajweedSegment> {
    SERVICE
        .parse_for_mode(text.as_str(), is_dark_mode)
        .iter()
        .map(to_tajweed_segment)
        .collect()
}

/// Returns legend rows for every rule the classifier can assign.
///
/// # FFI contract
/// - Sync call, static data.
#[flutter_rust_bridge::frb(sync)]
pub fn tajweed_legend() -> Vec<TajweedLegendItem> {
    SERVICE
        .legend()
        .into_iter()
        .map(to_tajweed_legend_item)
        .collect()
}

/// Returns every rule color for the requested theme.
///
/// # FFI contract
/// - Sync call, static data.
#[flutter_rust_bridge::frb(sync)]
pub fn tajweed_colors(is_dark_mode: bool) -> Vec<TajweedColorItem> {
    SERVICE
        .all_colors(Theme::from_dark_mode(is_dark_mode))
        .into_iter()
        .map(|(rule, color)| TajweedColorItem {
            rule: rule.as_str().to_string(),
            color: color.to_string(),
        })
        .collect()
}

/// Drops every cached parse result.
///
/// # FFI contract
/// - Sync call; safe on an empty cache.
#[flutter_rust_bridge::frb(sync)]
pub fn tajweed_clear_cache() {
    SERVICE.clear_cache();
}

/// Returns current cache counters.
#[flutter_rust_bridge::frb(sync)]
pub fn tajweed_cache_stats() -> TajweedCacheStats {
    to_tajweed_cache_stats(SERVICE.cache_stats())
}

fn build_service() -> TajweedService<FifoSegmentCache> {
    let config = resolve_cache_config(std::env::var(CACHE_CAPACITY_ENV).ok().as_deref());
    TajweedService::with_config(config).unwrap_or_else(|err| {
        warn!("event=cache_init module=ffi status=fallback reason={err}");
        TajweedService::default()
    })
}

fn resolve_cache_config(raw: Option<&str>) -> CacheConfig {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return CacheConfig::default();
    };
    match raw.parse::<usize>() {
        Ok(capacity) if capacity > 0 => CacheConfig::with_capacity(capacity),
        _ => {
            warn!(
                "event=cache_config module=ffi status=ignored env={} value={}",
                CACHE_CAPACITY_ENV, raw
            );
            CacheConfig::default()
        }
    }
}

fn to_tajweed_segment(segment: &Segment) -> TajweedSegment {
    TajweedSegment {
        text: segment.text.clone(),
        rule: segment.rule.as_str().to_string(),
        color: segment.color.clone(),
    }
}

fn to_tajweed_legend_item(entry: LegendEntry) -> TajweedLegendItem {
    TajweedLegendItem {
        rule: entry.rule.as_str().to_string(),
        color: entry.color,
        name: entry.name,
        description: entry.description,
    }
}

fn to_tajweed_cache_stats(stats: CacheStats) -> TajweedCacheStats {
    TajweedCacheStats {
        entries: u32::try_from(stats.entries).unwrap_or(u32::MAX),
        capacity: u32::try_from(stats.capacity).unwrap_or(u32::MAX),
        hits: stats.hits,
        misses: stats.misses,
        evictions: stats.evictions,
    }
}
