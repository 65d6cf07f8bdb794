//! Tajweed use-case service.
//!
//! # Responsibility
//! - Provide the stable `parse` entry point for rendering callers.
//! - Consult the injected segment store before running the pipeline.
//!
//! # Invariants
//! - Service APIs never fail; every string yields a segment list.
//! - The service holds no global state; callers own the store instance.

use crate::cache::segment_cache::{
    CacheConfig, CacheConfigError, CacheStats, FifoSegmentCache, SegmentStore, SharedSegments,
};
use crate::color::legend::{legend, LegendEntry};
use crate::color::palette::{all_colors, color_for};
use crate::model::rule::{TajweedRule, Theme};
use crate::text::colorize;
use log::debug;
use std::sync::atomic::{AtomicU64, Ordering};

/// Use-case service wrapping segmentation, coloring and memoization.
pub struct TajweedService<S: SegmentStore> {
    store: S,
    computations: AtomicU64,
}

impl TajweedService<FifoSegmentCache> {
    /// Creates a service backed by a FIFO cache built from `config`.
    ///
    /// # Errors
    /// - Returns `CacheConfigError` when `config` is invalid.
    pub fn with_config(config: CacheConfig) -> Result<Self, CacheConfigError> {
        Ok(Self::new(FifoSegmentCache::new(config)?))
    }
}

impl Default for TajweedService<FifoSegmentCache> {
    fn default() -> Self {
        Self::new(FifoSegmentCache::default())
    }
}

impl<S: SegmentStore> TajweedService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self {
            store,
            computations: AtomicU64::new(0),
        }
    }

    /// Returns colorized segments for `text`.
    ///
    /// # Contract
    /// - Cached results are returned without recomputation.
    /// - Empty input returns an empty list and is not cached.
    /// - Joining every segment text yields `text`.
    pub fn parse(&self, text: &str, theme: Theme) -> SharedSegments {
        if text.is_empty() {
            return SharedSegments::from(Vec::new());
        }

        if let Some(cached) = self.store.get(text, theme) {
            debug!(
                "event=tajweed_parse module=service status=ok cache=hit theme={} bytes={} segments={}",
                theme.as_str(),
                text.len(),
                cached.len()
            );
            return cached;
        }

        let segments = SharedSegments::from(colorize(text, theme));
        self.computations.fetch_add(1, Ordering::Relaxed);
        self.store.insert(text, theme, segments.clone());
        debug!(
            "event=tajweed_parse module=service status=ok cache=miss theme={} bytes={} segments={}",
            theme.as_str(),
            text.len(),
            segments.len()
        );
        segments
    }

    /// `parse` keyed by the host's dark-mode flag.
    pub fn parse_for_mode(&self, text: &str, is_dark_mode: bool) -> SharedSegments {
        self.parse(text, Theme::from_dark_mode(is_dark_mode))
    }

    /// Drops every cached result.
    ///
    /// Required after any change to the rule or color tables.
    pub fn clear_cache(&self) {
        self.store.clear();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.store.stats()
    }

    /// Number of times the pipeline actually ran.
    pub fn computations(&self) -> u64 {
        self.computations.load(Ordering::Relaxed)
    }

    pub fn color_for(&self, rule: TajweedRule, theme: Theme) -> &'static str {
        color_for(rule, theme)
    }

    pub fn all_colors(&self, theme: Theme) -> Vec<(TajweedRule, &'static str)> {
        all_colors(theme)
    }

    pub fn legend(&self) -> Vec<LegendEntry> {
        legend()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
