//! Segment cache contracts and bounded FIFO implementation.
//!
//! # Responsibility
//! - Memoize full parse results per `(text, theme)`.
//! - Bound memory with a fixed entry capacity.
//!
//! # Invariants
//! - `len() <= capacity()` after every operation.
//! - Overflow evicts the earliest-inserted entry; reads never refresh an
//!   entry's position (FIFO, not LRU).
//! - Keys are exact strings; no normalization is applied.
//! - No operation panics, including on a poisoned lock.

use crate::model::rule::Theme;
use crate::model::segment::Segment;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Default number of cached `(text, theme)` entries.
pub const DEFAULT_CACHE_CAPACITY: usize = 200;

/// Shared, immutable parse result.
pub type SharedSegments = Arc<[Segment]>;

/// Cache configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of entries across both themes.
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl CacheConfig {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Validates configuration before a cache is built from it.
    ///
    /// # Errors
    /// - `ZeroCapacity` when `capacity == 0`.
    pub fn validate(&self) -> Result<(), CacheConfigError> {
        if self.capacity == 0 {
            return Err(CacheConfigError::ZeroCapacity);
        }
        Ok(())
    }
}

/// Cache configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheConfigError {
    ZeroCapacity,
}

impl Display for CacheConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "segment cache capacity must be greater than zero"),
        }
    }
}

impl Error for CacheConfigError {}

/// Point-in-time cache counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: usize,
    pub capacity: usize,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

/// Storage contract for memoized parse results.
///
/// Methods take `&self`; implementations serialize mutation internally so a
/// store can be shared across threads behind the service.
pub trait SegmentStore {
    /// Returns the cached result and records a hit or miss.
    fn get(&self, text: &str, theme: Theme) -> Option<SharedSegments>;
    /// Whether an entry exists; does not touch hit/miss counters.
    fn contains(&self, text: &str, theme: Theme) -> bool;
    fn insert(&self, text: &str, theme: Theme, segments: SharedSegments);
    fn clear(&self);
    fn len(&self) -> usize;
    fn capacity(&self) -> usize;
    fn stats(&self) -> CacheStats;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Default)]
struct CacheState {
    /// One partition per theme, indexed by `theme_slot`.
    partitions: [HashMap<String, SharedSegments>; 2],
    insertion_order: VecDeque<(Theme, String)>,
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl CacheState {
    fn partition(&self, theme: Theme) -> &HashMap<String, SharedSegments> {
        &self.partitions[theme_slot(theme)]
    }

    fn partition_mut(&mut self, theme: Theme) -> &mut HashMap<String, SharedSegments> {
        &mut self.partitions[theme_slot(theme)]
    }

    fn len(&self) -> usize {
        self.insertion_order.len()
    }
}

/// Bounded cache evicting in insertion order.
pub struct FifoSegmentCache {
    capacity: usize,
    state: Mutex<CacheState>,
}

impl FifoSegmentCache {
    /// Builds a cache from validated configuration.
    ///
    /// # Errors
    /// - Returns `CacheConfigError` when `config` is invalid.
    pub fn new(config: CacheConfig) -> Result<Self, CacheConfigError> {
        config.validate()?;
        info!(
            "event=cache_init module=cache status=ok capacity={}",
            config.capacity
        );
        Ok(Self {
            capacity: config.capacity,
            state: Mutex::new(CacheState::default()),
        })
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        // Entries are written whole; a poisoned map is still consistent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for FifoSegmentCache {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CACHE_CAPACITY,
            state: Mutex::new(CacheState::default()),
        }
    }
}

impl SegmentStore for FifoSegmentCache {
    fn get(&self, text: &str, theme: Theme) -> Option<SharedSegments> {
        let mut state = self.lock();
        let found = state.partition(theme).get(text).cloned();
        if found.is_some() {
            state.hits += 1;
        } else {
            state.misses += 1;
        }
        found
    }

    fn contains(&self, text: &str, theme: Theme) -> bool {
        self.lock().partition(theme).contains_key(text)
    }

    fn insert(&self, text: &str, theme: Theme, segments: SharedSegments) {
        let mut state = self.lock();
        if let Some(existing) = state.partition_mut(theme).get_mut(text) {
            *existing = segments;
            return;
        }

        while state.len() >= self.capacity {
            let Some((evicted_theme, evicted_text)) = state.insertion_order.pop_front() else {
                break;
            };
            state.partition_mut(evicted_theme).remove(&evicted_text);
            state.evictions += 1;
            debug!(
                "event=cache_evict module=cache status=ok theme={} bytes={} capacity={}",
                evicted_theme.as_str(),
                evicted_text.len(),
                self.capacity
            );
        }

        state
            .partition_mut(theme)
            .insert(text.to_string(), segments);
        state.insertion_order.push_back((theme, text.to_string()));
    }

    fn clear(&self) {
        let mut state = self.lock();
        let dropped = state.len();
        for partition in &mut state.partitions {
            partition.clear();
        }
        state.insertion_order.clear();
        info!(
            "event=cache_clear module=cache status=ok dropped={}",
            dropped
        );
    }

    fn len(&self) -> usize {
        self.lock().len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn stats(&self) -> CacheStats {
        let state = self.lock();
        CacheStats {
            entries: state.len(),
            capacity: self.capacity,
            hits: state.hits,
            misses: state.misses,
            evictions: state.evictions,
        }
    }
}

fn theme_slot(theme: Theme) -> usize {
    match theme {
        Theme::Light => 0,
        Theme::Dark => 1,
    }
}
