// SPDX-License-Identifier: MPL-2.0
//! Asset cache for faster lightbox navigation.
//!
//! Full-resolution assets for the neighbors of the open item are fetched in
//! the background and kept here, so stepping through the viewer rarely waits
//! on the network.
//!
//! # Design
//!
//! - **LRU eviction**: Least recently used assets are evicted first
//! - **Memory-bounded**: Total decoded size limited by a configurable byte budget
//! - **Reference-keyed**: Assets indexed by their [`AssetRef`]
//! - **In-flight tracking**: An asset is requested at most once until it lands
//!
//! # Usage
//!
//! ```ignore
//! let mut cache = AssetCache::new(config);
//!
//! for asset in cache.assets_to_fetch(&wanted) {
//!     cache.mark_in_flight(asset.clone());
//!     // spawn fetch task...
//! }
//! ```

use crate::domain::gallery::AssetRef;
use crate::media::image::AssetImage;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;

/// Configuration for the asset cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefetchConfig {
    /// Maximum cache size in bytes (decoded RGBA).
    pub max_bytes: usize,

    /// Maximum number of assets to cache.
    pub max_images: usize,

    /// Whether caching is enabled.
    pub enabled: bool,
}

impl Default for PrefetchConfig {
    fn default() -> Self {
        use crate::app::config::{DEFAULT_PREFETCH_MAX_IMAGES, DEFAULT_PREFETCH_MAX_MB};
        Self {
            max_bytes: DEFAULT_PREFETCH_MAX_MB as usize * 1024 * 1024,
            max_images: DEFAULT_PREFETCH_MAX_IMAGES,
            enabled: true,
        }
    }
}

impl PrefetchConfig {
    /// Creates a configuration, clamping the entry count to its valid range.
    #[must_use]
    pub fn new(max_bytes: usize, max_images: usize) -> Self {
        use crate::app::config::{MAX_PREFETCH_MAX_IMAGES, MIN_PREFETCH_MAX_IMAGES};
        Self {
            max_bytes,
            max_images: max_images.clamp(MIN_PREFETCH_MAX_IMAGES, MAX_PREFETCH_MAX_IMAGES),
            enabled: true,
        }
    }
}

/// Statistics about cache performance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrefetchStats {
    pub image_count: usize,
    pub total_bytes: usize,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub insertions: u64,
}

impl PrefetchStats {
    /// Returns the cache hit rate as a percentage (0.0 - 100.0).
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

/// LRU cache of fetched assets.
pub struct AssetCache {
    cache: LruCache<AssetRef, AssetImage>,
    in_flight: HashSet<AssetRef>,
    config: PrefetchConfig,
    current_bytes: usize,
    stats: PrefetchStats,
}

impl AssetCache {
    #[must_use]
    pub fn new(config: PrefetchConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_images).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            in_flight: HashSet::new(),
            config,
            current_bytes: 0,
            stats: PrefetchStats::default(),
        }
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(PrefetchConfig::default())
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Inserts a fetched asset.
    ///
    /// Returns `true` if the asset was cached, `false` if caching is disabled
    /// or the asset is larger than half the byte budget.
    pub fn insert(&mut self, asset: AssetRef, image: AssetImage) -> bool {
        self.in_flight.remove(&asset);
        if !self.config.enabled {
            return false;
        }

        let size = image.decoded_size();
        if size > self.config.max_bytes / 2 {
            return false;
        }

        if let Some(existing) = self.cache.pop(&asset) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.decoded_size());
        }

        while self.current_bytes + size > self.config.max_bytes && !self.cache.is_empty() {
            if let Some((_, evicted)) = self.cache.pop_lru() {
                self.current_bytes = self.current_bytes.saturating_sub(evicted.decoded_size());
                self.stats.evictions += 1;
            }
        }

        // `push` returns the entry displaced by the count limit, if any.
        if let Some((_, evicted)) = self.cache.push(asset, image) {
            self.current_bytes = self.current_bytes.saturating_sub(evicted.decoded_size());
            self.stats.evictions += 1;
        }
        self.current_bytes += size;
        self.stats.insertions += 1;
        self.stats.image_count = self.cache.len();
        self.stats.total_bytes = self.current_bytes;

        true
    }

    /// Looks up an asset, updating LRU order.
    pub fn get(&mut self, asset: &AssetRef) -> Option<AssetImage> {
        if !self.config.enabled {
            return None;
        }

        if let Some(image) = self.cache.get(asset) {
            self.stats.hits += 1;
            Some(image.clone())
        } else {
            self.stats.misses += 1;
            None
        }
    }

    #[must_use]
    pub fn contains(&self, asset: &AssetRef) -> bool {
        self.config.enabled && self.cache.contains(asset)
    }

    /// Returns the assets that are neither cached nor already being fetched,
    /// without duplicates.
    #[must_use]
    pub fn assets_to_fetch(&self, assets: &[AssetRef]) -> Vec<AssetRef> {
        if !self.config.enabled {
            return Vec::new();
        }

        let mut wanted: Vec<AssetRef> = Vec::new();
        for asset in assets {
            if !self.cache.contains(asset)
                && !self.in_flight.contains(asset)
                && !wanted.contains(asset)
            {
                wanted.push(asset.clone());
            }
        }
        wanted
    }

    /// Records that a fetch for `asset` has started.
    pub fn mark_in_flight(&mut self, asset: AssetRef) {
        self.in_flight.insert(asset);
    }

    /// Forgets an in-flight fetch that failed, so it can be retried.
    pub fn fetch_failed(&mut self, asset: &AssetRef) {
        self.in_flight.remove(asset);
    }

    #[must_use]
    pub fn is_in_flight(&self, asset: &AssetRef) -> bool {
        self.in_flight.contains(asset)
    }

    #[must_use]
    pub fn stats(&self) -> PrefetchStats {
        self.stats
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.current_bytes
    }
}

impl std::fmt::Debug for AssetCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetCache")
            .field("enabled", &self.config.enabled)
            .field("image_count", &self.cache.len())
            .field("in_flight", &self.in_flight.len())
            .field("memory_usage", &self.current_bytes)
            .field("max_bytes", &self.config.max_bytes)
            .field("max_images", &self.config.max_images)
            .field("stats", &self.stats)
            .finish()
    }
}
