// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! Viewer tuning bounds (swipe threshold, full-resolution size) and the
//! diagnostics buffer bounds live with their domain newtypes; this module
//! re-exports them next to the prefetch cache limits so the config layer has
//! a single place to look.
//!
//! # Categories
//!
//! - **Viewer**: Swipe threshold and full-resolution size
//! - **Prefetch**: Asset cache limits
//! - **Diagnostics**: Event buffer capacity
//! - **Fetch**: Network limits

use crate::domain::diagnostics::buffer_capacity_bounds;
use crate::domain::gallery::newtypes::{full_resolution_bounds, swipe_bounds};

// ==========================================================================
// Viewer Defaults
// ==========================================================================

/// Default swipe threshold in logical pixels.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = swipe_bounds::DEFAULT;

/// Minimum swipe threshold.
pub const MIN_SWIPE_THRESHOLD: f32 = swipe_bounds::MIN;

/// Maximum swipe threshold.
pub const MAX_SWIPE_THRESHOLD: f32 = swipe_bounds::MAX;

/// Default full-resolution edge length in pixels.
pub const DEFAULT_FULL_RESOLUTION: u32 = full_resolution_bounds::DEFAULT;

// ==========================================================================
// Prefetch Defaults
// ==========================================================================

/// Default maximum number of assets kept in the cache.
pub const DEFAULT_PREFETCH_MAX_IMAGES: usize = 16;

/// Minimum cache entry count.
pub const MIN_PREFETCH_MAX_IMAGES: usize = 4;

/// Maximum cache entry count.
pub const MAX_PREFETCH_MAX_IMAGES: usize = 64;

/// Default cache budget in megabytes (decoded RGBA size).
pub const DEFAULT_PREFETCH_MAX_MB: u32 = 64;

/// Minimum cache budget in megabytes.
pub const MIN_PREFETCH_MAX_MB: u32 = 8;

/// Maximum cache budget in megabytes.
pub const MAX_PREFETCH_MAX_MB: u32 = 512;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER: usize = buffer_capacity_bounds::DEFAULT;

// ==========================================================================
// Fetch Defaults
// ==========================================================================

/// Largest response body accepted for a single asset (32 MiB).
pub const MAX_ASSET_BYTES: u64 = 32 * 1024 * 1024;

/// Request timeout for remote assets, in seconds.
pub const FETCH_TIMEOUT_SECS: u64 = 30;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SWIPE_THRESHOLD > 0.0);
    assert!(DEFAULT_SWIPE_THRESHOLD >= MIN_SWIPE_THRESHOLD);
    assert!(DEFAULT_SWIPE_THRESHOLD <= MAX_SWIPE_THRESHOLD);

    assert!(DEFAULT_FULL_RESOLUTION >= full_resolution_bounds::MIN);
    assert!(DEFAULT_FULL_RESOLUTION <= full_resolution_bounds::MAX);

    assert!(MIN_PREFETCH_MAX_IMAGES > 0);
    assert!(MAX_PREFETCH_MAX_IMAGES >= MIN_PREFETCH_MAX_IMAGES);
    assert!(DEFAULT_PREFETCH_MAX_IMAGES >= MIN_PREFETCH_MAX_IMAGES);
    assert!(DEFAULT_PREFETCH_MAX_IMAGES <= MAX_PREFETCH_MAX_IMAGES);

    assert!(MIN_PREFETCH_MAX_MB > 0);
    assert!(MAX_PREFETCH_MAX_MB >= MIN_PREFETCH_MAX_MB);
    assert!(DEFAULT_PREFETCH_MAX_MB >= MIN_PREFETCH_MAX_MB);
    assert!(DEFAULT_PREFETCH_MAX_MB <= MAX_PREFETCH_MAX_MB);

    assert!(MAX_ASSET_BYTES > 0);
    assert!(FETCH_TIMEOUT_SECS > 0);
};
