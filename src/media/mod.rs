// SPDX-License-Identifier: MPL-2.0
//! Gallery asset handling.
//!
//! This module fetches gallery images, validates them and keeps recently
//! used full-resolution assets in memory.

pub mod fetch;
pub mod image;
pub mod prefetch;

// Re-export commonly used types
pub use fetch::{fetch_asset, AssetFetcher, AssetSource, FetchedAsset};
pub use image::AssetImage;
pub use prefetch::{AssetCache, PrefetchConfig, PrefetchStats};
