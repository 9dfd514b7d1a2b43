// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! - [`Item`], [`ItemIndex`], [`Category`], [`AssetRef`]: gallery entries
//! - [`CategoryFilter`]: the active filter
//! - [`VisibleSet`]: items passing the filter, in original order
//! - [`SwipeThreshold`], [`FullResolution`]: validated tuning values

mod filter;
mod item;
pub mod newtypes;
mod visible;

pub use filter::{CategoryFilter, ALL_TOKEN};
pub use item::{AssetRef, Category, Item, ItemIndex};
pub use newtypes::{FullResolution, SwipeThreshold};
pub use visible::VisibleSet;
