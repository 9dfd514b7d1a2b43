// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that the presentation layer
//! implements. These traits use only domain types, ensuring the application
//! layer remains independent of concrete widget toolkits.
//!
//! # Available Ports
//!
//! - [`surface`]: Card grid, viewer and prefetch requests
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles)
//! - No `async fn` - asynchronous work is scheduled by the caller with
//!   Iced's `Task` type
//!
//! # Example
//!
//! ```ignore
//! use iced_gallery::application::port::{Surface, ViewerFrame};
//! use iced_gallery::domain::gallery::{AssetRef, VisibleSet};
//!
//! struct Headless;
//!
//! impl Surface for Headless {
//!     fn render_cards(&mut self, _visible: &VisibleSet) {}
//!     fn show_viewer(&mut self, _frame: ViewerFrame) {}
//!     fn hide_viewer(&mut self) {}
//!     fn prefetch(&mut self, _asset: &AssetRef) {}
//! }
//! ```

pub mod surface;

pub use surface::{Surface, ViewerFrame};
