// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`controller`]: The gallery controller (filter + lightbox state machine)
//! - [`input`]: Keyboard and swipe input mapping
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Presentation layer implements application layer ports
//! - Presentation layer drives the controller with translated input
//!
//! # Example
//!
//! ```ignore
//! use iced_gallery::application::controller::GalleryController;
//! use iced_gallery::domain::gallery::{CategoryFilter, ItemIndex};
//!
//! let mut gallery = GalleryController::new(items, surface);
//! gallery.apply_filter(CategoryFilter::from_token("nature"));
//! gallery.open(ItemIndex::new(0));
//! gallery.step(1);
//! ```

pub mod controller;
pub mod input;
pub mod port;

pub use controller::{GalleryController, NavigationState, ViewerPosition};
