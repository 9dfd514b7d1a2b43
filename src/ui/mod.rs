// SPDX-License-Identifier: MPL-2.0
//! User interface components and presentation state.
//!
//! Views follow the Elm-style "state down, messages up" pattern: each view
//! takes a borrowed `ViewContext` and emits its own `Message` type, which the
//! application maps into its top-level message.
//!
//! - [`gallery`] - Header, filter bar and wrapped card grid
//! - [`lightbox`] - Modal full-resolution viewer
//! - [`surface`] - Presentation state written by the gallery controller
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod gallery;
pub mod lightbox;
pub mod styles;
pub mod surface;

pub use surface::GallerySurface;
