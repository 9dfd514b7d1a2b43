// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a filterable image gallery with a lightbox viewer, built
//! with the Iced GUI framework.
//!
//! The gallery logic lives in [`application::GalleryController`], which owns
//! the items, the active category filter and the lightbox navigation state and
//! reports everything it wants shown through the
//! [`application::port::Surface`] trait. The Iced shell in [`app`] implements
//! that surface, fetches and preloads images, and localizes the interface with
//! Fluent.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod application;
pub mod catalog;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod test_utils;
pub mod ui;
