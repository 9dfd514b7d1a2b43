// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`gallery`]: Gallery types ([`Item`](gallery::Item),
//!   [`CategoryFilter`](gallery::CategoryFilter), [`VisibleSet`](gallery::VisibleSet))

pub mod diagnostics;
pub mod gallery;
