// SPDX-License-Identifier: MPL-2.0
//! Gallery item value objects.
//!
//! An [`Item`] is created once when the gallery is loaded and never changes
//! afterwards. Its [`ItemIndex`] is the stable identifier used everywhere
//! (filtering, navigation, card activation), independent of the item's
//! position inside any filtered view.

use super::newtypes::FullResolution;
use std::fmt;

// =============================================================================
// ItemIndex
// =============================================================================

/// Stable identifier of a gallery item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemIndex(u32);

impl ItemIndex {
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ItemIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ItemIndex {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

// =============================================================================
// Category
// =============================================================================

/// Category label attached to an item (e.g. `nature`, `city`).
///
/// Comparison is exact: filtering on `"Nature"` does not match `"nature"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category(String);

impl Category {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

// =============================================================================
// AssetRef
// =============================================================================

/// Opaque reference to a displayable asset (URL or filesystem path).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetRef(String);

impl AssetRef {
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derives the full-resolution variant of this reference.
    ///
    /// A trailing `/<width>/<height>` segment (both all digits) is replaced by
    /// the requested size. References without such a suffix are returned
    /// unchanged; nothing is validated over the network.
    #[must_use]
    pub fn full_resolution(&self, size: FullResolution) -> AssetRef {
        match strip_size_suffix(&self.0) {
            Some(prefix) => AssetRef(format!("{prefix}/{}/{}", size.width(), size.height())),
            None => self.clone(),
        }
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetRef {
    fn from(reference: &str) -> Self {
        Self::new(reference)
    }
}

/// Returns the part of `reference` before a trailing `/<digits>/<digits>`.
fn strip_size_suffix(reference: &str) -> Option<&str> {
    let is_number = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

    let (rest, height) = reference.rsplit_once('/')?;
    let (prefix, width) = rest.rsplit_once('/')?;
    (is_number(width) && is_number(height)).then_some(prefix)
}

// =============================================================================
// Item
// =============================================================================

/// One gallery entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    index: ItemIndex,
    category: Category,
    asset: AssetRef,
    alt: String,
    caption: String,
}

impl Item {
    /// Creates an item; the caption is derived from category and index.
    #[must_use]
    pub fn new(index: ItemIndex, category: Category, asset: AssetRef) -> Self {
        let caption = format!("{category} \u{2022} Image {index}");
        Self {
            index,
            category,
            asset,
            alt: String::new(),
            caption,
        }
    }

    /// Sets the alternative text shown when the asset is unavailable.
    #[must_use]
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }

    #[must_use]
    pub fn index(&self) -> ItemIndex {
        self.index
    }

    #[must_use]
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Default (thumbnail) asset reference.
    #[must_use]
    pub fn asset(&self) -> &AssetRef {
        &self.asset
    }

    #[must_use]
    pub fn alt(&self) -> &str {
        &self.alt
    }

    #[must_use]
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Full-resolution asset reference used by the viewer and the prefetcher.
    #[must_use]
    pub fn full_resolution_asset(&self, size: FullResolution) -> AssetRef {
        self.asset.full_resolution(size)
    }
}
