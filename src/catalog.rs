// SPDX-License-Identifier: MPL-2.0
//! Gallery manifest loading.
//!
//! A manifest is a TOML file listing the gallery items:
//!
//! ```toml
//! title = "Masonry Gallery"
//!
//! [[item]]
//! index = 0
//! category = "nature"
//! src = "https://picsum.photos/seed/fern/600/800"
//! alt = "Fern in the rain"
//! ```
//!
//! `index` defaults to the position of the entry in the file. The category
//! `all` (any case) is reserved for the filter that shows every item. A
//! built-in demo manifest is embedded in the binary.

use crate::domain::gallery::{AssetRef, Category, Item, ItemIndex, ALL_TOKEN};
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "assets/demo/"]
struct DemoAsset;

const DEMO_MANIFEST: &str = "gallery.toml";

#[derive(Debug, Deserialize)]
struct ManifestFile {
    title: Option<String>,
    #[serde(default, rename = "item")]
    items: Vec<ManifestItem>,
}

#[derive(Debug, Deserialize)]
struct ManifestItem {
    index: Option<u32>,
    category: String,
    src: String,
    alt: Option<String>,
}

/// Items of one gallery, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    title: Option<String>,
    items: Vec<Item>,
    base_dir: Option<PathBuf>,
}

impl Catalog {
    /// Parses manifest text; relative asset paths resolve against `base_dir`.
    pub fn parse(content: &str, base_dir: Option<PathBuf>) -> Result<Self> {
        let manifest: ManifestFile =
            toml::from_str(content).map_err(|e| Error::Catalog(e.to_string()))?;

        let mut seen = HashSet::new();
        let mut items = Vec::with_capacity(manifest.items.len());

        for (position, entry) in (0_u32..).zip(manifest.items) {
            let index = entry.index.unwrap_or(position);
            if !seen.insert(index) {
                return Err(Error::Catalog(format!("duplicate item index {index}")));
            }
            if entry.category.trim().is_empty() {
                return Err(Error::Catalog(format!("item {index} has an empty category")));
            }
            if entry.category.trim().eq_ignore_ascii_case(ALL_TOKEN) {
                return Err(Error::Catalog(format!(
                    "item {index} uses the reserved category \"{ALL_TOKEN}\""
                )));
            }
            if entry.src.trim().is_empty() {
                return Err(Error::Catalog(format!("item {index} has an empty src")));
            }

            let mut item = Item::new(
                ItemIndex::new(index),
                Category::new(entry.category.trim()),
                AssetRef::new(entry.src.trim()),
            );
            if let Some(alt) = entry.alt {
                item = item.with_alt(alt);
            }
            items.push(item);
        }

        Ok(Self {
            title: manifest.title,
            items,
            base_dir,
        })
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Directory used to resolve relative asset paths.
    #[must_use]
    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    /// Distinct categories in order of first appearance.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = Vec::new();
        for item in &self.items {
            if !categories.contains(item.category()) {
                categories.push(item.category().clone());
            }
        }
        categories
    }
}

/// Loads a manifest file.
pub fn load_from_path(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)?;
    let base_dir = path.parent().map(Path::to_path_buf);
    Catalog::parse(&content, base_dir)
}

/// Loads the demo gallery bundled with the binary.
pub fn load_embedded() -> Result<Catalog> {
    let file = DemoAsset::get(DEMO_MANIFEST)
        .ok_or_else(|| Error::Catalog(format!("embedded {DEMO_MANIFEST} missing")))?;
    let content = String::from_utf8_lossy(file.data.as_ref());
    Catalog::parse(&content, None)
}
