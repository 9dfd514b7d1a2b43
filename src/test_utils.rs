// SPDX-License-Identifier: MPL-2.0
//! Test utilities shared by unit tests, integration tests and benches.
//!
//! [`RecordingSurface`] is a headless [`Surface`] that keeps the latest
//! rendered state and a log of every call it received.

use crate::application::port::{Surface, ViewerFrame};
use crate::domain::gallery::{AssetRef, Category, Item, ItemIndex, VisibleSet};

/// One call received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    RenderCards(Vec<ItemIndex>),
    ShowViewer(ViewerFrame),
    HideViewer,
    Prefetch(AssetRef),
}

/// Headless surface recording everything the controller asks for.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    cards: Vec<ItemIndex>,
    viewer: Option<ViewerFrame>,
    prefetched: Vec<AssetRef>,
    calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    /// Cards currently shown.
    #[must_use]
    pub fn cards(&self) -> &[ItemIndex] {
        &self.cards
    }

    /// Frame currently displayed by the viewer, if open.
    #[must_use]
    pub fn viewer(&self) -> Option<&ViewerFrame> {
        self.viewer.as_ref()
    }

    /// Every asset ever requested for prefetch, in request order.
    #[must_use]
    pub fn prefetched(&self) -> &[AssetRef] {
        &self.prefetched
    }

    /// Full call log.
    #[must_use]
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    pub fn clear_log(&mut self) {
        self.calls.clear();
        self.prefetched.clear();
    }
}

impl Surface for RecordingSurface {
    fn render_cards(&mut self, visible: &VisibleSet) {
        self.cards = visible.as_slice().to_vec();
        self.calls.push(SurfaceCall::RenderCards(self.cards.clone()));
    }

    fn show_viewer(&mut self, frame: ViewerFrame) {
        self.viewer = Some(frame.clone());
        self.calls.push(SurfaceCall::ShowViewer(frame));
    }

    fn hide_viewer(&mut self) {
        self.viewer = None;
        self.calls.push(SurfaceCall::HideViewer);
    }

    fn prefetch(&mut self, asset: &AssetRef) {
        self.prefetched.push(asset.clone());
        self.calls.push(SurfaceCall::Prefetch(asset.clone()));
    }
}

/// Builds items `0..n` with the given categories and picsum-style assets.
#[must_use]
pub fn sample_items(categories: &[&str]) -> Vec<Item> {
    categories
        .iter()
        .zip(0_u32..)
        .map(|(category, i)| {
            Item::new(
                ItemIndex::new(i),
                Category::new(*category),
                AssetRef::new(format!("https://picsum.photos/seed/{i}/600/800")),
            )
        })
        .collect()
}
