// SPDX-License-Identifier: MPL-2.0
//! Retained presentation state fed by the gallery controller.
//!
//! [`GallerySurface`] records what the controller asked to show; the view
//! functions read it back on every frame. Prefetch requests are queued here
//! and drained by the application, which turns them into fetch tasks.

use crate::application::port::{Surface, ViewerFrame};
use crate::domain::gallery::{AssetRef, ItemIndex, VisibleSet};

#[derive(Debug, Clone, Default)]
pub struct GallerySurface {
    cards: Vec<ItemIndex>,
    viewer: Option<ViewerFrame>,
    pending_prefetch: Vec<AssetRef>,
}

impl GallerySurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards to lay out, in display order.
    #[must_use]
    pub fn visible_cards(&self) -> &[ItemIndex] {
        &self.cards
    }

    #[must_use]
    pub fn is_card_visible(&self, index: ItemIndex) -> bool {
        self.cards.contains(&index)
    }

    /// Frame shown by the lightbox, `None` while it is hidden.
    #[must_use]
    pub fn viewer(&self) -> Option<&ViewerFrame> {
        self.viewer.as_ref()
    }

    /// Returns and forgets the queued prefetch requests.
    pub fn take_prefetch_requests(&mut self) -> Vec<AssetRef> {
        std::mem::take(&mut self.pending_prefetch)
    }
}

impl Surface for GallerySurface {
    fn render_cards(&mut self, visible: &VisibleSet) {
        self.cards = visible.as_slice().to_vec();
    }

    fn show_viewer(&mut self, frame: ViewerFrame) {
        self.viewer = Some(frame);
    }

    fn hide_viewer(&mut self) {
        self.viewer = None;
    }

    fn prefetch(&mut self, asset: &AssetRef) {
        if !self.pending_prefetch.contains(asset) {
            self.pending_prefetch.push(asset.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::GalleryController;
    use crate::domain::gallery::{Category, CategoryFilter};
    use crate::test_utils::sample_items;

    #[test]
    fn controller_drives_card_list() {
        let items = sample_items(&["a", "b", "a"]);
        let mut controller = GalleryController::new(items, GallerySurface::new());
        assert_eq!(controller.surface().visible_cards().len(), 3);

        controller.apply_filter(CategoryFilter::Only(Category::new("a")));
        let surface = controller.surface();
        assert_eq!(
            surface.visible_cards(),
            &[ItemIndex::new(0), ItemIndex::new(2)]
        );
        assert!(!surface.is_card_visible(ItemIndex::new(1)));
    }

    #[test]
    fn open_queues_neighbor_prefetch_once() {
        let items = sample_items(&["a", "a", "a", "a"]);
        let mut controller = GalleryController::new(items, GallerySurface::new());
        controller.open(ItemIndex::new(1));

        let requests = controller.surface_mut().take_prefetch_requests();
        assert_eq!(requests.len(), 3);
        assert!(requests.iter().all(|a| a.as_str().ends_with("/1400/1400")));
        assert!(controller.surface_mut().take_prefetch_requests().is_empty());
    }

    #[test]
    fn duplicate_prefetch_requests_are_collapsed() {
        let mut surface = GallerySurface::new();
        let asset = AssetRef::new("https://picsum.photos/seed/x/1400/1400");
        surface.prefetch(&asset);
        surface.prefetch(&asset);
        assert_eq!(surface.take_prefetch_requests(), vec![asset]);
    }

    #[test]
    fn close_hides_viewer() {
        let items = sample_items(&["a", "b"]);
        let mut controller = GalleryController::new(items, GallerySurface::new());
        controller.open(ItemIndex::new(1));
        assert_eq!(
            controller.surface().viewer().map(|f| f.index),
            Some(ItemIndex::new(1))
        );
        controller.close();
        assert!(controller.surface().viewer().is_none());
    }
}
