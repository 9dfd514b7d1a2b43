// SPDX-License-Identifier: MPL-2.0
//! Presentation surface port.
//!
//! The [`Surface`] trait is everything the gallery controller asks of the
//! host: which cards to show, what the viewer displays, and which assets to
//! warm up. The controller never reads anything back from it.

use crate::domain::gallery::{AssetRef, ItemIndex, VisibleSet};

/// Content the viewer should display for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerFrame {
    /// Item being displayed.
    pub index: ItemIndex,
    /// Full-resolution asset to display.
    pub asset: AssetRef,
    /// Caption text shown under the image.
    pub caption: String,
    /// Alternative text for the image.
    pub alt: String,
}

/// Rendering and prefetch capabilities of the host.
///
/// All methods are fire-and-forget: implementations must not fail and the
/// controller consumes no result.
pub trait Surface {
    /// Shows exactly the cards listed in `visible`, hiding every other card.
    fn render_cards(&mut self, visible: &VisibleSet);

    /// Opens (or updates) the viewer with the given frame.
    fn show_viewer(&mut self, frame: ViewerFrame);

    /// Hides the viewer and clears its displayed asset.
    fn hide_viewer(&mut self);

    /// Issues a best-effort background fetch of `asset`.
    fn prefetch(&mut self, asset: &AssetRef);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn render_cards(&mut self, visible: &VisibleSet) {
        (**self).render_cards(visible);
    }

    fn show_viewer(&mut self, frame: ViewerFrame) {
        (**self).show_viewer(frame);
    }

    fn hide_viewer(&mut self) {
        (**self).hide_viewer();
    }

    fn prefetch(&mut self, asset: &AssetRef) {
        (**self).prefetch(asset);
    }
}
