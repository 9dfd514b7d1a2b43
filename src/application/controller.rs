// SPDX-License-Identifier: MPL-2.0
//! Gallery controller: filter state, visible set and lightbox navigation.
//!
//! The controller is the single owner of gallery state. Each operation runs
//! to completion and reports its side effects to the [`Surface`] it owns;
//! nothing is read back from the surface.
//!
//! # State machine
//!
//! ```text
//!            open(i)               step(k) / open(j)
//! Closed ─────────────▶ Open(i) ───────────────────▶ Open(j)
//!   ▲                      │
//!   └────── close() ───────┘
//! ```
//!
//! Invalid requests (unknown index, empty visible set, navigating while
//! closed) are silent no-ops.

use crate::application::input::{ViewerCommand, ViewerKey};
use crate::application::port::{Surface, ViewerFrame};
use crate::domain::gallery::{CategoryFilter, FullResolution, Item, ItemIndex, VisibleSet};

/// Lightbox navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationState {
    /// The viewer is hidden.
    #[default]
    Closed,
    /// The viewer shows the given item.
    Open(ItemIndex),
}

impl NavigationState {
    /// Index of the displayed item, if the viewer is open.
    #[must_use]
    pub fn current(self) -> Option<ItemIndex> {
        match self {
            Self::Closed => None,
            Self::Open(index) => Some(index),
        }
    }
}

/// Position of the displayed item within the visible set, for counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerPosition {
    /// Zero-based position in the visible set.
    pub position: usize,
    /// Number of visible items.
    pub total: usize,
}

/// Owns the gallery items, the active filter and the lightbox state.
#[derive(Debug)]
pub struct GalleryController<S: Surface> {
    items: Vec<Item>,
    filter: CategoryFilter,
    visible: VisibleSet,
    navigation: NavigationState,
    full_resolution: FullResolution,
    surface: S,
}

impl<S: Surface> GalleryController<S> {
    /// Creates a controller showing every item, with the viewer closed.
    ///
    /// Item indices are expected to be unique; lookups return the first match.
    pub fn new(items: Vec<Item>, surface: S) -> Self {
        Self::with_full_resolution(items, surface, FullResolution::default())
    }

    /// Creates a controller that requests `full_resolution` assets.
    pub fn with_full_resolution(
        items: Vec<Item>,
        mut surface: S,
        full_resolution: FullResolution,
    ) -> Self {
        let filter = CategoryFilter::All;
        let visible = VisibleSet::compute(&items, &filter);
        surface.render_cards(&visible);
        Self {
            items,
            filter,
            visible,
            navigation: NavigationState::Closed,
            full_resolution,
            surface,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn item(&self, index: ItemIndex) -> Option<&Item> {
        self.items.iter().find(|item| item.index() == index)
    }

    #[must_use]
    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    #[must_use]
    pub fn visible(&self) -> &VisibleSet {
        &self.visible
    }

    #[must_use]
    pub fn navigation(&self) -> NavigationState {
        self.navigation
    }

    #[must_use]
    pub fn current(&self) -> Option<ItemIndex> {
        self.navigation.current()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.navigation, NavigationState::Open(_))
    }

    #[must_use]
    pub fn full_resolution(&self) -> FullResolution {
        self.full_resolution
    }

    /// Position of the displayed item in the visible set.
    ///
    /// `None` when the viewer is closed or shows an item hidden by the filter.
    #[must_use]
    pub fn viewer_position(&self) -> Option<ViewerPosition> {
        let current = self.current()?;
        let position = self.visible.position_of(current)?;
        Some(ViewerPosition {
            position,
            total: self.visible.len(),
        })
    }

    /// Visible item `offset` positions away from `from`, wrapping around.
    ///
    /// A missing or hidden `from` counts as sitting just before the first
    /// visible item, as in [`step`](Self::step).
    #[must_use]
    pub fn visible_neighbor(&self, from: Option<ItemIndex>, offset: i64) -> Option<ItemIndex> {
        let position = from.and_then(|index| self.visible.position_of(index));
        self.visible
            .wrapped_position(position, offset)
            .and_then(|pos| self.visible.get(pos))
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Activates `filter` and re-renders the cards.
    ///
    /// The lightbox state is left untouched, even if the displayed item is
    /// now hidden.
    pub fn apply_filter(&mut self, filter: CategoryFilter) {
        self.visible = VisibleSet::compute(&self.items, &filter);
        self.filter = filter;
        self.surface.render_cards(&self.visible);
    }

    /// Opens the viewer on `index`.
    ///
    /// Any existing item can be opened, including one hidden by the filter.
    /// Returns `false` (and changes nothing) if no item has that index.
    pub fn open(&mut self, index: ItemIndex) -> bool {
        let Some(item) = self.item(index) else {
            return false;
        };
        let frame = ViewerFrame {
            index,
            asset: item.full_resolution_asset(self.full_resolution),
            caption: item.caption().to_string(),
            alt: item.alt().to_string(),
        };

        self.navigation = NavigationState::Open(index);
        self.surface.show_viewer(frame);
        self.preload_neighbors();
        true
    }

    /// Closes the viewer.
    pub fn close(&mut self) {
        self.navigation = NavigationState::Closed;
        self.surface.hide_viewer();
    }

    /// Moves `offset` positions through the visible set, wrapping around.
    ///
    /// No-op while closed or when nothing is visible. An item opened while
    /// hidden by the filter counts as sitting just before the first visible
    /// item. Returns the newly displayed index.
    pub fn step(&mut self, offset: i64) -> Option<ItemIndex> {
        let current = self.current()?;
        let target = self.visible_neighbor(Some(current), offset)?;
        self.open(target).then_some(target)
    }

    /// Requests prefetch of the previous, current and next full-resolution
    /// assets around the displayed item.
    ///
    /// Does nothing while closed or when the displayed item is not visible.
    pub fn preload_neighbors(&mut self) {
        let Some(position) = self
            .current()
            .and_then(|current| self.visible.position_of(current))
        else {
            return;
        };

        for index in self.visible.neighbors(position) {
            if let Some(item) = self.items.iter().find(|item| item.index() == index) {
                let asset = item.full_resolution_asset(self.full_resolution);
                self.surface.prefetch(&asset);
            }
        }
    }

    /// Applies a viewer command.
    pub fn dispatch(&mut self, command: ViewerCommand) {
        match command {
            ViewerCommand::Close => self.close(),
            ViewerCommand::Navigate(direction) => {
                self.step(direction.offset());
            }
        }
    }

    /// Handles a global key press; keys are ignored while the viewer is closed.
    ///
    /// Returns `true` if the key was consumed.
    pub fn handle_key(&mut self, key: ViewerKey) -> bool {
        if !self.is_open() {
            return false;
        }
        self.dispatch(ViewerCommand::from(key));
        true
    }
}
