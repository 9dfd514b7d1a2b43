// SPDX-License-Identifier: MPL-2.0
//! Input mapping: grid and viewer keyboard shortcuts and touch swipes.
//!
//! Raw toolkit events are translated into [`ViewerCommand`]s here so the
//! mapping can be tested without a window.

use crate::domain::gallery::SwipeThreshold;

/// Direction of a viewer navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Navigate to the previous visible item.
    Previous,
    /// Navigate to the next visible item.
    Next,
}

impl Direction {
    /// Step offset passed to the controller.
    #[must_use]
    pub fn offset(self) -> i64 {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

/// Keys the viewer reacts to while it is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

/// Keys the grid reacts to while the viewer is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridKey {
    /// Move the keyboard focus to the next visible card.
    FocusNext,
    /// Move the keyboard focus to the previous visible card.
    FocusPrevious,
    /// Open the focused card.
    Activate,
}

impl GridKey {
    /// Focus offset within the visible set; `None` for activation.
    #[must_use]
    pub fn focus_offset(self) -> Option<i64> {
        match self {
            Self::FocusNext => Some(1),
            Self::FocusPrevious => Some(-1),
            Self::Activate => None,
        }
    }
}

/// Command produced by viewer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerCommand {
    /// Close the viewer.
    Close,
    /// Move through the visible set.
    Navigate(Direction),
}

impl From<ViewerKey> for ViewerCommand {
    fn from(key: ViewerKey) -> Self {
        match key {
            ViewerKey::Escape => Self::Close,
            ViewerKey::ArrowLeft => Self::Navigate(Direction::Previous),
            ViewerKey::ArrowRight => Self::Navigate(Direction::Next),
        }
    }
}

/// Identifier of a touch point, as reported by the toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FingerId(pub u64);

/// Tracks one finger from touch-down to touch-up and turns a long enough
/// horizontal movement into a navigation direction.
///
/// Only the first finger down is tracked; other fingers are ignored until it
/// is lifted or cancelled.
///
/// The tracker also decides whether a release on the viewer backdrop closes
/// the viewer. A finger lift reaches both the backdrop and the tracker, in
/// either order, and only a lift that did not swipe may close.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    threshold: SwipeThreshold,
    active: Option<(FingerId, f32)>,
    backdrop: BackdropRelease,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum BackdropRelease {
    #[default]
    Idle,
    /// Released while the finger was still tracked; the lift decides.
    Pending,
    /// The last lift swiped; its backdrop release is swallowed.
    AfterSwipe,
    /// The lift was a tap on the backdrop.
    CloseDeferred,
}

impl SwipeTracker {
    #[must_use]
    pub fn new(threshold: SwipeThreshold) -> Self {
        Self {
            threshold,
            active: None,
            backdrop: BackdropRelease::Idle,
        }
    }

    #[must_use]
    pub fn threshold(&self) -> SwipeThreshold {
        self.threshold
    }

    pub fn set_threshold(&mut self, threshold: SwipeThreshold) {
        self.threshold = threshold;
    }

    /// Returns `true` while a finger is being tracked.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.active.is_some()
    }

    /// Records a finger touching down at horizontal position `x`.
    pub fn begin(&mut self, finger: FingerId, x: f32) {
        if self.active.is_none() {
            self.active = Some((finger, x));
            self.backdrop = BackdropRelease::Idle;
        }
    }

    /// Records a finger lifting at horizontal position `x`.
    ///
    /// Returns the navigation direction when the displacement strictly
    /// exceeds the threshold: moving right goes to the previous item,
    /// moving left to the next one.
    pub fn end(&mut self, finger: FingerId, x: f32) -> Option<Direction> {
        let (tracked, start_x) = self.active?;
        if tracked != finger {
            return None;
        }
        self.active = None;
        let direction = classify(x - start_x, self.threshold);
        self.backdrop = match (self.backdrop, direction) {
            (BackdropRelease::Pending, None) => BackdropRelease::CloseDeferred,
            (BackdropRelease::Pending, Some(_)) => BackdropRelease::Idle,
            (_, Some(_)) => BackdropRelease::AfterSwipe,
            (_, None) => BackdropRelease::Idle,
        };
        direction
    }

    /// Forgets a finger whose gesture was interrupted.
    pub fn cancel(&mut self, finger: FingerId) {
        if matches!(self.active, Some((tracked, _)) if tracked == finger) {
            self.active = None;
            self.backdrop = BackdropRelease::Idle;
        }
    }

    /// Drops any tracked finger and pending backdrop release.
    ///
    /// Finger events stop arriving once the viewer is closed, so a finger
    /// still down at that point would otherwise block every later swipe.
    pub fn reset(&mut self) {
        self.active = None;
        self.backdrop = BackdropRelease::Idle;
    }

    /// Records a press released on the viewer backdrop.
    ///
    /// Returns `true` when the viewer should close right away. While a finger
    /// is tracked the decision waits for its lift; see
    /// [`take_deferred_close`](Self::take_deferred_close).
    pub fn backdrop_released(&mut self) -> bool {
        if self.active.is_some() {
            self.backdrop = BackdropRelease::Pending;
            return false;
        }
        let previous = std::mem::take(&mut self.backdrop);
        previous != BackdropRelease::AfterSwipe
    }

    /// Returns `true` once when a tap on the backdrop finished after its
    /// release was seen.
    pub fn take_deferred_close(&mut self) -> bool {
        if self.backdrop == BackdropRelease::CloseDeferred {
            self.backdrop = BackdropRelease::Idle;
            true
        } else {
            false
        }
    }
}

/// Maps a horizontal displacement (end minus start) to a direction.
#[must_use]
pub fn classify(displacement: f32, threshold: SwipeThreshold) -> Option<Direction> {
    if displacement > threshold.value() {
        Some(Direction::Previous)
    } else if -displacement > threshold.value() {
        Some(Direction::Next)
    } else {
        None
    }
}
