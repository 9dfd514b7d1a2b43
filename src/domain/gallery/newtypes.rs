// SPDX-License-Identifier: MPL-2.0
//! Gallery newtypes.
//!
//! Type-safe wrappers for gallery tuning values, always within valid ranges.

// =============================================================================
// Swipe Threshold
// =============================================================================

/// Swipe threshold bounds (logical pixels).
pub mod swipe_bounds {
    /// Minimum horizontal displacement that may count as a swipe.
    pub const MIN: f32 = 10.0;
    /// Maximum configurable threshold.
    pub const MAX: f32 = 400.0;
    /// Default threshold.
    pub const DEFAULT: f32 = 40.0;
}

/// Horizontal displacement a touch must exceed to be treated as a swipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a new threshold, clamping to the valid range.
    ///
    /// Non-finite values fall back to the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Self(value.clamp(swipe_bounds::MIN, swipe_bounds::MAX))
        } else {
            Self::default()
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(swipe_bounds::DEFAULT)
    }
}

// =============================================================================
// Full Resolution
// =============================================================================

/// Full-resolution size bounds (pixels, per axis).
pub mod full_resolution_bounds {
    /// Minimum edge length.
    pub const MIN: u32 = 64;
    /// Maximum edge length.
    pub const MAX: u32 = 8192;
    /// Default edge length.
    pub const DEFAULT: u32 = 1400;
}

/// Size requested when deriving full-resolution asset references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullResolution {
    width: u32,
    height: u32,
}

impl FullResolution {
    /// Creates a new size, clamping each axis to the valid range.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let clamp = |v: u32| v.clamp(full_resolution_bounds::MIN, full_resolution_bounds::MAX);
        Self {
            width: clamp(width),
            height: clamp(height),
        }
    }

    #[must_use]
    pub fn width(self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> u32 {
        self.height
    }
}

impl Default for FullResolution {
    fn default() -> Self {
        Self {
            width: full_resolution_bounds::DEFAULT,
            height: full_resolution_bounds::DEFAULT,
        }
    }
}
