#![forbid(unsafe_code)]

//! Measurement change notifications.
//!
//! Platforms and containers report size changes as [`MeasurementEvent`]s.
//! Events are applied one at a time, in arrival order; nothing here
//! coalesces or debounces them, so a burst of resizes yields the same
//! number of re-resolutions downstream.

use crate::geometry::{Constraints, Orientation, ScreenMetrics, Size, sanitize_ratio};

/// A change to a measurement source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasurementEvent {
    /// The display was resized.
    Resize {
        /// New logical width.
        width: f64,
        /// New logical height.
        height: f64,
    },

    /// The device pixel ratio changed (e.g. window moved between monitors).
    DevicePixelRatio(f64),

    /// The device rotated.
    ///
    /// Swaps the logical axes if the current size does not already have
    /// the reported orientation.
    Rotate(Orientation),

    /// A container re-ran layout and offers new local constraints.
    Constraints(Constraints),
}

/// What an applied event actually changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeasurementChange {
    /// The logical size differs from before.
    pub size_changed: bool,
    /// The orientation differs from before.
    pub orientation_changed: bool,
    /// The device pixel ratio differs from before.
    pub ratio_changed: bool,
}

impl MeasurementChange {
    /// Whether anything changed at all.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.size_changed || self.orientation_changed || self.ratio_changed
    }
}

impl ScreenMetrics {
    /// Apply a display event, returning what changed.
    ///
    /// [`MeasurementEvent::Constraints`] describes local space and leaves
    /// display metrics untouched.
    pub fn apply(&mut self, event: MeasurementEvent) -> MeasurementChange {
        let before = *self;
        match event {
            MeasurementEvent::Resize { width, height } => {
                self.logical = Size::new(width.max(0.0), height.max(0.0));
            }
            MeasurementEvent::DevicePixelRatio(ratio) => {
                self.device_pixel_ratio = sanitize_ratio(ratio);
            }
            MeasurementEvent::Rotate(orientation) => {
                if self.logical.orientation() != orientation {
                    self.logical = self.logical.flipped();
                }
            }
            MeasurementEvent::Constraints(_) => {}
        }
        MeasurementChange {
            size_changed: before.logical != self.logical,
            orientation_changed: before.orientation() != self.orientation(),
            ratio_changed: before.device_pixel_ratio != self.device_pixel_ratio,
        }
    }
}
