#![forbid(unsafe_code)]

//! Measurement sources: where builders get the size they classify.
//!
//! - [`ScreenState`]: the global display, updated from platform events.
//! - [`LocalConstraints`]: the space a container offers a child during
//!   layout, paired with the display metrics for context.
//!
//! Both implement [`MeasurementSource`]. Builders read the source at build
//! time; they never cache a measurement between builds.

use sizekit_core::event::{MeasurementChange, MeasurementEvent};
use sizekit_core::geometry::{Constraints, Orientation, ScreenMetrics, Size};

use crate::scope::Measure;

/// Something a builder can measure.
pub trait MeasurementSource {
    /// The size to classify, in logical pixels.
    fn size(&self) -> Size;

    /// Display metrics passed through to render callbacks.
    fn metrics(&self) -> ScreenMetrics;

    /// The scalar a builder classifies under `measure`.
    fn measurement(&self, measure: Measure) -> f64 {
        measure.of(self.size())
    }

    /// Orientation used for portrait/landscape selection.
    ///
    /// Defaults to the display orientation, not the local size's.
    fn orientation(&self) -> Orientation {
        self.metrics().orientation()
    }
}

impl MeasurementSource for ScreenMetrics {
    fn size(&self) -> Size {
        self.logical
    }

    fn metrics(&self) -> ScreenMetrics {
        *self
    }
}

/// Global display state.
#[derive(Debug, Clone, Default)]
pub struct ScreenState {
    metrics: ScreenMetrics,
    /// Events applied since creation.
    events: u64,
}

impl ScreenState {
    /// Start from known metrics.
    #[must_use]
    pub fn new(metrics: ScreenMetrics) -> Self {
        Self { metrics, events: 0 }
    }

    /// Apply a platform event.
    ///
    /// Every call applies immediately; callers re-run their builders for
    /// each event that reports a change.
    pub fn apply(&mut self, event: MeasurementEvent) -> MeasurementChange {
        let change = self.metrics.apply(event);
        self.events += 1;
        #[cfg(feature = "tracing")]
        self.trace_change(change);
        change
    }

    #[cfg(feature = "tracing")]
    fn trace_change(&self, change: MeasurementChange) {
        if change.any() {
            tracing::debug!(
                message = "screen.changed",
                width = self.metrics.logical.width,
                height = self.metrics.logical.height,
                ratio = self.metrics.device_pixel_ratio,
                orientation_changed = change.orientation_changed
            );
        }
    }

    /// Current metrics.
    #[must_use]
    pub fn current(&self) -> ScreenMetrics {
        self.metrics
    }

    /// Number of events applied.
    #[must_use]
    pub fn events_applied(&self) -> u64 {
        self.events
    }
}

impl MeasurementSource for ScreenState {
    fn size(&self) -> Size {
        self.metrics.logical
    }

    fn metrics(&self) -> ScreenMetrics {
        self.metrics
    }
}

/// Local space offered by a container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalConstraints {
    /// The container's constraints.
    pub constraints: Constraints,
    /// Display metrics at the time of layout.
    pub screen: ScreenMetrics,
}

impl LocalConstraints {
    /// Pair container constraints with display metrics.
    #[must_use]
    pub const fn new(constraints: Constraints, screen: ScreenMetrics) -> Self {
        Self {
            constraints,
            screen,
        }
    }

    /// Apply a measurement event.
    ///
    /// Constraint events replace the local constraints; other events update
    /// the display metrics. Orientation is the display's, so a constraint
    /// event never reports an orientation change.
    pub fn apply(&mut self, event: MeasurementEvent) -> MeasurementChange {
        match event {
            MeasurementEvent::Constraints(constraints) => {
                let before = self.constraints;
                self.constraints = constraints;
                MeasurementChange {
                    size_changed: before != self.constraints,
                    orientation_changed: false,
                    ratio_changed: false,
                }
            }
            other => self.screen.apply(other),
        }
    }
}

impl MeasurementSource for LocalConstraints {
    fn size(&self) -> Size {
        self.constraints.biggest()
    }

    fn metrics(&self) -> ScreenMetrics {
        self.screen
    }

    fn measurement(&self, measure: Measure) -> f64 {
        measure.of_constraints(self.constraints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_state_counts_every_event() {
        let mut screen = ScreenState::new(ScreenMetrics::new(800.0, 600.0));
        for w in [801.0, 802.0, 802.0] {
            screen.apply(MeasurementEvent::Resize {
                width: w,
                height: 600.0,
            });
        }
        assert_eq!(screen.events_applied(), 3);
        assert_eq!(screen.size(), Size::new(802.0, 600.0));
    }

    #[test]
    fn screen_state_rotation() {
        let mut screen = ScreenState::new(ScreenMetrics::new(390.0, 844.0));
        assert_eq!(screen.orientation(), Orientation::Portrait);
        let change = screen.apply(MeasurementEvent::Rotate(Orientation::Landscape));
        assert!(change.orientation_changed);
        assert_eq!(screen.orientation(), Orientation::Landscape);
    }

    #[test]
    fn local_constraints_measure_container() {
        let local = LocalConstraints::new(
            Constraints::tight(320.0, 480.0),
            ScreenMetrics::new(1280.0, 800.0),
        );
        assert_eq!(local.size(), Size::new(320.0, 480.0));
        assert_eq!(local.metrics().logical, Size::new(1280.0, 800.0));
        // Orientation follows the display, not the container.
        assert_eq!(local.orientation(), Orientation::Landscape);
    }

    #[test]
    fn local_constraints_apply() {
        let mut local = LocalConstraints::new(
            Constraints::tight(320.0, 480.0),
            ScreenMetrics::new(1280.0, 800.0),
        );
        let change = local.apply(MeasurementEvent::Constraints(Constraints::tight(640.0, 480.0)));
        assert!(change.size_changed);
        // The container turned wider than tall; the display did not rotate.
        assert!(!change.orientation_changed);
        assert_eq!(local.orientation(), Orientation::Landscape);
        assert_eq!(local.size().width, 640.0);

        let change = local.apply(MeasurementEvent::DevicePixelRatio(2.0));
        assert!(change.ratio_changed);
        assert_eq!(local.size().width, 640.0);
    }

    #[test]
    fn local_constraints_rotation_follows_display() {
        let mut local = LocalConstraints::new(
            Constraints::tight(320.0, 480.0),
            ScreenMetrics::new(1280.0, 800.0),
        );
        let change = local.apply(MeasurementEvent::Rotate(Orientation::Portrait));
        assert!(change.orientation_changed);
        assert_eq!(local.orientation(), Orientation::Portrait);
        assert_eq!(local.size(), Size::new(320.0, 480.0));
    }

    #[test]
    fn local_constraints_measure_bounded_axes() {
        let scroll = LocalConstraints::new(
            Constraints::tight(1000.0, f64::INFINITY),
            ScreenMetrics::new(1280.0, 800.0),
        );
        assert_eq!(scroll.measurement(Measure::ShortestSide), 1000.0);
        assert_eq!(scroll.measurement(Measure::Width), 1000.0);
        let screen = ScreenMetrics::new(844.0, 390.0);
        assert_eq!(screen.measurement(Measure::ShortestSide), 390.0);
    }

    #[test]
    fn metrics_are_a_source() {
        let m = ScreenMetrics::new(500.0, 700.0);
        assert_eq!(m.size(), Size::new(500.0, 700.0));
        assert_eq!(MeasurementSource::metrics(&m), m);
    }
}
