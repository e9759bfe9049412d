#![forbid(unsafe_code)]

//! Responsive builders for SizeKit.
//!
//! A [`BreakpointScope`] carries the breakpoint tables from the root of an
//! application down to every builder. Builders measure a
//! [`MeasurementSource`] (the display or a container's local space),
//! resolve a value for the current category, and pass it to a callback
//! together with a [`BuildContext`].

pub mod builder;
pub mod scope;
pub mod source;
pub mod tracker;

pub use builder::{
    BuildContext, GranularBuilder, OrientationBuilder, ResponsiveBuilder, ScreenTypeBuilder,
};
pub use scope::{BreakpointScope, Measure, ScopedCategory};
pub use source::{LocalConstraints, MeasurementSource, ScreenState};
pub use tracker::{BreakpointTracker, BuilderId, TransitionStats};
