#![forbid(unsafe_code)]

//! Core: geometry and measurement events.
//!
//! # Role in SizeKit
//! `sizekit-core` is the measurement layer. It owns the size and metrics
//! types that every breakpoint decision starts from, and the events a
//! platform or container emits when those measurements change.
//!
//! # How it fits in the system
//! `sizekit-layout` classifies a scalar taken from a [`geometry::Size`] into
//! a breakpoint category. `sizekit-widgets` applies
//! [`event::MeasurementEvent`]s to its measurement sources and re-runs
//! resolution after each one.

pub mod event;
pub mod geometry;
