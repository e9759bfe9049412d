#![forbid(unsafe_code)]

//! Breakpoint classification and responsive value resolution.
//!
//! # Role in SizeKit
//! `sizekit-layout` turns a measurement into a decision. A
//! [`BreakpointTable`] classifies logical pixels into a [`Category`]; a
//! [`Responsive`] value map answers which value applies at that category,
//! falling back to the nearest smaller category and then the nearest
//! larger one when the category itself has no value. [`Resolver`] couples
//! the two, and [`OrientationResponsive`] adds a portrait/landscape split.
//!
//! # How it fits in the system
//! Builders in `sizekit-widgets` read a measurement from a source, call a
//! [`Resolver`], and pass the result to a render callback. Nothing here
//! knows about sources or callbacks.

pub mod category;
pub mod config;
pub mod error;
pub mod orientation;
pub mod resolver;
pub mod responsive;
pub mod table;
pub mod visibility;

pub use category::{Breakpoint, Category, GranularBreakpoint, SizeGroup};
pub use config::{GranularBreakpoints, ResponsiveConfig, StandardBreakpoints};
pub use error::{ConfigError, Result};
pub use orientation::{OrientationResponsive, select_orientation};
pub use resolver::{Resolution, Resolver};
pub use responsive::{Responsive, ValueSlots};
pub use sizekit_core::geometry::{Orientation, Size};
pub use table::{BreakpointTable, SENTINEL};
pub use visibility::Visibility;
