#![forbid(unsafe_code)]

//! SizeKit public facade.
//!
//! Re-exports the types most applications need from the internal crates
//! and offers a prelude for day-to-day use:
//!
//! ```
//! use sizekit::prelude::*;
//!
//! let scope = BreakpointScope::new();
//! let padding = ScreenTypeBuilder::new(
//!     &scope,
//!     Responsive::new(Breakpoint::ExtraSmall, 8.0).at(Breakpoint::Large, 24.0),
//! );
//! assert_eq!(padding.value(&ScreenMetrics::new(1024.0, 768.0)), &24.0);
//! ```

// --- Core re-exports -------------------------------------------------------

pub use sizekit_core::event::{MeasurementChange, MeasurementEvent};
pub use sizekit_core::geometry::{Constraints, Orientation, ScreenMetrics, Size};

// --- Layout re-exports -----------------------------------------------------

pub use sizekit_layout::{
    Breakpoint, BreakpointTable, Category, ConfigError, GranularBreakpoint, GranularBreakpoints,
    OrientationResponsive, Resolution, Resolver, Responsive, ResponsiveConfig, Result, SizeGroup,
    StandardBreakpoints, ValueSlots, Visibility, select_orientation,
};

// --- Widget re-exports -----------------------------------------------------

pub use sizekit_widgets::{
    BreakpointScope, BreakpointTracker, BuildContext, BuilderId, GranularBuilder,
    LocalConstraints, Measure, MeasurementSource, OrientationBuilder, ResponsiveBuilder,
    ScreenState, ScreenTypeBuilder,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Breakpoint, BreakpointScope, BuildContext, Category, ConfigError, GranularBreakpoint,
        MeasurementEvent, MeasurementSource, Orientation, OrientationBuilder,
        OrientationResponsive, Responsive, ResponsiveConfig, Result, ScreenMetrics, ScreenState,
        ScreenTypeBuilder, Size, ValueSlots,
    };

    pub use crate::{core, layout, widgets};
}

pub use sizekit_core as core;
pub use sizekit_layout as layout;
pub use sizekit_widgets as widgets;
