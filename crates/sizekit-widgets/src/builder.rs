#![forbid(unsafe_code)]

//! Responsive builders.
//!
//! A builder owns a [`Resolver`] created from a [`BreakpointScope`] and, on
//! every build, runs the same pipeline:
//!
//! 1. read the size from a [`MeasurementSource`],
//! 2. reduce it to a scalar with the scope's [`Measure`],
//! 3. classify and resolve,
//! 4. hand a [`BuildContext`] and the resolved value to the caller.
//!
//! Nothing is cached between builds except the resolver's category memo,
//! so every measurement change is reflected on the next build.
//!
//! # Example
//!
//! ```
//! use sizekit_core::geometry::ScreenMetrics;
//! use sizekit_layout::{Breakpoint, Responsive};
//! use sizekit_widgets::{BreakpointScope, ScreenTypeBuilder};
//!
//! let scope = BreakpointScope::new();
//! let label = ScreenTypeBuilder::new(
//!     &scope,
//!     Responsive::new(Breakpoint::Large, "Desktop").at(Breakpoint::Small, "Mobile"),
//! );
//! let text = label.build(&ScreenMetrics::new(700.0, 900.0), |cx, v| {
//!     format!("{v} @ {}", cx.category)
//! });
//! assert_eq!(text, "Mobile @ medium");
//! ```

use std::sync::Arc;

use sizekit_core::geometry::{Orientation, ScreenMetrics, Size};
use sizekit_layout::{
    Breakpoint, BreakpointTable, Category, GranularBreakpoint, OrientationResponsive, Resolver,
    Responsive, Result, ValueSlots, Visibility,
};

use crate::scope::{BreakpointScope, Measure, ScopedCategory};
use crate::source::MeasurementSource;

/// Everything a render callback may need about the current build.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildContext<C: Category> {
    /// Display metrics of the source.
    pub metrics: ScreenMetrics,
    /// The measured size.
    pub size: Size,
    /// The scalar that was classified.
    pub measurement: f64,
    /// Category of the measurement.
    pub category: C,
    /// Lower bound of that category.
    pub threshold: f64,
    /// Orientation reported by the source.
    pub orientation: Orientation,
    /// Whether transitions should animate.
    pub animate: bool,
}

impl<C: Category> BuildContext<C> {
    /// Whether content with this visibility shows in the current category.
    #[must_use]
    pub fn is_visible(&self, visibility: Visibility<C>) -> bool {
        visibility.is_visible(self.category)
    }
}

// ---------------------------------------------------------------------------
// ResponsiveBuilder
// ---------------------------------------------------------------------------

/// Measurement → category → value → callback.
#[derive(Debug, Clone)]
pub struct ResponsiveBuilder<C: ScopedCategory, T> {
    resolver: Resolver<C, T>,
    measure: Measure,
    animate: bool,
}

/// Builder over the five standard screen types.
pub type ScreenTypeBuilder<T> = ResponsiveBuilder<Breakpoint, T>;

/// Builder over the thirteen granular categories.
pub type GranularBuilder<T> = ResponsiveBuilder<GranularBreakpoint, T>;

impl<C: ScopedCategory, T> ResponsiveBuilder<C, T> {
    /// Create a builder that shares the scope's table.
    #[must_use]
    pub fn new(scope: &BreakpointScope, values: Responsive<C, T>) -> Self {
        Self {
            resolver: Resolver::new(Arc::clone(scope.table::<C>()), values),
            measure: scope.measure(),
            animate: scope.animate(),
        }
    }

    /// Create a builder from sparse values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyValues`](sizekit_layout::ConfigError::EmptyValues)
    /// when no category has a value.
    pub fn try_new(scope: &BreakpointScope, values: ValueSlots<C, T>) -> Result<Self> {
        let values = Responsive::from_slots(values, "responsive builder")?;
        Ok(Self::new(scope, values))
    }

    /// Resolve against `source` and pass the result to `f`.
    pub fn build<S, R>(&self, source: &S, f: impl FnOnce(&BuildContext<C>, &T) -> R) -> R
    where
        S: MeasurementSource + ?Sized,
    {
        let (cx, value) = self.resolve_in(source);
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "responsive.build",
            category = cx.category.name(),
            measurement = cx.measurement,
            fallback = !self.resolver.values().has_explicit(cx.category)
        )
        .entered();
        f(&cx, value)
    }

    /// The value that applies for `source`.
    #[must_use]
    pub fn value<S>(&self, source: &S) -> &T
    where
        S: MeasurementSource + ?Sized,
    {
        self.resolve_in(source).1
    }

    /// The build context for `source`, without a callback.
    #[must_use]
    pub fn context<S>(&self, source: &S) -> BuildContext<C>
    where
        S: MeasurementSource + ?Sized,
    {
        self.resolve_in(source).0
    }

    /// Pick up a changed scope.
    ///
    /// Swaps the table when the scope holds a different `Arc` and copies the
    /// measurement mode and animate flag. Returns `true` if the table
    /// changed.
    pub fn update_scope(&mut self, scope: &BreakpointScope) -> bool {
        self.measure = scope.measure();
        self.animate = scope.animate();
        let table = scope.table::<C>();
        if self.resolver.shares_table(table) {
            return false;
        }
        self.resolver.set_table(Arc::clone(table));
        true
    }

    /// The underlying resolver.
    #[must_use]
    pub fn resolver(&self) -> &Resolver<C, T> {
        &self.resolver
    }

    /// The table this builder classifies with.
    #[must_use]
    pub fn table(&self) -> &Arc<BreakpointTable<C>> {
        self.resolver.table()
    }

    /// Measurement mode.
    #[must_use]
    pub fn measure(&self) -> Measure {
        self.measure
    }

    fn resolve_in<S>(&self, source: &S) -> (BuildContext<C>, &T)
    where
        S: MeasurementSource + ?Sized,
    {
        let size = source.size();
        let measurement = source.measurement(self.measure);
        let resolution = self.resolver.resolve(measurement);
        let cx = BuildContext {
            metrics: source.metrics(),
            size,
            measurement,
            category: resolution.category,
            threshold: resolution.threshold,
            orientation: source.orientation(),
            animate: self.animate,
        };
        (cx, resolution.value)
    }
}

impl<C: ScopedCategory, F> ResponsiveBuilder<C, F> {
    /// Run the callback registered for the current category.
    ///
    /// Used when the values are themselves layout callbacks: one per
    /// screen type, with the usual fallback between them.
    pub fn render<S, R>(&self, source: &S) -> R
    where
        S: MeasurementSource + ?Sized,
        F: Fn(&BuildContext<C>) -> R,
    {
        self.build(source, |cx, f| f(cx))
    }
}

// ---------------------------------------------------------------------------
// OrientationBuilder
// ---------------------------------------------------------------------------

/// Builder with separate portrait and landscape values.
#[derive(Debug, Clone)]
pub struct OrientationBuilder<C: ScopedCategory, T> {
    table: Arc<BreakpointTable<C>>,
    values: OrientationResponsive<C, T>,
    measure: Measure,
    animate: bool,
}

impl<C: ScopedCategory, T> OrientationBuilder<C, T> {
    /// Create a builder that shares the scope's table.
    ///
    /// Both value maps may be empty here; the error surfaces on build.
    #[must_use]
    pub fn new(scope: &BreakpointScope, values: OrientationResponsive<C, T>) -> Self {
        Self {
            table: Arc::clone(scope.table::<C>()),
            values,
            measure: scope.measure(),
            animate: scope.animate(),
        }
    }

    /// Resolve against `source` and pass the result to `f`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyOrientationValues`](sizekit_layout::ConfigError::EmptyOrientationValues)
    /// when neither orientation has a value.
    pub fn build<S, R>(
        &self,
        source: &S,
        f: impl FnOnce(&BuildContext<C>, &T) -> R,
    ) -> Result<R>
    where
        S: MeasurementSource + ?Sized,
    {
        let (cx, value) = self.resolve_in(source)?;
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "orientation.build",
            category = cx.category.name(),
            orientation = %cx.orientation
        )
        .entered();
        Ok(f(&cx, value))
    }

    /// The value that applies for `source`.
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build).
    pub fn value<S>(&self, source: &S) -> Result<&T>
    where
        S: MeasurementSource + ?Sized,
    {
        Ok(self.resolve_in(source)?.1)
    }

    /// Pick up a changed scope. Returns `true` if the table changed.
    pub fn update_scope(&mut self, scope: &BreakpointScope) -> bool {
        self.measure = scope.measure();
        self.animate = scope.animate();
        let table = scope.table::<C>();
        if Arc::ptr_eq(&self.table, table) {
            return false;
        }
        self.table = Arc::clone(table);
        true
    }

    /// The portrait/landscape values.
    #[must_use]
    pub fn values(&self) -> &OrientationResponsive<C, T> {
        &self.values
    }

    fn resolve_in<S>(&self, source: &S) -> Result<(BuildContext<C>, &T)>
    where
        S: MeasurementSource + ?Sized,
    {
        let size = source.size();
        let measurement = source.measurement(self.measure);
        let category = self.table.classify(measurement);
        let orientation = source.orientation();
        let value = self.values.resolve(orientation, category)?;
        let cx = BuildContext {
            metrics: source.metrics(),
            size,
            measurement,
            category,
            threshold: self.table.threshold(category),
            orientation,
            animate: self.animate,
        };
        Ok((cx, value))
    }
}
