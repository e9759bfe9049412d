#![forbid(unsafe_code)]

//! Root-level breakpoint configuration shared by every builder below it.

use std::sync::Arc;

use sizekit_core::geometry::{Constraints, Size};
use sizekit_layout::{
    Breakpoint, BreakpointTable, Category, GranularBreakpoint, ResponsiveConfig, Result,
};

/// Which scalar a builder classifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Measure {
    /// The width.
    #[default]
    Width,
    /// The shorter of width and height. Keeps a rotated phone in the
    /// same category.
    ShortestSide,
}

impl Measure {
    /// Reduce a size to the scalar this mode classifies.
    #[must_use]
    pub fn of(self, size: Size) -> f64 {
        match self {
            Self::Width => size.width,
            Self::ShortestSide => size.shortest_side(),
        }
    }

    /// Reduce container constraints to a scalar.
    ///
    /// Unbounded axes are ignored: the shortest side of a 1000-wide
    /// container with unbounded height is 1000. An axis with no bound at
    /// all measures 0.
    #[must_use]
    pub fn of_constraints(self, constraints: Constraints) -> f64 {
        let bounded = |v: f64| v.is_finite().then_some(v.max(0.0));
        let width = bounded(constraints.max_width);
        let height = bounded(constraints.max_height);
        match self {
            Self::Width => width.unwrap_or(0.0),
            Self::ShortestSide => match (width, height) {
                (Some(w), Some(h)) => w.min(h),
                (Some(side), None) | (None, Some(side)) => side,
                (None, None) => 0.0,
            },
        }
    }

    pub(crate) fn from_flag(shortest_side: bool) -> Self {
        if shortest_side {
            Self::ShortestSide
        } else {
            Self::Width
        }
    }
}

/// Breakpoint tables and flags handed down to builders.
///
/// Tables are held by `Arc`; every builder created from a scope shares
/// them. Replacing a table produces a new `Arc`, which builders notice on
/// [`update_scope`](crate::builder::ResponsiveBuilder::update_scope).
#[derive(Debug, Clone, Default)]
pub struct BreakpointScope {
    standard: Arc<BreakpointTable<Breakpoint>>,
    granular: Arc<BreakpointTable<GranularBreakpoint>>,
    measure: Measure,
    animate: bool,
}

impl BreakpointScope {
    /// Scope with the default tables, classifying by width.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a scope from configuration, validating both tables.
    pub fn from_config(config: &ResponsiveConfig) -> Result<Self> {
        Ok(Self {
            standard: Arc::new(config.standard_table()?),
            granular: Arc::new(config.granular_table()?),
            measure: Measure::from_flag(config.shortest_side),
            animate: config.animate,
        })
    }

    /// Replace the standard table.
    #[must_use]
    pub fn with_standard(mut self, table: BreakpointTable<Breakpoint>) -> Self {
        self.standard = Arc::new(table);
        self
    }

    /// Replace the granular table.
    #[must_use]
    pub fn with_granular(mut self, table: BreakpointTable<GranularBreakpoint>) -> Self {
        self.granular = Arc::new(table);
        self
    }

    /// Set how measurements are reduced to a scalar.
    #[must_use]
    pub fn with_measure(mut self, measure: Measure) -> Self {
        self.measure = measure;
        self
    }

    /// Set the animate-transitions flag.
    #[must_use]
    pub fn with_animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    /// The standard table.
    #[must_use]
    pub fn standard(&self) -> &Arc<BreakpointTable<Breakpoint>> {
        &self.standard
    }

    /// The granular table.
    #[must_use]
    pub fn granular(&self) -> &Arc<BreakpointTable<GranularBreakpoint>> {
        &self.granular
    }

    /// Measurement mode.
    #[must_use]
    pub fn measure(&self) -> Measure {
        self.measure
    }

    /// Whether transitions should animate.
    #[must_use]
    pub fn animate(&self) -> bool {
        self.animate
    }

    /// The table for category family `C`.
    #[must_use]
    pub fn table<C: ScopedCategory>(&self) -> &Arc<BreakpointTable<C>> {
        C::table(self)
    }
}

/// A category family whose table lives in a [`BreakpointScope`].
pub trait ScopedCategory: Category {
    /// Fetch this family's table from the scope.
    fn table(scope: &BreakpointScope) -> &Arc<BreakpointTable<Self>>;
}

impl ScopedCategory for Breakpoint {
    fn table(scope: &BreakpointScope) -> &Arc<BreakpointTable<Self>> {
        &scope.standard
    }
}

impl ScopedCategory for GranularBreakpoint {
    fn table(scope: &BreakpointScope) -> &Arc<BreakpointTable<Self>> {
        &scope.granular
    }
}
