#![forbid(unsafe_code)]

//! Orientation-aware value selection.
//!
//! Some decisions differ between portrait and landscape. An
//! [`OrientationResponsive<C, T>`] keeps one sparse value map per
//! orientation and picks the active one at resolution time:
//!
//! - the map for the current orientation, if it has any value;
//! - otherwise the other orientation's map;
//! - if both are empty, [`ConfigError::EmptyOrientationValues`].
//!
//! Emptiness is checked when a value is first requested, not at
//! construction, because which maps end up empty can depend on how a
//! caller assembled them.

use sizekit_core::geometry::Orientation;

use crate::category::Category;
use crate::error::{ConfigError, Result};
use crate::responsive::{Responsive, ValueSlots};

/// The map for `orientation` if present, otherwise the other one.
fn prefer<'a, V>(
    orientation: Orientation,
    portrait: Option<&'a V>,
    landscape: Option<&'a V>,
) -> Option<&'a V> {
    match orientation {
        Orientation::Portrait => portrait.or(landscape),
        Orientation::Landscape => landscape.or(portrait),
    }
}

/// Pick the value map for an orientation, falling back to the other one.
pub fn select_orientation<'a, C: Category, T>(
    orientation: Orientation,
    portrait: &'a ValueSlots<C, T>,
    landscape: &'a ValueSlots<C, T>,
) -> Result<&'a ValueSlots<C, T>> {
    let filled = |slots: &'a ValueSlots<C, T>| (!slots.is_empty()).then_some(slots);
    prefer(orientation, filled(portrait), filled(landscape))
        .ok_or(ConfigError::EmptyOrientationValues)
}

/// Portrait and landscape value maps over the same category set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrientationResponsive<C: Category, T> {
    portrait: Option<Responsive<C, T>>,
    landscape: Option<Responsive<C, T>>,
}

impl<C: Category, T> OrientationResponsive<C, T> {
    /// Build from two sparse maps. Either (or both) may be empty.
    #[must_use]
    pub fn new(portrait: ValueSlots<C, T>, landscape: ValueSlots<C, T>) -> Self {
        Self {
            portrait: Responsive::try_from(portrait).ok(),
            landscape: Responsive::try_from(landscape).ok(),
        }
    }

    /// Portrait values only.
    #[must_use]
    pub fn portrait(values: Responsive<C, T>) -> Self {
        Self {
            portrait: Some(values),
            landscape: None,
        }
    }

    /// Landscape values only.
    #[must_use]
    pub fn landscape(values: Responsive<C, T>) -> Self {
        Self {
            portrait: None,
            landscape: Some(values),
        }
    }

    /// Replace the portrait values (builder pattern).
    #[must_use]
    pub fn with_portrait(mut self, values: Responsive<C, T>) -> Self {
        self.portrait = Some(values);
        self
    }

    /// Replace the landscape values (builder pattern).
    #[must_use]
    pub fn with_landscape(mut self, values: Responsive<C, T>) -> Self {
        self.landscape = Some(values);
        self
    }

    /// The value map active for `orientation`.
    pub fn select(&self, orientation: Orientation) -> Result<&Responsive<C, T>> {
        match prefer(orientation, self.portrait.as_ref(), self.landscape.as_ref()) {
            Some(values) => Ok(values),
            None => {
                #[cfg(feature = "tracing")]
                tracing::error!(%orientation, "no portrait or landscape values configured");
                Err(ConfigError::EmptyOrientationValues)
            }
        }
    }

    /// Resolve a category under an orientation.
    pub fn resolve(&self, orientation: Orientation, category: C) -> Result<&T> {
        Ok(self.select(orientation)?.resolve(category))
    }
}
