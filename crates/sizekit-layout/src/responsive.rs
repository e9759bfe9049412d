#![forbid(unsafe_code)]

//! Responsive value mapping: apply different values based on category.
//!
//! [`ValueSlots<C, T>`] is a sparse per-category mapping that may be empty;
//! it is what callers fill in. [`Responsive<C, T>`] is the validated form,
//! guaranteed to hold at least one value, and answers "which value applies
//! at this category" with fallback to neighbouring categories.
//!
//! # Usage
//!
//! ```ignore
//! use sizekit_layout::{Breakpoint, Responsive};
//!
//! let label = Responsive::new(Breakpoint::Small, "Mobile")
//!     .at(Breakpoint::Large, "Desktop");
//!
//! // medium has no value: the nearest smaller category (small) wins.
//! assert_eq!(label.resolve(Breakpoint::Medium), &"Mobile");
//! // extra_large has no value: large is the nearest smaller one.
//! assert_eq!(label.resolve(Breakpoint::ExtraLarge), &"Desktop");
//! // extra_small has nothing below it: search upward, small wins.
//! assert_eq!(label.resolve(Breakpoint::ExtraSmall), &"Mobile");
//! ```
//!
//! # Invariants
//!
//! 1. A `Responsive` always holds at least one value (constructors and
//!    `clear` preserve this).
//! 2. A category with an explicit value resolves to that value.
//! 3. Otherwise the nearest smaller category with a value wins.
//! 4. If no smaller category has one, the nearest larger category wins.
//! 5. `resolve()` never fails and is a pure function of the category.
//!
//! # Failure Modes
//!
//! - Converting an empty [`ValueSlots`] fails with
//!   [`ConfigError::EmptyValues`].

use std::fmt;
use std::marker::PhantomData;

use crate::category::Category;
use crate::error::{ConfigError, Result};

// ---------------------------------------------------------------------------
// ValueSlots
// ---------------------------------------------------------------------------

/// A sparse category → value mapping. May be empty.
#[derive(Clone, PartialEq, Eq)]
pub struct ValueSlots<C: Category, T> {
    /// Values indexed by category ordinal.
    values: Box<[Option<T>]>,
    _category: PhantomData<C>,
}

impl<C: Category, T> ValueSlots<C, T> {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: std::iter::repeat_with(|| None).take(C::count()).collect(),
            _category: PhantomData,
        }
    }

    /// Set the value for a category (builder pattern).
    #[must_use]
    pub fn at(mut self, category: C, value: T) -> Self {
        self.set(category, value);
        self
    }

    /// Set or unset the value for a category (builder pattern).
    #[must_use]
    pub fn maybe_at(mut self, category: C, value: Option<T>) -> Self {
        self.values[category.ordinal()] = value;
        self
    }

    /// Set the value for a category (mutating).
    pub fn set(&mut self, category: C, value: T) {
        self.values[category.ordinal()] = Some(value);
    }

    /// Remove the value for a category, returning it.
    pub fn take(&mut self, category: C) -> Option<T> {
        self.values[category.ordinal()].take()
    }

    /// The explicit value for a category, without fallback.
    #[must_use]
    pub fn get(&self, category: C) -> Option<&T> {
        self.values[category.ordinal()].as_ref()
    }

    /// Whether no category has a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Number of categories with a value.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// Categories with a value, smallest first.
    pub fn iter(&self) -> impl Iterator<Item = (C, &T)> {
        C::ALL
            .iter()
            .zip(self.values.iter())
            .filter_map(|(&c, v)| v.as_ref().map(|val| (c, val)))
    }
}

impl<C: Category, T> Default for ValueSlots<C, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Category, T> FromIterator<(C, T)> for ValueSlots<C, T> {
    fn from_iter<I: IntoIterator<Item = (C, T)>>(iter: I) -> Self {
        let mut slots = Self::new();
        for (c, v) in iter {
            slots.set(c, v);
        }
        slots
    }
}

impl<C: Category, T: fmt::Debug> fmt::Debug for ValueSlots<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(c, v)| (c.name(), v)))
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Responsive
// ---------------------------------------------------------------------------

/// A category-aware value with fallback to neighbouring categories.
///
/// Resolution looks at the requested category, then walks toward smaller
/// categories, then toward larger ones, and returns the first value found.
#[derive(Clone, PartialEq, Eq)]
pub struct Responsive<C: Category, T> {
    /// Values indexed by category ordinal. At least one slot is `Some`.
    values: Box<[Option<T>]>,
    _category: PhantomData<C>,
}

impl<C: Category, T> Responsive<C, T> {
    /// Create a responsive value with a single explicit value.
    ///
    /// Every other category falls back to it until overridden.
    #[must_use]
    pub fn new(category: C, value: T) -> Self {
        Self::from_validated(ValueSlots::new().at(category, value).values)
    }

    /// Validate a sparse mapping, naming `context` in the error.
    pub fn from_slots(slots: ValueSlots<C, T>, context: &'static str) -> Result<Self> {
        if slots.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::warn!(context, "responsive value has no entries");
            return Err(ConfigError::empty(context));
        }
        Ok(Self::from_validated(slots.values))
    }

    fn from_validated(values: Box<[Option<T>]>) -> Self {
        debug_assert!(values.iter().any(Option::is_some));
        Self {
            values,
            _category: PhantomData,
        }
    }

    /// Set the value for a category (builder pattern).
    #[must_use]
    pub fn at(mut self, category: C, value: T) -> Self {
        self.set(category, value);
        self
    }

    /// Set the value for a category (mutating).
    pub fn set(&mut self, category: C, value: T) {
        self.values[category.ordinal()] = Some(value);
    }

    /// Clear the override for a category, reverting to fallback.
    ///
    /// Clearing the last remaining value is a no-op. Returns whether a
    /// value was removed.
    pub fn clear(&mut self, category: C) -> bool {
        let idx = category.ordinal();
        if self.values[idx].is_none() || self.explicit_count() == 1 {
            return false;
        }
        self.values[idx] = None;
        true
    }

    /// Resolve the value for a category.
    #[must_use]
    pub fn resolve(&self, category: C) -> &T {
        let idx = self.source_ordinal(category.ordinal());
        match &self.values[idx] {
            Some(v) => v,
            None => unreachable!("source_ordinal always lands on a filled slot"),
        }
    }

    /// Which category supplies the value for `category`.
    #[must_use]
    pub fn resolved_category(&self, category: C) -> C {
        C::ALL[self.source_ordinal(category.ordinal())]
    }

    /// Ordinal of the slot that answers for `ordinal`: itself, else the
    /// nearest smaller filled slot, else the nearest larger one.
    pub(crate) fn source_ordinal(&self, ordinal: usize) -> usize {
        if self.values[ordinal].is_some() {
            return ordinal;
        }
        let below = (0..ordinal).rev();
        let above = ordinal + 1..self.values.len();
        below
            .chain(above)
            .find(|&i| self.values[i].is_some())
            .expect("Responsive always holds at least one value")
    }

    /// Value stored in a slot found by [`source_ordinal`](Self::source_ordinal).
    pub(crate) fn slot(&self, ordinal: usize) -> Option<&T> {
        self.values.get(ordinal).and_then(Option::as_ref)
    }

    /// Whether a category has an explicit (non-fallback) value.
    #[must_use]
    pub fn has_explicit(&self, category: C) -> bool {
        self.values[category.ordinal()].is_some()
    }

    fn explicit_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// All explicitly set categories and their values, smallest first.
    pub fn explicit_values(&self) -> impl Iterator<Item = (C, &T)> {
        C::ALL
            .iter()
            .zip(self.values.iter())
            .filter_map(|(&c, v)| v.as_ref().map(|val| (c, val)))
    }

    /// Map the values to a new type.
    #[must_use]
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> Responsive<C, U> {
        Responsive::from_validated(self.values.iter().map(|v| v.as_ref().map(&f)).collect())
    }

    /// Back to the sparse form.
    #[must_use]
    pub fn into_slots(self) -> ValueSlots<C, T> {
        ValueSlots {
            values: self.values,
            _category: PhantomData,
        }
    }
}

impl<C: Category, T: Clone> Responsive<C, T> {
    /// Resolve and clone the value for a category.
    #[must_use]
    pub fn resolve_cloned(&self, category: C) -> T {
        self.resolve(category).clone()
    }
}

impl<C: Category, T> TryFrom<ValueSlots<C, T>> for Responsive<C, T> {
    type Error = ConfigError;

    fn try_from(slots: ValueSlots<C, T>) -> Result<Self> {
        Self::from_slots(slots, "responsive value")
    }
}

impl<C: Category, T: Default> Default for Responsive<C, T> {
    fn default() -> Self {
        Self::new(C::smallest(), T::default())
    }
}

impl<C: Category, T: fmt::Debug> fmt::Debug for Responsive<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.explicit_values().map(|(c, v)| (c.name(), v)))
            .finish()
    }
}

impl<C: Category, T: fmt::Display> fmt::Display for Responsive<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Responsive(")?;
        let mut first = true;
        for (c, val) in self.explicit_values() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", c, val)?;
            first = false;
        }
        write!(f, ")")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
