#![forbid(unsafe_code)]

//! Breakpoint tables: thresholds that partition a measurement into categories.
//!
//! A [`BreakpointTable<C>`] assigns each category of `C` a lower bound in
//! logical pixels. Classification scans from the largest category down and
//! returns the first one whose threshold the measurement reaches.
//!
//! # Invariants
//!
//! 1. Thresholds strictly decrease from the largest category to the
//!    smallest.
//! 2. Every threshold except the smallest category's is finite and
//!    non-negative.
//! 3. The smallest category holds [`SENTINEL`], so classification always
//!    finds a category.
//! 4. A measurement exactly on a threshold belongs to the larger bucket.
//!
//! # Failure Modes
//!
//! - Construction rejects malformed threshold sets with a [`ConfigError`].
//!   Once built, a table never fails.
//! - `classify(NaN)` returns the smallest category.

use std::fmt;
use std::marker::PhantomData;

use crate::category::Category;
use crate::error::{ConfigError, Result};

/// Threshold of the smallest category: below any real measurement.
pub const SENTINEL: f64 = -1.0;

/// An immutable category → threshold mapping.
#[derive(Clone, PartialEq)]
pub struct BreakpointTable<C: Category> {
    /// Thresholds indexed by category ordinal. Slot 0 is [`SENTINEL`].
    thresholds: Box<[f64]>,
    _category: PhantomData<C>,
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl<C: Category> BreakpointTable<C> {
    /// Build a table from the thresholds of every category except the
    /// smallest, largest category first.
    ///
    /// ```ignore
    /// // extra_large, large, medium, small
    /// let table = BreakpointTable::<Breakpoint>::new(&[1200.0, 950.0, 600.0, 200.0])?;
    /// ```
    pub fn new(thresholds: &[f64]) -> Result<Self> {
        let expected = C::count() - 1;
        if thresholds.len() != expected {
            return Err(ConfigError::ThresholdCount {
                expected,
                actual: thresholds.len(),
            });
        }

        let mut slots = vec![SENTINEL; C::count()].into_boxed_slice();
        for (category, &threshold) in C::ALL.iter().rev().zip(thresholds) {
            if !threshold.is_finite() || threshold < 0.0 {
                return Err(ConfigError::InvalidThreshold {
                    category: category.name(),
                    threshold,
                });
            }
            slots[category.ordinal()] = threshold;
        }

        for pair in C::ALL[1..].windows(2) {
            let (smaller, larger) = (pair[0], pair[1]);
            let (lo, hi) = (slots[smaller.ordinal()], slots[larger.ordinal()]);
            if hi <= lo {
                return Err(ConfigError::NotDescending {
                    larger: larger.name(),
                    larger_threshold: hi,
                    smaller: smaller.name(),
                    smaller_threshold: lo,
                });
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            categories = C::count(),
            largest = thresholds[0],
            "breakpoint table built"
        );

        Ok(Self {
            thresholds: slots,
            _category: PhantomData,
        })
    }
}

impl<C: Category> Default for BreakpointTable<C> {
    fn default() -> Self {
        let mut slots = vec![SENTINEL; C::count()].into_boxed_slice();
        for (category, &threshold) in C::ALL.iter().rev().zip(C::DEFAULT_THRESHOLDS) {
            slots[category.ordinal()] = threshold;
        }
        Self {
            thresholds: slots,
            _category: PhantomData,
        }
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

impl<C: Category> BreakpointTable<C> {
    /// Classify a measurement in logical pixels.
    ///
    /// Scans from the largest category down and returns the first whose
    /// threshold is `<= measurement`.
    #[must_use]
    pub fn classify(&self, measurement: f64) -> C {
        C::ALL
            .iter()
            .rev()
            .copied()
            .find(|c| measurement >= self.thresholds[c.ordinal()])
            .unwrap_or_else(C::smallest)
    }

    /// Lower bound of a category. The smallest category returns [`SENTINEL`].
    #[must_use]
    pub fn threshold(&self, category: C) -> f64 {
        self.thresholds[category.ordinal()]
    }

    /// Exclusive upper bound of a category (the next larger threshold), or
    /// `None` for the largest category.
    #[must_use]
    pub fn upper_bound(&self, category: C) -> Option<f64> {
        category.larger().map(|c| self.threshold(c))
    }

    /// Categories and their thresholds, largest first.
    pub fn iter(&self) -> impl Iterator<Item = (C, f64)> + '_ {
        C::ALL
            .iter()
            .rev()
            .map(move |&c| (c, self.thresholds[c.ordinal()]))
    }

    /// Thresholds of every category except the smallest, largest first.
    ///
    /// Round-trips through [`BreakpointTable::new`].
    #[must_use]
    pub fn thresholds(&self) -> Vec<f64> {
        self.iter().map(|(_, t)| t).take(C::count() - 1).collect()
    }

    /// Whether a change from `old` to `new` crosses a threshold.
    #[must_use]
    pub fn crosses(&self, old: f64, new: f64) -> bool {
        self.classify(old) != self.classify(new)
    }
}

impl<C: Category> fmt::Debug for BreakpointTable<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(c, t)| (c.name(), t)))
            .finish()
    }
}

impl<C: Category> fmt::Display for BreakpointTable<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (c, t) in self.iter() {
            if !first {
                write!(f, " > ")?;
            }
            if t == SENTINEL {
                write!(f, "{c}")?;
            } else {
                write!(f, "{c}>={t}")?;
            }
            first = false;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
