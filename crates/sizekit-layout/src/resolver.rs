#![forbid(unsafe_code)]

//! Resolver: breakpoint table + value map → value for a measurement.
//!
//! [`Resolver<C, T>`] couples a shared [`BreakpointTable<C>`] with a
//! [`Responsive<C, T>`]. It classifies a measurement into a category and
//! returns the value that applies there, using the value map's fallback.
//!
//! # Invariants
//!
//! 1. Resolution is a pure function of the measurement (or category); the
//!    per-instance memo only records which slot answered for a category and
//!    never changes results.
//! 2. The table is shared by `Arc`; resolvers never mutate it.
//! 3. Values are fixed after construction. A changed table is swapped in
//!    with [`Resolver::set_table`] once [`Resolver::shares_table`] reports a
//!    different `Arc`.
//!
//! # Failure Modes
//!
//! None once constructed: classification always yields a category and the
//! value map always holds a value.

use std::cell::OnceCell;
use std::sync::Arc;

use crate::category::Category;
use crate::responsive::Responsive;
use crate::table::BreakpointTable;

/// Result of resolving a measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution<'a, C: Category, T> {
    /// Category the measurement falls into.
    pub category: C,
    /// Lower bound of that category.
    pub threshold: f64,
    /// Category whose value was used (differs from `category` on fallback).
    pub source: C,
    /// The resolved value.
    pub value: &'a T,
}

impl<C: Category, T> Resolution<'_, C, T> {
    /// Whether the value came from a neighbouring category.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.category != self.source
    }
}

/// Classifies measurements and resolves category values.
#[derive(Debug, Clone)]
pub struct Resolver<C: Category, T> {
    table: Arc<BreakpointTable<C>>,
    values: Responsive<C, T>,
    /// Category ordinal → ordinal of the slot that answers for it.
    memo: Box<[OnceCell<usize>]>,
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl<C: Category, T> Resolver<C, T> {
    /// Create a resolver over a shared table.
    #[must_use]
    pub fn new(table: Arc<BreakpointTable<C>>, values: Responsive<C, T>) -> Self {
        Self {
            table,
            values,
            memo: std::iter::repeat_with(OnceCell::new)
                .take(C::count())
                .collect(),
        }
    }

    /// Create a resolver over the default table for `C`.
    #[must_use]
    pub fn with_default_table(values: Responsive<C, T>) -> Self {
        Self::new(Arc::new(BreakpointTable::default()), values)
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

impl<C: Category, T> Resolver<C, T> {
    /// Classify a measurement in logical pixels.
    #[must_use]
    pub fn classify(&self, measurement: f64) -> C {
        self.table.classify(measurement)
    }

    /// Value for a category, with fallback.
    #[must_use]
    pub fn resolve_category(&self, category: C) -> &T {
        let source = self.source_ordinal(category);
        match self.values.slot(source) {
            Some(v) => v,
            None => unreachable!("memoized slot is always filled"),
        }
    }

    /// Classify a measurement and resolve its value.
    #[must_use]
    pub fn resolve(&self, measurement: f64) -> Resolution<'_, C, T> {
        let category = self.classify(measurement);
        let source = self.source_ordinal(category);
        Resolution {
            category,
            threshold: self.table.threshold(category),
            source: C::ALL[source],
            value: self.resolve_category(category),
        }
    }

    fn source_ordinal(&self, category: C) -> usize {
        let ordinal = category.ordinal();
        *self.memo[ordinal].get_or_init(|| {
            let source = self.values.source_ordinal(ordinal);
            #[cfg(feature = "tracing")]
            tracing::trace!(
                category = category.name(),
                source = C::ALL[source].name(),
                "resolver memo miss"
            );
            source
        })
    }

    /// Check if a measurement change crosses into another category.
    ///
    /// Returns `Some((old, new))` if the category changed, `None` otherwise.
    #[must_use]
    pub fn detect_transition(&self, old: f64, new: f64) -> Option<(C, C)> {
        let old_c = self.classify(old);
        let new_c = self.classify(new);
        if old_c != new_c {
            Some((old_c, new_c))
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Accessors
// ---------------------------------------------------------------------------

impl<C: Category, T> Resolver<C, T> {
    /// The breakpoint table.
    #[must_use]
    pub fn table(&self) -> &Arc<BreakpointTable<C>> {
        &self.table
    }

    /// The value map.
    #[must_use]
    pub fn values(&self) -> &Responsive<C, T> {
        &self.values
    }

    /// Whether this resolver was built over exactly `table` (same `Arc`).
    #[must_use]
    pub fn shares_table(&self, table: &Arc<BreakpointTable<C>>) -> bool {
        Arc::ptr_eq(&self.table, table)
    }

    /// Rebuild over another table, keeping the values.
    #[must_use]
    pub fn with_table(self, table: Arc<BreakpointTable<C>>) -> Self {
        Self::new(table, self.values)
    }

    /// Swap the table in place.
    ///
    /// The memo maps categories to value slots and does not depend on the
    /// table, so it survives the swap.
    pub fn set_table(&mut self, table: Arc<BreakpointTable<C>>) {
        self.table = table;
    }

    /// Number of categories resolved so far.
    #[must_use]
    pub fn memoized(&self) -> usize {
        self.memo.iter().filter(|m| m.get().is_some()).count()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{Breakpoint, GranularBreakpoint};

    fn device_label() -> Resolver<Breakpoint, &'static str> {
        Resolver::with_default_table(
            Responsive::new(Breakpoint::Large, "Desktop").at(Breakpoint::Small, "Mobile"),
        )
    }

    #[test]
    fn classify_uses_table() {
        let r = device_label();
        assert_eq!(r.classify(600.0), Breakpoint::Medium);
        assert_eq!(r.classify(599.9), Breakpoint::Small);
    }

    #[test]
    fn resolve_measurement() {
        let r = device_label();
        let res = r.resolve(700.0);
        assert_eq!(res.category, Breakpoint::Medium);
        assert_eq!(res.threshold, 600.0);
        assert_eq!(res.source, Breakpoint::Small);
        assert_eq!(res.value, &"Mobile");
        assert!(res.is_fallback());

        let res = r.resolve(1300.0);
        assert_eq!(res.category, Breakpoint::ExtraLarge);
        assert_eq!(res.value, &"Desktop");
    }

    #[test]
    fn direct_hit_is_not_fallback() {
        let r = device_label();
        let res = r.resolve(300.0);
        assert_eq!(res.category, Breakpoint::Small);
        assert!(!res.is_fallback());
    }

    #[test]
    fn memo_fills_lazily_and_keeps_results() {
        let r = device_label();
        assert_eq!(r.memoized(), 0);
        let first = *r.resolve_category(Breakpoint::Medium);
        assert_eq!(r.memoized(), 1);
        let second = *r.resolve_category(Breakpoint::Medium);
        assert_eq!(first, second);
        assert_eq!(r.memoized(), 1);
        for &bp in Breakpoint::ALL {
            let _ = r.resolve_category(bp);
        }
        assert_eq!(r.memoized(), Breakpoint::count());
    }

    #[test]
    fn clone_carries_values() {
        let r = device_label();
        let _ = r.resolve_category(Breakpoint::Medium);
        let cloned = r.clone();
        assert_eq!(cloned.resolve_category(Breakpoint::Medium), &"Mobile");
        assert!(cloned.shares_table(r.table()));
    }

    #[test]
    fn granular_jumbo_small_boundary() {
        let r = Resolver::with_default_table(Responsive::new(GranularBreakpoint::Tiny, "X"));
        let res = r.resolve(1920.0);
        assert_eq!(res.category, GranularBreakpoint::JumboSmall);
        assert_eq!(res.value, &"X");
    }

    #[test]
    fn shared_table_identity() {
        let table = Arc::new(BreakpointTable::<Breakpoint>::default());
        let a = Resolver::new(Arc::clone(&table), Responsive::new(Breakpoint::Small, 1));
        let b = Resolver::new(Arc::clone(&table), Responsive::new(Breakpoint::Large, 2));
        assert!(a.shares_table(&table));
        assert!(b.shares_table(a.table()));

        let other = Arc::new(BreakpointTable::<Breakpoint>::default());
        assert!(!a.shares_table(&other));
        let rebuilt = a.with_table(Arc::clone(&other));
        assert!(rebuilt.shares_table(&other));
        assert_eq!(rebuilt.memoized(), 0);
    }

    #[test]
    fn set_table_keeps_memo() {
        let mut r = device_label();
        let _ = r.resolve_category(Breakpoint::Medium);
        let wide = Arc::new(
            BreakpointTable::<Breakpoint>::new(&[2000.0, 1500.0, 1000.0, 500.0]).unwrap(),
        );
        r.set_table(Arc::clone(&wide));
        assert!(r.shares_table(&wide));
        assert_eq!(r.memoized(), 1);
        assert_eq!(r.classify(1200.0), Breakpoint::Medium);
        assert_eq!(r.resolve(1200.0).value, &"Mobile");
    }

    #[test]
    fn custom_table_moves_boundaries() {
        let table =
            Arc::new(BreakpointTable::<Breakpoint>::new(&[2000.0, 1500.0, 1000.0, 500.0]).unwrap());
        let r = Resolver::new(table, Responsive::new(Breakpoint::Medium, "m"));
        assert_eq!(r.classify(999.0), Breakpoint::Small);
        assert_eq!(r.resolve(999.0).value, &"m");
    }

    #[test]
    fn detect_transition_some() {
        let r = device_label();
        assert_eq!(
            r.detect_transition(500.0, 1000.0),
            Some((Breakpoint::Small, Breakpoint::Large))
        );
    }

    #[test]
    fn detect_transition_none() {
        let r = device_label();
        assert_eq!(r.detect_transition(650.0, 900.0), None);
    }
}
