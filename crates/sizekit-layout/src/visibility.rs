#![forbid(unsafe_code)]

//! Category-based visibility helpers.
//!
//! [`Visibility<C>`] determines whether content should be shown at a given
//! category. Hidden content is dropped entirely rather than rendered empty,
//! so filtering a list of children reclaims their space.
//!
//! # Usage
//!
//! ```ignore
//! use sizekit_layout::{Breakpoint, Visibility};
//!
//! // Only visible at Medium and above.
//! let vis = Visibility::visible_above(Breakpoint::Medium);
//! assert!(!vis.is_visible(Breakpoint::Small));
//! assert!(vis.is_visible(Breakpoint::Large));
//! ```
//!
//! # Invariants
//!
//! 1. `always()` is visible at every category; `never()` at none.
//! 2. `visible_above(c)` shows at `c` and all larger categories.
//! 3. `visible_below(c)` shows at `c` and all smaller categories.
//! 4. `hidden_above(c)` / `hidden_below(c)` are the exclusive complements.
//! 5. Masks never carry bits beyond `C::count()`.
//!
//! # Failure Modes
//!
//! Constructing a rule for a category set larger than [`MAX_CATEGORIES`]
//! panics. Every other operation is infallible.

use std::fmt;
use std::marker::PhantomData;

use crate::category::Category;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Largest category set a [`Visibility`] mask can describe.
pub const MAX_CATEGORIES: usize = u64::BITS as usize;

/// Category-aware visibility rule.
///
/// Bit `i` of the mask is set when content is visible at the category with
/// ordinal `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Visibility<C: Category> {
    mask: u64,
    _category: PhantomData<C>,
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl<C: Category> Visibility<C> {
    fn full() -> u64 {
        let count = C::count();
        assert!(
            count <= MAX_CATEGORIES,
            "visibility masks hold at most {MAX_CATEGORIES} categories, got {count}"
        );
        u64::MAX >> (MAX_CATEGORIES - count)
    }

    fn bit(category: C) -> u64 {
        1u64 << category.ordinal()
    }

    /// Create from a raw bitmask; bits beyond the category count are dropped.
    ///
    /// # Panics
    ///
    /// If `C` has more than [`MAX_CATEGORIES`] categories.
    #[must_use]
    pub fn from_mask(mask: u64) -> Self {
        Self {
            mask: mask & Self::full(),
            _category: PhantomData,
        }
    }

    /// Visible at all categories.
    #[must_use]
    pub fn always() -> Self {
        Self::from_mask(u64::MAX)
    }

    /// Hidden at all categories.
    #[must_use]
    pub fn never() -> Self {
        Self::from_mask(0)
    }

    /// Visible at the given category and all larger ones.
    #[must_use]
    pub fn visible_above(category: C) -> Self {
        let full = Self::full();
        Self::from_mask(full >> category.ordinal() << category.ordinal())
    }

    /// Visible at the given category and all smaller ones.
    #[must_use]
    pub fn visible_below(category: C) -> Self {
        let full = Self::full();
        Self::from_mask(full >> (C::count() - 1 - category.ordinal()))
    }

    /// Visible at exactly one category.
    #[must_use]
    pub fn only(category: C) -> Self {
        let full = Self::full();
        Self::from_mask(full & Self::bit(category))
    }

    /// Visible at the listed categories.
    #[must_use]
    pub fn at(categories: &[C]) -> Self {
        let full = Self::full();
        Self::from_mask(full & categories.iter().fold(0, |m, &c| m | Self::bit(c)))
    }

    /// Hidden below the given category (visible at it and above).
    #[must_use]
    pub fn hidden_below(category: C) -> Self {
        Self::visible_above(category)
    }

    /// Hidden at the given category and all larger ones.
    #[must_use]
    pub fn hidden_above(category: C) -> Self {
        match category.smaller() {
            Some(below) => Self::visible_below(below),
            None => Self::never(),
        }
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

impl<C: Category> Visibility<C> {
    /// Whether content is visible at the given category.
    #[must_use]
    pub fn is_visible(self, category: C) -> bool {
        self.mask & Self::bit(category) != 0
    }

    /// Whether content is hidden at the given category.
    #[must_use]
    pub fn is_hidden(self, category: C) -> bool {
        !self.is_visible(category)
    }

    /// Whether content is visible everywhere.
    #[must_use]
    pub fn is_always(self) -> bool {
        self.mask == Self::full()
    }

    /// Whether content is hidden everywhere.
    #[must_use]
    pub fn is_never(self) -> bool {
        self.mask == 0
    }

    /// The raw bitmask.
    #[must_use]
    pub const fn mask(self) -> u64 {
        self.mask
    }

    /// Categories where content is visible, smallest first.
    pub fn visible_categories(self) -> impl Iterator<Item = C> {
        C::ALL.iter().copied().filter(move |&c| self.is_visible(c))
    }

    /// Keep the items visible at `category`, with their original index.
    pub fn filter<'a, I>(items: &'a [(I, Self)], category: C) -> Vec<(usize, &'a I)> {
        items
            .iter()
            .enumerate()
            .filter(|(_, (_, vis))| vis.is_visible(category))
            .map(|(i, (item, _))| (i, item))
            .collect()
    }

    /// Count how many rules are visible at a category.
    pub fn count_visible(visibilities: &[Self], category: C) -> usize {
        visibilities.iter().filter(|v| v.is_visible(category)).count()
    }
}

// ---------------------------------------------------------------------------
// Trait impls
// ---------------------------------------------------------------------------

impl<C: Category> Default for Visibility<C> {
    fn default() -> Self {
        Self::always()
    }
}

impl<C: Category> fmt::Display for Visibility<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_always() {
            return f.write_str("always");
        }
        if self.is_never() {
            return f.write_str("never");
        }
        let mut first = true;
        for c in self.visible_categories() {
            if !first {
                f.write_str("+")?;
            }
            f.write_str(c.name())?;
            first = false;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{Breakpoint, GranularBreakpoint};

    type Vis = Visibility<Breakpoint>;

    #[test]
    fn always_and_never() {
        for &bp in Breakpoint::ALL {
            assert!(Vis::always().is_visible(bp));
            assert!(Vis::never().is_hidden(bp));
        }
        assert!(Vis::always().is_always());
        assert!(Vis::never().is_never());
        assert_eq!(Vis::always().mask(), 0b11111);
    }

    #[test]
    fn granular_full_mask() {
        let vis = Visibility::<GranularBreakpoint>::always();
        assert_eq!(vis.mask(), 0x1FFF);
        assert!(vis.is_visible(GranularBreakpoint::JumboExtraLarge));
    }

    #[test]
    fn granular_extremes() {
        type G = Visibility<GranularBreakpoint>;
        assert!(G::visible_below(GranularBreakpoint::JumboExtraLarge).is_always());
        assert_eq!(G::visible_above(GranularBreakpoint::JumboExtraLarge).mask(), 1 << 12);
        assert_eq!(G::only(GranularBreakpoint::Tiny).mask(), 1);
    }

    /// A category set one wider than a mask can hold.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    struct Band(u8);

    const BANDS: [Band; MAX_CATEGORIES + 1] = {
        let mut all = [Band(0); MAX_CATEGORIES + 1];
        let mut i = 0;
        while i < all.len() {
            all[i] = Band(i as u8);
            i += 1;
        }
        all
    };

    impl fmt::Display for Band {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "band{}", self.0)
        }
    }

    impl Category for Band {
        const ALL: &'static [Self] = &BANDS;
        const DEFAULT_THRESHOLDS: &'static [f64] = &[];

        fn ordinal(self) -> usize {
            usize::from(self.0)
        }

        fn name(self) -> &'static str {
            "band"
        }
    }

    #[test]
    #[should_panic(expected = "visibility masks hold at most 64 categories, got 65")]
    fn oversized_category_set_panics() {
        let _ = Visibility::<Band>::always();
    }

    #[test]
    #[should_panic(expected = "visibility masks hold at most 64 categories")]
    fn oversized_single_category_panics() {
        let _ = Visibility::only(Band(64));
    }

    #[test]
    fn visible_above() {
        let vis = Vis::visible_above(Breakpoint::Medium);
        assert!(!vis.is_visible(Breakpoint::ExtraSmall));
        assert!(!vis.is_visible(Breakpoint::Small));
        assert!(vis.is_visible(Breakpoint::Medium));
        assert!(vis.is_visible(Breakpoint::ExtraLarge));
        assert!(Vis::visible_above(Breakpoint::ExtraSmall).is_always());
    }

    #[test]
    fn visible_below() {
        let vis = Vis::visible_below(Breakpoint::Medium);
        assert!(vis.is_visible(Breakpoint::ExtraSmall));
        assert!(vis.is_visible(Breakpoint::Medium));
        assert!(!vis.is_visible(Breakpoint::Large));
        assert!(Vis::visible_below(Breakpoint::ExtraLarge).is_always());
    }

    #[test]
    fn hidden_above_excludes_category() {
        let vis = Vis::hidden_above(Breakpoint::Medium);
        assert!(vis.is_visible(Breakpoint::Small));
        assert!(!vis.is_visible(Breakpoint::Medium));
        assert!(Vis::hidden_above(Breakpoint::ExtraSmall).is_never());
        assert_eq!(
            Vis::hidden_below(Breakpoint::Large),
            Vis::visible_above(Breakpoint::Large)
        );
    }

    #[test]
    fn only_and_at() {
        let vis = Vis::only(Breakpoint::Large);
        assert_eq!(vis.visible_categories().collect::<Vec<_>>(), vec![Breakpoint::Large]);

        let vis = Vis::at(&[Breakpoint::Small, Breakpoint::ExtraLarge]);
        assert!(vis.is_visible(Breakpoint::Small));
        assert!(!vis.is_visible(Breakpoint::Medium));
        assert!(vis.is_visible(Breakpoint::ExtraLarge));
    }

    #[test]
    fn from_mask_truncates() {
        assert!(Vis::from_mask(0xFFFF).is_always());
        assert_eq!(Vis::from_mask(0xFFFF).mask(), 0b11111);
    }

    #[test]
    fn filter_keeps_visible_items() {
        let items = [
            ("sidebar", Vis::visible_above(Breakpoint::Large)),
            ("content", Vis::always()),
            ("bottom_nav", Vis::hidden_above(Breakpoint::Large)),
        ];
        let small = Vis::filter(&items, Breakpoint::Small);
        assert_eq!(small, vec![(1, &"content"), (2, &"bottom_nav")]);
        let large = Vis::filter(&items, Breakpoint::Large);
        assert_eq!(large, vec![(0, &"sidebar"), (1, &"content")]);
    }

    #[test]
    fn count_visible() {
        let rules = [Vis::always(), Vis::only(Breakpoint::Small), Vis::never()];
        assert_eq!(Vis::count_visible(&rules, Breakpoint::Small), 2);
        assert_eq!(Vis::count_visible(&rules, Breakpoint::Large), 1);
    }

    #[test]
    fn display() {
        assert_eq!(Vis::always().to_string(), "always");
        assert_eq!(Vis::never().to_string(), "never");
        assert_eq!(
            Vis::at(&[Breakpoint::Small, Breakpoint::Large]).to_string(),
            "small+large"
        );
    }
}
