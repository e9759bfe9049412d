#![forbid(unsafe_code)]

//! Size categories.
//!
//! A [`Category`] is a closed, totally ordered set of size buckets. Two sets
//! ship with the crate:
//!
//! - [`Breakpoint`]: the five standard buckets, `ExtraSmall` .. `ExtraLarge`.
//! - [`GranularBreakpoint`]: thirteen buckets in four [`SizeGroup`]s
//!   (tiny, compact, standard, jumbo).
//!
//! Ordinals run from the smallest bucket (0) upward, so `Ord` agrees with
//! size: `Breakpoint::Small < Breakpoint::Large`. Fallback resolution walks
//! this order to find neighbouring buckets.

use std::fmt;
use std::hash::Hash;

/// An ordered set of size buckets.
///
/// Implementors are fieldless enums whose declaration order is smallest
/// first, so that `ALL[c.ordinal()] == c` and the derived `Ord` matches.
pub trait Category: Copy + Ord + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Every category, smallest first.
    const ALL: &'static [Self];

    /// Default thresholds in logical pixels for every category except the
    /// smallest, largest category first.
    const DEFAULT_THRESHOLDS: &'static [f64];

    /// Position of this category in [`ALL`](Self::ALL).
    fn ordinal(self) -> usize;

    /// Stable lowercase name, used in `Display` and error messages.
    fn name(self) -> &'static str;

    /// Number of categories in the set.
    #[must_use]
    fn count() -> usize {
        Self::ALL.len()
    }

    /// The smallest category (the one with the sentinel threshold).
    #[must_use]
    fn smallest() -> Self {
        Self::ALL[0]
    }

    /// The largest category.
    #[must_use]
    fn largest() -> Self {
        Self::ALL[Self::ALL.len() - 1]
    }

    /// Look up a category by ordinal.
    #[must_use]
    fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::ALL.get(ordinal).copied()
    }

    /// The next larger category, if any.
    #[must_use]
    fn larger(self) -> Option<Self> {
        Self::from_ordinal(self.ordinal() + 1)
    }

    /// The next smaller category, if any.
    #[must_use]
    fn smaller(self) -> Option<Self> {
        self.ordinal().checked_sub(1).and_then(Self::from_ordinal)
    }
}

// ---------------------------------------------------------------------------
// Standard breakpoints
// ---------------------------------------------------------------------------

/// The five standard size buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    /// Below the `Small` threshold (phones in split view, watches).
    ExtraSmall,
    /// Phones.
    Small,
    /// Tablets.
    Medium,
    /// Laptops and small desktops.
    Large,
    /// Wide desktops.
    ExtraLarge,
}

impl Category for Breakpoint {
    const ALL: &'static [Self] = &[
        Self::ExtraSmall,
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::ExtraLarge,
    ];

    const DEFAULT_THRESHOLDS: &'static [f64] = &[1200.0, 950.0, 600.0, 200.0];

    fn ordinal(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            Self::ExtraSmall => "extra_small",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::ExtraLarge => "extra_large",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Granular breakpoints
// ---------------------------------------------------------------------------

/// Coarse grouping of [`GranularBreakpoint`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SizeGroup {
    Tiny,
    Compact,
    Standard,
    Jumbo,
}

impl fmt::Display for SizeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Tiny => "tiny",
            Self::Compact => "compact",
            Self::Standard => "standard",
            Self::Jumbo => "jumbo",
        })
    }
}

/// Thirteen fine-grained size buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GranularBreakpoint {
    Tiny,
    CompactSmall,
    CompactNormal,
    CompactLarge,
    CompactExtraLarge,
    StandardSmall,
    StandardNormal,
    StandardLarge,
    StandardExtraLarge,
    JumboSmall,
    JumboNormal,
    JumboLarge,
    JumboExtraLarge,
}

impl GranularBreakpoint {
    /// The group this bucket belongs to.
    #[must_use]
    pub const fn group(self) -> SizeGroup {
        match self {
            Self::Tiny => SizeGroup::Tiny,
            Self::CompactSmall
            | Self::CompactNormal
            | Self::CompactLarge
            | Self::CompactExtraLarge => SizeGroup::Compact,
            Self::StandardSmall
            | Self::StandardNormal
            | Self::StandardLarge
            | Self::StandardExtraLarge => SizeGroup::Standard,
            Self::JumboSmall | Self::JumboNormal | Self::JumboLarge | Self::JumboExtraLarge => {
                SizeGroup::Jumbo
            }
        }
    }
}

impl Category for GranularBreakpoint {
    const ALL: &'static [Self] = &[
        Self::Tiny,
        Self::CompactSmall,
        Self::CompactNormal,
        Self::CompactLarge,
        Self::CompactExtraLarge,
        Self::StandardSmall,
        Self::StandardNormal,
        Self::StandardLarge,
        Self::StandardExtraLarge,
        Self::JumboSmall,
        Self::JumboNormal,
        Self::JumboLarge,
        Self::JumboExtraLarge,
    ];

    const DEFAULT_THRESHOLDS: &'static [f64] = &[
        4096.0, 3840.0, 2560.0, 1920.0, // jumbo
        1280.0, 1024.0, 768.0, 568.0, // standard
        480.0, 430.0, 360.0, 300.0, // compact
    ];

    fn ordinal(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            Self::Tiny => "tiny",
            Self::CompactSmall => "compact_small",
            Self::CompactNormal => "compact_normal",
            Self::CompactLarge => "compact_large",
            Self::CompactExtraLarge => "compact_extra_large",
            Self::StandardSmall => "standard_small",
            Self::StandardNormal => "standard_normal",
            Self::StandardLarge => "standard_large",
            Self::StandardExtraLarge => "standard_extra_large",
            Self::JumboSmall => "jumbo_small",
            Self::JumboNormal => "jumbo_normal",
            Self::JumboLarge => "jumbo_large",
            Self::JumboExtraLarge => "jumbo_extra_large",
        }
    }
}

impl fmt::Display for GranularBreakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
