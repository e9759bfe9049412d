#![forbid(unsafe_code)]

//! Serializable breakpoint configuration.
//!
//! [`ResponsiveConfig`] is the root-level configuration an application
//! hands to its builders: one threshold set per category family, plus the
//! "classify by shortest side" and "animate transitions" flags. Missing
//! fields take the stock defaults, and deserializing a threshold set that
//! is not strictly descending fails with the [`ConfigError`] message.
//!
//! ```ignore
//! let config: ResponsiveConfig = serde_json::from_str(r#"{
//!     "standard": { "extra_large": 1440, "large": 1024, "medium": 768, "small": 320 },
//!     "shortest_side": true
//! }"#)?;
//! let table = config.standard_table()?;
//! ```

use serde::{Deserialize, Serialize};

use crate::category::{Breakpoint, GranularBreakpoint};
use crate::error::{ConfigError, Result};
use crate::table::BreakpointTable;

/// Thresholds for the five standard categories.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandardBreakpoints {
    pub extra_large: f64,
    pub large: f64,
    pub medium: f64,
    pub small: f64,
}

impl Default for StandardBreakpoints {
    fn default() -> Self {
        Self {
            extra_large: 1200.0,
            large: 950.0,
            medium: 600.0,
            small: 200.0,
        }
    }
}

impl StandardBreakpoints {
    /// Thresholds largest first, as [`BreakpointTable::new`] expects.
    #[must_use]
    pub fn thresholds(&self) -> [f64; 4] {
        [self.extra_large, self.large, self.medium, self.small]
    }
}

impl TryFrom<StandardBreakpoints> for BreakpointTable<Breakpoint> {
    type Error = ConfigError;

    fn try_from(bp: StandardBreakpoints) -> Result<Self> {
        BreakpointTable::new(&bp.thresholds())
    }
}

impl From<&BreakpointTable<Breakpoint>> for StandardBreakpoints {
    fn from(table: &BreakpointTable<Breakpoint>) -> Self {
        Self {
            extra_large: table.threshold(Breakpoint::ExtraLarge),
            large: table.threshold(Breakpoint::Large),
            medium: table.threshold(Breakpoint::Medium),
            small: table.threshold(Breakpoint::Small),
        }
    }
}

/// Thresholds for the thirteen granular categories.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GranularBreakpoints {
    pub jumbo_extra_large: f64,
    pub jumbo_large: f64,
    pub jumbo_normal: f64,
    pub jumbo_small: f64,
    pub standard_extra_large: f64,
    pub standard_large: f64,
    pub standard_normal: f64,
    pub standard_small: f64,
    pub compact_extra_large: f64,
    pub compact_large: f64,
    pub compact_normal: f64,
    pub compact_small: f64,
}

impl Default for GranularBreakpoints {
    fn default() -> Self {
        Self {
            jumbo_extra_large: 4096.0,
            jumbo_large: 3840.0,
            jumbo_normal: 2560.0,
            jumbo_small: 1920.0,
            standard_extra_large: 1280.0,
            standard_large: 1024.0,
            standard_normal: 768.0,
            standard_small: 568.0,
            compact_extra_large: 480.0,
            compact_large: 430.0,
            compact_normal: 360.0,
            compact_small: 300.0,
        }
    }
}

impl GranularBreakpoints {
    /// Thresholds largest first, as [`BreakpointTable::new`] expects.
    #[must_use]
    pub fn thresholds(&self) -> [f64; 12] {
        [
            self.jumbo_extra_large,
            self.jumbo_large,
            self.jumbo_normal,
            self.jumbo_small,
            self.standard_extra_large,
            self.standard_large,
            self.standard_normal,
            self.standard_small,
            self.compact_extra_large,
            self.compact_large,
            self.compact_normal,
            self.compact_small,
        ]
    }
}

impl TryFrom<GranularBreakpoints> for BreakpointTable<GranularBreakpoint> {
    type Error = ConfigError;

    fn try_from(bp: GranularBreakpoints) -> Result<Self> {
        BreakpointTable::new(&bp.thresholds())
    }
}

impl From<&BreakpointTable<GranularBreakpoint>> for GranularBreakpoints {
    fn from(table: &BreakpointTable<GranularBreakpoint>) -> Self {
        let t = |c| table.threshold(c);
        use GranularBreakpoint as G;
        Self {
            jumbo_extra_large: t(G::JumboExtraLarge),
            jumbo_large: t(G::JumboLarge),
            jumbo_normal: t(G::JumboNormal),
            jumbo_small: t(G::JumboSmall),
            standard_extra_large: t(G::StandardExtraLarge),
            standard_large: t(G::StandardLarge),
            standard_normal: t(G::StandardNormal),
            standard_small: t(G::StandardSmall),
            compact_extra_large: t(G::CompactExtraLarge),
            compact_large: t(G::CompactLarge),
            compact_normal: t(G::CompactNormal),
            compact_small: t(G::CompactSmall),
        }
    }
}

/// Root-level responsive configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawResponsiveConfig")]
pub struct ResponsiveConfig {
    /// Thresholds for [`Breakpoint`].
    pub standard: StandardBreakpoints,
    /// Thresholds for [`GranularBreakpoint`].
    pub granular: GranularBreakpoints,
    /// Classify by the shorter of width and height instead of width.
    pub shortest_side: bool,
    /// Forwarded to render callbacks; builders do not interpret it.
    pub animate: bool,
}

impl ResponsiveConfig {
    /// Validated standard table.
    pub fn standard_table(&self) -> Result<BreakpointTable<Breakpoint>> {
        self.standard.try_into()
    }

    /// Validated granular table.
    pub fn granular_table(&self) -> Result<BreakpointTable<GranularBreakpoint>> {
        self.granular.try_into()
    }

    /// Check both threshold sets.
    pub fn validate(&self) -> Result<()> {
        self.standard_table()?;
        self.granular_table()?;
        Ok(())
    }
}

/// Unvalidated mirror of [`ResponsiveConfig`] used during deserialization.
#[derive(Deserialize)]
#[serde(default)]
struct RawResponsiveConfig {
    standard: StandardBreakpoints,
    granular: GranularBreakpoints,
    shortest_side: bool,
    animate: bool,
}

impl Default for RawResponsiveConfig {
    fn default() -> Self {
        let d = ResponsiveConfig::default();
        Self {
            standard: d.standard,
            granular: d.granular,
            shortest_side: d.shortest_side,
            animate: d.animate,
        }
    }
}

impl TryFrom<RawResponsiveConfig> for ResponsiveConfig {
    type Error = ConfigError;

    fn try_from(raw: RawResponsiveConfig) -> Result<Self> {
        let config = Self {
            standard: raw.standard,
            granular: raw.granular,
            shortest_side: raw.shortest_side,
            animate: raw.animate,
        };
        config.validate()?;
        Ok(config)
    }
}
