#![forbid(unsafe_code)]

//! Geometric primitives in logical pixels.

use std::fmt;

/// A width/height pair in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Width in logical pixels.
    pub width: f64,
    /// Height in logical pixels.
    pub height: f64,
}

impl Size {
    /// The zero size.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The smaller of width and height.
    #[inline]
    pub fn shortest_side(&self) -> f64 {
        self.width.min(self.height)
    }

    /// The larger of width and height.
    #[inline]
    pub fn longest_side(&self) -> f64 {
        self.width.max(self.height)
    }

    /// Orientation implied by the aspect ratio.
    ///
    /// A square size is portrait.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        if self.width > self.height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    /// Swap width and height.
    #[inline]
    pub const fn flipped(&self) -> Self {
        Self::new(self.height, self.width)
    }

    /// Check if either dimension is zero (or negative).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Scale both dimensions by `factor`.
    #[inline]
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Device orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Height is at least the width.
    #[default]
    Portrait,
    /// Width exceeds the height.
    Landscape,
}

impl Orientation {
    /// The other orientation.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Portrait => Self::Landscape,
            Self::Landscape => Self::Portrait,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Portrait => f.write_str("portrait"),
            Self::Landscape => f.write_str("landscape"),
        }
    }
}

/// Display metrics handed to render callbacks.
///
/// The logical size is what breakpoints classify; the physical size is
/// derived from the device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMetrics {
    /// Logical size of the display.
    pub logical: Size,
    /// Physical pixels per logical pixel. Always finite and positive.
    pub device_pixel_ratio: f64,
}

impl Default for ScreenMetrics {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl ScreenMetrics {
    /// Metrics for a display of the given logical size at ratio 1.0.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            logical: Size::new(width, height),
            device_pixel_ratio: 1.0,
        }
    }

    /// Set the device pixel ratio.
    ///
    /// Non-finite or non-positive ratios fall back to 1.0.
    #[must_use]
    pub fn with_device_pixel_ratio(mut self, ratio: f64) -> Self {
        self.device_pixel_ratio = sanitize_ratio(ratio);
        self
    }

    /// Size in physical pixels.
    #[must_use]
    pub fn physical_size(&self) -> Size {
        self.logical.scale(self.device_pixel_ratio)
    }

    /// Orientation of the logical size.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.logical.orientation()
    }
}

pub(crate) fn sanitize_ratio(ratio: f64) -> f64 {
    if ratio.is_finite() && ratio > 0.0 {
        ratio
    } else {
        1.0
    }
}

/// Space offered to a child by its container during layout.
///
/// Either axis may be unbounded (`f64::INFINITY`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    /// Maximum width available.
    pub max_width: f64,
    /// Maximum height available.
    pub max_height: f64,
}

impl Constraints {
    /// Constraints with both axes bounded.
    #[must_use]
    pub const fn tight(width: f64, height: f64) -> Self {
        Self {
            max_width: width,
            max_height: height,
        }
    }

    /// Constraints with no bound on either axis.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::tight(f64::INFINITY, f64::INFINITY)
    }

    /// Whether the width axis is bounded.
    #[must_use]
    pub fn has_bounded_width(&self) -> bool {
        self.max_width.is_finite()
    }

    /// Whether the height axis is bounded.
    #[must_use]
    pub fn has_bounded_height(&self) -> bool {
        self.max_height.is_finite()
    }

    /// The largest size these constraints allow.
    ///
    /// Unbounded or invalid axes collapse to zero.
    #[must_use]
    pub fn biggest(&self) -> Size {
        Size::new(finite_or_zero(self.max_width), finite_or_zero(self.max_height))
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}
