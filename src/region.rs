//! Percentage-space crop rectangle and its domain invariants.
//!
//! A [`CropRegion`] describes the selected area as fractions (0–100) of the
//! container the image is displayed in, decoupled from pixel resolution.
//! Every public operation in this crate returns a region that satisfies:
//!
//! - `0 ≤ x`, `0 ≤ y`
//! - `x + width ≤ 100`, `y + height ≤ 100`
//! - `width ≥ MIN_SIZE`, `height ≥ MIN_SIZE`
//!
//! # Example
//!
//! ```
//! use zencrop::{Anchor, CropRegion};
//!
//! let region = CropRegion::new(-20.0, 30.0, 150.0, 50.0).normalized();
//! assert_eq!(region, CropRegion::new(0.0, 30.0, 100.0, 50.0));
//!
//! let corner = CropRegion::new(10.0, 10.0, 40.0, 40.0).anchored(Anchor::BottomRight);
//! assert_eq!(corner, CropRegion::new(60.0, 60.0, 40.0, 40.0));
//! ```

#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
use num_traits::Float;

/// Smallest width or height a region may have, in percent.
pub const MIN_SIZE: f64 = 5.0;

/// Upper bound of the percentage coordinate space.
pub const EXTENT: f64 = 100.0;

/// Crop rectangle in percentage coordinates of the container.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CropRegion {
    /// Left edge, percent of container width.
    pub x: f64,
    /// Top edge, percent of container height.
    pub y: f64,
    /// Width, percent of container width.
    pub width: f64,
    /// Height, percent of container height.
    pub height: f64,
}

impl Default for CropRegion {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl CropRegion {
    /// Region used for a freshly loaded image or after a reset: 10% inset on every side.
    pub const DEFAULT: Self = Self::new(10.0, 10.0, 80.0, 80.0);

    /// Region covering the whole container.
    pub const FULL: Self = Self::new(0.0, 0.0, EXTENT, EXTENT);

    /// Create a region without validating it. See [`normalized`](Self::normalized).
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (`x + width`).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// `width / height` in percentage units.
    pub fn ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Whether the region satisfies every domain invariant.
    pub fn is_valid(&self) -> bool {
        self.x >= 0.0
            && self.y >= 0.0
            && self.width >= MIN_SIZE
            && self.height >= MIN_SIZE
            && self.right() <= EXTENT
            && self.bottom() <= EXTENT
    }

    /// Whether the region covers the full container.
    pub fn is_full(&self) -> bool {
        *self == Self::FULL
    }

    /// Whether `(px, py)` lies inside the region (edges inclusive).
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px <= self.right() && py >= self.y && py <= self.bottom()
    }

    /// Clamp into the domain invariants.
    ///
    /// Size is clamped first to `MIN_SIZE..=100`, then the origin is clamped
    /// so the far edge stays inside the container. NaN components collapse to
    /// the upper bound of their range.
    pub fn normalized(self) -> Self {
        let width = clamp(self.width, MIN_SIZE, EXTENT);
        let height = clamp(self.height, MIN_SIZE, EXTENT);
        Self {
            x: clamp(self.x, 0.0, EXTENT - width),
            y: clamp(self.y, 0.0, EXTENT - height),
            width,
            height,
        }
    }

    /// Keep the size, move the region to `anchor` within the container.
    pub fn anchored(self, anchor: Anchor) -> Self {
        let r = self.normalized();
        let (fx, fy) = anchor.fractions();
        Self {
            x: (EXTENT - r.width) * fx,
            y: (EXTENT - r.height) * fy,
            ..r
        }
    }

    /// Whole-percent values, for display.
    pub fn rounded(&self) -> Self {
        Self {
            x: self.x.round(),
            y: self.y.round(),
            width: self.width.round(),
            height: self.height.round(),
        }
    }
}

/// Named placement of a region within the container.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Anchor {
    #[default]
    Center,
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Anchor {
    /// Every anchor, row by row from the top-left.
    pub const ALL: [Self; 9] = [
        Self::TopLeft,
        Self::Top,
        Self::TopRight,
        Self::Left,
        Self::Center,
        Self::Right,
        Self::BottomLeft,
        Self::Bottom,
        Self::BottomRight,
    ];

    /// Horizontal and vertical position as fractions of the free space.
    /// `(0.0, 0.0)` = top-left, `(1.0, 1.0)` = bottom-right.
    pub const fn fractions(self) -> (f64, f64) {
        match self {
            Self::Center => (0.5, 0.5),
            Self::Top => (0.5, 0.0),
            Self::Bottom => (0.5, 1.0),
            Self::Left => (0.0, 0.5),
            Self::Right => (1.0, 0.5),
            Self::TopLeft => (0.0, 0.0),
            Self::TopRight => (1.0, 0.0),
            Self::BottomLeft => (0.0, 1.0),
            Self::BottomRight => (1.0, 1.0),
        }
    }
}

/// Clamp where the lower bound wins when the bounds cross.
///
/// `f64::clamp` panics on `lo > hi`; regions supplied from outside can
/// produce that (e.g. `100 - width` with `width > 100`).
pub(crate) fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    v.min(hi).max(lo)
}
