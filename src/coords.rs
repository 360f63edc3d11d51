//! Conversions between device pointer space, percentage space, and image pixels.
//!
//! The overlay host measures the container the image is shown in and reports
//! pointer positions in device coordinates. [`to_percent`] maps those into the
//! 0–100 space the geometry engine works in. [`to_pixels`] projects a region
//! onto the image's natural pixel grid for display and for the backend that
//! performs the actual crop; it is never fed back into the engine.
//!
//! # Example
//!
//! ```
//! use zencrop::coords::{ContainerRect, Rect, Size, to_percent, to_pixels};
//! use zencrop::CropRegion;
//!
//! let container = ContainerRect::new(100.0, 50.0, 800.0, 600.0);
//! let p = to_percent(500.0, 350.0, &container);
//! assert_eq!((p.x, p.y), (50.0, 50.0));
//!
//! let px = to_pixels(&CropRegion::DEFAULT, Size::new(4000, 3000));
//! assert_eq!(px, Rect::new(400, 300, 3200, 2400));
//! ```

#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
use num_traits::Float;

use crate::region::{CropRegion, EXTENT, clamp};

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether either dimension is zero.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Pull a user-entered crop onto `image`.
    ///
    /// The origin is kept on the last pixel row or column at most, and each
    /// side keeps at least one pixel so the percentage conversion never sees
    /// an empty crop.
    pub fn fit_within(self, image: Size) -> Self {
        let x = self.x.min(image.width.saturating_sub(1));
        let y = self.y.min(image.height.saturating_sub(1));
        Self {
            x,
            y,
            width: self.width.clamp(1, (image.width - x).max(1)),
            height: self.height.clamp(1, (image.height - y).max(1)),
        }
    }

    /// Whether this rect covers the whole image.
    pub fn is_full(&self, image: Size) -> bool {
        self.x == 0 && self.y == 0 && self.width == image.width && self.height == image.height
    }
}

/// Measured bounding box of the container, in device coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ContainerRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerRect {
    /// Create a container rect.
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Whether layout has produced a usable size yet.
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Device position of a percentage point.
    pub fn to_device(&self, point: PercentPoint) -> (f64, f64) {
        (
            self.left + point.x * self.width / EXTENT,
            self.top + point.y * self.height / EXTENT,
        )
    }

    /// Device-space box `(left, top, width, height)` of a region, for drawing.
    pub fn project(&self, region: &CropRegion) -> (f64, f64, f64, f64) {
        (
            self.left + region.x * self.width / EXTENT,
            self.top + region.y * self.height / EXTENT,
            region.width * self.width / EXTENT,
            region.height * self.height / EXTENT,
        )
    }
}

/// Pointer position in percentage space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PercentPoint {
    pub x: f64,
    pub y: f64,
}

impl PercentPoint {
    /// Create a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset from `anchor` to `self`.
    pub fn delta_from(self, anchor: Self) -> (f64, f64) {
        (self.x - anchor.x, self.y - anchor.y)
    }
}

/// Map a device pointer position into percentage space, clamped to `0..=100`.
///
/// An unmeasured container (zero width or height) yields `(0, 0)`.
pub fn to_percent(pointer_x: f64, pointer_y: f64, rect: &ContainerRect) -> PercentPoint {
    if !rect.is_measured() {
        return PercentPoint::default();
    }
    PercentPoint {
        x: clamp(EXTENT * (pointer_x - rect.left) / rect.width, 0.0, EXTENT),
        y: clamp(EXTENT * (pointer_y - rect.top) / rect.height, 0.0, EXTENT),
    }
}

/// Project a region onto the image's pixel grid, rounding each component.
pub fn to_pixels(region: &CropRegion, image: Size) -> Rect {
    let px = |pct: f64, dim: u32| (pct * dim as f64 / EXTENT).round().max(0.0) as u32;
    Rect {
        x: px(region.x, image.width),
        y: px(region.y, image.height),
        width: px(region.width, image.width),
        height: px(region.height, image.height),
    }
}

/// Convert a pixel rectangle to a percentage region.
///
/// The rect is clamped to the image first, and the result is normalized into
/// the region invariants, so a rect smaller than `MIN_SIZE` percent grows.
/// An empty image yields [`CropRegion::FULL`].
pub fn from_pixels(rect: Rect, image: Size) -> CropRegion {
    if image.is_empty() {
        return CropRegion::FULL;
    }
    let r = rect.fit_within(image);
    let pct = |v: u32, dim: u32| v as f64 * EXTENT / dim as f64;
    CropRegion {
        x: pct(r.x, image.width),
        y: pct(r.y, image.height),
        width: pct(r.width, image.width),
        height: pct(r.height, image.height),
    }
    .normalized()
}
