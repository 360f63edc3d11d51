//! Drag handles on the crop overlay.
//!
//! A drag starts on exactly one handle: the region body (move), one of four
//! corners (two-axis resize), or one of four edges (single-axis resize).

#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
use num_traits::Float;

use crate::coords::PercentPoint;
use crate::region::CropRegion;

/// Corner of the crop region.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// All four corners, clockwise from top-left.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
    ];

    /// The vertical edge this corner sits on (`Left` or `Right`).
    pub const fn horizontal(self) -> Edge {
        match self {
            Self::TopLeft | Self::BottomLeft => Edge::Left,
            Self::TopRight | Self::BottomRight => Edge::Right,
        }
    }

    /// The horizontal edge this corner sits on (`Top` or `Bottom`).
    pub const fn vertical(self) -> Edge {
        match self {
            Self::TopLeft | Self::TopRight => Edge::Top,
            Self::BottomLeft | Self::BottomRight => Edge::Bottom,
        }
    }

    /// Position of this corner on `region`.
    pub fn point(self, region: &CropRegion) -> PercentPoint {
        let x = match self.horizontal() {
            Edge::Left => region.x,
            _ => region.right(),
        };
        let y = match self.vertical() {
            Edge::Top => region.y,
            _ => region.bottom(),
        };
        PercentPoint::new(x, y)
    }
}

/// Edge of the crop region.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    /// All four edges.
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// Whether this edge moves along the x axis.
    pub const fn is_horizontal_axis(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// What a drag is attached to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Handle {
    /// The region body: translate without resizing.
    Move,
    /// A corner: resize on both axes.
    Corner(Corner),
    /// An edge: resize on one axis.
    Edge(Edge),
}

impl Handle {
    /// Find the handle under `point`.
    ///
    /// Corners are tested first, then edges (only between their corners),
    /// then the body. `tolerance` is the grab distance in percent; it is
    /// measured per axis, so corners have square hot zones.
    pub fn hit_test(point: PercentPoint, region: &CropRegion, tolerance: f64) -> Option<Self> {
        let near = |a: f64, b: f64| (a - b).abs() < tolerance;

        for corner in Corner::ALL {
            let c = corner.point(region);
            if near(point.x, c.x) && near(point.y, c.y) {
                return Some(Self::Corner(corner));
            }
        }

        let within_x = point.x > region.x && point.x < region.right();
        let within_y = point.y > region.y && point.y < region.bottom();
        if within_y && near(point.x, region.x) {
            return Some(Self::Edge(Edge::Left));
        }
        if within_y && near(point.x, region.right()) {
            return Some(Self::Edge(Edge::Right));
        }
        if within_x && near(point.y, region.y) {
            return Some(Self::Edge(Edge::Top));
        }
        if within_x && near(point.y, region.bottom()) {
            return Some(Self::Edge(Edge::Bottom));
        }

        if region.contains(point.x, point.y) {
            return Some(Self::Move);
        }
        None
    }

    /// Whether dragging this handle changes the region's size.
    pub const fn is_resize(self) -> bool {
        !matches!(self, Self::Move)
    }
}
