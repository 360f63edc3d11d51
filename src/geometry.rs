//! Crop region geometry: turn a pointer delta on a handle into a new region.
//!
//! [`apply`] is pure and total. It always starts from the region captured at
//! drag start and the full delta since then, so repeated calls during a drag
//! never accumulate rounding.
//!
//! Per-axis rules, with `d` the pointer delta on that axis:
//!
//! ```text
//!   far edge (Right / Bottom)    size = clamp(size + d, MIN_SIZE, 100 - pos)
//!                                pos unchanged
//!
//!   near edge (Left / Top)       size = max(MIN_SIZE, size - d)
//!                                pos  = clamp(pos + d, 0, 100 - size)
//! ```
//!
//! Corners apply both axes, then the aspect lock if one is set. Edges apply
//! one axis and never consult the aspect lock.
//!
//! # Example
//!
//! ```
//! use zencrop::{Corner, CropRegion, Handle, geometry};
//!
//! let origin = CropRegion::new(50.0, 50.0, 40.0, 40.0);
//! let r = geometry::apply(origin, (60.0, 60.0), Handle::Corner(Corner::BottomRight), None);
//! assert_eq!(r, CropRegion::new(50.0, 50.0, 50.0, 50.0));
//! ```

use crate::aspect::{self, AspectRatio, Axis};
use crate::handle::{Corner, Edge, Handle};
use crate::region::{CropRegion, EXTENT, MIN_SIZE, clamp};

/// Compute the region after dragging `handle` by `delta` from `origin`.
///
/// `delta` is in percentage space. The result satisfies every region invariant.
pub fn apply(
    origin: CropRegion,
    delta: (f64, f64),
    handle: Handle,
    aspect: Option<AspectRatio>,
) -> CropRegion {
    let (dx, dy) = delta;
    let region = match handle {
        Handle::Move => translate(origin, dx, dy),
        Handle::Corner(corner) => resize_corner(origin, dx, dy, corner, aspect),
        Handle::Edge(edge) => resize_edge(origin, dx, dy, edge),
    };
    region.normalized()
}

fn translate(origin: CropRegion, dx: f64, dy: f64) -> CropRegion {
    CropRegion {
        x: clamp(origin.x + dx, 0.0, EXTENT - origin.width),
        y: clamp(origin.y + dy, 0.0, EXTENT - origin.height),
        ..origin
    }
}

fn resize_corner(
    origin: CropRegion,
    dx: f64,
    dy: f64,
    corner: Corner,
    aspect: Option<AspectRatio>,
) -> CropRegion {
    let r = resize_edge(origin, dx, dy, corner.horizontal());
    let r = resize_edge(r, dx, dy, corner.vertical());
    match aspect {
        // Every corner touches Left or Right, so width always drives.
        Some(ratio) => aspect::correct(r, Axis::Width, ratio),
        None => r,
    }
}

/// Move one edge. Only the fields of that edge's axis change.
fn resize_edge(region: CropRegion, dx: f64, dy: f64, edge: Edge) -> CropRegion {
    let mut r = region;
    match edge {
        Edge::Right => {
            r.width = clamp(r.width + dx, MIN_SIZE, EXTENT - r.x);
        }
        Edge::Bottom => {
            r.height = clamp(r.height + dy, MIN_SIZE, EXTENT - r.y);
        }
        Edge::Left => {
            // Width first, so x is derived against the new width.
            r.width = (r.width - dx).max(MIN_SIZE);
            r.x = clamp(region.x + dx, 0.0, EXTENT - r.width);
        }
        Edge::Top => {
            r.height = (r.height - dy).max(MIN_SIZE);
            r.y = clamp(region.y + dy, 0.0, EXTENT - r.height);
        }
    }
    r
}
