//! Interactive crop-region geometry: drag handles, aspect lock, and projection.
//!
//! Pure geometry: no pixel operations, no I/O, no allocations, `no_std` compatible.
//! The overlay host draws the image and handles, measures its container, and
//! feeds pointer events in; this crate turns them into a valid crop rectangle.
//!
//! # Modules
//!
//! - [`region`]: `CropRegion` in percentage space, invariants, anchored placement
//! - [`coords`]: Pointer → percentage conversion, percentage ↔ pixel projection
//! - [`handle`]: Move / corner / edge handles and hit testing
//! - [`aspect`]: `W:H` ratios, presets, single-pass aspect correction
//! - [`geometry`]: Region after dragging a handle by a delta
//! - [`drag`]: `Idle` / `Dragging` state machine and pointer subscription
//! - [`cropper`]: Controller owning the current region and change notifications

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod aspect;
pub mod coords;
pub mod cropper;
pub mod drag;
pub mod geometry;
pub mod handle;
pub mod region;

pub use aspect::{AspectPreset, AspectRatio, Axis, ParseAspectRatioError};
pub use coords::{ContainerRect, PercentPoint, Rect, Size};
pub use cropper::{CropError, CropListener, CropOptions, Cropper, PointerEvent};
pub use drag::{DragSession, DragSnapshot, DragState, PointerSource};
pub use handle::{Corner, Edge, Handle};
pub use region::{Anchor, CropRegion, MIN_SIZE};
