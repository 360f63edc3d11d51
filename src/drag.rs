//! Drag session: the `Idle` / `Dragging` state machine behind every gesture.
//!
//! ## Usage
//!
//! 1) On pointer-down over a handle, call [`DragSession::begin`] with the
//!    current region, the handle, and the pointer position in percent.
//! 2) On each pointer-move, call [`DragSession::update`] to get the region
//!    for the pointer's current position.
//! 3) On pointer-up, pointer-cancel, or lost capture, call [`DragSession::end`].
//!
//! While a drag is active the session holds a subscription on its
//! [`PointerSource`], so the host keeps delivering moves even when the
//! pointer leaves the overlay. The subscription is taken on `begin` and
//! released on every way out of `Dragging`, including drop.
//!
//! ## Minimal example
//!
//! ```
//! use zencrop::coords::PercentPoint;
//! use zencrop::drag::DragSession;
//! use zencrop::{CropRegion, Handle};
//!
//! let mut drag = DragSession::new(());
//! assert!(drag.begin(CropRegion::DEFAULT, Handle::Move, PercentPoint::new(50.0, 50.0)));
//!
//! let r = drag.update(PercentPoint::new(55.0, 45.0), None).unwrap();
//! assert_eq!(r, CropRegion::new(15.0, 5.0, 80.0, 80.0));
//!
//! drag.end();
//! assert!(!drag.is_dragging());
//! ```

use crate::aspect::AspectRatio;
use crate::coords::PercentPoint;
use crate::geometry;
use crate::handle::Handle;
use crate::region::CropRegion;

/// Host capability for document-wide pointer-move and pointer-up delivery.
///
/// `subscribe` is called once when a drag starts and `unsubscribe` once when
/// it ends; calls are always paired.
pub trait PointerSource {
    /// Start routing global pointer-move/up/cancel to the session.
    fn subscribe(&mut self);
    /// Stop routing global pointer events.
    fn unsubscribe(&mut self);
}

/// For hosts that deliver pointer events unconditionally.
impl PointerSource for () {
    fn subscribe(&mut self) {}
    fn unsubscribe(&mut self) {}
}

impl<S: PointerSource + ?Sized> PointerSource for &mut S {
    fn subscribe(&mut self) {
        (**self).subscribe();
    }

    fn unsubscribe(&mut self) {
        (**self).unsubscribe();
    }
}

/// State captured once at drag start.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragSnapshot {
    /// Region when the drag started. Every update recomputes from this.
    pub origin: CropRegion,
    /// Handle being dragged.
    pub handle: Handle,
    /// Pointer position at drag start, in percent.
    pub anchor: PercentPoint,
}

/// Current state of a [`DragSession`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSnapshot),
}

/// Tracks at most one active drag and its pointer subscription.
#[derive(Debug)]
pub struct DragSession<S: PointerSource> {
    state: DragState,
    source: S,
}

impl<S: PointerSource> DragSession<S> {
    /// Create an idle session over `source`.
    pub fn new(source: S) -> Self {
        Self {
            state: DragState::Idle,
            source,
        }
    }

    /// Current state.
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Snapshot of the active drag, if any.
    pub fn snapshot(&self) -> Option<&DragSnapshot> {
        match &self.state {
            DragState::Dragging(snapshot) => Some(snapshot),
            DragState::Idle => None,
        }
    }

    /// Returns `true` while a drag is active.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Returns `true` while the pointer source subscription is held,
    /// which is exactly while dragging.
    pub fn is_subscribed(&self) -> bool {
        self.is_dragging()
    }

    /// The pointer source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Start a drag. Returns `false` and changes nothing if one is already active.
    pub fn begin(&mut self, origin: CropRegion, handle: Handle, anchor: PercentPoint) -> bool {
        if self.is_dragging() {
            return false;
        }
        self.state = DragState::Dragging(DragSnapshot {
            origin,
            handle,
            anchor,
        });
        self.source.subscribe();
        true
    }

    /// Region for the pointer at `pointer`, or `None` when idle.
    ///
    /// Does not mutate the snapshot; the caller commits the result.
    pub fn update(&self, pointer: PercentPoint, aspect: Option<AspectRatio>) -> Option<CropRegion> {
        let snapshot = self.snapshot()?;
        let delta = pointer.delta_from(snapshot.anchor);
        Some(geometry::apply(snapshot.origin, delta, snapshot.handle, aspect))
    }

    /// End the active drag, releasing the subscription. Returns the discarded
    /// snapshot, or `None` if no drag was active.
    pub fn end(&mut self) -> Option<DragSnapshot> {
        match core::mem::take(&mut self.state) {
            DragState::Dragging(snapshot) => {
                self.source.unsubscribe();
                Some(snapshot)
            }
            DragState::Idle => None,
        }
    }
}

impl<S: PointerSource> Drop for DragSession<S> {
    fn drop(&mut self) {
        self.end();
    }
}
