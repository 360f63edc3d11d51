//! The crop controller: owns the current region and sequences every operation.
//!
//! A [`Cropper`] sits between the overlay host and the geometry engine. The
//! host reports layout ([`set_container`](Cropper::set_container)), the
//! image's natural size ([`load_image`](Cropper::load_image)), and raw pointer
//! events; the cropper turns them into committed regions and reports each one
//! to its [`CropListener`].
//!
//! # Example
//!
//! ```
//! use zencrop::coords::{ContainerRect, Size};
//! use zencrop::{Corner, CropOptions, CropRegion, Cropper, Handle};
//!
//! let mut last = None;
//! let mut cropper = Cropper::new(CropOptions::new(), (), |r: &CropRegion| last = Some(*r));
//! cropper.set_container(ContainerRect::new(0.0, 0.0, 1000.0, 500.0));
//! cropper.load_image(Size::new(4000, 2000)).unwrap();
//!
//! // Drag the bottom-right corner from (900, 450) to (950, 475).
//! cropper.pointer_down(Handle::Corner(Corner::BottomRight), 900.0, 450.0);
//! cropper.pointer_move(950.0, 475.0);
//! cropper.pointer_up();
//!
//! assert_eq!(cropper.region(), CropRegion::new(10.0, 10.0, 85.0, 85.0));
//! drop(cropper);
//! assert_eq!(last, Some(CropRegion::new(10.0, 10.0, 85.0, 85.0)));
//! ```

use core::fmt;

use crate::aspect::{self, AspectRatio};
use crate::coords::{self, ContainerRect, Rect, Size};
use crate::drag::{DragSession, PointerSource};
use crate::handle::Handle;
use crate::region::{Anchor, CropRegion};

/// Receives every committed region.
pub trait CropListener {
    /// Called after the current region changed.
    fn crop_changed(&mut self, region: &CropRegion);
}

impl<F: FnMut(&CropRegion)> CropListener for F {
    fn crop_changed(&mut self, region: &CropRegion) {
        self(region);
    }
}

/// Error from a [`Cropper`] operation that needs image dimensions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CropError {
    /// No image has been loaded yet.
    #[error("no image loaded")]
    NoImage,
    /// The image has zero width or height.
    #[error("image has zero width or height")]
    ZeroImageDimension,
}

/// Initial state for a [`Cropper`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CropOptions {
    pub initial_crop: CropRegion,
    pub aspect_ratio: Option<AspectRatio>,
}

impl CropOptions {
    /// Default region, freeform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from `region` instead of [`CropRegion::DEFAULT`].
    /// It is normalized into the region invariants on construction.
    pub fn initial_crop(mut self, region: CropRegion) -> Self {
        self.initial_crop = region;
        self
    }

    /// Lock corner drags to `ratio`.
    pub fn aspect_ratio(mut self, ratio: Option<AspectRatio>) -> Self {
        self.aspect_ratio = ratio;
        self
    }
}

/// Raw pointer input from the host, in device coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed on a handle.
    Down { handle: Handle, x: f64, y: f64 },
    /// Pointer moved.
    Move { x: f64, y: f64 },
    /// Pointer released.
    Up,
    /// Gesture aborted by the host (cancel, lost capture, teardown).
    Cancel,
}

/// Owns the crop region, aspect lock, and drag session for one overlay.
pub struct Cropper<S: PointerSource, L: CropListener> {
    region: CropRegion,
    aspect: Option<AspectRatio>,
    image: Option<Size>,
    container: ContainerRect,
    drag: DragSession<S>,
    listener: L,
}

impl<S: PointerSource, L: CropListener> Cropper<S, L> {
    /// Create a cropper. The listener is not called for the initial region.
    pub fn new(options: CropOptions, source: S, listener: L) -> Self {
        Self {
            region: options.initial_crop.normalized(),
            aspect: options.aspect_ratio,
            image: None,
            container: ContainerRect::default(),
            drag: DragSession::new(source),
            listener,
        }
    }

    /// Current region.
    pub fn region(&self) -> CropRegion {
        self.region
    }

    /// Active aspect lock.
    pub fn aspect_ratio(&self) -> Option<AspectRatio> {
        self.aspect
    }

    /// Natural size of the loaded image.
    pub fn image_size(&self) -> Option<Size> {
        self.image
    }

    /// Last measured container.
    pub fn container(&self) -> ContainerRect {
        self.container
    }

    /// The drag session.
    pub fn drag(&self) -> &DragSession<S> {
        &self.drag
    }

    /// Returns `true` while a drag is active.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// The change listener.
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Update the container's measured box. Takes effect on the next pointer event.
    pub fn set_container(&mut self, rect: ContainerRect) {
        self.container = rect;
    }

    /// A new image was loaded: start over from the default region.
    pub fn load_image(&mut self, size: Size) -> Result<CropRegion, CropError> {
        if size.is_empty() {
            return Err(CropError::ZeroImageDimension);
        }
        self.image = Some(size);
        #[cfg(feature = "tracing")]
        tracing::debug!(width = size.width, height = size.height, "image loaded");
        Ok(self.replace(CropRegion::DEFAULT))
    }

    /// Start dragging `handle`. Ignored (returns `false`) while another drag is active.
    pub fn pointer_down(&mut self, handle: Handle, x: f64, y: f64) -> bool {
        let anchor = coords::to_percent(x, y, &self.container);
        let started = self.drag.begin(self.region, handle, anchor);
        #[cfg(feature = "tracing")]
        {
            if started {
                tracing::debug!(?handle, x = anchor.x, y = anchor.y, "drag started");
            } else {
                tracing::debug!(?handle, "pointer down ignored, drag already active");
            }
        }
        started
    }

    /// Apply a pointer move to the active drag and commit the result.
    /// Returns `None` when idle.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<CropRegion> {
        let pointer = coords::to_percent(x, y, &self.container);
        let region = self.drag.update(pointer, self.aspect)?;
        #[cfg(feature = "tracing")]
        tracing::trace!(?region, "drag update");
        Some(self.commit(region))
    }

    /// End the active drag. The last committed region stays.
    pub fn pointer_up(&mut self) -> bool {
        self.end_drag()
    }

    /// Abort the active drag (cancel, lost capture, host teardown).
    /// The last committed region stays.
    pub fn pointer_cancel(&mut self) -> bool {
        self.end_drag()
    }

    /// Route a host event. Returns the committed region for moves that changed it.
    pub fn handle_event(&mut self, event: PointerEvent) -> Option<CropRegion> {
        match event {
            PointerEvent::Down { handle, x, y } => {
                self.pointer_down(handle, x, y);
                None
            }
            PointerEvent::Move { x, y } => self.pointer_move(x, y),
            PointerEvent::Up => {
                self.pointer_up();
                None
            }
            PointerEvent::Cancel => {
                self.pointer_cancel();
                None
            }
        }
    }

    /// Back to [`CropRegion::DEFAULT`].
    ///
    /// This and every other command below ends an active drag; the pointer
    /// has to go down again to continue editing.
    pub fn reset_crop(&mut self) -> CropRegion {
        #[cfg(feature = "tracing")]
        tracing::debug!("crop reset");
        self.replace(CropRegion::DEFAULT)
    }

    /// Select the whole image.
    pub fn fit_to_image(&mut self) -> CropRegion {
        #[cfg(feature = "tracing")]
        tracing::debug!("crop fit to image");
        self.replace(CropRegion::FULL)
    }

    /// Set or clear the aspect lock.
    ///
    /// A new ratio is applied to the current region immediately, even
    /// mid-drag. Clearing leaves the region as it is. Either way the listener
    /// is notified.
    pub fn change_aspect_ratio(&mut self, ratio: Option<AspectRatio>) -> CropRegion {
        self.aspect = ratio;
        #[cfg(feature = "tracing")]
        tracing::debug!(ratio = ?ratio, "aspect ratio changed");
        let region = match ratio {
            Some(ratio) => aspect::conform(self.region, ratio),
            None => self.region,
        };
        self.replace(region)
    }

    /// Keep the size, move the region to `anchor`.
    pub fn align(&mut self, anchor: Anchor) -> CropRegion {
        #[cfg(feature = "tracing")]
        tracing::debug!(?anchor, "crop aligned");
        self.replace(self.region.anchored(anchor))
    }

    /// Set the region from exact pixel coordinates on the loaded image.
    pub fn set_pixel_crop(&mut self, rect: Rect) -> Result<CropRegion, CropError> {
        let image = self.image.ok_or(CropError::NoImage)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(?rect, "pixel crop set");
        Ok(self.replace(coords::from_pixels(rect, image)))
    }

    /// Current region on the loaded image's pixel grid.
    pub fn pixel_crop(&self) -> Option<Rect> {
        self.image.map(|image| coords::to_pixels(&self.region, image))
    }

    fn end_drag(&mut self) -> bool {
        let ended = self.drag.end().is_some();
        #[cfg(feature = "tracing")]
        {
            if ended {
                tracing::debug!(region = ?self.region, "drag ended");
            }
        }
        ended
    }

    /// Commit a region set by a command rather than by the pointer.
    /// Ends any active drag first.
    fn replace(&mut self, region: CropRegion) -> CropRegion {
        self.end_drag();
        self.commit(region)
    }

    fn commit(&mut self, region: CropRegion) -> CropRegion {
        self.region = region;
        self.listener.crop_changed(&region);
        region
    }
}

impl<S: PointerSource, L: CropListener> fmt::Debug for Cropper<S, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cropper")
            .field("region", &self.region)
            .field("aspect", &self.aspect)
            .field("image", &self.image)
            .field("container", &self.container)
            .field("dragging", &self.drag.is_dragging())
            .finish_non_exhaustive()
    }
}
