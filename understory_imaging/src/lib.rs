// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_imaging --heading-base-level=0

//! Understory Imaging: backend-agnostic render-target IR and backend traits.
//!
//! This crate defines the small set of operations a retained widget needs to
//! cache its rendering in off-screen render targets and compose them onto the
//! screen:
//!
//! - **Resources**: opaque [`TargetId`] handles for fixed-size render targets,
//!   whose lifetimes are managed via [`ResourceBackend`].
//! - **Imaging operations**: [`StateOp`] (redirect output, clip) and
//!   [`DrawOp`] (fill, copy), combined into [`ImagingOp`] for logging and
//!   replay.
//! - **Backends**: [`ImagingBackend`] accepts imaging ops. Concrete renderers
//!   map them onto their own texture/render-target APIs.
//!
//! All geometry is expressed in integer device pixels via [`RectI`]. While a
//! render target is active (see [`StateOp::BeginTarget`]) coordinates are
//! relative to that target's top-left corner; otherwise they are screen
//! coordinates.
//!
//! # Example
//!
//! ```ignore
//! # use understory_imaging::*;
//! # use peniko::Color;
//! let mut backend = MyBackend::default();
//!
//! let target = backend.create_target(TargetDesc::new(200, 50));
//! backend.with_target(target, |b| {
//!     b.fill_rect(RectI::from_origin_size(0, 0, 200, 50), Color::WHITE);
//! });
//! backend.copy_target(target, RectI::from_origin_size(10, 10, 200, 50));
//! backend.destroy_target(target);
//! ```

#![no_std]

use peniko::Color;
pub use peniko::ImageFormat;

/// Identifier for a render-target resource.
///
/// This is a small, opaque handle that is stable for the lifetime of the
/// target. Targets are expected to be reused across many frames until the
/// owner destroys them, typically because the size it needs has changed.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TargetId(pub u32);

/// An axis-aligned rectangle in integer device pixels.
///
/// The rectangle is half-open: it contains `x0..x1` horizontally and `y0..y1`
/// vertically. A rectangle whose max corner does not exceed its min corner
/// is empty.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RectI {
    /// Minimum X coordinate.
    pub x0: i32,
    /// Minimum Y coordinate.
    pub y0: i32,
    /// Maximum X coordinate (exclusive).
    pub x1: i32,
    /// Maximum Y coordinate (exclusive).
    pub y1: i32,
}

impl RectI {
    /// The empty rectangle at the origin.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create a new rectangle from min/max corners.
    #[inline]
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Create a rectangle from its top-left corner and size.
    #[inline]
    pub const fn from_origin_size(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// Width of the rectangle, zero when empty.
    #[inline]
    pub fn width(self) -> i32 {
        (self.x1 - self.x0).max(0)
    }

    /// Height of the rectangle, zero when empty.
    #[inline]
    pub fn height(self) -> i32 {
        (self.y1 - self.y0).max(0)
    }

    /// Returns `true` if the rectangle covers no pixels.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.x1 <= self.x0 || self.y1 <= self.y0
    }

    /// Returns the overlap of two rectangles.
    ///
    /// The result may be empty.
    #[inline]
    pub fn intersect(self, other: Self) -> Self {
        Self::new(
            self.x0.max(other.x0),
            self.y0.max(other.y0),
            self.x1.min(other.x1),
            self.y1.min(other.y1),
        )
    }

    /// Returns `true` if the pixel at `(x, y)` lies inside the rectangle.
    #[inline]
    pub fn contains(self, x: i32, y: i32) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }

    /// Returns `true` if the point lies inside the rectangle.
    ///
    /// Fractional coordinates are floored to the pixel that contains them.
    #[inline]
    pub fn contains_point(self, pt: kurbo::Point) -> bool {
        pt.x >= f64::from(self.x0)
            && pt.x < f64::from(self.x1)
            && pt.y >= f64::from(self.y0)
            && pt.y < f64::from(self.y1)
    }

    /// Move the rectangle by the given offset.
    #[inline]
    pub const fn translate(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x0 + dx, self.y0 + dy, self.x1 + dx, self.y1 + dy)
    }

    /// Convert to kurbo's rectangle type.
    #[inline]
    pub fn to_kurbo(self) -> kurbo::Rect {
        kurbo::Rect::new(
            f64::from(self.x0),
            f64::from(self.y0),
            f64::from(self.x1),
            f64::from(self.y1),
        )
    }
}

/// Description of a render-target resource.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TargetDesc {
    /// Target width in pixels.
    pub width: u32,
    /// Target height in pixels.
    pub height: u32,
    /// Pixel format of the backing texture.
    pub format: ImageFormat,
    /// Whether copies out of this target should replace destination pixels
    /// instead of blending with them.
    pub opaque: bool,
}

impl TargetDesc {
    /// An opaque RGBA8 target of the given size.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            format: ImageFormat::Rgba8,
            opaque: true,
        }
    }
}

/// State operations that mutate the current imaging state.
#[derive(Clone, Debug, PartialEq)]
pub enum StateOp {
    /// Redirect subsequent draw operations into a render target.
    ///
    /// Targets do not nest: every `BeginTarget` must be matched by a
    /// [`StateOp::EndTarget`] before another target is begun.
    BeginTarget(TargetId),
    /// Restore output to the screen.
    EndTarget,
    /// Restrict subsequent drawing to a rectangle.
    SetClip(RectI),
    /// Remove the current clip rectangle.
    ClearClip,
}

/// Draw operations that produce pixels given the current state.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill an axis-aligned rectangle with a solid color.
    FillRect {
        /// Rectangle to fill.
        rect: RectI,
        /// Fill color.
        color: Color,
    },
    /// Copy the full contents of a render target into `dst`.
    ///
    /// `dst` is expected to have the target's size; backends are not
    /// required to scale.
    CopyTarget {
        /// Source render target.
        target: TargetId,
        /// Destination rectangle in the current coordinate space.
        dst: RectI,
    },
}

/// Unified imaging operation used by logs and replays.
#[derive(Clone, Debug, PartialEq)]
pub enum ImagingOp {
    /// State-changing operation.
    State(StateOp),
    /// Drawing operation.
    Draw(DrawOp),
}

/// Resource lifetime interface.
///
/// Implementations must ensure that a [`TargetId`] refers to the same
/// render target until [`ResourceBackend::destroy_target`] is called for it.
pub trait ResourceBackend {
    /// Create a render target.
    fn create_target(&mut self, desc: TargetDesc) -> TargetId;
    /// Destroy a previously created render target.
    fn destroy_target(&mut self, id: TargetId);
}

/// Minimal imaging backend trait.
///
/// Exposes state/draw entry points plus thin convenience wrappers so callers
/// rarely need to build ops by hand.
pub trait ImagingBackend: ResourceBackend {
    /// Apply a state operation.
    fn state(&mut self, op: StateOp);

    /// Apply a draw operation.
    fn draw(&mut self, op: DrawOp);

    /// Redirect output into `target`.
    ///
    /// This is equivalent to `self.state(StateOp::BeginTarget(target))`.
    #[inline]
    fn begin_target(&mut self, target: TargetId) {
        self.state(StateOp::BeginTarget(target));
    }

    /// Restore output to the screen.
    #[inline]
    fn end_target(&mut self) {
        self.state(StateOp::EndTarget);
    }

    /// Clip subsequent drawing to `rect`.
    #[inline]
    fn set_clip(&mut self, rect: RectI) {
        self.state(StateOp::SetClip(rect));
    }

    /// Remove the current clip.
    #[inline]
    fn clear_clip(&mut self) {
        self.state(StateOp::ClearClip);
    }

    /// Fill `rect` with `color`.
    #[inline]
    fn fill_rect(&mut self, rect: RectI, color: Color) {
        self.draw(DrawOp::FillRect { rect, color });
    }

    /// Copy `target` into `dst`.
    #[inline]
    fn copy_target(&mut self, target: TargetId, dst: RectI) {
        self.draw(DrawOp::CopyTarget { target, dst });
    }
}

/// Convenience helpers for `ImagingBackend` implementations and callers.
///
/// This is separate from [`ImagingBackend`] so that methods can accept closures and return values
/// without complicating trait object usage (`&mut dyn ImagingBackend`).
pub trait ImagingBackendExt: ImagingBackend {
    /// Run `f` with output redirected into `target`, restoring the screen afterwards.
    ///
    /// Note: if `f` panics, the target will not be ended.
    #[inline]
    fn with_target<R>(&mut self, target: TargetId, f: impl FnOnce(&mut Self) -> R) -> R {
        self.begin_target(target);
        let out = f(self);
        self.end_target();
        out
    }

    /// Run `f` with drawing clipped to `rect`, clearing the clip afterwards.
    ///
    /// Note: if `f` panics, the clip will not be cleared.
    #[inline]
    fn with_clip<R>(&mut self, rect: RectI, f: impl FnOnce(&mut Self) -> R) -> R {
        self.set_clip(rect);
        let out = f(self);
        self.clear_clip();
        out
    }
}

impl<B: ImagingBackend + ?Sized> ImagingBackendExt for B {}
