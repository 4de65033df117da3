//! Cover-fit resize policy.
//!
//! The camera keeps a fixed vertical range of `[-1, 1]` and a horizontal range
//! of `[-aspect, aspect]`. The unit quad carrying the image is scaled so it
//! fills that rectangle completely while keeping the image's intrinsic aspect
//! ratio, cropping whatever overflows.

use glam::Vec2;

/// Width and height in CSS pixels (container) or texels (image).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Aspect ratio with both sides clamped to at least one unit so the result
    /// is always finite and positive.
    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width.max(1.0) / self.height.max(1.0)
    }

    /// Backing-store size in device pixels.
    #[inline]
    pub fn to_device_pixels(&self, pixel_ratio: f32) -> (u32, u32) {
        let ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio
        } else {
            1.0
        };
        let w = (self.width.max(0.0) * ratio).round() as u32;
        let h = (self.height.max(0.0) * ratio).round() as u32;
        (w.max(1), h.max(1))
    }
}

/// Orthographic projection rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraBounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl CameraBounds {
    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.left, self.right, self.top, self.bottom]
    }
}

/// Result of one resize computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoverFit {
    pub bounds: CameraBounds,
    /// Scale applied to the unit quad, already doubled into projection units.
    pub scale: Vec2,
}

impl Default for CoverFit {
    fn default() -> Self {
        cover_fit(Size::new(1.0, 1.0), None)
    }
}

impl CoverFit {
    /// How many times the quad spans the projection rectangle on each axis.
    /// Both components are `>= 1` for a valid cover fit.
    pub fn coverage(&self) -> Vec2 {
        Vec2::new(
            self.scale.x / self.bounds.width(),
            self.scale.y / self.bounds.height(),
        )
    }
}

/// Compute camera bounds and quad scale for a container and (optional) image.
///
/// Before the image has loaded its size is unknown; a square image is assumed.
pub fn cover_fit(container: Size, image: Option<Size>) -> CoverFit {
    let aspect = container.aspect();
    let image_aspect = image.map(|s| s.aspect()).unwrap_or(1.0);

    let bounds = CameraBounds {
        left: -aspect,
        right: aspect,
        top: 1.0,
        bottom: -1.0,
    };

    let (scale_x, scale_y) = if aspect > image_aspect {
        // container is wider than the image: match width, overflow vertically
        (aspect, aspect / image_aspect)
    } else {
        // container is taller: match height, overflow horizontally
        (image_aspect, 1.0)
    };

    CoverFit {
        bounds,
        // projection spans [-aspect, aspect] x [-1, 1], twice the unit quad
        scale: Vec2::new(scale_x * 2.0, scale_y * 2.0),
    }
}

/// Convert container-local CSS coordinates (origin top-left) to UV space
/// (origin bottom-left).
#[inline]
pub fn local_to_uv(local: Vec2, container: Size) -> Vec2 {
    let w = container.width.max(1.0);
    let h = container.height.max(1.0);
    Vec2::new(local.x / w, 1.0 - local.y / h)
}
