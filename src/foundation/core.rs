use image::RgbaImage;

use crate::foundation::error::{ToonError, ToonResult};

pub use kurbo::{Affine, BezPath, Point, Vec2};

/// Axis-aligned integer rectangle in source-image pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rect spanning a whole `width x height` image.
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    pub fn right(self) -> u32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(self) -> u32 {
        self.y.saturating_add(self.height)
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn min_side(self) -> u32 {
        self.width.min(self.height)
    }

    pub fn center(self) -> Point {
        Point::new(
            f64::from(self.x) + f64::from(self.width) / 2.0,
            f64::from(self.y) + f64::from(self.height) / 2.0,
        )
    }

    /// Shrink the rect so it lies inside a `width x height` image.
    pub fn clamp_to(self, width: u32, height: u32) -> Self {
        if self.fits_within(width, height) {
            return self;
        }
        let x = self.x.min(width);
        let y = self.y.min(height);
        Self {
            x,
            y,
            width: self.right().min(width) - x,
            height: self.bottom().min(height) - y,
        }
    }

    /// Grow by `pad` on every side, saturating at the image edges.
    pub fn pad(self, pad: u32, width: u32, height: u32) -> Self {
        let x = self.x.saturating_sub(pad);
        let y = self.y.saturating_sub(pad);
        let right = self.right().saturating_add(pad).min(width);
        let bottom = self.bottom().saturating_add(pad).min(height);
        Self {
            x,
            y,
            width: right.saturating_sub(x),
            height: bottom.saturating_sub(y),
        }
    }

    pub fn fits_within(self, width: u32, height: u32) -> bool {
        self.right() <= width && self.bottom() <= height
    }

    pub fn contains(self, p: Point) -> bool {
        p.x >= f64::from(self.x)
            && p.y >= f64::from(self.y)
            && p.x <= f64::from(self.right())
            && p.y <= f64::from(self.bottom())
    }
}

/// Circle in absolute image coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }
}

/// Ordered, append-only list of equally sized frames.
#[derive(Clone, Debug, Default)]
pub struct FrameSequence {
    frames: Vec<RgbaImage>,
}

impl FrameSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            frames: Vec::with_capacity(n),
        }
    }

    /// Append a frame; its size must match the frames already present.
    pub fn push(&mut self, frame: RgbaImage) -> ToonResult<()> {
        if let Some((w, h)) = self.dimensions()
            && frame.dimensions() != (w, h)
        {
            return Err(ToonError::validation(format!(
                "frame size {}x{} does not match sequence size {w}x{h}",
                frame.width(),
                frame.height()
            )));
        }
        self.frames.push(frame);
        Ok(())
    }

    /// Move every frame of `other` to the end of this sequence.
    pub fn append(&mut self, other: FrameSequence) -> ToonResult<()> {
        for frame in other.into_frames() {
            self.push(frame)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.frames.first().map(RgbaImage::dimensions)
    }

    pub fn frames(&self) -> &[RgbaImage] {
        &self.frames
    }

    pub fn frames_mut(&mut self) -> &mut [RgbaImage] {
        &mut self.frames
    }

    pub fn into_frames(self) -> Vec<RgbaImage> {
        self.frames
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
