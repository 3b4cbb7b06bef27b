//! Binary morphology over 0/255 masks.

use image::{GrayImage, Luma};

/// Structuring element as a list of offsets around the anchor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Kernel {
    offsets: Vec<(i32, i32)>,
}

impl Kernel {
    /// 5x5 elliptical element (rows `00100 / 11111 / 11111 / 11111 / 00100`).
    pub fn ellipse5() -> Self {
        const ROWS: [&str; 5] = ["00100", "11111", "11111", "11111", "00100"];
        let mut offsets = Vec::with_capacity(21);
        for (dy, row) in ROWS.iter().enumerate() {
            for (dx, cell) in row.bytes().enumerate() {
                if cell == b'1' {
                    offsets.push((dx as i32 - 2, dy as i32 - 2));
                }
            }
        }
        Self { offsets }
    }

    /// `size x size` square anchored at its center (top-left of center for even sizes).
    pub fn square(size: u32) -> Self {
        let size = size.max(1) as i32;
        let lo = -(size - 1) / 2 - (size - 1) % 2;
        let mut offsets = Vec::with_capacity((size * size) as usize);
        for dy in lo..lo + size {
            for dx in lo..lo + size {
                offsets.push((dx, dy));
            }
        }
        Self { offsets }
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

/// A pixel is set when any kernel sample inside the image is set.
pub fn dilate(mask: &GrayImage, kernel: &Kernel) -> GrayImage {
    apply(mask, kernel, false)
}

/// A pixel stays set only when every kernel sample inside the image is set.
pub fn erode(mask: &GrayImage, kernel: &Kernel) -> GrayImage {
    apply(mask, kernel, true)
}

/// Dilate then erode; fills pinholes and narrow gaps.
pub fn close(mask: &GrayImage, kernel: &Kernel) -> GrayImage {
    erode(&dilate(mask, kernel), kernel)
}

/// Erode then dilate; drops specks smaller than the kernel.
pub fn open(mask: &GrayImage, kernel: &Kernel) -> GrayImage {
    dilate(&erode(mask, kernel), kernel)
}

fn apply(mask: &GrayImage, kernel: &Kernel, require_all: bool) -> GrayImage {
    let (w, h) = mask.dimensions();
    let (wi, hi) = (w as i32, h as i32);
    GrayImage::from_fn(w, h, |x, y| {
        let mut samples = kernel.offsets.iter().filter_map(|&(dx, dy)| {
            let sx = x as i32 + dx;
            let sy = y as i32 + dy;
            (sx >= 0 && sy >= 0 && sx < wi && sy < hi)
                .then(|| mask.get_pixel(sx as u32, sy as u32)[0] > 0)
        });
        let on = if require_all {
            samples.all(|v| v)
        } else {
            samples.any(|v| v)
        };
        Luma([if on { 255 } else { 0 }])
    })
}

#[cfg(test)]
#[path = "../../tests/unit/detect/morph.rs"]
mod tests;
