use image::{Rgba, RgbaImage};

use crate::foundation::math::{NoiseStream, clamp_u8};

/// Largest per-channel deviation of the paper texture.
pub const PAPER_NOISE: i32 = 3;

/// Fresh opaque white frame. With `noise`, every channel gets an independent offset in
/// `[-3, 3]` for a paper-like texture.
pub fn background(width: u32, height: u32, noise: Option<&mut NoiseStream>) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]));
    if let Some(noise) = noise {
        for px in img.pixels_mut() {
            for c in 0..3 {
                let v = i32::from(px[c]) + noise.uniform_i32(-PAPER_NOISE, PAPER_NOISE);
                px[c] = clamp_u8(f64::from(v));
            }
        }
    }
    img
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
