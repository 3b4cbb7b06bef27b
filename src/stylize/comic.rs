//! Cartoon look for the base image: smoothed, posterized colors with dark ink edges.

use image::{GrayImage, RgbaImage};

use crate::{
    detect::{
        hsv::to_gray,
        morph::{self, Kernel},
    },
    foundation::{
        error::{ToonError, ToonResult},
        math::NoiseStream,
    },
    stylize::blur::gaussian_blur,
};

const SMOOTH_RADIUS: u32 = 4;
const SMOOTH_SIGMA: f32 = 2.0;
const EDGE_BLUR_RADIUS: u32 = 2;
const EDGE_BLUR_SIGMA: f32 = 1.0;
const THRESHOLD_BLOCK: u32 = 9;
const THRESHOLD_C: f64 = 2.0;
/// Edge pixels keep this fraction of their color.
const INK: f64 = 0.3;
/// Sketch ink varies by up to this much around [`INK`].
const SKETCH_SPREAD: f64 = 0.15;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StylizeMode {
    #[default]
    Comic,
    /// Comic filter with uneven, pencil-like edge darkness.
    Sketch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ComicFilter {
    pub mode: StylizeMode,
    pub edge_thickness: u32,
    pub color_levels: u32,
}

impl Default for ComicFilter {
    fn default() -> Self {
        Self {
            mode: StylizeMode::Comic,
            edge_thickness: 2,
            color_levels: 8,
        }
    }
}

impl ComicFilter {
    pub fn validate(&self) -> ToonResult<()> {
        if self.color_levels < 2 || self.color_levels > 256 {
            return Err(ToonError::validation("color_levels must be in 2..=256"));
        }
        if self.edge_thickness == 0 {
            return Err(ToonError::validation("edge_thickness must be at least 1"));
        }
        Ok(())
    }
}

/// Apply `filter` to `image`. The output has the same size; alpha is kept.
#[tracing::instrument(skip(image, noise), fields(width = image.width(), height = image.height()))]
pub fn stylize(
    image: &RgbaImage,
    filter: &ComicFilter,
    noise: &mut NoiseStream,
) -> ToonResult<RgbaImage> {
    filter.validate()?;
    let (w, h) = image.dimensions();
    let smooth = gaussian_blur(image.as_raw(), w, h, 4, SMOOTH_RADIUS, SMOOTH_SIGMA)?;
    let levels = posterize_lut(filter.color_levels);
    let edges = edge_mask(image, filter.edge_thickness)?;

    let mut out = RgbaImage::new(w, h);
    for ((dst, src), (orig, edge)) in out
        .pixels_mut()
        .zip(smooth.chunks_exact(4))
        .zip(image.pixels().zip(edges.pixels()))
    {
        let mut px = [
            levels[usize::from(src[0])],
            levels[usize::from(src[1])],
            levels[usize::from(src[2])],
            orig[3],
        ];
        if edge[0] > 0 {
            let ink = match filter.mode {
                StylizeMode::Comic => INK,
                StylizeMode::Sketch => INK + noise.uniform(-SKETCH_SPREAD, SKETCH_SPREAD),
            };
            for c in px.iter_mut().take(3) {
                *c = (f64::from(*c) * ink) as u8;
            }
        }
        dst.0 = px;
    }
    Ok(out)
}

/// Map each channel value to the nearest of `levels` evenly spaced levels.
pub fn posterize_lut(levels: u32) -> [u8; 256] {
    let divider = 255.0 / f64::from(levels.max(2) - 1);
    let mut lut = [0u8; 256];
    for (i, slot) in lut.iter_mut().enumerate() {
        *slot = ((i as f64 / divider).round() * divider) as u8;
    }
    lut
}

/// Dark lines: pixels noticeably darker than their 9x9 neighbourhood mean, dilated to
/// `thickness`.
pub fn edge_mask(image: &RgbaImage, thickness: u32) -> ToonResult<GrayImage> {
    let gray = to_gray(image);
    let (w, h) = gray.dimensions();
    let blurred = gaussian_blur(gray.as_raw(), w, h, 1, EDGE_BLUR_RADIUS, EDGE_BLUR_SIGMA)?;
    let blurred = GrayImage::from_raw(w, h, blurred)
        .ok_or_else(|| ToonError::render("edge buffer size mismatch"))?;
    let edges = adaptive_mean_threshold(&blurred, THRESHOLD_BLOCK, THRESHOLD_C);
    if thickness > 1 {
        Ok(morph::dilate(&edges, &Kernel::square(thickness)))
    } else {
        Ok(edges)
    }
}

/// 255 where a pixel is at or below its `block x block` mean minus `c`, else 0. Borders
/// replicate the edge pixels.
pub fn adaptive_mean_threshold(gray: &GrayImage, block: u32, c: f64) -> GrayImage {
    let (w, h) = gray.dimensions();
    let mut out = GrayImage::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }
    let integral = Integral::new(gray, block / 2);
    let area = f64::from(block * block);
    for (x, y, px) in out.enumerate_pixels_mut() {
        let mean = integral.block_sum(x, y) as f64 / area;
        if f64::from(gray.get_pixel(x, y)[0]) <= mean - c {
            px[0] = 255;
        }
    }
    out
}

/// Summed-area table over a copy of the image padded by `pad` replicated pixels.
struct Integral {
    sums: Vec<u64>,
    stride: usize,
    block: usize,
}

impl Integral {
    fn new(gray: &GrayImage, pad: u32) -> Self {
        let (w, h) = gray.dimensions();
        let (pw, ph) = ((w + 2 * pad) as usize, (h + 2 * pad) as usize);
        let stride = pw + 1;
        let mut sums = vec![0u64; stride * (ph + 1)];
        for py in 0..ph {
            let sy = (py as i64 - i64::from(pad)).clamp(0, i64::from(h) - 1) as u32;
            let mut row = 0u64;
            for px in 0..pw {
                let sx = (px as i64 - i64::from(pad)).clamp(0, i64::from(w) - 1) as u32;
                row += u64::from(gray.get_pixel(sx, sy)[0]);
                sums[(py + 1) * stride + px + 1] = sums[py * stride + px + 1] + row;
            }
        }
        Self {
            sums,
            stride,
            block: (2 * pad + 1) as usize,
        }
    }

    /// Sum of the block whose top-left padded corner is `(x, y)`.
    fn block_sum(&self, x: u32, y: u32) -> u64 {
        let (x0, y0) = (x as usize, y as usize);
        let (x1, y1) = (x0 + self.block, y0 + self.block);
        self.sums[y1 * self.stride + x1] + self.sums[y0 * self.stride + x0]
            - self.sums[y0 * self.stride + x1]
            - self.sums[y1 * self.stride + x0]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stylize/comic.rs"]
mod tests;
