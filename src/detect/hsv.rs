use image::{GrayImage, Luma, RgbaImage};

/// HSV triple in the 8-bit convention: hue in `[0, 180)`, saturation and value in `[0, 255]`.
pub type Hsv8 = [u8; 3];

/// Inclusive per-channel HSV range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HsvRange {
    pub lo: Hsv8,
    pub hi: Hsv8,
}

impl HsvRange {
    pub const PALE_YELLOW: Self = Self::new([20, 40, 40], [40, 255, 255]);
    pub const BROWN: Self = Self::new([10, 40, 20], [30, 255, 200]);
    pub const NEAR_WHITE: Self = Self::new([0, 0, 180], [180, 30, 255]);

    pub const fn new(lo: Hsv8, hi: Hsv8) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, hsv: Hsv8) -> bool {
        (0..3).all(|c| self.lo[c] <= hsv[c] && hsv[c] <= self.hi[c])
    }
}

/// Colors a downy hatchling typically shows against its surroundings.
pub const SUBJECT_RANGES: [HsvRange; 3] =
    [HsvRange::PALE_YELLOW, HsvRange::BROWN, HsvRange::NEAR_WHITE];

pub fn rgb_to_hsv8(r: u8, g: u8, b: u8) -> Hsv8 {
    let (rf, gf, bf) = (f64::from(r), f64::from(g), f64::from(b));
    let v = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let diff = v - min;

    let s = if v > 0.0 { diff * 255.0 / v } else { 0.0 };
    let h = if diff == 0.0 {
        0.0
    } else if v == rf {
        60.0 * (gf - bf) / diff
    } else if v == gf {
        120.0 + 60.0 * (bf - rf) / diff
    } else {
        240.0 + 60.0 * (rf - gf) / diff
    };
    let h = if h < 0.0 { h + 360.0 } else { h };

    [
        ((h / 2.0).round() as u32 % 180) as u8,
        s.round().clamp(0.0, 255.0) as u8,
        v as u8,
    ]
}

/// Binary mask (255 = inside) of pixels falling in any of `ranges`. Alpha is ignored.
pub fn range_mask(image: &RgbaImage, ranges: &[HsvRange]) -> GrayImage {
    let (w, h) = image.dimensions();
    let mut mask = GrayImage::new(w, h);
    for (x, y, px) in image.enumerate_pixels() {
        let hsv = rgb_to_hsv8(px[0], px[1], px[2]);
        if ranges.iter().any(|r| r.contains(hsv)) {
            mask.put_pixel(x, y, Luma([255]));
        }
    }
    mask
}

/// Luma with the usual 0.299/0.587/0.114 weights.
pub fn to_gray(image: &RgbaImage) -> GrayImage {
    let (w, h) = image.dimensions();
    GrayImage::from_fn(w, h, |x, y| {
        let px = image.get_pixel(x, y);
        let l = 0.299 * f64::from(px[0]) + 0.587 * f64::from(px[1]) + 0.114 * f64::from(px[2]);
        Luma([l.round().clamp(0.0, 255.0) as u8])
    })
}

#[cfg(test)]
#[path = "../../tests/unit/detect/hsv.rs"]
mod tests;
