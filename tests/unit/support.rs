//! Synthetic test subjects shared by the unit tests.

use image::{Rgba, RgbaImage};

pub(crate) const SKY: Rgba<u8> = Rgba([173, 216, 230, 255]);
pub(crate) const YELLOW: Rgba<u8> = Rgba([255, 255, 0, 255]);
pub(crate) const GOLD: Rgba<u8> = Rgba([255, 215, 0, 255]);
pub(crate) const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

fn fill_ellipse(img: &mut RgbaImage, bbox: [f64; 4], color: Rgba<u8>) {
    let [x0, y0, x1, y1] = bbox;
    let (cx, cy) = ((x0 + x1) / 2.0, (y0 + y1) / 2.0);
    let (rx, ry) = ((x1 - x0) / 2.0, (y1 - y0) / 2.0);
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    for y in y0.floor().max(0.0) as u32..(y1.ceil() as u32).min(img.height()) {
        for x in x0.floor().max(0.0) as u32..(x1.ceil() as u32).min(img.width()) {
            let dx = (f64::from(x) + 0.5 - cx) / rx;
            let dy = (f64::from(y) + 0.5 - cy) / ry;
            if dx * dx + dy * dy <= 1.0 {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Front-facing yellow hatchling on a sky-blue background, laid out on a 400px grid and
/// scaled to `size x size`.
pub(crate) fn duckling(size: u32) -> RgbaImage {
    let s = f64::from(size) / 400.0;
    let sc = |b: [f64; 4]| [b[0] * s, b[1] * s, b[2] * s, b[3] * s];
    let mut img = RgbaImage::from_pixel(size, size, SKY);
    fill_ellipse(&mut img, sc([100.0, 180.0, 300.0, 350.0]), YELLOW);
    fill_ellipse(&mut img, sc([150.0, 100.0, 280.0, 230.0]), YELLOW);
    fill_ellipse(&mut img, sc([120.0, 220.0, 200.0, 300.0]), GOLD);
    fill_ellipse(&mut img, sc([200.0, 140.0, 220.0, 160.0]), BLACK);
    fill_ellipse(&mut img, sc([240.0, 140.0, 260.0, 160.0]), BLACK);
    img
}

/// Flat image with nothing the color search accepts.
pub(crate) fn blank(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_pixel(w, h, Rgba([20, 40, 160, 255]))
}
