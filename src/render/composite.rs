//! Blending a rasterized overlay layer onto an opaque frame.

use image::RgbaImage;

use crate::foundation::{
    error::{ToonError, ToonResult},
    math::mul_div255,
};

pub type PremulRgba8 = [u8; 4];

/// Source-over of one premultiplied layer pixel onto an opaque frame pixel. The frame
/// stays opaque, so only its color channels change.
pub fn layer_over_opaque(frame: [u8; 3], layer: PremulRgba8) -> [u8; 3] {
    let keep = 255 - u16::from(layer[3]);
    std::array::from_fn(|c| layer[c].saturating_add(mul_div255(u16::from(frame[c]), keep)))
}

/// Composite a premultiplied RGBA8 layer of the frame's size onto `frame`.
pub fn composite_layer(frame: &mut RgbaImage, layer: &[u8]) -> ToonResult<()> {
    if layer.len() != frame.as_raw().len() {
        return Err(ToonError::render(format!(
            "overlay layer has {} bytes, frame {}x{} needs {}",
            layer.len(),
            frame.width(),
            frame.height(),
            frame.as_raw().len()
        )));
    }
    for (px, src) in frame.pixels_mut().zip(layer.chunks_exact(4)) {
        if src[3] == 0 {
            continue;
        }
        let [r, g, b] = layer_over_opaque([px[0], px[1], px[2]], [src[0], src[1], src[2], src[3]]);
        px.0 = [r, g, b, 255];
    }
    Ok(())
}

/// Straight RGBA8 to premultiplied.
pub fn premultiply(px: [u8; 4]) -> PremulRgba8 {
    let a = u16::from(px[3]);
    [
        mul_div255(u16::from(px[0]), a),
        mul_div255(u16::from(px[1]), a),
        mul_div255(u16::from(px[2]), a),
        px[3],
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
