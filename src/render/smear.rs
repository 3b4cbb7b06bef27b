use crate::foundation::error::{ToonError, ToonResult};

/// Horizontal box blur of a premultiplied RGBA8 buffer; edge pixels are repeated.
pub fn smear_rgba8_premul(src: &[u8], width: u32, height: u32, radius: u32) -> ToonResult<Vec<u8>> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| ToonError::render("smear buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(ToonError::render(
            "smear_rgba8_premul expects src matching width*height*4",
        ));
    }
    if radius == 0 || width == 0 {
        return Ok(src.to_vec());
    }

    let r = radius as i64;
    let w = i64::from(width);
    let taps = (2 * r + 1) as u32;
    let mut out = vec![0u8; expected_len];

    for y in 0..i64::from(height) {
        let row = (y * w * 4) as usize;
        // Running window sum, seeded for x = 0.
        let mut acc = [0u32; 4];
        for dx in -r..=r {
            let sx = dx.clamp(0, w - 1) as usize;
            for c in 0..4 {
                acc[c] += u32::from(src[row + sx * 4 + c]);
            }
        }
        for x in 0..w {
            let o = row + x as usize * 4;
            for c in 0..4 {
                out[o + c] = ((acc[c] + taps / 2) / taps) as u8;
            }
            let leaving = (x - r).clamp(0, w - 1) as usize;
            let entering = (x + r + 1).clamp(0, w - 1) as usize;
            for c in 0..4 {
                acc[c] = acc[c] + u32::from(src[row + entering * 4 + c])
                    - u32::from(src[row + leaving * 4 + c]);
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/smear.rs"]
mod tests;
