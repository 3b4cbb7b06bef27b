//! Separable gaussian blur over interleaved 8-bit channels with Q16 fixed-point weights.

use crate::foundation::error::{ToonError, ToonResult};

pub fn gaussian_blur(
    src: &[u8],
    width: u32,
    height: u32,
    channels: usize,
    radius: u32,
    sigma: f32,
) -> ToonResult<Vec<u8>> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(channels))
        .ok_or_else(|| ToonError::render("blur buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(ToonError::render(
            "gaussian_blur expects src matching width*height*channels",
        ));
    }
    if radius == 0 || expected_len == 0 {
        return Ok(src.to_vec());
    }

    let kernel = gaussian_kernel_q16(radius, sigma)?;
    let grid = Grid {
        width: width as i32,
        height: height as i32,
        channels,
    };
    let mut tmp = vec![0u8; expected_len];
    let mut out = vec![0u8; expected_len];
    grid.pass(src, &mut tmp, &kernel, (1, 0));
    grid.pass(&tmp, &mut out, &kernel, (0, 1));
    Ok(out)
}

fn gaussian_kernel_q16(radius: u32, sigma: f32) -> ToonResult<Vec<u32>> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(ToonError::validation("blur sigma must be > 0"));
    }

    let r = radius as i32;
    let sigma = f64::from(sigma);
    let denom = 2.0 * sigma * sigma;
    let weights_f: Vec<f64> = (-r..=r)
        .map(|i| (-f64::from(i * i) / denom).exp())
        .collect();
    let sum: f64 = weights_f.iter().sum();

    let mut weights: Vec<u32> = weights_f
        .iter()
        .map(|wf| ((wf / sum) * 65536.0).round().clamp(0.0, 65536.0) as u32)
        .collect();
    let acc: i64 = weights.iter().map(|&w| i64::from(w)).sum();
    let delta = 65536 - acc;
    if delta != 0 {
        let mid = weights.len() / 2;
        weights[mid] = (i64::from(weights[mid]) + delta).clamp(0, 65536) as u32;
    }
    Ok(weights)
}

#[derive(Clone, Copy)]
struct Grid {
    width: i32,
    height: i32,
    channels: usize,
}

impl Grid {
    /// One 1D pass along `(dx, dy)` with clamped edges.
    fn pass(self, src: &[u8], dst: &mut [u8], k: &[u32], step: (i32, i32)) {
        let radius = (k.len() / 2) as i32;
        let ch = self.channels;
        let mut acc = vec![0u64; ch];
        for y in 0..self.height {
            for x in 0..self.width {
                acc.iter_mut().for_each(|a| *a = 0);
                for (ki, &kw) in k.iter().enumerate() {
                    let d = ki as i32 - radius;
                    let sx = (x + d * step.0).clamp(0, self.width - 1);
                    let sy = (y + d * step.1).clamp(0, self.height - 1);
                    let idx = (sy * self.width + sx) as usize * ch;
                    for c in 0..ch {
                        acc[c] += u64::from(kw) * u64::from(src[idx + c]);
                    }
                }
                let out_idx = (y * self.width + x) as usize * ch;
                for c in 0..ch {
                    dst[out_idx + c] = q16_to_u8(acc[c]);
                }
            }
        }
    }
}

fn q16_to_u8(acc: u64) -> u8 {
    ((acc + 32768) >> 16).min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/stylize/blur.rs"]
mod tests;
