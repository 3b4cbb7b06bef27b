use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use image::{
    Delay, Frame, RgbaImage,
    codecs::gif::{GifEncoder, Repeat},
};

use crate::foundation::{
    error::{ToonError, ToonResult},
    math::mul_div255,
};

/// Palette quantizer speed handed to the GIF encoder (1 = best, 30 = fastest).
const QUANTIZER_SPEED: i32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GifSettings {
    pub frame_duration_ms: u32,
    /// `0` loops forever.
    pub loop_count: u16,
}

impl Default for GifSettings {
    fn default() -> Self {
        Self {
            frame_duration_ms: 100,
            loop_count: 0,
        }
    }
}

impl GifSettings {
    pub fn validate(&self) -> ToonResult<()> {
        if self.frame_duration_ms == 0 {
            return Err(ToonError::validation("frame duration must be non-zero"));
        }
        Ok(())
    }

    fn repeat(&self) -> Repeat {
        match self.loop_count {
            0 => Repeat::Infinite,
            n => Repeat::Finite(n),
        }
    }
}

pub fn ensure_parent_dir(path: &Path) -> ToonResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Write `frames` as an animated GIF at `path` and return the path written.
#[tracing::instrument(skip(frames), fields(frames = frames.len()))]
pub fn encode_gif(
    frames: &[RgbaImage],
    settings: GifSettings,
    path: &Path,
) -> ToonResult<PathBuf> {
    check_frames(frames)?;
    settings.validate()?;
    ensure_parent_dir(path)?;

    let file = {
        use anyhow::Context as _;
        File::create(path).with_context(|| format!("failed to create '{}'", path.display()))?
    };
    let mut writer = BufWriter::new(file);
    write_gif(frames, settings, &mut writer)?;
    {
        use anyhow::Context as _;
        writer
            .flush()
            .with_context(|| format!("failed to write '{}'", path.display()))?;
    }
    tracing::info!(path = %path.display(), "gif written");
    Ok(path.to_path_buf())
}

/// Encode into any writer.
pub fn write_gif<W: Write>(
    frames: &[RgbaImage],
    settings: GifSettings,
    writer: W,
) -> ToonResult<()> {
    check_frames(frames)?;
    settings.validate()?;

    let mut encoder = GifEncoder::new_with_speed(writer, QUANTIZER_SPEED);
    encoder.set_repeat(settings.repeat())?;
    let delay = Delay::from_numer_denom_ms(settings.frame_duration_ms, 1);
    for frame in frames {
        let opaque = flatten_over_white(frame);
        encoder.encode_frame(Frame::from_parts(opaque, 0, 0, delay))?;
    }
    Ok(())
}

fn check_frames(frames: &[RgbaImage]) -> ToonResult<()> {
    let Some(first) = frames.first() else {
        return Err(ToonError::encoding("no frames to encode"));
    };
    let (w, h) = first.dimensions();
    if w == 0 || h == 0 || w > u32::from(u16::MAX) || h > u32::from(u16::MAX) {
        return Err(ToonError::encoding(format!(
            "frame size {w}x{h} is not representable in a gif"
        )));
    }
    if let Some(bad) = frames.iter().position(|f| f.dimensions() != (w, h)) {
        return Err(ToonError::encoding(format!(
            "frame {bad} is {}x{}, expected {w}x{h}",
            frames[bad].width(),
            frames[bad].height()
        )));
    }
    Ok(())
}

/// GIF has no partial transparency, so composite straight-alpha pixels over white.
fn flatten_over_white(frame: &RgbaImage) -> RgbaImage {
    let mut out = frame.clone();
    for px in out.pixels_mut() {
        let a = u16::from(px[3]);
        if a == 255 {
            continue;
        }
        let inv = 255 - a;
        for c in 0..3 {
            px[c] = mul_div255(u16::from(px[c]), a).saturating_add(mul_div255(255, inv));
        }
        px[3] = 255;
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
