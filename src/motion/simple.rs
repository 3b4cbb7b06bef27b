//! Whole-image motions that need no part detection.

use std::{
    f64::consts::{PI, TAU},
    fmt,
    str::FromStr,
};

use image::RgbaImage;

use crate::{
    animation::timeline::{FrameClock, Pose},
    foundation::{
        core::{FrameSequence, Vec2},
        error::{ToonError, ToonResult},
    },
    motion::synthesizer::body_affine,
    render::{canvas, cpu::{ImagePaint, SceneCanvas}},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimpleMotion {
    Bounce,
    Rotate,
    Scale,
    Wobble,
}

impl SimpleMotion {
    pub const ALL: [Self; 4] = [Self::Bounce, Self::Rotate, Self::Scale, Self::Wobble];

    pub fn name(self) -> &'static str {
        match self {
            Self::Bounce => "bounce",
            Self::Rotate => "rotate",
            Self::Scale => "scale",
            Self::Wobble => "wobble",
        }
    }

    /// Whole-image pose at loop time `t` for an image `height` pixels tall.
    pub fn pose_at(self, t: f64, height: f64) -> Pose {
        match self {
            Self::Bounce => Pose {
                offset: Vec2::new(0.0, -(TAU * t).sin().abs() * 0.1 * height),
                ..Pose::rest()
            },
            Self::Rotate => Pose {
                rotation_deg: 360.0 * t,
                ..Pose::rest()
            },
            Self::Scale => {
                let s = 1.0 + 0.1 * (TAU * t).sin();
                Pose {
                    scale: Vec2::new(s, s),
                    ..Pose::rest()
                }
            }
            Self::Wobble => Pose {
                rotation_deg: (4.0 * PI * t).sin() * 5.0,
                ..Pose::rest()
            },
        }
    }
}

impl fmt::Display for SimpleMotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SimpleMotion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.name() == needle)
            .ok_or_else(|| format!("unknown simple motion '{s}'"))
    }
}

/// Move the whole image over a white background.
#[tracing::instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn animate_simple(
    image: &RgbaImage,
    motion: SimpleMotion,
    frame_count: u32,
) -> ToonResult<FrameSequence> {
    if frame_count == 0 {
        return Err(ToonError::validation("frame_count must be at least 1"));
    }
    let (w, h) = image.dimensions();
    let paint = ImagePaint::from_rgba(image)?;
    let mut frames = FrameSequence::with_capacity(frame_count as usize);
    for index in 0..frame_count {
        let t = FrameClock::new(index, frame_count).t();
        let pose = motion.pose_at(t, f64::from(h));
        let mut frame = canvas::background(w, h, None);
        let mut layer = SceneCanvas::new(w, h)?;
        layer.draw_image(&paint, body_affine(&pose, w, h, Vec2::ZERO), 1.0);
        layer.composite_onto(&mut frame)?;
        frames.push(frame)?;
    }
    Ok(frames)
}

#[cfg(test)]
#[path = "../../tests/unit/motion/simple.rs"]
mod tests;
