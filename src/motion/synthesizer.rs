//! Part-aware frame synthesis.
//!
//! Every frame starts from a fresh background. The source image is drawn through the body
//! affine into a transparent layer, the vector overlays (wings, limbs, eyes) are drawn into
//! the same layer through the same affine so they track the body, an optional horizontal
//! smear is applied, and the layer is composited over the background.

use image::RgbaImage;

use crate::{
    animation::timeline::{ActionTimeline, AnimationType, FrameClock, MotionStyle, Pose},
    detect::locator::SubjectLayout,
    foundation::{
        core::{Affine, FrameSequence, Vec2},
        error::{ToonError, ToonResult},
        math::NoiseStream,
    },
    render::{
        canvas,
        composite::composite_layer,
        cpu::{ImagePaint, SceneCanvas},
        overlays,
        smear::smear_rgba8_premul,
    },
};

/// Largest per-axis jitter added to hand-drawn frames, in pixels.
const HAND_JITTER: f64 = 0.5;

/// Anything that can turn a located subject into an animation of one action.
pub trait Animator {
    fn animate(
        &mut self,
        image: &RgbaImage,
        layout: &SubjectLayout,
        kind: AnimationType,
        frame_count: u32,
    ) -> ToonResult<FrameSequence>;
}

/// Procedural animator for one style family. All randomness (paper grain, line jitter)
/// is drawn from the owned [`NoiseStream`], so equal seeds give equal frames.
#[derive(Clone, Debug)]
pub struct MotionSynthesizer {
    style: MotionStyle,
    noise: NoiseStream,
}

impl MotionSynthesizer {
    pub fn new(style: MotionStyle, noise: NoiseStream) -> Self {
        Self { style, noise }
    }

    fn render_frame(&mut self, sources: &FrameSources<'_>, pose: &Pose) -> ToonResult<RgbaImage> {
        let layout = sources.layout;
        let (w, h) = sources.size;
        let hand_drawn = self.style == MotionStyle::HandDrawn;

        let mut frame = canvas::background(w, h, hand_drawn.then_some(&mut self.noise));
        let jitter = if hand_drawn {
            Vec2::new(
                self.noise.uniform(-HAND_JITTER, HAND_JITTER),
                self.noise.uniform(-HAND_JITTER, HAND_JITTER),
            )
        } else {
            Vec2::ZERO
        };
        let body = body_affine(pose, w, h, jitter);
        let head = body * Affine::translate(pose.head_offset);

        let mut layer = SceneCanvas::new(w, h)?;
        layer.draw_image(&sources.base, body, 1.0);
        if let Some(patch) = &sources.head_patch
            && pose.head_offset != Vec2::ZERO
        {
            let origin = Vec2::new(f64::from(layout.head.x), f64::from(layout.head.y));
            layer.draw_image(patch, head * Affine::translate(origin), 1.0);
        }
        if let (Some(wings), Some(wing_pose)) = (&layout.wings, &pose.wings) {
            overlays::draw_wings(&mut layer, wings, wing_pose, body);
        }
        if let Some(limb_pose) = &pose.limbs {
            overlays::draw_limbs(&mut layer, &layout.limbs, limb_pose, body);
        }
        if let Some(eyes) = &layout.eyes {
            overlays::draw_eyes(&mut layer, eyes, pose.eyes, self.style, head);
        }

        let mut px = layer.finish();
        let radius = pose.smear_radius();
        if radius > 0 {
            px = smear_rgba8_premul(&px, w, h, radius)?;
        }
        composite_layer(&mut frame, &px)?;
        Ok(frame)
    }
}

impl Animator for MotionSynthesizer {
    #[tracing::instrument(skip(self, image, layout), fields(style = ?self.style))]
    fn animate(
        &mut self,
        image: &RgbaImage,
        layout: &SubjectLayout,
        kind: AnimationType,
        frame_count: u32,
    ) -> ToonResult<FrameSequence> {
        if frame_count == 0 {
            return Err(ToonError::validation("frame_count must be at least 1"));
        }
        let sources = FrameSources::new(image, layout)?;
        let timeline = ActionTimeline::new(self.style, kind);
        let stage = Vec2::new(f64::from(image.width()), f64::from(image.height()));

        let mut frames = FrameSequence::with_capacity(frame_count as usize);
        for index in 0..frame_count {
            let pose = timeline.pose_at(FrameClock::new(index, frame_count), stage);
            frames.push(self.render_frame(&sources, &pose)?)?;
        }
        tracing::debug!(frames = frames.len(), "synthesized");
        Ok(frames)
    }
}

/// Per-call raster sources shared by every frame of one animation.
struct FrameSources<'a> {
    layout: &'a SubjectLayout,
    size: (u32, u32),
    base: ImagePaint,
    head_patch: Option<ImagePaint>,
}

impl<'a> FrameSources<'a> {
    fn new(image: &RgbaImage, layout: &'a SubjectLayout) -> ToonResult<Self> {
        let (w, h) = image.dimensions();
        let head = layout.head.clamp_to(w, h);
        let head_patch = if head.is_empty() {
            None
        } else {
            let crop = image::imageops::crop_imm(image, head.x, head.y, head.width, head.height)
                .to_image();
            Some(ImagePaint::from_rgba(&crop)?)
        };
        Ok(Self {
            layout,
            size: (w, h),
            base: ImagePaint::from_rgba(image)?,
            head_patch,
        })
    }
}

/// Scale, then rotate (counter-clockwise on screen), then translate, all about the image
/// center. The translation is clamped to half the canvas on each axis so at least half of
/// the content stays visible.
pub(crate) fn body_affine(pose: &Pose, width: u32, height: u32, jitter: Vec2) -> Affine {
    let (w, h) = (f64::from(width), f64::from(height));
    let center = Vec2::new(w / 2.0, h / 2.0);
    let offset = Vec2::new(
        pose.offset.x.clamp(-w / 2.0, w / 2.0),
        pose.offset.y.clamp(-h / 2.0, h / 2.0),
    ) + jitter;
    Affine::translate(center + offset)
        * Affine::rotate(-pose.rotation_deg.to_radians())
        * Affine::scale_non_uniform(pose.scale.x, pose.scale.y)
        * Affine::translate(-center)
}

#[cfg(test)]
#[path = "../../tests/unit/motion/synthesizer.rs"]
mod tests;
