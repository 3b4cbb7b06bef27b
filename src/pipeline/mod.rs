//! End-to-end runs: load, stylize, locate, animate, encode.

pub mod batch;
pub mod config;

use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::{
    detect::locator::PartLocator,
    encode::{GifSettings, encode_gif},
    foundation::{
        core::FrameSequence,
        error::{ToonError, ToonResult},
        math::NoiseStream,
    },
    motion::{
        simple::animate_simple,
        synthesizer::{Animator, MotionSynthesizer},
    },
    narrative::composer::SequenceComposer,
    pipeline::config::{PipelineConfig, RenderPlan},
    stylize::stylize,
};

/// Largest accepted source side; the rasterizer addresses pixels with `u16`.
pub const MAX_IMAGE_SIDE: u32 = u16::MAX as u32;

/// Decode `path` into RGBA8.
pub fn load_image(path: &Path) -> ToonResult<RgbaImage> {
    let reader = image::ImageReader::open(path)
        .map_err(|e| ToonError::input(format!("cannot open '{}': {e}", path.display())))?
        .with_guessed_format()
        .map_err(|e| ToonError::input(format!("cannot read '{}': {e}", path.display())))?;
    let image = reader.decode()?.to_rgba8();
    let (w, h) = image.dimensions();
    if w == 0 || h == 0 {
        return Err(ToonError::input(format!("'{}' is empty", path.display())));
    }
    if w > MAX_IMAGE_SIDE || h > MAX_IMAGE_SIDE {
        return Err(ToonError::input(format!(
            "'{}' is {w}x{h}, larger than {MAX_IMAGE_SIDE} pixels on a side",
            path.display()
        )));
    }
    Ok(image)
}

/// A validated configuration with its resolved plan.
#[derive(Clone, Debug)]
pub struct Pipeline {
    config: PipelineConfig,
    plan: RenderPlan,
    gif: GifSettings,
    base_seed: u64,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> ToonResult<Self> {
        let (plan, gif) = config.plan()?;
        let base_seed = config
            .effective_seed()
            .unwrap_or_else(|| NoiseStream::from_entropy().next_u64());
        tracing::debug!(?plan, base_seed, "pipeline planned");
        Ok(Self {
            config,
            plan,
            gif,
            base_seed,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn plan(&self) -> &RenderPlan {
        &self.plan
    }

    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    /// Stylize `image` and render the planned animation. Equal seeds give equal frames.
    pub fn render(&self, image: &RgbaImage, seed: u64) -> ToonResult<FrameSequence> {
        let mut noise = NoiseStream::seeded(seed);
        let mut stylize_noise = noise.fork();
        let motion_noise = noise.fork();

        let base = if self.config.comic_style {
            tracing::info!("applying comic style");
            stylize(image, &self.config.comic, &mut stylize_noise)?
        } else {
            image.clone()
        };

        match &self.plan {
            RenderPlan::Simple { motion, frames } => {
                tracing::info!(%motion, frames, "rendering whole-image motion");
                animate_simple(&base, *motion, *frames)
            }
            RenderPlan::Parts {
                style,
                kind,
                frames,
            } => {
                let layout = PartLocator::default().locate(&base);
                tracing::info!(%kind, ?style, frames, "rendering part animation");
                MotionSynthesizer::new(*style, motion_noise).animate(&base, &layout, *kind, *frames)
            }
            RenderPlan::Narrative {
                style,
                script,
                frames,
                policy,
            } => {
                let layout = PartLocator::default().locate(&base);
                tracing::info!(segments = script.segments.len(), frames, "rendering narrative");
                let mut synth = MotionSynthesizer::new(*style, motion_noise);
                SequenceComposer::new(*frames)
                    .with_policy(*policy)
                    .compose(&base, &layout, &script.segments, &mut synth)
            }
        }
    }

    /// Render one file with the pipeline's base seed.
    pub fn process(&self, input: &Path, output: &Path) -> ToonResult<PathBuf> {
        self.process_seeded(input, output, self.base_seed)
    }

    #[tracing::instrument(skip(self), fields(plan = plan_name(&self.plan)))]
    pub fn process_seeded(&self, input: &Path, output: &Path, seed: u64) -> ToonResult<PathBuf> {
        tracing::info!("loading image");
        let image = load_image(input)?;
        let frames = self.render(&image, seed)?;
        encode_gif(frames.frames(), self.gif, output)
    }
}

fn plan_name(plan: &RenderPlan) -> &'static str {
    match plan {
        RenderPlan::Simple { .. } => "simple",
        RenderPlan::Parts { .. } => "parts",
        RenderPlan::Narrative { .. } => "narrative",
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/mod.rs"]
mod tests;
