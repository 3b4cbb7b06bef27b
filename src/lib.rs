//! toonduck turns a still photo of a duckling into a short looping cartoon GIF.
//!
//! # Pipeline overview
//!
//! 1. **Stylize**: posterize the photo and ink its edges ([`stylize`]).
//! 2. **Locate**: find the subject silhouette and place head, wings, limbs and eyes
//!    ([`PartLocator`]). Detection never fails; it degrades to proportional defaults.
//! 3. **Animate**: sample a pose per frame from an [`ActionTimeline`] and composite the
//!    transformed image plus vector overlays ([`MotionSynthesizer`]), or move the whole image
//!    ([`animate_simple`]), or split a text description into several actions
//!    ([`DescriptionParser`], [`SequenceComposer`]).
//! 4. **Encode**: write an animated GIF ([`encode_gif`]).
//!
//! All randomness flows through an explicit [`NoiseStream`], so a fixed seed reproduces the
//! same frames.
#![forbid(unsafe_code)]

pub mod animation;
pub mod detect;
pub mod encode;
pub mod foundation;
pub mod motion;
pub mod narrative;
pub mod pipeline;
pub mod render;
pub mod stylize;

pub use animation::eyes::EyeState;
pub use animation::timeline::{
    ActionTimeline, AnimationType, FrameClock, JumpPhase, LimbPose, LimbStyle, MotionStyle, Pose,
    WingPose, WingShape,
};
pub use detect::locator::{
    DetectionQuality, EyePair, EyeSource, PartLocator, ProportionalRig, SubjectLayout, WingPair,
};
pub use encode::{GifSettings, encode_gif};
pub use foundation::core::{Circle, FrameSequence, PixelRect};
pub use foundation::error::{ToonError, ToonResult};
pub use foundation::math::{NoiseStream, derive_seed};
pub use motion::simple::{SimpleMotion, animate_simple};
pub use motion::synthesizer::{Animator, MotionSynthesizer};
pub use narrative::composer::{AllocationPolicy, SequenceComposer, allocate_frames};
pub use narrative::keywords::{Emotion, Outcome, Prop};
pub use narrative::parser::{AnimationSegment, Conditions, DescriptionParser, ParsedScript};
pub use pipeline::batch::{BatchReport, output_path_for, process_batch};
pub use pipeline::config::{MotionRequest, PipelineConfig, RenderPlan};
pub use pipeline::{Pipeline, load_image};
pub use stylize::{ComicFilter, StylizeMode, stylize};

#[cfg(test)]
#[path = "../tests/unit/support.rs"]
mod test_support;
