//! Pose timelines: for one animation type and one style family, a pure function from the
//! frame clock to the transform applied to the subject.

use std::{fmt, str::FromStr};

use crate::{
    animation::{eyes::EyeState, handdrawn, realistic},
    foundation::core::Vec2,
};

/// Closed set of part-based animations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationType {
    Walk,
    Jump,
    Fly,
    Idle,
    Excited,
    Roll,
    Blink,
}

impl AnimationType {
    pub const ALL: [Self; 7] = [
        Self::Walk,
        Self::Jump,
        Self::Fly,
        Self::Idle,
        Self::Excited,
        Self::Roll,
        Self::Blink,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Walk => "walk",
            Self::Jump => "jump",
            Self::Fly => "fly",
            Self::Idle => "idle",
            Self::Excited => "excited",
            Self::Roll => "roll",
            Self::Blink => "blink",
        }
    }
}

impl fmt::Display for AnimationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnimationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == needle)
            .ok_or_else(|| format!("unknown animation type '{s}'"))
    }
}

/// Motion family used to realize a timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MotionStyle {
    /// Plain translation and rotation, straight limbs, no exaggeration.
    Realistic,
    /// Classical principles: squash/stretch, anticipation, follow-through, paper jitter.
    HandDrawn,
}

/// Position inside a loop of `count` frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameClock {
    pub index: u32,
    pub count: u32,
}

impl FrameClock {
    pub fn new(index: u32, count: u32) -> Self {
        Self { index, count }
    }

    /// Normalized loop time in `[0, 1)`.
    pub fn t(self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        f64::from(self.index) / f64::from(self.count)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LimbStyle {
    Straight,
    RubberHose,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LimbPose {
    /// Swing angles in degrees; positive swings the foot forward (to the right).
    pub left_deg: f64,
    pub right_deg: f64,
    /// Upward lift of both feet in pixels.
    pub lift: f64,
    pub style: LimbStyle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum WingShape {
    Triangle,
    Feathered,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WingPose {
    /// Flap angles in degrees; positive raises the wing tip.
    pub left_deg: f64,
    pub right_deg: f64,
    pub exaggeration: f64,
    pub motion_blur: bool,
    pub shape: WingShape,
}

/// Transform of the subject for one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pose {
    /// Whole-body offset in pixels (y down).
    pub offset: Vec2,
    /// Body rotation in degrees, counter-clockwise on screen.
    pub rotation_deg: f64,
    pub scale: Vec2,
    /// Extra head displacement relative to the body (follow-through, head turns).
    pub head_offset: Vec2,
    pub limbs: Option<LimbPose>,
    pub wings: Option<WingPose>,
    pub eyes: EyeState,
    /// Horizontal motion smear strength; only values above the smear threshold blur.
    pub smear: f64,
}

impl Pose {
    pub const SMEAR_THRESHOLD: f64 = 0.7;

    pub fn rest() -> Self {
        Self {
            offset: Vec2::ZERO,
            rotation_deg: 0.0,
            scale: Vec2::new(1.0, 1.0),
            head_offset: Vec2::ZERO,
            limbs: None,
            wings: None,
            eyes: EyeState::FORWARD,
            smear: 0.0,
        }
    }

    /// Blur radius in pixels for the smear pass, zero when below threshold.
    pub fn smear_radius(&self) -> u32 {
        if self.smear.abs() > Self::SMEAR_THRESHOLD {
            (self.smear.abs() * 2.0).floor() as u32
        } else {
            0
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::rest()
    }
}

/// Stage of the hand-drawn jump.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JumpPhase {
    Anticipation,
    Ascent,
    Landing,
    Settle,
}

impl JumpPhase {
    pub const ANTICIPATION_END: f64 = 0.2;
    pub const ASCENT_END: f64 = 0.6;
    pub const LANDING_END: f64 = 0.8;

    pub fn at(t: f64) -> Self {
        if t < Self::ANTICIPATION_END {
            Self::Anticipation
        } else if t < Self::ASCENT_END {
            Self::Ascent
        } else if t < Self::LANDING_END {
            Self::Landing
        } else {
            Self::Settle
        }
    }
}

/// One animation type realized in one style family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionTimeline {
    pub style: MotionStyle,
    pub kind: AnimationType,
}

impl ActionTimeline {
    pub fn new(style: MotionStyle, kind: AnimationType) -> Self {
        Self { style, kind }
    }

    /// Pose at `clock` for a stage of `stage.x` by `stage.y` pixels.
    pub fn pose_at(&self, clock: FrameClock, stage: Vec2) -> Pose {
        match self.style {
            MotionStyle::Realistic => realistic::pose(self.kind, clock, stage),
            MotionStyle::HandDrawn => handdrawn::pose(self.kind, clock, stage),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
