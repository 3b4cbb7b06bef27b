//! Pipeline configuration and the render plan derived from it.

use std::{fmt, path::Path, str::FromStr};

use crate::{
    animation::timeline::{AnimationType, MotionStyle},
    encode::GifSettings,
    foundation::error::{ToonError, ToonResult},
    motion::simple::SimpleMotion,
    narrative::{
        composer::AllocationPolicy,
        parser::{DescriptionParser, ParsedScript},
    },
    stylize::ComicFilter,
};

/// Environment variable consulted when no seed is configured.
pub const SEED_ENV: &str = "TOONDUCK_SEED";

/// Either a whole-image motion or a part-based action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MotionRequest {
    Simple(SimpleMotion),
    Parts(AnimationType),
}

impl Default for MotionRequest {
    fn default() -> Self {
        Self::Simple(SimpleMotion::Bounce)
    }
}

impl fmt::Display for MotionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple(m) => fmt::Display::fmt(m, f),
            Self::Parts(k) => fmt::Display::fmt(k, f),
        }
    }
}

impl FromStr for MotionRequest {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(m) = s.parse::<SimpleMotion>() {
            return Ok(Self::Simple(m));
        }
        s.parse::<AnimationType>()
            .map(Self::Parts)
            .map_err(|_| format!("unknown animation '{s}'"))
    }
}

impl TryFrom<String> for MotionRequest {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<MotionRequest> for String {
    fn from(m: MotionRequest) -> Self {
        m.to_string()
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Run the comic filter on the source before animating.
    pub comic_style: bool,
    pub comic: ComicFilter,
    pub animation: MotionRequest,
    pub style: Option<MotionStyle>,
    pub frames: u32,
    pub gif: GifSettings,
    /// Free-text actions; forces narrative mode when set.
    pub description: Option<String>,
    pub allocation: AllocationPolicy,
    pub seed: Option<u64>,
    /// Worker threads for batch runs; rayon's default when unset.
    pub threads: Option<usize>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            comic_style: true,
            comic: ComicFilter::default(),
            animation: MotionRequest::default(),
            style: None,
            frames: 10,
            gif: GifSettings::default(),
            description: None,
            allocation: AllocationPolicy::default(),
            seed: None,
            threads: None,
        }
    }
}

/// What a pipeline run will actually render.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderPlan {
    Simple {
        motion: SimpleMotion,
        frames: u32,
    },
    Parts {
        style: MotionStyle,
        kind: AnimationType,
        frames: u32,
    },
    Narrative {
        style: MotionStyle,
        script: ParsedScript,
        frames: u32,
        policy: AllocationPolicy,
    },
}

impl RenderPlan {
    pub fn frames(&self) -> u32 {
        match self {
            Self::Simple { frames, .. }
            | Self::Parts { frames, .. }
            | Self::Narrative { frames, .. } => *frames,
        }
    }
}

impl PipelineConfig {
    pub fn from_json_str(json: &str) -> ToonResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| ToonError::validation(format!("invalid pipeline config: {e}")))
    }

    pub fn from_json_file(path: &Path) -> ToonResult<Self> {
        use anyhow::Context as _;
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Configured seed, else the one from [`SEED_ENV`].
    pub fn effective_seed(&self) -> Option<u64> {
        self.seed.or_else(env_seed)
    }

    pub fn validate(&self) -> ToonResult<()> {
        if self.frames == 0 {
            return Err(ToonError::validation("frames must be at least 1"));
        }
        if self.threads == Some(0) {
            return Err(ToonError::validation("threads must be >= 1 when set"));
        }
        if self.comic_style {
            self.comic.validate()?;
        }
        self.gif.validate()
    }

    /// Resolve the plan and the gif settings it plays with.
    ///
    /// A description forces narrative mode and replaces the frame count and frame duration
    /// with the script's suggestions. A part-based action without a style runs realistic.
    pub fn plan(&self) -> ToonResult<(RenderPlan, GifSettings)> {
        self.validate()?;
        let description = self
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty());

        if let Some(text) = description {
            let script = DescriptionParser::new().parse(text);
            let gif = GifSettings {
                frame_duration_ms: script.suggested_frame_duration_ms(),
                ..self.gif
            };
            let plan = RenderPlan::Narrative {
                style: self.style.unwrap_or(MotionStyle::HandDrawn),
                frames: script.suggested_frames(),
                script,
                policy: self.allocation,
            };
            return Ok((plan, gif));
        }

        let plan = match self.animation {
            MotionRequest::Simple(motion) => {
                if let Some(style) = self.style {
                    tracing::warn!(?style, %motion, "style has no effect on whole-image motions");
                }
                RenderPlan::Simple {
                    motion,
                    frames: self.frames,
                }
            }
            MotionRequest::Parts(kind) => RenderPlan::Parts {
                style: self.style.unwrap_or(MotionStyle::Realistic),
                kind,
                frames: self.frames,
            },
        };
        Ok((plan, self.gif))
    }
}

fn env_seed() -> Option<u64> {
    parse_seed(&std::env::var(SEED_ENV).ok()?)
}

fn parse_seed(raw: &str) -> Option<u64> {
    match raw.trim().parse() {
        Ok(seed) => Some(seed),
        Err(_) => {
            tracing::warn!(value = %raw, "ignoring unparsable {SEED_ENV}");
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/config.rs"]
mod tests;
