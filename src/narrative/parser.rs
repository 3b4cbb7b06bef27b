//! Free-text action descriptions to ordered animation segments.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    animation::timeline::AnimationType,
    narrative::keywords::{self, Emotion, Outcome, Prop},
};

/// Structured conditions pulled out of a clause.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Conditions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
}

impl Conditions {
    pub fn is_empty(&self) -> bool {
        self.result.is_none() && self.outcome.is_none()
    }

    /// Overwrite fields that `other` sets.
    fn merge(&mut self, other: Conditions) {
        if other.result.is_some() {
            self.result = other.result;
        }
        if other.outcome.is_some() {
            self.outcome = other.outcome;
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationSegment {
    pub action: AnimationType,
    /// De-duplicated, first-seen order.
    pub props: Vec<Prop>,
    pub emotion: Emotion,
    pub conditions: Conditions,
    pub duration_weight: f64,
    pub clause: String,
}

impl AnimationSegment {
    /// Fallback used when a description names no action at all.
    pub fn default_excited() -> Self {
        Self {
            action: AnimationType::Excited,
            props: Vec::new(),
            emotion: Emotion::Neutral,
            conditions: Conditions::default(),
            duration_weight: 1.0,
            clause: String::new(),
        }
    }
}

/// Relative duration of one action.
pub fn base_weight(action: AnimationType) -> f64 {
    match action {
        AnimationType::Walk | AnimationType::Fly => 1.2,
        AnimationType::Roll => 0.8,
        AnimationType::Excited => 1.5,
        AnimationType::Jump | AnimationType::Idle | AnimationType::Blink => 1.0,
    }
}

fn segment_weight(action: AnimationType, props: usize) -> f64 {
    let w = base_weight(action);
    if props > 1 { w * 1.2 } else { w }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ParsedScript {
    /// Never empty.
    pub segments: Vec<AnimationSegment>,
    /// The lower-cased input.
    pub description: String,
}

impl ParsedScript {
    pub fn total_weight(&self) -> f64 {
        self.segments.iter().map(|s| s.duration_weight).sum()
    }

    /// Ten frames per unit of weight plus five per segment, kept inside `[15, 40]`.
    pub fn suggested_frames(&self) -> u32 {
        let base = (self.total_weight() * 10.0).floor() as u32;
        let extra = 5 * self.segments.len() as u32;
        (base + extra).clamp(15, 40)
    }

    /// Longer scripts play slightly faster.
    pub fn suggested_frame_duration_ms(&self) -> u32 {
        match self.segments.len() {
            n if n > 3 => 60,
            n if n > 1 => 70,
            _ => 80,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Separator {
    Literal(&'static str),
    /// A comma followed by `and `; the `and` stays with the next clause.
    CommaBeforeAnd,
    Comma,
}

const SEPARATORS: [Separator; 10] = [
    Separator::Literal(" and then "),
    Separator::Literal(" then "),
    Separator::Literal(" after that "),
    Separator::Literal(" afterwards "),
    Separator::Literal(" before "),
    Separator::Literal(" as "),
    Separator::Literal(" when "),
    Separator::Literal(" while "),
    Separator::CommaBeforeAnd,
    Separator::Comma,
];

static COMMA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",\s*").expect("comma pattern"));

static RESULT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:result|shows|displays|is)\s+(?:a\s+)?(\d+)").expect("result pattern")
});

impl Separator {
    fn split(self, clause: &str) -> Vec<&str> {
        match self {
            Self::Literal(sep) => clause.split(sep).collect(),
            Self::Comma => COMMA.split(clause).collect(),
            Self::CommaBeforeAnd => {
                let mut parts = Vec::new();
                let mut start = 0;
                for m in COMMA.find_iter(clause) {
                    let rest = &clause[m.end()..];
                    let and_follows = rest
                        .strip_prefix("and")
                        .is_some_and(|r| r.starts_with(char::is_whitespace));
                    if and_follows {
                        parts.push(&clause[start..m.start()]);
                        start = m.end();
                    }
                }
                parts.push(&clause[start..]);
                parts
            }
        }
    }
}

/// Split on every separator in order, each applied to all clauses produced so far.
pub fn split_clauses(text: &str) -> Vec<String> {
    let mut clauses = vec![text.to_string()];
    for sep in SEPARATORS {
        clauses = clauses
            .iter()
            .flat_map(|c| sep.split(c))
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();
    }
    clauses.into_iter().flat_map(split_joined_actions).collect()
}

/// `X and Y` becomes two clauses when both sides name an action.
fn split_joined_actions(clause: String) -> Vec<String> {
    const AND: &str = " and ";
    let mut out = Vec::new();
    let mut rest = clause;
    loop {
        let split = rest.match_indices(AND).map(|(idx, _)| idx).find(|&idx| {
            let left = rest[..idx].trim();
            let right = rest[idx + AND.len()..].trim();
            keywords::action_in(left).is_some() && keywords::action_in(right).is_some()
        });
        match split {
            Some(idx) => {
                out.push(rest[..idx].trim().to_string());
                rest = rest[idx + AND.len()..].trim().to_string();
            }
            None => {
                out.push(rest);
                return out;
            }
        }
    }
}

pub fn conditions_in(clause: &str) -> Conditions {
    Conditions {
        result: RESULT
            .captures(clause)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse().ok()),
        outcome: keywords::outcome_in(clause),
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DescriptionParser;

impl DescriptionParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse `text` into at least one segment. Never fails.
    pub fn parse(&self, text: &str) -> ParsedScript {
        let description = text.to_lowercase();
        let clauses = split_clauses(&description);

        let mut segments: Vec<AnimationSegment> = Vec::with_capacity(clauses.len());
        let mut any_action = false;
        for clause in clauses {
            let action = keywords::action_in(&clause);
            let props = keywords::props_in(&clause);
            let conditions = conditions_in(&clause);

            if action.is_none()
                && !conditions.is_empty()
                && let Some(target) = attach_target(&mut segments)
            {
                target.conditions.merge(conditions);
                for prop in props {
                    if !target.props.contains(&prop) {
                        target.props.push(prop);
                    }
                }
                continue;
            }

            any_action |= action.is_some();
            let action = action.unwrap_or(AnimationType::Idle);
            segments.push(AnimationSegment {
                action,
                duration_weight: segment_weight(action, props.len()),
                emotion: keywords::emotion_in(&clause),
                props,
                conditions,
                clause,
            });
        }

        if !any_action {
            segments = vec![AnimationSegment::default_excited()];
        }
        tracing::debug!(segments = segments.len(), "description parsed");
        ParsedScript {
            segments,
            description,
        }
    }
}

/// Most recent segment carrying a prop, else the last segment.
fn attach_target(segments: &mut [AnimationSegment]) -> Option<&mut AnimationSegment> {
    let idx = segments
        .iter()
        .rposition(|s| !s.props.is_empty())
        .or_else(|| segments.len().checked_sub(1))?;
    segments.get_mut(idx)
}

#[cfg(test)]
#[path = "../../tests/unit/narrative/parser.rs"]
mod tests;
