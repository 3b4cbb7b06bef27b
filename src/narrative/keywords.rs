//! Keyword tables for the description parser. Order matters: the first matching entry wins
//! for actions and emotions, and props are reported in table order.

use std::fmt;

use crate::animation::timeline::AnimationType;

/// Decoration drawn over a segment's frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Prop {
    Dice,
    Star,
    Coin,
    Heart,
}

impl Prop {
    pub fn name(self) -> &'static str {
        match self {
            Self::Dice => "dice",
            Self::Star => "star",
            Self::Coin => "coin",
            Self::Heart => "heart",
        }
    }
}

impl fmt::Display for Prop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    #[default]
    Neutral,
    Happy,
    Excited,
    Sad,
    Surprised,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failure,
}

/// `blink` has no keywords: it is only reachable as an explicit animation type.
pub static ACTION_KEYWORDS: &[(AnimationType, &[&str])] = &[
    (
        AnimationType::Walk,
        &["walk", "walking", "walks", "stroll", "waddle"],
    ),
    (
        AnimationType::Jump,
        &["jump", "jumping", "jumps", "hop", "leap", "bounce"],
    ),
    (
        AnimationType::Fly,
        &["fly", "flying", "flies", "soar", "glide"],
    ),
    (
        AnimationType::Idle,
        &["idle", "stand", "wait", "rest", "breath"],
    ),
    (
        AnimationType::Excited,
        &[
            "cheer",
            "celebrate",
            "excited",
            "happy",
            "joy",
            "victory",
            "yay",
        ],
    ),
    (
        AnimationType::Roll,
        &["roll", "rolling", "rolls", "spin", "rotate"],
    ),
];

pub static PROP_KEYWORDS: &[(Prop, &[&str])] = &[
    (Prop::Dice, &["dice", "die", "cube"]),
    (Prop::Star, &["star", "sparkle", "twinkle"]),
    (Prop::Coin, &["coin", "money"]),
    (Prop::Heart, &["heart", "love"]),
];

pub static EMOTION_KEYWORDS: &[(Emotion, &[&str])] = &[
    (Emotion::Happy, &["happy", "joyful", "glad", "pleased"]),
    (
        Emotion::Excited,
        &["excited", "thrilled", "energetic", "cheer", "celebrat"],
    ),
    (Emotion::Sad, &["sad", "unhappy", "disappointed"]),
    (Emotion::Surprised, &["surprised", "shocked", "amazed"]),
];

/// Checked before [`FAILURE_WORDS`]; the first set that matches decides the outcome.
pub static SUCCESS_WORDS: &[&str] = &["win", "wins", "success", "succeeds"];
pub static FAILURE_WORDS: &[&str] = &["lose", "loses", "fail", "fails"];

fn mentions(clause: &str, words: &[&str]) -> bool {
    words.iter().any(|w| clause.contains(w))
}

pub fn action_in(clause: &str) -> Option<AnimationType> {
    ACTION_KEYWORDS
        .iter()
        .find(|(_, words)| mentions(clause, words))
        .map(|(kind, _)| *kind)
}

pub fn props_in(clause: &str) -> Vec<Prop> {
    PROP_KEYWORDS
        .iter()
        .filter(|(_, words)| mentions(clause, words))
        .map(|(prop, _)| *prop)
        .collect()
}

pub fn emotion_in(clause: &str) -> Emotion {
    EMOTION_KEYWORDS
        .iter()
        .find(|(_, words)| mentions(clause, words))
        .map_or(Emotion::Neutral, |(emotion, _)| *emotion)
}

pub fn outcome_in(clause: &str) -> Option<Outcome> {
    if mentions(clause, SUCCESS_WORDS) {
        Some(Outcome::Success)
    } else if mentions(clause, FAILURE_WORDS) {
        Some(Outcome::Failure)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/narrative/keywords.rs"]
mod tests;
