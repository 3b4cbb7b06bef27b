//! Realistic motion family: plain translation and rotation, straight limbs, triangle wings.

use std::f64::consts::{PI, TAU};

use crate::{
    animation::{
        eyes::{self, EyeState},
        timeline::{AnimationType, FrameClock, LimbPose, LimbStyle, Pose, WingPose, WingShape},
    },
    foundation::core::Vec2,
};

pub(crate) fn pose(kind: AnimationType, clock: FrameClock, stage: Vec2) -> Pose {
    let t = clock.t();
    match kind {
        AnimationType::Walk => walk(clock, t),
        AnimationType::Jump => jump(t, stage.y),
        AnimationType::Fly => fly(t),
        AnimationType::Idle => idle(clock, t),
        AnimationType::Excited => excited(t),
        AnimationType::Roll => roll(t),
        AnimationType::Blink => blink(clock),
    }
}

fn straight(left_deg: f64, right_deg: f64, lift: f64) -> LimbPose {
    LimbPose {
        left_deg,
        right_deg,
        lift,
        style: LimbStyle::Straight,
    }
}

fn triangle(angle_deg: f64) -> WingPose {
    WingPose {
        left_deg: angle_deg,
        right_deg: angle_deg,
        exaggeration: 1.0,
        motion_blur: false,
        shape: WingShape::Triangle,
    }
}

fn walk(clock: FrameClock, t: f64) -> Pose {
    let phase = 2.0 * TAU * t;
    Pose {
        offset: Vec2::new(0.0, phase.sin() * 5.0),
        head_offset: Vec2::new(0.0, phase.sin() * 3.0),
        limbs: Some(straight(phase.sin() * 20.0, (phase + PI).sin() * 20.0, 0.0)),
        eyes: if eyes::periodic_blink(clock, 2) {
            EyeState::Closed
        } else {
            EyeState::FORWARD
        },
        ..Pose::rest()
    }
}

fn jump(t: f64, height: f64) -> Pose {
    let arc = (PI * t).sin();
    let tuck = arc * 10.0;
    Pose {
        offset: Vec2::new(0.0, -arc.abs() * 0.15 * height),
        scale: Vec2::new(1.0, 1.0 + 0.06 * arc),
        limbs: Some(straight(tuck, tuck, 0.0)),
        wings: Some(triangle((TAU * t).sin() * 15.0)),
        ..Pose::rest()
    }
}

fn fly(t: f64) -> Pose {
    Pose {
        offset: Vec2::new(0.0, (TAU * t).sin() * 8.0),
        limbs: Some(straight(45.0, 45.0, 10.0)),
        wings: Some(triangle((2.0 * TAU * t).sin() * 30.0)),
        ..Pose::rest()
    }
}

fn idle(clock: FrameClock, t: f64) -> Pose {
    let turn = if t > 0.3 && t < 0.7 {
        ((t - 0.3) * 2.5 * PI).sin() * 5.0
    } else {
        0.0
    };
    let eyes = if eyes::idle_blink(clock) {
        EyeState::Closed
    } else {
        EyeState::Open { look_x: turn / 5.0 }
    };
    Pose {
        offset: Vec2::new(0.0, (TAU * t).sin() * 2.0),
        head_offset: Vec2::new(turn, 0.0),
        eyes,
        ..Pose::rest()
    }
}

fn excited(t: f64) -> Pose {
    Pose {
        offset: Vec2::new(0.0, -(3.0 * TAU * t).sin().abs() * 10.0),
        wings: Some(triangle((4.0 * TAU * t).sin() * 25.0)),
        eyes: EyeState::Wide,
        ..Pose::rest()
    }
}

fn roll(t: f64) -> Pose {
    Pose {
        rotation_deg: -360.0 * t,
        ..Pose::rest()
    }
}

fn blink(clock: FrameClock) -> Pose {
    Pose {
        eyes: if eyes::middle_third_closed(clock) {
            EyeState::Closed
        } else {
            EyeState::FORWARD
        },
        ..Pose::rest()
    }
}
