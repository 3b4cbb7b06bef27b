//! Hand-drawn motion family: squash and stretch, anticipation, follow-through and overshoot.

use std::f64::consts::{PI, TAU};

use crate::{
    animation::{
        ease::{lerp, phase_progress, smoothstep_signed},
        eyes::{self, EyeState},
        timeline::{
            AnimationType, FrameClock, JumpPhase, LimbPose, LimbStyle, Pose, WingPose, WingShape,
        },
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
        AnimationType::Roll => roll(t, stage.y),
        AnimationType::Blink => blink(clock),
    }
}

fn rubber_hose(left_deg: f64, right_deg: f64, lift: f64) -> LimbPose {
    LimbPose {
        left_deg,
        right_deg,
        lift,
        style: LimbStyle::RubberHose,
    }
}

fn feathered(angle_deg: f64, exaggeration: f64, motion_blur: bool) -> WingPose {
    WingPose {
        left_deg: angle_deg,
        right_deg: angle_deg,
        exaggeration,
        motion_blur,
        shape: WingShape::Feathered,
    }
}

fn walk(clock: FrameClock, t: f64) -> Pose {
    let phase = 2.0 * TAU * t;
    let bob = smoothstep_signed(phase.sin()) * 12.0;

    // Head trails the body by a fixed phase lag.
    let head_phase = phase - 0.3;
    let head_bob = head_phase.sin() * 6.0;
    let head_tilt = head_phase.sin() * 8.0;

    let velocity = phase.cos();
    let sx = 1.0 + velocity * 0.15;

    let eyes = if eyes::periodic_blink(clock, 3) {
        EyeState::Closed
    } else {
        EyeState::Open {
            look_x: phase.sin(),
        }
    };

    Pose {
        offset: Vec2::new(0.0, bob),
        rotation_deg: head_tilt * 0.5,
        scale: Vec2::new(sx, 1.0 / sx),
        head_offset: Vec2::new(0.0, head_bob),
        limbs: Some(rubber_hose(phase.sin() * 35.0, (phase + PI).sin() * 35.0, 0.0)),
        eyes,
        smear: velocity,
        ..Pose::rest()
    }
}

fn jump(t: f64, height: f64) -> Pose {
    let (dy, scale) = match JumpPhase::at(t) {
        JumpPhase::Anticipation => {
            let p = phase_progress(t, 0.0, JumpPhase::ANTICIPATION_END);
            (p * 0.06 * height, Vec2::new(1.15, 0.85))
        }
        JumpPhase::Ascent => {
            let p = phase_progress(t, JumpPhase::ANTICIPATION_END, JumpPhase::ASCENT_END);
            (-(PI * p).sin() * 0.25 * height, Vec2::new(0.9, 1.2))
        }
        JumpPhase::Landing => {
            let p = phase_progress(t, JumpPhase::ASCENT_END, JumpPhase::LANDING_END);
            (p * 0.04 * height, Vec2::new(1.2, 0.8))
        }
        JumpPhase::Settle => {
            let p = phase_progress(t, JumpPhase::LANDING_END, 1.0);
            (
                (1.0 - p) * 0.04 * height,
                Vec2::new(lerp(1.2, 1.0, p), lerp(0.8, 1.0, p)),
            )
        }
    };

    let airborne = JumpPhase::at(t) == JumpPhase::Ascent;
    let tuck = if airborne { 45.0 } else { 0.0 };
    let wing = (3.0 * TAU * t).sin() * 45.0;

    Pose {
        offset: Vec2::new(0.0, dy),
        scale,
        limbs: Some(rubber_hose(tuck, tuck, 0.0)),
        wings: Some(feathered(wing, 1.5, false)),
        eyes: if airborne {
            EyeState::Wide
        } else {
            EyeState::FORWARD
        },
        ..Pose::rest()
    }
}

fn fly(t: f64) -> Pose {
    let wing_phase = 4.0 * TAU * t;
    let wing_velocity = wing_phase.cos() * 8.0;
    Pose {
        offset: Vec2::new(0.0, (TAU * t).sin() * 10.0),
        rotation_deg: (TAU * t).sin() * 5.0,
        limbs: Some(rubber_hose(45.0, 45.0, 10.0)),
        wings: Some(feathered(
            wing_phase.sin() * 55.0,
            2.0,
            wing_velocity.abs() > 6.0,
        )),
        ..Pose::rest()
    }
}

fn idle(clock: FrameClock, t: f64) -> Pose {
    let breath = (TAU * t).sin();
    let sy = 1.0 + breath * 0.03;

    let (turn, tilt) = if t > 0.3 && t < 0.7 {
        let p = (PI * phase_progress(t, 0.3, 0.7)).sin();
        (p * 8.0, p * 10.0)
    } else {
        (0.0, 0.0)
    };

    let eyes = if eyes::idle_blink(clock) {
        EyeState::Closed
    } else {
        EyeState::Open { look_x: turn / 8.0 }
    };

    Pose {
        offset: Vec2::new(0.0, breath * 4.0),
        rotation_deg: tilt,
        scale: Vec2::new(1.0 / sy, sy),
        head_offset: Vec2::new(turn, 0.0),
        eyes,
        ..Pose::rest()
    }
}

fn excited(t: f64) -> Pose {
    let bounce = (3.0 * TAU * t).sin().abs();
    let sy = 0.9 + bounce * 0.2;
    Pose {
        offset: Vec2::new(0.0, -bounce * 20.0),
        rotation_deg: (3.0 * TAU * t).sin() * 10.0,
        scale: Vec2::new(2.0 - sy, sy),
        wings: Some(feathered((4.0 * TAU * t).sin() * 50.0, 2.0, false)),
        eyes: EyeState::Wide,
        ..Pose::rest()
    }
}

fn roll(t: f64, height: f64) -> Pose {
    let hop = (TAU * t).sin().abs() * 0.05 * height;
    let sy = 1.0 + (2.0 * TAU * t).sin() * 0.08;
    Pose {
        offset: Vec2::new(0.0, -hop),
        rotation_deg: -360.0 * t,
        scale: Vec2::new(1.0 / sy, sy),
        limbs: Some(rubber_hose(45.0, 45.0, 0.0)),
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
