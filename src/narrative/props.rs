//! Prop and condition overlays drawn on top of a segment's frames.

use std::f64::consts::{PI, TAU};

use image::RgbaImage;

use crate::{
    animation::timeline::FrameClock,
    foundation::{
        core::{Affine, Point, Vec2},
        error::ToonResult,
    },
    narrative::{
        keywords::{Outcome, Prop},
        parser::AnimationSegment,
    },
    render::{
        cpu::SceneCanvas,
        paint,
        shapes,
    },
};

const STAR_COUNT: u32 = 5;
const HEART_COUNT: u32 = 3;
/// Face a settled die shows when no result in `1..=6` is known.
const DEFAULT_DIE_FACE: u8 = 6;

/// Canvas size plus loop position of one frame.
#[derive(Clone, Copy, Debug)]
struct Stage {
    w: f64,
    h: f64,
    clock: FrameClock,
}

impl Stage {
    fn min_side(self) -> f64 {
        self.w.min(self.h)
    }

    /// Loop time of the `k`-th of `of` evenly staggered copies, wrapped into `[0, 1)`.
    fn staggered(self, k: u32, of: u32) -> f64 {
        let n = f64::from(self.clock.count.max(1));
        let shifted = f64::from(self.clock.index) + f64::from(k) * n / f64::from(of);
        (shifted / n).fract()
    }
}

/// Draw the segment's props and condition indicators over `frame`. Frames of segments
/// with neither are left untouched.
pub fn decorate_frame(
    frame: &mut RgbaImage,
    segment: &AnimationSegment,
    clock: FrameClock,
) -> ToonResult<()> {
    if segment.props.is_empty() && segment.conditions.is_empty() {
        return Ok(());
    }
    let (w, h) = frame.dimensions();
    let stage = Stage {
        w: f64::from(w),
        h: f64::from(h),
        clock,
    };
    let mut canvas = SceneCanvas::new(w, h)?;
    let result = segment.conditions.result;

    for prop in &segment.props {
        match prop {
            Prop::Star => sparkles(&mut canvas, stage),
            Prop::Heart => hearts(&mut canvas, stage),
            Prop::Coin => coin(&mut canvas, stage),
            Prop::Dice => die(&mut canvas, stage, result),
        }
    }

    let (i, n) = (u64::from(clock.index), u64::from(clock.count));
    if let Some(value) = result
        && 10 * i > 7 * n
    {
        result_badge(&mut canvas, stage, value);
    }
    if segment.conditions.outcome == Some(Outcome::Success) && 10 * i > 6 * n {
        sparkles(&mut canvas, stage);
    }
    canvas.composite_onto(frame)
}

fn sparkles(canvas: &mut SceneCanvas, stage: Stage) {
    let center = Point::new(stage.w / 2.0, stage.h / 2.0);
    let orbit = stage.min_side() * 0.35;
    for k in 0..STAR_COUNT {
        let t = stage.staggered(k, STAR_COUNT);
        let angle = TAU * t + TAU * f64::from(k) / f64::from(STAR_COUNT);
        let at = center + Vec2::new(angle.cos() * orbit, angle.sin() * orbit);
        let size = 10.0 + 5.0 * (2.0 * TAU * t).sin();
        let path = shapes::star(at, size, size * 0.47, 4);
        canvas.fill_path(&path, Affine::IDENTITY, paint::GOLD, 1.0);
        canvas.stroke_path(&path, Affine::IDENTITY, 1.0, paint::ORANGE, 1.0);
    }
}

fn hearts(canvas: &mut SceneCanvas, stage: Stage) {
    for k in 0..HEART_COUNT {
        let t = stage.staggered(k, HEART_COUNT);
        let x = stage.w / 2.0 + (f64::from(k) - 1.0) * stage.w * 0.15;
        let y = stage.h * (0.9 - t * 0.7);
        let opacity = (1.0 - t * 0.8) as f32;
        let path = shapes::heart(Point::new(x, y), 20.0);
        canvas.fill_path(&path, Affine::IDENTITY, paint::HEART_RED, opacity);
    }
}

fn coin(canvas: &mut SceneCanvas, stage: Stage) {
    let center = Point::new(stage.w / 2.0, stage.h * 0.25);
    let half_width = 20.0 * (2.0 * TAU * stage.clock.t()).cos().abs();
    let path = shapes::ellipse(center, Vec2::new(half_width, 20.0));
    canvas.fill_path(&path, Affine::IDENTITY, paint::GOLD, 1.0);
    canvas.stroke_path(&path, Affine::IDENTITY, 2.0, paint::COIN_EDGE, 1.0);
}

/// Die motion: slides in from the center during the first 30 % of the segment, tumbles
/// with cycling faces until 70 %, then rests upright on the result face.
fn die(canvas: &mut SceneCanvas, stage: Stage, result: Option<u32>) {
    let (i, n) = (stage.clock.index, stage.clock.count.max(1));
    let entrance_end = f64::from(n) * 0.3;
    let settled = 10 * u64::from(i) >= 7 * u64::from(n);

    let x = if f64::from(i) < entrance_end {
        let progress = f64::from(i) / entrance_end;
        stage.w * (0.5 + progress * 0.3)
    } else {
        stage.w * 0.8
    };
    let center = Point::new(x, stage.h * 0.7);
    let size = (stage.min_side() / 8.0).max(6.0);

    let result_face = result
        .and_then(|r| u8::try_from(r).ok())
        .filter(|r| (1..=6).contains(r))
        .unwrap_or(DEFAULT_DIE_FACE);
    let (face, angle) = if settled {
        (result_face, 0.0)
    } else {
        ((i % 6) as u8 + 1, f64::from(i * 30 % 360))
    };

    let spin = Affine::translate(center.to_vec2())
        * Affine::rotate(-angle * PI / 180.0)
        * Affine::translate(-center.to_vec2());
    let body = shapes::rounded_rect(center, size, size * 0.15);
    canvas.fill_path(&body, spin, paint::DIE_FACE, 1.0);
    canvas.stroke_path(&body, spin, 3.0, paint::BLACK, 1.0);
    for &(px, py) in shapes::pip_layout(face) {
        let pip = center + Vec2::new(px * size / 2.0, py * size / 2.0);
        canvas.fill_path(&shapes::circle(pip, size / 10.0), spin, paint::BLACK, 1.0);
    }
}

fn result_badge(canvas: &mut SceneCanvas, stage: Stage, value: u32) {
    let digits: Vec<u8> = value
        .to_string()
        .bytes()
        .map(|b| b - b'0')
        .collect();
    let height = (stage.min_side() / 8.0).max(10.0);
    let advance = shapes::digit_advance(height);
    let origin = Point::new(stage.w * 0.75, stage.h * 0.55);
    let pad = height * 0.2;

    let width = advance * digits.len() as f64;
    let plate = shapes::rect(
        origin.x - pad,
        origin.y - pad,
        origin.x + width + pad,
        origin.y + height + pad,
    );
    canvas.fill_path(&plate, Affine::IDENTITY, paint::BADGE, 1.0);
    canvas.stroke_path(&plate, Affine::IDENTITY, 2.0, paint::BLACK, 1.0);

    for (k, d) in digits.into_iter().enumerate() {
        let at = origin + Vec2::new(advance * k as f64, 0.0);
        for bar in shapes::digit(at, height, d) {
            canvas.fill_path(&bar, Affine::IDENTITY, paint::HEART_RED, 1.0);
            canvas.stroke_path(&bar, Affine::IDENTITY, 1.0, paint::BLACK, 1.0);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/narrative/props.rs"]
mod tests;
