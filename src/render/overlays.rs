//! Vector body-part overlays: limbs, wings and eyes. Everything is drawn in source-image
//! coordinates and mapped through the caller's body transform.

use crate::{
    animation::{
        eyes::EyeState,
        timeline::{LimbPose, LimbStyle, MotionStyle, WingPose, WingShape},
    },
    detect::locator::{EyePair, WingPair},
    foundation::core::{Affine, BezPath, Circle, PixelRect, Point, Vec2},
    render::{
        cpu::SceneCanvas,
        paint,
        shapes,
    },
};

/// Horizontal offsets of the motion-blur ghosts drawn for fast wings.
const WING_GHOSTS: [f64; 4] = [-3.0, -1.0, 1.0, 3.0];

pub fn draw_limbs(canvas: &mut SceneCanvas, limbs: &[PixelRect], pose: &LimbPose, body: Affine) {
    let lifted = body * Affine::translate((0.0, -pose.lift));
    for (idx, limb) in limbs.iter().enumerate() {
        let angle = if idx == 0 {
            pose.left_deg
        } else {
            pose.right_deg
        };
        match pose.style {
            LimbStyle::Straight => straight_limb(canvas, *limb, angle, lifted),
            LimbStyle::RubberHose => rubber_hose_limb(canvas, *limb, angle, lifted),
        }
    }
}

fn limb_top(limb: PixelRect) -> Point {
    Point::new(
        f64::from(limb.x) + f64::from(limb.width) / 2.0,
        f64::from(limb.y),
    )
}

fn swing(top: Point, angle_deg: f64, length: f64) -> Point {
    let a = angle_deg.to_radians();
    top + Vec2::new(a.sin() * length, a.cos() * length)
}

fn straight_limb(canvas: &mut SceneCanvas, limb: PixelRect, angle: f64, transform: Affine) {
    let (w, h) = (f64::from(limb.width), f64::from(limb.height));
    let top = limb_top(limb);
    let foot = swing(top, angle, h);
    canvas.stroke_path(
        &shapes::line(top, foot),
        transform,
        (w / 3.0).max(2.0),
        paint::ORANGE,
        1.0,
    );
    let toes = shapes::polygon(&[
        foot - Vec2::new(w / 2.0, 0.0),
        foot + Vec2::new(0.0, h / 4.0),
        foot + Vec2::new(w / 2.0, 0.0),
    ]);
    canvas.fill_path(&toes, transform, paint::ORANGE, 1.0);
    canvas.stroke_path(&toes, transform, 1.0, paint::DARK_ORANGE, 1.0);
}

fn rubber_hose_limb(canvas: &mut SceneCanvas, limb: PixelRect, angle: f64, transform: Affine) {
    let (w, h) = (f64::from(limb.width), f64::from(limb.height));
    let top = limb_top(limb);
    let bend = top + Vec2::new((angle * 0.6).to_radians().sin() * h * 0.5, h * 0.5);
    let foot = swing(top, angle, h);
    canvas.stroke_path(
        &shapes::quad(top, bend, foot),
        transform,
        (w / 2.0).max(3.0),
        paint::ORANGE,
        1.0,
    );
    let size = w * 1.5;
    let toes = shapes::polygon(&[
        foot - Vec2::new(size, 0.0),
        foot + Vec2::new(0.0, size / 2.0),
        foot + Vec2::new(size, 0.0),
    ]);
    canvas.fill_path(&toes, transform, paint::ORANGE, 1.0);
    canvas.stroke_path(&toes, transform, 1.5, paint::DARK_ORANGE, 1.0);
}

pub fn draw_wings(canvas: &mut SceneCanvas, wings: &WingPair, pose: &WingPose, body: Affine) {
    // The left wing is rooted at its inner (right) edge and opens to the left.
    let left = wing_outline(wings.left, pose.left_deg, pose, -1.0);
    let right = wing_outline(wings.right, pose.right_deg, pose, 1.0);
    for outline in [left, right] {
        if pose.motion_blur {
            for dx in WING_GHOSTS {
                let ghost = body * Affine::translate((dx, 0.0));
                canvas.fill_path(&outline, ghost, paint::GOLD, 100.0 / 255.0);
                canvas.stroke_path(&outline, ghost, 1.0, paint::ORANGE, 0.6);
            }
        } else {
            canvas.fill_path(&outline, body, paint::GOLD, 1.0);
            canvas.stroke_path(&outline, body, 1.5, paint::ORANGE, 1.0);
        }
    }
}

fn wing_outline(
    rect: PixelRect,
    angle_deg: f64,
    pose: &WingPose,
    outward: f64,
) -> BezPath {
    let (w, h) = (f64::from(rect.width), f64::from(rect.height));
    let root_x = if outward < 0.0 {
        f64::from(rect.right())
    } else {
        f64::from(rect.x)
    };
    let root = Point::new(root_x, f64::from(rect.y) + h / 2.0);
    let length = w * pose.exaggeration;
    let a = angle_deg.to_radians();
    let tip = root + Vec2::new(outward * a.cos() * length, -a.sin() * length);

    match pose.shape {
        WingShape::Triangle => shapes::polygon(&[
            root - Vec2::new(0.0, h / 2.0),
            tip,
            root + Vec2::new(0.0, h / 2.0),
        ]),
        WingShape::Feathered => shapes::polygon(&[
            root - Vec2::new(0.0, h * 0.6),
            tip - Vec2::new(0.0, h * 0.3),
            tip + Vec2::new(outward * length * 0.2, 0.0),
            tip + Vec2::new(0.0, h * 0.3),
            root + Vec2::new(0.0, h * 0.6),
        ]),
    }
}

/// Eye rendering scale relative to the detected radius.
fn eye_scale(state: EyeState, style: MotionStyle) -> f64 {
    match (state, style) {
        (EyeState::Wide, _) => 1.6,
        (_, MotionStyle::HandDrawn) => 1.3,
        (_, MotionStyle::Realistic) => 1.0,
    }
}

pub fn draw_eyes(
    canvas: &mut SceneCanvas,
    eyes: &EyePair,
    state: EyeState,
    style: MotionStyle,
    head: Affine,
) {
    for eye in [eyes.left, eyes.right] {
        let r = (eye.radius * eye_scale(state, style)).max(1.0);
        match state {
            EyeState::Open { look_x } => open_eye(canvas, eye, r, look_x, style, head),
            EyeState::Closed => closed_eye(canvas, eye, r, style, head),
            EyeState::Wide => wide_eye(canvas, eye, r, head),
        }
    }
}

fn open_eye(
    canvas: &mut SceneCanvas,
    eye: Circle,
    r: f64,
    look_x: f64,
    style: MotionStyle,
    head: Affine,
) {
    let (outline, pupil_ratio) = match style {
        MotionStyle::Realistic => (1.0, 0.5),
        MotionStyle::HandDrawn => (2.0, 0.6),
    };
    let c = eye.center;
    let white = shapes::circle(c, r);
    canvas.fill_path(&white, head, paint::WHITE, 1.0);
    canvas.stroke_path(&white, head, outline, paint::BLACK, 1.0);

    let pupil_r = r * pupil_ratio;
    let shift = look_x.clamp(-1.0, 1.0) * r * 0.4;
    let pupil = c + Vec2::new(shift, 0.0);
    canvas.fill_path(&shapes::circle(pupil, pupil_r), head, paint::BLACK, 1.0);
    highlight(canvas, pupil + Vec2::new(-0.3 * r, -0.3 * r), r * 0.2, head);
}

fn closed_eye(canvas: &mut SceneCanvas, eye: Circle, r: f64, style: MotionStyle, head: Affine) {
    let c = eye.center;
    let (lid, width) = match style {
        MotionStyle::Realistic => (shapes::line(c - Vec2::new(r, 0.0), c + Vec2::new(r, 0.0)), 2.0),
        MotionStyle::HandDrawn => (
            shapes::quad(
                c - Vec2::new(r, 0.0),
                c + Vec2::new(0.0, r),
                c + Vec2::new(r, 0.0),
            ),
            3.0,
        ),
    };
    canvas.stroke_path(&lid, head, width, paint::BLACK, 1.0);
}

fn wide_eye(canvas: &mut SceneCanvas, eye: Circle, r: f64, head: Affine) {
    let c = eye.center;
    let white = shapes::circle(c, r);
    canvas.fill_path(&white, head, paint::WHITE, 1.0);
    canvas.stroke_path(&white, head, 3.0, paint::BLACK, 1.0);
    canvas.fill_path(&shapes::circle(c, r * 0.5), head, paint::BLACK, 1.0);
    for (fx, fy) in [(-0.3, -0.3), (0.2, 0.2)] {
        highlight(canvas, c + Vec2::new(fx * r, fy * r), r * 0.125, head);
    }
}

fn highlight(canvas: &mut SceneCanvas, at: Point, r: f64, head: Affine) {
    canvas.fill_path(&shapes::circle(at, r.max(0.5)), head, paint::WHITE, 1.0);
}

#[cfg(test)]
#[path = "../../tests/unit/render/overlays.rs"]
mod tests;
