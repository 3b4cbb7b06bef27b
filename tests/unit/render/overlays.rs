use super::*;

fn alpha_at(px: &[u8], width: u32, x: u32, y: u32) -> u8 {
    px[((y * width + x) * 4 + 3) as usize]
}

fn painted(px: &[u8]) -> usize {
    px.chunks_exact(4).filter(|p| p[3] > 0).count()
}

fn wing_pose(shape: WingShape, motion_blur: bool) -> WingPose {
    WingPose {
        left_deg: 20.0,
        right_deg: 20.0,
        exaggeration: 1.0,
        motion_blur,
        shape,
    }
}

#[test]
fn straight_limb_hangs_below_its_anchor() {
    let mut canvas = SceneCanvas::new(64, 64).unwrap();
    let pose = LimbPose {
        left_deg: 0.0,
        right_deg: 0.0,
        lift: 0.0,
        style: LimbStyle::Straight,
    };
    draw_limbs(
        &mut canvas,
        &[PixelRect::new(20, 10, 12, 20)],
        &pose,
        Affine::IDENTITY,
    );
    let px = canvas.finish();
    assert!(alpha_at(&px, 64, 26, 20) > 0, "leg stroke");
    assert!(alpha_at(&px, 64, 26, 33) > 0, "foot below the leg");
    assert_eq!(alpha_at(&px, 64, 26, 2), 0);
}

#[test]
fn lift_raises_the_limb() {
    let draw = |lift: f64| {
        let mut canvas = SceneCanvas::new(64, 64).unwrap();
        let pose = LimbPose {
            left_deg: 0.0,
            right_deg: 0.0,
            lift,
            style: LimbStyle::RubberHose,
        };
        draw_limbs(
            &mut canvas,
            &[PixelRect::new(20, 20, 12, 20)],
            &pose,
            Affine::IDENTITY,
        );
        canvas.finish()
    };
    let rest = draw(0.0);
    let lifted = draw(10.0);
    assert!(alpha_at(&rest, 64, 26, 42) > 0);
    assert_eq!(alpha_at(&lifted, 64, 26, 55), 0);
    assert!(alpha_at(&lifted, 64, 26, 14) > 0);
}

#[test]
fn no_limbs_draws_nothing() {
    let mut canvas = SceneCanvas::new(16, 16).unwrap();
    let pose = LimbPose {
        left_deg: 10.0,
        right_deg: -10.0,
        lift: 0.0,
        style: LimbStyle::Straight,
    };
    draw_limbs(&mut canvas, &[], &pose, Affine::IDENTITY);
    assert_eq!(painted(&canvas.finish()), 0);
}

#[test]
fn wings_open_outward() {
    let wings = WingPair {
        left: PixelRect::new(10, 40, 20, 20),
        right: PixelRect::new(70, 40, 20, 20),
    };
    let mut canvas = SceneCanvas::new(100, 100).unwrap();
    draw_wings(
        &mut canvas,
        &wings,
        &wing_pose(WingShape::Triangle, false),
        Affine::IDENTITY,
    );
    let px = canvas.finish();
    // Left wing root sits at x = 30 and its tip points left; right wing mirrors it.
    assert!(alpha_at(&px, 100, 25, 50) > 0);
    assert!(alpha_at(&px, 100, 75, 50) > 0);
    assert_eq!(alpha_at(&px, 100, 50, 50), 0);
}

#[test]
fn feathered_wings_cover_more_than_triangles() {
    let wings = WingPair {
        left: PixelRect::new(10, 40, 20, 20),
        right: PixelRect::new(70, 40, 20, 20),
    };
    let area = |shape| {
        let mut canvas = SceneCanvas::new(100, 100).unwrap();
        draw_wings(&mut canvas, &wings, &wing_pose(shape, false), Affine::IDENTITY);
        painted(&canvas.finish())
    };
    assert!(area(WingShape::Feathered) > area(WingShape::Triangle));
}

#[test]
fn motion_blur_wings_are_translucent() {
    let wings = WingPair {
        left: PixelRect::new(10, 40, 20, 20),
        right: PixelRect::new(70, 40, 20, 20),
    };
    let mut canvas = SceneCanvas::new(100, 100).unwrap();
    draw_wings(
        &mut canvas,
        &wings,
        &wing_pose(WingShape::Triangle, true),
        Affine::IDENTITY,
    );
    let px = canvas.finish();
    let a = alpha_at(&px, 100, 22, 50);
    assert!(a > 0 && a < 255, "ghost alpha {a}");
}

fn eye_pair() -> EyePair {
    EyePair {
        left: Circle::new(Point::new(20.0, 20.0), 6.0),
        right: Circle::new(Point::new(44.0, 20.0), 6.0),
        source: crate::detect::locator::EyeSource::DetectedPair,
    }
}

fn render_eyes(state: EyeState, style: MotionStyle) -> Vec<u8> {
    let mut canvas = SceneCanvas::new(64, 40).unwrap();
    draw_eyes(&mut canvas, &eye_pair(), state, style, Affine::IDENTITY);
    canvas.finish()
}

#[test]
fn eye_states_render_distinctly() {
    let open = render_eyes(EyeState::FORWARD, MotionStyle::HandDrawn);
    let closed = render_eyes(EyeState::Closed, MotionStyle::HandDrawn);
    let wide = render_eyes(EyeState::Wide, MotionStyle::HandDrawn);
    assert!(painted(&closed) < painted(&open));
    assert!(painted(&wide) > painted(&open));
}

#[test]
fn open_eye_pupil_is_dark_and_white_is_light() {
    let px = render_eyes(EyeState::FORWARD, MotionStyle::Realistic);
    let at = |x: u32, y: u32| &px[((y * 64 + x) * 4) as usize..((y * 64 + x) * 4 + 4) as usize];
    assert_eq!(at(21, 21)[0], 0, "pupil center");
    assert!(at(24, 20)[0] > 200, "white of the eye");
}

#[test]
fn hand_drawn_eyes_are_larger() {
    let realistic = render_eyes(EyeState::FORWARD, MotionStyle::Realistic);
    let hand = render_eyes(EyeState::FORWARD, MotionStyle::HandDrawn);
    assert!(painted(&hand) > painted(&realistic));
}

#[test]
fn overlays_follow_the_transform() {
    let mut canvas = SceneCanvas::new(64, 40).unwrap();
    draw_eyes(
        &mut canvas,
        &eye_pair(),
        EyeState::FORWARD,
        MotionStyle::Realistic,
        Affine::translate((0.0, 10.0)),
    );
    let px = canvas.finish();
    assert_eq!(alpha_at(&px, 64, 20, 20 - 7), 0);
    assert!(alpha_at(&px, 64, 20, 30) > 0);
}
