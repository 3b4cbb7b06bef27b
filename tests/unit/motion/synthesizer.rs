use super::*;
use crate::{
    detect::locator::PartLocator,
    foundation::core::{PixelRect, Point},
    test_support::duckling,
};

fn subject() -> (RgbaImage, SubjectLayout) {
    let image = duckling(96);
    let layout = PartLocator::default().locate(&image);
    (image, layout)
}

#[test]
fn every_kind_yields_the_requested_frame_count() {
    let (image, layout) = subject();
    for style in [MotionStyle::Realistic, MotionStyle::HandDrawn] {
        let mut synth = MotionSynthesizer::new(style, NoiseStream::seeded(1));
        for kind in AnimationType::ALL {
            for n in [1, 4] {
                let frames = synth.animate(&image, &layout, kind, n).unwrap();
                assert_eq!(frames.len(), n as usize, "{style:?} {kind}");
                assert_eq!(frames.dimensions(), Some(image.dimensions()));
            }
        }
    }
}

#[test]
fn zero_frames_is_a_validation_error() {
    let (image, layout) = subject();
    let mut synth = MotionSynthesizer::new(MotionStyle::Realistic, NoiseStream::seeded(1));
    let err = synth
        .animate(&image, &layout, AnimationType::Walk, 0)
        .unwrap_err();
    assert!(matches!(err, ToonError::Validation(_)));
}

#[test]
fn equal_seeds_give_equal_frames() {
    let (image, layout) = subject();
    let run = |seed| {
        MotionSynthesizer::new(MotionStyle::HandDrawn, NoiseStream::seeded(seed))
            .animate(&image, &layout, AnimationType::Jump, 3)
            .unwrap()
            .into_frames()
    };
    assert_eq!(run(9), run(9));
    assert_ne!(run(9), run(10));
}

#[test]
fn realistic_frames_are_deterministic_without_a_seed_dependence() {
    let (image, layout) = subject();
    let run = |seed| {
        MotionSynthesizer::new(MotionStyle::Realistic, NoiseStream::seeded(seed))
            .animate(&image, &layout, AnimationType::Idle, 2)
            .unwrap()
            .into_frames()
    };
    assert_eq!(run(1), run(2));
}

#[test]
fn missing_parts_are_skipped() {
    let (image, mut layout) = subject();
    layout.eyes = None;
    layout.wings = None;
    layout.beak = None;
    layout.limbs.clear();
    let mut synth = MotionSynthesizer::new(MotionStyle::HandDrawn, NoiseStream::seeded(3));
    for kind in AnimationType::ALL {
        assert_eq!(synth.animate(&image, &layout, kind, 2).unwrap().len(), 2);
    }
}

#[test]
fn blink_changes_the_eye_pixels() {
    let (image, layout) = subject();
    let mut synth = MotionSynthesizer::new(MotionStyle::Realistic, NoiseStream::seeded(1));
    let frames = synth
        .animate(&image, &layout, AnimationType::Blink, 6)
        .unwrap();
    // Frame 0 has open eyes, frame 3 sits inside the closed middle third.
    assert_ne!(frames.frames()[0], frames.frames()[3]);
    assert_eq!(frames.frames()[0], frames.frames()[1]);
}

#[test]
fn rest_pose_maps_points_to_themselves() {
    let a = body_affine(&Pose::rest(), 100, 80, Vec2::ZERO);
    let p = a * Point::new(12.0, 34.0);
    assert!((p.x - 12.0).abs() < 1e-9 && (p.y - 34.0).abs() < 1e-9);
}

#[test]
fn translation_is_clamped_to_half_the_canvas() {
    let pose = Pose {
        offset: Vec2::new(500.0, -500.0),
        ..Pose::rest()
    };
    let a = body_affine(&pose, 100, 80, Vec2::ZERO);
    let p = a * Point::new(0.0, 0.0);
    assert!((p.x - 50.0).abs() < 1e-9);
    assert!((p.y + 40.0).abs() < 1e-9);
}

#[test]
fn positive_rotation_turns_counter_clockwise_on_screen() {
    let pose = Pose {
        rotation_deg: 90.0,
        ..Pose::rest()
    };
    let a = body_affine(&pose, 100, 100, Vec2::ZERO);
    // A point right of center ends up above it (smaller y) after a CCW quarter turn.
    let p = a * Point::new(60.0, 50.0);
    assert!((p.x - 50.0).abs() < 1e-9);
    assert!((p.y - 40.0).abs() < 1e-9);
}

#[test]
fn head_patch_is_skipped_for_an_empty_head() {
    let (image, mut layout) = subject();
    layout.head = PixelRect::default();
    let sources = FrameSources::new(&image, &layout).unwrap();
    assert!(sources.head_patch.is_none());
}
