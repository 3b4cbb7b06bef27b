use super::*;
use crate::test_support::{blank, duckling};

fn assert_layout_invariants(layout: &SubjectLayout, w: u32, h: u32) {
    let mut rects = vec![layout.full_body, layout.head, layout.torso];
    rects.extend(layout.beak);
    if let Some(wings) = layout.wings {
        rects.push(wings.left);
        rects.push(wings.right);
    }
    rects.extend(layout.limbs.iter().copied());
    for r in rects {
        assert!(r.fits_within(w, h), "{r:?} escapes {w}x{h}");
    }

    let eyes = layout.eyes.expect("locator always fills eyes");
    assert!(eyes.left.center.x <= eyes.right.center.x);
    assert!(layout.head.contains(eyes.left.center), "{eyes:?}");
    assert!(layout.head.contains(eyes.right.center), "{eyes:?}");
    assert_eq!(layout.silhouette.dimensions(), (w, h));
}

#[test]
fn finds_silhouette_of_synthetic_duckling() {
    let img = duckling(400);
    let layout = PartLocator::new().locate(&img);

    assert_eq!(layout.detection, DetectionQuality::Silhouette);
    // Head and body ellipses span x 100..300, y 100..350, padded by 10.
    let body = layout.full_body;
    assert!(body.x.abs_diff(90) <= 2, "{body:?}");
    assert!(body.y.abs_diff(90) <= 2, "{body:?}");
    assert!(body.right().abs_diff(310) <= 2, "{body:?}");
    assert!(body.bottom().abs_diff(360) <= 2, "{body:?}");
    assert_eq!(layout.limbs.len(), 2);
    assert!(layout.limbs[0].x < layout.limbs[1].x);
    assert_layout_invariants(&layout, 400, 400);
}

#[test]
fn falls_back_to_whole_image() {
    let img = blank(120, 80);
    let layout = PartLocator::new().locate(&img);
    assert_eq!(layout.detection, DetectionQuality::WholeImage);
    assert_eq!(layout.full_body, PixelRect::full(120, 80));
    assert_layout_invariants(&layout, 120, 80);
}

#[test]
fn locate_is_idempotent() {
    let img = duckling(200);
    let locator = PartLocator::new();
    let a = locator.locate(&img);
    let b = locator.locate(&img);
    assert_eq!(a.full_body, b.full_body);
    assert_eq!(a.head, b.head);
    assert_eq!(a.eyes, b.eyes);
    assert_eq!(a.limbs, b.limbs);
    assert_eq!(a.silhouette, b.silhouette);
}

#[test]
fn silhouette_is_filled_body_rect() {
    let img = duckling(120);
    let layout = PartLocator::new().locate(&img);
    let on = layout.silhouette.pixels().filter(|p| p[0] == 255).count();
    let body = layout.full_body;
    assert_eq!(on, (body.width * body.height) as usize);
}

#[test]
fn rig_matches_fixed_proportions() {
    let rig = ProportionalRig::place(PixelRect::new(0, 0, 100, 200), 100, 200);
    assert_eq!(rig.head, PixelRect::new(30, 30, 40, 70));
    assert_eq!(rig.torso, PixelRect::new(20, 80, 60, 100));
    assert_eq!(rig.beak, PixelRect::new(70, 58, 15, 21));
    assert_eq!(rig.wings.left, PixelRect::new(15, 90, 25, 60));
    assert_eq!(rig.wings.right, PixelRect::new(60, 90, 25, 60));
    assert_eq!(rig.limbs[0], PixelRect::new(35, 160, 10, 30));
    assert_eq!(rig.limbs[1], PixelRect::new(55, 160, 10, 30));
}

#[test]
fn rig_clamps_beak_inside_image() {
    let rig = ProportionalRig::place(PixelRect::new(10, 0, 20, 20), 24, 20);
    assert!(rig.beak.fits_within(24, 20));
}

#[test]
fn single_candidate_is_mirrored_and_keeps_its_side() {
    let head = PixelRect::new(100, 50, 80, 60);

    let right_eye = Circle::new(Point::new(60.0, 20.0), 6.0);
    let pair = choose_eyes(&[right_eye], head);
    assert_eq!(pair.source, EyeSource::MirroredSingle);
    assert_eq!(pair.right.center, Point::new(160.0, 70.0));
    assert_eq!(pair.left.center, Point::new(120.0, 70.0));

    let left_eye = Circle::new(Point::new(15.0, 20.0), 6.0);
    let pair = choose_eyes(&[left_eye], head);
    assert_eq!(pair.left.center, Point::new(115.0, 70.0));
    assert_eq!(pair.right.center, Point::new(165.0, 70.0));
}

#[test]
fn two_leftmost_candidates_win() {
    let head = PixelRect::new(0, 0, 100, 100);
    let c = |x: f64| Circle::new(Point::new(x, 40.0), 5.0);
    let pair = choose_eyes(&[c(10.0), c(40.0), c(80.0)], head);
    assert_eq!(pair.source, EyeSource::DetectedPair);
    assert_eq!(pair.left.center.x, 10.0);
    assert_eq!(pair.right.center.x, 40.0);
}

#[test]
fn no_candidates_use_default_positions() {
    let head = PixelRect::new(10, 20, 100, 50);
    let pair = choose_eyes(&[], head);
    assert_eq!(pair.source, EyeSource::Default);
    assert_eq!(pair.left.center, Point::new(40.0, 40.0));
    assert_eq!(pair.right.center, Point::new(80.0, 40.0));
    assert_eq!(pair.left.radius, 4.0);
}
