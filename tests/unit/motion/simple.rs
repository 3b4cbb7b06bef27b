use super::*;

fn checker(size: u32) -> RgbaImage {
    RgbaImage::from_fn(size, size, |x, y| {
        if (x / 4 + y / 4) % 2 == 0 {
            image::Rgba([200, 30, 30, 255])
        } else {
            image::Rgba([30, 30, 200, 255])
        }
    })
}

#[test]
fn names_round_trip_through_from_str() {
    for m in SimpleMotion::ALL {
        assert_eq!(m.name().parse::<SimpleMotion>().unwrap(), m);
    }
    assert!("spin".parse::<SimpleMotion>().is_err());
}

#[test]
fn bounce_only_moves_up() {
    for i in 0..20 {
        let pose = SimpleMotion::Bounce.pose_at(f64::from(i) / 20.0, 100.0);
        assert!(pose.offset.y <= 0.0);
        assert!(pose.offset.y >= -10.0 - 1e-9);
    }
}

#[test]
fn scale_stays_within_ten_percent() {
    let quarter = SimpleMotion::Scale.pose_at(0.25, 100.0);
    assert!((quarter.scale.x - 1.1).abs() < 1e-9);
    assert_eq!(quarter.scale.x, quarter.scale.y);
}

#[test]
fn wobble_and_rotate_angles() {
    assert!((SimpleMotion::Rotate.pose_at(0.5, 1.0).rotation_deg - 180.0).abs() < 1e-9);
    assert!((SimpleMotion::Wobble.pose_at(0.125, 1.0).rotation_deg - 5.0).abs() < 1e-9);
}

#[test]
fn first_frame_matches_the_source() {
    let image = checker(32);
    let frames = animate_simple(&image, SimpleMotion::Bounce, 4).unwrap();
    assert_eq!(frames.len(), 4);
    let off = frames.frames()[0]
        .pixels()
        .zip(image.pixels())
        .filter(|(a, b)| (0..3).any(|c| a[c].abs_diff(b[c]) > 8))
        .count();
    assert!(off * 20 < (32 * 32) as usize, "{off} pixels moved");
}

#[test]
fn rotated_frames_expose_white_corners() {
    let image = checker(32);
    let frames = animate_simple(&image, SimpleMotion::Rotate, 8).unwrap();
    // One eighth of a turn leaves the corners uncovered.
    assert_eq!(frames.frames()[1].get_pixel(0, 0).0, [255, 255, 255, 255]);
}

#[test]
fn zero_frames_is_rejected() {
    assert!(animate_simple(&checker(8), SimpleMotion::Scale, 0).is_err());
}
