use super::*;

#[test]
fn plain_background_is_white() {
    let bg = background(4, 3, None);
    assert!(bg.pixels().all(|p| p.0 == [255, 255, 255, 255]));
}

#[test]
fn paper_noise_stays_within_three_levels() {
    let mut noise = NoiseStream::seeded(3);
    let bg = background(16, 16, Some(&mut noise));
    assert!(bg.pixels().all(|p| p[3] == 255));
    assert!(bg.pixels().all(|p| (0..3).all(|c| p[c] >= 252)));
    assert!(bg.pixels().any(|p| p[0] != 255));
}

#[test]
fn paper_noise_is_seeded() {
    let a = background(8, 8, Some(&mut NoiseStream::seeded(5)));
    let b = background(8, 8, Some(&mut NoiseStream::seeded(5)));
    assert_eq!(a, b);
}
