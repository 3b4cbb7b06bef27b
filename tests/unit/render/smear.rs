use super::*;

#[test]
fn radius_0_is_identity() {
    let src = vec![1u8, 2, 3, 4, 5, 6, 7, 8];
    let out = smear_rgba8_premul(&src, 2, 1, 0).unwrap();
    assert_eq!(out, src);
}

#[test]
fn constant_rows_are_unchanged() {
    let (w, h) = (5u32, 3u32);
    let px = [10u8, 20, 30, 40];
    let src = px.repeat((w * h) as usize);
    let out = smear_rgba8_premul(&src, w, h, 2).unwrap();
    assert_eq!(out, src);
}

#[test]
fn smear_is_horizontal_only() {
    let (w, h) = (5u32, 3u32);
    let mut src = vec![0u8; (w * h * 4) as usize];
    let center = ((w + 2) * 4) as usize;
    src[center..center + 4].copy_from_slice(&[255, 255, 255, 255]);

    let out = smear_rgba8_premul(&src, w, h, 1).unwrap();
    let alpha = |x: u32, y: u32| out[((y * w + x) * 4 + 3) as usize];
    assert_eq!(alpha(1, 1), 85);
    assert_eq!(alpha(2, 1), 85);
    assert_eq!(alpha(3, 1), 85);
    assert_eq!(alpha(0, 1), 0);
    assert_eq!(alpha(2, 0), 0);
    assert_eq!(alpha(2, 2), 0);
}

#[test]
fn rejects_wrong_length() {
    assert!(smear_rgba8_premul(&[0u8; 7], 1, 2, 1).is_err());
}
