use super::*;

#[test]
fn radius_zero_is_identity() {
    let src = vec![1u8, 2, 3, 4, 5, 6, 7, 8];
    assert_eq!(gaussian_blur(&src, 1, 2, 4, 0, 1.0).unwrap(), src);
}

#[test]
fn constant_image_is_unchanged() {
    let (w, h) = (4u32, 3u32);
    let src = [10u8, 20, 30, 255].repeat((w * h) as usize);
    assert_eq!(gaussian_blur(&src, w, h, 4, 3, 2.0).unwrap(), src);
}

#[test]
fn single_channel_spreads_a_spike() {
    let (w, h) = (5u32, 5u32);
    let mut src = vec![0u8; 25];
    src[12] = 255;
    let out = gaussian_blur(&src, w, h, 1, 2, 1.0).unwrap();
    assert!(out[12] < 255);
    assert!(out[11] > 0 && out[7] > 0);
    assert_eq!(out[11], out[13]);
}

#[test]
fn rejects_bad_input() {
    assert!(gaussian_blur(&[0u8; 5], 2, 2, 1, 1, 1.0).is_err());
    assert!(gaussian_blur(&[0u8; 4], 2, 2, 1, 1, 0.0).is_err());
}
