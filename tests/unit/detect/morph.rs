use super::*;

fn mask_from(rows: &[&str]) -> GrayImage {
    let h = rows.len() as u32;
    let w = rows[0].len() as u32;
    GrayImage::from_fn(w, h, |x, y| {
        let on = rows[y as usize].as_bytes()[x as usize] == b'#';
        Luma([if on { 255 } else { 0 }])
    })
}

fn count_on(mask: &GrayImage) -> usize {
    mask.pixels().filter(|p| p[0] > 0).count()
}

#[test]
fn ellipse_kernel_has_21_samples() {
    assert_eq!(Kernel::ellipse5().len(), 21);
    assert_eq!(Kernel::square(2).len(), 4);
    assert_eq!(Kernel::square(3).len(), 9);
}

#[test]
fn open_removes_isolated_specks() {
    let mask = mask_from(&[
        "..........",
        ".#........",
        "..........",
        "...#######",
        "...#######",
        "...#######",
        "...#######",
        "...#######",
        "..........",
    ]);
    let opened = open(&mask, &Kernel::ellipse5());
    assert_eq!(opened.get_pixel(1, 1)[0], 0);
    assert_eq!(opened.get_pixel(6, 5)[0], 255);
}

#[test]
fn close_fills_pinholes() {
    let mut mask = GrayImage::from_pixel(9, 9, Luma([255]));
    mask.put_pixel(4, 4, Luma([0]));
    let closed = close(&mask, &Kernel::ellipse5());
    assert_eq!(count_on(&closed), 81);
}

#[test]
fn dilate_grows_single_pixel_to_kernel_shape() {
    let mut mask = GrayImage::new(7, 7);
    mask.put_pixel(3, 3, Luma([255]));
    let grown = dilate(&mask, &Kernel::ellipse5());
    assert_eq!(count_on(&grown), 21);
    assert_eq!(grown.get_pixel(1, 1)[0], 0);
    assert_eq!(grown.get_pixel(3, 1)[0], 255);
}

#[test]
fn erode_keeps_image_border_samples() {
    let mask = GrayImage::from_pixel(4, 4, Luma([255]));
    assert_eq!(count_on(&erode(&mask, &Kernel::ellipse5())), 16);
}
