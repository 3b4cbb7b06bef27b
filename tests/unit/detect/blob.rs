use super::*;
use image::Luma;

fn mask_from(rows: &[&str]) -> GrayImage {
    let h = rows.len() as u32;
    let w = rows[0].len() as u32;
    GrayImage::from_fn(w, h, |x, y| {
        let on = rows[y as usize].as_bytes()[x as usize] == b'#';
        Luma([if on { 255 } else { 0 }])
    })
}

#[test]
fn diagonal_pixels_are_connected() {
    let mask = mask_from(&["#...", ".#..", "..#.", "...."]);
    let comps = components(&mask);
    assert_eq!(comps.len(), 1);
    assert_eq!(comps[0].area, 3);
    assert_eq!(comps[0].bounds, PixelRect::new(0, 0, 3, 3));
}

#[test]
fn largest_component_wins() {
    let mask = mask_from(&["##....", "##....", "......", "...###", "...###", "...###"]);
    let best = largest_component(&mask).unwrap();
    assert_eq!(best.area, 9);
    assert_eq!(best.bounds, PixelRect::new(3, 3, 3, 3));
}

#[test]
fn empty_mask_has_no_component() {
    assert!(largest_component(&GrayImage::new(5, 5)).is_none());
    assert!(largest_component(&GrayImage::new(0, 0)).is_none());
}

#[test]
fn ties_keep_first_found() {
    let mask = mask_from(&["#.#"]);
    let best = largest_component(&mask).unwrap();
    assert_eq!(best.bounds.x, 0);
}
