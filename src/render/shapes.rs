//! Path builders for overlays and props.

use std::f64::consts::{FRAC_PI_2, TAU};

use kurbo::{Circle as KCircle, Ellipse, Rect, RoundedRect, Shape};

use crate::foundation::core::{BezPath, Point, Vec2};

const TOLERANCE: f64 = 0.1;

pub fn circle(center: Point, radius: f64) -> BezPath {
    KCircle::new(center, radius.max(0.0)).to_path(TOLERANCE)
}

pub fn ellipse(center: Point, radii: Vec2) -> BezPath {
    Ellipse::new(center, radii, 0.0).to_path(TOLERANCE)
}

pub fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> BezPath {
    Rect::new(x0, y0, x1, y1).to_path(TOLERANCE)
}

pub fn rounded_rect(center: Point, size: f64, corner: f64) -> BezPath {
    let half = size / 2.0;
    RoundedRect::new(
        center.x - half,
        center.y - half,
        center.x + half,
        center.y + half,
        corner,
    )
    .to_path(TOLERANCE)
}

/// Closed polygon through `points`; empty for fewer than three points.
pub fn polygon(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    if points.len() < 3 {
        return path;
    }
    path.move_to(points[0]);
    for &p in &points[1..] {
        path.line_to(p);
    }
    path.close_path();
    path
}

pub fn line(a: Point, b: Point) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(a);
    path.line_to(b);
    path
}

/// Open quadratic curve from `a` to `b` bent toward `control`.
pub fn quad(a: Point, control: Point, b: Point) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(a);
    path.quad_to(control, b);
    path
}

/// Star with `points` tips, first tip pointing up.
pub fn star(center: Point, outer: f64, inner: f64, points: u32) -> BezPath {
    let n = points.max(2) as usize * 2;
    let verts: Vec<Point> = (0..n)
        .map(|i| {
            let r = if i % 2 == 0 { outer } else { inner };
            let a = -FRAC_PI_2 + TAU * i as f64 / n as f64;
            center + Vec2::new(a.cos() * r, a.sin() * r)
        })
        .collect();
    polygon(&verts)
}

/// Heart of width `size` centered on `center`.
pub fn heart(center: Point, size: f64) -> BezPath {
    let s = size / 2.0;
    let p = |x: f64, y: f64| center + Vec2::new(x * s, y * s);
    let mut path = BezPath::new();
    path.move_to(p(0.0, 0.9));
    path.curve_to(p(-0.3, 0.6), p(-1.0, 0.2), p(-1.0, -0.3));
    path.curve_to(p(-1.0, -0.8), p(-0.3, -1.0), p(0.0, -0.5));
    path.curve_to(p(0.3, -1.0), p(1.0, -0.8), p(1.0, -0.3));
    path.curve_to(p(1.0, 0.2), p(0.3, 0.6), p(0.0, 0.9));
    path.close_path();
    path
}

/// Segments `a..g` lit for each decimal digit.
const SEGMENTS: [[bool; 7]; 10] = [
    [true, true, true, true, true, true, false],
    [false, true, true, false, false, false, false],
    [true, true, false, true, true, false, true],
    [true, true, true, true, false, false, true],
    [false, true, true, false, false, true, true],
    [true, false, true, true, false, true, true],
    [true, false, true, true, true, true, true],
    [true, true, true, false, false, false, false],
    [true, true, true, true, true, true, true],
    [true, true, true, true, false, true, true],
];

/// Seven-segment glyph for `digit` (0-9) in a box `height` tall whose top-left is `origin`.
pub fn digit(origin: Point, height: f64, digit: u8) -> Vec<BezPath> {
    let Some(lit) = SEGMENTS.get(usize::from(digit)) else {
        return Vec::new();
    };
    let w = height * 0.55;
    let t = (height * 0.12).max(1.0);
    let half = height / 2.0;
    let (x, y) = (origin.x, origin.y);
    let bars = [
        (x, y, x + w, y + t),
        (x + w - t, y, x + w, y + half),
        (x + w - t, y + half, x + w, y + height),
        (x, y + height - t, x + w, y + height),
        (x, y + half, x + t, y + height),
        (x, y, x + t, y + half),
        (x, y + half - t / 2.0, x + w, y + half + t / 2.0),
    ];
    bars.iter()
        .zip(lit)
        .filter(|(_, on)| **on)
        .map(|(&(x0, y0, x1, y1), _)| rect(x0, y0, x1, y1))
        .collect()
}

/// Width of one digit glyph of the given height, spacing included.
pub fn digit_advance(height: f64) -> f64 {
    height * 0.75
}

/// Pip centers of a die face (1-6) in unit coordinates `[-1, 1]`.
pub fn pip_layout(face: u8) -> &'static [(f64, f64)] {
    const C: f64 = 0.0;
    const L: f64 = -0.55;
    const H: f64 = 0.55;
    match face {
        1 => &[(C, C)],
        2 => &[(L, L), (H, H)],
        3 => &[(L, L), (C, C), (H, H)],
        4 => &[(L, L), (H, L), (L, H), (H, H)],
        5 => &[(L, L), (H, L), (C, C), (L, H), (H, H)],
        _ => &[(L, L), (H, L), (L, C), (H, C), (L, H), (H, H)],
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/shapes.rs"]
mod tests;
