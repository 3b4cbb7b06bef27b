//! Gradient Hough circle search: edge pixels vote along their gradient direction for every
//! radius in range, accumulator peaks become centers, and each center takes the radius most
//! edge pixels agree on.

use image::GrayImage;

use crate::foundation::core::{Circle, Point};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoughParams {
    pub min_radius: u32,
    pub max_radius: u32,
    /// Minimum distance between accepted centers.
    pub min_dist: f64,
    /// Upper hysteresis threshold of the edge detector; the lower one is half of it.
    pub edge_threshold: f64,
    /// Votes a center needs to be considered.
    pub accumulator_threshold: u32,
}

impl Default for HoughParams {
    fn default() -> Self {
        Self {
            min_radius: 1,
            max_radius: 2,
            min_dist: 1.0,
            edge_threshold: 50.0,
            accumulator_threshold: 30,
        }
    }
}

/// Detected circle plus the votes its center collected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleCandidate {
    pub circle: Circle,
    pub votes: u32,
}

struct Gradients {
    gx: Vec<i32>,
    gy: Vec<i32>,
    mag: Vec<i32>,
}

/// Circles in `gray`'s own coordinates, strongest first.
pub fn find_circles(gray: &GrayImage, params: &HoughParams) -> Vec<CircleCandidate> {
    let (w, h) = gray.dimensions();
    if w < 3 || h < 3 || params.max_radius < params.min_radius {
        return Vec::new();
    }

    let grads = sobel(gray);
    let edges = edge_pixels(&grads, w, h, params.edge_threshold);
    if edges.is_empty() {
        return Vec::new();
    }

    let acc = accumulate(&grads, &edges, w, h, params);
    let mut centers = peaks(&acc, w, h, params.accumulator_threshold);
    centers.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let mut out: Vec<CircleCandidate> = Vec::new();
    for (idx, votes) in centers {
        let center = Point::new(f64::from(idx as u32 % w), f64::from(idx as u32 / w));
        if out
            .iter()
            .any(|c| c.circle.center.distance(center) < params.min_dist)
        {
            continue;
        }
        if let Some(radius) = best_radius(center, &edges, w, params) {
            out.push(CircleCandidate {
                circle: Circle::new(center, f64::from(radius)),
                votes,
            });
        }
    }
    out
}

fn sobel(gray: &GrayImage) -> Gradients {
    let (w, h) = gray.dimensions();
    let (wi, hi) = (w as i32, h as i32);
    let px = |x: i32, y: i32| -> i32 {
        i32::from(gray.get_pixel(x.clamp(0, wi - 1) as u32, y.clamp(0, hi - 1) as u32)[0])
    };

    let n = w as usize * h as usize;
    let mut gx = vec![0i32; n];
    let mut gy = vec![0i32; n];
    let mut mag = vec![0i32; n];
    for y in 0..hi {
        for x in 0..wi {
            let dx = (px(x + 1, y - 1) + 2 * px(x + 1, y) + px(x + 1, y + 1))
                - (px(x - 1, y - 1) + 2 * px(x - 1, y) + px(x - 1, y + 1));
            let dy = (px(x - 1, y + 1) + 2 * px(x, y + 1) + px(x + 1, y + 1))
                - (px(x - 1, y - 1) + 2 * px(x, y - 1) + px(x + 1, y - 1));
            let idx = (y * wi + x) as usize;
            gx[idx] = dx;
            gy[idx] = dy;
            mag[idx] = dx.abs() + dy.abs();
        }
    }
    Gradients { gx, gy, mag }
}

/// Thin edges by non-maximum suppression, then keep weak edges connected to strong ones.
fn edge_pixels(grads: &Gradients, w: u32, h: u32, high: f64) -> Vec<usize> {
    let (wi, hi) = (w as i32, h as i32);
    let low = high / 2.0;
    let at = |x: i32, y: i32| -> i32 {
        if x < 0 || y < 0 || x >= wi || y >= hi {
            0
        } else {
            grads.mag[(y * wi + x) as usize]
        }
    };

    // 0 = none, 1 = weak, 2 = strong
    let mut class = vec![0u8; grads.mag.len()];
    for y in 0..hi {
        for x in 0..wi {
            let idx = (y * wi + x) as usize;
            let m = grads.mag[idx];
            if f64::from(m) < low {
                continue;
            }
            let (gx, gy) = (f64::from(grads.gx[idx]), f64::from(grads.gy[idx]));
            let angle = gy.atan2(gx).to_degrees().rem_euclid(180.0);
            let (ox, oy) = if !(22.5..157.5).contains(&angle) {
                (1, 0)
            } else if angle < 67.5 {
                (1, 1)
            } else if angle < 112.5 {
                (0, 1)
            } else {
                (-1, 1)
            };
            if m < at(x + ox, y + oy) || m < at(x - ox, y - oy) {
                continue;
            }
            class[idx] = if f64::from(m) >= high { 2 } else { 1 };
        }
    }

    let mut stack: Vec<usize> = (0..class.len()).filter(|&i| class[i] == 2).collect();
    let mut keep = vec![false; class.len()];
    for &i in &stack {
        keep[i] = true;
    }
    while let Some(i) = stack.pop() {
        let (x, y) = ((i as u32 % w) as i32, (i as u32 / w) as i32);
        for ny in (y - 1).max(0)..=(y + 1).min(hi - 1) {
            for nx in (x - 1).max(0)..=(x + 1).min(wi - 1) {
                let n = (ny * wi + nx) as usize;
                if !keep[n] && class[n] == 1 {
                    keep[n] = true;
                    stack.push(n);
                }
            }
        }
    }
    (0..keep.len()).filter(|&i| keep[i]).collect()
}

fn accumulate(
    grads: &Gradients,
    edges: &[usize],
    w: u32,
    h: u32,
    params: &HoughParams,
) -> Vec<u32> {
    let mut acc = vec![0u32; w as usize * h as usize];
    for &i in edges {
        let (gx, gy) = (f64::from(grads.gx[i]), f64::from(grads.gy[i]));
        let len = gx.hypot(gy);
        if len == 0.0 {
            continue;
        }
        let (ux, uy) = (gx / len, gy / len);
        let (x, y) = (f64::from(i as u32 % w), f64::from(i as u32 / w));
        for r in params.min_radius..=params.max_radius {
            let r = f64::from(r);
            for sign in [-1.0, 1.0] {
                let cx = (x + sign * r * ux).round();
                let cy = (y + sign * r * uy).round();
                if cx >= 0.0 && cy >= 0.0 && cx < f64::from(w) && cy < f64::from(h) {
                    acc[cy as usize * w as usize + cx as usize] += 1;
                }
            }
        }
    }
    acc
}

fn peaks(acc: &[u32], w: u32, h: u32, threshold: u32) -> Vec<(usize, u32)> {
    let (wi, hi) = (w as i32, h as i32);
    let at = |x: i32, y: i32| -> u32 {
        if x < 0 || y < 0 || x >= wi || y >= hi {
            0
        } else {
            acc[(y * wi + x) as usize]
        }
    };
    let mut out = Vec::new();
    for y in 0..hi {
        for x in 0..wi {
            let v = at(x, y);
            if v > threshold
                && v > at(x - 1, y)
                && v >= at(x + 1, y)
                && v > at(x, y - 1)
                && v >= at(x, y + 1)
            {
                out.push(((y * wi + x) as usize, v));
            }
        }
    }
    out
}

fn best_radius(center: Point, edges: &[usize], w: u32, params: &HoughParams) -> Option<u32> {
    let span = (params.max_radius - params.min_radius + 1) as usize;
    let mut hist = vec![0u32; span];
    for &i in edges {
        let p = Point::new(f64::from(i as u32 % w), f64::from(i as u32 / w));
        let d = center.distance(p).round();
        if d >= f64::from(params.min_radius) && d <= f64::from(params.max_radius) {
            hist[d as usize - params.min_radius as usize] += 1;
        }
    }
    let (best, &count) = hist
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(&a.0)))?;
    (count > 0).then_some(params.min_radius + best as u32)
}

#[cfg(test)]
#[path = "../../tests/unit/detect/hough.rs"]
mod tests;
