use image::GrayImage;

use crate::foundation::core::PixelRect;

/// One 8-connected foreground component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Component {
    pub bounds: PixelRect,
    pub area: usize,
}

/// Every 8-connected component of the non-zero pixels, in scan order of their first pixel.
pub fn components(mask: &GrayImage) -> Vec<Component> {
    let (w, h) = mask.dimensions();
    let mut seen = vec![false; w as usize * h as usize];
    let mut out = Vec::new();
    let mut stack = Vec::new();

    for y in 0..h {
        for x in 0..w {
            let idx = (y * w + x) as usize;
            if seen[idx] || mask.get_pixel(x, y)[0] == 0 {
                continue;
            }
            seen[idx] = true;
            stack.push((x, y));

            let (mut min_x, mut min_y, mut max_x, mut max_y) = (x, y, x, y);
            let mut area = 0usize;
            while let Some((cx, cy)) = stack.pop() {
                area += 1;
                min_x = min_x.min(cx);
                min_y = min_y.min(cy);
                max_x = max_x.max(cx);
                max_y = max_y.max(cy);

                for ny in cy.saturating_sub(1)..=(cy + 1).min(h - 1) {
                    for nx in cx.saturating_sub(1)..=(cx + 1).min(w - 1) {
                        let nidx = (ny * w + nx) as usize;
                        if !seen[nidx] && mask.get_pixel(nx, ny)[0] != 0 {
                            seen[nidx] = true;
                            stack.push((nx, ny));
                        }
                    }
                }
            }

            out.push(Component {
                bounds: PixelRect::new(min_x, min_y, max_x - min_x + 1, max_y - min_y + 1),
                area,
            });
        }
    }
    out
}

/// Component with the most pixels; ties go to the first one found.
pub fn largest_component(mask: &GrayImage) -> Option<Component> {
    components(mask)
        .into_iter()
        .fold(None, |best: Option<Component>, c| match best {
            Some(b) if b.area >= c.area => Some(b),
            _ => Some(c),
        })
}

#[cfg(test)]
#[path = "../../tests/unit/detect/blob.rs"]
mod tests;
