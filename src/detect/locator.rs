//! Heuristic subject layout: color silhouette, proportional rig, Hough eyes.

use image::{GrayImage, Luma, RgbaImage};

use crate::{
    detect::{
        blob,
        hough::{self, HoughParams},
        hsv::{self, HsvRange, SUBJECT_RANGES},
        morph::{self, Kernel},
    },
    foundation::core::{Circle, PixelRect, Point},
};

/// Which tier of the eye search produced the eye pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EyeSource {
    /// Two or more circles found; the two leftmost were taken.
    DetectedPair,
    /// One circle found and mirrored across the head's vertical center line.
    MirroredSingle,
    /// Nothing found; fixed positions inside the head.
    Default,
}

/// Whether the body box came from a color silhouette or is the whole image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionQuality {
    Silhouette,
    WholeImage,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EyePair {
    pub left: Circle,
    pub right: Circle,
    pub source: EyeSource,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WingPair {
    pub left: PixelRect,
    pub right: PixelRect,
}

/// Located body parts of one image. Computed once, then only read.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SubjectLayout {
    pub full_body: PixelRect,
    pub head: PixelRect,
    pub torso: PixelRect,
    pub eyes: Option<EyePair>,
    pub beak: Option<PixelRect>,
    pub wings: Option<WingPair>,
    /// Left limb first.
    pub limbs: Vec<PixelRect>,
    #[serde(skip)]
    pub silhouette: GrayImage,
    pub detection: DetectionQuality,
}

/// Regions placed by [`ProportionalRig`] relative to the body box.
#[derive(Clone, Debug, PartialEq)]
pub struct RigRegions {
    pub head: PixelRect,
    pub torso: PixelRect,
    pub beak: PixelRect,
    pub wings: WingPair,
    pub limbs: [PixelRect; 2],
}

/// Fixed fractions of the body box where a front-facing hatchling's parts usually sit.
/// The eyes are the only part searched for; everything else comes from here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProportionalRig;

impl ProportionalRig {
    const HEAD: [f64; 4] = [0.30, 0.15, 0.40, 0.35];
    const TORSO: [f64; 4] = [0.20, 0.40, 0.60, 0.50];
    const BEAK_WIDTH: f64 = 0.15;
    const BEAK_Y_IN_HEAD: f64 = 0.4;
    const BEAK_HEIGHT_IN_HEAD: f64 = 0.3;
    const WING_X: [f64; 2] = [0.15, 0.60];
    const WING: [f64; 3] = [0.45, 0.25, 0.30];
    const LIMB_X: [f64; 2] = [0.35, 0.55];
    const LIMB: [f64; 3] = [0.80, 0.10, 0.15];

    /// Regions in absolute coordinates, clamped to an `image_w x image_h` image.
    pub fn place(body: PixelRect, image_w: u32, image_h: u32) -> RigRegions {
        let (w, h) = (f64::from(body.width), f64::from(body.height));
        let frac = |v: f64, of: f64| (v * of) as u32;
        let rect = |fx: f64, fy: f64, fw: f64, fh: f64| {
            PixelRect::new(
                body.x + frac(fx, w),
                body.y + frac(fy, h),
                frac(fw, w),
                frac(fh, h),
            )
            .clamp_to(image_w, image_h)
        };

        let [hx, hy, hw, hh] = Self::HEAD;
        let head_unclamped = PixelRect::new(
            body.x + frac(hx, w),
            body.y + frac(hy, h),
            frac(hw, w),
            frac(hh, h),
        );
        let head = head_unclamped.clamp_to(image_w, image_h);

        let [tx, ty, tw, th] = Self::TORSO;
        let torso = rect(tx, ty, tw, th);

        let head_h = f64::from(head_unclamped.height);
        let beak = PixelRect::new(
            head_unclamped.right(),
            head_unclamped.y + frac(Self::BEAK_Y_IN_HEAD, head_h),
            frac(Self::BEAK_WIDTH, w),
            frac(Self::BEAK_HEIGHT_IN_HEAD, head_h),
        )
        .clamp_to(image_w, image_h);

        let [wy, ww, wh] = Self::WING;
        let wings = WingPair {
            left: rect(Self::WING_X[0], wy, ww, wh),
            right: rect(Self::WING_X[1], wy, ww, wh),
        };

        let [ly, lw, lh] = Self::LIMB;
        let limbs = [
            rect(Self::LIMB_X[0], ly, lw, lh),
            rect(Self::LIMB_X[1], ly, lw, lh),
        ];

        RigRegions {
            head,
            torso,
            beak,
            wings,
            limbs,
        }
    }
}

/// Finds the subject and its parts from color and shape cues alone.
#[derive(Clone, Debug)]
pub struct PartLocator {
    pub ranges: Vec<HsvRange>,
    pub padding: u32,
    pub accumulator_threshold: u32,
}

impl Default for PartLocator {
    fn default() -> Self {
        Self {
            ranges: SUBJECT_RANGES.to_vec(),
            padding: 10,
            accumulator_threshold: 30,
        }
    }
}

impl PartLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Never fails: without a silhouette the whole image is the body.
    #[tracing::instrument(skip(self, image), fields(width = image.width(), height = image.height()))]
    pub fn locate(&self, image: &RgbaImage) -> SubjectLayout {
        let (w, h) = image.dimensions();

        let (full_body, detection) = match self.silhouette_bounds(image) {
            Some(bounds) => (bounds, DetectionQuality::Silhouette),
            None => {
                tracing::debug!("no silhouette found, using the whole image");
                (PixelRect::full(w, h), DetectionQuality::WholeImage)
            }
        };

        let rig = ProportionalRig::place(full_body, w, h);
        let eyes = self.locate_eyes(image, rig.head);
        tracing::debug!(?full_body, head = ?rig.head, eye_source = ?eyes.source, "layout located");

        SubjectLayout {
            full_body,
            head: rig.head,
            torso: rig.torso,
            eyes: Some(eyes),
            beak: Some(rig.beak),
            wings: Some(rig.wings),
            limbs: rig.limbs.to_vec(),
            silhouette: filled_mask(w, h, full_body),
            detection,
        }
    }

    fn silhouette_bounds(&self, image: &RgbaImage) -> Option<PixelRect> {
        let mask = hsv::range_mask(image, &self.ranges);
        let kernel = Kernel::ellipse5();
        let mask = morph::open(&morph::close(&mask, &kernel), &kernel);
        let largest = blob::largest_component(&mask)?;
        let (w, h) = image.dimensions();
        Some(largest.bounds.pad(self.padding, w, h))
    }

    fn locate_eyes(&self, image: &RgbaImage, head: PixelRect) -> EyePair {
        if head.is_empty() {
            let at = |dx: f64| {
                let p = Point::new(f64::from(head.x) + dx, f64::from(head.y) + 10.0);
                Circle::new(clamp_into(p, head), 5.0)
            };
            return EyePair {
                left: at(10.0),
                right: at(20.0),
                source: EyeSource::Default,
            };
        }

        let crop = image::imageops::crop_imm(image, head.x, head.y, head.width, head.height)
            .to_image();
        let gray = hsv::to_gray(&crop);

        let min_side = f64::from(head.min_side());
        let min_radius = ((min_side * 0.05) as u32).max(1);
        let params = HoughParams {
            min_radius,
            max_radius: ((min_side * 0.15) as u32).max(min_radius + 1),
            min_dist: ((f64::from(head.width) * 0.3) as u32).max(1) as f64,
            accumulator_threshold: self.accumulator_threshold,
            ..HoughParams::default()
        };
        let mut found: Vec<Circle> = hough::find_circles(&gray, &params)
            .into_iter()
            .map(|c| c.circle)
            .collect();
        found.sort_by(|a, b| a.center.x.total_cmp(&b.center.x));

        choose_eyes(&found, head)
    }
}

/// Turn head-local candidates (sorted left to right) into an absolute eye pair.
///
/// With two or more candidates the two leftmost win, whatever their vote counts. One
/// candidate is mirrored across the head's vertical center line; none gives default eyes.
pub fn choose_eyes(candidates: &[Circle], head: PixelRect) -> EyePair {
    let origin = Point::new(f64::from(head.x), f64::from(head.y));
    let abs = |c: Circle| Circle::new(origin + c.center.to_vec2(), c.radius);
    let head_w = f64::from(head.width);
    let head_h = f64::from(head.height);

    match candidates {
        [first, second, ..] => EyePair {
            left: abs(*first),
            right: abs(*second),
            source: EyeSource::DetectedPair,
        },
        [only] => {
            let mirrored = Circle::new(
                Point::new(head_w - only.center.x, only.center.y),
                only.radius,
            );
            let (left, right) = if only.center.x < head_w / 2.0 {
                (*only, mirrored)
            } else {
                (mirrored, *only)
            };
            EyePair {
                left: abs(left),
                right: abs(right),
                source: EyeSource::MirroredSingle,
            }
        }
        [] => {
            let radius = (head_w.min(head_h) * 0.08).floor();
            let at = |fx: f64| {
                Circle::new(
                    Point::new((head_w * fx).floor(), (head_h * 0.4).floor()),
                    radius,
                )
            };
            EyePair {
                left: abs(at(0.3)),
                right: abs(at(0.7)),
                source: EyeSource::Default,
            }
        }
    }
}

fn clamp_into(p: Point, rect: PixelRect) -> Point {
    Point::new(
        p.x.clamp(f64::from(rect.x), f64::from(rect.right())),
        p.y.clamp(f64::from(rect.y), f64::from(rect.bottom())),
    )
}

fn filled_mask(w: u32, h: u32, rect: PixelRect) -> GrayImage {
    GrayImage::from_fn(w, h, |x, y| {
        let inside = x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom();
        Luma([if inside { 255 } else { 0 }])
    })
}

#[cfg(test)]
#[path = "../../tests/unit/detect/locator.rs"]
mod tests;
