//! Thin adapter over `vello_cpu`: draw kurbo paths and raster images into a transparent
//! premultiplied layer.

use image::RgbaImage;

use crate::{
    foundation::{
        core::{Affine, BezPath, Point},
        error::{ToonError, ToonResult},
    },
    render::{
        composite::{composite_layer, premultiply},
        paint::Rgba8,
    },
};

/// Raster image ready to be used as a paint.
#[derive(Clone)]
pub struct ImagePaint {
    paint: vello_cpu::Image,
    width: f64,
    height: f64,
}

impl ImagePaint {
    pub fn from_rgba(image: &RgbaImage) -> ToonResult<Self> {
        let (w, h) = image.dimensions();
        let pixmap = premul_pixmap(image.as_raw(), w, h)?;
        Ok(Self {
            paint: vello_cpu::Image {
                image: vello_cpu::ImageSource::Pixmap(std::sync::Arc::new(pixmap)),
                sampler: vello_cpu::peniko::ImageSampler::default(),
            },
            width: f64::from(w),
            height: f64::from(h),
        })
    }
}

/// One transparent layer being drawn.
pub struct SceneCanvas {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
}

impl SceneCanvas {
    pub fn new(width: u32, height: u32) -> ToonResult<Self> {
        let width: u16 = width
            .try_into()
            .map_err(|_| ToonError::render("canvas width exceeds u16"))?;
        let height: u16 = height
            .try_into()
            .map_err(|_| ToonError::render("canvas height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(ToonError::render("canvas must be non-empty"));
        }
        Ok(Self {
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
        })
    }

    pub fn fill_path(&mut self, path: &BezPath, transform: Affine, color: Rgba8, opacity: f32) {
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_transform(affine_to_cpu(transform));
        self.ctx.set_paint(color.to_cpu());
        self.with_opacity(opacity, |ctx| ctx.fill_path(&bezpath_to_cpu(path)));
    }

    pub fn stroke_path(
        &mut self,
        path: &BezPath,
        transform: Affine,
        width: f64,
        color: Rgba8,
        opacity: f32,
    ) {
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_transform(affine_to_cpu(transform));
        self.ctx.set_paint(color.to_cpu());
        self.ctx.set_stroke(
            vello_cpu::kurbo::Stroke::new(width)
                .with_caps(vello_cpu::kurbo::Cap::Round)
                .with_join(vello_cpu::kurbo::Join::Round),
        );
        self.with_opacity(opacity, |ctx| ctx.stroke_path(&bezpath_to_cpu(path)));
    }

    /// Draw `image` with its top-left corner at the origin of `transform`.
    pub fn draw_image(&mut self, image: &ImagePaint, transform: Affine, opacity: f32) {
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_transform(affine_to_cpu(transform));
        self.ctx.set_paint(image.paint.clone());
        let rect = vello_cpu::kurbo::Rect::new(0.0, 0.0, image.width, image.height);
        self.with_opacity(opacity, |ctx| ctx.fill_rect(&rect));
    }

    fn with_opacity(&mut self, opacity: f32, draw: impl FnOnce(&mut vello_cpu::RenderContext)) {
        if opacity < 1.0 {
            self.ctx.push_opacity_layer(opacity.max(0.0));
        }
        draw(&mut self.ctx);
        if opacity < 1.0 {
            self.ctx.pop_layer();
        }
    }

    /// Rasterize everything drawn so far into premultiplied RGBA8 bytes.
    pub fn finish(mut self) -> Vec<u8> {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        pixmap.data_as_u8_slice().to_vec()
    }

    /// Rasterize and composite onto an opaque frame.
    pub fn composite_onto(self, frame: &mut RgbaImage) -> ToonResult<()> {
        if frame.dimensions() != (u32::from(self.width), u32::from(self.height)) {
            return Err(ToonError::render("overlay size does not match frame size"));
        }
        let layer = self.finish();
        composite_layer(frame, &layer)
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn premul_pixmap(rgba8: &[u8], width: u32, height: u32) -> ToonResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| ToonError::render("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| ToonError::render("image height exceeds u16"))?;
    if rgba8.len() != width as usize * height as usize * 4 {
        return Err(ToonError::render("image byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for px in rgba8.chunks_exact(4) {
        let [r, g, b, a] = premultiply([px[0], px[1], px[2], px[3]]);
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 { r, g, b, a });
    }

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
