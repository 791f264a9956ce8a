use std::sync::Arc;

use crate::foundation::core::{BezPath, Canvas, PixelPoint, Point, Rgba8};
use crate::foundation::error::{AnalogonError, AnalogonResult};
use crate::render::frame::FrameRGBA;
use crate::render::glyph::{BuiltinGlyph, FontBook, RasterGlyph};
use crate::render::surface::{RasterBackend, RasterSurface, TextFont};

/// CPU raster backend powered by `vello_cpu`.
#[derive(Clone, Debug)]
pub struct CpuRasterizer {
    background: Rgba8,
    fonts: FontBook,
}

impl CpuRasterizer {
    pub fn new(background: Rgba8, fonts: FontBook) -> Self {
        Self { background, fonts }
    }

    pub fn fonts(&self) -> &FontBook {
        &self.fonts
    }
}

impl RasterBackend for CpuRasterizer {
    type Surface = CpuCanvas;

    fn new_blank_canvas(&self, size: Canvas) -> AnalogonResult<CpuCanvas> {
        CpuCanvas::new(size, self.background, self.fonts.clone())
    }
}

/// One frame being drawn. Draw calls are recorded into a `vello_cpu` context and rasterized by
/// [`RasterSurface::into_frame`].
pub struct CpuCanvas {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    fonts: FontBook,
}

impl CpuCanvas {
    fn new(size: Canvas, background: Rgba8, fonts: FontBook) -> AnalogonResult<Self> {
        let width: u16 = size
            .width
            .try_into()
            .map_err(|_| AnalogonError::render("canvas width exceeds u16"))?;
        let height: u16 = size
            .height
            .try_into()
            .map_err(|_| AnalogonError::render("canvas height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(AnalogonError::render("canvas width/height must be non-zero"));
        }

        // `render_to_pixmap` overwrites its target, so the background is painted as the first
        // draw call rather than pre-filled into the pixmap.
        let mut ctx = vello_cpu::RenderContext::new(width, height);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(color_to_cpu(background));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(width),
            f64::from(height),
        ));

        Ok(Self {
            width,
            height,
            ctx,
            fonts,
        })
    }

    fn draw_raster_glyph(&mut self, position: PixelPoint, glyph: RasterGlyph) -> AnalogonResult<()> {
        let pixmap = pixmap_from_premul_bytes(&glyph.rgba8_premul, glyph.width, glyph.height)?;
        let paint = vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        };

        let origin_x = position.x - (glyph.width / 2) as i32;
        let origin_y = position.y - (glyph.height / 2) as i32;
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_transform(vello_cpu::kurbo::Affine::translate((
            f64::from(origin_x),
            f64::from(origin_y),
        )));
        self.ctx.set_paint(paint);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(glyph.width),
            f64::from(glyph.height),
        ));
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Ok(())
    }

    fn draw_builtin_glyph(&mut self, position: PixelPoint, size_px: f32, color: Rgba8) {
        let glyph = BuiltinGlyph::question_mark(f64::from(size_px));
        self.ctx.set_transform(vello_cpu::kurbo::Affine::translate((
            f64::from(position.x),
            f64::from(position.y),
        )));
        self.ctx.set_paint(color_to_cpu(color));
        self.ctx
            .set_stroke(vello_cpu::kurbo::Stroke::new(glyph.stroke_width));
        self.ctx.stroke_path(&bezpath_to_cpu(&glyph.hook));
        self.ctx.fill_path(&bezpath_to_cpu(&glyph.dot));
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    }
}

impl RasterSurface for CpuCanvas {
    fn size(&self) -> Canvas {
        Canvas::new(u32::from(self.width), u32::from(self.height))
    }

    fn fill_polygon(
        &mut self,
        points: &[PixelPoint],
        fill: Rgba8,
        outline: Rgba8,
        outline_width: f64,
    ) -> AnalogonResult<()> {
        if points.len() < 3 {
            return Err(AnalogonError::render(format!(
                "polygon needs at least 3 points, got {}",
                points.len()
            )));
        }

        let path = bezpath_to_cpu(&polygon_path(points));
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(color_to_cpu(fill));
        self.ctx.fill_path(&path);
        if outline_width > 0.0 {
            self.ctx
                .set_stroke(vello_cpu::kurbo::Stroke::new(outline_width));
            self.ctx.set_paint(color_to_cpu(outline));
            self.ctx.stroke_path(&path);
        }
        Ok(())
    }

    fn draw_line(
        &mut self,
        from: PixelPoint,
        to: PixelPoint,
        color: Rgba8,
        width: f64,
    ) -> AnalogonResult<()> {
        if width <= 0.0 {
            return Err(AnalogonError::render("line width must be > 0"));
        }
        let mut path = BezPath::new();
        path.move_to(from.to_point());
        path.line_to(to.to_point());

        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        self.ctx.set_paint(color_to_cpu(color));
        self.ctx.stroke_path(&bezpath_to_cpu(&path));
        Ok(())
    }

    fn draw_text(
        &mut self,
        position: PixelPoint,
        text: &str,
        font: &TextFont,
        color: Rgba8,
    ) -> AnalogonResult<()> {
        if let Some(family) = font.family.as_deref() {
            match self.fonts.rasterize(text, family, font.size_px, color) {
                Ok(Some(glyph)) => return self.draw_raster_glyph(position, glyph),
                Ok(None) => {
                    tracing::debug!(family, "font family unavailable, using built-in glyph");
                }
                Err(e) => {
                    tracing::debug!(family, error = %e, "text rasterization failed, using built-in glyph");
                }
            }
        }

        if text == "?" {
            self.draw_builtin_glyph(position, font.size_px, color);
        } else {
            tracing::debug!(text, "no built-in glyph for text, skipped");
        }
        Ok(())
    }

    fn into_frame(mut self) -> AnalogonResult<FrameRGBA> {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        Ok(FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn polygon_path(points: &[PixelPoint]) -> BezPath {
    let mut path = BezPath::new();
    let mut it = points.iter();
    if let Some(first) = it.next() {
        path.move_to(first.to_point());
        for p in it {
            path.line_to(p.to_point());
        }
        path.close_path();
    }
    path
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
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

fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> AnalogonResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| AnalogonError::render("pixmap width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| AnalogonError::render("pixmap height exceeds u16"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(AnalogonError::render("pixmap byte len mismatch"));
    }
    let mut pixels = Vec::<vello_cpu::peniko::color::PremulRgba8>::with_capacity(
        (width as usize) * (height as usize),
    );
    for px in bytes.chunks_exact(4) {
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
            px[0], px[1], px[2], px[3],
        ]));
    }
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels, w, h, true,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
