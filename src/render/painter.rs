use crate::foundation::core::{Canvas, PixelPoint, Rgba8};
use crate::foundation::error::{AnalogonError, AnalogonResult};
use crate::geometry;
use crate::layout::{SceneLayout, Slot};
use crate::render::cpu::CpuRasterizer;
use crate::render::frame::{FrameRGBA, PixelRect};
use crate::render::surface::{RasterBackend, RasterSurface, TextFont};
use crate::shapes::ShapeId;
use crate::task::TaskSpec;

/// Pixel dimensions that drive the layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneGeometry {
    pub canvas: Canvas,
    pub margin: u32,
    pub shape_size: u32,
    pub arrow_length: u32,
}

/// Colors and stroke widths.
#[derive(Clone, Debug, PartialEq)]
pub struct PaintStyle {
    pub shape_fill: Rgba8,
    pub shape_outline: Rgba8,
    pub shape_outline_width: f64,
    pub arrow_color: Rgba8,
    pub arrow_width: f64,
    pub glyph_color: Rgba8,
    pub glyph_font: TextFont,
}

impl Default for PaintStyle {
    fn default() -> Self {
        Self {
            shape_fill: Rgba8::rgb(70, 130, 180),
            shape_outline: Rgba8::BLACK,
            shape_outline_width: 2.0,
            arrow_color: Rgba8::BLACK,
            arrow_width: 3.0,
            glyph_color: Rgba8::rgb(100, 100, 100),
            glyph_font: TextFont::builtin(60.0),
        }
    }
}

/// What the D slot shows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnswerSlot {
    /// Interrogation glyph (initial scene).
    Question,
    /// shape_c posed at the given angle (final scene and interpolation frames).
    Shape { angle_degrees: f64 },
}

/// Draws puzzle scenes.
///
/// Every scene is drawn in the same order (A, arrow 1, B, C, arrow 2, D) with the same
/// geometry, so A, B, C and both arrows come out byte-identical no matter what D holds.
#[derive(Clone, Debug)]
pub struct ScenePainter<B = CpuRasterizer> {
    backend: B,
    geometry: SceneGeometry,
    layout: SceneLayout,
    style: PaintStyle,
}

impl<B: RasterBackend> ScenePainter<B> {
    pub fn new(backend: B, geometry: SceneGeometry, style: PaintStyle) -> AnalogonResult<Self> {
        if geometry.shape_size < 2 {
            return Err(AnalogonError::validation("shape_size must be >= 2"));
        }
        let layout = SceneLayout::resolve(geometry.canvas, geometry.margin, geometry.shape_size);
        Ok(Self {
            backend,
            geometry,
            layout,
            style,
        })
    }

    pub fn layout(&self) -> &SceneLayout {
        &self.layout
    }

    pub fn geometry(&self) -> SceneGeometry {
        self.geometry
    }

    pub fn half_size(&self) -> i32 {
        (self.geometry.shape_size / 2) as i32
    }

    /// A, B (rotated), C and the interrogation glyph in D.
    pub fn render_initial(&self, task: &TaskSpec) -> AnalogonResult<FrameRGBA> {
        self.render(task, AnswerSlot::Question)
    }

    /// The revealed answer: D holds shape_d at the full rotation angle.
    pub fn render_final(&self, task: &TaskSpec) -> AnalogonResult<FrameRGBA> {
        self.render(
            task,
            AnswerSlot::Shape {
                angle_degrees: task.rotation_angle().degrees(),
            },
        )
    }

    #[tracing::instrument(level = "trace", skip(self, task), fields(task = task.description()))]
    pub fn render(&self, task: &TaskSpec, answer: AnswerSlot) -> AnalogonResult<FrameRGBA> {
        let target = task.rotation_angle().degrees();
        let mut surface = self.backend.new_blank_canvas(self.geometry.canvas)?;

        self.draw_shape(&mut surface, task.shape_a(), self.layout.a, 0.0)?;
        self.draw_arrow(&mut surface, self.layout.arrow1)?;
        self.draw_shape(&mut surface, task.shape_b(), self.layout.b, target)?;

        self.draw_shape(&mut surface, task.shape_c(), self.layout.c, 0.0)?;
        self.draw_arrow(&mut surface, self.layout.arrow2)?;
        match answer {
            AnswerSlot::Question => surface.draw_text(
                self.layout.d,
                "?",
                &self.style.glyph_font,
                self.style.glyph_color,
            )?,
            AnswerSlot::Shape { angle_degrees } => {
                self.draw_shape(&mut surface, task.shape_d(), self.layout.d, angle_degrees)?
            }
        }

        surface.into_frame()
    }

    /// Pixel box that fully contains anything drawn in `slot`.
    ///
    /// Rotated shapes reach at most `1.7 * half_size` from their anchor (the parallelogram's
    /// corner); the outline stroke and anti-aliasing add a few pixels.
    pub fn slot_region(&self, slot: Slot) -> PixelRect {
        let anchor = self.layout.anchor(slot);
        let reach = match slot {
            Slot::Arrow1 | Slot::Arrow2 => (self.geometry.arrow_length / 2) as i32,
            _ => self.half_size() * 17 / 10,
        };
        let pad = self.style.shape_outline_width.ceil() as i32 + 2;
        PixelRect::around(
            anchor.x,
            anchor.y,
            reach + pad,
            self.geometry.canvas.width,
            self.geometry.canvas.height,
        )
    }

    fn draw_shape(
        &self,
        surface: &mut B::Surface,
        shape: ShapeId,
        anchor: PixelPoint,
        angle_degrees: f64,
    ) -> AnalogonResult<()> {
        let points = geometry::pose(shape, self.half_size(), angle_degrees, anchor);
        surface.fill_polygon(
            &points,
            self.style.shape_fill,
            self.style.shape_outline,
            self.style.shape_outline_width,
        )
    }

    /// Right-pointing connector: a shaft ending short of a filled triangular head.
    fn draw_arrow(&self, surface: &mut B::Surface, at: PixelPoint) -> AnalogonResult<()> {
        let half = (self.geometry.arrow_length / 2) as i32;
        let tip = at.x + half;
        surface.draw_line(
            PixelPoint::new(at.x - half, at.y),
            PixelPoint::new(tip - 10, at.y),
            self.style.arrow_color,
            self.style.arrow_width,
        )?;
        let head = [
            PixelPoint::new(tip, at.y),
            PixelPoint::new(tip - 15, at.y - 8),
            PixelPoint::new(tip - 15, at.y + 8),
        ];
        surface.fill_polygon(&head, self.style.arrow_color, self.style.arrow_color, 0.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/painter.rs"]
mod tests;
