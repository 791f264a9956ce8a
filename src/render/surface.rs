use crate::foundation::core::{Canvas, PixelPoint, Rgba8};
use crate::foundation::error::AnalogonResult;
use crate::render::frame::FrameRGBA;

/// Font request for [`RasterSurface::draw_text`].
///
/// `family: None` asks for the built-in glyph set directly. Named families that cannot be
/// resolved fall back to the built-in glyphs as well.
#[derive(Clone, Debug, PartialEq)]
pub struct TextFont {
    pub family: Option<String>,
    pub size_px: f32,
}

impl TextFont {
    pub fn builtin(size_px: f32) -> Self {
        Self {
            family: None,
            size_px,
        }
    }

    pub fn named(family: impl Into<String>, size_px: f32) -> Self {
        Self {
            family: Some(family.into()),
            size_px,
        }
    }
}

/// A drawable canvas. Coordinates are integer pixels with y growing downward.
///
/// Draw calls are applied in call order; later calls paint over earlier ones.
pub trait RasterSurface {
    fn size(&self) -> Canvas;

    /// Fill a closed polygon and stroke its outline. `outline_width <= 0` skips the stroke.
    fn fill_polygon(
        &mut self,
        points: &[PixelPoint],
        fill: Rgba8,
        outline: Rgba8,
        outline_width: f64,
    ) -> AnalogonResult<()>;

    fn draw_line(
        &mut self,
        from: PixelPoint,
        to: PixelPoint,
        color: Rgba8,
        width: f64,
    ) -> AnalogonResult<()>;

    /// Draw `text` centered on `position`.
    fn draw_text(
        &mut self,
        position: PixelPoint,
        text: &str,
        font: &TextFont,
        color: Rgba8,
    ) -> AnalogonResult<()>;

    /// Rasterize everything drawn so far.
    fn into_frame(self) -> AnalogonResult<FrameRGBA>;
}

/// Creates blank surfaces. Implementations must be shareable across worker threads.
pub trait RasterBackend: Send + Sync {
    type Surface: RasterSurface;

    fn new_blank_canvas(&self, size: Canvas) -> AnalogonResult<Self::Surface>;
}
