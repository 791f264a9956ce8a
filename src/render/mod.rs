//! Rendering: the raster surface abstraction, its `vello_cpu` implementation, and the scene
//! painter that draws puzzle scenes through it.

pub mod cpu;
pub mod frame;
pub mod glyph;
pub mod painter;
pub mod surface;

pub use cpu::{CpuCanvas, CpuRasterizer};
pub use frame::{FrameRGBA, PixelRect};
pub use glyph::FontBook;
pub use painter::{AnswerSlot, PaintStyle, SceneGeometry, ScenePainter};
pub use surface::{RasterBackend, RasterSurface, TextFont};
