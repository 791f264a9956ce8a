use crate::animation::AnimationPlan;
use crate::foundation::core::{Canvas, Fps, Rgba8};
use crate::foundation::error::{AnalogonError, AnalogonResult};
use crate::render::painter::{PaintStyle, SceneGeometry};
use crate::render::surface::TextFont;
use std::path::{Path, PathBuf};

/// Generator settings.
///
/// Every field has a default, so a JSON file only needs the keys it changes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Prefix of task ids and of the default video directory.
    pub domain: String,
    pub canvas: Canvas,
    pub margin: u32,
    pub shape_size: u32,
    pub arrow_length: u32,
    pub question_mark_size: u32,
    pub hold_frames: u32,
    pub rotation_frames: u32,
    pub video_fps: u32,
    pub generate_videos: bool,
    /// Seeds sampling and prompt choice. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Font for the interrogation glyph; falls back to a built-in glyph when unavailable.
    pub font_family: Option<String>,
    pub shape_color: [u8; 3],
    pub background: [u8; 3],
    pub video_dir: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            domain: "shape_rotation".to_string(),
            canvas: Canvas::new(400, 400),
            margin: 40,
            shape_size: 80,
            arrow_length: 60,
            question_mark_size: 60,
            hold_frames: 15,
            rotation_frames: 30,
            video_fps: 10,
            generate_videos: true,
            seed: None,
            font_family: Some("Arial".to_string()),
            shape_color: [70, 130, 180],
            background: [255, 255, 255],
            video_dir: None,
        }
    }
}

impl GeneratorConfig {
    /// Load a JSON config file.
    pub fn from_path(path: &Path) -> AnalogonResult<Self> {
        use anyhow::Context as _;
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config '{}'", path.display()))?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> AnalogonResult<Self> {
        let cfg: Self = serde_json::from_str(text)?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AnalogonResult<()> {
        let Canvas { width, height } = self.canvas;
        if width == 0 || height == 0 {
            return Err(AnalogonError::validation("canvas width/height must be > 0"));
        }
        if self.shape_size < 2 {
            return Err(AnalogonError::validation("shape_size must be >= 2"));
        }
        if 2 * (self.margin + self.shape_size) > width || self.shape_size > height / 2 {
            return Err(AnalogonError::validation(format!(
                "shapes of size {} with margin {} do not fit a {}x{} canvas",
                self.shape_size, self.margin, width, height
            )));
        }
        if self.arrow_length < 16 {
            return Err(AnalogonError::validation(
                "arrow_length must be >= 16 to fit the arrow head",
            ));
        }
        if self.video_fps == 0 {
            return Err(AnalogonError::validation("video_fps must be > 0"));
        }
        if self.rotation_frames == 0 {
            return Err(AnalogonError::validation("rotation_frames must be > 0"));
        }
        if self.generate_videos && (!width.is_multiple_of(2) || !height.is_multiple_of(2)) {
            return Err(AnalogonError::validation(
                "canvas width/height must be even when videos are enabled",
            ));
        }
        if self.domain.is_empty() {
            return Err(AnalogonError::validation("domain must not be empty"));
        }
        Ok(())
    }

    pub fn half_size(&self) -> i32 {
        (self.shape_size / 2) as i32
    }

    pub fn fps(&self) -> AnalogonResult<Fps> {
        Fps::new(self.video_fps, 1)
    }

    pub fn plan(&self) -> AnimationPlan {
        AnimationPlan {
            hold_frames: self.hold_frames,
            rotation_frames: self.rotation_frames,
        }
    }

    pub fn scene_geometry(&self) -> SceneGeometry {
        SceneGeometry {
            canvas: self.canvas,
            margin: self.margin,
            shape_size: self.shape_size,
            arrow_length: self.arrow_length,
        }
    }

    pub fn text_font(&self) -> TextFont {
        let size = self.question_mark_size as f32;
        match self.font_family.as_deref() {
            Some(family) if !family.is_empty() => TextFont::named(family, size),
            _ => TextFont::builtin(size),
        }
    }

    pub fn paint_style(&self) -> PaintStyle {
        PaintStyle {
            shape_fill: Rgba8::from_rgb_array(self.shape_color),
            glyph_font: self.text_font(),
            ..PaintStyle::default()
        }
    }

    pub fn background_color(&self) -> Rgba8 {
        Rgba8::from_rgb_array(self.background)
    }

    /// Where ground-truth videos go: `video_dir`, or `<tmp>/<domain>_videos`.
    pub fn video_dir(&self) -> PathBuf {
        self.video_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(format!("{}_videos", self.domain)))
    }
}
