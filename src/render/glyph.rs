//! Text glyphs for the interrogation mark.
//!
//! Named font families are resolved through a `fontdb` database and rasterized with
//! `usvg`/`resvg`. When a family is missing (or none was requested) the canvas falls back to a
//! built-in vector question mark, so rendering never fails on font availability.

use std::path::Path;
use std::sync::Arc;

use kurbo::Shape as _;

use crate::foundation::core::{BezPath, Point, Rgba8};
use crate::foundation::error::{AnalogonError, AnalogonResult};

/// Font database shared by every canvas of one renderer.
#[derive(Clone, Debug)]
pub struct FontBook {
    db: Arc<usvg::fontdb::Database>,
}

impl Default for FontBook {
    fn default() -> Self {
        Self::empty()
    }
}

impl FontBook {
    /// No fonts at all; every text request uses the built-in glyphs.
    pub fn empty() -> Self {
        Self {
            db: Arc::new(usvg::fontdb::Database::new()),
        }
    }

    /// System fonts plus any `.ttf`/`.otf`/`.ttc` files found in `extra_dirs`.
    pub fn system(extra_dirs: &[&Path]) -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        for dir in extra_dirs {
            load_fonts_from_dir(&mut db, dir);
        }
        tracing::debug!(faces = db.len(), "font database loaded");
        Self { db: Arc::new(db) }
    }

    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    /// `true` when `family` names at least one loaded face.
    pub fn resolves(&self, family: &str) -> bool {
        let families = [usvg::fontdb::Family::Name(family)];
        let query = usvg::fontdb::Query {
            families: &families,
            weight: usvg::fontdb::Weight::NORMAL,
            stretch: usvg::fontdb::Stretch::Normal,
            style: usvg::fontdb::Style::Normal,
        };
        self.db.query(&query).is_some()
    }

    /// Rasterize `text` centered in a square box of side `2 * size_px`.
    ///
    /// Returns `Ok(None)` when the family is unknown or produced no outlines, which callers
    /// treat as "use the built-in glyph".
    pub fn rasterize(
        &self,
        text: &str,
        family: &str,
        size_px: f32,
        color: Rgba8,
    ) -> AnalogonResult<Option<RasterGlyph>> {
        if !self.resolves(family) {
            return Ok(None);
        }

        let side = (size_px * 2.0).ceil().max(1.0) as u32;
        let mid = side as f32 / 2.0;
        let svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{side}" height="{side}"><text x="{mid}" y="{mid}" font-family="{family}" font-size="{size_px}" fill="rgb({r},{g},{b})" fill-opacity="{alpha}" text-anchor="middle" dominant-baseline="central">{text}</text></svg>"#,
            family = xml_escape(family),
            r = color.r,
            g = color.g,
            b = color.b,
            alpha = f32::from(color.a) / 255.0,
            text = xml_escape(text),
        );

        let opts = usvg::Options {
            fontdb: self.db.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_data(svg.as_bytes(), &opts)
            .map_err(|e| AnalogonError::render(format!("parse text svg: {e}")))?;
        if tree.root().children().is_empty() {
            return Ok(None);
        }

        let mut pixmap = resvg::tiny_skia::Pixmap::new(side, side)
            .ok_or_else(|| AnalogonError::render("failed to allocate glyph pixmap"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );

        Ok(Some(RasterGlyph {
            width: side,
            height: side,
            rgba8_premul: pixmap.data().to_vec(),
        }))
    }
}

/// Rasterized text box; `(width/2, height/2)` is the anchor point.
#[derive(Clone, Debug)]
pub struct RasterGlyph {
    pub width: u32,
    pub height: u32,
    pub rgba8_premul: Vec<u8>,
}

/// Built-in question mark centered on the origin: a stroked hook and a filled dot.
#[derive(Clone, Debug)]
pub struct BuiltinGlyph {
    pub hook: BezPath,
    pub stroke_width: f64,
    pub dot: BezPath,
}

impl BuiltinGlyph {
    pub fn question_mark(size_px: f64) -> Self {
        let s = size_px;
        let arc = kurbo::Arc::new(
            Point::new(0.0, -0.15 * s),
            (0.17 * s, 0.17 * s),
            std::f64::consts::PI,
            1.5 * std::f64::consts::PI,
            0.0,
        );
        let mut hook = arc.to_path(0.05);
        hook.line_to(Point::new(0.0, 0.15 * s));

        let dot = kurbo::Circle::new(Point::new(0.0, 0.3 * s), 0.06 * s).to_path(0.05);

        Self {
            hook,
            stroke_width: (0.1 * s).max(1.0),
            dot,
        }
    }
}

fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn load_fonts_from_dir(db: &mut usvg::fontdb::Database, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in rd.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if ext != "ttf" && ext != "otf" && ext != "ttc" {
            continue;
        }
        let _ = db.load_font_file(&path);
    }
}
