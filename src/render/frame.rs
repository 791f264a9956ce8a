use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{AnalogonError, AnalogonResult};
use crate::foundation::math::Fnv1a64;

/// A rendered frame as RGBA8 pixels.
///
/// Frames produced by the CPU canvas are **premultiplied alpha**; the flag makes this explicit
/// at API boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

/// Axis-aligned pixel rectangle `[x0, x1) x [y0, y1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl PixelRect {
    /// Square of side `2 * radius` around `(cx, cy)`, clipped to `width x height`.
    pub fn around(cx: i32, cy: i32, radius: i32, width: u32, height: u32) -> Self {
        let clip = |v: i32, max: u32| v.clamp(0, max as i32) as u32;
        Self {
            x0: clip(cx - radius, width),
            y0: clip(cy - radius, height),
            x1: clip(cx + radius, width),
            y1: clip(cy + radius, height),
        }
    }
}

impl FrameRGBA {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Stable fingerprint of the pixels inside `rect`.
    pub fn region_fingerprint(&self, rect: PixelRect) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_u32(rect.x0);
        h.write_u32(rect.y0);
        h.write_u32(rect.x1);
        h.write_u32(rect.y1);
        let stride = self.width as usize * 4;
        for y in rect.y0..rect.y1.min(self.height) {
            let row = y as usize * stride;
            let start = row + rect.x0 as usize * 4;
            let end = row + rect.x1.min(self.width) as usize * 4;
            h.write_bytes(&self.data[start..end]);
        }
        h.finish()
    }

    /// Byte-exact comparison of one region in two frames of the same size.
    pub fn region_eq(&self, other: &FrameRGBA, rect: PixelRect) -> bool {
        if self.width != other.width || self.height != other.height {
            return false;
        }
        let stride = self.width as usize * 4;
        (rect.y0..rect.y1.min(self.height)).all(|y| {
            let row = y as usize * stride;
            let start = row + rect.x0 as usize * 4;
            let end = row + rect.x1.min(self.width) as usize * 4;
            self.data[start..end] == other.data[start..end]
        })
    }

    /// Straight-alpha copy suitable for PNG export.
    pub fn to_rgba_image(&self) -> AnalogonResult<image::RgbaImage> {
        let mut bytes = self.data.clone();
        if self.premultiplied {
            unpremultiply_rgba8_in_place(&mut bytes);
        }
        image::RgbaImage::from_raw(self.width, self.height, bytes)
            .ok_or_else(|| AnalogonError::render("frame byte length does not match width*height*4"))
    }

    pub fn save_png(&self, path: &Path) -> AnalogonResult<()> {
        let img = self.to_rgba_image()?;
        img.save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}
