use crate::foundation::core::{Canvas, PixelPoint};

/// Logical position in the A:B :: C:? grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Slot {
    A,
    Arrow1,
    B,
    C,
    Arrow2,
    /// Answer slot; holds the interrogation glyph until the answer is revealed.
    D,
}

impl Slot {
    pub const ALL: [Slot; 6] = [
        Slot::A,
        Slot::Arrow1,
        Slot::B,
        Slot::C,
        Slot::Arrow2,
        Slot::D,
    ];

    /// Slots whose content never changes within one puzzle.
    pub const STATIC_SHAPES: [Slot; 3] = [Slot::A, Slot::B, Slot::C];
}

/// Pixel anchors for every [`Slot`].
///
/// Derived purely from canvas size, margin and shape size with integer floor division, so the
/// initial scene, the final scene and every animation frame share one layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SceneLayout {
    pub a: PixelPoint,
    pub arrow1: PixelPoint,
    pub b: PixelPoint,
    pub c: PixelPoint,
    pub arrow2: PixelPoint,
    pub d: PixelPoint,
}

impl SceneLayout {
    pub fn resolve(canvas: Canvas, margin: u32, shape_size: u32) -> Self {
        let (w, h) = (canvas.width as i32, canvas.height as i32);
        let (margin, half) = (margin as i32, (shape_size / 2) as i32);

        let left = margin + half;
        let right = w - margin - half;
        let top = h / 4;
        let bottom = 3 * h / 4;

        Self {
            a: PixelPoint::new(left, top),
            arrow1: PixelPoint::new(w / 2, top),
            b: PixelPoint::new(right, top),
            c: PixelPoint::new(left, bottom),
            arrow2: PixelPoint::new(w / 2, bottom),
            d: PixelPoint::new(right, bottom),
        }
    }

    pub fn anchor(&self, slot: Slot) -> PixelPoint {
        match slot {
            Slot::A => self.a,
            Slot::Arrow1 => self.arrow1,
            Slot::B => self.b,
            Slot::C => self.c,
            Slot::Arrow2 => self.arrow2,
            Slot::D => self.d,
        }
    }
}
