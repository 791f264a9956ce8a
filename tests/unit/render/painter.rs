use super::*;
use crate::render::glyph::FontBook;
use crate::task::{CombinationKey, RotationAngle};

fn painter() -> ScenePainter {
    ScenePainter::new(
        CpuRasterizer::new(Rgba8::WHITE, FontBook::empty()),
        SceneGeometry {
            canvas: Canvas::new(400, 400),
            margin: 40,
            shape_size: 80,
            arrow_length: 60,
        },
        PaintStyle::default(),
    )
    .unwrap()
}

fn task(a: ShapeId, c: ShapeId, half_degrees: u16) -> TaskSpec {
    let key = CombinationKey::new(a, c, RotationAngle::from_half_degrees(half_degrees)).unwrap();
    TaskSpec::rotation(key)
}

#[test]
fn initial_and_final_share_static_slots() {
    let p = painter();
    let t = task(ShapeId::Square, ShapeId::Triangle, 90);
    let initial = p.render_initial(&t).unwrap();
    let fin = p.render_final(&t).unwrap();

    for slot in [Slot::A, Slot::Arrow1, Slot::B, Slot::C, Slot::Arrow2] {
        assert!(
            initial.region_eq(&fin, p.slot_region(slot)),
            "{slot:?} differs between scenes"
        );
    }
    assert!(!initial.region_eq(&fin, p.slot_region(Slot::D)));
}

#[test]
fn shapes_are_painted_at_their_anchors() {
    let p = painter();
    let t = task(ShapeId::Square, ShapeId::Octagon, 30);
    let frame = p.render_final(&t).unwrap();
    let blue = [70, 130, 180, 255];

    for slot in [Slot::A, Slot::B, Slot::C, Slot::D] {
        let at = p.layout().anchor(slot);
        assert_eq!(frame.pixel(at.x as u32, at.y as u32), Some(blue), "{slot:?}");
    }
    // Corners stay background.
    assert_eq!(frame.pixel(0, 0), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(399, 399), Some([255, 255, 255, 255]));
}

#[test]
fn arrows_are_black_shafts() {
    let p = painter();
    let frame = p
        .render_initial(&task(ShapeId::Square, ShapeId::Triangle, 90))
        .unwrap();
    for slot in [Slot::Arrow1, Slot::Arrow2] {
        let at = p.layout().anchor(slot);
        assert_eq!(
            frame.pixel(at.x as u32, at.y as u32),
            Some([0, 0, 0, 255]),
            "{slot:?}"
        );
    }
}

#[test]
fn question_glyph_marks_the_answer_slot() {
    let p = painter();
    let frame = p
        .render_initial(&task(ShapeId::Square, ShapeId::Triangle, 90))
        .unwrap();
    let region = p.slot_region(Slot::D);
    let mut grey = 0usize;
    for y in region.y0..region.y1 {
        for x in region.x0..region.x1 {
            if let Some([r, g, b, _]) = frame.pixel(x, y) {
                if r == g && g == b && r < 200 {
                    grey += 1;
                }
            }
        }
    }
    assert!(grey > 20, "expected a visible glyph, found {grey} grey pixels");
}

#[test]
fn rendering_is_deterministic() {
    let p = painter();
    let t = task(ShapeId::Star, ShapeId::Heart, 200);
    assert_eq!(p.render_final(&t).unwrap(), p.render_final(&t).unwrap());
}

#[test]
fn rejects_degenerate_shape_size() {
    let r = ScenePainter::new(
        CpuRasterizer::new(Rgba8::WHITE, FontBook::empty()),
        SceneGeometry {
            canvas: Canvas::new(400, 400),
            margin: 40,
            shape_size: 1,
            arrow_length: 60,
        },
        PaintStyle::default(),
    );
    assert!(r.is_err());
}
