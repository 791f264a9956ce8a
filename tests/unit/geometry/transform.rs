use super::*;
use crate::task::angles::ANGLE_CATALOG;

const CENTER: PixelPoint = PixelPoint::new(320, 300);

#[test]
fn zero_rotation_is_pure_translation() {
    for shape in ShapeId::ALL {
        let local = shape.instantiate(40);
        let posed = transform(&local, 0.0, CENTER);
        for (p, q) in local.iter().zip(&posed) {
            assert_eq!(q.x, (p.x + 320.0).trunc() as i32, "{shape}");
            assert_eq!(q.y, (p.y + 300.0).trunc() as i32, "{shape}");
        }
    }
}

#[test]
fn integer_vertices_translate_exactly_at_zero() {
    let posed = pose(ShapeId::Square, 40, 0.0, CENTER);
    assert_eq!(
        posed,
        vec![
            PixelPoint::new(280, 260),
            PixelPoint::new(360, 260),
            PixelPoint::new(360, 340),
            PixelPoint::new(280, 340),
        ]
    );
}

#[test]
fn posing_is_deterministic_for_every_catalog_angle() {
    for shape in ShapeId::ALL {
        for angle in ANGLE_CATALOG {
            let a = pose(shape, 40, angle.degrees(), CENTER);
            let b = pose(shape, 40, angle.degrees(), CENTER);
            assert_eq!(a, b, "{shape} @ {angle}");
        }
    }
}

#[test]
fn positive_angles_rotate_clockwise_on_screen() {
    // The triangle apex points up (negative y); a quarter turn moves it to +x.
    let posed = pose(ShapeId::Triangle, 40, 90.0, PixelPoint::new(0, 0));
    assert_eq!(posed[0], PixelPoint::new(40, 0));
}

#[test]
fn truncation_happens_after_the_center_shift() {
    // Local x = -0.5 lands on 99.5 -> 99; truncating before the shift would give 100.
    let local = [Point::new(-0.5, 0.25)];
    let posed = transform(&local, 0.0, PixelPoint::new(100, 10));
    assert_eq!(posed, vec![PixelPoint::new(99, 10)]);

    // Below the origin truncation moves toward zero, not toward negative infinity.
    let posed = transform(&[Point::new(-2.5, -0.5)], 0.0, PixelPoint::new(0, 0));
    assert_eq!(posed, vec![PixelPoint::new(-2, 0)]);
}

#[test]
fn half_turn_mirrors_through_center() {
    let upright = pose(ShapeId::Square, 40, 0.0, CENTER);
    let turned = pose(ShapeId::Square, 40, 180.0, CENTER);
    // sin(pi) is not exactly zero, so a corner may land one pixel inward.
    for (i, p) in turned.iter().enumerate() {
        let q = upright[(i + 2) % 4];
        assert!((p.x - q.x).abs() <= 1, "{p:?} vs {q:?}");
        assert!((p.y - q.y).abs() <= 1, "{p:?} vs {q:?}");
    }
}
