use super::*;

#[test]
fn catalog_has_twenty_distinct_names_in_order() {
    assert_eq!(ShapeId::ALL.len(), 20);
    for (i, id) in ShapeId::ALL.iter().enumerate() {
        assert_eq!(id.catalog_index(), i);
        assert_eq!(id.name().parse::<ShapeId>().unwrap(), *id);
    }
    let mut names: Vec<&str> = ShapeId::ALL.iter().map(|s| s.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 20);
    assert_eq!(ShapeId::ALL[0], ShapeId::Square);
    assert_eq!(ShapeId::ALL[19], ShapeId::Chevron);
}

#[test]
fn unknown_names_are_rejected() {
    let err = "circle".parse::<ShapeId>().unwrap_err();
    assert!(err.to_string().contains("unknown shape 'circle'"));
}

#[test]
fn serde_names_match_display_names() {
    for id in ShapeId::ALL {
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.name()));
        let back: ShapeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}

#[test]
fn vertex_counts_match_archetypes() {
    let expected = [
        (ShapeId::Square, 4),
        (ShapeId::Triangle, 3),
        (ShapeId::Diamond, 4),
        (ShapeId::Pentagon, 5),
        (ShapeId::Hexagon, 6),
        (ShapeId::Rectangle, 4),
        (ShapeId::Star, 10),
        (ShapeId::Heart, 6),
        (ShapeId::Arrow, 7),
        (ShapeId::Cross, 12),
        (ShapeId::Octagon, 8),
        (ShapeId::Trapezoid, 4),
        (ShapeId::Rhombus, 4),
        (ShapeId::Plus, 12),
        (ShapeId::Minus, 4),
        (ShapeId::LShape, 6),
        (ShapeId::TShape, 8),
        (ShapeId::Parallelogram, 4),
        (ShapeId::Kite, 4),
        (ShapeId::Chevron, 6),
    ];
    for (id, n) in expected {
        assert_eq!(id.instantiate(40).len(), n, "{id}");
    }
}

#[test]
fn non_convex_archetypes_use_composite_outlines() {
    let composite = [
        ShapeId::Plus,
        ShapeId::Cross,
        ShapeId::LShape,
        ShapeId::TShape,
        ShapeId::Arrow,
        ShapeId::Chevron,
        ShapeId::Kite,
        ShapeId::Heart,
        ShapeId::Star,
    ];
    for id in ShapeId::ALL {
        assert_eq!(
            id.template().is_convex(),
            !composite.contains(&id),
            "{id}"
        );
    }
}

#[test]
fn pentagon_starts_at_top_and_hexagon_on_the_x_axis() {
    let p = ShapeId::Pentagon.instantiate(40);
    assert!(p[0].x.abs() < 1e-9);
    assert!((p[0].y + 40.0).abs() < 1e-9);

    let h = ShapeId::Hexagon.instantiate(40);
    assert_eq!(h[0], Point::new(40.0, 0.0));
    let o = ShapeId::Octagon.instantiate(40);
    assert_eq!(o[0], Point::new(40.0, 0.0));
}

#[test]
fn rectangle_extents_are_truncated() {
    // 1.4 * 45 = 62.99999999999999 -> 62, 0.7 * 45 = 31.499999999999996 -> 31
    let r = ShapeId::Rectangle.instantiate(45);
    assert_eq!(r[0], Point::new(-62.0, -31.0));
    assert_eq!(r[2], Point::new(62.0, 31.0));

    // 1.4 * 40 = 56.0, 0.7 * 40 = 28.0
    let r = ShapeId::Rectangle.instantiate(40);
    assert_eq!(r[0], Point::new(-56.0, -28.0));
    assert_eq!(r[2], Point::new(56.0, 28.0));
}

#[test]
fn star_alternates_outer_and_inner_radius() {
    let s = ShapeId::Star.instantiate(50);
    for (i, p) in s.iter().enumerate() {
        let r = (p.x * p.x + p.y * p.y).sqrt();
        let want = if i % 2 == 0 { 50.0 } else { 20.0 };
        assert!((r - want).abs() < 1e-9, "vertex {i}: {r}");
    }
}

#[test]
fn instantiate_scales_linearly() {
    for id in [ShapeId::Square, ShapeId::Heart, ShapeId::TShape, ShapeId::Chevron] {
        let small = id.instantiate(10);
        let big = id.instantiate(20);
        for (a, b) in small.iter().zip(&big) {
            assert!((a.x * 2.0 - b.x).abs() < 1e-9);
            assert!((a.y * 2.0 - b.y).abs() < 1e-9);
        }
    }
}
