use crate::foundation::core::{PixelPoint, Point};
use crate::foundation::math::trunc_px;
use crate::shapes::ShapeId;

/// Rotate local-frame vertices by `angle_degrees` about the origin and translate them to
/// `center`.
///
/// Each coordinate is truncated toward zero after the center shift. Image space has y growing
/// downward, so positive angles rotate clockwise on screen.
///
/// The result depends only on the arguments: identical inputs give bit-identical vertices, which
/// is what lets a slot re-rendered in a later frame match its earlier rendering exactly.
pub fn transform(local: &[Point], angle_degrees: f64, center: PixelPoint) -> Vec<PixelPoint> {
    let theta = angle_degrees.to_radians();
    let (sin_a, cos_a) = (theta.sin(), theta.cos());
    let (cx, cy) = (f64::from(center.x), f64::from(center.y));

    local
        .iter()
        .map(|p| {
            let rx = p.x * cos_a - p.y * sin_a;
            let ry = p.x * sin_a + p.y * cos_a;
            PixelPoint::new(trunc_px(rx + cx), trunc_px(ry + cy))
        })
        .collect()
}

/// Instantiate `shape` at `half_size` and place it at `center` rotated by `angle_degrees`.
pub fn pose(shape: ShapeId, half_size: i32, angle_degrees: f64, center: PixelPoint) -> Vec<PixelPoint> {
    transform(&shape.instantiate(half_size), angle_degrees, center)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/transform.rs"]
mod tests;
