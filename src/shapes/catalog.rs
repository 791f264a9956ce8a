use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::foundation::core::Point;
use crate::foundation::error::{AnalogonError, AnalogonResult};

/// Identifier of one shape archetype.
///
/// Declaration order is the catalog order used by the sampler's exhaustive scan.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ShapeId {
    Square,
    Triangle,
    Diamond,
    Pentagon,
    Hexagon,
    Rectangle,
    Star,
    Heart,
    Arrow,
    Cross,
    Octagon,
    Trapezoid,
    Rhombus,
    Plus,
    Minus,
    #[serde(rename = "L_shape")]
    LShape,
    #[serde(rename = "T_shape")]
    TShape,
    Parallelogram,
    Kite,
    Chevron,
}

impl ShapeId {
    /// Every archetype, in catalog order.
    pub const ALL: [ShapeId; 20] = [
        ShapeId::Square,
        ShapeId::Triangle,
        ShapeId::Diamond,
        ShapeId::Pentagon,
        ShapeId::Hexagon,
        ShapeId::Rectangle,
        ShapeId::Star,
        ShapeId::Heart,
        ShapeId::Arrow,
        ShapeId::Cross,
        ShapeId::Octagon,
        ShapeId::Trapezoid,
        ShapeId::Rhombus,
        ShapeId::Plus,
        ShapeId::Minus,
        ShapeId::LShape,
        ShapeId::TShape,
        ShapeId::Parallelogram,
        ShapeId::Kite,
        ShapeId::Chevron,
    ];

    /// Stable external name (matches the serde representation).
    pub fn name(self) -> &'static str {
        match self {
            ShapeId::Square => "square",
            ShapeId::Triangle => "triangle",
            ShapeId::Diamond => "diamond",
            ShapeId::Pentagon => "pentagon",
            ShapeId::Hexagon => "hexagon",
            ShapeId::Rectangle => "rectangle",
            ShapeId::Star => "star",
            ShapeId::Heart => "heart",
            ShapeId::Arrow => "arrow",
            ShapeId::Cross => "cross",
            ShapeId::Octagon => "octagon",
            ShapeId::Trapezoid => "trapezoid",
            ShapeId::Rhombus => "rhombus",
            ShapeId::Plus => "plus",
            ShapeId::Minus => "minus",
            ShapeId::LShape => "L_shape",
            ShapeId::TShape => "T_shape",
            ShapeId::Parallelogram => "parallelogram",
            ShapeId::Kite => "kite",
            ShapeId::Chevron => "chevron",
        }
    }

    /// Position of this shape in [`ShapeId::ALL`].
    pub fn catalog_index(self) -> usize {
        self as usize
    }

    /// Registered vertex template for this archetype.
    pub fn template(self) -> ShapeTemplate {
        use ShapeTemplate::{CompositeOutline as Composite, ConvexPolygon as Convex};
        match self {
            ShapeId::Square => Convex(square),
            ShapeId::Triangle => Convex(triangle),
            ShapeId::Diamond => Convex(diamond),
            ShapeId::Pentagon => Convex(pentagon),
            ShapeId::Hexagon => Convex(hexagon),
            ShapeId::Rectangle => Convex(rectangle),
            ShapeId::Star => Composite(star),
            ShapeId::Heart => Composite(heart),
            ShapeId::Arrow => Composite(arrow),
            ShapeId::Cross => Composite(cross),
            ShapeId::Octagon => Convex(octagon),
            ShapeId::Trapezoid => Convex(trapezoid),
            ShapeId::Rhombus => Convex(rhombus),
            ShapeId::Plus => Composite(plus),
            ShapeId::Minus => Convex(minus),
            ShapeId::LShape => Composite(l_shape),
            ShapeId::TShape => Composite(t_shape),
            ShapeId::Parallelogram => Convex(parallelogram),
            ShapeId::Kite => Composite(kite),
            ShapeId::Chevron => Composite(chevron),
        }
    }

    /// Local-frame vertices of this archetype at `half_size`, centered on the origin.
    pub fn instantiate(self, half_size: i32) -> Vec<Point> {
        self.template().vertices(f64::from(half_size))
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeId {
    type Err = AnalogonError;

    fn from_str(s: &str) -> AnalogonResult<Self> {
        ShapeId::ALL
            .into_iter()
            .find(|id| id.name() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = ShapeId::ALL.iter().map(|id| id.name()).collect();
                AnalogonError::validation(format!(
                    "unknown shape '{s}' (expected one of: {})",
                    known.join(", ")
                ))
            })
    }
}

/// Vertex template of one archetype.
///
/// `CompositeOutline` templates are simple but non-convex polygons whose vertex order encodes
/// the concave corners; they must be filled as a single outline, never triangulated as a fan.
#[derive(Clone, Copy, Debug)]
pub enum ShapeTemplate {
    ConvexPolygon(fn(f64) -> Vec<Point>),
    CompositeOutline(fn(f64) -> Vec<Point>),
}

impl ShapeTemplate {
    pub fn vertices(self, half_size: f64) -> Vec<Point> {
        match self {
            ShapeTemplate::ConvexPolygon(f) | ShapeTemplate::CompositeOutline(f) => f(half_size),
        }
    }

    pub fn is_convex(self) -> bool {
        matches!(self, ShapeTemplate::ConvexPolygon(_))
    }
}

fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

/// `k` points on a circle of radius `r`, at `i·2π/k − start_offset`.
fn ring(k: u32, r: f64, start_offset: f64) -> Vec<Point> {
    (0..k)
        .map(|i| {
            let a = f64::from(i) * 2.0 * PI / f64::from(k) - start_offset;
            Point::new(r * a.cos(), r * a.sin())
        })
        .collect()
}

fn square(h: f64) -> Vec<Point> {
    pts(&[(-h, -h), (h, -h), (h, h), (-h, h)])
}

fn triangle(h: f64) -> Vec<Point> {
    pts(&[(0.0, -h), (-h, h), (h, h)])
}

fn diamond(h: f64) -> Vec<Point> {
    pts(&[(0.0, -h), (h, 0.0), (0.0, h), (-h, 0.0)])
}

// Pentagon points up; hexagon and octagon start on the +x axis.
fn pentagon(h: f64) -> Vec<Point> {
    ring(5, h, PI / 2.0)
}

fn hexagon(h: f64) -> Vec<Point> {
    ring(6, h, 0.0)
}

fn octagon(h: f64) -> Vec<Point> {
    ring(8, h, 0.0)
}

fn rectangle(h: f64) -> Vec<Point> {
    let w = (h * 1.4).trunc();
    let t = (h * 0.7).trunc();
    pts(&[(-w, -t), (w, -t), (w, t), (-w, t)])
}

fn star(h: f64) -> Vec<Point> {
    let inner = h * 0.4;
    (0..10u32)
        .map(|i| {
            let a = f64::from(i) * PI / 5.0 - PI / 2.0;
            let r = if i % 2 == 0 { h } else { inner };
            Point::new(r * a.cos(), r * a.sin())
        })
        .collect()
}

fn heart(h: f64) -> Vec<Point> {
    pts(&[
        (0.0, h),
        (-h * 0.7, 0.0),
        (-h * 0.3, -h * 0.5),
        (0.0, -h * 0.2),
        (h * 0.3, -h * 0.5),
        (h * 0.7, 0.0),
    ])
}

fn trapezoid(h: f64) -> Vec<Point> {
    let top = h * 0.5;
    pts(&[(-top, -h), (top, -h), (h, h), (-h, h)])
}

fn rhombus(h: f64) -> Vec<Point> {
    pts(&[(0.0, -h), (h * 0.7, 0.0), (0.0, h), (-h * 0.7, 0.0)])
}

/// Twelve-vertex cross outline with arm half-width `t`.
fn cross_outline(h: f64, t: f64) -> Vec<Point> {
    pts(&[
        (-t, -h),
        (t, -h),
        (t, -t),
        (h, -t),
        (h, t),
        (t, t),
        (t, h),
        (-t, h),
        (-t, t),
        (-h, t),
        (-h, -t),
        (-t, -t),
    ])
}

fn plus(h: f64) -> Vec<Point> {
    cross_outline(h, h * 0.4)
}

fn cross(h: f64) -> Vec<Point> {
    cross_outline(h, h * 0.3)
}

fn minus(h: f64) -> Vec<Point> {
    let t = h * 0.25;
    pts(&[(-h, -t), (h, -t), (h, t), (-h, t)])
}

fn l_shape(h: f64) -> Vec<Point> {
    let t = h * 0.4;
    pts(&[
        (-h, -h),
        (-h + t, -h),
        (-h + t, h - t),
        (h, h - t),
        (h, h),
        (-h, h),
    ])
}

fn t_shape(h: f64) -> Vec<Point> {
    let t = h * 0.4;
    pts(&[
        (-h, -h),
        (h, -h),
        (h, -h + t),
        (t / 2.0, -h + t),
        (t / 2.0, h),
        (-t / 2.0, h),
        (-t / 2.0, -h + t),
        (-h, -h + t),
    ])
}

fn parallelogram(h: f64) -> Vec<Point> {
    let skew = h * 0.3;
    pts(&[
        (-h + skew, -h),
        (h + skew, -h),
        (h - skew, h),
        (-h - skew, h),
    ])
}

fn kite(h: f64) -> Vec<Point> {
    pts(&[
        (0.0, -h),
        (h * 0.4, -h * 0.2),
        (0.0, h * 0.6),
        (-h * 0.4, -h * 0.2),
    ])
}

fn chevron(h: f64) -> Vec<Point> {
    pts(&[
        (-h, -h * 0.5),
        (0.0, h * 0.5),
        (h, -h * 0.5),
        (h * 0.6, -h * 0.8),
        (0.0, h * 0.1),
        (-h * 0.6, -h * 0.8),
    ])
}

fn arrow(h: f64) -> Vec<Point> {
    pts(&[
        (-h, -h * 0.3),
        (h * 0.3, -h * 0.3),
        (h * 0.3, -h),
        (h, 0.0),
        (h * 0.3, h),
        (h * 0.3, h * 0.3),
        (-h, h * 0.3),
    ])
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/catalog.rs"]
mod tests;
