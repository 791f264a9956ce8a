use crate::foundation::error::{AnalogonError, AnalogonResult};
use crate::shapes::ShapeId;
use crate::task::angles::RotationAngle;

/// The `(shape_a, shape_c, angle)` triple that identifies a puzzle for uniqueness tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct CombinationKey {
    pub shape_a: ShapeId,
    pub shape_c: ShapeId,
    pub angle: RotationAngle,
}

impl CombinationKey {
    /// Build a key from explicit parts. The two shapes must differ.
    pub fn new(shape_a: ShapeId, shape_c: ShapeId, angle: RotationAngle) -> AnalogonResult<Self> {
        if shape_a == shape_c {
            return Err(AnalogonError::validation(format!(
                "shape_a and shape_c must differ (both are '{shape_a}')"
            )));
        }
        Ok(Self {
            shape_a,
            shape_c,
            angle,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformationKind {
    Rotation,
}

impl TransformationKind {
    /// Task-type key used for prompt lookup.
    pub fn as_str(self) -> &'static str {
        match self {
            TransformationKind::Rotation => "rotation",
        }
    }
}

/// Immutable description of one puzzle instance.
///
/// B is always A and D is always C: the analogy is a same-shape rotation, not a substitution.
/// Fields are private so that invariant cannot be broken after construction.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TaskSpec {
    transformation_type: TransformationKind,
    shape_a: ShapeId,
    shape_b: ShapeId,
    shape_c: ShapeId,
    shape_d: ShapeId,
    rotation_angle: RotationAngle,
    description: String,
}

impl TaskSpec {
    pub fn rotation(key: CombinationKey) -> Self {
        let CombinationKey {
            shape_a,
            shape_c,
            angle,
        } = key;
        Self {
            transformation_type: TransformationKind::Rotation,
            shape_a,
            shape_b: shape_a,
            shape_c,
            shape_d: shape_c,
            rotation_angle: angle,
            description: format!(
                "{shape_a} rotated by {angle}°, {shape_c} rotated by {angle}°"
            ),
        }
    }

    pub fn key(&self) -> CombinationKey {
        CombinationKey {
            shape_a: self.shape_a,
            shape_c: self.shape_c,
            angle: self.rotation_angle,
        }
    }

    pub fn transformation_type(&self) -> TransformationKind {
        self.transformation_type
    }

    pub fn shape_a(&self) -> ShapeId {
        self.shape_a
    }

    pub fn shape_b(&self) -> ShapeId {
        self.shape_b
    }

    pub fn shape_c(&self) -> ShapeId {
        self.shape_c
    }

    pub fn shape_d(&self) -> ShapeId {
        self.shape_d
    }

    pub fn rotation_angle(&self) -> RotationAngle {
        self.rotation_angle
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
