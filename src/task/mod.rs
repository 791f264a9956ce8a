//! Puzzle instances: the angle catalog, task descriptions and the unique-combination sampler.

pub mod angles;
pub mod sampler;
pub mod spec;

pub use angles::{ANGLE_CATALOG, RotationAngle};
pub use sampler::{MAX_RANDOM_ATTEMPTS, SamplerState, SharedSampler, TaskSampler, max_keys};
pub use spec::{CombinationKey, TaskSpec, TransformationKind};
