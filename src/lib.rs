//! analogon generates rotation visual-analogy puzzles of the form A:B :: C:?.
//!
//! Shape A is rotated into B by some angle; the learner has to apply the same rotation to C.
//! The crate covers the whole pipeline:
//!
//! - sample globally unique (shape_a, shape_c, angle) combinations with a [`TaskSampler`]
//! - paint the initial and final scenes with a [`ScenePainter`]
//! - synthesize and encode the ground-truth rotation clip
//! - package everything as [`TaskPair`]s via [`TaskGenerator`]
#![forbid(unsafe_code)]

mod foundation;

pub mod animation;
pub mod config;
/// Frame sinks and MP4 export.
pub mod encode;
pub mod generator;
pub mod geometry;
pub mod layout;
pub mod prompts;
pub mod render;
pub mod shapes;
pub mod task;

pub use crate::foundation::core::{Canvas, Fps, FrameIndex, PixelPoint, Point, Rgba8};
pub use crate::foundation::error::{AnalogonError, AnalogonResult};

pub use crate::animation::AnimationPlan;
pub use crate::config::GeneratorConfig;
pub use crate::encode::{FfmpegSink, FfmpegSinkOpts, FrameSink, InMemorySink, SinkConfig};
pub use crate::generator::{TaskGenerator, TaskPair};
pub use crate::layout::{SceneLayout, Slot};
pub use crate::render::{CpuRasterizer, FontBook, FrameRGBA, PixelRect, ScenePainter};
pub use crate::shapes::ShapeId;
pub use crate::task::{CombinationKey, RotationAngle, SharedSampler, TaskSampler, TaskSpec};
