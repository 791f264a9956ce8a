pub mod synth;

pub use synth::{AnimationPlan, angle_at, progress, synthesize, synthesize_between};
