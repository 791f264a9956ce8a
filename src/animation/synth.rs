use crate::foundation::error::AnalogonResult;
use crate::render::frame::FrameRGBA;
use crate::render::painter::{AnswerSlot, ScenePainter};
use crate::render::surface::RasterBackend;
use crate::task::TaskSpec;

/// Frame counts of one ground-truth clip: a still hold on the initial scene, a linear
/// rotation sweep, and a still hold on the final scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnimationPlan {
    pub hold_frames: u32,
    pub rotation_frames: u32,
}

impl Default for AnimationPlan {
    fn default() -> Self {
        Self {
            hold_frames: 15,
            rotation_frames: 30,
        }
    }
}

impl AnimationPlan {
    pub fn total_frames(self) -> usize {
        2 * self.hold_frames as usize + self.rotation_frames as usize
    }
}

/// Normalized position of interpolation frame `i` out of `rotation_frames`.
///
/// Runs from exactly 0.0 to exactly 1.0; a single-frame sweep is already complete.
pub fn progress(i: u32, rotation_frames: u32) -> f64 {
    if rotation_frames > 1 {
        f64::from(i) / f64::from(rotation_frames - 1)
    } else {
        1.0
    }
}

/// Answer-slot angle at interpolation frame `i`. No easing and no wrap-around: a 352.5°
/// target sweeps the long way.
pub fn angle_at(target_degrees: f64, i: u32, rotation_frames: u32) -> f64 {
    target_degrees * progress(i, rotation_frames)
}

/// Render the initial and final scenes, then build the clip between them.
pub fn synthesize<B: RasterBackend>(
    painter: &ScenePainter<B>,
    task: &TaskSpec,
    plan: AnimationPlan,
) -> AnalogonResult<Vec<FrameRGBA>> {
    let initial = painter.render_initial(task)?;
    let fin = painter.render_final(task)?;
    synthesize_between(painter, task, &initial, &fin, plan)
}

/// Build the clip around already-rendered endpoint scenes.
///
/// Hold frames are copies of `initial` and `fin`. Interpolation frames redraw the whole
/// scene with the answer slot posed at [`angle_at`]; the interrogation glyph is gone from the
/// first of them on.
#[tracing::instrument(level = "debug", skip_all, fields(task = task.description()))]
pub fn synthesize_between<B: RasterBackend>(
    painter: &ScenePainter<B>,
    task: &TaskSpec,
    initial: &FrameRGBA,
    fin: &FrameRGBA,
    plan: AnimationPlan,
) -> AnalogonResult<Vec<FrameRGBA>> {
    let target = task.rotation_angle().degrees();
    let mut frames = Vec::with_capacity(plan.total_frames());

    frames.extend(std::iter::repeat_n(initial, plan.hold_frames as usize).cloned());
    for i in 0..plan.rotation_frames {
        let angle_degrees = angle_at(target, i, plan.rotation_frames);
        frames.push(painter.render(task, AnswerSlot::Shape { angle_degrees })?);
    }
    frames.extend(std::iter::repeat_n(fin, plan.hold_frames as usize).cloned());

    tracing::debug!(frames = frames.len(), "clip synthesized");
    Ok(frames)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/synth.rs"]
mod tests;
