//! Instruction prompts attached to every generated puzzle.

use rand::Rng;
use rand::seq::SliceRandom;

const DEFAULT_PROMPTS: [&str; 3] = [
    "Show the rotation transformation being applied to the second shape. The rotation should match the angular change shown in the example.",
    "Animate the rotation transformation where the shape rotates according to the established pattern. The question mark should smoothly transition to show the rotated version of the shape.",
    "Complete the visual analogy by showing what the second shape becomes when the same rotation transformation is applied.",
];

const ROTATION_PROMPTS: [&str; 3] = [
    "Show the rotation transformation being applied to the second shape. The rotation should match the angular change shown in the example.",
    "Animate the rotation transformation where the shape rotates according to the established pattern.",
    "Complete the analogy by revealing the rotated version of the second shape.",
];

/// Every prompt registered for `task_type`. Unknown types get the `default` list.
pub fn all_prompts(task_type: &str) -> &'static [&'static str] {
    match task_type {
        "rotation" => &ROTATION_PROMPTS,
        _ => &DEFAULT_PROMPTS,
    }
}

/// One prompt for `task_type`, chosen uniformly.
pub fn prompt_for<R: Rng + ?Sized>(task_type: &str, rng: &mut R) -> &'static str {
    all_prompts(task_type)
        .choose(rng)
        .copied()
        .unwrap_or(DEFAULT_PROMPTS[0])
}
