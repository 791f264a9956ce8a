//! Geometry engine: poses shape archetypes in pixel space.

pub mod transform;

pub use transform::{pose, transform};
