//! Shape catalog: the twenty polygon archetypes a puzzle can be built from.
//!
//! Each archetype is registered once in [`catalog`] as a vertex template. Adding a shape means
//! adding one [`ShapeId`] variant and one template entry.

pub mod catalog;

pub use catalog::{ShapeId, ShapeTemplate};
