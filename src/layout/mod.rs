//! Scene layout: fixed pixel anchors for the puzzle slots and connector arrows.

pub mod scene;

pub use scene::{SceneLayout, Slot};
