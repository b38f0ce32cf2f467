//! Mathematical utilities for particle layout

pub mod sampling;

pub use sampling::{scatter_position, tree_position, TreeShapeParams};
