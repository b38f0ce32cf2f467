//! Treemorph - an instanced particle morphing engine for a holiday tree scene

pub mod core;
pub mod math;
pub mod palette;
pub mod config;
pub mod category;
pub mod dataset;
pub mod morph;
pub mod anim;
pub mod instance;
pub mod engine;

pub use category::ParticleCategory;
pub use engine::MorphEngine;
pub use morph::MorphState;
