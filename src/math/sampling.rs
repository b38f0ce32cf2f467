//! Build-time position sampling for the two particle configurations.
//!
//! Both generators are stateless and run only while datasets are built,
//! never in the per-frame path.

use glam::Vec3;
use rand::Rng;
use std::f32::consts::PI;

/// Shape parameters for the tiered cone layout shared by the foliage-like
/// categories.
#[derive(Clone, Copy, Debug)]
pub struct TreeShapeParams {
    pub height: f32,
    pub base_radius: f32,
    pub tiers: f32,
    pub tier_amplitude: f32,
}

impl TreeShapeParams {
    /// Standard silhouette with a category-specific height.
    pub fn with_height(height: f32) -> Self {
        Self {
            height,
            base_radius: 5.2,
            tiers: 5.0,
            tier_amplitude: 0.12,
        }
    }
}

/// Uniform sample within the spherical shell
/// `[min_radius, min_radius + extra_radius]`.
///
/// The polar angle comes from `acos(2u - 1)` so density is uniform over the
/// sphere surface rather than over angle space.
pub fn scatter_position<R: Rng>(rng: &mut R, min_radius: f32, extra_radius: f32) -> Vec3 {
    let radius = min_radius + rng.random::<f32>() * extra_radius;
    let phi = rng.random::<f32>() * PI * 2.0;
    let theta = (2.0 * rng.random::<f32>() - 1.0).acos();
    Vec3::new(
        radius * theta.sin() * phi.cos(),
        radius * theta.sin() * phi.sin(),
        radius * theta.cos(),
    )
}

/// Random point near the surface of a tiered cone.
///
/// The radius envelope is `base * (1 - ny) * (1 + sin(ny * pi * tiers) * amp)`,
/// which bulges periodically to suggest branch tiers. Samples stay in the
/// outer 30% of the envelope so the silhouette reads as a shell rather than
/// a solid volume.
pub fn tree_position<R: Rng>(rng: &mut R, shape: &TreeShapeParams) -> Vec3 {
    let y = rng.random::<f32>() * shape.height;
    let ny = y / shape.height;
    let tier_expansion = 1.0 + (ny * PI * shape.tiers).sin() * shape.tier_amplitude;
    let max_radius = shape.base_radius * (1.0 - ny) * tier_expansion;
    let radius = (0.7 + rng.random::<f32>() * 0.3) * max_radius;
    let angle = rng.random::<f32>() * PI * 2.0;
    Vec3::new(angle.cos() * radius, y, angle.sin() * radius)
}
