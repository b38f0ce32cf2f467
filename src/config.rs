//! Build-time particle configuration constants.
//!
//! Counts, radius ranges, palettes and layout parameters are fixed at build
//! time; nothing here is loaded at runtime. `validate` guards the few ways a
//! hand-edited config could go wrong.

use glam::Vec3;
use std::f32::consts::PI;

use crate::category::ParticleCategory;
use crate::core::error::Error;
use crate::math::sampling::TreeShapeParams;
use crate::palette;

/// Base per-frame interpolation rate toward the morph target.
pub const BASE_MORPH_RATE: f32 = 0.015;

/// Random rate jitter added on top of the base rate, redrawn every frame so
/// particles converge staggered rather than in lockstep.
pub const MORPH_RATE_JITTER: f32 = 0.01;

/// How a category's tree-side positions are generated.
#[derive(Clone, Copy, Debug)]
pub enum TreeLayout {
    /// Tiered cone shared by the foliage-like categories.
    Cone(TreeShapeParams),
    /// Descending spiral winding around the cone surface.
    Spiral {
        winds: f32,
        base_radius: f32,
        shrink: f32,
        height: f32,
    },
    /// Small helical clusters anchored on the cone surface.
    Clusters {
        anchor: TreeShapeParams,
        cluster_size: usize,
        helix_radius: f32,
        helix_step: f32,
        helix_rise: f32,
    },
    /// Flat ring on the ground at the base of the tree.
    GroundRing {
        min_radius: f32,
        extra_radius: f32,
        y: f32,
    },
}

/// Build-time constants for one particle category.
#[derive(Clone, Debug)]
pub struct CategoryConfig {
    pub count: usize,
    /// Inner radius of the scatter shell.
    pub scatter_min_radius: f32,
    /// Shell thickness beyond the inner radius.
    pub scatter_extra_radius: f32,
    pub layout: TreeLayout,
    pub palette: &'static [Vec3],
    pub size_base: f32,
    pub size_spread: f32,
    pub speed_base: f32,
    pub speed_spread: f32,
    /// Upper bound for the per-particle phase offset draw.
    pub phase_range: f32,
}

impl CategoryConfig {
    /// The documented constants for a category.
    pub fn for_category(category: ParticleCategory) -> Self {
        match category {
            ParticleCategory::Needle => Self {
                count: 15000,
                scatter_min_radius: 15.0,
                scatter_extra_radius: 12.0,
                layout: TreeLayout::Cone(TreeShapeParams::with_height(12.0)),
                palette: palette::NEEDLE,
                size_base: 1.0,
                size_spread: 0.0,
                speed_base: 0.02,
                speed_spread: 0.04,
                phase_range: PI * 2.0,
            },
            ParticleCategory::Ball => Self {
                count: 150,
                scatter_min_radius: 20.0,
                scatter_extra_radius: 15.0,
                layout: TreeLayout::Cone(TreeShapeParams::with_height(11.5)),
                palette: palette::BALL,
                size_base: 0.12,
                size_spread: 0.15,
                speed_base: 0.04,
                speed_spread: 0.06,
                phase_range: PI * 2.0,
            },
            ParticleCategory::Bell => Self {
                count: 80,
                scatter_min_radius: 20.0,
                scatter_extra_radius: 15.0,
                layout: TreeLayout::Cone(TreeShapeParams::with_height(11.5)),
                palette: palette::BELL,
                size_base: 0.15,
                size_spread: 0.1,
                speed_base: 0.04,
                speed_spread: 0.06,
                phase_range: PI * 2.0,
            },
            ParticleCategory::Star => Self {
                count: 60,
                scatter_min_radius: 20.0,
                scatter_extra_radius: 15.0,
                layout: TreeLayout::Cone(TreeShapeParams::with_height(11.5)),
                palette: palette::STAR,
                size_base: 0.1,
                size_spread: 0.1,
                speed_base: 0.04,
                speed_spread: 0.06,
                phase_range: PI * 2.0,
            },
            ParticleCategory::Ribbon => Self {
                count: 5000,
                scatter_min_radius: 25.0,
                scatter_extra_radius: 10.0,
                layout: TreeLayout::Spiral {
                    winds: 8.0,
                    base_radius: 5.6,
                    shrink: 0.98,
                    height: 12.0,
                },
                palette: palette::RIBBON,
                size_base: 0.04,
                size_spread: 0.06,
                speed_base: 0.03,
                speed_spread: 0.02,
                phase_range: PI * 2.0,
            },
            ParticleCategory::Light => Self {
                count: 300,
                scatter_min_radius: 20.0,
                scatter_extra_radius: 15.0,
                layout: TreeLayout::Cone(TreeShapeParams::with_height(12.0)),
                palette: palette::LIGHT,
                size_base: 0.08,
                size_spread: 0.0,
                speed_base: 1.5,
                speed_spread: 2.0,
                phase_range: PI * 2.0,
            },
            ParticleCategory::CandyCane => Self {
                count: 800,
                scatter_min_radius: 18.0,
                scatter_extra_radius: 10.0,
                layout: TreeLayout::Clusters {
                    anchor: TreeShapeParams::with_height(11.0),
                    cluster_size: 20,
                    helix_radius: 0.15,
                    helix_step: 0.6,
                    helix_rise: 0.04,
                },
                palette: palette::CANDY_CANE,
                size_base: 0.05,
                size_spread: 0.0,
                speed_base: 0.1,
                speed_spread: 0.1,
                phase_range: PI,
            },
            ParticleCategory::Gift => Self {
                count: 12,
                scatter_min_radius: 15.0,
                scatter_extra_radius: 5.0,
                layout: TreeLayout::GroundRing {
                    min_radius: 3.0,
                    extra_radius: 4.0,
                    y: 0.2,
                },
                palette: palette::GIFT,
                size_base: 0.6,
                size_spread: 0.8,
                speed_base: 0.0,
                speed_spread: 0.0,
                phase_range: 0.0,
            },
        }
    }

    /// Check the invariants a hand-tuned config must uphold.
    pub fn validate(&self, category: ParticleCategory) -> Result<(), Error> {
        if self.count == 0 {
            return Err(Error::ZeroCount(category.name()));
        }
        if self.scatter_min_radius <= 0.0 || self.scatter_extra_radius < 0.0 {
            return Err(Error::InvalidRadius(category.name()));
        }
        if let TreeLayout::Clusters { cluster_size, .. } = self.layout {
            if cluster_size == 0 || self.count % cluster_size != 0 {
                return Err(Error::ClusterMismatch(category.name(), cluster_size, self.count));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_counts() {
        let counts: Vec<usize> = ParticleCategory::ALL
            .iter()
            .map(|&c| CategoryConfig::for_category(c).count)
            .collect();
        assert_eq!(counts, vec![15000, 150, 80, 60, 5000, 300, 800, 12]);
    }

    #[test]
    fn test_defaults_validate() {
        for category in ParticleCategory::ALL {
            CategoryConfig::for_category(category)
                .validate(category)
                .unwrap();
        }
    }

    #[test]
    fn test_zero_count_rejected() {
        let mut config = CategoryConfig::for_category(ParticleCategory::Ball);
        config.count = 0;
        assert!(matches!(
            config.validate(ParticleCategory::Ball),
            Err(Error::ZeroCount(_))
        ));
    }

    #[test]
    fn test_cluster_mismatch_rejected() {
        let mut config = CategoryConfig::for_category(ParticleCategory::CandyCane);
        config.count = 801;
        assert!(matches!(
            config.validate(ParticleCategory::CandyCane),
            Err(Error::ClusterMismatch(_, 20, 801))
        ));
    }

    #[test]
    fn test_invalid_radius_rejected() {
        let mut config = CategoryConfig::for_category(ParticleCategory::Star);
        config.scatter_min_radius = 0.0;
        assert!(matches!(
            config.validate(ParticleCategory::Star),
            Err(Error::InvalidRadius(_))
        ));
    }
}
