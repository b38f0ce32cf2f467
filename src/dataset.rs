//! Immutable per-particle datasets, built once at scene initialization.
//!
//! A `CategoryDataset` pairs every particle's scattered-cloud position with
//! its assembled-tree position plus the decorative fields the animation rules
//! read. Records never change after build; only the external morph fraction
//! moves a particle between its two anchors.

use glam::Vec3;
use rand::Rng;
use std::f32::consts::PI;

use crate::category::ParticleCategory;
use crate::config::{CategoryConfig, TreeLayout};
use crate::math::sampling::{TreeShapeParams, scatter_position, tree_position};
use crate::palette;

/// Category-specific static fields.
#[derive(Clone, Copy, Debug)]
pub enum Extra {
    None,
    /// Spiral shaping retained for the ribbon's per-frame rotation and fade.
    Ribbon {
        target_angle: f32,
        normalized_height: f32,
    },
    /// Fixed orientation assigned once at creation.
    Gift { rotation: Vec3 },
}

/// Static attributes for one particle. Immutable after build.
#[derive(Clone, Copy, Debug)]
pub struct ParticleRecord {
    pub scatter_pos: Vec3,
    pub tree_pos: Vec3,
    pub color: Vec3,
    pub size: f32,
    pub speed: f32,
    pub phase_offset: f32,
    pub extra: Extra,
}

/// The immutable record array for one category.
pub struct CategoryDataset {
    category: ParticleCategory,
    records: Vec<ParticleRecord>,
}

impl CategoryDataset {
    /// Build the full record array for a category. All randomness is drawn
    /// from the injected generator, so tests can seed it.
    pub fn build<R: Rng>(
        category: ParticleCategory,
        config: &CategoryConfig,
        rng: &mut R,
    ) -> Self {
        let records = match config.layout {
            TreeLayout::Cone(shape) => build_cone(config, &shape, rng),
            TreeLayout::Spiral {
                winds,
                base_radius,
                shrink,
                height,
            } => build_spiral(config, winds, base_radius, shrink, height, rng),
            TreeLayout::Clusters {
                anchor,
                cluster_size,
                helix_radius,
                helix_step,
                helix_rise,
            } => build_clusters(
                config,
                &anchor,
                cluster_size,
                helix_radius,
                helix_step,
                helix_rise,
                rng,
            ),
            TreeLayout::GroundRing {
                min_radius,
                extra_radius,
                y,
            } => build_ground_ring(config, min_radius, extra_radius, y, rng),
        };
        Self { category, records }
    }

    pub fn category(&self) -> ParticleCategory {
        self.category
    }

    pub fn records(&self) -> &[ParticleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn draw_common<R: Rng>(config: &CategoryConfig, rng: &mut R) -> (Vec3, Vec3, f32, f32, f32) {
    let scatter = scatter_position(rng, config.scatter_min_radius, config.scatter_extra_radius);
    let color = palette::pick(rng, config.palette);
    let size = config.size_base + rng.random::<f32>() * config.size_spread;
    let speed = config.speed_base + rng.random::<f32>() * config.speed_spread;
    let phase = rng.random::<f32>() * config.phase_range;
    (scatter, color, size, speed, phase)
}

fn build_cone<R: Rng>(
    config: &CategoryConfig,
    shape: &TreeShapeParams,
    rng: &mut R,
) -> Vec<ParticleRecord> {
    (0..config.count)
        .map(|_| {
            let (scatter_pos, color, size, speed, phase_offset) = draw_common(config, rng);
            ParticleRecord {
                scatter_pos,
                tree_pos: tree_position(rng, shape),
                color,
                size,
                speed,
                phase_offset,
                extra: Extra::None,
            }
        })
        .collect()
}

fn build_spiral<R: Rng>(
    config: &CategoryConfig,
    winds: f32,
    base_radius: f32,
    shrink: f32,
    height: f32,
    rng: &mut R,
) -> Vec<ParticleRecord> {
    (0..config.count)
        .map(|i| {
            let t = i as f32 / config.count as f32;
            let angle = t * PI * 2.0 * winds;
            let radius = base_radius * (1.0 - t) * shrink;
            let (scatter_pos, color, size, speed, phase_offset) = draw_common(config, rng);
            ParticleRecord {
                scatter_pos,
                tree_pos: Vec3::new(angle.cos() * radius, t * height, angle.sin() * radius),
                color,
                size,
                speed,
                phase_offset,
                extra: Extra::Ribbon {
                    target_angle: angle,
                    normalized_height: t,
                },
            }
        })
        .collect()
}

fn build_clusters<R: Rng>(
    config: &CategoryConfig,
    anchor_shape: &TreeShapeParams,
    cluster_size: usize,
    helix_radius: f32,
    helix_step: f32,
    helix_rise: f32,
    rng: &mut R,
) -> Vec<ParticleRecord> {
    let mut records = Vec::with_capacity(config.count);
    let mut anchor = Vec3::ZERO;
    for i in 0..config.count {
        let k = i % cluster_size;
        if k == 0 {
            anchor = tree_position(rng, anchor_shape);
        }
        let helix_angle = k as f32 * helix_step;
        let offset = Vec3::new(
            helix_angle.cos() * helix_radius,
            k as f32 * helix_rise,
            helix_angle.sin() * helix_radius,
        );
        let scatter_pos =
            scatter_position(rng, config.scatter_min_radius, config.scatter_extra_radius);
        let size = config.size_base + rng.random::<f32>() * config.size_spread;
        let speed = config.speed_base + rng.random::<f32>() * config.speed_spread;
        let phase_offset = rng.random::<f32>() * config.phase_range;
        records.push(ParticleRecord {
            scatter_pos,
            tree_pos: anchor + offset,
            // Alternating stripes by index parity, not a random pick.
            color: config.palette[i % config.palette.len()],
            size,
            speed,
            phase_offset,
            extra: Extra::None,
        });
    }
    records
}

fn build_ground_ring<R: Rng>(
    config: &CategoryConfig,
    min_radius: f32,
    extra_radius: f32,
    y: f32,
    rng: &mut R,
) -> Vec<ParticleRecord> {
    (0..config.count)
        .map(|_| {
            let angle = rng.random::<f32>() * PI * 2.0;
            let radius = min_radius + rng.random::<f32>() * extra_radius;
            let (scatter_pos, color, size, speed, phase_offset) = draw_common(config, rng);
            ParticleRecord {
                scatter_pos,
                tree_pos: Vec3::new(angle.cos() * radius, y, angle.sin() * radius),
                color,
                size,
                speed,
                phase_offset,
                extra: Extra::Gift {
                    rotation: Vec3::new(
                        rng.random::<f32>() * 0.2,
                        rng.random::<f32>() * PI,
                        0.0,
                    ),
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn build(category: ParticleCategory, seed: u64) -> CategoryDataset {
        let config = CategoryConfig::for_category(category);
        let mut rng = SmallRng::seed_from_u64(seed);
        CategoryDataset::build(category, &config, &mut rng)
    }

    #[test]
    fn test_lengths_match_documented_counts() {
        for (category, expected) in ParticleCategory::ALL.into_iter().zip([
            15000usize, 150, 80, 60, 5000, 300, 800, 12,
        ]) {
            let dataset = build(category, 11);
            assert_eq!(dataset.len(), expected, "{category}");
        }
    }

    #[test]
    fn test_needle_scatter_radii_in_range() {
        let dataset = build(ParticleCategory::Needle, 12);
        for record in dataset.records() {
            let r = record.scatter_pos.length();
            assert!((15.0 - 1e-3..=27.0 + 1e-3).contains(&r), "radius {r}");
        }
    }

    #[test]
    fn test_ribbon_normalized_height_monotone() {
        let dataset = build(ParticleCategory::Ribbon, 13);
        let mut last = -1.0f32;
        for record in dataset.records() {
            let Extra::Ribbon {
                normalized_height, ..
            } = record.extra
            else {
                panic!("ribbon record missing spiral fields");
            };
            assert!(normalized_height >= last);
            assert!((0.0..1.0).contains(&normalized_height));
            last = normalized_height;
        }
        // First particle sits at the base of the spiral.
        let Extra::Ribbon {
            normalized_height, ..
        } = dataset.records()[0].extra
        else {
            unreachable!()
        };
        assert_eq!(normalized_height, 0.0);
        assert!(last > 0.99);
    }

    #[test]
    fn test_ribbon_spiral_descends_outward() {
        let dataset = build(ParticleCategory::Ribbon, 14);
        let first = dataset.records()[0].tree_pos;
        let last = dataset.records()[dataset.len() - 1].tree_pos;
        let first_r = (first.x * first.x + first.z * first.z).sqrt();
        let last_r = (last.x * last.x + last.z * last.z).sqrt();
        assert!(first_r > last_r);
        assert!(first.y < last.y);
    }

    #[test]
    fn test_candy_cane_clusters_alternate_two_colors() {
        let dataset = build(ParticleCategory::CandyCane, 15);
        for (i, record) in dataset.records().iter().enumerate() {
            let expected = palette::CANDY_CANE[i % 2];
            assert_eq!(record.color, expected, "particle {i}");
        }
    }

    #[test]
    fn test_candy_cane_cluster_stays_near_anchor() {
        let dataset = build(ParticleCategory::CandyCane, 16);
        for cluster in dataset.records().chunks(20) {
            let anchor = cluster[0].tree_pos;
            for record in cluster {
                // Helix offsets are small relative to the anchor spacing.
                assert!(record.tree_pos.distance(anchor) < 1.5);
            }
        }
    }

    #[test]
    fn test_gifts_sit_on_ground_ring() {
        let dataset = build(ParticleCategory::Gift, 17);
        for record in dataset.records() {
            assert!((record.tree_pos.y - 0.2).abs() < 1e-6);
            let r = (record.tree_pos.x * record.tree_pos.x
                + record.tree_pos.z * record.tree_pos.z)
                .sqrt();
            assert!((3.0 - 1e-3..=7.0 + 1e-3).contains(&r));
            assert!(matches!(record.extra, Extra::Gift { .. }));
        }
    }

    #[test]
    fn test_gift_sizes_in_range() {
        let dataset = build(ParticleCategory::Gift, 18);
        for record in dataset.records() {
            assert!((0.6..=1.4 + 1e-3).contains(&record.size));
        }
    }
}
