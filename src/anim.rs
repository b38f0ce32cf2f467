//! Per-category animation rules.
//!
//! Each rule is a pure function of (progress, elapsed time, record) producing
//! this frame's scale and rotation. Records are never mutated here, and
//! dispatch is a match on the category tag.

use glam::{EulerRot, Quat, Vec3};

use crate::category::ParticleCategory;
use crate::dataset::{Extra, ParticleRecord};

/// Scale and rotation for one particle this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub scale: Vec3,
    pub rotation: Quat,
}

/// Oscillation mapped into [0, 1].
#[inline]
fn breath(x: f32) -> f32 {
    (x.sin() + 1.0) * 0.5
}

/// Compute the frame pose for one particle.
pub fn animate(
    category: ParticleCategory,
    record: &ParticleRecord,
    progress: f32,
    time: f32,
    index: usize,
) -> Pose {
    match category {
        ParticleCategory::Needle => {
            // Needles grow as they assemble; elongated along the local Y.
            let s = 0.045 + progress * 0.06;
            let drift = time * 0.1 + index as f32;
            Pose {
                scale: Vec3::new(s, s * 3.0, s),
                rotation: Quat::from_euler(EulerRot::XYZ, drift.sin(), drift.cos(), 0.0),
            }
        }
        ParticleCategory::Ball | ParticleCategory::Bell | ParticleCategory::Star => Pose {
            scale: Vec3::splat(record.size),
            rotation: Quat::from_euler(EulerRot::XYZ, time * 0.8, time * 0.4, time * 0.2),
        },
        ParticleCategory::Ribbon => {
            let (target_angle, normalized_height) = match record.extra {
                Extra::Ribbon {
                    target_angle,
                    normalized_height,
                } => (target_angle, normalized_height),
                _ => (0.0, 1.0),
            };
            // The spiral fades in from the base upward.
            let bottom_fade = (normalized_height * 4.0).min(1.0);
            Pose {
                scale: Vec3::splat(record.size * bottom_fade * progress),
                rotation: Quat::from_euler(EulerRot::XYZ, time * 0.5, -target_angle, 0.0),
            }
        }
        ParticleCategory::Light => {
            let pulse = 0.8 + 0.4 * breath(time * record.speed + record.phase_offset);
            Pose {
                scale: Vec3::splat(record.size * pulse * progress),
                rotation: Quat::IDENTITY,
            }
        }
        ParticleCategory::CandyCane => {
            let pulse = 0.8 + 0.4 * breath(time * 3.0 + record.phase_offset);
            Pose {
                scale: Vec3::splat(record.size * pulse * progress),
                rotation: Quat::IDENTITY,
            }
        }
        ParticleCategory::Gift => {
            let rotation = match record.extra {
                Extra::Gift { rotation } => rotation,
                _ => Vec3::ZERO,
            };
            Pose {
                scale: Vec3::splat(record.size * progress),
                rotation: Quat::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z),
            }
        }
    }
}
