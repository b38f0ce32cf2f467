//! Particle category tags.
//!
//! The category tag selects a particle count, a layout rule at build time and
//! an animation rule in the per-frame path. Dispatch is a plain enum match,
//! never a string comparison.

use std::fmt;

/// A class of decorative particle with its own count, geometry and animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParticleCategory {
    Needle,
    Ball,
    Bell,
    Star,
    Ribbon,
    Light,
    CandyCane,
    Gift,
}

impl ParticleCategory {
    pub const COUNT: usize = 8;

    pub const ALL: [Self; Self::COUNT] = [
        Self::Needle,
        Self::Ball,
        Self::Bell,
        Self::Star,
        Self::Ribbon,
        Self::Light,
        Self::CandyCane,
        Self::Gift,
    ];

    /// Stable index into per-category storage.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Needle => "needle",
            Self::Ball => "ball",
            Self::Bell => "bell",
            Self::Star => "star",
            Self::Ribbon => "ribbon",
            Self::Light => "light",
            Self::CandyCane => "candy_cane",
            Self::Gift => "gift",
        }
    }
}

impl fmt::Display for ParticleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
