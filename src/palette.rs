//! Fixed per-category color palettes.

use glam::Vec3;
use rand::Rng;

/// Convert a packed `0xRRGGBB` value to linear-ish [0,1] RGB.
const fn rgb(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    )
}

/// Deep evergreen tones for the needle cloud.
pub const NEEDLE: &[Vec3] = &[
    rgb(0x064e3b),
    rgb(0x065f46),
    rgb(0x047857),
    rgb(0x10b981),
    rgb(0x022c22),
];

/// Metallic ornament balls.
pub const BALL: &[Vec3] = &[rgb(0xfbbf24), rgb(0x34d399), rgb(0xd97706)];

/// Brass bells.
pub const BELL: &[Vec3] = &[rgb(0xf59e0b), rgb(0xfbbf24)];

/// Glinting stars.
pub const STAR: &[Vec3] = &[rgb(0xffffff), rgb(0xfef3c7), rgb(0xfbbf24)];

/// The ribbon is a single solid red.
pub const RIBBON: &[Vec3] = &[rgb(0xdc2626)];

/// Saturated primaries for the string lights.
pub const LIGHT: &[Vec3] = &[
    rgb(0xff0000),
    rgb(0x00ff00),
    rgb(0x0000ff),
    rgb(0xffff00),
    rgb(0xff00ff),
];

/// Candy canes alternate these two by particle index parity.
pub const CANDY_CANE: &[Vec3] = &[rgb(0xffffff), rgb(0xff0000)];

/// Wrapped gifts at the tree base.
pub const GIFT: &[Vec3] = &[rgb(0x065f46), rgb(0xdc2626), rgb(0xfbbf24)];

/// Pick a uniformly random entry from a palette.
pub fn pick<R: Rng>(rng: &mut R, palette: &[Vec3]) -> Vec3 {
    palette[rng.random_range(0..palette.len())]
}
