use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// 8-bit RGBA color as handed to the canvas.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const GREY: Rgba = Rgba::rgb(128, 128, 128);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Channel-wise linear interpolation of the color channels.
    /// Alpha is taken from `self`. Each channel is truncated toward zero.
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let mix = |a: u8, b: u8| (a as f32 + t * (b as f32 - a as f32)) as u8;
        Rgba {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: self.a,
        }
    }

    /// Scale the color channels by the ratio `num / den` using integer math.
    /// Used for the radial shading of orbiting bodies.
    pub fn scaled(self, num: u32, den: u32) -> Rgba {
        if den == 0 {
            return self;
        }
        let scale = |c: u8| (c as u32 * num / den).min(255) as u8;
        Rgba {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            a: self.a,
        }
    }

    pub fn with_alpha(mut self, a: u8) -> Rgba {
        self.a = a;
        self
    }
}

// ── Palettes ─────────────────────────────────────────────────────────

/// Nebula color cycle. Particles interpolate between consecutive entries
/// and wrap from the last back to the first.
pub const NEBULA_PALETTE: [Rgba; 6] = [
    Rgba::rgb(128, 0, 128),   // purple
    Rgba::rgb(194, 52, 158),  // mid purple
    Rgba::rgb(255, 105, 180), // pink
    Rgba::rgb(0, 255, 255),   // cyan
    Rgba::rgb(0, 128, 255),   // mid cyan
    Rgba::rgb(64, 0, 194),    // deep blue
];

/// Explosion rings, outermost first.
pub const EXPLOSION_OUTER: Rgba = Rgba::rgb(255, 69, 0);
pub const EXPLOSION_MID: Rgba = Rgba::rgb(255, 255, 0);
pub const EXPLOSION_INNER: Rgba = Rgba::WHITE;

pub const ACCRETION_DISK: Rgba = Rgba::rgb(255, 165, 0);
