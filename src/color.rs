//! Theme colors derived from the icon hue
//!
//! A theme is five colors: two grays, and three tints of the base hue. Each
//! icon picks three of them (one per placement group) with a rule that keeps
//! two dark or two light colors from sitting next to each other.

use log::trace;

use crate::config::{Config, Hue};
use crate::digest::{Digest, COLOR_SLOT_OFFSET};

/// Lightness correction per sixth of the hue circle. Yellows and greens look
/// brighter than blues at equal HSL lightness; the table evens that out.
const CORRECTORS: [f64; 7] = [0.55, 0.5, 0.5, 0.46, 0.6, 0.55, 0.55];

pub const DARK_GRAY: usize = 0;
pub const MID_COLOR: usize = 1;
pub const LIGHT_GRAY: usize = 2;
pub const LIGHT_COLOR: usize = 3;
pub const DARK_COLOR: usize = 4;

/// Number of colors in a theme
pub const THEME_LEN: usize = 5;

/// Base hue in `[0, 1]`
pub fn hue(config: &Config, digest: &Digest) -> f64 {
    match config.hue {
        Hue::FromHash => digest.hue(),
        Hue::Fixed(deg) => f64::from(deg) / 360.0,
    }
}

/// HSL to `#rrggbb` after applying the perceptual lightness correction
pub fn corrected_hsl(hue: f64, saturation: f64, lightness: f64) -> String {
    let idx = ((hue * 6.0 + 0.5) as usize).min(CORRECTORS.len() - 1);
    let corrector = CORRECTORS[idx];
    let lightness = if lightness < 0.5 {
        lightness * corrector * 2.0
    } else {
        corrector + (lightness - 0.5) * (1.0 - corrector) * 2.0
    };
    let (r, g, b) = hsl_to_rgb(hue * 360.0, saturation, lightness);
    format!("#{:02x}{:02x}{:02x}", channel(r), channel(g), channel(b))
}

fn channel(v: f64) -> u8 {
    (v * 255.0 + 0.5).clamp(0.0, 255.0) as u8
}

/// HSL (hue in degrees) to RGB channels in `[0, 1]`
fn hsl_to_rgb(h_deg: f64, s: f64, l: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let h = h_deg / 360.0;

    fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if 6.0 * t < 1.0 {
            p + (q - p) * 6.0 * t
        } else if 2.0 * t < 1.0 {
            q
        } else if 3.0 * t < 2.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }

    (
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    )
}

/// The five theme colors: dark gray, mid color, light gray, light color, dark color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    colors: [String; THEME_LEN],
}

impl Theme {
    /// Build the theme for a base hue in `[0, 1]`
    pub fn new(hue: f64, config: &Config) -> Self {
        Self {
            colors: [
                config.grayscale.color(hue, 0.0),
                config.colored.color(hue, 0.5),
                config.grayscale.color(hue, 1.0),
                config.colored.color(hue, 1.0),
                config.colored.color(hue, 0.0),
            ],
        }
    }

    /// All five colors in slot order
    pub fn colors(&self) -> &[String; THEME_LEN] {
        &self.colors
    }

    /// Color for a slot index, wrapping past the last slot
    pub fn get(&self, slot: usize) -> &str {
        &self.colors[slot % THEME_LEN]
    }
}

/// Theme indices picked for the outer-primary, outer-secondary and inner groups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSlots(pub [usize; 3]);

impl ColorSlots {
    /// Pick three slots from the digest, demoting a second dark or a second
    /// light pick to the mid color
    pub fn select(digest: &Digest) -> Self {
        let mut slots = [0usize; 3];
        let mut dark = false;
        let mut light = false;
        for (i, slot) in slots.iter_mut().enumerate() {
            let mut idx = digest.nibble(COLOR_SLOT_OFFSET + i) as usize % THEME_LEN;
            if idx == DARK_GRAY || idx == DARK_COLOR {
                if dark {
                    idx = MID_COLOR;
                }
                dark = true;
            }
            if idx == LIGHT_GRAY || idx == LIGHT_COLOR {
                if light {
                    idx = MID_COLOR;
                }
                light = true;
            }
            trace!("color slot {} -> theme index {}", i, idx);
            *slot = idx;
        }
        Self(slots)
    }

    /// Resolve the three slots against a theme
    pub fn colors<'a>(&self, theme: &'a Theme) -> [&'a str; 3] {
        self.0.map(|slot| theme.get(slot))
    }
}
