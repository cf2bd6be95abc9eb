//! Identity digest and the hash-derived parameters read from it
//!
//! The digest is the SHA-1 of the identity bytes rendered as 40 lowercase hex
//! characters. Every pseudo-random choice made while composing an icon reads
//! one or more characters at a fixed offset of that string, so the offsets
//! below are part of the output format: changing any of them changes every
//! icon ever generated.

use sha1::{Digest as _, Sha1};

/// Number of hex characters in a digest
pub const DIGEST_LEN: usize = 40;

/// Number of trailing characters used for the hash-derived hue
pub const HUE_CHARS: usize = 7;

/// Largest value representable by [`HUE_CHARS`] hex characters
pub const HUE_MAX: u32 = 0xfff_ffff;

/// First of the three consecutive color-slot selector characters
pub const COLOR_SLOT_OFFSET: usize = 8;

/// Shape selector for the outer ring (edges)
pub const OUTER_PRIMARY_SHAPE: usize = 2;
/// Rotation seed for the outer ring (edges)
pub const OUTER_PRIMARY_ROTATION: usize = 3;
/// Shape selector for the corners
pub const OUTER_SECONDARY_SHAPE: usize = 4;
/// Rotation seed for the corners
pub const OUTER_SECONDARY_ROTATION: usize = 5;
/// Shape selector for the four center cells
pub const INNER_SHAPE: usize = 1;
/// The center cells have no rotation seed and always start at quadrant 0
pub const INNER_ROTATION: usize = 0;

/// A 160-bit identity digest as lowercase hex
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digest {
    hex: String,
}

impl Digest {
    /// Hash an identity string
    pub fn of(identity: &str) -> Self {
        let bytes = Sha1::digest(identity.as_bytes());
        Self {
            hex: hex::encode(bytes),
        }
    }

    /// The 40 lowercase hex characters
    pub fn as_str(&self) -> &str {
        &self.hex
    }

    /// Hex digit at `offset`, or 0 when the offset is out of range
    pub fn nibble(&self, offset: usize) -> u32 {
        self.hex
            .as_bytes()
            .get(offset)
            .and_then(|&b| (b as char).to_digit(16))
            .unwrap_or(0)
    }

    /// Rotation seed for a group. Offset 0 means the group is unseeded.
    pub fn rotation_seed(&self, offset: usize) -> u32 {
        if offset == 0 {
            0
        } else {
            self.nibble(offset)
        }
    }

    /// Hue in `[0, 1]` taken from the last seven hex characters
    pub fn hue(&self) -> f64 {
        let tail = &self.hex[self.hex.len().saturating_sub(HUE_CHARS)..];
        let value = u32::from_str_radix(tail, 16).unwrap_or(0);
        f64::from(value) / f64::from(HUE_MAX)
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.hex)
    }
}
