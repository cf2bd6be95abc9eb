//! Identicon configuration and its compact 24-character encoding
//!
//! The compact form packs everything except the canvas geometry into hex
//! fields so a whole configuration fits into a URL parameter:
//!
//! ```text
//! 864444000141320028501e5a
//! ^^^^^^^^                  background RGBA
//!         ^                 '1' = fixed hue follows, anything else = hue from hash
//!          ^^^              fixed hue + 1
//!             ^^^^          colored / grayscale saturation (percent)
//!                 ^^^^      colored lightness 1 / 2 (percent)
//!                     ^^^^  grayscale lightness 1 / 2 (percent)
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::corrected_hsl;
use crate::{Error, Result};

/// Length of the compact config string
pub const COMPACT_LEN: usize = 24;

/// Width used by decoded configs
pub const DEFAULT_SIZE: u32 = 200;

/// Padding fraction used by decoded configs
pub const DEFAULT_PADDING: f64 = 0.08;

/// Largest fixed hue in degrees
pub const MAX_HUE: u16 = 360;

/// How the base hue of an icon is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Hue {
    /// Derive the hue from the identity digest
    #[default]
    FromHash,
    /// Fixed hue in degrees, `0..=360`
    Fixed(u16),
}

impl Hue {
    /// Hue from a signed degree value where any negative number means "from hash"
    pub fn from_degrees(deg: i32) -> Self {
        if deg < 0 {
            Hue::FromHash
        } else {
            Hue::Fixed(deg.min(i32::from(MAX_HUE)) as u16)
        }
    }
}

/// Lightness endpoints of a [`ColorSpec`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lightness {
    /// No lightness configured; resolves to 0
    Undefined,
    /// Same lightness at every position
    Fixed(f64),
    /// Interpolation endpoints
    Range(f64, f64),
}

impl Lightness {
    /// Resolve the lightness for a relative position in `[0, 1]`
    ///
    /// The in-between case is `first + first * position`, not a blend of the
    /// two endpoints. Existing icons depend on it.
    pub fn at(&self, position: f64) -> f64 {
        match *self {
            Lightness::Undefined => 0.0,
            Lightness::Fixed(first) => first,
            Lightness::Range(first, second) => {
                if first == second || position == 0.0 {
                    first
                } else if position >= 1.0 {
                    second
                } else {
                    first + first * position
                }
            }
        }
    }

    /// Endpoints as written by the compact encoding
    fn endpoints(&self) -> (f64, f64) {
        match *self {
            Lightness::Undefined => (0.0, 0.0),
            Lightness::Fixed(l) => (l, l),
            Lightness::Range(a, b) => (a, b),
        }
    }
}

/// Saturation and lightness for one family of theme colors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub saturation: f64,
    pub lightness: Lightness,
}

impl ColorSpec {
    /// Spec with the given saturation and lightness
    pub const fn new(saturation: f64, lightness: Lightness) -> Self {
        Self {
            saturation,
            lightness,
        }
    }

    /// Theme color for `hue` at relative lightness `position`
    pub fn color(&self, hue: f64, position: f64) -> String {
        corrected_hsl(hue, self.saturation, self.lightness.at(position))
    }
}

/// Straight (non-premultiplied) RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Color from its four channels
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (the leading `#` is optional)
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        let invalid = || Error::InvalidColor(s.to_string());
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        match digits.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (i, c) in digits.chars().enumerate() {
                    let v = c.to_digit(16).ok_or_else(invalid)? as u8;
                    channels[i] = v * 17;
                }
                Ok(Self::new(channels[0], channels[1], channels[2], 0xff))
            }
            6 => Ok(Self::new(byte(0)?, byte(2)?, byte(4)?, 0xff)),
            8 => Ok(Self::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(invalid()),
        }
    }

    /// `#rrggbb`, alpha ignored
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Alpha as a fraction in `[0, 1]`
    pub fn opacity(&self) -> f64 {
        f64::from(self.a) / 255.0
    }
}

/// Everything that controls how an identity is drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub hue: Hue,
    pub colored: ColorSpec,
    pub grayscale: ColorSpec,
    pub background: Rgba,
    pub width: u32,
    pub height: u32,
    /// Padding on each side as a fraction of the canvas size
    pub padding: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hue: Hue::FromHash,
            colored: ColorSpec::new(0.5, Lightness::Range(0.4, 0.8)),
            grayscale: ColorSpec::new(0.0, Lightness::Range(0.3, 0.9)),
            background: Rgba::new(0xff, 0xff, 0xff, 0x00),
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            padding: DEFAULT_PADDING,
        }
    }
}

impl Config {
    /// Replace the hue mode
    pub fn with_hue(mut self, hue: Hue) -> Self {
        self.hue = hue;
        self
    }

    /// Replace the background color
    pub fn with_background(mut self, background: Rgba) -> Self {
        self.background = background;
        self
    }

    /// Replace the canvas size in pixels
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Replace the padding fraction applied to each side
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Reject configurations that cannot produce a drawable icon
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::ConfigError(format!(
                "canvas must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.padding.is_finite() || !(0.0..0.5).contains(&self.padding) {
            return Err(Error::ConfigError(format!(
                "padding must be in [0, 0.5), got {}",
                self.padding
            )));
        }
        if let Hue::Fixed(deg) = self.hue {
            if deg > MAX_HUE {
                return Err(Error::ConfigError(format!(
                    "hue must be at most {MAX_HUE} degrees, got {deg}"
                )));
            }
        }
        Ok(())
    }

    /// Decode the compact 24-character form
    ///
    /// Width, height and padding are not part of the encoding and are set to
    /// 200, 200 and 0.08.
    pub fn decode(s: &str) -> Result<Self> {
        if s.len() != COMPACT_LEN {
            return Err(Error::InvalidConfigLength(s.len()));
        }
        if let Some(pos) = s.bytes().position(|b| !b.is_ascii_hexdigit()) {
            let (name, range) = compact_field_at(pos);
            return Err(Error::InvalidConfigField {
                field: name,
                value: s.get(range).unwrap_or(s).to_string(),
            });
        }
        let field = |name: &'static str, range: std::ops::Range<usize>| -> Result<u32> {
            u32::from_str_radix(&s[range.clone()], 16).map_err(|_| Error::InvalidConfigField {
                field: name,
                value: s[range].to_string(),
            })
        };
        // Every field is at most two hex digits, so `as u8` is lossless
        let r = field("background red", 0..2)? as u8;
        let g = field("background green", 2..4)? as u8;
        let b = field("background blue", 4..6)? as u8;
        let a = field("background alpha", 6..8)? as u8;
        let color_saturation = field("colored saturation", 12..14)?;
        let gray_saturation = field("grayscale saturation", 14..16)?;
        let color_lightness1 = field("colored lightness 1", 16..18)?;
        let color_lightness2 = field("colored lightness 2", 18..20)?;
        let gray_lightness1 = field("grayscale lightness 1", 20..22)?;
        let gray_lightness2 = field("grayscale lightness 2", 22..24)?;

        let hue = if s.as_bytes()[8] == b'1' {
            let stored = field("hue", 9..12)?;
            Hue::from_degrees(stored as i32 - 1)
        } else {
            Hue::FromHash
        };

        let percent = |v: u32| f64::from(v) / 100.0;
        Ok(Self {
            hue,
            colored: ColorSpec::new(
                percent(color_saturation),
                Lightness::Range(percent(color_lightness1), percent(color_lightness2)),
            ),
            grayscale: ColorSpec::new(
                percent(gray_saturation),
                Lightness::Range(percent(gray_lightness1), percent(gray_lightness2)),
            ),
            background: Rgba::new(r, g, b, a),
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            padding: DEFAULT_PADDING,
        })
    }

    /// Encode into the compact 24-character form
    ///
    /// Saturation and lightness are stored as whole percentages clamped to
    /// `0..=255`; width, height and padding are dropped. Lightness is always
    /// written as two endpoints, so `Fixed(l)` decodes as `Range(l, l)` and
    /// `Undefined` as `Range(0, 0)`. Both resolve to the same colors.
    pub fn encode(&self) -> String {
        let percent = |v: f64| (v * 100.0).round().clamp(0.0, 255.0) as u8;
        let bg = self.background;
        let hue = match self.hue {
            Hue::FromHash => "0000".to_string(),
            Hue::Fixed(deg) => format!("1{:03x}", deg.min(MAX_HUE) + 1),
        };
        let (cl1, cl2) = self.colored.lightness.endpoints();
        let (gl1, gl2) = self.grayscale.lightness.endpoints();
        format!(
            "{:02x}{:02x}{:02x}{:02x}{}{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            bg.r,
            bg.g,
            bg.b,
            bg.a,
            hue,
            percent(self.colored.saturation),
            percent(self.grayscale.saturation),
            percent(cl1),
            percent(cl2),
            percent(gl1),
            percent(gl2),
        )
    }
}

/// Name and byte range of the compact field covering `offset`
fn compact_field_at(offset: usize) -> (&'static str, std::ops::Range<usize>) {
    match offset {
        0..=1 => ("background red", 0..2),
        2..=3 => ("background green", 2..4),
        4..=5 => ("background blue", 4..6),
        6..=7 => ("background alpha", 6..8),
        8 => ("hue flag", 8..9),
        9..=11 => ("hue", 9..12),
        12..=13 => ("colored saturation", 12..14),
        14..=15 => ("grayscale saturation", 14..16),
        16..=17 => ("colored lightness 1", 16..18),
        18..=19 => ("colored lightness 2", 18..20),
        20..=21 => ("grayscale lightness 1", 20..22),
        _ => ("grayscale lightness 2", 22..24),
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let c = Config::default();
        assert_eq!(c.hue, Hue::FromHash);
        assert_eq!(c.width, 200);
        assert_eq!(c.height, 200);
        assert_eq!(c.padding, 0.08);
        assert_eq!(c.background.a, 0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn decode_reference_string() {
        let c = Config::decode("864444000141320028501e5a").unwrap();
        assert_eq!(c.background, Rgba::new(0x86, 0x44, 0x44, 0x00));
        assert_eq!(c.hue, Hue::FromHash);
        assert_eq!(c.colored.saturation, 0.50);
        assert_eq!(c.grayscale.saturation, 0.0);
        assert_eq!(c.colored.lightness, Lightness::Range(0.40, 0.80));
        assert_eq!(c.grayscale.lightness, Lightness::Range(0.30, 0.90));
        assert_eq!((c.width, c.height, c.padding), (200, 200, 0.08));
    }

    #[test]
    fn decode_fixed_hue_subtracts_one() {
        let c = Config::decode("ffffffff1079320028501e5a").unwrap();
        assert_eq!(c.hue, Hue::Fixed(120));
        let c = Config::decode("ffffffff1fff320028501e5a").unwrap();
        assert_eq!(c.hue, Hue::Fixed(360));
        let c = Config::decode("ffffffff1000320028501e5a").unwrap();
        assert_eq!(c.hue, Hue::FromHash);
    }

    #[test]
    fn decode_rejects_bad_length() {
        assert_eq!(Config::decode(""), Err(Error::InvalidConfigLength(0)));
        assert_eq!(
            Config::decode("864444000141320028501e5a0"),
            Err(Error::InvalidConfigLength(25))
        );
    }

    #[test]
    fn decode_rejects_non_hex() {
        let err = Config::decode("86zz44000141320028501e5a").unwrap_err();
        assert!(matches!(err, Error::InvalidConfigField { field: "background green", .. }));
        let err = Config::decode("8644440001413200285g1e5a").unwrap_err();
        assert!(matches!(err, Error::InvalidConfigField { .. }));
        // Multi-byte characters must not panic on slicing
        assert!(Config::decode("é64444000141320028501e5").is_err());
        assert!(Config::decode("+f4444000141320028501e5a").is_err());
    }

    #[test]
    fn decode_checks_hue_digits_whatever_the_flag() {
        let err = Config::decode("ffffffff0zzz320028501e5a").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidConfigField {
                field: "hue",
                value: "zzz".to_string()
            }
        );
        let err = Config::decode("ffffffffz000320028501e5a").unwrap_err();
        assert!(matches!(err, Error::InvalidConfigField { field: "hue flag", .. }));
        // Any hex digit other than 1 still means "from hash"
        assert_eq!(Config::decode("ffffffff0abc320028501e5a").unwrap().hue, Hue::FromHash);
    }

    #[test]
    fn encode_writes_lightness_as_a_pair() {
        let mut c = Config::default();
        c.colored.lightness = Lightness::Fixed(0.6);
        c.grayscale.lightness = Lightness::Undefined;
        let back = Config::decode(&c.encode()).unwrap();
        assert_eq!(back.colored.lightness, Lightness::Range(0.6, 0.6));
        assert_eq!(back.grayscale.lightness, Lightness::Range(0.0, 0.0));
        for pos in [0.0, 0.5, 1.0] {
            assert_eq!(back.colored.lightness.at(pos), c.colored.lightness.at(pos));
            assert_eq!(back.grayscale.lightness.at(pos), c.grayscale.lightness.at(pos));
        }
    }

    #[test]
    fn encode_round_trips() {
        let c = Config::default();
        assert_eq!(Config::decode(&c.encode()).unwrap(), c);

        let c = Config::default()
            .with_hue(Hue::Fixed(275))
            .with_background(Rgba::new(0x12, 0x34, 0x56, 0x78));
        assert_eq!(c.encode().len(), COMPACT_LEN);
        assert_eq!(c.encode().parse::<Config>().unwrap(), c);
    }

    #[test]
    fn lightness_resolution() {
        assert_eq!(Lightness::Undefined.at(0.5), 0.0);
        assert_eq!(Lightness::Fixed(0.7).at(1.0), 0.7);
        assert_eq!(Lightness::Range(0.4, 0.4).at(1.0), 0.4);
        assert_eq!(Lightness::Range(0.4, 0.8).at(0.0), 0.4);
        assert_eq!(Lightness::Range(0.4, 0.8).at(1.0), 0.8);
        // first + first * position
        assert!((Lightness::Range(0.4, 0.8).at(0.5) - 0.6).abs() < 1e-12);
        assert!((Lightness::Range(0.3, 0.9).at(0.5) - 0.45).abs() < 1e-12);
    }

    #[test]
    fn rgba_from_hex_forms() {
        assert_eq!(Rgba::from_hex("#fff").unwrap(), Rgba::new(255, 255, 255, 255));
        assert_eq!(Rgba::from_hex("102030").unwrap(), Rgba::new(0x10, 0x20, 0x30, 0xff));
        assert_eq!(Rgba::from_hex("#10203040").unwrap(), Rgba::new(0x10, 0x20, 0x30, 0x40));
        assert!(Rgba::from_hex("#12345").is_err());
        assert!(Rgba::from_hex("#gggggg").is_err());
        assert_eq!(Rgba::new(0x10, 0x20, 0x30, 0).hex(), "#102030");
    }

    #[test]
    fn validate_rejects_degenerate_canvas() {
        assert!(Config::default().with_size(0, 10).validate().is_err());
        assert!(Config::default().with_padding(f64::NAN).validate().is_err());
        assert!(Config::default().with_padding(0.5).validate().is_err());
        assert!(Config::default().with_hue(Hue::Fixed(361)).validate().is_err());
    }

    #[test]
    fn config_serde_json() {
        let c = Config::default().with_hue(Hue::Fixed(42));
        let json = serde_json::to_string(&c).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
        let partial: Config = serde_json::from_str(r#"{"width": 64, "height": 64}"#).unwrap();
        assert_eq!(partial.width, 64);
        assert_eq!(partial.colored, Config::default().colored);
    }
}
