//! Color strings, themes, and the dark-mode color transform.
//!
//! Colors travel through the range algebra as opaque strings and are only
//! compared for equality. This module gives them meaning where it matters:
//!
//! - **Parsing**: [`Rgba::from_hex`] understands `#RGB`, `#RRGGBB` and
//!   `#RRGGBBAA` (the leading `#` is optional)
//! - **Theming**: [`Theme`] selects whether projected colors are passed
//!   through a dark-mode transform
//! - **Dark mode**: [`apply_dark_mode_filter`] is the default transform, the
//!   same `invert(93%) hue-rotate(180deg)` filter a canvas would apply
//!
//! # Examples
//!
//! ```
//! use colorspan::color::{Theme, apply_dark_mode_filter};
//!
//! assert_eq!(apply_dark_mode_filter("#000000"), "#ededed");
//! assert_eq!(apply_dark_mode_filter("transparent"), "transparent");
//! assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
//! ```

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Amount used by the dark-mode `invert()` step.
const DARK_MODE_INVERT: f32 = 0.93;

/// Color theme a text element is rendered under.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Check if this theme needs the dark-mode transform.
    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Apply `transform` to `color` when dark, otherwise return it as is.
    #[must_use]
    pub fn adjust<F>(self, color: &str, transform: F) -> String
    where
        F: Fn(&str) -> String,
    {
        match self {
            Self::Light => color.to_string(),
            Self::Dark => transform(color),
        }
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("light") {
            Ok(Self::Light)
        } else if s.eq_ignore_ascii_case("dark") {
            Ok(Self::Dark)
        } else {
            Err(Error::InvalidTheme(s.to_string()))
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Dark => f.write_str("dark"),
        }
    }
}

/// RGBA color with f32 components in range [0.0, 1.0].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// Opaque white.
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Create a new RGBA color from f32 components.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from u8 RGBA components.
    #[must_use]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: f32::from(a) / 255.0,
        }
    }

    /// Parse a hex color string (e.g., "#FF0000" or "FF0000").
    ///
    /// Supports 3-char (#RGB), 6-char (#RRGGBB), and 8-char (#RRGGBBAA) formats.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();

        match hex.len() {
            3 => {
                // #RGB -> #RRGGBB
                let r = channel(0..1)?;
                let g = channel(1..2)?;
                let b = channel(2..3)?;
                Some(Self::from_rgba_u8(r * 17, g * 17, b * 17, 255))
            }
            6 => Some(Self::from_rgba_u8(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                255,
            )),
            8 => Some(Self::from_rgba_u8(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => None,
        }
    }

    /// Parse a hex color, reporting malformed input as an error.
    pub fn parse(color: &str) -> Result<Self> {
        Self::from_hex(color).ok_or_else(|| Error::InvalidColor(color.to_string()))
    }

    /// Convert to u8 RGBA tuple, clamping values to [0, 255].
    #[must_use]
    pub fn to_rgba_u8(self) -> (u8, u8, u8, u8) {
        let to_u8 = |value: f32| (value * 255.0).round().clamp(0.0, 255.0) as u8;
        (to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a))
    }

    /// CSS `invert(amount)`: moves each channel toward its complement.
    #[must_use]
    pub fn invert(self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        let inv = |c: f32| (1.0 - c) * amount + c * (1.0 - amount);
        Self {
            r: inv(self.r),
            g: inv(self.g),
            b: inv(self.b),
            a: self.a,
        }
    }

    /// CSS `hue-rotate(degrees)` using the filter-effects luminance matrix.
    #[must_use]
    pub fn hue_rotate(self, degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let m = [
            [
                0.213 + cos * 0.787 - sin * 0.213,
                0.715 - cos * 0.715 - sin * 0.715,
                0.072 - cos * 0.072 + sin * 0.928,
            ],
            [
                0.213 - cos * 0.213 + sin * 0.143,
                0.715 + cos * 0.285 + sin * 0.140,
                0.072 - cos * 0.072 - sin * 0.283,
            ],
            [
                0.213 - cos * 0.213 - sin * 0.787,
                0.715 - cos * 0.715 + sin * 0.715,
                0.072 + cos * 0.928 + sin * 0.072,
            ],
        ];
        let row = |r: [f32; 3]| (r[0] * self.r + r[1] * self.g + r[2] * self.b).clamp(0.0, 1.0);
        Self {
            r: row(m[0]),
            g: row(m[1]),
            b: row(m[2]),
            a: self.a,
        }
    }
}

impl fmt::Display for Rgba {
    #[allow(clippy::many_single_char_names)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b, a) = self.to_rgba_u8();
        if a == 255 {
            write!(f, "#{r:02x}{g:02x}{b:02x}")
        } else {
            write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

/// Default dark-mode transform for color strings.
///
/// Hex colors are run through `invert(93%) hue-rotate(180deg)`, which keeps
/// hues recognizable while flipping lightness. Anything else (named colors,
/// `transparent`) is returned unchanged.
#[must_use]
pub fn apply_dark_mode_filter(color: &str) -> String {
    match Rgba::from_hex(color) {
        Some(rgba) => rgba.invert(DARK_MODE_INVERT).hue_rotate(180.0).to_string(),
        None => color.to_string(),
    }
}
