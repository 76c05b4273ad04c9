//! Colors and path styles attached to overlays.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{MapUtilError, Result};

/// 8-bit RGBA color of an overlay stroke or fill.
///
/// Serialized as a `#RRGGBBAA` string. Deserialization also takes `#RRGGBB` and fails on anything else.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    /// `#AAAAAA`, used for region frames.
    pub const GRAY: Color = Color::rgba(170, 170, 170, 255);
    /// Pure red.
    pub const RED: Color = Color::rgba(255, 0, 0, 255);
    /// Pure green.
    pub const GREEN: Color = Color::rgba(0, 255, 0, 255);
    /// Pure blue, used by [`PathStyle::default`].
    pub const BLUE: Color = Color::rgba(0, 0, 255, 255);
    /// `#800080`, used for route polylines.
    pub const PURPLE: Color = Color::rgba(128, 0, 128, 255);

    /// Color from red, green, blue and alpha channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// `#RRGGBBAA` form with upper case digits.
    pub fn to_hex(&self) -> String {
        let Self { r, g, b, a } = self;
        format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
    }

    /// Parses `#RRGGBB` (opaque) or `#RRGGBBAA`. Returns `None` for anything else.
    pub fn try_from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if !matches!(digits.len(), 6 | 8) {
            return None;
        }

        let channel = |at: usize| {
            digits
                .get(at..at + 2)
                .and_then(|s| u8::from_str_radix(s, 16).ok())
        };
        let a = if digits.len() == 8 { channel(6)? } else { 255 };

        Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }

    /// Copy of the color with the alpha channel replaced.
    pub fn with_alpha(&self, a: u8) -> Self {
        Self { a, ..*self }
    }

    /// Copy of the color with the alpha channel set from an opacity in `0.0..=1.0`. Out of range values are
    /// clamped, NaN means opaque.
    pub fn with_opacity(&self, opacity: f64) -> Self {
        let opacity = if opacity.is_nan() { 1.0 } else { opacity };
        self.with_alpha((opacity.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    /// Returns true if the alpha channel is zero.
    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Red channel.
    pub fn r(&self) -> u8 {
        self.r
    }

    /// Green channel.
    pub fn g(&self) -> u8 {
        self.g
    }

    /// Blue channel.
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Alpha channel.
    pub fn a(&self) -> u8 {
        self.a
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for Color {
    type Err = MapUtilError;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_from_hex(s).ok_or_else(|| MapUtilError::InvalidColor(s.to_owned()))
    }
}

impl TryFrom<String> for Color {
    type Error = MapUtilError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// How the outline and the inner area of an overlay are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathStyle {
    /// Width of the outline in points.
    pub line_width: f64,
    /// Color of the outline.
    pub stroke_color: Color,
    /// Color of the inner area. Ignored for polylines.
    pub fill_color: Color,
}

impl PathStyle {
    /// Creates a new instance.
    pub fn new(line_width: f64, stroke_color: Color, fill_color: Color) -> Self {
        Self {
            line_width,
            stroke_color,
            fill_color,
        }
    }

    /// Style with an opaque outline and a fill of the same color with the given opacity.
    pub fn with_color_alpha(line_width: f64, color: Color, alpha: f64) -> Self {
        Self::new(line_width, color, color.with_opacity(alpha))
    }

    /// Single color style, meant for polylines.
    pub fn solid(line_width: f64, color: Color) -> Self {
        Self::new(line_width, color, color)
    }

    /// Creates a new instance from a copy of the current, but with the given line width.
    pub fn with_line_width(&self, line_width: f64) -> Self {
        Self {
            line_width,
            ..*self
        }
    }

    /// Returns true if nothing would be drawn with this style.
    pub fn is_invisible(&self) -> bool {
        (self.stroke_color.is_transparent() || self.line_width <= 0.0)
            && self.fill_color.is_transparent()
    }

    /// Style with random opaque colors, a line width in `1.0..=4.0` and a translucent fill.
    #[cfg(feature = "rand")]
    pub fn random(rng: &mut impl rand::Rng) -> Self {
        let color = Color::rgba(rng.random(), rng.random(), rng.random(), 255);
        let line_width = rng.random_range(1.0..=4.0);
        Self::with_color_alpha(line_width, color, 0.25)
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::with_color_alpha(2.0, Color::BLUE, 0.25)
    }
}
