//! The boundary to the color math.
//!
//! Tool handlers never touch color science directly. They go through the
//! [`ColorEngine`] trait, whose reference implementation [`StandardEngine`]
//! delegates to the `colormath` crate.

use colormath::{Color, ColorSpace, Gradient, HueInterpolation};
use serde::{Deserialize, Serialize};

use crate::composite::blend;
use crate::contrast::ratio;
use crate::error::ToolError;
use crate::value::{ColorValue, Mode};

/// The target color spaces of conversion, mixing, and scales.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Space {
    Hex,
    Rgb,
    Hsl,
    Oklch,
    Oklab,
    P3,
    Lab,
    Lch,
}

impl Space {
    /// All supported spaces.
    pub const SUPPORTED: [Space; 8] = [
        Self::Hex,
        Self::Rgb,
        Self::Hsl,
        Self::Oklch,
        Self::Oklab,
        Self::P3,
        Self::Lab,
        Self::Lch,
    ];

    /// The names of all supported spaces.
    pub const SUPPORTED_NAMES: [&'static str; 8] =
        ["hex", "rgb", "hsl", "oklch", "oklab", "p3", "lab", "lch"];

    /// Get this space's name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Oklch => "oklch",
            Self::Oklab => "oklab",
            Self::P3 => "p3",
            Self::Lab => "lab",
            Self::Lch => "lch",
        }
    }

    /// Get the record mode for this space. Hex colors are interpolated and
    /// recorded as RGB.
    pub const fn mode(&self) -> Mode {
        match self {
            Self::Hex | Self::Rgb => Mode::Rgb,
            Self::Hsl => Mode::Hsl,
            Self::Oklch => Mode::Oklch,
            Self::Oklab => Mode::Oklab,
            Self::P3 => Mode::P3,
            Self::Lab => Mode::Lab,
            Self::Lch => Mode::Lch,
        }
    }

    /// Get the color space for computing in this space.
    pub const fn color_space(&self) -> ColorSpace {
        self.mode().color_space()
    }
}

impl std::str::FromStr for Space {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::SUPPORTED
            .into_iter()
            .find(|space| space.name() == name)
            .ok_or_else(|| ToolError::UnsupportedSpace(s.to_owned()))
    }
}

impl std::fmt::Display for Space {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The result of a conversion.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Converted {
    /// A hashed hexadecimal color.
    Hex(String),
    /// A color record.
    Value(ColorValue),
}

impl Converted {
    /// Format the conversion result as a string.
    pub fn css(&self) -> String {
        match self {
            Self::Hex(hex) => hex.clone(),
            Self::Value(value) => value.css(),
        }
    }
}

/// The coordinate of a color adjustment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Lightness,
    Chroma,
    Hue,
}

impl Channel {
    /// Get this channel's name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Lightness => "lightness",
            Self::Chroma => "chroma",
            Self::Hue => "hue",
        }
    }
}

/// An adjustment to a color's lightness, chroma, or hue in Oklch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Adjustment {
    pub channel: Channel,
    pub amount: f64,
    /// Scale by `1 + amount` instead of adding `amount`.
    pub relative: bool,
}

/// A color difference metric.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    /// Delta E OK, the Euclidean distance in Oklab.
    #[default]
    DeltaE,
    /// The WCAG contrast ratio after blending the first color over the second.
    Contrast,
}

impl Metric {
    /// Get this metric's name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::DeltaE => "deltaE",
            Self::Contrast => "contrast",
        }
    }
}

/// The color operations exposed as tools.
pub trait ColorEngine {
    /// Parse the color string. The field names the argument for error
    /// messages.
    fn parse(&self, field: &str, input: &str) -> Result<Color, ToolError>;

    /// Convert the color to the space, rounding records to the given number
    /// of decimal places.
    fn convert(&self, color: &Color, space: Space, precision: u8) -> Converted;

    /// Adjust the color in Oklch.
    fn adjust(&self, color: &Color, adjustment: Adjustment) -> Color;

    /// Mix the two colors in the space. A ratio of 0 yields the first color,
    /// a ratio of 1 the second.
    fn mix(&self, color1: &Color, color2: &Color, ratio: f64, space: Space) -> Color;

    /// Sample a scale through the colors with the given number of evenly
    /// spaced steps. A scale needs at least two colors.
    fn scale(
        &self,
        colors: &[Color],
        steps: usize,
        space: Space,
    ) -> Result<Vec<Color>, ToolError>;

    /// Format the color as a hashed hexadecimal string, clipping to sRGB.
    fn hex(&self, color: &Color) -> String;

    /// Measure the difference between the two colors.
    fn difference(&self, color1: &Color, color2: &Color, metric: Metric) -> f64;
}

/// The color engine backed by `colormath`.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardEngine;

impl ColorEngine for StandardEngine {
    fn parse(&self, field: &str, input: &str) -> Result<Color, ToolError> {
        input
            .parse::<Color>()
            .map_err(|source| ToolError::InvalidColor {
                field: field.to_owned(),
                value: input.to_owned(),
                source,
            })
    }

    fn convert(&self, color: &Color, space: Space, precision: u8) -> Converted {
        match space {
            Space::Hex => Converted::Hex(self.hex(color)),
            _ => Converted::Value(ColorValue::new(color, space.mode()).rounded(precision)),
        }
    }

    fn adjust(&self, color: &Color, adjustment: Adjustment) -> Color {
        let oklch = color.to(ColorSpace::Oklch);
        let mut coordinates = oklch.coordinates();
        let index = match adjustment.channel {
            Channel::Lightness => 0,
            Channel::Chroma => 1,
            Channel::Hue => 2,
        };

        // Missing and powerless components count as zero.
        let value = coordinates[index];
        let value = if value.is_nan() { 0.0 } else { value };
        coordinates[index] = if adjustment.relative {
            value * (1.0 + adjustment.amount)
        } else {
            value + adjustment.amount
        };

        Color::new(ColorSpace::Oklch, coordinates).with_optional_alpha(oklch.alpha())
    }

    fn mix(&self, color1: &Color, color2: &Color, ratio: f64, space: Space) -> Color {
        color1
            .interpolate(color2, space.color_space(), HueInterpolation::Shorter)
            .at(ratio)
    }

    fn scale(
        &self,
        colors: &[Color],
        steps: usize,
        space: Space,
    ) -> Result<Vec<Color>, ToolError> {
        Gradient::new(colors, space.color_space(), HueInterpolation::Shorter)
            .map(|gradient| gradient.samples(steps))
            .ok_or_else(|| {
                ToolError::invalid_argument(
                    "colors",
                    format!("should have at least 2 colors but has {}", colors.len()),
                )
            })
    }

    fn hex(&self, color: &Color) -> String {
        color.to(ColorSpace::Srgb).clip().to_hex_format()
    }

    fn difference(&self, color1: &Color, color2: &Color, metric: Metric) -> f64 {
        match metric {
            Metric::DeltaE => color1.distance(color2),
            Metric::Contrast => ratio(&blend(color1, color2), color2),
        }
    }
}
