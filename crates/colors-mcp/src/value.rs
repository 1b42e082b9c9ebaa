//! Structured color records.
//!
//! A [`ColorValue`] is the shape a color takes in structured tool output: a
//! `mode` tag plus that mode's channels. Channels are `f64`. RGB channels have
//! unit range, HSL saturation and lightness too. A hue that is powerless
//! because the color is achromatic is left out of the record.

use colormath::{Color, ColorSpace, FloatExt};
use serde::Serialize;

use crate::format::js_number;

/// The modes of color records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    Rgb,
    Hsl,
    Oklch,
    Oklab,
    Lab,
    Lch,
    P3,
}

impl Mode {
    /// Get the color space backing this mode.
    pub const fn color_space(&self) -> ColorSpace {
        match self {
            Self::Rgb => ColorSpace::Srgb,
            Self::Hsl => ColorSpace::Hsl,
            Self::Oklch => ColorSpace::Oklch,
            Self::Oklab => ColorSpace::Oklab,
            Self::Lab => ColorSpace::Lab,
            Self::Lch => ColorSpace::Lch,
            Self::P3 => ColorSpace::DisplayP3,
        }
    }

    /// Determine the mode for presenting colors in the given color space.
    ///
    /// Linear RGB and XYZ colors have no record of their own and are
    /// presented as RGB.
    pub const fn for_space(space: ColorSpace) -> Self {
        match space {
            ColorSpace::Hsl => Self::Hsl,
            ColorSpace::Oklch => Self::Oklch,
            ColorSpace::Oklab => Self::Oklab,
            ColorSpace::Lab => Self::Lab,
            ColorSpace::Lch => Self::Lch,
            ColorSpace::DisplayP3 => Self::P3,
            ColorSpace::Srgb
            | ColorSpace::LinearSrgb
            | ColorSpace::LinearDisplayP3
            | ColorSpace::Xyz
            | ColorSpace::XyzD50 => Self::Rgb,
        }
    }
}

/// A color record.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ColorValue {
    Rgb {
        r: f64,
        g: f64,
        b: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        alpha: Option<f64>,
    },
    Hsl {
        #[serde(skip_serializing_if = "Option::is_none")]
        h: Option<f64>,
        s: f64,
        l: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        alpha: Option<f64>,
    },
    Oklch {
        l: f64,
        c: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        h: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        alpha: Option<f64>,
    },
    Oklab {
        l: f64,
        a: f64,
        b: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        alpha: Option<f64>,
    },
    Lab {
        l: f64,
        a: f64,
        b: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        alpha: Option<f64>,
    },
    Lch {
        l: f64,
        c: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        h: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        alpha: Option<f64>,
    },
    P3 {
        r: f64,
        g: f64,
        b: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        alpha: Option<f64>,
    },
}

fn hue(h: f64) -> Option<f64> {
    if h.is_nan() {
        None
    } else {
        Some(h)
    }
}

fn or_zero(n: f64) -> f64 {
    if n.is_nan() {
        0.0
    } else {
        n
    }
}

impl ColorValue {
    /// Convert the color to the given mode and capture it as a record.
    pub fn new(color: &Color, mode: Mode) -> Self {
        let color = color.to(mode.color_space());
        let [c1, c2, c3] = color.coordinates();
        let alpha = color.alpha();

        match mode {
            Mode::Rgb => Self::Rgb {
                r: or_zero(c1),
                g: or_zero(c2),
                b: or_zero(c3),
                alpha,
            },
            Mode::Hsl => Self::Hsl {
                h: hue(c1),
                s: or_zero(c2),
                l: or_zero(c3),
                alpha,
            },
            Mode::Oklch => Self::Oklch {
                l: or_zero(c1),
                c: or_zero(c2),
                h: hue(c3),
                alpha,
            },
            Mode::Oklab => Self::Oklab {
                l: or_zero(c1),
                a: or_zero(c2),
                b: or_zero(c3),
                alpha,
            },
            Mode::Lab => Self::Lab {
                l: or_zero(c1),
                a: or_zero(c2),
                b: or_zero(c3),
                alpha,
            },
            Mode::Lch => Self::Lch {
                l: or_zero(c1),
                c: or_zero(c2),
                h: hue(c3),
                alpha,
            },
            Mode::P3 => Self::P3 {
                r: or_zero(c1),
                g: or_zero(c2),
                b: or_zero(c3),
                alpha,
            },
        }
    }

    /// Get this record's mode.
    pub fn mode(&self) -> Mode {
        match self {
            Self::Rgb { .. } => Mode::Rgb,
            Self::Hsl { .. } => Mode::Hsl,
            Self::Oklch { .. } => Mode::Oklch,
            Self::Oklab { .. } => Mode::Oklab,
            Self::Lab { .. } => Mode::Lab,
            Self::Lch { .. } => Mode::Lch,
            Self::P3 { .. } => Mode::P3,
        }
    }

    /// Get this record's alpha.
    pub fn alpha(&self) -> Option<f64> {
        match *self {
            Self::Rgb { alpha, .. }
            | Self::Hsl { alpha, .. }
            | Self::Oklch { alpha, .. }
            | Self::Oklab { alpha, .. }
            | Self::Lab { alpha, .. }
            | Self::Lch { alpha, .. }
            | Self::P3 { alpha, .. } => alpha,
        }
    }

    /// Round all channels and alpha to the given number of decimal places.
    #[must_use = "method returns a new record and does not mutate original value"]
    pub fn rounded(&self, digits: u8) -> Self {
        let n = |v: f64| v.round_to(digits);
        let o = |v: Option<f64>| v.map(|v| v.round_to(digits));

        match *self {
            Self::Rgb { r, g, b, alpha } => Self::Rgb {
                r: n(r),
                g: n(g),
                b: n(b),
                alpha: o(alpha),
            },
            Self::Hsl { h, s, l, alpha } => Self::Hsl {
                h: o(h),
                s: n(s),
                l: n(l),
                alpha: o(alpha),
            },
            Self::Oklch { l, c, h, alpha } => Self::Oklch {
                l: n(l),
                c: n(c),
                h: o(h),
                alpha: o(alpha),
            },
            Self::Oklab { l, a, b, alpha } => Self::Oklab {
                l: n(l),
                a: n(a),
                b: n(b),
                alpha: o(alpha),
            },
            Self::Lab { l, a, b, alpha } => Self::Lab {
                l: n(l),
                a: n(a),
                b: n(b),
                alpha: o(alpha),
            },
            Self::Lch { l, c, h, alpha } => Self::Lch {
                l: n(l),
                c: n(c),
                h: o(h),
                alpha: o(alpha),
            },
            Self::P3 { r, g, b, alpha } => Self::P3 {
                r: n(r),
                g: n(g),
                b: n(b),
                alpha: o(alpha),
            },
        }
    }

    /// Format this record as a CSS color string.
    ///
    /// RGB and HSL use the legacy comma-separated syntax with channels scaled
    /// to bytes and percentages, respectively, and `rgba()`/`hsla()` for
    /// translucent colors. The other modes use the modern space-separated
    /// syntax with all digits, a missing hue written as zero.
    pub fn css(&self) -> String {
        fn byte(v: f64) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        fn percent(v: f64) -> String {
            js_number((v.clamp(0.0, 1.0) * 100.0).round_to(2))
        }
        fn opacity(alpha: Option<f64>) -> Option<String> {
            alpha
                .filter(|a| *a < 1.0)
                .map(|a| js_number((a.clamp(0.0, 1.0) * 100.0).round() / 100.0))
        }
        fn slash(alpha: Option<f64>) -> String {
            alpha.map_or_else(String::new, |a| format!(" / {}", js_number(a)))
        }

        match *self {
            Self::Rgb { r, g, b, alpha } => {
                let (r, g, b) = (byte(r), byte(g), byte(b));
                match opacity(alpha) {
                    Some(a) => format!("rgba({}, {}, {}, {})", r, g, b, a),
                    None => format!("rgb({}, {}, {})", r, g, b),
                }
            }
            Self::Hsl { h, s, l, alpha } => {
                let h = js_number(h.unwrap_or(0.0).round_to(2));
                let (s, l) = (percent(s), percent(l));
                match opacity(alpha) {
                    Some(a) => format!("hsla({}, {}%, {}%, {})", h, s, l, a),
                    None => format!("hsl({}, {}%, {}%)", h, s, l),
                }
            }
            Self::Oklch { l, c, h, alpha } | Self::Lch { l, c, h, alpha } => format!(
                "{}({} {} {}{})",
                self.mode_name(),
                js_number(l),
                js_number(c),
                js_number(h.unwrap_or(0.0)),
                slash(alpha)
            ),
            Self::Oklab { l, a, b, alpha } | Self::Lab { l, a, b, alpha } => format!(
                "{}({} {} {}{})",
                self.mode_name(),
                js_number(l),
                js_number(a),
                js_number(b),
                slash(alpha)
            ),
            Self::P3 { r, g, b, alpha } => format!(
                "color(display-p3 {} {} {}{})",
                js_number(r),
                js_number(g),
                js_number(b),
                slash(alpha)
            ),
        }
    }

    fn mode_name(&self) -> &'static str {
        match self {
            Self::Rgb { .. } => "rgb",
            Self::Hsl { .. } => "hsl",
            Self::Oklch { .. } => "oklch",
            Self::Oklab { .. } => "oklab",
            Self::Lab { .. } => "lab",
            Self::Lch { .. } => "lch",
            Self::P3 { .. } => "p3",
        }
    }
}

impl std::fmt::Display for ColorValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.css())
    }
}

#[cfg(test)]
mod test {
    use super::{ColorValue, Mode};
    use colormath::{Color, ColorSpace};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn test_records() -> Result<(), colormath::error::ColorFormatError> {
        let red = Color::from_str("#ff0000")?;
        let value = ColorValue::new(&red, Mode::Rgb);
        assert_eq!(
            value,
            ColorValue::Rgb {
                r: 1.0,
                g: 0.0,
                b: 0.0,
                alpha: None
            }
        );
        assert_eq!(value.css(), "rgb(255, 0, 0)");
        assert_eq!(
            serde_json::to_value(&value).ok(),
            Some(json!({"mode": "rgb", "r": 1.0, "g": 0.0, "b": 0.0}))
        );

        let value = ColorValue::new(&red, Mode::Oklch).rounded(3);
        assert_eq!(
            value,
            ColorValue::Oklch {
                l: 0.628,
                c: 0.258,
                h: Some(29.234),
                alpha: None
            }
        );
        assert_eq!(value.css(), "oklch(0.628 0.258 29.234)");

        let value = ColorValue::new(&red, Mode::Hsl);
        assert_eq!(value.css(), "hsl(0, 100%, 50%)");

        Ok(())
    }

    #[test]
    fn test_powerless_hue() {
        let gray = Color::srgb(0.5, 0.5, 0.5);
        let value = ColorValue::new(&gray, Mode::Oklch);
        assert!(matches!(value, ColorValue::Oklch { h: None, .. }));
        assert!(value.css().ends_with(" 0)"));

        let json = serde_json::to_value(&value).unwrap_or_default();
        assert!(json.get("h").is_none());
        assert_eq!(json.get("mode"), Some(&json!("oklch")));
    }

    #[test]
    fn test_alpha() {
        let veil = Color::srgb(0, 0, 0).with_alpha(0.5);
        let value = ColorValue::new(&veil, Mode::Rgb);
        assert_eq!(value.alpha(), Some(0.5));
        assert_eq!(value.css(), "rgba(0, 0, 0, 0.5)");

        let value = ColorValue::new(&veil, Mode::Oklab).rounded(2);
        assert_eq!(value.css(), "oklab(0 0 0 / 0.5)");

        let opaque = Color::srgb(0, 0, 0).with_alpha(1.0);
        assert_eq!(ColorValue::new(&opaque, Mode::Rgb).css(), "rgb(0, 0, 0)");
    }

    #[test]
    fn test_modes() {
        assert_eq!(Mode::for_space(ColorSpace::DisplayP3), Mode::P3);
        assert_eq!(Mode::for_space(ColorSpace::XyzD50), Mode::Rgb);

        let green = Color::p3(0, 1, 0);
        let value = ColorValue::new(&green, Mode::P3);
        assert_eq!(value.mode(), Mode::P3);
        assert_eq!(value.css(), "color(display-p3 0 1 0)");
    }
}
