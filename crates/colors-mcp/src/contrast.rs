//! WCAG 2 contrast.
//!
//! [`luminance`] and [`ratio`] implement the relative luminance and contrast
//! ratio of [WCAG 2.x](https://www.w3.org/TR/WCAG22/#dfn-contrast-ratio).
//! [`evaluate`] classifies a ratio against the success criteria for text
//! (1.4.3 and 1.4.6) and non-text content (1.4.11), and [`check`] runs the
//! complete pipeline, compositing translucent colors first.

use colormath::{Color, ColorSpace, FloatExt};
use serde::Serialize;

use crate::composite::composite;

/// The minimum ratio for regular text at level AA.
pub const AA_REGULAR: f64 = 4.5;
/// The minimum ratio for large text at level AA.
pub const AA_LARGE: f64 = 3.0;
/// The minimum ratio for regular text at level AAA.
pub const AAA_REGULAR: f64 = 7.0;
/// The minimum ratio for large text at level AAA.
pub const AAA_LARGE: f64 = 4.5;
/// The minimum ratio for user interface components and graphics.
pub const NON_TEXT: f64 = 3.0;

fn linearize(value: f64) -> f64 {
    let magnitude = value.abs();
    if magnitude <= 0.03928 {
        value / 12.92
    } else {
        ((magnitude + 0.055) / 1.055).powf(2.4).copysign(value)
    }
}

/// Compute the relative luminance of the given color.
///
/// The color is converted to sRGB without gamut mapping and its alpha is
/// ignored.
pub fn luminance(color: &Color) -> f64 {
    let [r, g, b] = color.to(ColorSpace::Srgb).coordinates();
    0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
}

/// Compute the contrast ratio between the two colors.
///
/// The ratio ranges from 1 to 21 for in-gamut colors and is symmetric.
pub fn ratio(color1: &Color, color2: &Color) -> f64 {
    let l1 = luminance(color1);
    let l2 = luminance(color2);
    let (lighter, darker) = if l1 < l2 { (l2, l1) } else { (l1, l2) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Pass/fail results for regular and large text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TextLevels {
    pub regular: bool,
    pub large: bool,
}

/// The result of a contrast check.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastResult {
    /// The contrast ratio, rounded to two decimal places.
    pub ratio: f64,
    pub aa: TextLevels,
    pub aaa: TextLevels,
    pub non_text: bool,
}

/// Classify the contrast ratio.
///
/// Thresholds apply to the unrounded ratio, so a ratio of 4.499 fails AA for
/// regular text even though it displays as 4.5.
pub fn evaluate(ratio: f64) -> ContrastResult {
    ContrastResult {
        ratio: ratio.round_to(2),
        aa: TextLevels {
            regular: AA_REGULAR <= ratio,
            large: AA_LARGE <= ratio,
        },
        aaa: TextLevels {
            regular: AAA_REGULAR <= ratio,
            large: AAA_LARGE <= ratio,
        },
        non_text: NON_TEXT <= ratio,
    }
}

/// Check the contrast of a foreground on a background over a base.
///
/// This function composites the three colors into an opaque pair, computes
/// their ratio, and classifies it.
pub fn check(foreground: &Color, background: &Color, base: &Color) -> ContrastResult {
    let pair = composite(foreground, background, base);
    evaluate(ratio(&pair.foreground, &pair.background))
}

#[cfg(test)]
mod test {
    use super::{check, evaluate, luminance, ratio, ContrastResult, TextLevels};
    use colormath::Color;
    use std::str::FromStr;

    fn color(s: &str) -> Color {
        Color::from_str(s).unwrap_or_default()
    }

    #[test]
    fn test_luminance() {
        assert_eq!(luminance(&color("#000")), 0.0);
        assert!((luminance(&color("#fff")) - 1.0).abs() < 1e-12);
        // Below the linearization threshold.
        assert!((luminance(&Color::srgb(0.03, 0.03, 0.03)) - 0.03 / 12.92).abs() < 1e-15);
    }

    #[test]
    fn test_extremes() {
        let white = color("white");
        let black = color("black");

        assert_eq!(
            check(&black, &white, &white),
            ContrastResult {
                ratio: 21.0,
                aa: TextLevels {
                    regular: true,
                    large: true
                },
                aaa: TextLevels {
                    regular: true,
                    large: true
                },
                non_text: true,
            }
        );

        assert_eq!(
            check(&white, &white, &white),
            ContrastResult {
                ratio: 1.0,
                aa: TextLevels {
                    regular: false,
                    large: false
                },
                aaa: TextLevels {
                    regular: false,
                    large: false
                },
                non_text: false,
            }
        );
    }

    #[test]
    fn test_translucent() {
        let white = color("#ffffff");
        let black = color("#000000");

        let result = check(&color("rgba(0,0,0,0.5)"), &white, &white);
        assert_eq!(result.ratio, 3.98);
        assert!(!result.aa.regular);
        assert!(result.aa.large);
        assert!(result.non_text);

        let result = check(&black, &color("rgba(255,255,255,0.5)"), &black);
        assert_eq!(result.ratio, 5.28);
        assert!(result.aa.regular);
        assert!(!result.aaa.regular);

        let result = check(&color("#1234567f").with_alpha(0.0), &color("teal"), &white);
        assert_eq!(result.ratio, 1.0);
    }

    #[test]
    fn test_symmetry() {
        let pairs = [("#336699", "#ffcc00"), ("red", "green"), ("navy", "#eee")];
        for (a, b) in pairs {
            let (a, b) = (color(a), color(b));
            assert_eq!(ratio(&a, &b), ratio(&b, &a));
        }
    }

    #[test]
    fn test_unrounded_thresholds() {
        let result = evaluate(4.499);
        assert_eq!(result.ratio, 4.5);
        assert!(!result.aa.regular);
        assert!(!result.aaa.large);
        assert!(result.aa.large);
    }
}
