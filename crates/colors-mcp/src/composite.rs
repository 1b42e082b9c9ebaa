//! Alpha compositing.
//!
//! Contrast is only defined between opaque colors. Translucent colors are
//! flattened first, with the "over" operator in gamma-encoded sRGB:
//!
//! ```text
//! result = α·top + (1 - α)·bottom
//! ```
//!
//! Alpha is not range-checked here. Colors parsed from strings always have
//! alpha in `0..=1`, but a color built in code may not, and such a color
//! blends with weights outside the unit range.

use colormath::{Color, ColorSpace};

/// Blend the top color over the bottom color.
///
/// If the top color has no alpha or alpha of at least one, the result is the
/// top color in sRGB with alpha untouched. Otherwise, the result is the
/// per-channel blend of both colors in sRGB with an alpha of one. The result
/// is never gamut mapped.
pub fn blend(top: &Color, bottom: &Color) -> Color {
    let alpha = top.opacity();
    let top = top.to(ColorSpace::Srgb);
    if 1.0 <= alpha {
        return top;
    }

    let [t1, t2, t3] = top.coordinates();
    let [b1, b2, b3] = bottom.to(ColorSpace::Srgb).coordinates();
    let mix = |t: f64, b: f64| alpha * t + (1.0 - alpha) * b;

    Color::srgb(mix(t1, b1), mix(t2, b2), mix(t3, b3)).with_alpha(1.0)
}

/// The opaque pair of colors that a contrast check compares.
#[derive(Clone, Debug, PartialEq)]
pub struct Composite {
    /// The foreground after blending over the effective background.
    pub foreground: Color,
    /// The background after blending over the base.
    pub background: Color,
}

/// Flatten a foreground, background, and base into an opaque pair.
///
/// The background is blended over the base first and the foreground is then
/// blended over the resulting effective background. The arguments are left
/// untouched.
pub fn composite(foreground: &Color, background: &Color, base: &Color) -> Composite {
    let background = blend(background, base);
    let foreground = blend(foreground, &background);
    Composite {
        foreground,
        background,
    }
}

#[cfg(test)]
mod test {
    use super::{blend, composite};
    use colormath::{Color, ColorSpace};

    #[test]
    fn test_blend() {
        let red = Color::srgb(1, 0, 0);
        let blue = Color::srgb(0, 0, 1);

        assert_eq!(blend(&red, &blue), red);
        assert_eq!(blend(&red.with_alpha(1.0), &blue), red.with_alpha(1.0));
        assert_eq!(
            blend(&red.with_alpha(0.5), &blue),
            Color::srgb(0.5, 0, 0.5).with_alpha(1.0)
        );
        assert_eq!(blend(&red.with_alpha(0.0), &blue), blue.with_alpha(1.0));
    }

    #[test]
    fn test_blend_other_spaces() {
        let white = Color::oklab(1, 0, 0);
        let black = Color::new(ColorSpace::Hsl, [0.0, 0.0, 0.0]);
        let gray = blend(&white.with_alpha(0.25), &black);
        assert_eq!(gray.space(), ColorSpace::Srgb);
        for c in gray.coordinates() {
            assert!((c - 0.25).abs() < 1e-9);
        }
    }

    #[test]
    fn test_out_of_range_alpha() {
        let white = Color::srgb(1, 1, 1);
        let black = Color::srgb(0, 0, 0);

        // Treated as opaque.
        assert_eq!(blend(&white.with_alpha(1.5), &black), white.with_alpha(1.5));
        // Extrapolates past the bottom color.
        let result = blend(&white.with_alpha(-0.5), &black);
        assert_eq!(result, Color::srgb(-0.5, -0.5, -0.5).with_alpha(1.0));
    }

    #[test]
    fn test_composite() {
        let black = Color::srgb(0, 0, 0);
        let white = Color::srgb(1, 1, 1);

        let pair = composite(&black, &white.with_alpha(0.5), &black);
        assert_eq!(pair.background, Color::srgb(0.5, 0.5, 0.5).with_alpha(1.0));
        assert_eq!(pair.foreground, black);

        let pair = composite(&black.with_alpha(0.0), &white.with_alpha(0.5), &black);
        assert_eq!(pair.foreground, pair.background);
    }
}
