use crate::core::{
    clip, convert, delta_e_ok, format, from_24bit, in_gamut, interpolate, normalize, parse,
    prepare_to_interpolate, to_24bit, to_eq_bits, to_eq_coordinates, to_gamut, ColorSpace,
    HueInterpolation,
};

use crate::Float;

/// A high-resolution color object.
///
/// Every color object has a [color space](ColorSpace), three coordinates, and
/// an optional alpha. A color without alpha is opaque.
///
/// # Color Coordinates
///
/// For RGB color spaces, the coordinates of in-gamut colors have unit range.
/// HSL's saturation and lightness also have unit range, with the hue in
/// degrees. For the other color spaces, there are no gamut bounds.
///
/// However, the coordinates of colors in Oklab et al. still need to meet the
/// following constraints to be well-formed. The lightness must be `0.0..=1.0`
/// (Oklab) or `0.0..=100.0` (CIELAB) and chroma must be `0.0..`. The hue may
/// have any magnitude, though `0..360` are preferred.
///
/// A coordinate may be not-a-number either because it is a [powerless
/// component](https://www.w3.org/TR/css-color-4/#powerless), such as the hue in
/// Oklch when chroma is zero, or a [missing
/// component](https://www.w3.org/TR/css-color-4/#missing), i.e., a component
/// written as `none`, notably for interpolation.
///
/// ## Normalization
///
/// While coordinates may be not-a-number, that representation of powerless or
/// missing components can easily render any computation on colors useless. For
/// that reason, this class automatically normalizes colors with
/// [`Color::normalize`] if necessary. Normalization replaces not-a-numbers with
/// zero and also ensures that lightness and chroma have meaningful quantities.
///
/// ## Equality Testing and Hashing
///
/// Both operations normalize coordinates, scale hues to unit range after
/// removing full rotations, round to 12 digits after the decimal, and replace
/// negative zeros before comparing or hashing bit strings. Alpha is compared
/// the same way, with a missing alpha being different from an alpha of one.
#[derive(Clone)]
pub struct Color {
    space: ColorSpace,
    coordinates: [Float; 3],
    alpha: Option<Float>,
}

impl Color {
    /// Instantiate a new, opaque color with the given color space and
    /// coordinates.
    ///
    /// ```
    /// # use colormath::{Color, ColorSpace};
    /// let pink = Color::new(ColorSpace::Oklch, [0.7, 0.22, 3.0]);
    /// assert_eq!(pink.as_ref(), &[0.7_f64, 0.22_f64, 3.0_f64]);
    /// assert_eq!(pink.alpha(), None);
    /// ```
    #[inline]
    pub const fn new(space: ColorSpace, coordinates: [Float; 3]) -> Self {
        Self {
            space,
            coordinates,
            alpha: None,
        }
    }

    /// Create a copy of this color with the given alpha.
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_alpha(&self, alpha: impl Into<Float>) -> Self {
        Self {
            alpha: Some(alpha.into()),
            ..self.clone()
        }
    }

    /// Create a copy of this color with the given, possibly missing alpha.
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_optional_alpha(&self, alpha: Option<Float>) -> Self {
        Self {
            alpha,
            ..self.clone()
        }
    }

    /// Instantiate a new sRGB color with the given red, green, and blue
    /// coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// # use colormath::{Color, ColorSpace};
    /// let fire_brick = Color::srgb(177.0/255.0, 31.0/255.0, 36.0/255.0);
    /// assert_eq!(fire_brick.space(), ColorSpace::Srgb);
    /// ```
    pub fn srgb(r: impl Into<Float>, g: impl Into<Float>, b: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Srgb, [r.into(), g.into(), b.into()])
    }

    /// Instantiate a new Display P3 color with the given red, green, and blue
    /// coordinates.
    pub fn p3(r: impl Into<Float>, g: impl Into<Float>, b: impl Into<Float>) -> Self {
        Self::new(ColorSpace::DisplayP3, [r.into(), g.into(), b.into()])
    }

    /// Instantiate a new Oklab color with the given lightness L, a, and b
    /// coordinates.
    pub fn oklab(l: impl Into<Float>, a: impl Into<Float>, b: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Oklab, [l.into(), a.into(), b.into()])
    }

    /// Instantiate a new Oklch color with the given lightness L, chroma C, and
    /// hue h coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// # use colormath::{Color, ColorSpace};
    /// let deep_purple = Color::oklch(0.5, 0.25, 308);
    /// assert_eq!(deep_purple.space(), ColorSpace::Oklch);
    /// ```
    pub fn oklch(l: impl Into<Float>, c: impl Into<Float>, h: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Oklch, [l.into(), c.into(), h.into()])
    }

    /// Instantiate a new sRGB color with the given 24-bit RGB coordinates.
    ///
    /// ```
    /// # use colormath::{Color, ColorSpace};
    /// let blue = Color::from_24bit(0x31, 0x78, 0xea);
    /// assert_eq!(blue.to_hex_format(), "#3178ea");
    /// ```
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self::new(ColorSpace::Srgb, from_24bit(r, g, b))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Access the color space.
    #[inline]
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// Access the coordinates.
    #[inline]
    pub fn coordinates(&self) -> [Float; 3] {
        self.coordinates
    }

    /// Access the alpha, if any.
    #[inline]
    pub fn alpha(&self) -> Option<Float> {
        self.alpha
    }

    /// Determine the opacity, which is the alpha or 1 if alpha is missing.
    #[inline]
    pub fn opacity(&self) -> Float {
        match self.alpha {
            Some(alpha) if !alpha.is_nan() => alpha,
            _ => 1.0,
        }
    }

    /// Normalize this color.
    ///
    /// This method replaces not-a-number coordinates with zero, zeroes chroma
    /// (or saturation) when the hue is not-a-number, clamps lightness, and
    /// ensures that chroma is not negative.
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn normalize(&self) -> Self {
        Self {
            space: self.space,
            coordinates: normalize(self.space, &self.coordinates),
            alpha: self.alpha,
        }
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert this color to the target color space.
    ///
    /// Conversions between color spaces on the same branch of the conversion
    /// tree take shortcuts, e.g., from HSL to sRGB or from CIELCh to CIELAB.
    /// All others go through XYZ D65. Alpha carries over unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use colormath::{Color, ColorSpace};
    /// let gray = Color::from_24bit(0x6c, 0x74, 0x79);
    /// assert_eq!(gray, Color::new(
    ///     ColorSpace::Srgb,
    ///     [108.0/255.0, 116.0/255.0, 121.0/255.0]
    /// ));
    /// let same_gray = gray.to(ColorSpace::Oklch);
    /// assert_eq!(same_gray, Color::new(
    ///     ColorSpace::Oklch,
    ///     [0.5538576724428724, 0.012421260273578996, 234.98550533688342]
    /// ));
    /// ```
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to(&self, target: ColorSpace) -> Self {
        Self {
            space: target,
            coordinates: convert(self.space, target, &self.coordinates),
            alpha: self.alpha,
        }
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Determine whether this color is in-gamut for its color space.
    ///
    /// ```
    /// # use colormath::{Color, ColorSpace};
    /// let red = Color::srgb(1.0, 0.0, 0.0);
    /// assert!(red.in_gamut());
    ///
    /// let green = Color::p3(0.0, 1.0, 0.0);
    /// assert!(!green.to(ColorSpace::Srgb).in_gamut());
    /// ```
    #[inline]
    pub fn in_gamut(&self) -> bool {
        in_gamut(self.space, &self.coordinates)
    }

    /// Clip this color to the gamut of its color space.
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn clip(&self) -> Self {
        Self {
            space: self.space,
            coordinates: clip(self.space, &self.coordinates),
            alpha: self.alpha,
        }
    }

    /// Map this color into the gamut of its color space.
    ///
    /// This method uses the [CSS Color 4
    /// algorithm](https://drafts.csswg.org/css-color/#css-gamut-mapping) for
    /// gamut mapping. It performs a binary search in Oklch for a color with
    /// less chroma than the original (but the same lightness and hue), whose
    /// clipped version is within the *just noticeable difference* and in gamut
    /// for the current color space. That clipped color is the result.
    ///
    /// # Examples
    ///
    /// ```
    /// # use colormath::{Color, ColorSpace};
    /// let too_green = Color::new(ColorSpace::DisplayP3, [0.0, 1.0, 0.0])
    ///     .to(ColorSpace::Srgb);
    /// assert!(!too_green.in_gamut());
    ///
    /// let green = too_green.to_gamut();
    /// assert!(green.in_gamut());
    /// assert_eq!(green, Color::srgb(0.0, 0.985763710771033, 0.1597424439734393));
    /// ```
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to_gamut(&self) -> Self {
        Self {
            space: self.space,
            coordinates: to_gamut(self.space, &self.coordinates),
            alpha: self.alpha,
        }
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Compute the Euclidian distance between the two colors in Oklab.
    ///
    /// This method computes the color difference *Delta E OK*. It ignores
    /// alpha.
    ///
    /// ```
    /// # use colormath::{assert_close_enough, Color};
    /// # use colormath::error::ColorFormatError;
    /// # use std::str::FromStr;
    /// let honeydew = Color::from_str("#d4fb79")?;
    /// let cantaloupe = Color::from_str("#ffd479")?;
    /// assert_close_enough!(honeydew.distance(&cantaloupe), 0.11174969799958659);
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    #[inline]
    pub fn distance(&self, other: &Self) -> Float {
        delta_e_ok(
            &self.to(ColorSpace::Oklab).coordinates,
            &other.to(ColorSpace::Oklab).coordinates,
        )
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Interpolate the two colors.
    ///
    /// This method creates a new interpolator for this and the given color.
    /// [`Interpolator::at`] generates the actual, interpolated colors. The
    /// interpolated color may not be displayable and hence require further
    /// processing, such as gamut mapping.
    ///
    /// ```
    /// # use colormath::{Color, ColorSpace, HueInterpolation};
    /// let red = Color::srgb(0.8, 0.0, 0.0);
    /// let yellow = Color::from_24bit(0xff, 0xca, 0);
    /// let orange = red
    ///     .interpolate(&yellow, ColorSpace::Oklch, HueInterpolation::Shorter)
    ///     .at(0.5);
    /// assert_eq!(orange, Color::oklch(0.6960475282872609, 0.19690471880823895, 59.33737836604693));
    /// ```
    #[inline]
    #[must_use = "method returns interpolator and does not mutate original values"]
    pub fn interpolate(
        &self,
        color: &Self,
        interpolation_space: ColorSpace,
        interpolation_strategy: HueInterpolation,
    ) -> Interpolator {
        Interpolator::new(self, color, interpolation_space, interpolation_strategy)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert this color to 24-bit RGB representation.
    ///
    /// This method converts the color to a gamut-mapped sRGB color before
    /// converting each coordinate to a `u8`. It ignores alpha.
    pub fn to_24bit(&self) -> [u8; 3] {
        to_24bit(
            ColorSpace::Srgb,
            self.to(ColorSpace::Srgb).to_gamut().as_ref(),
        )
    }

    /// Format this color in familiar `#123abc` hashed hexadecimal representation.
    ///
    /// Like [`Color::to_24bit`], this method converts the color to a
    /// gamut-mapped sRGB color before formatting its coordinates in hashed
    /// hexadecimal notation.
    ///
    /// ```
    /// # use colormath::{Color, ColorSpace};
    /// let pink = Color::p3(1, 0.2, 1).to(ColorSpace::Srgb);
    /// assert!(!pink.in_gamut());
    /// assert_eq!(pink.clip(), Color::srgb(1, 0, 1));
    /// assert_eq!(pink.to_hex_format(), "#ff41fb");
    /// ```
    #[inline]
    pub fn to_hex_format(&self) -> String {
        let [r, g, b] = self.to_24bit();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl Default for Color {
    /// Create an instance of the default color, the origin in XYZ, i.e., pitch
    /// black.
    #[inline]
    fn default() -> Self {
        Self::new(ColorSpace::Xyz, [0.0, 0.0, 0.0])
    }
}

impl std::str::FromStr for Color {
    type Err = crate::error::ColorFormatError;

    /// Instantiate a color from its string representation.
    ///
    /// Before parsing the string slice, this method trims any leading and
    /// trailing white space while also converting ASCII letters to lower case.
    /// That makes parsing effectively case-insensitive.
    ///
    /// Hexadecimal colors, named colors, and `rgb()`/`rgba()` produce sRGB
    /// colors. The other CSS functions produce colors in their respective
    /// color spaces, with `color()` selecting the color space by name.
    ///
    /// # Examples
    ///
    /// ```
    /// # use colormath::{Color, ColorSpace};
    /// # use colormath::error::ColorFormatError;
    /// use std::str::FromStr;
    ///
    /// let navy = Color::from_str("#011480")?;
    /// assert_eq!(navy, Color::srgb(
    ///     0.00392156862745098,
    ///     0.0784313725490196,
    ///     0.5019607843137255,
    /// ));
    ///
    /// let veil: Color = str::parse("rgba(0, 0, 0, 50%)")?;
    /// assert_eq!(veil, Color::srgb(0, 0, 0).with_alpha(0.5));
    ///
    /// let lime: Color = str::parse("hsl(120deg 100% 50%)")?;
    /// assert_eq!(lime.space(), ColorSpace::Hsl);
    /// assert_eq!(lime.to_hex_format(), "#00ff00");
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(|(space, coordinates, alpha)| Self {
            space,
            coordinates,
            alpha,
        })
    }
}

impl TryFrom<&str> for Color {
    type Error = crate::error::ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl AsRef<[Float; 3]> for Color {
    fn as_ref(&self) -> &[Float; 3] {
        &self.coordinates
    }
}

impl std::ops::Index<usize> for Color {
    type Output = Float;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl std::hash::Hash for Color {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.space.hash(state);
        to_eq_coordinates(self.space, &self.coordinates).hash(state);
        self.alpha.map(to_eq_bits).hash(state);
    }
}

impl PartialEq for Color {
    /// Determine whether this color equals the other color.
    ///
    /// ```
    /// # use colormath::{Color, ColorSpace, Float};
    /// let delta = 2.0 * (10.0 as Float).powi(-(Float::DIGITS as i32));
    /// assert_eq!(
    ///     Color::srgb(Float::NAN, 4.0 * delta, 0.12 + delta),
    ///     Color::srgb(0,          5.0 * delta, 0.12        )
    /// );
    ///
    /// assert_eq!(Color::oklch(0.5, 0.1, 665), Color::oklch(0.5, 0.1, 305));
    /// assert_ne!(Color::oklch(0.5, 0.1, 305), Color::oklch(0.5, 0.1, 305).with_alpha(1));
    /// ```
    fn eq(&self, other: &Self) -> bool {
        if self.space != other.space || self.alpha.map(to_eq_bits) != other.alpha.map(to_eq_bits) {
            return false;
        } else if self.coordinates == other.coordinates {
            return true;
        }

        let n1 = to_eq_coordinates(self.space, &self.coordinates);
        let n2 = to_eq_coordinates(other.space, &other.coordinates);
        n1 == n2
    }
}

impl Eq for Color {}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [c1, c2, c3] = self.coordinates;
        match self.alpha {
            Some(alpha) => f.write_fmt(format_args!(
                "Color({:?}, [{}, {}, {}], {})",
                self.space, c1, c2, c3, alpha
            )),
            None => f.write_fmt(format_args!(
                "Color({:?}, [{}, {}, {}])",
                self.space, c1, c2, c3
            )),
        }
    }
}

impl std::fmt::Display for Color {
    /// Format this color.
    ///
    /// This method formats the color in CSS format, with three
    /// space-separated coordinates and optional alpha after a slash. It
    /// respects the formatter's precision, defaulting to 5 digits past the
    /// decimal, with 2 fewer digits for hues.
    ///
    /// ```
    /// # use colormath::{Color, ColorSpace::*};
    /// # use colormath::error::ColorFormatError;
    /// # use std::str::FromStr;
    /// let lime = Color::from_str("#a1d2ae")?;
    /// assert_eq!(format!("{}", lime), "color(srgb 0.63137 0.82353 0.68235)");
    /// assert_eq!(format!("{:.3}", lime), "color(srgb 0.631 0.824 0.682)");
    /// assert_eq!(format!("{}", lime.to(Oklch)), "oklch(0.81945 0.07179 152.812)");
    ///
    /// let gray = Color::oklch(0.665, 0, f64::NAN).with_alpha(0.25);
    /// assert_eq!(format!("{}", gray), "oklch(0.665 0 none / 0.25)");
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format(self.space, &self.coordinates, self.alpha, f)
    }
}

// ====================================================================================================================

/// Helper struct returned by [`Color::interpolate`].
///
/// An interpolator performs linear interpolation between the coordinates of two
/// colors according to [CSS Color
/// 4](https://www.w3.org/TR/css-color-4/#interpolation). Preparing color
/// coordinates requires carrying forward missing components and adjusting
/// hue according to interpolation strategy. This struct performs that work
/// once and then can generate an arbitrary number of interpolated colors.
///
/// Alpha is interpolated linearly. If only one color has alpha, the other
/// color counts as opaque. If neither has alpha, the result has none either.
#[derive(Clone, Debug)]
pub struct Interpolator {
    space: ColorSpace,
    coordinates1: [Float; 3],
    coordinates2: [Float; 3],
    alpha: Option<(Float, Float)>,
}

impl Interpolator {
    /// Create a new color interpolator.
    ///
    /// See [`Color::interpolate`] for an example.
    #[inline]
    pub fn new(
        color1: &Color,
        color2: &Color,
        space: ColorSpace,
        strategy: HueInterpolation,
    ) -> Self {
        let (coordinates1, coordinates2) = prepare_to_interpolate(
            color1.space,
            &color1.coordinates,
            color2.space,
            &color2.coordinates,
            space,
            strategy,
        );

        let alpha = match (color1.alpha, color2.alpha) {
            (None, None) => None,
            _ => Some((color1.opacity(), color2.opacity())),
        };

        Self {
            space,
            coordinates1,
            coordinates2,
            alpha,
        }
    }

    /// Compute the interpolated color for the given fraction.
    ///
    /// Hue interpolation may shift one hue by a full turn, so the hue of the
    /// result is wrapped back into `0..360`.
    #[inline]
    pub fn at(&self, fraction: Float) -> Color {
        let mut coordinates = interpolate(fraction, &self.coordinates1, &self.coordinates2);
        if let Some(index) = self.space.hue_index() {
            coordinates[index] = coordinates[index].rem_euclid(360.0);
        }

        Color {
            space: self.space,
            coordinates,
            alpha: self
                .alpha
                .map(|(alpha1, alpha2)| alpha1 + fraction * (alpha2 - alpha1)),
        }
    }
}

// ====================================================================================================================

/// A multi-stop gradient.
///
/// A gradient comprises two or more color stops, which are evenly spaced
/// across the unit interval. Each pair of adjacent stops is interpolated with
/// an [`Interpolator`] in the same interpolation space and with the same hue
/// interpolation strategy.
///
/// ```
/// # use colormath::{Color, ColorSpace, Gradient, HueInterpolation};
/// let stops = [
///     Color::srgb(1, 0, 0),
///     Color::srgb(0, 1, 0),
///     Color::srgb(0, 0, 1),
/// ];
/// let gradient = Gradient::new(&stops, ColorSpace::Srgb, HueInterpolation::Shorter)
///     .expect("three stops are plenty");
/// let hexes: Vec<String> = gradient.samples(5).iter().map(Color::to_hex_format).collect();
/// assert_eq!(hexes, ["#ff0000", "#808000", "#00ff00", "#008080", "#0000ff"]);
/// ```
#[derive(Clone, Debug)]
pub struct Gradient {
    segments: Vec<Interpolator>,
}

impl Gradient {
    /// Create a new gradient. This function returns `None` if there are fewer
    /// than two stops.
    pub fn new(stops: &[Color], space: ColorSpace, strategy: HueInterpolation) -> Option<Self> {
        if stops.len() < 2 {
            return None;
        }

        let segments = stops
            .windows(2)
            .map(|pair| Interpolator::new(&pair[0], &pair[1], space, strategy))
            .collect();

        Some(Self { segments })
    }

    /// Compute the color at the given position. Positions outside the unit
    /// interval are clamped.
    pub fn at(&self, position: Float) -> Color {
        let count = self.segments.len();
        let scaled = position.clamp(0.0, 1.0) * count as Float;
        let index = (scaled.floor() as usize).min(count - 1);
        self.segments[index].at(scaled - index as Float)
    }

    /// Compute `count` evenly spaced colors, starting with the first stop and
    /// ending with the last one.
    pub fn samples(&self, count: usize) -> Vec<Color> {
        match count {
            0 => Vec::new(),
            1 => vec![self.at(0.0)],
            _ => (0..count)
                .map(|index| self.at(index as Float / (count - 1) as Float))
                .collect(),
        }
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{Color, Gradient};
    use crate::{ColorSpace, HueInterpolation};
    use std::str::FromStr;

    #[test]
    fn test_alpha_survives_conversion() {
        let veil = Color::srgb(0, 0, 0).with_alpha(0.5);
        assert_eq!(veil.to(ColorSpace::Oklch).alpha(), Some(0.5));
        assert_eq!(veil.to_gamut().alpha(), Some(0.5));
        assert_eq!(veil.opacity(), 0.5);
        assert_eq!(Color::srgb(0, 0, 0).opacity(), 1.0);
    }

    #[test]
    fn test_interpolate_alpha() {
        let opaque = Color::srgb(1, 1, 1);
        let clear = Color::srgb(0, 0, 0).with_alpha(0.0);
        let halfway = opaque
            .interpolate(&clear, ColorSpace::Srgb, HueInterpolation::Shorter)
            .at(0.5);
        assert_eq!(halfway, Color::srgb(0.5, 0.5, 0.5).with_alpha(0.5));

        let none = opaque
            .interpolate(&Color::srgb(0, 0, 0), ColorSpace::Srgb, HueInterpolation::Shorter)
            .at(0.25);
        assert_eq!(none.alpha(), None);
    }

    #[test]
    fn test_interpolated_hue_wraps() {
        let red = Color::srgb(1, 0, 0);
        let blue = Color::srgb(0, 0, 1);
        let interpolator = red.interpolate(&blue, ColorSpace::Oklch, HueInterpolation::Shorter);

        let start = interpolator.at(0.0);
        assert!((start[2] - 29.233880279627854).abs() < 1e-9, "hue {}", start[2]);
        let near = interpolator.at(0.1);
        assert!((near[2] - 16.715694513302026).abs() < 1e-9, "hue {}", near[2]);
        let end = interpolator.at(1.0);
        assert!((end[2] - 264.0520226163699).abs() < 1e-9, "hue {}", end[2]);

        for sample in Gradient::new(&[red, blue], ColorSpace::Oklch, HueInterpolation::Shorter)
            .map(|gradient| gradient.samples(7))
            .unwrap_or_default()
        {
            assert!((0.0..360.0).contains(&sample[2]), "hue {}", sample[2]);
        }
    }

    #[test]
    fn test_gradient() {
        let white = Color::srgb(1, 1, 1);
        let black = Color::srgb(0, 0, 0);

        assert!(Gradient::new(&[white.clone()], ColorSpace::Oklch, HueInterpolation::Shorter).is_none());

        let gradient = Gradient::new(&[white.clone(), black.clone()], ColorSpace::Srgb, HueInterpolation::Shorter);
        let Some(gradient) = gradient else {
            panic!("two stops should make a gradient");
        };
        let samples = gradient.samples(3);
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0], white);
        assert_eq!(samples[1], Color::srgb(0.5, 0.5, 0.5));
        assert_eq!(samples[2], black);
        assert_eq!(gradient.at(7.0), black);
        assert_eq!(gradient.samples(1), vec![white]);
    }

    #[test]
    fn test_hash_agrees_with_eq() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Color::oklch(0.5, 0.1, 665));
        assert!(set.contains(&Color::oklch(0.5, 0.1, 305)));
        assert!(!set.contains(&Color::oklch(0.5, 0.1, 305).with_alpha(0.5)));
    }

    #[test]
    fn test_parse_into_color() {
        let color = Color::from_str("oklch(0.7 0.19 35 / 40%)");
        assert_eq!(color, Ok(Color::oklch(0.7, 0.19, 35).with_alpha(0.4)));
        assert!(Color::try_from("nope").is_err());
    }
}
