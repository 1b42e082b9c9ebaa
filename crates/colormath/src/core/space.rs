/// The enumeration of supported color spaces.
///
/// # RGB
///
/// This crate supports two RGB color spaces, each in its gamma-corrected and
/// its linear form:
///
///   * [sRGB](https://en.wikipedia.org/wiki/SRGB), which has long served as the
///     default color space for the web.
///   * [Display P3](https://en.wikipedia.org/wiki/DCI-P3), which is
///     well-positioned to become sRGB's successor.
///
/// For both color spaces as well as their linear versions, in-gamut
/// coordinates range from 0 to 1, inclusive.
///
/// # HSL
///
/// HSL is a cylindrical reshaping of sRGB with coordinates hue (in degrees),
/// saturation, and lightness, in that order. Saturation and lightness have
/// unit range. Unlike the other polar color spaces, HSL's hue comes *first*.
///
/// # Oklab and Oklch
///
/// [Oklab/Oklch](https://bottosson.github.io/posts/oklab/) is a perceptually
/// uniform color space, which, like CIELAB, uses one coordinate for lightness
/// and two coordinates for "colorness." Oklab uses Cartesian coordinates a, b
/// whereas Oklch uses polar coordinates chroma C and hue h. Lightness ranges
/// `0..=1`, a/b are in practice bounded by `-0.4..=0.4`, and chroma by
/// `0..=0.4`.
///
/// # CIELAB and CIELCh
///
/// [CIELAB](https://en.wikipedia.org/wiki/CIELAB_color_space) and its polar
/// form CIELCh use the D50 white point, as CSS does. Lightness ranges
/// `0..=100`, a/b in practice `-125..=125`, and chroma `0..=150`.
///
/// # XYZ
///
/// [XYZ](https://en.wikipedia.org/wiki/CIE_1931_color_space) serves as
/// foundational color space. All conversions between unrelated color spaces
/// go through XYZ with the D65 standard illuminant. XYZ with the D50 standard
/// illuminant is available, too, and connects CIELAB to the rest. Chromatic
/// adaptation between the two versions of XYZ uses the (linear) Bradford
/// method.
///
/// # Hues
///
/// The hue of polar color spaces may be not-a-number, which indicates a
/// powerless component, i.e., a gray tone. In that case, chroma (or
/// saturation) must necessarily be zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    Srgb,
    LinearSrgb,
    Hsl,
    DisplayP3,
    LinearDisplayP3,
    Oklab,
    Oklch,
    Lab,
    Lch,
    Xyz,
    XyzD50,
}

impl ColorSpace {
    /// Determine whether this color space is polar.
    ///
    /// HSL, Oklch, and CIELCh are polar color spaces.
    pub const fn is_polar(&self) -> bool {
        matches!(*self, Self::Hsl | Self::Oklch | Self::Lch)
    }

    /// Get the index of the hue coordinate, if this color space has one.
    pub const fn hue_index(&self) -> Option<usize> {
        match *self {
            Self::Hsl => Some(0),
            Self::Oklch | Self::Lch => Some(2),
            _ => None,
        }
    }

    /// Determine whether this color space is RGB.
    ///
    /// RGB color spaces are additive and have red, green, and blue coordinates.
    /// In-gamut colors have coordinates in unit range `0..=1`.
    pub const fn is_rgb(&self) -> bool {
        use ColorSpace::*;
        matches!(*self, Srgb | LinearSrgb | DisplayP3 | LinearDisplayP3)
    }

    /// Determine whether this color space is Oklab or Oklch.
    pub const fn is_ok(&self) -> bool {
        matches!(*self, Self::Oklab | Self::Oklch)
    }

    /// Determine whether this color space is CIELAB or CIELCh.
    pub const fn is_lab(&self) -> bool {
        matches!(*self, Self::Lab | Self::Lch)
    }

    /// Determine whether this color space is bounded.
    ///
    /// XYZ, the Oklab variations, and the CIELAB variations are *unbounded*
    /// and hence can model any color. By contrast, RGB color spaces and HSL
    /// are *bounded*.
    pub const fn is_bounded(&self) -> bool {
        self.is_rgb() || matches!(*self, Self::Hsl)
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ColorSpace::*;

        let s = match self {
            Srgb => "sRGB",
            LinearSrgb => "linear sRGB",
            Hsl => "HSL",
            DisplayP3 => "Display P3",
            LinearDisplayP3 => "linear Display P3",
            Oklab => "Oklab",
            Oklch => "Oklch",
            Lab => "CIELAB",
            Lch => "CIELCh",
            Xyz => "XYZ D65",
            XyzD50 => "XYZ D50",
        };

        f.write_str(s)
    }
}
