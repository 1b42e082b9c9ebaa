use crate::core::{convert, normalize, ColorSpace};
use crate::Float;

/// Compute Delta-E for Oklab, i.e., the Euclidian distance between the two
/// colors' coordinates.
#[allow(non_snake_case)]
pub(crate) fn delta_e_ok(coordinates1: &[Float; 3], coordinates2: &[Float; 3]) -> Float {
    let [L1, a1, b1] = coordinates1;
    let [L2, a2, b2] = coordinates2;

    let ΔL = L1 - L2;
    let Δa = a1 - a2;
    let Δb = b1 - b2;

    ΔL.mul_add(ΔL, Δa.mul_add(Δa, Δb * Δb)).sqrt()
}

// --------------------------------------------------------------------------------------------------------------------

/// The categories of analogous components.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Component {
    Red,
    Green,
    Blue,
    Lightness,
    Colorfulness,
    Hue,
    OpponentA,
    OpponentB,
}

/// Determine the category of the coordinate with the given index.
fn component(space: ColorSpace, index: usize) -> Component {
    use ColorSpace::*;
    use Component::*;

    match (space, index) {
        (Srgb | LinearSrgb | DisplayP3 | LinearDisplayP3 | Xyz | XyzD50, 0) => Red,
        (Srgb | LinearSrgb | DisplayP3 | LinearDisplayP3 | Xyz | XyzD50, 1) => Green,
        (Srgb | LinearSrgb | DisplayP3 | LinearDisplayP3 | Xyz | XyzD50, _) => Blue,
        (Hsl, 0) => Hue,
        (Hsl, 1) => Colorfulness,
        (Hsl, _) => Lightness,
        (Oklab | Oklch | Lab | Lch, 0) => Lightness,
        (Oklab | Lab, 1) => OpponentA,
        (Oklab | Lab, _) => OpponentB,
        (Oklch | Lch, 1) => Colorfulness,
        (Oklch | Lch, _) => Hue,
    }
}

/// Determine how a coordinate carries forward.
///
/// This function determines how to [carry
/// forward](https://www.w3.org/TR/css-color-4/#interpolation-missing) a missing
/// coordinate, i.e., a coordinate that is not-a-number, from the source color
/// space to the interpolation color space. The caller specifies the coordinate
/// by its index (from 0 to 2) and, if the coordinate carries forward, the
/// function returns the index of the forwarded coordinate.
fn carry_forward(from_space: ColorSpace, to_space: ColorSpace, index: usize) -> Option<usize> {
    let source = component(from_space, index);
    (0..=2).find(|&target| component(to_space, target) == source)
}

/// Convert the coordinates while carrying forward missing values.
fn prepare_coordinate_interpolation(
    from_space: ColorSpace,
    to_space: ColorSpace,
    coordinates: &[Float; 3],
) -> [Float; 3] {
    // Normalize coordinates and convert to interpolation space
    let mut intermediate = convert(from_space, to_space, &normalize(from_space, coordinates));

    // Carry forward missing components
    for (index, coordinate) in coordinates.iter().enumerate() {
        if coordinate.is_nan() {
            if let Some(index) = carry_forward(from_space, to_space, index) {
                intermediate[index] = Float::NAN;
            }
        }
    }

    intermediate
}

/// A choice of strategy for interpolating hues.
///
/// This enum is used by [`Color::interpolate`](crate::Color::interpolate).
///
/// Since hues are expressed as angles, the same perceptual hue has an infinite
/// number of representations modulo 360. Furthermore, there are two ways of
/// interpolating between two hues, clockwise and counter-clockwise. Consistent
/// with [CSS Color 4](https://www.w3.org/TR/css-color-4/#hue-interpolation),
/// the interpolation strategy selects the way based either on the distance
/// between hues, [`HueInterpolation::Shorter`] and
/// [`HueInterpolation::Longer`], or on the direction,
/// [`HueInterpolation::Increasing`] and [`HueInterpolation::Decreasing`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HueInterpolation {
    /// Take the shorter arc between the two hue angles.
    #[default]
    Shorter,
    /// Take the longer arc between the two hue angles.
    Longer,
    /// Keep increasing hue angles.
    Increasing,
    /// Keep decreasing hue angles.
    Decreasing,
}

/// Adjust the pair of hues based on interpolation strategy.
fn prepare_hue_interpolation(strategy: HueInterpolation, h1: Float, h2: Float) -> [Float; 2] {
    match strategy {
        HueInterpolation::Shorter => {
            if 180.0 < h2 - h1 {
                return [h1 + 360.0, h2];
            } else if h2 - h1 < -180.0 {
                return [h1, h2 + 360.0];
            }
        }
        HueInterpolation::Longer => {
            if (0.0..=180.0).contains(&(h2 - h1)) {
                return [h1 + 360.0, h2];
            } else if (-180.0..=0.0).contains(&(h2 - h1)) {
                return [h1, h2 + 360.0];
            }
        }
        HueInterpolation::Increasing => {
            if h2 < h1 {
                return [h1, h2 + 360.0];
            }
        }
        HueInterpolation::Decreasing => {
            if h1 < h2 {
                return [h1 + 360.0, h2];
            }
        }
    }

    [h1, h2]
}

/// Prepare coordinates for interpolation.
///
/// This function prepares a pair of coordinates for interpolation with
/// [`interpolate`] according to the rules of [CSS Color
/// 4](https://www.w3.org/TR/css-color-4/#interpolation). It carries missing
/// components forward when converting to the interpolation color space and
/// then tries to fill them with the other color's component. It also
/// implements all four interpolation strategies for hues.
///
/// If both colors end up with not-a-number values for the same coordinate,
/// those not-a-number values remain.
#[must_use = "function returns new color coordinates and does not mutate original values"]
pub(crate) fn prepare_to_interpolate(
    space1: ColorSpace,
    coordinates1: &[Float; 3],
    space2: ColorSpace,
    coordinates2: &[Float; 3],
    interpolation_space: ColorSpace,
    strategy: HueInterpolation,
) -> ([Float; 3], [Float; 3]) {
    let mut coordinates1 =
        prepare_coordinate_interpolation(space1, interpolation_space, coordinates1);
    let mut coordinates2 =
        prepare_coordinate_interpolation(space2, interpolation_space, coordinates2);

    // Fill in missing components
    for index in 0..=2 {
        if coordinates1[index].is_nan() {
            coordinates1[index] = coordinates2[index];
        } else if coordinates2[index].is_nan() {
            coordinates2[index] = coordinates1[index];
        }
    }

    // Adjust hue based on interpolation strategy
    if let Some(index) = interpolation_space.hue_index() {
        [coordinates1[index], coordinates2[index]] =
            prepare_hue_interpolation(strategy, coordinates1[index], coordinates2[index])
    }

    (coordinates1, coordinates2)
}

/// Interpolate between the prepared coordinates.
///
/// This function calculates the linear interpolation for the given factor
/// between equivalent coordinates of the two colors. For the result to be
/// meaningful, the coordinates must be prepared with
/// [`prepare_to_interpolate`].
#[must_use = "function returns new color coordinates and does not mutate original values"]
pub(crate) fn interpolate(
    fraction: Float,
    coordinates1: &[Float; 3],
    coordinates2: &[Float; 3],
) -> [Float; 3] {
    [
        coordinates1[0] + fraction * (coordinates2[0] - coordinates1[0]),
        coordinates1[1] + fraction * (coordinates2[1] - coordinates1[1]),
        coordinates1[2] + fraction * (coordinates2[2] - coordinates1[2]),
    ]
}

#[cfg(test)]
mod test {
    use super::*;
    use ColorSpace::*;

    #[test]
    fn test_carry_forward() {
        assert_eq!(carry_forward(Srgb, DisplayP3, 1), Some(1));
        assert_eq!(carry_forward(Hsl, Oklch, 0), Some(2));
        assert_eq!(carry_forward(Hsl, Lch, 2), Some(0));
        assert_eq!(carry_forward(Oklch, Hsl, 1), Some(1));
        assert_eq!(carry_forward(Lab, Oklab, 2), Some(2));
        assert_eq!(carry_forward(Oklab, Oklch, 1), None);
        assert_eq!(carry_forward(Srgb, Oklab, 0), None);
    }

    #[test]
    fn test_hue_strategies() {
        assert_eq!(
            prepare_hue_interpolation(HueInterpolation::Shorter, 350.0, 10.0),
            [350.0, 370.0]
        );
        assert_eq!(
            prepare_hue_interpolation(HueInterpolation::Longer, 350.0, 10.0),
            [350.0, 10.0]
        );
        assert_eq!(
            prepare_hue_interpolation(HueInterpolation::Increasing, 90.0, 30.0),
            [90.0, 390.0]
        );
        assert_eq!(
            prepare_hue_interpolation(HueInterpolation::Decreasing, 30.0, 90.0),
            [390.0, 90.0]
        );
    }

    #[test]
    fn test_missing_hue() {
        // A gray's hue is missing and takes the other color's hue.
        let (gray, blue) = prepare_to_interpolate(
            Oklch,
            &[0.5, 0.0, Float::NAN],
            Oklch,
            &[0.45, 0.31, 264.0],
            Oklch,
            HueInterpolation::Shorter,
        );
        assert_eq!(gray, [0.5, 0.0, 264.0]);
        assert_eq!(blue, [0.45, 0.31, 264.0]);

        let halfway = interpolate(0.5, &gray, &blue);
        assert!((halfway[0] - 0.475).abs() < 1e-12);
        assert!((halfway[1] - 0.155).abs() < 1e-12);
        assert_eq!(halfway[2], 264.0);
    }

    #[test]
    fn test_delta_e() {
        assert_eq!(delta_e_ok(&[0.5, 0.1, 0.1], &[0.5, 0.1, 0.1]), 0.0);
        assert!((delta_e_ok(&[0.0, 0.0, 0.0], &[0.3, 0.0, 0.4]) - 0.5).abs() < 1e-12);
    }
}
