use crate::core::conversion::oklch_to_oklab;
use crate::core::{convert, delta_e_ok, normalize};
use crate::{ColorSpace, Float};

/// Determine whether the coordinates are in gamut for their color space.
///
/// HSL colors are in gamut if their sRGB equivalent is.
pub(crate) fn in_gamut(space: ColorSpace, coordinates: &[Float; 3]) -> bool {
    if space.is_rgb() {
        coordinates.iter().all(|c| 0.0 <= *c && *c <= 1.0)
    } else if space == ColorSpace::Hsl {
        let [_, s, l] = normalize(space, coordinates);
        (0.0..=1.0).contains(&s) && (0.0..=1.0).contains(&l)
    } else {
        true
    }
}

/// Clip the coordinates to the gamut of their color space.
pub(crate) fn clip(space: ColorSpace, coordinates: &[Float; 3]) -> [Float; 3] {
    if space.is_rgb() {
        let [r, g, b] = coordinates;
        [r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0)]
    } else if space == ColorSpace::Hsl {
        let [h, s, l] = coordinates;
        [*h, s.clamp(0.0, 1.0), l.clamp(0.0, 1.0)]
    } else {
        *coordinates
    }
}

const JND: Float = 0.02;
const EPSILON: Float = 0.0001;

/// Map the given color coordinates into the gamut of their color space.
///
/// This function implements the CSS Color 4 [gamut mapping
/// algorithm](https://drafts.csswg.org/css-color/#css-gamut-mapping). It
/// basically performs a binary search in Oklch for a color with less chroma
/// than the original, whose clipped version is within the *just noticeable
/// difference*. Since, by definition, the clipped version also is in gamut, it
/// becomes the result of the search. HSL colors are mapped via sRGB.
pub(crate) fn to_gamut(space: ColorSpace, coordinates: &[Float; 3]) -> [Float; 3] {
    use ColorSpace::*;

    let coordinates = normalize(space, coordinates);

    // If the color space is unbounded, there is nothing to map to
    if !space.is_bounded() {
        return coordinates;
    }

    if space == Hsl {
        if in_gamut(Hsl, &coordinates) {
            return coordinates;
        }
        let srgb = to_gamut(Srgb, &convert(Hsl, Srgb, &coordinates));
        return convert(Srgb, Hsl, &srgb);
    }

    // Preliminary 1/2: Clamp Lightness
    let origin_as_oklch = convert(space, Oklch, &coordinates);
    let l = origin_as_oklch[0];
    if 1.0 <= l {
        return convert(Oklch, space, &[1.0, 0.0, 0.0]);
    }
    if l <= 0.0 {
        return convert(Oklch, space, &[0.0, 0.0, 0.0]);
    }

    // Preliminary 2/2: Check gamut
    if in_gamut(space, &coordinates) {
        return coordinates;
    }

    // Goal: Minimize just noticeable difference between current and clipped
    // colors
    let mut current_as_oklch = origin_as_oklch;
    let mut clipped_as_target = clip(space, &convert(Oklch, space, &current_as_oklch));

    let difference = delta_e_ok(
        &convert(space, Oklab, &clipped_as_target),
        &oklch_to_oklab(&current_as_oklch),
    );

    if difference < JND {
        return clipped_as_target;
    }

    // Strategy: Binary search by adjusting chroma in Oklch
    let mut min = 0.0;
    let mut max = origin_as_oklch[1];
    let mut min_in_gamut = true;

    while EPSILON < max - min {
        let chroma = (min + max) / 2.0;
        current_as_oklch = [current_as_oklch[0], chroma, current_as_oklch[2]];

        let current_as_target = convert(Oklch, space, &current_as_oklch);

        if min_in_gamut && in_gamut(space, &current_as_target) {
            min = chroma;
            continue;
        }

        clipped_as_target = clip(space, &current_as_target);

        let difference = delta_e_ok(
            &convert(space, Oklab, &clipped_as_target),
            &oklch_to_oklab(&current_as_oklch),
        );

        if difference < JND {
            if JND - difference < EPSILON {
                return clipped_as_target;
            }
            min_in_gamut = false;
            min = chroma;
        } else {
            max = chroma;
        }
    }

    clipped_as_target
}

#[cfg(test)]
mod test {
    use super::*;
    use ColorSpace::*;

    #[test]
    fn test_in_gamut() {
        assert!(in_gamut(Srgb, &[0.0, 0.5, 1.0]));
        assert!(!in_gamut(Srgb, &[0.0, 0.5, 1.01]));
        assert!(in_gamut(Hsl, &[400.0, 1.0, 0.5]));
        assert!(!in_gamut(Hsl, &[40.0, 1.2, 0.5]));
        assert!(in_gamut(Oklch, &[0.9, 0.4, 40.0]));
    }

    #[test]
    fn test_to_gamut() {
        // Display P3's green is outside sRGB.
        let green = convert(DisplayP3, Srgb, &[0.0, 1.0, 0.0]);
        assert!(!in_gamut(Srgb, &green));

        let mapped = to_gamut(Srgb, &green);
        assert!(in_gamut(Srgb, &mapped));
        assert!(mapped[1] > 0.9);

        // Too bright is plain white.
        let white = to_gamut(Srgb, &[1.2, 1.2, 1.2]);
        for c in white {
            assert!((c - 1.0).abs() < 1e-9);
        }

        let hsl = to_gamut(Hsl, &[120.0, 1.5, 0.5]);
        assert!(in_gamut(Hsl, &hsl));
        assert_eq!(to_gamut(Oklab, &[0.5, 0.6, 0.6]), [0.5, 0.6, 0.6]);
    }
}
