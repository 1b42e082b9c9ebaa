use super::{normalize, ColorSpace};
use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Convert the color coordinates to 24-bit representation.
///
/// This function converts the color coordinates to 24-bit representation. It
/// assumes that the color is an in-gamut RGB color, i.e., that its coordinates
/// range `0..=1`. Even if that is not the case, the conversion automatically
/// clamps coordinates to the range `0x00..=0xff`.
pub(crate) fn to_24bit(space: ColorSpace, coordinates: &[Float; 3]) -> [u8; 3] {
    let [r, g, b] = normalize(space, coordinates);
    [
        (r.clamp(0.0, 1.0) * 255.0).round() as u8,
        (g.clamp(0.0, 1.0) * 255.0).round() as u8,
        (b.clamp(0.0, 1.0) * 255.0).round() as u8,
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates from gamma-corrected RGB to linear RGB using sRGB's
/// gamma. Display P3 uses the very same gamma. This is a one-hop, direct
/// conversion.
fn rgb_to_linear_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude <= 0.04045 {
            value / 12.92
        } else {
            ((magnitude + 0.055) / 1.055).powf(2.4).copysign(value)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

/// Convert coordinates from linear RGB to gamma-corrected RGB using sRGB's
/// gamma. Display P3 uses the very same gamma. This is a one-hop, direct
/// conversion.
fn linear_rgb_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude <= 0.0031308 {
            value * 12.92
        } else {
            magnitude
                .powf(1.0 / 2.4)
                .mul_add(1.055, -0.055)
                .copysign(value)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

// --------------------------------------------------------------------------------------------------------------------
// https://www.w3.org/TR/css-color-4/#hsl-to-rgb

mod hsl {
    use crate::Float;

    /// Convert coordinates for HSL to sRGB. This is a one-hop, direct
    /// conversion.
    pub(super) fn hsl_to_srgb(value: &[Float; 3]) -> [Float; 3] {
        let [h, s, l] = *value;
        let h = if h.is_nan() { 0.0 } else { h.rem_euclid(360.0) };
        let a = s * l.min(1.0 - l);

        let channel = |n: Float| {
            let k = (n + h / 30.0).rem_euclid(12.0);
            l - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
        };

        [channel(0.0), channel(8.0), channel(4.0)]
    }

    const EPSILON: Float = 1e-10;

    /// Convert coordinates for sRGB to HSL. This is a one-hop, direct
    /// conversion. Grays have a not-a-number hue.
    pub(super) fn srgb_to_hsl(value: &[Float; 3]) -> [Float; 3] {
        let [r, g, b] = *value;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = (max + min) / 2.0;
        let delta = max - min;

        if delta.abs() < EPSILON {
            return [Float::NAN, 0.0, lightness];
        }

        let saturation = if lightness == 0.0 || lightness == 1.0 {
            0.0
        } else {
            (max - lightness) / lightness.min(1.0 - lightness)
        };

        let hue = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        // Negative saturation flips the hue, as per CSS Color 4.
        if saturation < 0.0 {
            [(hue * 60.0 + 180.0).rem_euclid(360.0), -saturation, lightness]
        } else {
            [hue * 60.0, saturation, lightness]
        }
    }
}

use hsl::{hsl_to_srgb, srgb_to_hsl};

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/srgb-linear.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.41239079926595934, 0.357584339383878,   0.1804807884018343  ],
    [ 0.21263900587151027, 0.715168678767756,   0.07219231536073371 ],
    [ 0.01933081871559182, 0.11919477979462598, 0.9505321522496607  ],
];

/// Convert coordinates for linear sRGB to XYZ. This is a one-hop, direct conversion.
fn linear_srgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    multiply(&LINEAR_SRGB_TO_XYZ, value)
}

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  3.2409699419045226,  -1.537383177570094,   -0.4986107602930034  ],
    [ -0.9692436362808796,   1.8759675015077202,   0.04155505740717559 ],
    [  0.05563007969699366, -0.20397695888897652,  1.0569715142428786  ],
];

/// Convert coordinates for XYZ to linear sRGB. This is a one-hop, direct
/// conversion.
fn xyz_to_linear_srgb(value: &[Float; 3]) -> [Float; 3] {
    multiply(&XYZ_TO_LINEAR_SRGB, value)
}

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/p3-linear.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_DISPLAY_P3_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.4865709486482162, 0.26566769316909306, 0.1982172852343625 ],
    [ 0.2289745640697488, 0.6917385218365064,  0.079286914093745  ],
    [ 0.0000000000000000, 0.04511338185890264, 1.043944368900976  ],
];

/// Convert coordinates for linear Display P3 to XYZ. This is a one-hop, direct
/// conversion.
fn linear_display_p3_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    multiply(&LINEAR_DISPLAY_P3_TO_XYZ, value)
}

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_DISPLAY_P3: [[Float; 3]; 3] = [
    [  2.493496911941425,   -0.9313836179191239,  -0.40271078445071684  ],
    [ -0.8294889695615747,   1.7626640603183463,   0.023624685841943577 ],
    [  0.03584583024378447, -0.07617238926804182,  0.9568845240076872   ],
];

/// Convert coordinates for XYZ to linear Display P3. This is a one-hop, direct
/// conversion.
fn xyz_to_linear_display_p3(value: &[Float; 3]) -> [Float; 3] {
    multiply(&XYZ_TO_LINEAR_DISPLAY_P3, value)
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert Cartesian coordinates to polar ones, e.g., Oklab to Oklch. If both
/// colorness coordinates are within epsilon of zero, the hue is powerless and
/// hence not-a-number. This is a one-hop, direct conversion.
#[allow(non_snake_case)]
fn cartesian_to_polar(value: &[Float; 3], epsilon: Float) -> [Float; 3] {
    let [L, a, b] = *value;

    let a_m = a.abs();
    if a_m < epsilon && b.abs() < epsilon {
        return [L, 0.0, Float::NAN];
    }

    // per herbie 2.1
    let C = if a_m < b { b.hypot(a_m) } else { a_m.hypot(b) };

    let h = b.atan2(a).to_degrees();
    let h = if h.is_sign_negative() { h + 360.0 } else { h };

    [L, C, h]
}

/// Convert polar coordinates to Cartesian ones, e.g., Oklch to Oklab. This is
/// a one-hop, direct conversion.
#[allow(non_snake_case)]
fn polar_to_cartesian(value: &[Float; 3]) -> [Float; 3] {
    let [L, C, h] = *value;

    if h.is_nan() {
        [L, 0.0, 0.0]
    } else {
        let hue_radian = h.to_radians();
        [L, C * hue_radian.cos(), C * hue_radian.sin()]
    }
}

const OK_EPSILON: Float = 0.0002;
const LAB_EPSILON: Float = 0.02;

/// Convert coordinates for Oklch to Oklab. This is a one-hop, direct
/// conversion.
#[inline]
pub(crate) fn oklch_to_oklab(value: &[Float; 3]) -> [Float; 3] {
    polar_to_cartesian(value)
}

/// Convert coordinates for Oklab to Oklch. This is a one-hop, direct
/// conversion.
#[inline]
pub(crate) fn oklab_to_oklch(value: &[Float; 3]) -> [Float; 3] {
    cartesian_to_polar(value, OK_EPSILON)
}

/// Convert coordinates for CIELCh to CIELAB. This is a one-hop, direct
/// conversion.
#[inline]
fn lch_to_lab(value: &[Float; 3]) -> [Float; 3] {
    polar_to_cartesian(value)
}

/// Convert coordinates for CIELAB to CIELCh. This is a one-hop, direct
/// conversion.
#[inline]
fn lab_to_lch(value: &[Float; 3]) -> [Float; 3] {
    cartesian_to_polar(value, LAB_EPSILON)
}

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/oklab.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLAB_TO_OKLMS: [[Float; 3]; 3] = [
    [ 1.0000000000000000,  0.3963377773761749,  0.2158037573099136 ],
    [ 1.0000000000000000, -0.1055613458156586, -0.0638541728258133 ],
    [ 1.0000000000000000, -0.0894841775298119, -1.2914855480194092 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLMS_TO_XYZ: [[Float; 3]; 3] = [
    [  1.2268798758459243, -0.5578149944602171,  0.2813910456659647 ],
    [ -0.0405757452148008,  1.1122868032803170, -0.0717110580655164 ],
    [ -0.0763729366746601, -0.4214933324022432,  1.5869240198367816 ],
];

/// Convert coordinates for Oklab to XYZ. This is a one-hop, direct conversion,
/// even though it requires two matrix multiplications and a coordinate-wise
/// exponential.
fn oklab_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let [l, m, s] = multiply(&OKLAB_TO_OKLMS, value);
    multiply(&OKLMS_TO_XYZ, &[l.powi(3), m.powi(3), s.powi(3)])
}

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_OKLMS: [[Float; 3]; 3] = [
    [ 0.8190224379967030, 0.3619062600528904, -0.1288737815209879 ],
    [ 0.0329836539323885, 0.9292868615863434,  0.0361446663506424 ],
    [ 0.0481771893596242, 0.2642395317527308,  0.6335478284694309 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLMS_TO_OKLAB: [[Float; 3]; 3] = [
    [ 0.2104542683093140,  0.7936177747023054, -0.0040720430116193 ],
    [ 1.9779985324311684, -2.4285922420485799,  0.4505937096174110 ],
    [ 0.0259040424655478,  0.7827717124575296, -0.8086757549230774 ],
];

/// Convert coordinates for XYZ to Oklab. This is a one-hop, direct conversion,
/// even though it requires two matrix multiplications and a coordinate-wise
/// exponential.
fn xyz_to_oklab(value: &[Float; 3]) -> [Float; 3] {
    let [l, m, s] = multiply(&XYZ_TO_OKLMS, value);
    multiply(&OKLMS_TO_OKLAB, &[l.cbrt(), m.cbrt(), s.cbrt()])
}

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/lab.js

mod lab {
    use crate::Float;

    const EPSILON: Float = 216.0 / 24389.0;
    const KAPPA: Float = 24389.0 / 27.0;

    /// The D50 white point, derived from its xy chromaticity.
    #[allow(clippy::excessive_precision)]
    const D50_WHITE: [Float; 3] = [
        0.3457 / 0.3585,
        1.0,
        (1.0 - 0.3457 - 0.3585) / 0.3585,
    ];

    /// Convert coordinates for XYZ D50 to CIELAB. This is a one-hop, direct
    /// conversion.
    pub(super) fn xyz_d50_to_lab(value: &[Float; 3]) -> [Float; 3] {
        #[inline]
        fn f(t: Float) -> Float {
            if t > EPSILON {
                t.cbrt()
            } else {
                KAPPA.mul_add(t, 16.0) / 116.0
            }
        }

        let fx = f(value[0] / D50_WHITE[0]);
        let fy = f(value[1] / D50_WHITE[1]);
        let fz = f(value[2] / D50_WHITE[2]);

        [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
    }

    /// Convert coordinates for CIELAB to XYZ D50. This is a one-hop, direct
    /// conversion.
    pub(super) fn lab_to_xyz_d50(value: &[Float; 3]) -> [Float; 3] {
        let [l, a, b] = *value;

        let fy = (l + 16.0) / 116.0;
        let fx = a / 500.0 + fy;
        let fz = fy - b / 200.0;

        let x = if fx.powi(3) > EPSILON {
            fx.powi(3)
        } else {
            116.0f64.mul_add(fx, -16.0) / KAPPA
        };
        let y = if l > KAPPA * EPSILON {
            fy.powi(3)
        } else {
            l / KAPPA
        };
        let z = if fz.powi(3) > EPSILON {
            fz.powi(3)
        } else {
            116.0f64.mul_add(fz, -16.0) / KAPPA
        };

        [x * D50_WHITE[0], y * D50_WHITE[1], z * D50_WHITE[2]]
    }
}

use lab::{lab_to_xyz_d50, xyz_d50_to_lab};

// --------------------------------------------------------------------------------------------------------------------

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const D65_TO_D50: [[Float; 3]; 3] = [
    [  1.0479297925449969,   0.022946870601609652, -0.05019226628920524  ],
    [  0.02962780877005599,  0.9904344267538799,   -0.017073799063418826 ],
    [ -0.009243040646204504, 0.015055191490298152,  0.7518742814281371   ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const D50_TO_D65: [[Float; 3]; 3] = [
    [  0.955473421488075,    -0.02309845494876471,  0.06325924320057072  ],
    [ -0.0283697093338637,    1.0099953980813041,   0.021041441191917323 ],
    [  0.012314014864481998, -0.020507649298898964, 1.330365926242124    ],
];

/// Convert XYZ D65 to XYZ D50 using the (linear) Bradford method. This is a
/// one-hop, direct conversion.
fn d65_to_d50(value: &[Float; 3]) -> [Float; 3] {
    multiply(&D65_TO_D50, value)
}

/// Convert XYZ D50 to XYZ D65 using the (linear) Bradford method. This is a
/// one-hop, direct conversion.
fn d50_to_d65(value: &[Float; 3]) -> [Float; 3] {
    multiply(&D50_TO_D65, value)
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates for sRGB to XYZ. This is a two-hop conversion.
#[inline]
fn srgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let linear_srgb = rgb_to_linear_rgb(value);
    linear_srgb_to_xyz(&linear_srgb)
}

/// Convert coordinates for XYZ to sRGB. This is a two-hop conversion.
#[inline]
fn xyz_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    let linear_srgb = xyz_to_linear_srgb(value);
    linear_rgb_to_rgb(&linear_srgb)
}

/// Convert coordinates for Display P3 to XYZ. This is a two-hop conversion.
#[inline]
fn display_p3_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let linear_p3 = rgb_to_linear_rgb(value);
    linear_display_p3_to_xyz(&linear_p3)
}

/// Convert coordinates for XYZ to Display P3. This is a two-hop conversion.
#[inline]
fn xyz_to_display_p3(value: &[Float; 3]) -> [Float; 3] {
    let linear_p3 = xyz_to_linear_display_p3(value);
    linear_rgb_to_rgb(&linear_p3)
}

/// Convert coordinates for Oklch to XYZ. This is a two-hop conversion.
#[inline]
fn oklch_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let oklab = oklch_to_oklab(value);
    oklab_to_xyz(&oklab)
}

/// Convert coordinates for XYZ to Oklch. This is a two-hop conversion.
#[inline]
fn xyz_to_oklch(value: &[Float; 3]) -> [Float; 3] {
    let oklab = xyz_to_oklab(value);
    oklab_to_oklch(&oklab)
}

/// Convert coordinates for CIELAB to XYZ. This is a two-hop conversion.
#[inline]
fn lab_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let xyz_d50 = lab_to_xyz_d50(value);
    d50_to_d65(&xyz_d50)
}

/// Convert coordinates for XYZ to CIELAB. This is a two-hop conversion.
#[inline]
fn xyz_to_lab(value: &[Float; 3]) -> [Float; 3] {
    let xyz_d50 = d65_to_d50(value);
    xyz_d50_to_lab(&xyz_d50)
}

/// Convert coordinates for HSL to linear sRGB. This is a two-hop conversion.
#[inline]
fn hsl_to_linear_srgb(value: &[Float; 3]) -> [Float; 3] {
    let srgb = hsl_to_srgb(value);
    rgb_to_linear_rgb(&srgb)
}

/// Convert coordinates for linear sRGB to HSL. This is a two-hop conversion.
#[inline]
fn linear_srgb_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    let srgb = linear_rgb_to_rgb(value);
    srgb_to_hsl(&srgb)
}

/// Convert coordinates for XYZ D50 to CIELCh. This is a two-hop conversion.
#[inline]
fn xyz_d50_to_lch(value: &[Float; 3]) -> [Float; 3] {
    let lab = xyz_d50_to_lab(value);
    lab_to_lch(&lab)
}

/// Convert coordinates for CIELCh to XYZ D50. This is a two-hop conversion.
#[inline]
fn lch_to_xyz_d50(value: &[Float; 3]) -> [Float; 3] {
    let lab = lch_to_lab(value);
    lab_to_xyz_d50(&lab)
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates for HSL to XYZ. This is a three-hop conversion.
#[inline]
fn hsl_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let srgb = hsl_to_srgb(value);
    srgb_to_xyz(&srgb)
}

/// Convert coordinates for XYZ to HSL. This is a three-hop conversion.
#[inline]
fn xyz_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    let srgb = xyz_to_srgb(value);
    srgb_to_hsl(&srgb)
}

/// Convert coordinates for CIELCh to XYZ. This is a three-hop conversion.
#[inline]
fn lch_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let lab = lch_to_lab(value);
    lab_to_xyz(&lab)
}

/// Convert coordinates for XYZ to CIELCh. This is a three-hop conversion.
#[inline]
fn xyz_to_lch(value: &[Float; 3]) -> [Float; 3] {
    let lab = xyz_to_lab(value);
    lab_to_lch(&lab)
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert the coordinates from one color space to another.
///
/// This function normalizes not-a-number coordinates to zero and then converts
/// them to to the targeted color space, which may be the same as the original
/// color space. This function does not check whether the result is in gamut for
/// the targeted color space.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn convert(
    from_space: ColorSpace,
    to_space: ColorSpace,
    coordinates: &[Float; 3],
) -> [Float; 3] {
    use ColorSpace::*;

    // 1. Normalize coordinates. Be done if color spaces are the same.
    let coordinates = normalize(from_space, coordinates);
    if from_space == to_space {
        return coordinates;
    }

    // 2. Handle in-branch conversions that don't go through root XYZ
    match (from_space, to_space) {
        // Single-hop RGB conversions
        (Srgb, LinearSrgb) | (DisplayP3, LinearDisplayP3) => {
            return rgb_to_linear_rgb(&coordinates);
        }
        (LinearSrgb, Srgb) | (LinearDisplayP3, DisplayP3) => {
            return linear_rgb_to_rgb(&coordinates);
        }

        // HSL conversions
        (Hsl, Srgb) => return hsl_to_srgb(&coordinates),
        (Srgb, Hsl) => return srgb_to_hsl(&coordinates),
        (Hsl, LinearSrgb) => return hsl_to_linear_srgb(&coordinates),
        (LinearSrgb, Hsl) => return linear_srgb_to_hsl(&coordinates),

        // Oklab conversions
        (Oklch, Oklab) => return oklch_to_oklab(&coordinates),
        (Oklab, Oklch) => return oklab_to_oklch(&coordinates),

        // CIELAB conversions
        (Lch, Lab) => return lch_to_lab(&coordinates),
        (Lab, Lch) => return lab_to_lch(&coordinates),
        (XyzD50, Lab) => return xyz_d50_to_lab(&coordinates),
        (Lab, XyzD50) => return lab_to_xyz_d50(&coordinates),
        (XyzD50, Lch) => return xyz_d50_to_lch(&coordinates),
        (Lch, XyzD50) => return lch_to_xyz_d50(&coordinates),
        _ => (),
    };

    // 3a. Convert from source color space to root XYZ
    let intermediate = match from_space {
        Srgb => srgb_to_xyz(&coordinates),
        LinearSrgb => linear_srgb_to_xyz(&coordinates),
        Hsl => hsl_to_xyz(&coordinates),
        DisplayP3 => display_p3_to_xyz(&coordinates),
        LinearDisplayP3 => linear_display_p3_to_xyz(&coordinates),
        Oklch => oklch_to_xyz(&coordinates),
        Oklab => oklab_to_xyz(&coordinates),
        Lab => lab_to_xyz(&coordinates),
        Lch => lch_to_xyz(&coordinates),
        Xyz => coordinates,
        XyzD50 => d50_to_d65(&coordinates),
    };

    // 3b. Convert from root XYZ to target color space on different branch
    match to_space {
        Srgb => xyz_to_srgb(&intermediate),
        LinearSrgb => xyz_to_linear_srgb(&intermediate),
        Hsl => xyz_to_hsl(&intermediate),
        DisplayP3 => xyz_to_display_p3(&intermediate),
        LinearDisplayP3 => xyz_to_linear_display_p3(&intermediate),
        Oklch => xyz_to_oklch(&intermediate),
        Oklab => xyz_to_oklab(&intermediate),
        Lab => xyz_to_lab(&intermediate),
        Lch => xyz_to_lch(&intermediate),
        Xyz => intermediate,
        XyzD50 => d65_to_d50(&intermediate),
    }
}
