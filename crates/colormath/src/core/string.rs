use crate::error::ColorFormatError;
use crate::{ColorSpace, Float};

/// Parse a color in hexadecimal format, with the leading `#` already removed.
/// This function handles three, four, six, and eight digits, with the last
/// digit or pair of digits for three and four digits being alpha.
fn parse_hex(s: &str) -> Result<([Float; 3], Option<Float>), ColorFormatError> {
    let factor = match s.len() {
        3 | 4 => 1,
        6 | 8 => 2,
        _ => return Err(ColorFormatError::UnexpectedCharacters),
    };

    if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorFormatError::MalformedHex);
    }

    fn parse_coordinate(s: &str, factor: usize, index: usize) -> Result<u8, ColorFormatError> {
        let t = s
            .get(factor * index..factor * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;

        Ok(if factor == 1 { 16 * n + n } else { n })
    }

    let c1 = parse_coordinate(s, factor, 0)?;
    let c2 = parse_coordinate(s, factor, 1)?;
    let c3 = parse_coordinate(s, factor, 2)?;
    let alpha = if s.len() == 4 || s.len() == 8 {
        Some(parse_coordinate(s, factor, 3)? as Float / 255.0)
    } else {
        None
    };

    Ok((crate::core::from_24bit(c1, c2, c3), alpha))
}

/// Determine whether the string looks like hexadecimal digits without the
/// leading `#`.
fn is_bare_hex(s: &str) -> bool {
    matches!(s.len(), 3 | 4 | 6 | 8) && s.bytes().all(|b| b.is_ascii_hexdigit())
}

// --------------------------------------------------------------------------------------------------------------------

/// A lexically valid argument of a CSS color function.
#[derive(Copy, Clone, Debug, PartialEq)]
enum Token {
    Number(Float),
    Percentage(Float),
    /// An angle, already converted to degrees.
    Angle(Float),
    None,
}

const ANGLE_UNITS: [(&str, Float); 4] = [
    ("deg", 1.0),
    ("grad", 0.9),
    ("rad", 180.0 / std::f64::consts::PI),
    ("turn", 360.0),
];

fn parse_number(s: &str) -> Result<Float, ColorFormatError> {
    let plausible = !s.is_empty()
        && s
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'+' | b'-' | b'e'));
    if !plausible {
        return Err(ColorFormatError::MalformedNumber);
    }

    s.parse().map_err(|_| ColorFormatError::MalformedNumber)
}

fn parse_token(s: &str) -> Result<Token, ColorFormatError> {
    if s == "none" {
        return Ok(Token::None);
    } else if let Some(number) = s.strip_suffix('%') {
        return parse_number(number).map(Token::Percentage);
    }

    // Check grad before rad.
    for (unit, factor) in ANGLE_UNITS {
        if let Some(number) = s.strip_suffix(unit) {
            return parse_number(number).map(|n| Token::Angle(n * factor));
        }
    }

    let starts_numeric = s
        .bytes()
        .next()
        .is_some_and(|b| b.is_ascii_digit() || matches!(b, b'.' | b'+' | b'-'));
    let ends_alphabetic = s.bytes().last().is_some_and(|b| b.is_ascii_alphabetic());
    if starts_numeric && ends_alphabetic {
        return Err(ColorFormatError::UnexpectedUnit);
    }

    parse_number(s).map(Token::Number)
}

/// How to interpret a color function's argument.
#[derive(Copy, Clone, Debug)]
enum Channel {
    /// Numbers range `0..=255`, percentages `0%..=100%`.
    Byte,
    /// Numbers and percentages both range `0..=100`.
    Percent,
    /// Numbers are as is, `100%` is the given reference value.
    Scaled(Float),
    /// Numbers are degrees, angles may have any unit.
    Hue,
}

impl Channel {
    fn resolve(&self, token: Token) -> Result<Float, ColorFormatError> {
        use Channel::*;

        match (*self, token) {
            (_, Token::None) => Ok(Float::NAN),
            (Byte, Token::Number(n)) => Ok(n / 255.0),
            (Byte | Percent, Token::Percentage(p)) => Ok(p / 100.0),
            (Percent, Token::Number(n)) => Ok(n / 100.0),
            (Scaled(_), Token::Number(n)) => Ok(n),
            (Scaled(reference), Token::Percentage(p)) => Ok(p / 100.0 * reference),
            (Hue, Token::Number(n) | Token::Angle(n)) => Ok(n),
            _ => Err(ColorFormatError::UnexpectedUnit),
        }
    }
}

/// Resolve the alpha argument, clamping it to unit range.
fn resolve_alpha(s: &str) -> Result<Option<Float>, ColorFormatError> {
    let alpha = match parse_token(s)? {
        Token::None => return Ok(None),
        Token::Number(n) => n,
        Token::Percentage(p) => p / 100.0,
        Token::Angle(_) => return Err(ColorFormatError::UnexpectedUnit),
    };

    Ok(Some(alpha.clamp(0.0, 1.0)))
}

/// Split the body of a color function into coordinates and alpha. With
/// `legacy`, arguments may also be comma-separated.
fn split_arguments(body: &str, legacy: bool) -> Result<(Vec<&str>, Option<&str>), ColorFormatError> {
    if body.contains(',') {
        if !legacy || body.contains('/') {
            return Err(ColorFormatError::MixedSeparators);
        }

        let mut arguments = Vec::with_capacity(4);
        for argument in body.split(',').map(str::trim) {
            if argument.is_empty() {
                return Err(ColorFormatError::MissingCoordinate);
            } else if argument.contains(char::is_whitespace) {
                return Err(ColorFormatError::MixedSeparators);
            }
            arguments.push(argument);
        }

        return match arguments.len() {
            0..=2 => Err(ColorFormatError::MissingCoordinate),
            3 => Ok((arguments, None)),
            4 => {
                let alpha = arguments.pop();
                Ok((arguments, alpha))
            }
            _ => Err(ColorFormatError::TooManyCoordinates),
        };
    }

    let mut parts = body.split('/');
    let coordinates: Vec<&str> = parts.next().unwrap_or("").split_whitespace().collect();
    let alpha = match parts.next().map(str::trim) {
        None => None,
        Some("") => return Err(ColorFormatError::MissingCoordinate),
        Some(alpha) if alpha.contains(char::is_whitespace) => {
            return Err(ColorFormatError::TooManyCoordinates)
        }
        Some(alpha) => Some(alpha),
    };
    if parts.next().is_some() {
        return Err(ColorFormatError::MixedSeparators);
    }

    match coordinates.len() {
        0..=2 => Err(ColorFormatError::MissingCoordinate),
        3 => Ok((coordinates, alpha)),
        _ => Err(ColorFormatError::TooManyCoordinates),
    }
}

const COLOR_SPACES: [(&str, ColorSpace); 7] = [
    ("srgb", ColorSpace::Srgb),
    ("srgb-linear", ColorSpace::LinearSrgb),
    ("display-p3", ColorSpace::DisplayP3),
    ("--linear-display-p3", ColorSpace::LinearDisplayP3),
    ("xyz", ColorSpace::Xyz),
    ("xyz-d65", ColorSpace::Xyz),
    ("xyz-d50", ColorSpace::XyzD50),
];

/// Parse a CSS color function. This function recognizes `rgb()`, `rgba()`,
/// `hsl()`, and `hsla()` in legacy comma-separated and modern syntax as well
/// as `lab()`, `lch()`, `oklab()`, `oklch()`, and `color()` in modern syntax.
fn parse_css(
    name: &str,
    rest: &str,
) -> Result<(ColorSpace, [Float; 3], Option<Float>), ColorFormatError> {
    use Channel::*;
    use ColorSpace::*;

    let body = rest
        .strip_suffix(')')
        .ok_or(ColorFormatError::NoClosingParenthesis)?;

    let (space, channels, legacy, body) = match name.trim_end() {
        "rgb" | "rgba" => (Srgb, [Byte, Byte, Byte], true, body),
        "hsl" | "hsla" => (Hsl, [Hue, Percent, Percent], true, body),
        "lab" => (Lab, [Scaled(100.0), Scaled(125.0), Scaled(125.0)], false, body),
        "lch" => (Lch, [Scaled(100.0), Scaled(150.0), Hue], false, body),
        "oklab" => (Oklab, [Scaled(1.0), Scaled(0.4), Scaled(0.4)], false, body),
        "oklch" => (Oklch, [Scaled(1.0), Scaled(0.4), Hue], false, body),
        "color" => {
            let body = body.trim_start();
            let end = body.find(char::is_whitespace).unwrap_or(body.len());
            let space = COLOR_SPACES
                .iter()
                .find(|(name, _)| *name == &body[..end])
                .map(|(_, space)| *space)
                .ok_or(ColorFormatError::UnknownColorSpace)?;
            (space, [Scaled(1.0); 3], false, &body[end..])
        }
        _ => return Err(ColorFormatError::UnknownFormat),
    };

    let (arguments, alpha) = split_arguments(body, legacy)?;

    let mut coordinates = [0.0; 3];
    for (index, argument) in arguments.iter().enumerate() {
        coordinates[index] = channels[index].resolve(parse_token(argument)?)?;
    }

    let alpha = match alpha {
        Some(alpha) => resolve_alpha(alpha)?,
        None => None,
    };

    Ok((space, coordinates, alpha))
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse the string into a color.
///
/// Before trying to parse the string, this function trims leading and
/// trailing white space and converts ASCII letters to lowercase. It then
/// recognizes:
///
///   * hexadecimal colors with three, four, six, or eight digits and an
///     optional leading `#`;
///   * the keyword `transparent` and the CSS named colors;
///   * the CSS functions `rgb()`, `rgba()`, `hsl()`, `hsla()`, `lab()`,
///     `lch()`, `oklab()`, `oklch()`, and `color()`.
///
/// CSS functions accept `none` for missing components, percentages, angle
/// units for hues, and an optional alpha after a slash, or as fourth argument
/// in legacy syntax. Alpha is clamped to unit range.
pub(crate) fn parse(s: &str) -> Result<(ColorSpace, [Float; 3], Option<Float>), ColorFormatError> {
    let lowercase = s.trim().to_ascii_lowercase(); // Keep around for fn scope
    let s = lowercase.as_str();

    if s.is_empty() {
        return Err(ColorFormatError::Empty);
    } else if let Some(hex) = s.strip_prefix('#') {
        let (coordinates, alpha) = parse_hex(hex)?;
        return Ok((ColorSpace::Srgb, coordinates, alpha));
    } else if s == "transparent" {
        return Ok((ColorSpace::Srgb, [0.0, 0.0, 0.0], Some(0.0)));
    }

    if let Some((name, rest)) = s.split_once('(') {
        return parse_css(name, rest);
    } else if s.ends_with(')') {
        return Err(ColorFormatError::NoOpeningParenthesis);
    }

    if let Some(named) = palette::named::from_str(s) {
        let coordinates = crate::core::from_24bit(named.red, named.green, named.blue);
        return Ok((ColorSpace::Srgb, coordinates, None));
    } else if is_bare_hex(s) {
        let (coordinates, alpha) = parse_hex(s)?;
        return Ok((ColorSpace::Srgb, coordinates, alpha));
    }

    Err(ColorFormatError::UnknownFormat)
}

// --------------------------------------------------------------------------------------------------------------------

fn css_prefix(space: ColorSpace) -> &'static str {
    use ColorSpace::*;
    match space {
        Srgb => "color(srgb ",
        LinearSrgb => "color(srgb-linear ",
        Hsl => "hsl(",
        DisplayP3 => "color(display-p3 ",
        LinearDisplayP3 => "color(--linear-display-p3 ",
        Oklab => "oklab(",
        Oklch => "oklch(",
        Lab => "lab(",
        Lch => "lch(",
        Xyz => "color(xyz ",
        XyzD50 => "color(xyz-d50 ",
    }
}

/// Write the number with at most `digits` digits after the decimal and no
/// trailing zeros.
fn write_number(f: &mut std::fmt::Formatter<'_>, number: Float, factor: Float) -> std::fmt::Result {
    // CSS mandates NO trailing zeros whatsoever. But formatting floats with a
    // precision produces trailing zeros. Rounding avoids them, for the most
    // part. If fractional part is zero, we do need an explicit precision---of
    // zero!
    let mut n = (number * factor).round() / factor;
    if n == 0.0 {
        n = 0.0;
    }

    if n == n.trunc() {
        f.write_fmt(format_args!("{:.0}", n))
    } else {
        f.write_fmt(format_args!("{}", n))
    }
}

/// Format the color as a string.
///
/// This function formats the given cooordinates for the given color space as a
/// CSS color with space-separated arguments and, if present, alpha after a
/// slash. It respects the formatter's precision, defaulting to 5 digits past
/// the decimal. Since hues are up to two orders of magnitude larger than
/// other coordinates, this function uses a precision smaller by 2 for
/// degrees. HSL saturation and lightness are formatted as percentages.
pub(crate) fn format(
    space: ColorSpace,
    coordinates: &[Float; 3],
    alpha: Option<Float>,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    f.write_str(css_prefix(space))?;

    let factor = (10.0 as Float).powi(f.precision().unwrap_or(5) as i32);
    for (index, coordinate) in coordinates.iter().enumerate() {
        if coordinate.is_nan() {
            f.write_str("none")?;
        } else if space.hue_index() == Some(index) {
            write_number(f, *coordinate, factor / 100.0)?;
        } else if space == ColorSpace::Hsl {
            write_number(f, coordinate * 100.0, factor / 100.0)?;
            f.write_str("%")?;
        } else {
            write_number(f, *coordinate, factor)?;
        }

        if index < 2 {
            f.write_str(" ")?;
        }
    }

    if let Some(alpha) = alpha {
        f.write_str(" / ")?;
        write_number(f, alpha, factor)?;
    }

    f.write_str(")")
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{parse, parse_hex, parse_token, ColorFormatError, Token};
    use crate::ColorSpace::*;
    use crate::Float;

    fn assert_parses(s: &str, space: crate::ColorSpace, expected: [Float; 3], alpha: Option<Float>) {
        let (actual_space, actual, actual_alpha) =
            parse(s).unwrap_or_else(|e| panic!("{:?} should parse but: {}", s, e));
        assert_eq!(actual_space, space, "{:?}", s);
        for (a, e) in actual.iter().zip(expected.iter()) {
            if e.is_nan() {
                assert!(a.is_nan(), "{:?} yields {:?}", s, actual);
            } else {
                assert!((a - e).abs() < 1e-9, "{:?} yields {:?}", s, actual);
            }
        }
        match (actual_alpha, alpha) {
            (None, None) => (),
            (Some(a), Some(e)) => assert!((a - e).abs() < 1e-9, "{:?} has alpha {}", s, a),
            _ => panic!("{:?} has alpha {:?}, not {:?}", s, actual_alpha, alpha),
        }
    }

    #[test]
    fn test_parse_hex() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hex("123")?.0, crate::core::from_24bit(0x11, 0x22, 0x33));
        assert_eq!(parse_hex("112233")?.0, crate::core::from_24bit(0x11, 0x22, 0x33));
        assert_eq!(parse_hex("112233")?.1, None);
        assert_eq!(parse_hex("1234")?.1, Some(0x44 as Float / 255.0));
        assert_eq!(parse_hex("11223380")?.1, Some(0x80 as Float / 255.0));
        assert_eq!(parse_hex("ff"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse_hex("12345"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse_hex("💩"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hex("0g0"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hex("+ff"), Err(ColorFormatError::MalformedHex));

        assert_parses("  #FF0000 ", Srgb, [1.0, 0.0, 0.0], None);
        assert_parses("00ff00", Srgb, [0.0, 1.0, 0.0], None);
        assert_parses("#0000ff80", Srgb, [0.0, 0.0, 1.0], Some(128.0 / 255.0));
        Ok(())
    }

    #[test]
    fn test_parse_token() {
        assert_eq!(parse_token("none"), Ok(Token::None));
        assert_eq!(parse_token("50%"), Ok(Token::Percentage(50.0)));
        assert_eq!(parse_token("-1.5e2"), Ok(Token::Number(-150.0)));
        assert_eq!(parse_token("0.5turn"), Ok(Token::Angle(180.0)));
        assert_eq!(parse_token("100grad"), Ok(Token::Angle(90.0)));
        assert_eq!(parse_token("10px"), Err(ColorFormatError::UnexpectedUnit));
        assert_eq!(parse_token("abc"), Err(ColorFormatError::MalformedNumber));
        assert_eq!(parse_token("0..1"), Err(ColorFormatError::MalformedNumber));
        assert_eq!(parse_token("inf"), Err(ColorFormatError::MalformedNumber));
        assert_eq!(parse_token("%"), Err(ColorFormatError::MalformedNumber));
    }

    #[test]
    fn test_parse_rgb_hsl() {
        assert_parses("rgb(255, 0, 0)", Srgb, [1.0, 0.0, 0.0], None);
        assert_parses("rgba(0,0,0,0.5)", Srgb, [0.0, 0.0, 0.0], Some(0.5));
        assert_parses("RGB(0 51 102 / 25%)", Srgb, [0.0, 0.2, 0.4], Some(0.25));
        assert_parses("rgb(100% 50% none)", Srgb, [1.0, 0.5, Float::NAN], None);
        assert_parses("rgb(0 0 0 / 1.5)", Srgb, [0.0, 0.0, 0.0], Some(1.0));
        assert_parses("hsl(120, 100%, 50%)", Hsl, [120.0, 1.0, 0.5], None);
        assert_parses("hsla(0.5turn 40 60 / 0.1)", Hsl, [180.0, 0.4, 0.6], Some(0.1));
        assert_parses("hsl(none 0% 50%)", Hsl, [Float::NAN, 0.0, 0.5], None);
    }

    #[test]
    fn test_parse_lab() {
        assert_parses("lab(50% 40 -20)", Lab, [50.0, 40.0, -20.0], None);
        assert_parses("lab(50 100% -100%)", Lab, [50.0, 125.0, -125.0], None);
        assert_parses("lch(70 50% 1rad)", Lch, [70.0, 75.0, 57.29577951308232], None);
        assert_parses("oklab(0.5 -0.1 0.1)", Oklab, [0.5, -0.1, 0.1], None);
        assert_parses("oklch(70% 50% 30deg / .8)", Oklch, [0.7, 0.2, 30.0], Some(0.8));
        assert_parses("oklch(0.7 0 none)", Oklch, [0.7, 0.0, Float::NAN], None);
    }

    #[test]
    fn test_parse_color() {
        assert_parses("color(srgb 1 0.5 0)", Srgb, [1.0, 0.5, 0.0], None);
        assert_parses("color(display-p3 100% 0 0 / 0.5)", DisplayP3, [1.0, 0.0, 0.0], Some(0.5));
        assert_parses("color( xyz-d50 0.1 0.2 0.3 )", XyzD50, [0.1, 0.2, 0.3], None);
        assert_parses("color(srgb-linear 1 1 1)", LinearSrgb, [1.0, 1.0, 1.0], None);
        assert_parses("color(xyz-d65 1 1 1)", Xyz, [1.0, 1.0, 1.0], None);
    }

    #[test]
    fn test_parse_named() {
        assert_parses("red", Srgb, [1.0, 0.0, 0.0], None);
        assert_parses(
            "  CornflowerBlue  ",
            Srgb,
            [100.0 / 255.0, 149.0 / 255.0, 237.0 / 255.0],
            None,
        );
        assert_parses("transparent", Srgb, [0.0, 0.0, 0.0], Some(0.0));
        assert_eq!(parse("reddish"), Err(ColorFormatError::UnknownFormat));
    }

    #[test]
    fn test_parse_errors() {
        use ColorFormatError::*;

        assert_eq!(parse("   "), Err(Empty));
        assert_eq!(parse("hwb(0 0% 0%)"), Err(UnknownFormat));
        assert_eq!(parse("color srgb 1 1 1)"), Err(NoOpeningParenthesis));
        assert_eq!(parse("oklab(1 2 3"), Err(NoClosingParenthesis));
        assert_eq!(parse("color(nemo 1 1 1)"), Err(UnknownColorSpace));
        assert_eq!(parse("rgb(1 2)"), Err(MissingCoordinate));
        assert_eq!(parse("rgb(1, 2,)"), Err(MissingCoordinate));
        assert_eq!(parse("rgb(1 2 3 /)"), Err(MissingCoordinate));
        assert_eq!(parse("oklab(1 2 3 4)"), Err(TooManyCoordinates));
        assert_eq!(parse("rgb(1, 2, 3, 4, 5)"), Err(TooManyCoordinates));
        assert_eq!(parse("rgb(1, 2 3)"), Err(MixedSeparators));
        assert_eq!(parse("oklab(1, 2, 3)"), Err(MixedSeparators));
        assert_eq!(parse("rgb(1 2 3 / 4 / 5)"), Err(MixedSeparators));
        assert_eq!(parse("rgb(x 2 3)"), Err(MalformedNumber));
        assert_eq!(parse("rgb(10deg 0 0)"), Err(UnexpectedUnit));
        assert_eq!(parse("hsl(10% 0 0)"), Err(UnexpectedUnit));
    }

    #[test]
    fn test_format() {
        // Color as Display directly invokes format().
        use crate::Color;

        let clr = Color::srgb(0.3, 0.336, 0.123456);
        assert_eq!(clr.to_string(), "color(srgb 0.3 0.336 0.12346)");
        assert_eq!(format!("{:.2}", clr), "color(srgb 0.3 0.34 0.12)");
        assert_eq!(Color::oklab(1.0, 0.0, 0.0).to_string(), "oklab(1 0 0)");
        assert_eq!(
            Color::oklch(0.5, 0.1, 167.0).to_string(),
            "oklch(0.5 0.1 167)"
        );
        assert_eq!(
            Color::new(Hsl, [120.0, 1.0, 0.25]).to_string(),
            "hsl(120 100% 25%)"
        );
        assert_eq!(
            Color::new(Lch, [50.0, 30.0, Float::NAN]).to_string(),
            "lch(50 30 none)"
        );
        assert_eq!(
            Color::srgb(1.0, 0.0, 0.0).with_alpha(0.5).to_string(),
            "color(srgb 1 0 0 / 0.5)"
        );
    }
}
