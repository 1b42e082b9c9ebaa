//! Utility module with colormath's errors.

/// An erroneous color format.
///
/// The variants carry no state. The offending string is known to the caller,
/// which also knows how to describe where it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// An empty string or one containing only white space.
    Empty,

    /// A color format that is neither hexadecimal, a known CSS function, nor a
    /// named color. For example, `hwb(0 0% 0%)` and `reddish` are unknown.
    UnknownFormat,

    /// A hexadecimal color format with an unexpected number of characters.
    /// For example, `#00` is missing a hexadecimal digit and `#12345` has one
    /// too many for `#rrggbb`.
    UnexpectedCharacters,

    /// A hexadecimal color format with a character that is not a hexadecimal
    /// digit. For example, `#efg` has a malformed third coordinate.
    MalformedHex,

    /// A parenthesized color format without the opening parenthesis. For
    /// example, `color display-p3 0 0 0)` is missing the opening parenthesis.
    NoOpeningParenthesis,

    /// A parenthesized color format without the closing parenthesis. For
    /// example, `oklab(1 2 3` is missing the closing parenthesis.
    NoClosingParenthesis,

    /// A color format that is using an unknown color space. For example,
    /// `color(unknown 1 1 1)` uses an unknown color space.
    UnknownColorSpace,

    /// A color format with fewer than three coordinates. For example,
    /// `rgb(0 0)` is missing the third coordinate.
    MissingCoordinate,

    /// A color format with more than three coordinates plus alpha. For
    /// example, `oklab(1 2 3 4)` has one coordinate too many.
    TooManyCoordinates,

    /// A color format that mixes comma and space separated arguments or uses
    /// more than one slash. For example, `rgb(1, 2 3)` mixes both.
    MixedSeparators,

    /// A color format that has a malformed number as coordinate. For example,
    /// `color(srgb 1.0 0..1 0.0)` has a malformed second coordinate.
    MalformedNumber,

    /// A color format with a unit that does not fit the coordinate. For
    /// example, `rgb(10deg 0 0)` uses an angle for red.
    UnexpectedUnit,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            Empty => f.write_str("color format should not be empty"),
            UnknownFormat => f.write_str(
                "color format should be hex, a named color, or one of `rgb()`, `hsl()`, \
                `lab()`, `lch()`, `oklab()`, `oklch()`, `color()`",
            ),
            UnexpectedCharacters => {
                f.write_str("hex color format should have 3, 4, 6, or 8 digits")
            }
            MalformedHex => f.write_str("hex color format should contain only hexadecimal digits"),
            NoOpeningParenthesis => {
                f.write_str("color format should include an opening parenthesis but has none")
            }
            NoClosingParenthesis => {
                f.write_str("color format should include a closing parenthesis but has none")
            }
            UnknownColorSpace => {
                f.write_str("color format should have known color space but does not")
            }
            MissingCoordinate => {
                f.write_str("color format should have 3 coordinates but is missing one")
            }
            TooManyCoordinates => {
                f.write_str("color format should have 3 coordinates and optional alpha but has more")
            }
            MixedSeparators => {
                f.write_str("color format should separate arguments consistently but does not")
            }
            MalformedNumber => f.write_str("color format coordinates should be numbers but are not"),
            UnexpectedUnit => f.write_str("color format coordinate has a unit it does not accept"),
        }
    }
}

impl std::error::Error for ColorFormatError {}
