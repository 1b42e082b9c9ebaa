//! # colormath
//!
//! High-resolution colors for the strings people actually type: hex codes,
//! CSS color functions, and named colors.
//!
//! ## 1. Overview
//!
//! The crate's main abstractions are:
//!
//!   * [`Color`] implements **high-resolution colors** by combining a
//!     [`ColorSpace`] with three [`Float`] coordinates and an optional alpha.
//!     Its methods expose conversion between color spaces, interpolation
//!     between colors, color difference, as well as gamut testing, clipping,
//!     and mapping.
//!   * [`Gradient`] extends two-color interpolation to any number of color
//!     stops, which is what color scales need.
//!   * [`error::ColorFormatError`] names everything that can go wrong when
//!     parsing a color string.
//!
//! ```
//! # use colormath::{Color, ColorSpace};
//! # use colormath::error::ColorFormatError;
//! # use std::str::FromStr;
//! let tomato = Color::from_str("oklch(0.7 0.19 35)")?;
//! assert_eq!(tomato.space(), ColorSpace::Oklch);
//! assert_eq!(tomato.to(ColorSpace::Srgb).to_hex_format(), "#fd6844");
//! # Ok::<(), ColorFormatError>(())
//! ```
//!
//! ## 2. Parsing
//!
//! [`Color`]'s [`FromStr`](std::str::FromStr) implementation recognizes
//! hashed hexadecimal colors with three, four, six, or eight digits, the CSS
//! functions `rgb()`, `rgba()`, `hsl()`, `hsla()`, `lab()`, `lch()`,
//! `oklab()`, `oklch()`, and `color()`, the keyword `transparent`, and the
//! CSS named colors. Named colors come from the
//! [palette](https://crates.io/crates/palette) crate's table.
//!
//! ## 3. Acknowledgements
//!
//! The conversion formulae follow the [Color.js](https://colorjs.io) library
//! and the [CSS Color 4](https://www.w3.org/TR/css-color-4/) specification,
//! which also defines the algorithms for gamut mapping and interpolation.

/// The floating point type in use.
pub type Float = f64;

/// [`Float`]'s bits.
pub type Bits = u64;

mod color;
mod core;
pub mod error;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use color::{Color, Gradient, Interpolator};
pub use core::{ColorSpace, FloatExt, HueInterpolation};
