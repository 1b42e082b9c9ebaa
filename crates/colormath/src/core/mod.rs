mod conversion;
mod difference;
mod equality;
mod gamut;
mod math;
mod space;
mod string;

// conversion
pub(crate) use conversion::{convert, from_24bit, to_24bit};

// difference
pub use difference::HueInterpolation;
pub(crate) use difference::{delta_e_ok, interpolate, prepare_to_interpolate};

// equality
#[cfg(test)]
pub(crate) use equality::assert_same_coordinates;
pub use equality::to_eq_bits;
pub(crate) use equality::{normalize, to_eq_coordinates};

// gamut
pub(crate) use gamut::{clip, in_gamut, to_gamut};

// math
pub use math::FloatExt;

// space
pub use space::ColorSpace;

// string
pub(crate) use string::{format, parse};
