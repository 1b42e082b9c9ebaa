use crate::Float;

/// An extension trait for floating point numbers.
pub trait FloatExt: Sized {
    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. Typically, that factor is a power of ten, which directly
    /// translates into significant digits after the decimal.
    const ROUNDING_FACTOR: Self;

    /// Round to the given number of digits after the decimal point.
    ///
    /// Halfway cases round away from zero and negative zero becomes zero.
    /// Not-a-number stays not-a-number.
    fn round_to(self, digits: u8) -> Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e12;

    fn round_to(self, digits: u8) -> Self {
        let factor = 10f64.powi(digits as i32);
        let rounded = (self * factor).round() / factor;
        if rounded == 0.0 {
            0.0
        } else {
            rounded
        }
    }
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e4;

    fn round_to(self, digits: u8) -> Self {
        let factor = 10f32.powi(digits as i32);
        let rounded = (self * factor).round() / factor;
        if rounded == 0.0 {
            0.0
        } else {
            rounded
        }
    }
}

#[cfg(test)]
mod test {
    use super::FloatExt;

    #[test]
    fn test_round_to() {
        assert_eq!(0.123456_f64.round_to(3), 0.123);
        assert_eq!(0.1235_f64.round_to(2), 0.12);
        assert_eq!(2.5_f64.round_to(0), 3.0);
        assert_eq!((-0.0001_f64).round_to(2).to_bits(), 0.0_f64.to_bits());
        assert!(f64::NAN.round_to(3).is_nan());
        assert_eq!(1.0_f32.round_to(10), 1.0);
    }
}
