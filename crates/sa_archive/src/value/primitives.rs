use alloc::borrow::ToOwned;
use alloc::string::String;
use core::fmt::Write;

use crate::value::{Decoded, Format, Loss, Scalar};

// -----------------------------------------------------------------------------
// bool

impl Scalar for bool {
    /// Written as `true`/`false`, also reads `1`/`0`.
    fn decode(text: &str) -> Option<Decoded<Self>> {
        match text.trim() {
            "true" | "1" => Some(Decoded::exact(true)),
            "false" | "0" => Some(Decoded::exact(false)),
            _ => None,
        }
    }

    fn encode(&self, _format: &Format, out: &mut String) {
        out.push_str(if *self { "true" } else { "false" });
    }
}

// -----------------------------------------------------------------------------
// Integers

macro_rules! impl_integer {
    ($($ty:ty),+ $(,)?) => {$(
        impl Scalar for $ty {
            fn decode(text: &str) -> Option<Decoded<Self>> {
                text.trim().parse::<$ty>().ok().map(Decoded::exact)
            }

            fn encode(&self, _format: &Format, out: &mut String) {
                let _ = write!(out, "{self}");
            }
        }
    )+};
}

impl_integer!(i32, i64, u32);

// -----------------------------------------------------------------------------
// f64

/// More significant digits than this can not survive a round trip through `f64`.
const MAX_SIGNIFICANT_DIGITS: usize = 17;

/// Count the significant digits of a decimal mantissa.
fn significant_digits(text: &str) -> usize {
    let mantissa = match text.find(['e', 'E']) {
        Some(pos) => &text[..pos],
        None => text,
    };
    let digits = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .skip_while(|&b| b == b'0');
    let mut count = 0;
    let mut pending_zeros = 0;
    for digit in digits {
        if digit == b'0' {
            pending_zeros += 1;
        } else {
            count += pending_zeros + 1;
            pending_zeros = 0;
        }
    }
    count
}

impl Scalar for f64 {
    fn decode(text: &str) -> Option<Decoded<Self>> {
        let text = text.trim();
        let value = text.parse::<f64>().ok()?;
        if significant_digits(text) > MAX_SIGNIFICANT_DIGITS {
            Some(Decoded::lossy(value, Loss::Precision))
        } else {
            Some(Decoded::exact(value))
        }
    }

    /// The shortest text that parses back to the same value.
    ///
    /// Magnitudes from `1e-5` up to `1e16` are written in plain notation,
    /// everything else in exponent notation.
    fn encode(&self, _format: &Format, out: &mut String) {
        let magnitude = self.abs();
        if magnitude != 0.0 && magnitude.is_finite() && !(1e-5..1e16).contains(&magnitude) {
            let _ = write!(out, "{self:e}");
        } else {
            let _ = write!(out, "{self}");
        }
    }
}

// -----------------------------------------------------------------------------
// String

impl Scalar for String {
    /// Taken verbatim, whitespace included.
    fn decode(text: &str) -> Option<Decoded<Self>> {
        Some(Decoded::exact(text.to_owned()))
    }

    fn encode(&self, _format: &Format, out: &mut String) {
        out.push_str(self);
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    fn encode<T: Scalar>(value: T) -> String {
        let mut out = String::new();
        value.encode(&Format::default(), &mut out);
        out
    }

    #[test]
    fn booleans() {
        assert_eq!(bool::decode("true").map(|d| d.value), Some(true));
        assert_eq!(bool::decode("1").map(|d| d.value), Some(true));
        assert_eq!(bool::decode(" false ").map(|d| d.value), Some(false));
        assert!(bool::decode("yes").is_none());
        assert_eq!(encode(true), "true");
    }

    #[test]
    fn integers() {
        assert_eq!(i32::decode(" 42 ").map(|d| d.value), Some(42));
        assert!(i32::decode("4.2").is_none());
        assert_eq!(encode(-7_i64), "-7");
    }

    #[test]
    fn floats_round_trip_shortest() {
        for value in [45.678, 0.1, -0.0, 1.0, 123456.789, 2.5e-7, 3.53e17, f64::MAX, 1e-5] {
            let text = encode(value);
            let back = f64::decode(&text).unwrap();
            assert_eq!(back.value.to_bits(), value.to_bits(), "{text}");
            assert!(back.loss.is_none());
        }
        assert_eq!(encode(0.5), "0.5");
        assert_eq!(encode(10.0), "10");
        assert_eq!(encode(2.5e-7), "2.5e-7");
        assert_eq!(encode(3.53e17), "3.53e17");
    }

    #[test]
    fn float_precision_loss() {
        assert_eq!(significant_digits("0.000123"), 3);
        assert_eq!(significant_digits("1.2300"), 3);
        assert_eq!(significant_digits("100"), 1);
        assert_eq!(significant_digits("-1.5e+17"), 2);

        let decoded = f64::decode("0.123456789012345678901").unwrap();
        assert_eq!(decoded.loss, Some(Loss::Precision));
        assert!(f64::decode("1.2300000000000000000000").unwrap().loss.is_none());
        assert!(f64::decode("abc").is_none());
    }

    #[test]
    fn strings_are_verbatim() {
        assert_eq!(
            String::decode(" a b ").map(|d| d.value).as_deref(),
            Some(" a b ")
        );
    }
}
