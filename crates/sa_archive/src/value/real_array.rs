use alloc::string::String;
use alloc::vec::Vec;

use crate::value::{Decoded, Format, Loss, Scalar};

// -----------------------------------------------------------------------------
// RealArray

/// A list of floats written as one whitespace separated text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RealArray(pub Vec<f64>);

impl RealArray {
    #[inline]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for RealArray {
    #[inline]
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl Scalar for RealArray {
    fn decode(text: &str) -> Option<Decoded<Self>> {
        let mut values = Vec::new();
        let mut lossy = false;
        for item in text.split_whitespace() {
            let decoded = f64::decode(item)?;
            lossy |= decoded.loss.is_some();
            values.push(decoded.value);
        }
        if lossy {
            Some(Decoded::lossy(Self(values), Loss::Precision))
        } else {
            Some(Decoded::exact(Self(values)))
        }
    }

    fn encode(&self, format: &Format, out: &mut String) {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            value.encode(format, out);
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn space_delimited() {
        let decoded = RealArray::decode(" 0 120.5\n360 ").unwrap();
        assert_eq!(decoded.value.as_slice(), &[0.0, 120.5, 360.0]);

        let mut out = String::new();
        decoded.value.encode(&Format::default(), &mut out);
        assert_eq!(out, "0 120.5 360");

        assert!(RealArray::decode("1 two 3").is_none());
        assert_eq!(RealArray::decode("").unwrap().value, RealArray(vec![]));
    }
}
