use std::fmt::{Debug, Display, Formatter};

use itertools::Itertools;

/// Magnitude with one or two fraction digits and comma-separated thousands.
pub struct FormattedMagnitude(pub f64);

impl Debug for FormattedMagnitude {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for FormattedMagnitude {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return write!(f, "NaN");
        }
        if value.is_sign_negative() && value != 0.0 {
            write!(f, "-")?;
        }
        if value.is_infinite() {
            return write!(f, "∞");
        }

        let mut digits = format!("{:.2}", value.abs());
        if digits.ends_with('0') {
            digits.pop();
        }
        let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "0"));
        let grouped = integer.as_bytes().rchunks(3).rev().map(String::from_utf8_lossy).join(",");
        write!(f, "{grouped}.{fraction}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_digits() {
        assert_eq!(FormattedMagnitude(7.04).to_string(), "7.04");
        assert_eq!(FormattedMagnitude(32.0).to_string(), "32.0");
        assert_eq!(FormattedMagnitude(7.1).to_string(), "7.1");
        assert_eq!(FormattedMagnitude(21.068_838_5).to_string(), "21.07");
        assert_eq!(FormattedMagnitude(0.0).to_string(), "0.0");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(FormattedMagnitude(1_234.567).to_string(), "1,234.57");
        assert_eq!(FormattedMagnitude(1_000_000.0).to_string(), "1,000,000.0");
        assert_eq!(FormattedMagnitude(999.999).to_string(), "1,000.0");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(FormattedMagnitude(f64::INFINITY).to_string(), "∞");
        assert_eq!(FormattedMagnitude(f64::NEG_INFINITY).to_string(), "-∞");
        assert_eq!(FormattedMagnitude(f64::NAN).to_string(), "NaN");
        assert_eq!(FormattedMagnitude(-2.5).to_string(), "-2.5");
    }
}
