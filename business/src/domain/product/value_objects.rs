use serde::{Deserialize, Serialize};

use super::errors::ProductError;

/// What to do with price input that is not a number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceParsePolicy {
    /// Use the longest numeric prefix, falling back to `0.0`.
    #[default]
    Lenient,
    /// Reject anything that is not a finite number.
    Strict,
}

impl std::fmt::Display for PriceParsePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceParsePolicy::Lenient => write!(f, "lenient"),
            PriceParsePolicy::Strict => write!(f, "strict"),
        }
    }
}

impl std::str::FromStr for PriceParsePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lenient" => Ok(PriceParsePolicy::Lenient),
            "strict" => Ok(PriceParsePolicy::Strict),
            _ => Err(format!("Invalid price parse policy: {}", s)),
        }
    }
}

/// Price as typed into a form, converted to a number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Price(f64);

impl Price {
    pub fn parse(raw: &str, policy: PriceParsePolicy) -> Result<Self, ProductError> {
        match policy {
            PriceParsePolicy::Lenient => {
                Ok(Self(numeric_prefix(raw).parse::<f64>().unwrap_or(0.0)))
            }
            PriceParsePolicy::Strict => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .map(Self)
                .ok_or(ProductError::InvalidPrice),
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Longest leading `[+-]digits[.digits][e[+-]digits]` after leading whitespace.
/// Empty when the input does not start with a number.
fn numeric_prefix(raw: &str) -> &str {
    let s = raw.trim_start_matches([' ', '\t', '\n', '\r', '\x0b', '\x0c']);
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;

    let mut mantissa_digits = int_digits;
    if bytes.get(end) == Some(&b'.') {
        let frac_digits = digits_from(end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
            mantissa_digits += frac_digits;
        }
    }

    if mantissa_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_digits = digits_from(end + 1 + sign);
        if exp_digits > 0 {
            end += 1 + sign + exp_digits;
        }
    }

    &s[..end]
}
