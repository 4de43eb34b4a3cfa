//! CLDR plural operands.
//!
//! Operands are defined over the displayed decimal form of a number, so every
//! input is first brought into a [`PositionalDecimal`] (integer digits and
//! fraction digits, sign dropped, exponent expanded) and the operands are
//! counted from those digit strings.
//!
//! Binary floats cannot carry trailing zeros: `2.0_f64` and `2_f64` are the
//! same value and both yield `v = 0`. Inexact binary fractions such as
//! `0.1_f32` widen to their full expansion. Pass a decimal string when visible
//! fraction digits matter.

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::{CoreError, CoreResult};

const MAX_EXPONENT: i64 = 4096;

/// A number whose plural category is requested.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NumericInput<'a> {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Decimal(&'a str),
}

macro_rules! numeric_input_from {
    ($variant:ident as $target:ty: $($source:ty),*) => {
        $(
            impl From<$source> for NumericInput<'_> {
                fn from(value: $source) -> Self {
                    NumericInput::$variant(value as $target)
                }
            }
        )*
    };
}

numeric_input_from!(Signed as i64: i8, i16, i32, i64, isize);
numeric_input_from!(Unsigned as u64: u8, u16, u32, u64, usize);
numeric_input_from!(Float as f64: f32, f64);

impl<'a> From<&'a str> for NumericInput<'a> {
    fn from(value: &'a str) -> Self {
        NumericInput::Decimal(value)
    }
}

impl<'a> From<&'a String> for NumericInput<'a> {
    fn from(value: &'a String) -> Self {
        NumericInput::Decimal(value.as_str())
    }
}

/// Sign-stripped positional decimal: `integer.fraction`.
///
/// Either part may be empty (`".5"` has no integer digits, `"7"` has no
/// fraction digits). Leading zeros of the integer part and trailing zeros of
/// the fraction part are kept as written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PositionalDecimal {
    integer: String,
    fraction: String,
}

impl PositionalDecimal {
    /// Strict parse of an optionally signed decimal with an optional exponent.
    pub fn parse(input: &str) -> CoreResult<Self> {
        if input.is_empty() {
            return Err(CoreError::InvalidNumber("number is empty"));
        }
        let unsigned = input
            .strip_prefix('-')
            .or_else(|| input.strip_prefix('+'))
            .unwrap_or(input);

        let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
            Some(idx) => (&unsigned[..idx], Some(&unsigned[idx + 1..])),
            None => (unsigned, None),
        };
        let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

        if !is_digits(integer) || !is_digits(fraction) {
            return Err(CoreError::InvalidNumber("unexpected character in number"));
        }
        if integer.is_empty() && fraction.is_empty() {
            return Err(CoreError::InvalidNumber("number has no digits"));
        }

        let exponent = match exponent {
            Some(text) => parse_exponent(text)?,
            None => 0,
        };
        Ok(shift_point(integer, fraction, exponent))
    }

    /// Best-effort conversion of a binary float, see the module docs.
    pub fn from_float(value: f64) -> CoreResult<Self> {
        if !value.is_finite() {
            return Err(CoreError::InvalidNumber("number is not finite"));
        }
        // `Display` for floats is positional and round-trips; the sign is
        // dropped by `parse`.
        Self::parse(&format!("{value}"))
    }

    pub fn integer_digits(&self) -> &str {
        &self.integer
    }

    pub fn fraction_digits(&self) -> &str {
        &self.fraction
    }
}

impl fmt::Display for PositionalDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let integer = if self.integer.is_empty() {
            "0"
        } else {
            self.integer.as_str()
        };
        if self.fraction.is_empty() {
            f.write_str(integer)
        } else {
            write!(f, "{integer}.{}", self.fraction)
        }
    }
}

fn is_digits(value: &str) -> bool {
    value.bytes().all(|byte| byte.is_ascii_digit())
}

fn parse_exponent(text: &str) -> CoreResult<i64> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if digits.is_empty() || !is_digits(digits) {
        return Err(CoreError::InvalidNumber("malformed exponent"));
    }
    let magnitude = digits
        .parse::<i64>()
        .ok()
        .filter(|value| *value <= MAX_EXPONENT)
        .ok_or(CoreError::InvalidNumber("exponent out of range"))?;
    Ok(if negative { -magnitude } else { magnitude })
}

fn shift_point(integer: &str, fraction: &str, exponent: i64) -> PositionalDecimal {
    if exponent == 0 {
        return PositionalDecimal {
            integer: String::from(integer),
            fraction: String::from(fraction),
        };
    }

    let mut digits = String::with_capacity(integer.len() + fraction.len());
    digits.push_str(integer);
    digits.push_str(fraction);
    let point = integer.len() as i64 + exponent;

    if point <= 0 {
        let mut fraction = "0".repeat(point.unsigned_abs() as usize);
        fraction.push_str(&digits);
        PositionalDecimal {
            integer: String::new(),
            fraction,
        }
    } else if point as usize >= digits.len() {
        let padding = point as usize - digits.len();
        digits.push_str(&"0".repeat(padding));
        PositionalDecimal {
            integer: digits,
            fraction: String::new(),
        }
    } else {
        let fraction = digits.split_off(point as usize);
        PositionalDecimal {
            integer: digits,
            fraction,
        }
    }
}

/// The six CLDR operands of a number.
///
/// `n` is the absolute value as a float and is informational only; rules use
/// the exact helpers ([`Operands::n_equals`], [`Operands::n_in`],
/// [`Operands::n_mod`]) which derive `n` from `i` and `t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Operands {
    pub n: f64,
    pub i: u64,
    pub v: usize,
    pub w: usize,
    pub f: u64,
    pub t: u64,
}

impl Operands {
    pub fn from_input<'a>(input: impl Into<NumericInput<'a>>) -> CoreResult<Self> {
        match input.into() {
            NumericInput::Signed(value) => Ok(Self::from_integer(value.unsigned_abs())),
            NumericInput::Unsigned(value) => Ok(Self::from_integer(value)),
            NumericInput::Float(value) => Self::from_decimal(&PositionalDecimal::from_float(value)?),
            NumericInput::Decimal(text) => Self::parse(text),
        }
    }

    /// Operands of a decimal string such as `"2.50"` or `"1.5e3"`.
    ///
    /// `i`, `f` and `t` are held as `u64`, so an integer part or a run of
    /// fraction digits whose value exceeds `u64::MAX` is `InvalidNumber`.
    pub fn parse(input: &str) -> CoreResult<Self> {
        Self::from_decimal(&PositionalDecimal::parse(input)?)
    }

    pub fn from_integer(value: u64) -> Self {
        Self {
            n: value as f64,
            i: value,
            v: 0,
            w: 0,
            f: 0,
            t: 0,
        }
    }

    pub fn from_decimal(decimal: &PositionalDecimal) -> CoreResult<Self> {
        let fraction = decimal.fraction_digits();
        let significant = fraction.trim_end_matches('0');

        let i = parse_digits(decimal.integer_digits())
            .ok_or(CoreError::InvalidNumber("integer part out of range"))?;
        let f = parse_digits(fraction)
            .ok_or(CoreError::InvalidNumber("fraction part out of range"))?;
        let t = parse_digits(significant)
            .ok_or(CoreError::InvalidNumber("fraction part out of range"))?;
        let n = format!("{decimal}")
            .parse::<f64>()
            .map_err(|_| CoreError::InvalidNumber("number out of range"))?;

        Ok(Self {
            n,
            i,
            v: fraction.len(),
            w: significant.len(),
            f,
            t,
        })
    }

    /// `n = value`.
    pub fn n_equals(&self, value: u64) -> bool {
        self.t == 0 && self.i == value
    }

    /// `n = low..high`; only integral values are in a CLDR range.
    pub fn n_in(&self, low: u64, high: u64) -> bool {
        self.t == 0 && (low..=high).contains(&self.i)
    }

    /// `n % modulus`, or `None` when `n` has a non-zero fraction.
    pub fn n_mod(&self, modulus: u64) -> Option<u64> {
        (self.t == 0).then_some(self.i % modulus)
    }
}

fn parse_digits(digits: &str) -> Option<u64> {
    digits.bytes().try_fold(0u64, |acc, byte| {
        acc.checked_mul(10)?.checked_add(u64::from(byte - b'0'))
    })
}
