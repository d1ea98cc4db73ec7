//! String-to-value conversion: scalar parsers, the [`Converter`] trait and the
//! vector converter built on single-space tokenization.
//!
//! Numeric parsing is lenient: leading whitespace is skipped and the longest
//! numeric prefix is used, so `"6.0f"` reads as `6.0` and `"5px"` as `5`.
//! Input with no numeric prefix, or a value outside the target range, is an
//! [`Error::Conversion`].
use std::marker::PhantomData;
use std::str::FromStr;

use crate::error::{Error, Result};

const INTEGER: &str = "an integer";
const FLOAT: &str = "a float";
const DOUBLE: &str = "a double";

/// Converts one raw string into a typed value.
pub trait Converter {
    type Output;

    fn convert(&self, raw: &str) -> Result<Self::Output>;
}

fn is_c_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Optional sign followed by at least one decimal digit.
fn int_prefix(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = count_digits(&bytes[sign..]);
    (digits > 0).then(|| &s[..sign + digits])
}

/// How the leading number of a floating-point input is spelled.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Spelling {
    /// `inf`, `infinity` or `nan`.
    Special,
    /// Decimal mantissa; `nonzero` when any mantissa digit is not `0`.
    Decimal { nonzero: bool },
    /// `0x` mantissa with an optional binary `p` exponent, already evaluated.
    Hex { magnitude: f64, nonzero: bool },
}

/// Optional sign, then `inf`/`infinity`/`nan`, a hexadecimal mantissa with an
/// optional `p` exponent, or a decimal mantissa with an optional exponent.
fn float_prefix(s: &str) -> Option<(&str, Spelling)> {
    let bytes = s.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let rest = &s[sign..];

    for word in ["infinity", "inf", "nan"] {
        if rest
            .get(..word.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(word))
        {
            return Some((&s[..sign + word.len()], Spelling::Special));
        }
    }

    if let Some((len, spelling)) = hex_prefix(rest) {
        return Some((&s[..sign + len], spelling));
    }

    let bytes = rest.as_bytes();
    let int_digits = count_digits(bytes);
    let mut end = int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }
    let nonzero = bytes[..end].iter().any(|b| matches!(b, b'1'..=b'9'));

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp..]);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }
    Some((&s[..sign + end], Spelling::Decimal { nonzero }))
}

/// `0x` or `0X`, hex digits with an optional `.`, then an optional `p`
/// exponent. `None` when no hex digit follows the `0x`, in which case the
/// input reads as a decimal `0`.
fn hex_prefix(s: &str) -> Option<(usize, Spelling)> {
    let bytes = s.as_bytes();
    if !matches!(bytes, [b'0', b'x' | b'X', ..]) {
        return None;
    }

    let mut mantissa: u64 = 0;
    let mut exponent: i64 = 0;
    let mut digits = 0;
    let mut end = 2;
    let mut fraction = false;
    loop {
        match bytes.get(end) {
            Some(b'.') if !fraction => fraction = true,
            Some(&b) if b.is_ascii_hexdigit() => {
                let digit = u64::from((b as char).to_digit(16).unwrap_or(0));
                digits += 1;
                if mantissa < 1 << 60 {
                    mantissa = mantissa * 16 + digit;
                    if fraction {
                        exponent -= 4;
                    }
                } else if !fraction {
                    exponent += 4;
                }
            }
            _ => break,
        }
        end += 1;
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'p' | b'P')) {
        let mut exp = end + 1;
        let negative = bytes.get(exp) == Some(&b'-');
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp..]);
        if exp_digits > 0 {
            let power = bytes[exp..exp + exp_digits]
                .iter()
                .fold(0i64, |acc, b| (acc * 10 + i64::from(b - b'0')).min(1 << 20));
            exponent += if negative { -power } else { power };
            end = exp + exp_digits;
        }
    }

    let spelling = Spelling::Hex {
        magnitude: scale_by_power_of_two(mantissa as f64, exponent),
        nonzero: mantissa != 0,
    };
    Some((end, spelling))
}

/// `value * 2^exponent`, stepping so intermediate powers stay finite.
fn scale_by_power_of_two(mut value: f64, mut exponent: i64) -> f64 {
    while exponent > 1000 && value.is_finite() {
        value *= 2f64.powi(1000);
        exponent -= 1000;
    }
    while exponent < -1000 && value != 0.0 {
        value *= 2f64.powi(-1000);
        exponent += 1000;
    }
    value * 2f64.powi(exponent.clamp(-1000, 1000) as i32)
}

/// Parse the leading integer of `raw`.
pub fn parse_int(raw: &str) -> Result<i32> {
    int_prefix(raw.trim_start_matches(is_c_space))
        .and_then(|digits| digits.parse().ok())
        .ok_or_else(|| Error::conversion(raw, INTEGER))
}

trait FloatingPoint: FromStr + Copy {
    fn from_f64(value: f64) -> Self;
    fn is_infinite(self) -> bool;
    fn is_zero(self) -> bool;
}

impl FloatingPoint for f32 {
    fn from_f64(value: f64) -> Self {
        value as f32
    }
    fn is_infinite(self) -> bool {
        f32::is_infinite(self)
    }
    fn is_zero(self) -> bool {
        self == 0.0
    }
}

impl FloatingPoint for f64 {
    fn from_f64(value: f64) -> Self {
        value
    }
    fn is_infinite(self) -> bool {
        f64::is_infinite(self)
    }
    fn is_zero(self) -> bool {
        self == 0.0
    }
}

fn parse_floating<T: FloatingPoint>(raw: &str, expected: &'static str) -> Result<T> {
    let (prefix, spelling) = float_prefix(raw.trim_start_matches(is_c_space))
        .ok_or_else(|| Error::conversion(raw, expected))?;

    let (value, nonzero) = match spelling {
        Spelling::Special => {
            let value: T = prefix
                .parse()
                .map_err(|_| Error::conversion(raw, expected))?;
            return Ok(value);
        }
        Spelling::Decimal { nonzero } => {
            let value: T = prefix
                .parse()
                .map_err(|_| Error::conversion(raw, expected))?;
            (value, nonzero)
        }
        Spelling::Hex { magnitude, nonzero } => {
            let signed = if prefix.starts_with('-') { -magnitude } else { magnitude };
            (T::from_f64(signed), nonzero)
        }
    };

    // Overflow to infinity and underflow to zero are both out of range.
    if value.is_infinite() || (nonzero && value.is_zero()) {
        return Err(Error::conversion(raw, expected));
    }
    Ok(value)
}

/// Parse the leading single-precision number of `raw`.
pub fn parse_float(raw: &str) -> Result<f32> {
    parse_floating(raw, FLOAT)
}

/// Parse the leading double-precision number of `raw`.
pub fn parse_double(raw: &str) -> Result<f64> {
    parse_floating(raw, DOUBLE)
}

/// Split a vector setting's raw string on single spaces.
///
/// Behaves like reading delimited fields until end of input: an empty field
/// between two adjacent spaces is kept, a trailing space does not produce a
/// trailing empty field, and an empty string yields no fields at all.
pub fn split_tokens(raw: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = raw.split(' ').collect();
    if tokens.last() == Some(&"") {
        tokens.pop();
    }
    tokens
}

/// Identity conversion; never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct Text;

impl Converter for Text {
    type Output = String;

    fn convert(&self, raw: &str) -> Result<String> {
        Ok(raw.to_string())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Int;

impl Converter for Int {
    type Output = i32;

    fn convert(&self, raw: &str) -> Result<i32> {
        parse_int(raw)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Float;

impl Converter for Float {
    type Output = f32;

    fn convert(&self, raw: &str) -> Result<f32> {
        parse_float(raw)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Double;

impl Converter for Double {
    type Output = f64;

    fn convert(&self, raw: &str) -> Result<f64> {
        parse_double(raw)
    }
}

/// Vector converter: splits with [`split_tokens`] and converts every token
/// with the inner converter. The first bad token fails the whole value.
#[derive(Debug, Clone, Copy, Default)]
pub struct List<C>(pub C);

impl<C: Converter> Converter for List<C> {
    type Output = Vec<C::Output>;

    fn convert(&self, raw: &str) -> Result<Self::Output> {
        split_tokens(raw)
            .into_iter()
            .map(|token| self.0.convert(token))
            .collect()
    }
}

/// Converter for any [`FromStr`] type. Parse failures are reported with the
/// type's short name as the expected kind.
pub struct Parsed<T>(PhantomData<fn() -> T>);

impl<T> Parsed<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for Parsed<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Parsed<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Parsed<{}>", short_type_name::<T>())
    }
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

impl<T: FromStr> Converter for Parsed<T> {
    type Output = T;

    fn convert(&self, raw: &str) -> Result<T> {
        raw.parse()
            .map_err(|_| Error::conversion(raw, short_type_name::<T>()))
    }
}

/// Caller-supplied conversion function. `None` from the function is reported
/// as a conversion error against `expected`.
pub struct Custom<T, F> {
    expected: String,
    f: F,
    _output: PhantomData<fn() -> T>,
}

/// Build a [`Custom`] converter, e.g. `custom("a letter", |s| s.chars().next())`.
pub fn custom<T, F>(expected: impl Into<String>, f: F) -> Custom<T, F>
where
    F: Fn(&str) -> Option<T>,
{
    Custom {
        expected: expected.into(),
        f,
        _output: PhantomData,
    }
}

impl<T, F> Converter for Custom<T, F>
where
    F: Fn(&str) -> Option<T>,
{
    type Output = T;

    fn convert(&self, raw: &str) -> Result<T> {
        (self.f)(raw).ok_or_else(|| Error::conversion(raw, self.expected.as_str()))
    }
}
