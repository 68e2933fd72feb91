//! Fixed-point amounts with seven decimal places.
//!
//! Amounts are written as decimal text (`"12.5"`) by users and stored as an `i64` counting
//! ten-millionths (`125000000`). Conversion in either direction is exact: text with more
//! precision than can be stored, or a value that does not fit, is rejected rather than rounded
//! or clamped.

use bytes::{Buf, BufMut};
use std::{fmt, str::FromStr};
use thiserror::Error;
use xdrkit_codec::{FixedSize, Read, ReadExt, Write};

/// Number of decimal places stored.
pub const DECIMALS: usize = 7;

/// The stored value of one whole unit.
pub const ONE: i64 = 10_000_000;

/// Error type for amount conversion
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid amount: {0:?}")]
    InvalidAmount(String),
    #[error("precision loss: {0} fractional digits")]
    PrecisionLoss(usize),
    #[error("amount out of range")]
    AmountOutOfRange,
}

/// Input to [normalize]: decimal text, or a value that is already scaled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AmountLike<'a> {
    Decimal(&'a str),
    Raw(i64),
}

impl<'a> From<&'a str> for AmountLike<'a> {
    fn from(value: &'a str) -> Self {
        Self::Decimal(value)
    }
}

impl From<i64> for AmountLike<'_> {
    fn from(value: i64) -> Self {
        Self::Raw(value)
    }
}

/// Converts an amount to its stored `i64` form.
///
/// Decimal text is an optional `-`, one or more digits, then optionally `.` and one or more
/// digits. Nothing else is accepted: no `+`, whitespace, separators or exponents. A raw value is
/// returned unchanged.
///
/// Fails with [Error::AmountOutOfRange] if the digits do not fit in an `i64`, with
/// [Error::PrecisionLoss] if there are more than [DECIMALS] fractional digits, and with
/// [Error::AmountOutOfRange] if the scaled result does not fit.
pub fn normalize<'a>(input: impl Into<AmountLike<'a>>) -> Result<i64, Error> {
    match input.into() {
        AmountLike::Decimal(text) => parse(text),
        AmountLike::Raw(value) => Ok(value),
    }
}

fn parse(text: &str) -> Result<i64, Error> {
    let invalid = || Error::InvalidAmount(text.to_string());
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (int, frac) = match body.split_once('.') {
        Some((int, frac)) if !frac.is_empty() => (int, frac),
        Some(_) => return Err(invalid()),
        None => (body, ""),
    };
    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if int.is_empty() || !is_digits(int) || !is_digits(frac) {
        return Err(invalid());
    }

    // Range is checked on the significant digits alone before precision
    let significant = frac.trim_end_matches('0');
    let mut mantissa: i128 = 0;
    for digit in int.bytes().chain(significant.bytes()) {
        mantissa = mantissa
            .saturating_mul(10)
            .saturating_add(i128::from(digit - b'0'));
    }
    if negative {
        mantissa = -mantissa;
    }
    if i64::try_from(mantissa).is_err() {
        return Err(Error::AmountOutOfRange);
    }
    if frac.len() > DECIMALS {
        return Err(Error::PrecisionLoss(frac.len()));
    }

    let scale = 10i128.pow((DECIMALS - significant.len()) as u32);
    mantissa
        .checked_mul(scale)
        .and_then(|value| i64::try_from(value).ok())
        .ok_or(Error::AmountOutOfRange)
}

/// Converts a stored amount to decimal text.
///
/// The fractional part is written without trailing zeros, and omitted entirely when zero.
pub fn denormalize(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    let abs = value.unsigned_abs();
    let int = abs / ONE as u64;
    let frac = abs % ONE as u64;
    if frac == 0 {
        return format!("{sign}{int}");
    }
    let frac = format!("{frac:07}");
    format!("{sign}{int}.{}", frac.trim_end_matches('0'))
}

/// Returns whether `text` is a valid positive amount (or zero, if `allow_zero`).
pub fn is_valid_amount(text: &str, allow_zero: bool) -> bool {
    match parse(text) {
        Ok(value) => value > 0 || (allow_zero && value == 0),
        Err(_) => false,
    }
}

/// A stored amount.
///
/// Parses from and displays as decimal text, and is written on the wire as its `i64`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(pub i64);

impl Amount {
    /// Returns the stored value.
    pub const fn raw(self) -> i64 {
        self.0
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Amount> for i64 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl FromStr for Amount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(Self)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&denormalize(self.0))
    }
}

impl Write for Amount {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        self.0.write(buf);
    }
}

impl FixedSize for Amount {
    const SIZE: usize = i64::SIZE;
}

impl Read for Amount {
    type Cfg = ();

    #[inline]
    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, xdrkit_codec::Error> {
        i64::read(buf).map(Self)
    }
}
