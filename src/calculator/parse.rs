use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::decimal::{Money, Rate};

static FLOAT_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-]?)(\d+\.?\d*|\.\d+)(?:[eE]([+-]?\d+))?").expect("valid float regex")
});

static INT_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([+-]?)(\d+)").expect("valid integer regex"));

/// exponents beyond this cannot be represented by a 96-bit decimal anyway
const MAX_EXPONENT: i32 = 64;

/// parse the longest leading decimal number, ignoring trailing text
///
/// `"12abc"` parses as 12, `" .5"` as 0.5, `"1e3"` as 1000. Returns `None`
/// when no numeric prefix exists or the value does not fit in a `Decimal`.
pub fn parse_float_prefix(input: &str) -> Option<Decimal> {
    let caps = FLOAT_PREFIX.captures(input.trim_start())?;
    let negative = &caps[1] == "-";

    let mut mantissa = caps[2].to_string();
    if mantissa.starts_with('.') {
        mantissa.insert(0, '0');
    }
    if mantissa.ends_with('.') {
        mantissa.pop();
    }
    let mut value = Decimal::from_str(&mantissa).ok()?;

    if let Some(exp) = caps.get(3) {
        let text = exp.as_str();
        let exp: i32 = text.trim_start_matches('+').parse().unwrap_or(if text.starts_with('-') {
            i32::MIN
        } else {
            i32::MAX
        });
        value = apply_exponent(value, exp)?;
    }

    if negative {
        value.set_sign_negative(true);
    }
    Some(value)
}

fn apply_exponent(mut value: Decimal, exp: i32) -> Option<Decimal> {
    if exp > MAX_EXPONENT {
        return if value.is_zero() { Some(value) } else { None };
    }
    if exp < -MAX_EXPONENT {
        return Some(Decimal::ZERO);
    }
    let ten = Decimal::TEN;
    for _ in 0..exp.unsigned_abs() {
        value = if exp > 0 {
            value.checked_mul(ten)?
        } else {
            value.checked_div(ten)?
        };
    }
    Some(value)
}

/// parse the longest leading integer, ignoring trailing text
///
/// `"12.7"` parses as 12. Values beyond `i64` saturate.
pub fn parse_int_prefix(input: &str) -> Option<i64> {
    let caps = INT_PREFIX.captures(input.trim_start())?;
    let negative = &caps[1] == "-";
    let digits = &caps[2];

    match digits.parse::<i64>() {
        Ok(v) if negative => Some(-v),
        Ok(v) => Some(v),
        Err(_) if negative => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

/// principal field: unparsable or empty input falls back to zero
pub fn parse_amount(input: &str) -> Money {
    parse_float_prefix(input)
        .map(Money::from_decimal)
        .unwrap_or(Money::ZERO)
}

/// interest rate field, as a percentage: unparsable or empty input falls back to zero
pub fn parse_rate(input: &str) -> Rate {
    parse_float_prefix(input)
        .map(Rate::from_percent)
        .unwrap_or(Rate::ZERO)
}

/// tenure field: unparsable, empty or zero input falls back to one month
///
/// Negative values are kept so the display gate can reject them.
pub fn parse_tenure(input: &str) -> i64 {
    match parse_int_prefix(input) {
        Some(0) | None => 1,
        Some(months) => months,
    }
}
