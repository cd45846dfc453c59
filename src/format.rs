use crate::calculator::parse_float_prefix;
use crate::decimal::Money;

/// rupee sign prefixed to every formatted amount
pub const CURRENCY_SYMBOL: &str = "₹";

/// format for display: `₹`, two decimals, comma thousands grouping
///
/// Midpoints round away from zero. A negative value keeps its sign after the
/// symbol, e.g. `₹-1,234.00`.
pub fn format_currency(amount: Money) -> String {
    let fixed = format!("{:.2}", amount.round_dp(2).as_decimal());
    format!("{}{}", CURRENCY_SYMBOL, group_thousands(&fixed))
}

/// format as a whole number of rupees, as ledger totals are shown
///
/// Rounds half to even. A missing amount renders as `₹0`.
pub fn format_whole_currency(amount: Option<Money>) -> String {
    let whole = match amount {
        Some(amount) => amount.round_bankers(0),
        None => return format!("{}0", CURRENCY_SYMBOL),
    };

    let digits = if whole.is_zero() {
        "0".to_string()
    } else {
        whole.as_decimal().trunc().to_string()
    };
    format!("{}{}", CURRENCY_SYMBOL, group_thousands(&digits))
}

/// normalize a currency input field on blur
///
/// Empty fields are left alone (`None`). Anything with a numeric prefix is
/// rewritten to exactly two decimals. Text without a numeric prefix yields
/// `None` so the caller keeps what the user typed.
pub fn normalize_currency_input(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    let value = parse_float_prefix(raw)?;
    Some(format!("{:.2}", Money::from_decimal(value).round_dp(2).as_decimal()))
}

/// insert a comma every three digits of the integer part
///
/// Expects a plain decimal string with an optional leading `-` and an
/// optional fractional part.
pub fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(idx) => unsigned.split_at(idx),
        None => (unsigned, ""),
    };

    let len = int_part.len();
    let mut grouped = String::with_capacity(len + len / 3 + frac_part.len() + 1);
    grouped.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.push_str(frac_part);
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(Money::from_decimal(dec!(1234567.5))), "₹1,234,567.50");
        assert_eq!(format_currency(Money::from_decimal(dec!(120))), "₹120.00");
        assert_eq!(format_currency(Money::ZERO), "₹0.00");
        assert_eq!(format_currency(Money::from_decimal(dec!(999.999))), "₹1,000.00");
    }

    #[test]
    fn test_format_currency_rounds_half_away_from_zero() {
        assert_eq!(format_currency(Money::from_decimal(dec!(0.125))), "₹0.13");
        assert_eq!(format_currency(Money::from_decimal(dec!(93.3333333))), "₹93.33");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(Money::from_decimal(dec!(-1234))), "₹-1,234.00");
    }

    #[test]
    fn test_whole_currency() {
        assert_eq!(format_whole_currency(Some(Money::from_decimal(dec!(1120.4)))), "₹1,120");
        assert_eq!(format_whole_currency(Some(Money::from_decimal(dec!(2.5)))), "₹2");
        assert_eq!(format_whole_currency(Some(Money::from_decimal(dec!(3.5)))), "₹4");
        assert_eq!(format_whole_currency(Some(Money::from_decimal(dec!(-0.4)))), "₹0");
        assert_eq!(format_whole_currency(None), "₹0");
    }

    #[test]
    fn test_normalize_currency_input() {
        assert_eq!(normalize_currency_input("12"), Some("12.00".to_string()));
        assert_eq!(normalize_currency_input("12.345"), Some("12.35".to_string()));
        assert_eq!(normalize_currency_input("7.1abc"), Some("7.10".to_string()));
        assert_eq!(normalize_currency_input(""), None);
        assert_eq!(normalize_currency_input("abc"), None);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456.789"), "123,456.789");
        assert_eq!(group_thousands("-1000000"), "-1,000,000");
    }
}
