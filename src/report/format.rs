//! Display formatting for amounts and percentages.

use rust_decimal::Decimal;

use crate::calculation::round_money;

/// Formats an amount as a fixed-point string with two decimals.
///
/// # Examples
///
/// ```
/// use salary_engine::report::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::new(14366978, 1)), "1436697.80");
/// ```
pub fn format_amount(amount: Decimal) -> String {
    round_money(amount).to_string()
}

/// Formats an amount the Argentine way: `$ 1.436.697,80`.
///
/// Negative amounts carry a leading minus sign: `-$ 1.234,00`.
///
/// # Examples
///
/// ```
/// use salary_engine::report::format_currency_ars;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency_ars(Decimal::new(14366978, 1)), "$ 1.436.697,80");
/// ```
pub fn format_currency_ars(amount: Decimal) -> String {
    let rounded = round_money(amount);
    let plain = rounded.abs().to_string();
    let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}$ {},{}", sign, grouped, fraction)
}

/// Formats a percentage with two decimals and a trailing `%`.
pub fn format_percent(percent: Decimal) -> String {
    format!("{} %", format_amount(percent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_format_amount_pads_decimals() {
        assert_eq!(format_amount(dec("1436697.8")), "1436697.80");
        assert_eq!(format_amount(dec("87863")), "87863.00");
        assert_eq!(format_amount(dec("39162.428571")), "39162.43");
        assert_eq!(format_amount(Decimal::ZERO), "0.00");
    }

    #[test]
    fn test_format_currency_ars_groups_thousands() {
        assert_eq!(format_currency_ars(dec("1436697.80")), "$ 1.436.697,80");
        assert_eq!(format_currency_ars(dec("731032")), "$ 731.032,00");
        assert_eq!(format_currency_ars(dec("1000")), "$ 1.000,00");
        assert_eq!(format_currency_ars(dec("999.5")), "$ 999,50");
        assert_eq!(format_currency_ars(Decimal::ZERO), "$ 0,00");
    }

    #[test]
    fn test_format_currency_ars_negative() {
        assert_eq!(format_currency_ars(dec("-123009")), "-$ 123.009,00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(dec("12")), "12.00 %");
        assert_eq!(format_percent(dec("-25.5")), "-25.50 %");
    }
}
