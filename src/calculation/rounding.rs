//! Monetary rounding.
//!
//! Every calculator and every aggregate rounds at its return boundary using
//! round-half-up to two decimal places: `floor(value × 100 + 0.5) / 100`.

use rust_decimal::Decimal;

/// One half, added before flooring.
const HALF: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Rounds a monetary value half-up to two decimal places.
///
/// The result always carries a scale of exactly two, so its string form is a
/// fixed-point decimal.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("39162.428571").unwrap()).to_string(), "39162.43");
/// assert_eq!(round_money(Decimal::from_str("0.005").unwrap()).to_string(), "0.01");
/// ```
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded = (value * Decimal::ONE_HUNDRED + HALF).floor() / Decimal::ONE_HUNDRED;
    rounded.rescale(2);
    rounded
}

/// Sums monetary values and rounds the total once.
pub fn sum_money<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    round_money(values.into_iter().sum())
}

/// Percentage change from `previous` to `current`, rounded like money.
///
/// Returns `None` when `previous` is zero, since the change is undefined.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::percentage_change;
/// use rust_decimal::Decimal;
///
/// let change = percentage_change(Decimal::new(100, 0), Decimal::new(112, 0));
/// assert_eq!(change, Some(Decimal::new(1200, 2)));
/// assert_eq!(percentage_change(Decimal::ZERO, Decimal::new(112, 0)), None);
/// ```
pub fn percentage_change(previous: Decimal, current: Decimal) -> Option<Decimal> {
    if previous.is_zero() {
        return None;
    }
    Some(round_money(
        (current - previous) / previous * Decimal::ONE_HUNDRED,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// RD-001: half rounds up
    #[test]
    fn test_half_rounds_up() {
        assert_eq!(round_money(dec("14760.095")), dec("14760.10"));
        assert_eq!(round_money(dec("1.004999")), dec("1.00"));
    }

    /// RD-002: negative half rounds towards positive infinity
    #[test]
    fn test_negative_half_rounds_towards_positive() {
        assert_eq!(round_money(dec("-1.005")), dec("-1.00"));
        assert_eq!(round_money(dec("-1.006")), dec("-1.01"));
    }

    #[test]
    fn test_result_has_two_decimal_places() {
        assert_eq!(round_money(dec("87863")).to_string(), "87863.00");
        assert_eq!(round_money(dec("14760.1")).to_string(), "14760.10");
        assert_eq!(round_money(Decimal::ZERO).to_string(), "0.00");
    }

    #[test]
    fn test_sum_money_rounds_total() {
        let total = sum_money([dec("0.004"), dec("0.004"), dec("0.004")]);
        assert_eq!(total, dec("0.01"));
        assert_eq!(sum_money(Vec::new()), dec("0.00"));
    }

    #[test]
    fn test_percentage_change_increase_and_decrease() {
        assert_eq!(
            percentage_change(dec("1027686.44"), dec("1151009.23")),
            Some(dec("12.00"))
        );
        assert_eq!(percentage_change(dec("200"), dec("150")), Some(dec("-25.00")));
    }

    #[test]
    fn test_percentage_change_from_zero_is_undefined() {
        assert_eq!(percentage_change(Decimal::ZERO, dec("10")), None);
    }

    proptest! {
        #[test]
        fn rounding_is_idempotent(cents in -10_000_000_000i64..10_000_000_000i64, extra in 0u32..1000) {
            let value = Decimal::new(cents, 2) + Decimal::new(extra as i64, 5);
            let once = round_money(value);
            prop_assert_eq!(round_money(once), once);
        }

        #[test]
        fn rounding_moves_less_than_half_a_cent(cents in -10_000_000_000i64..10_000_000_000i64, extra in 0u32..1000) {
            let value = Decimal::new(cents, 2) + Decimal::new(extra as i64, 5);
            let diff = (round_money(value) - value).abs();
            prop_assert!(diff <= Decimal::new(5, 3));
        }
    }
}
