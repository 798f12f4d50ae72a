//! Overtime pay.
//!
//! The hourly rate is the pre-overtime gross divided by a fixed 140 monthly
//! hours; overtime hours are paid at 1.5x or 2x that rate.

use rust_decimal::Decimal;

use super::ratios::{MONTHLY_HOURS_DIVISOR, OVERTIME_50_MULTIPLIER, OVERTIME_100_MULTIPLIER};
use super::rounding::round_money;

fn overtime(gross_before_overtime: Decimal, multiplier: Decimal, hours: Decimal) -> Decimal {
    let hourly = (gross_before_overtime / MONTHLY_HOURS_DIVISOR) * multiplier;
    round_money(hours * hourly)
}

/// Calculates overtime paid at 50% extra.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_overtime_50;
/// use rust_decimal::Decimal;
///
/// let amount = calculate_overtime_50(Decimal::new(731032, 0), Decimal::new(5, 0));
/// assert_eq!(amount.to_string(), "39162.43");
/// ```
pub fn calculate_overtime_50(gross_before_overtime: Decimal, hours: Decimal) -> Decimal {
    overtime(gross_before_overtime, OVERTIME_50_MULTIPLIER, hours)
}

/// Calculates overtime paid at 100% extra.
pub fn calculate_overtime_100(gross_before_overtime: Decimal, hours: Decimal) -> Decimal {
    overtime(gross_before_overtime, OVERTIME_100_MULTIPLIER, hours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// OT-001: five hours at 50%
    #[test]
    fn test_overtime_50_five_hours() {
        assert_eq!(calculate_overtime_50(dec("731032"), dec("5")), dec("39162.43"));
    }

    /// OT-002: five hours at 100%
    #[test]
    fn test_overtime_100_five_hours() {
        assert_eq!(calculate_overtime_100(dec("731032"), dec("5")), dec("52216.57"));
    }

    /// OT-003: no hours
    #[test]
    fn test_overtime_zero_hours() {
        assert_eq!(calculate_overtime_50(dec("731032"), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(calculate_overtime_100(dec("731032"), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_overtime_fractional_hours() {
        // 1400 / 140 x 2 x 2.5 = 50
        assert_eq!(calculate_overtime_100(dec("1400"), dec("2.5")), dec("50.00"));
    }
}
