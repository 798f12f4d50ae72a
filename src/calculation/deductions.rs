//! Statutory and union deductions.
//!
//! Retirement, health-law and welfare-fund contributions are shares of the
//! remunerative gross. Union dues are a share of the basic salary and only
//! apply to members.

use rust_decimal::Decimal;

use super::ratios::{HEALTH_LAW_RATIO, RETIREMENT_RATIO, UNION_DUES_RATIO, WELFARE_FUND_RATIO};
use super::rounding::round_money;
use crate::models::{Category, CategoryAmounts};

/// Calculates the retirement contribution (11% of remunerative gross).
pub fn calculate_retirement(remunerative_gross: Decimal) -> Decimal {
    round_money(remunerative_gross * RETIREMENT_RATIO)
}

/// Calculates the health-law contribution (3% of remunerative gross).
pub fn calculate_health_law(remunerative_gross: Decimal) -> Decimal {
    round_money(remunerative_gross * HEALTH_LAW_RATIO)
}

/// Calculates the welfare fund contribution (3% of remunerative gross).
pub fn calculate_welfare_fund(remunerative_gross: Decimal) -> Decimal {
    round_money(remunerative_gross * WELFARE_FUND_RATIO)
}

/// Calculates union dues: 1.5% of the category basic for members, else zero.
pub fn calculate_union_dues(basics: &CategoryAmounts, category: Category, member: bool) -> Decimal {
    if !member {
        return Decimal::ZERO;
    }
    round_money(basics.get(category) * UNION_DUES_RATIO)
}
