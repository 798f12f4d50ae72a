//! Risk/cashier and dependents allowances.

use rust_decimal::Decimal;

use super::ratios::{DEPENDENT_RATIO, risk_allowance_ratio};
use super::rounding::round_money;
use crate::models::{Category, CategoryAmounts, RiskAllowance};

/// Calculates the risk or cashier allowance.
///
/// Cashier risk is valued against the Category 7 basic, operational risk
/// against the employee's own category.
pub fn calculate_risk_allowance(
    basics: &CategoryAmounts,
    category: Category,
    risk: RiskAllowance,
) -> Decimal {
    let base = match risk {
        RiskAllowance::None => Decimal::ZERO,
        RiskAllowance::OperationalRisk => basics.get(category),
        RiskAllowance::CashierRisk => basics.get(Category::Cat7),
    };
    round_money(base * risk_allowance_ratio(risk))
}

/// Calculates the dependents bonus: `Category 7 basic × 0.20 × dependents`.
///
/// The January exemption is applied by the monthly pipeline, not here.
pub fn calculate_dependents_bonus(basics: &CategoryAmounts, dependents: u32) -> Decimal {
    let per_dependent = basics.get(Category::Cat7) * DEPENDENT_RATIO;
    round_money(per_dependent * Decimal::from(dependents))
}
