//! Acting-role supplement.
//!
//! An employee temporarily acting in another category is paid the difference
//! between that category's basic and their own, carrying over seniority and
//! title bonuses at the acting category's rate.

use rust_decimal::Decimal;

use super::category_bonuses::calculate_title_bonus;
use super::rounding::round_money;
use super::seniority::calculate_seniority;
use crate::models::{CategoryAmounts, EmployeeProfile};

/// Calculates the acting-role supplement.
///
/// Returns zero when no acting category is set. Otherwise returns
/// `(acting basic + Δseniority + Δtitle) − own basic`, where the deltas are
/// the seniority and title bonuses at the acting category minus the same
/// bonuses at the employee's own category. The result is negative when the
/// acting category pays less.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_supplement;
/// use salary_engine::models::{
///     ActingCategory, Category, CategoryAmounts, EmployeeProfile, PermanenceBracket,
///     RiskAllowance, TitleTier,
/// };
/// use rust_decimal::Decimal;
///
/// let basics = CategoryAmounts::new([
///     Decimal::new(1054358, 0),
///     Decimal::new(878633, 0),
///     Decimal::new(731032, 0),
///     Decimal::new(608023, 0),
///     Decimal::new(506093, 0),
///     Decimal::new(421738, 0),
///     Decimal::new(351452, 0),
/// ]);
/// let profile = EmployeeProfile {
///     category: Category::Cat3,
///     seniority_years: 0,
///     title: TitleTier::Tgu,
///     permanence: PermanenceBracket::UpTo2Years,
///     acting_category: ActingCategory::Acting(Category::Cat2),
///     union_member: false,
///     dependents: 0,
///     risk_allowance: RiskAllowance::None,
///     overtime_hours_50: Decimal::ZERO,
///     overtime_hours_100: Decimal::ZERO,
/// };
///
/// assert_eq!(calculate_supplement(&basics, &profile), Decimal::new(17712120, 2));
/// ```
pub fn calculate_supplement(basics: &CategoryAmounts, profile: &EmployeeProfile) -> Decimal {
    let Some(acting) = profile.acting_category.category() else {
        return Decimal::ZERO;
    };
    let own = profile.category;

    let seniority_delta = calculate_seniority(basics, acting, profile.seniority_years)
        - calculate_seniority(basics, own, profile.seniority_years);
    let title_delta = calculate_title_bonus(basics, acting, profile.title)
        - calculate_title_bonus(basics, own, profile.title);

    round_money(basics.get(acting) + seniority_delta + title_delta - basics.get(own))
}
