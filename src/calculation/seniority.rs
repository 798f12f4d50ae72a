//! Seniority and permanence bonuses.
//!
//! Both reward time in service. Seniority is a flat share of the basic per
//! year; permanence is a share of the gap between the category's basic and
//! the basic of the category just above it.

use rust_decimal::Decimal;

use super::ratios::{PERMANENCE_TOP_CATEGORY_BASE, SENIORITY_RATE_PER_YEAR, permanence_ratio};
use super::rounding::round_money;
use crate::models::{Category, CategoryAmounts, PermanenceBracket};

/// Calculates the seniority bonus: `basic × 0.02 × years`.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_seniority;
/// use salary_engine::models::{Category, CategoryAmounts};
/// use rust_decimal::Decimal;
///
/// let basics = CategoryAmounts::new([Decimal::new(731032, 0); 7]);
/// assert_eq!(calculate_seniority(&basics, Category::Cat3, 3), Decimal::new(4386192, 2));
/// ```
pub fn calculate_seniority(basics: &CategoryAmounts, category: Category, years: u32) -> Decimal {
    let per_year = basics.get(category) * SENIORITY_RATE_PER_YEAR;
    round_money(per_year * Decimal::from(years))
}

/// Calculates the permanence bonus for a category.
///
/// Category 1 has no category above it, so its base is 37% of its own basic.
/// Every other category uses the difference to the next more senior basic.
pub fn calculate_permanence(
    basics: &CategoryAmounts,
    category: Category,
    bracket: PermanenceBracket,
) -> Decimal {
    let base = match category.next_higher() {
        None => basics.get(category) * PERMANENCE_TOP_CATEGORY_BASE,
        Some(higher) => basics.get(higher) - basics.get(category),
    };
    round_money(base * permanence_ratio(bracket))
}
