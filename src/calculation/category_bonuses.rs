//! Grade, training and title bonuses.
//!
//! Each is a ratio of a category basic. Grade and training ratios depend on
//! the category itself; the title ratio depends on the employee's title tier.

use rust_decimal::Decimal;

use super::ratios::{grade_bonus_ratio, title_bonus_ratio, training_bonus_ratio};
use super::rounding::round_money;
use crate::models::{Category, CategoryAmounts, TitleTier};

/// Calculates the grade bonus: `basic × grade ratio of the category`.
pub fn calculate_grade_bonus(basics: &CategoryAmounts, category: Category) -> Decimal {
    round_money(basics.get(category) * grade_bonus_ratio(category))
}

/// Calculates the training bonus: `basic × training ratio of the category`.
pub fn calculate_training_bonus(basics: &CategoryAmounts, category: Category) -> Decimal {
    round_money(basics.get(category) * training_bonus_ratio(category))
}

/// Calculates the title bonus.
///
/// A primary title pays nothing. A secondary title is always valued against
/// the Category 7 basic. Every other tier is valued against the basic of
/// `category`.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_title_bonus;
/// use salary_engine::models::{Category, CategoryAmounts, TitleTier};
/// use rust_decimal::Decimal;
///
/// let basics = CategoryAmounts::new([Decimal::new(1000, 0); 7]);
/// assert_eq!(
///     calculate_title_bonus(&basics, Category::Cat3, TitleTier::Tgu),
///     Decimal::new(200, 0)
/// );
/// ```
pub fn calculate_title_bonus(basics: &CategoryAmounts, category: Category, title: TitleTier) -> Decimal {
    let base = match title {
        TitleTier::Primary => Decimal::ZERO,
        TitleTier::Secondary => basics.get(Category::Cat7),
        TitleTier::Tertiary | TitleTier::Tgu | TitleTier::University | TitleTier::Postgraduate => {
            basics.get(category)
        }
    };
    round_money(base * title_bonus_ratio(title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn basics() -> CategoryAmounts {
        CategoryAmounts::new([
            dec("1054358"),
            dec("878633"),
            dec("731032"),
            dec("608023"),
            dec("506093"),
            dec("421738"),
            dec("351452"),
        ])
    }

    /// GB-001: grade bonus for category 3
    #[test]
    fn test_grade_bonus_category_3() {
        assert_eq!(calculate_grade_bonus(&basics(), Category::Cat3), dec("58482.56"));
    }

    #[test]
    fn test_grade_bonus_category_7() {
        assert_eq!(calculate_grade_bonus(&basics(), Category::Cat7), dec("94892.04"));
    }

    /// TB-001: training bonus for category 3
    #[test]
    fn test_training_bonus_category_3() {
        assert_eq!(calculate_training_bonus(&basics(), Category::Cat3), dec("36551.60"));
    }

    #[test]
    fn test_training_bonus_category_1() {
        assert_eq!(calculate_training_bonus(&basics(), Category::Cat1), dec("31630.74"));
    }

    /// TT-001: TGU title for category 3
    #[test]
    fn test_title_bonus_tgu_category_3() {
        assert_eq!(
            calculate_title_bonus(&basics(), Category::Cat3, TitleTier::Tgu),
            dec("146206.40")
        );
    }

    /// TT-002: primary title pays nothing
    #[test]
    fn test_title_bonus_primary_is_zero() {
        for category in Category::ALL {
            assert_eq!(
                calculate_title_bonus(&basics(), category, TitleTier::Primary),
                Decimal::ZERO
            );
        }
    }

    /// TT-003: secondary title always uses category 7
    #[test]
    fn test_title_bonus_secondary_uses_category_7() {
        let expected = dec("61504.10");
        for category in Category::ALL {
            assert_eq!(
                calculate_title_bonus(&basics(), category, TitleTier::Secondary),
                expected
            );
        }
    }

    #[test]
    fn test_title_bonus_other_tiers_use_own_category() {
        assert_eq!(
            calculate_title_bonus(&basics(), Category::Cat4, TitleTier::Tertiary),
            dec("60802.30")
        );
        assert_eq!(
            calculate_title_bonus(&basics(), Category::Cat1, TitleTier::University),
            dec("263589.50")
        );
        assert_eq!(
            calculate_title_bonus(&basics(), Category::Cat5, TitleTier::Postgraduate),
            dec("151827.90")
        );
    }
}
