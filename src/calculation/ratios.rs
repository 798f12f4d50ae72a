//! Static ratio tables.
//!
//! Every percentage the pay rules use lives here, keyed by the enums of the
//! employee profile so that a missing case is a compile error.

use rust_decimal::Decimal;

use crate::models::{Category, PermanenceBracket, RiskAllowance, TitleTier};

const fn ratio(units: u32, scale: u32) -> Decimal {
    Decimal::from_parts(units, 0, 0, false, scale)
}

/// Seniority bonus per year of service (2% of basic).
pub const SENIORITY_RATE_PER_YEAR: Decimal = ratio(2, 2);

/// Share of the Category 1 basic used as the permanence base for Category 1.
pub const PERMANENCE_TOP_CATEGORY_BASE: Decimal = ratio(37, 2);

/// Dependents bonus per dependent, as a share of the Category 7 basic.
pub const DEPENDENT_RATIO: Decimal = ratio(20, 2);

/// Monthly hours divisor used to derive the hourly rate for overtime.
pub const MONTHLY_HOURS_DIVISOR: Decimal = ratio(140, 0);

/// Multiplier for overtime paid at 50% extra.
pub const OVERTIME_50_MULTIPLIER: Decimal = ratio(15, 1);

/// Multiplier for overtime paid at 100% extra.
pub const OVERTIME_100_MULTIPLIER: Decimal = ratio(2, 0);

/// Retirement contribution.
pub const RETIREMENT_RATIO: Decimal = ratio(11, 2);

/// Health-law contribution.
pub const HEALTH_LAW_RATIO: Decimal = ratio(3, 2);

/// Welfare fund contribution.
pub const WELFARE_FUND_RATIO: Decimal = ratio(3, 2);

/// Union dues, as a share of the basic salary.
pub const UNION_DUES_RATIO: Decimal = ratio(15, 3);

/// Grade bonus ratio for a category.
pub fn grade_bonus_ratio(category: Category) -> Decimal {
    match category {
        Category::Cat1 => ratio(6, 2),
        Category::Cat2 => ratio(7, 2),
        Category::Cat3 => ratio(8, 2),
        Category::Cat4 => ratio(11, 2),
        Category::Cat5 => ratio(14, 2),
        Category::Cat6 => ratio(23, 2),
        Category::Cat7 => ratio(27, 2),
    }
}

/// Training bonus ratio for a category.
pub fn training_bonus_ratio(category: Category) -> Decimal {
    match category {
        Category::Cat1 => ratio(3, 2),
        Category::Cat2 => ratio(4, 2),
        Category::Cat3 => ratio(5, 2),
        Category::Cat4 => ratio(6, 2),
        Category::Cat5 => ratio(7, 2),
        Category::Cat6 => ratio(8, 2),
        Category::Cat7 => ratio(10, 2),
    }
}

/// Title bonus ratio for a title tier.
pub fn title_bonus_ratio(title: TitleTier) -> Decimal {
    match title {
        TitleTier::Primary => Decimal::ZERO,
        TitleTier::Secondary => ratio(175, 3),
        TitleTier::Tertiary => ratio(10, 2),
        TitleTier::Tgu => ratio(20, 2),
        TitleTier::University => ratio(25, 2),
        TitleTier::Postgraduate => ratio(30, 2),
    }
}

/// Permanence ratio for a seniority bracket.
pub fn permanence_ratio(bracket: PermanenceBracket) -> Decimal {
    match bracket {
        PermanenceBracket::UpTo2Years => Decimal::ZERO,
        PermanenceBracket::From2To4Years => ratio(10, 2),
        PermanenceBracket::From4To6Years => ratio(25, 2),
        PermanenceBracket::From6To8Years => ratio(45, 2),
        PermanenceBracket::Over8Years => ratio(70, 2),
    }
}

/// Risk or cashier allowance ratio.
pub fn risk_allowance_ratio(risk: RiskAllowance) -> Decimal {
    match risk {
        RiskAllowance::None => Decimal::ZERO,
        RiskAllowance::OperationalRisk => ratio(10, 2),
        RiskAllowance::CashierRisk => ratio(25, 2),
    }
}
