//! Employee profile and the selector types it is built from.
//!
//! The profile is the per-computation input describing the employee: their
//! category, seniority, title, acting assignment, and the toggles that switch
//! individual salary components on or off.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Category;
use crate::error::{EngineError, EngineResult};

/// Upper bound for either overtime field: every hour of a 31-day month.
pub const MAX_OVERTIME_HOURS: Decimal = Decimal::from_parts(744, 0, 0, false, 0);

/// The highest title held by the employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleTier {
    /// Primary school. Never pays a title bonus.
    Primary,
    /// Secondary school. Always valued against Category 7.
    Secondary,
    /// Tertiary (non-university) degree.
    Tertiary,
    /// University technical degree ("TGU").
    Tgu,
    /// University degree.
    University,
    /// Postgraduate degree.
    Postgraduate,
}

/// Seniority bracket used by the permanence bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PermanenceBracket {
    /// Up to 2 years in the category.
    #[serde(rename = "0_to_2_years")]
    UpTo2Years,
    /// 2 to 4 years.
    #[serde(rename = "2_to_4_years")]
    From2To4Years,
    /// 4 to 6 years.
    #[serde(rename = "4_to_6_years")]
    From4To6Years,
    /// 6 to 8 years.
    #[serde(rename = "6_to_8_years")]
    From6To8Years,
    /// More than 8 years.
    #[serde(rename = "over_8_years")]
    Over8Years,
}

/// Temporary assignment to another category. Category 7 has no category
/// below it, so it is never a valid acting category.
///
/// # Example
///
/// ```
/// use salary_engine::models::{ActingCategory, Category};
///
/// let acting = ActingCategory::Acting(Category::Cat2);
/// assert_eq!(acting.category(), Some(Category::Cat2));
/// assert_eq!(ActingCategory::None.category(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActingCategory {
    /// No acting assignment.
    #[default]
    None,
    /// Acting in the given category.
    Acting(Category),
}

impl ActingCategory {
    /// The acting category, if one is set.
    pub fn category(self) -> Option<Category> {
        match self {
            ActingCategory::None => None,
            ActingCategory::Acting(category) => Some(category),
        }
    }
}

/// Risk or cashier-shortfall allowance. The two are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskAllowance {
    /// No allowance.
    #[default]
    None,
    /// Operational risk, valued against the employee's own category.
    OperationalRisk,
    /// Cashier shortfall risk, valued against Category 7.
    CashierRisk,
}

/// Everything about the employee the monthly computation needs.
///
/// # Example
///
/// ```
/// use salary_engine::models::{
///     ActingCategory, Category, EmployeeProfile, PermanenceBracket, RiskAllowance, TitleTier,
/// };
/// use rust_decimal::Decimal;
///
/// let profile = EmployeeProfile {
///     category: Category::Cat3,
///     seniority_years: 3,
///     title: TitleTier::Tgu,
///     permanence: PermanenceBracket::From2To4Years,
///     acting_category: ActingCategory::Acting(Category::Cat2),
///     union_member: true,
///     dependents: 1,
///     risk_allowance: RiskAllowance::None,
///     overtime_hours_50: Decimal::ZERO,
///     overtime_hours_100: Decimal::ZERO,
/// };
/// assert_eq!(profile.effective_category(), Category::Cat2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    /// The employee's own category.
    pub category: Category,
    /// Whole years of seniority.
    pub seniority_years: u32,
    /// Highest title held.
    pub title: TitleTier,
    /// Permanence bracket.
    pub permanence: PermanenceBracket,
    /// Acting assignment, if any.
    #[serde(default)]
    pub acting_category: ActingCategory,
    /// Whether the employee pays union dues.
    #[serde(default)]
    pub union_member: bool,
    /// Number of dependent children.
    #[serde(default)]
    pub dependents: u32,
    /// Risk or cashier allowance selector.
    #[serde(default)]
    pub risk_allowance: RiskAllowance,
    /// Overtime hours paid at 50% extra.
    #[serde(default)]
    pub overtime_hours_50: Decimal,
    /// Overtime hours paid at 100% extra.
    #[serde(default)]
    pub overtime_hours_100: Decimal,
}

impl EmployeeProfile {
    /// The category that category-dependent bonuses are valued at: the acting
    /// category when one is set, otherwise the employee's own.
    pub fn effective_category(&self) -> Category {
        self.acting_category.category().unwrap_or(self.category)
    }

    /// Checks the fields serde cannot constrain.
    ///
    /// Overtime hours must lie in `0..=`[`MAX_OVERTIME_HOURS`] and the acting
    /// category must not be Category 7.
    pub fn validate(&self) -> EngineResult<()> {
        if self.acting_category == ActingCategory::Acting(Category::Cat7) {
            return Err(EngineError::InvalidField {
                field: "acting_category".to_string(),
                message: format!("{} cannot be an acting category", Category::Cat7.column_name()),
            });
        }

        for (field, hours) in [
            ("overtime_hours_50", self.overtime_hours_50),
            ("overtime_hours_100", self.overtime_hours_100),
        ] {
            if hours < Decimal::ZERO || hours > MAX_OVERTIME_HOURS {
                return Err(EngineError::InvalidField {
                    field: field.to_string(),
                    message: format!("{} is outside 0..={}", hours, MAX_OVERTIME_HOURS),
                });
            }
        }

        Ok(())
    }
}
