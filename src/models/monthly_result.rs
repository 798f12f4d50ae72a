//! Computed results for one month and for the semiannual bonus.
//!
//! This module contains the [`MonthlyResult`] produced by the monthly
//! pipeline, the [`SacResult`] produced by the SAC engine, and the audit
//! structures that record how each component was derived.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{MonthWindow, Semester};

/// Where a month's basic salaries came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum SalarySource {
    /// A row of the basic-salary table covered the month.
    Table {
        /// Effective date of the matching row.
        effective_date: NaiveDate,
    },
    /// No row covered the month; every basic resolved to zero.
    MissingInterval,
}

/// A bonus entry as paid in one month.
///
/// # Example
///
/// ```
/// use salary_engine::models::BonusLine;
/// use rust_decimal::Decimal;
///
/// let line = BonusLine {
///     label: "Fixed allowance".to_string(),
///     amount: Decimal::new(2500000, 2),
///     is_remunerative: false,
/// };
/// assert_eq!(line.amount.to_string(), "25000.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusLine {
    /// The concept label of the entry.
    pub label: String,
    /// Amount at the employee's effective category.
    pub amount: Decimal,
    /// Whether the entry counts towards the deduction base.
    pub is_remunerative: bool,
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the result.
    pub reasoning: String,
}

/// Month-over-month percentage changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PercentageDeltas {
    /// Change in gross total vs. the previous month.
    pub gross_total: Decimal,
    /// Change in basic salary vs. the previous month.
    pub basic_salary: Decimal,
}

impl PercentageDeltas {
    /// No change; used for the first month of a series.
    pub fn zero() -> Self {
        Self {
            gross_total: Decimal::ZERO,
            basic_salary: Decimal::ZERO,
        }
    }
}

/// Every component of one fully computed month.
///
/// Created once by the monthly pipeline; the trend engine only fills in
/// [`MonthlyResult::deltas`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyResult {
    /// The month this result covers.
    pub month: MonthWindow,
    /// Where the basic salaries came from.
    pub salary_source: SalarySource,
    /// Bonus entries paid this month (non-zero amounts only).
    pub bonuses: Vec<BonusLine>,
    /// Basic salary of the employee's own category.
    pub basic_salary: Decimal,
    /// Acting-role differential.
    pub supplement: Decimal,
    /// Permanence bonus.
    pub permanence: Decimal,
    /// Grade bonus.
    pub grade_bonus: Decimal,
    /// Training bonus.
    pub training_bonus: Decimal,
    /// Title bonus.
    pub title_bonus: Decimal,
    /// Seniority bonus.
    pub seniority: Decimal,
    /// Risk or cashier allowance.
    pub risk_bonus: Decimal,
    /// Dependents bonus (zero in January).
    pub dependents_bonus: Decimal,
    /// Sum of remunerative bonus entries.
    pub remunerative_bonuses: Decimal,
    /// Sum of non-remunerative bonus entries.
    pub non_remunerative_bonuses: Decimal,
    /// Gross used as the overtime base.
    pub gross_before_overtime: Decimal,
    /// Overtime paid at 50% extra.
    pub overtime_50: Decimal,
    /// Overtime paid at 100% extra.
    pub overtime_100: Decimal,
    /// Gross that counts towards deductions.
    pub remunerative_gross: Decimal,
    /// Gross excluded from deductions.
    pub non_remunerative_gross: Decimal,
    /// Retirement contribution (11%).
    pub retirement: Decimal,
    /// Health-law contribution (3%).
    pub health_law: Decimal,
    /// Welfare fund contribution (3%).
    pub welfare_fund: Decimal,
    /// Union dues (1.5% of basic, members only).
    pub union_dues: Decimal,
    /// Sum of all deductions.
    pub total_deductions: Decimal,
    /// Remunerative plus non-remunerative gross.
    pub gross_total: Decimal,
    /// Gross total minus deductions.
    pub net_pay: Decimal,
    /// Percentage changes vs. the previous month, once computed.
    pub deltas: Option<PercentageDeltas>,
    /// How each component was derived.
    pub audit_trace: Vec<AuditStep>,
}

impl MonthlyResult {
    /// Returns true when the month had no basic-salary row.
    pub fn is_missing_salary(&self) -> bool {
        self.salary_source == SalarySource::MissingInterval
    }
}

/// The semiannual supplementary payment (SAC) and its deductions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SacResult {
    /// The semester paid, or `None` when the period was incomplete.
    pub semester: Option<Semester>,
    /// Half of the best remunerative gross month.
    pub gross: Decimal,
    /// Retirement contribution.
    pub retirement: Decimal,
    /// Health-law contribution.
    pub health_law: Decimal,
    /// Welfare fund contribution.
    pub welfare_fund: Decimal,
    /// Union dues equivalent.
    pub union_dues: Decimal,
    /// Sum of all deductions.
    pub total_deductions: Decimal,
    /// Gross minus deductions.
    pub net: Decimal,
}

impl SacResult {
    /// The all-zero result for an incomplete semester.
    pub fn zero() -> Self {
        Self {
            semester: None,
            gross: Decimal::ZERO,
            retirement: Decimal::ZERO,
            health_law: Decimal::ZERO,
            welfare_fund: Decimal::ZERO,
            union_dues: Decimal::ZERO,
            total_deductions: Decimal::ZERO,
            net: Decimal::ZERO,
        }
    }

    /// Returns true when every amount is zero.
    pub fn is_zero(&self) -> bool {
        [
            self.gross,
            self.retirement,
            self.health_law,
            self.welfare_fund,
            self.union_dues,
            self.total_deductions,
            self.net,
        ]
        .iter()
        .all(|a| a.is_zero())
    }
}
