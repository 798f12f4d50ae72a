//! Serializable output records.
//!
//! Every amount is rendered with [`format_amount`] so the records can be
//! written out as JSON without losing the two-decimal representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::format::format_amount;
use crate::models::{BonusLine, MonthlyResult, PercentageDeltas, SacResult, Semester};

/// One bonus entry paid in a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusRecord {
    /// The entry's label.
    pub label: String,
    /// The amount paid.
    pub amount: String,
    /// `SI` for remunerative entries, `NO` otherwise.
    pub remunerative: String,
}

impl From<&BonusLine> for BonusRecord {
    fn from(line: &BonusLine) -> Self {
        Self {
            label: line.label.clone(),
            amount: format_amount(line.amount),
            remunerative: if line.is_remunerative { "SI" } else { "NO" }.to_string(),
        }
    }
}

/// One month of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// First day of the month, ISO formatted.
    pub month: String,
    /// Whether the month had no covering basic-salary row.
    pub missing_salary: bool,
    /// Bonus entries paid in the month.
    pub bonuses: Vec<BonusRecord>,
    /// Basic salary.
    pub basic_salary: String,
    /// Supplement.
    pub supplement: String,
    /// Permanence.
    pub permanence: String,
    /// Grade bonus.
    pub grade_bonus: String,
    /// Training bonus.
    pub training_bonus: String,
    /// Title bonus.
    pub title_bonus: String,
    /// Seniority.
    pub seniority: String,
    /// Risk bonus.
    pub risk_bonus: String,
    /// Dependents bonus.
    pub dependents_bonus: String,
    /// Overtime at 50%.
    pub overtime_50: String,
    /// Overtime at 100%.
    pub overtime_100: String,
    /// Retirement.
    pub retirement: String,
    /// Health law.
    pub health_law: String,
    /// Welfare fund.
    pub welfare_fund: String,
    /// Union dues.
    pub union_dues: String,
    /// Total deductions.
    pub total_deductions: String,
    /// Remunerative gross.
    pub remunerative_gross: String,
    /// Non-remunerative gross.
    pub non_remunerative_gross: String,
    /// Gross total.
    pub gross_total: String,
    /// Net pay.
    pub net_pay: String,
    /// Change of the gross total against the previous month, in percent.
    pub gross_total_change: String,
    /// Change of the basic salary against the previous month, in percent.
    pub basic_salary_change: String,
}

impl From<&MonthlyResult> for MonthlyRecord {
    fn from(result: &MonthlyResult) -> Self {
        let deltas = result.deltas.unwrap_or_else(PercentageDeltas::zero);
        Self {
            month: result.month.from.format("%Y-%m-%d").to_string(),
            missing_salary: result.is_missing_salary(),
            bonuses: result.bonuses.iter().map(BonusRecord::from).collect(),
            basic_salary: format_amount(result.basic_salary),
            supplement: format_amount(result.supplement),
            permanence: format_amount(result.permanence),
            grade_bonus: format_amount(result.grade_bonus),
            training_bonus: format_amount(result.training_bonus),
            title_bonus: format_amount(result.title_bonus),
            seniority: format_amount(result.seniority),
            risk_bonus: format_amount(result.risk_bonus),
            dependents_bonus: format_amount(result.dependents_bonus),
            overtime_50: format_amount(result.overtime_50),
            overtime_100: format_amount(result.overtime_100),
            retirement: format_amount(result.retirement),
            health_law: format_amount(result.health_law),
            welfare_fund: format_amount(result.welfare_fund),
            union_dues: format_amount(result.union_dues),
            total_deductions: format_amount(result.total_deductions),
            remunerative_gross: format_amount(result.remunerative_gross),
            non_remunerative_gross: format_amount(result.non_remunerative_gross),
            gross_total: format_amount(result.gross_total),
            net_pay: format_amount(result.net_pay),
            gross_total_change: format_amount(deltas.gross_total),
            basic_salary_change: format_amount(deltas.basic_salary),
        }
    }
}

/// The semiannual bonus of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SacRecord {
    /// The semester the SAC was computed for, if the period was complete.
    pub semester: Option<Semester>,
    /// Gross.
    pub gross: String,
    /// Retirement.
    pub retirement: String,
    /// Health law.
    pub health_law: String,
    /// Welfare fund.
    pub welfare_fund: String,
    /// Union dues.
    pub union_dues: String,
    /// Total deductions.
    pub total_deductions: String,
    /// Net.
    pub net: String,
}

impl From<&SacResult> for SacRecord {
    fn from(sac: &SacResult) -> Self {
        Self {
            semester: sac.semester,
            gross: format_amount(sac.gross),
            retirement: format_amount(sac.retirement),
            health_law: format_amount(sac.health_law),
            welfare_fund: format_amount(sac.welfare_fund),
            union_dues: format_amount(sac.union_dues),
            total_deductions: format_amount(sac.total_deductions),
            net: format_amount(sac.net),
        }
    }
}

/// A complete payroll report for one employee and one year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollReport {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Version of the engine that produced the report.
    pub engine_version: String,
    /// The year the months belong to.
    pub year: i32,
    /// One record per requested month, in request order.
    pub months: Vec<MonthlyRecord>,
    /// The SAC, when the months form a complete semester.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sac: Option<SacRecord>,
}
