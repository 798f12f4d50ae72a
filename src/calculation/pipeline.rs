//! The monthly computation pipeline.
//!
//! [`compute_month`] resolves the tables for one month and runs every
//! component calculator in dependency order, recording an audit step per
//! stage. [`compute_series`] resolves the salary timeline once and then runs
//! the pipeline for each requested month followed by the trend engine.

use rust_decimal::Decimal;
use serde_json::{Value, json};
use tracing::debug;

use super::allowances::{calculate_dependents_bonus, calculate_risk_allowance};
use super::category_bonuses::{
    calculate_grade_bonus, calculate_title_bonus, calculate_training_bonus,
};
use super::deductions::{
    calculate_health_law, calculate_retirement, calculate_union_dues, calculate_welfare_fund,
};
use super::interval_matcher::{filter_bonuses_for_month, find_salary_for_month};
use super::overtime::{calculate_overtime_50, calculate_overtime_100};
use super::rounding::{round_money, sum_money};
use super::seniority::{calculate_permanence, calculate_seniority};
use super::supplement::calculate_supplement;
use super::timeline::resolve_timeline;
use super::trend::with_percentage_deltas;
use crate::models::{
    AuditStep, BasicSalaryRow, BonusEntry, BonusLine, EmployeeProfile, MonthWindow,
    MonthlyResult, ResolvedSalaryInterval,
};

/// Collects audit steps in the order the stages run.
struct AuditTrace {
    steps: Vec<AuditStep>,
}

impl AuditTrace {
    fn new() -> Self {
        Self { steps: Vec::new() }
    }

    fn record(
        &mut self,
        rule_id: &str,
        rule_name: &str,
        input: Value,
        amount: Decimal,
        reasoning: String,
    ) {
        let step_number = self.steps.len() as u32 + 1;
        self.steps.push(AuditStep {
            step_number,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            input,
            output: json!({ "amount": amount.to_string() }),
            reasoning,
        });
    }

    fn into_steps(self) -> Vec<AuditStep> {
        self.steps
    }
}

/// Computes every component of one month's pay.
///
/// Seniority, title, risk and union dues are valued at the employee's own
/// category. Permanence, grade and training bonuses and bonus entries are
/// valued at the acting category when one is set. The dependents bonus is
/// never paid in January. A month with no covering salary row is computed
/// against all-zero basics and flagged through
/// [`MonthlyResult::salary_source`].
///
/// The returned result has `deltas` set to `None`; see
/// [`with_percentage_deltas`](super::with_percentage_deltas).
pub fn compute_month(
    profile: &EmployeeProfile,
    month: &MonthWindow,
    intervals: &[ResolvedSalaryInterval],
    bonuses: &[BonusEntry],
) -> MonthlyResult {
    let lookup = find_salary_for_month(intervals, month);
    let basics = lookup.amounts();
    let own = profile.category;
    let effective = profile.effective_category();
    let mut trace = AuditTrace::new();

    let basic_salary = round_money(basics.get(own));
    trace.record(
        "basic_salary",
        "Basic Salary",
        json!({ "category": own.number(), "source": lookup.source() }),
        basic_salary,
        format!("Basic for category {} = ${}", own.number(), basic_salary),
    );

    let seniority = calculate_seniority(basics, own, profile.seniority_years);
    trace.record(
        "seniority",
        "Seniority",
        json!({ "basic": basic_salary.to_string(), "years": profile.seniority_years }),
        seniority,
        format!("${} x 0.02 x {} = ${}", basic_salary, profile.seniority_years, seniority),
    );

    let permanence = calculate_permanence(basics, effective, profile.permanence);
    trace.record(
        "permanence",
        "Permanence",
        json!({ "category": effective.number(), "bracket": profile.permanence }),
        permanence,
        format!("Permanence for category {} = ${}", effective.number(), permanence),
    );

    let title_bonus = calculate_title_bonus(basics, own, profile.title);
    trace.record(
        "title_bonus",
        "Title Bonus",
        json!({ "category": own.number(), "title": profile.title }),
        title_bonus,
        format!("Title bonus for category {} = ${}", own.number(), title_bonus),
    );

    let risk_bonus = calculate_risk_allowance(basics, own, profile.risk_allowance);
    trace.record(
        "risk_bonus",
        "Risk Allowance",
        json!({ "category": own.number(), "risk": profile.risk_allowance }),
        risk_bonus,
        format!("Risk allowance = ${}", risk_bonus),
    );

    let grade_bonus = calculate_grade_bonus(basics, effective);
    trace.record(
        "grade_bonus",
        "Grade Bonus",
        json!({ "category": effective.number() }),
        grade_bonus,
        format!("Grade bonus for category {} = ${}", effective.number(), grade_bonus),
    );

    let training_bonus = calculate_training_bonus(basics, effective);
    trace.record(
        "training_bonus",
        "Training Bonus",
        json!({ "category": effective.number() }),
        training_bonus,
        format!("Training bonus for category {} = ${}", effective.number(), training_bonus),
    );

    let (dependents_bonus, dependents_reasoning) = if month.is_january() {
        (Decimal::ZERO, "No dependents bonus is paid in January".to_string())
    } else {
        let amount = calculate_dependents_bonus(basics, profile.dependents);
        (amount, format!("{} dependents = ${}", profile.dependents, amount))
    };
    trace.record(
        "dependents_bonus",
        "Dependents Bonus",
        json!({ "dependents": profile.dependents, "month": month.month() }),
        dependents_bonus,
        dependents_reasoning,
    );

    let supplement = calculate_supplement(basics, profile);
    trace.record(
        "supplement",
        "Acting Supplement",
        json!({ "acting_category": profile.acting_category }),
        supplement,
        match profile.acting_category.category() {
            Some(acting) => format!("Acting in category {} = ${}", acting.number(), supplement),
            None => "No acting category".to_string(),
        },
    );

    let entries = filter_bonuses_for_month(bonuses, month);
    let remunerative_bonuses = sum_money(
        entries
            .iter()
            .filter(|b| b.is_remunerative)
            .map(|b| b.amount_for(effective)),
    );
    let non_remunerative_bonuses = sum_money(
        entries
            .iter()
            .filter(|b| !b.is_remunerative)
            .map(|b| b.amount_for(effective)),
    );
    let bonus_lines: Vec<BonusLine> = entries
        .iter()
        .map(|b| BonusLine {
            label: b.label.clone(),
            amount: round_money(b.amount_for(effective)),
            is_remunerative: b.is_remunerative,
        })
        .filter(|line| line.amount > Decimal::ZERO)
        .collect();
    trace.record(
        "bonus_entries",
        "Bonus Entries",
        json!({
            "entries": entries.len(),
            "remunerative": remunerative_bonuses.to_string(),
            "non_remunerative": non_remunerative_bonuses.to_string(),
        }),
        remunerative_bonuses + non_remunerative_bonuses,
        format!(
            "{} entries: ${} remunerative, ${} non-remunerative",
            entries.len(),
            remunerative_bonuses,
            non_remunerative_bonuses
        ),
    );

    let gross_before_overtime = sum_money([
        basic_salary,
        supplement,
        seniority,
        title_bonus,
        risk_bonus,
        permanence,
        grade_bonus,
        training_bonus,
        remunerative_bonuses,
        non_remunerative_bonuses,
    ]);

    let overtime_50 = calculate_overtime_50(gross_before_overtime, profile.overtime_hours_50);
    let overtime_100 = calculate_overtime_100(gross_before_overtime, profile.overtime_hours_100);
    trace.record(
        "overtime",
        "Overtime",
        json!({
            "gross_before_overtime": gross_before_overtime.to_string(),
            "hours_50": profile.overtime_hours_50.to_string(),
            "hours_100": profile.overtime_hours_100.to_string(),
        }),
        overtime_50 + overtime_100,
        format!(
            "${} / 140: {}h x 1.5 = ${}, {}h x 2 = ${}",
            gross_before_overtime,
            profile.overtime_hours_50,
            overtime_50,
            profile.overtime_hours_100,
            overtime_100
        ),
    );

    let remunerative_gross = sum_money([
        basic_salary,
        supplement,
        seniority,
        title_bonus,
        risk_bonus,
        permanence,
        grade_bonus,
        training_bonus,
        remunerative_bonuses,
        overtime_50,
        overtime_100,
    ]);
    let non_remunerative_gross = sum_money([non_remunerative_bonuses, dependents_bonus]);

    let retirement = calculate_retirement(remunerative_gross);
    let health_law = calculate_health_law(remunerative_gross);
    let welfare_fund = calculate_welfare_fund(remunerative_gross);
    let union_dues = calculate_union_dues(basics, own, profile.union_member);
    let total_deductions = sum_money([retirement, health_law, welfare_fund, union_dues]);
    trace.record(
        "deductions",
        "Deductions",
        json!({
            "remunerative_gross": remunerative_gross.to_string(),
            "union_member": profile.union_member,
        }),
        total_deductions,
        format!(
            "${} + ${} + ${} + ${} = ${}",
            retirement, health_law, welfare_fund, union_dues, total_deductions
        ),
    );

    let gross_total = sum_money([remunerative_gross, non_remunerative_gross]);
    let net_pay = round_money(gross_total - total_deductions);
    trace.record(
        "net_pay",
        "Net Pay",
        json!({
            "gross_total": gross_total.to_string(),
            "total_deductions": total_deductions.to_string(),
        }),
        net_pay,
        format!("${} - ${} = ${}", gross_total, total_deductions, net_pay),
    );

    debug!(
        month = %month.from,
        gross_total = %gross_total,
        net_pay = %net_pay,
        "Computed month"
    );

    MonthlyResult {
        month: *month,
        salary_source: lookup.source(),
        bonuses: bonus_lines,
        basic_salary,
        supplement,
        permanence,
        grade_bonus,
        training_bonus,
        title_bonus,
        seniority,
        risk_bonus,
        dependents_bonus,
        remunerative_bonuses,
        non_remunerative_bonuses,
        gross_before_overtime,
        overtime_50,
        overtime_100,
        remunerative_gross,
        non_remunerative_gross,
        retirement,
        health_law,
        welfare_fund,
        union_dues,
        total_deductions,
        gross_total,
        net_pay,
        deltas: None,
        audit_trace: trace.into_steps(),
    }
}

/// Computes a sequence of months with percentage deltas.
///
/// The salary timeline is resolved once, each month is computed in the
/// given order, and the trend engine fills in the deltas.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::compute_series;
/// use salary_engine::models::{
///     ActingCategory, Category, EmployeeProfile, MonthWindow, PermanenceBracket,
///     RiskAllowance, TitleTier,
/// };
/// use rust_decimal::Decimal;
///
/// let profile = EmployeeProfile {
///     category: Category::Cat3,
///     seniority_years: 0,
///     title: TitleTier::Primary,
///     permanence: PermanenceBracket::UpTo2Years,
///     acting_category: ActingCategory::None,
///     union_member: false,
///     dependents: 0,
///     risk_allowance: RiskAllowance::None,
///     overtime_hours_50: Decimal::ZERO,
///     overtime_hours_100: Decimal::ZERO,
/// };
/// let months = MonthWindow::for_months(2024, &[1, 2]).unwrap();
///
/// let results = compute_series(&profile, &months, &[], &[]);
/// assert_eq!(results.len(), 2);
/// assert!(results.iter().all(|r| r.is_missing_salary()));
/// ```
pub fn compute_series(
    profile: &EmployeeProfile,
    months: &[MonthWindow],
    salary_rows: &[BasicSalaryRow],
    bonuses: &[BonusEntry],
) -> Vec<MonthlyResult> {
    let intervals = resolve_timeline(salary_rows);
    let results = months
        .iter()
        .map(|month| compute_month(profile, month, &intervals, bonuses))
        .collect();
    with_percentage_deltas(results)
}
