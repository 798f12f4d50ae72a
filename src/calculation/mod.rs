//! Calculation logic for the salary engine.
//!
//! This module contains the rounding policy, the static ratio tables, the
//! salary timeline resolver and month matcher, one calculator per pay
//! component, the monthly pipeline that combines them, and the trend and SAC
//! engines that run over a sequence of months.

mod allowances;
mod category_bonuses;
mod deductions;
mod interval_matcher;
mod overtime;
mod pipeline;
pub mod ratios;
mod rounding;
mod sac;
mod seniority;
mod supplement;
mod timeline;
mod trend;

pub use allowances::{calculate_dependents_bonus, calculate_risk_allowance};
pub use category_bonuses::{calculate_grade_bonus, calculate_title_bonus, calculate_training_bonus};
pub use deductions::{
    calculate_health_law, calculate_retirement, calculate_union_dues, calculate_welfare_fund,
};
pub use interval_matcher::{SalaryLookup, filter_bonuses_for_month, find_salary_for_month};
pub use overtime::{calculate_overtime_50, calculate_overtime_100};
pub use pipeline::{compute_month, compute_series};
pub use rounding::{percentage_change, round_money, sum_money};
pub use sac::compute_sac;
pub use seniority::{calculate_permanence, calculate_seniority};
pub use supplement::calculate_supplement;
pub use timeline::resolve_timeline;
pub use trend::with_percentage_deltas;
