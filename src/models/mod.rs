//! Core data models for the salary engine.
//!
//! This module contains all the domain models used throughout the engine.

mod category;
mod month;
mod monthly_result;
mod profile;
mod salary_table;

pub use category::{Category, CategoryAmounts};
pub use month::{MonthWindow, Semester};
pub use monthly_result::{
    AuditStep, BonusLine, MonthlyResult, PercentageDeltas, SacResult, SalarySource,
};
pub use profile::{
    ActingCategory, EmployeeProfile, MAX_OVERTIME_HOURS, PermanenceBracket, RiskAllowance, TitleTier,
};
pub use salary_table::{BasicSalaryRow, BonusEntry, ResolvedSalaryInterval};
