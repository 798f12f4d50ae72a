//! Salary engine for a seven-category payroll schema.
//!
//! This crate computes monthly gross and net pay from a versioned table of
//! basic salaries and a table of dated bonus entries, derives month-over-month
//! percentage changes, and computes the semiannual supplementary payment (SAC).

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
