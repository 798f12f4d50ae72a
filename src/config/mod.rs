//! Dataset loading for the salary engine.
//!
//! This module loads an employee profile from YAML and the basic-salary and
//! bonus tables from tab-separated files, converting every raw cell into the
//! typed rows the calculation core consumes.
//!
//! # Example
//!
//! ```no_run
//! use salary_engine::config::ConfigLoader;
//!
//! let dataset = ConfigLoader::load("./config/sample").unwrap();
//! println!("Loaded {} salary rows", dataset.salary_rows().len());
//! ```

mod loader;
mod parsing;
mod types;

pub use loader::ConfigLoader;
pub use parsing::{
    parse_amount, parse_basic_salary_record, parse_bonus_record, parse_date, parse_remunerative,
};
pub use types::{AmountFormat, RawBasicSalaryRecord, RawBonusRecord, Settings};
