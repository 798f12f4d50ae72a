//! Dataset loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading an employee
//! profile and its salary tables from a directory.

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{BasicSalaryRow, BonusEntry, EmployeeProfile};

use super::parsing::{parse_basic_salary_record, parse_bonus_record};
use super::types::{RawBasicSalaryRecord, RawBonusRecord, Settings};

/// Loads and provides access to a payroll dataset.
///
/// # Directory Structure
///
/// ```text
/// config/sample/
/// ├── profile.yaml        # Employee profile
/// ├── basic_salaries.tsv  # FECHA, CATEGORIA 1..7
/// ├── bonuses.tsv         # DESDE, HASTA, CONCEPTO, REMUNERATIVO, CATEGORIA 1..7
/// └── settings.yaml       # Optional: amount_format (plain | ars)
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_engine::calculation::compute_series;
/// use salary_engine::config::ConfigLoader;
/// use salary_engine::models::MonthWindow;
///
/// let loader = ConfigLoader::load("./config/sample")?;
/// let months = MonthWindow::for_months(2024, &[2, 3])?;
/// let results = compute_series(loader.profile(), &months, loader.salary_rows(), loader.bonuses());
/// println!("Net pay in March: {}", results[1].net_pay);
/// # Ok::<(), salary_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    profile: EmployeeProfile,
    settings: Settings,
    salary_rows: Vec<BasicSalaryRow>,
    bonuses: Vec<BonusEntry>,
}

impl ConfigLoader {
    /// Loads a dataset from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `profile.yaml`, `basic_salaries.tsv` or `bonuses.tsv` is missing
    /// - any file is malformed
    /// - any cell holds an invalid amount, date or flag
    /// - the profile fails [`EmployeeProfile::validate`]
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let profile = Self::load_yaml::<EmployeeProfile>(&path.join("profile.yaml"))?;
        profile.validate()?;

        let settings_path = path.join("settings.yaml");
        let settings = if settings_path.exists() {
            Self::load_yaml::<Settings>(&settings_path)?
        } else {
            Settings::default()
        };

        let salary_rows = Self::load_table::<RawBasicSalaryRecord>(&path.join("basic_salaries.tsv"))?
            .iter()
            .map(|record| parse_basic_salary_record(record, settings.amount_format))
            .collect::<EngineResult<Vec<_>>>()?;

        let bonuses = Self::load_table::<RawBonusRecord>(&path.join("bonuses.tsv"))?
            .iter()
            .map(|record| parse_bonus_record(record, settings.amount_format))
            .collect::<EngineResult<Vec<_>>>()?;

        info!(
            path = %path.display(),
            salary_rows = salary_rows.len(),
            bonuses = bonuses.len(),
            "Loaded payroll dataset"
        );

        Ok(Self {
            profile,
            settings,
            salary_rows,
            bonuses,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every record of a tab-separated table with a header row.
    fn load_table<T: DeserializeOwned>(path: &Path) -> EngineResult<Vec<T>> {
        let path_str = path.display().to_string();

        if !path.exists() {
            return Err(EngineError::ConfigNotFound { path: path_str });
        }

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_path(path)
            .map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        reader
            .deserialize()
            .map(|record| {
                record.map_err(|e| EngineError::ConfigParseError {
                    path: path_str.clone(),
                    message: e.to_string(),
                })
            })
            .collect()
    }

    /// Returns the employee profile.
    pub fn profile(&self) -> &EmployeeProfile {
        &self.profile
    }

    /// Returns the dataset settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the basic-salary rows, in file order.
    pub fn salary_rows(&self) -> &[BasicSalaryRow] {
        &self.salary_rows
    }

    /// Returns the bonus entries, in file order.
    pub fn bonuses(&self) -> &[BonusEntry] {
        &self.bonuses
    }
}
