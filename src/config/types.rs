//! Dataset and settings types.
//!
//! This module contains the raw, string-valued records deserialized from the
//! tab-separated salary tables, and the strongly-typed settings deserialized
//! from YAML.

use serde::Deserialize;

/// How monetary cells in the tables are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountFormat {
    /// `1,054,358.50`: comma thousands separator, dot decimal point.
    #[default]
    Plain,
    /// `$1.054.358,50`: dot thousands separator, comma decimal point.
    Ars,
}

/// Optional `settings.yaml` of a dataset directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Format of every amount in the tables.
    #[serde(default)]
    pub amount_format: AmountFormat,
}

/// One row of `basic_salaries.tsv`, exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawBasicSalaryRecord {
    /// Effective date of the row.
    #[serde(rename = "FECHA")]
    pub effective_date: String,
    /// Basic for Category 1.
    #[serde(rename = "CATEGORIA 1")]
    pub category_1: String,
    /// Basic for Category 2.
    #[serde(rename = "CATEGORIA 2")]
    pub category_2: String,
    /// Basic for Category 3.
    #[serde(rename = "CATEGORIA 3")]
    pub category_3: String,
    /// Basic for Category 4.
    #[serde(rename = "CATEGORIA 4")]
    pub category_4: String,
    /// Basic for Category 5.
    #[serde(rename = "CATEGORIA 5")]
    pub category_5: String,
    /// Basic for Category 6.
    #[serde(rename = "CATEGORIA 6")]
    pub category_6: String,
    /// Basic for Category 7.
    #[serde(rename = "CATEGORIA 7")]
    pub category_7: String,
}

impl RawBasicSalaryRecord {
    /// The seven category cells in category order.
    pub fn category_cells(&self) -> [&str; 7] {
        [
            self.category_1.as_str(),
            self.category_2.as_str(),
            self.category_3.as_str(),
            self.category_4.as_str(),
            self.category_5.as_str(),
            self.category_6.as_str(),
            self.category_7.as_str(),
        ]
    }
}

/// One row of `bonuses.tsv`, exactly as written.
///
/// Columns other than the ones below are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawBonusRecord {
    /// First day the entry applies.
    #[serde(rename = "DESDE")]
    pub valid_from: String,
    /// Last day the entry applies.
    #[serde(rename = "HASTA")]
    pub valid_to: String,
    /// Free-text label.
    #[serde(rename = "CONCEPTO")]
    pub label: String,
    /// `SI` or `NO`.
    #[serde(rename = "REMUNERATIVO")]
    pub remunerative: String,
    /// Amount for Category 1.
    #[serde(rename = "CATEGORIA 1")]
    pub category_1: String,
    /// Amount for Category 2.
    #[serde(rename = "CATEGORIA 2")]
    pub category_2: String,
    /// Amount for Category 3.
    #[serde(rename = "CATEGORIA 3")]
    pub category_3: String,
    /// Amount for Category 4.
    #[serde(rename = "CATEGORIA 4")]
    pub category_4: String,
    /// Amount for Category 5.
    #[serde(rename = "CATEGORIA 5")]
    pub category_5: String,
    /// Amount for Category 6.
    #[serde(rename = "CATEGORIA 6")]
    pub category_6: String,
    /// Amount for Category 7.
    #[serde(rename = "CATEGORIA 7")]
    pub category_7: String,
}

impl RawBonusRecord {
    /// The seven category cells in category order.
    pub fn category_cells(&self) -> [&str; 7] {
        [
            self.category_1.as_str(),
            self.category_2.as_str(),
            self.category_3.as_str(),
            self.category_4.as_str(),
            self.category_5.as_str(),
            self.category_6.as_str(),
            self.category_7.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default_to_plain() {
        let settings: Settings = serde_yaml::from_str("{}").unwrap();
        assert_eq!(settings.amount_format, AmountFormat::Plain);
    }

    #[test]
    fn test_settings_ars_format() {
        let settings: Settings = serde_yaml::from_str("amount_format: ars").unwrap();
        assert_eq!(settings.amount_format, AmountFormat::Ars);
    }

    #[test]
    fn test_settings_unknown_format_is_rejected() {
        let result: Result<Settings, _> = serde_yaml::from_str("amount_format: euro");
        assert!(result.is_err());
    }
}
