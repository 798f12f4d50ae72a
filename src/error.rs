//! Error types for the salary engine.
//!
//! The monthly computation itself is total; these errors only arise while
//! loading datasets, parsing raw rows, or building calendar months.

use thiserror::Error;

/// The main error type for the salary engine.
///
/// # Example
///
/// ```
/// use salary_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/profile.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/profile.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration or dataset file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration or dataset file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A monetary cell could not be converted to a number.
    #[error("Invalid amount: '{value}'")]
    InvalidAmount {
        /// The raw cell contents.
        value: String,
    },

    /// A date cell could not be parsed.
    #[error("Invalid date: '{value}'")]
    InvalidDate {
        /// The raw cell contents.
        value: String,
    },

    /// A month number outside 1..=12 was requested.
    #[error("Invalid month: {month}")]
    InvalidMonth {
        /// The requested month number.
        month: u32,
    },

    /// A row or profile field held an unsupported value.
    #[error("Invalid field '{field}': {message}")]
    InvalidField {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/basic_salaries.tsv".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/basic_salaries.tsv"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/profile.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/profile.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_amount_displays_value() {
        let error = EngineError::InvalidAmount {
            value: "12a".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid amount: '12a'");
    }

    #[test]
    fn test_invalid_date_displays_value() {
        let error = EngineError::InvalidDate {
            value: "31/02/2024".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid date: '31/02/2024'");
    }

    #[test]
    fn test_invalid_month_displays_month() {
        let error = EngineError::InvalidMonth { month: 13 };
        assert_eq!(error.to_string(), "Invalid month: 13");
    }

    #[test]
    fn test_invalid_field_displays_field_and_message() {
        let error = EngineError::InvalidField {
            field: "REMUNERATIVO".to_string(),
            message: "expected SI or NO, got 'TALVEZ'".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid field 'REMUNERATIVO': expected SI or NO, got 'TALVEZ'"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_month() -> EngineResult<()> {
            Err(EngineError::InvalidMonth { month: 0 })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_month()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
