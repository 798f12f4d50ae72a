//! Calendar month windows and semesters.
//!
//! This module contains the [`MonthWindow`] type that every lookup in the
//! engine is keyed by, and [`Semester`] for the semiannual bonus.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// One calendar month, both ends inclusive.
///
/// # Example
///
/// ```
/// use salary_engine::models::MonthWindow;
/// use chrono::NaiveDate;
///
/// let feb = MonthWindow::new(2024, 2).unwrap();
/// assert_eq!(feb.from, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
/// assert_eq!(feb.to, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthWindow {
    /// First day of the month.
    pub from: NaiveDate,
    /// Last day of the month.
    pub to: NaiveDate,
}

impl MonthWindow {
    /// Builds the window for `month` (1..=12) of `year`.
    ///
    /// Returns [`EngineError::InvalidMonth`] for a month outside 1..=12.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        let from = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(EngineError::InvalidMonth { month })?;
        let next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .ok_or(EngineError::InvalidMonth { month })?;
        let to = next.pred_opt().ok_or(EngineError::InvalidMonth { month })?;
        Ok(Self { from, to })
    }

    /// Builds windows for several months of one year, in the given order.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_engine::models::MonthWindow;
    ///
    /// let months = MonthWindow::for_months(2024, &[2, 3]).unwrap();
    /// assert_eq!(months.len(), 2);
    /// assert_eq!(months[1].month(), 3);
    /// ```
    pub fn for_months(year: i32, months: &[u32]) -> EngineResult<Vec<Self>> {
        months.iter().map(|m| Self::new(year, *m)).collect()
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.from.year()
    }

    /// The month number (1..=12).
    pub fn month(&self) -> u32 {
        self.from.month()
    }

    /// Returns true for January windows.
    pub fn is_january(&self) -> bool {
        self.month() == 1
    }

    /// Inclusive overlap test against `[start, end]`.
    ///
    /// Two ranges overlap when `start1 <= end2` and `start2 <= end1`.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.from <= end && start <= self.to
    }
}

/// Half of a calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Semester {
    /// January to June.
    First,
    /// July to December.
    Second,
}

impl Semester {
    /// The semester a month number belongs to.
    pub fn of_month(month: u32) -> Semester {
        if month <= 6 {
            Semester::First
        } else {
            Semester::Second
        }
    }

    /// Returns the semester when `months` is exactly six distinct months of a
    /// single year that all fall in the same half.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_engine::models::{MonthWindow, Semester};
    ///
    /// let first = MonthWindow::for_months(2024, &[1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(Semester::of(&first), Some(Semester::First));
    ///
    /// let partial = MonthWindow::for_months(2024, &[1, 2, 3, 4, 5]).unwrap();
    /// assert_eq!(Semester::of(&partial), None);
    /// ```
    pub fn of(months: &[MonthWindow]) -> Option<Semester> {
        let first = months.first()?;
        let semester = Semester::of_month(first.month());

        let mut seen = [false; 12];
        for month in months {
            if month.year() != first.year() || Semester::of_month(month.month()) != semester {
                return None;
            }
            seen[(month.month() - 1) as usize] = true;
        }

        let range = match semester {
            Semester::First => 0..6,
            Semester::Second => 6..12,
        };
        let complete = months.len() == 6 && seen[range].iter().all(|s| *s);
        complete.then_some(semester)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// MW-001: month bounds
    #[test]
    fn test_month_window_bounds() {
        let jan = MonthWindow::new(2025, 1).unwrap();
        assert_eq!(jan.from, date(2025, 1, 1));
        assert_eq!(jan.to, date(2025, 1, 31));
        assert!(jan.is_january());
    }

    /// MW-002: december rolls over to next year
    #[test]
    fn test_december_ends_on_31st() {
        let dec = MonthWindow::new(2024, 12).unwrap();
        assert_eq!(dec.to, date(2024, 12, 31));
        assert_eq!(dec.year(), 2024);
    }

    /// MW-003: invalid month rejected
    #[test]
    fn test_invalid_month_returns_error() {
        for month in [0, 13] {
            match MonthWindow::new(2024, month) {
                Err(EngineError::InvalidMonth { month: m }) => assert_eq!(m, month),
                other => panic!("Expected InvalidMonth, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_for_months_propagates_invalid_month() {
        assert!(MonthWindow::for_months(2024, &[1, 14]).is_err());
    }

    #[test]
    fn test_overlaps_is_inclusive_on_both_ends() {
        let march = MonthWindow::new(2024, 3).unwrap();
        assert!(march.overlaps(date(2024, 2, 1), date(2024, 3, 1)));
        assert!(march.overlaps(date(2024, 3, 31), date(2024, 12, 31)));
        assert!(!march.overlaps(date(2024, 2, 1), date(2024, 2, 29)));
        assert!(!march.overlaps(date(2024, 4, 1), date(2024, 4, 1)));
    }

    #[test]
    fn test_second_semester_detected() {
        let months = MonthWindow::for_months(2024, &[12, 11, 10, 9, 8, 7]).unwrap();
        assert_eq!(Semester::of(&months), Some(Semester::Second));
    }

    #[test]
    fn test_mixed_semesters_rejected() {
        let months = MonthWindow::for_months(2024, &[4, 5, 6, 7, 8, 9]).unwrap();
        assert_eq!(Semester::of(&months), None);
    }

    #[test]
    fn test_duplicate_months_rejected() {
        let months = MonthWindow::for_months(2024, &[1, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(Semester::of(&months), None);
    }

    #[test]
    fn test_months_from_different_years_rejected() {
        let mut months = MonthWindow::for_months(2024, &[1, 2, 3, 4, 5]).unwrap();
        months.push(MonthWindow::new(2025, 6).unwrap());
        assert_eq!(Semester::of(&months), None);
    }

    #[test]
    fn test_empty_months_have_no_semester() {
        assert_eq!(Semester::of(&[]), None);
    }
}
