//! Pay categories and category-indexed amounts.
//!
//! The schema has exactly seven ordered categories, Category 1 being the most
//! senior. Every table in the engine is indexed by [`Category`] rather than by
//! string keys.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One of the seven ordered pay grades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Category 1, the most senior grade.
    #[serde(rename = "category_1")]
    Cat1,
    /// Category 2.
    #[serde(rename = "category_2")]
    Cat2,
    /// Category 3.
    #[serde(rename = "category_3")]
    Cat3,
    /// Category 4.
    #[serde(rename = "category_4")]
    Cat4,
    /// Category 5.
    #[serde(rename = "category_5")]
    Cat5,
    /// Category 6.
    #[serde(rename = "category_6")]
    Cat6,
    /// Category 7, the most junior grade.
    #[serde(rename = "category_7")]
    Cat7,
}

impl Category {
    /// All categories, most senior first.
    pub const ALL: [Category; 7] = [
        Category::Cat1,
        Category::Cat2,
        Category::Cat3,
        Category::Cat4,
        Category::Cat5,
        Category::Cat6,
        Category::Cat7,
    ];

    /// Zero-based position in the ladder (Category 1 is 0).
    pub fn index(self) -> usize {
        match self {
            Category::Cat1 => 0,
            Category::Cat2 => 1,
            Category::Cat3 => 2,
            Category::Cat4 => 3,
            Category::Cat5 => 4,
            Category::Cat6 => 5,
            Category::Cat7 => 6,
        }
    }

    /// The grade number as printed on payslips (1..=7).
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// The next more senior category, or `None` for Category 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use salary_engine::models::Category;
    ///
    /// assert_eq!(Category::Cat3.next_higher(), Some(Category::Cat2));
    /// assert_eq!(Category::Cat1.next_higher(), None);
    /// ```
    pub fn next_higher(self) -> Option<Category> {
        match self {
            Category::Cat1 => None,
            other => Some(Category::ALL[other.index() - 1]),
        }
    }

    /// The dataset column header for this category (e.g. `"CATEGORIA 3"`).
    pub fn column_name(self) -> String {
        format!("CATEGORIA {}", self.number())
    }
}

/// An amount for each of the seven categories.
///
/// Used for basic-salary rows and for bonus entries, which are both valued
/// per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryAmounts([Decimal; 7]);

impl CategoryAmounts {
    /// Creates a table from amounts ordered Category 1 to Category 7.
    pub fn new(amounts: [Decimal; 7]) -> Self {
        Self(amounts)
    }

    /// A table where every category is zero.
    pub fn zero() -> Self {
        Self([Decimal::ZERO; 7])
    }

    /// Returns the amount for a category.
    pub fn get(&self, category: Category) -> Decimal {
        self.0[category.index()]
    }

    /// Returns true when every category is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|a| a.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_categories_are_ordered_most_senior_first() {
        assert!(Category::Cat1 < Category::Cat2);
        assert!(Category::Cat6 < Category::Cat7);
        assert_eq!(Category::ALL.first(), Some(&Category::Cat1));
    }

    #[test]
    fn test_next_higher_walks_up_the_ladder() {
        assert_eq!(Category::Cat7.next_higher(), Some(Category::Cat6));
        assert_eq!(Category::Cat2.next_higher(), Some(Category::Cat1));
        assert_eq!(Category::Cat1.next_higher(), None);
    }

    #[test]
    fn test_column_name() {
        assert_eq!(Category::Cat1.column_name(), "CATEGORIA 1");
        assert_eq!(Category::Cat7.column_name(), "CATEGORIA 7");
    }

    #[test]
    fn test_category_serialization() {
        assert_eq!(
            serde_json::to_string(&Category::Cat3).unwrap(),
            "\"category_3\""
        );
        let parsed: Category = serde_json::from_str("\"category_5\"").unwrap();
        assert_eq!(parsed, Category::Cat5);
    }

    #[test]
    fn test_amounts_lookup_by_category() {
        let amounts = CategoryAmounts::new([
            dec("7"),
            dec("6"),
            dec("5"),
            dec("4"),
            dec("3"),
            dec("2"),
            dec("1"),
        ]);
        assert_eq!(amounts.get(Category::Cat1), dec("7"));
        assert_eq!(amounts.get(Category::Cat7), dec("1"));
        assert!(!amounts.is_zero());
    }

    #[test]
    fn test_zero_amounts() {
        let zero = CategoryAmounts::zero();
        assert!(zero.is_zero());
        assert_eq!(zero.get(Category::Cat4), Decimal::ZERO);
    }
}
