//! Expense domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_EXPENSE_TITLE_LENGTH, MIN_EXPENSE_AMOUNT};
use crate::errors::{Error, Result, ValidationError};
use crate::utils::time_utils::{
    current_year, deserialize_date, deserialize_optional_date, month_name, month_range,
    validate_month, validate_year, year_range,
};

/// Fixed set of expense categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ExpenseCategory {
    Food,
    Transport,
    Utilities,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 4] = [
        ExpenseCategory::Food,
        ExpenseCategory::Transport,
        ExpenseCategory::Utilities,
        ExpenseCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Transport => "Transport",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpenseCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ExpenseCategory::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = ExpenseCategory::ALL.iter().map(|c| c.as_str()).collect();
                Error::invalid_input(format!(
                    "Invalid category. Must be one of: {}",
                    names.join(", ")
                ))
            })
    }
}

impl TryFrom<String> for ExpenseCategory {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Domain model representing an expense
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub title: String,
    pub category: ExpenseCategory,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub created_by: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new expense
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub title: String,
    pub category: ExpenseCategory,
    pub amount: Decimal,
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
}

impl NewExpense {
    pub fn validate(mut self) -> Result<Self> {
        self.title = validate_title(&self.title)?;
        validate_amount(self.amount)?;
        Ok(self)
    }
}

/// Partial update for an expense; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseUpdate {
    pub title: Option<String>,
    pub category: Option<ExpenseCategory>,
    pub amount: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub date: Option<NaiveDate>,
}

impl ExpenseUpdate {
    pub fn validate(mut self) -> Result<Self> {
        if let Some(title) = self.title.take() {
            self.title = Some(validate_title(&title)?);
        }
        if let Some(amount) = self.amount {
            validate_amount(amount)?;
        }
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.category.is_none() && self.amount.is_none() && self.date.is_none()
    }
}

fn validate_title(raw: &str) -> Result<String> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            "Title".to_string(),
        )));
    }
    if title.chars().count() > MAX_EXPENSE_TITLE_LENGTH {
        return Err(Error::invalid_input(format!(
            "Title must be less than {} characters",
            MAX_EXPENSE_TITLE_LENGTH
        )));
    }
    Ok(title.to_string())
}

fn validate_amount(amount: Decimal) -> Result<()> {
    let min: Decimal = MIN_EXPENSE_AMOUNT.parse()?;
    if amount < min {
        return Err(Error::invalid_input(format!(
            "Amount must be at least {}",
            MIN_EXPENSE_AMOUNT
        )));
    }
    Ok(())
}

/// Raw listing filters as received from the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseQuery {
    pub category: Option<String>,
    pub month: Option<u32>,
    pub year: Option<i32>,
}

/// Validated listing filters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseFilter {
    pub category: Option<ExpenseCategory>,
    pub month: Option<u32>,
    pub year: Option<i32>,
}

impl ExpenseFilter {
    pub fn from_query(query: ExpenseQuery) -> Result<Self> {
        let category = query
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(ExpenseCategory::from_str)
            .transpose()?;
        let month = query.month.map(validate_month).transpose()?;
        let year = query.year.map(validate_year).transpose()?;
        Ok(ExpenseFilter {
            category,
            month,
            year,
        })
    }

    /// Date range selected by the month/year filters, if any.
    ///
    /// A month without a year refers to the current year.
    pub fn date_range(&self) -> Result<Option<(NaiveDate, NaiveDate)>> {
        match (self.month, self.year) {
            (Some(month), year) => {
                month_range(year.unwrap_or_else(current_year), month).map(Some)
            }
            (None, Some(year)) => year_range(year).map(Some),
            (None, None) => Ok(None),
        }
    }

    /// Caller-facing summary of the applied filters.
    pub fn describe(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(category) = self.category {
            parts.push(format!("category: {}", category));
        }
        if let Some(month) = self.month {
            let year = self.year.unwrap_or_else(current_year);
            parts.push(format!("month: {} {}", month_name(month), year));
        } else if let Some(year) = self.year {
            parts.push(format!("year: {}", year));
        }

        if parts.is_empty() {
            "Expenses retrieved successfully".to_string()
        } else {
            format!(
                "Expenses retrieved successfully (filtered by: {})",
                parts.join(", ")
            )
        }
    }
}

/// Repository-level query: owner plus resolved filters.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseSearch {
    pub owner_id: String,
    pub category: Option<ExpenseCategory>,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
}

/// Raw per-category aggregate as produced by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryAggregate {
    pub category: ExpenseCategory,
    pub total: Decimal,
    pub count: i64,
}

/// One row of the category chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub total: Decimal,
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn new_expense(title: &str, amount: Decimal) -> NewExpense {
        NewExpense {
            title: title.to_string(),
            category: ExpenseCategory::Food,
            amount,
            date: NaiveDate::from_ymd_opt(2024, 10, 5).unwrap(),
        }
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!(
            "Transport".parse::<ExpenseCategory>().unwrap(),
            ExpenseCategory::Transport
        );
        let err = "Rent".parse::<ExpenseCategory>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid category. Must be one of: Food, Transport, Utilities, Other"
        );
    }

    #[test]
    fn test_category_serializes_as_display_name() {
        let json = serde_json::to_string(&ExpenseCategory::Utilities).unwrap();
        assert_eq!(json, "\"Utilities\"");
        assert!(serde_json::from_str::<ExpenseCategory>("\"utilities\"").is_err());
    }

    #[test]
    fn test_new_expense_accepts_timestamp_dates() {
        let parsed: NewExpense = serde_json::from_str(
            r#"{"title":"Taxi","category":"Transport","amount":18.5,"date":"2024-10-05T18:30:00.000Z"}"#,
        )
        .unwrap();
        assert_eq!(parsed.date, NaiveDate::from_ymd_opt(2024, 10, 5).unwrap());
        assert_eq!(parsed.amount, dec!(18.5));

        let bad = serde_json::from_str::<NewExpense>(
            r#"{"title":"Taxi","category":"Rent","amount":1,"date":"2024-10-05"}"#,
        )
        .unwrap_err();
        assert!(bad.to_string().contains("Invalid category"));
    }

    #[test]
    fn test_update_date_is_optional() {
        let update: ExpenseUpdate = serde_json::from_str(r#"{"title":"Bus"}"#).unwrap();
        assert!(update.date.is_none());
        let update: ExpenseUpdate = serde_json::from_str(r#"{"date":"2024-01-31"}"#).unwrap();
        assert_eq!(update.date, NaiveDate::from_ymd_opt(2024, 1, 31));
    }

    #[test]
    fn test_new_expense_validation() {
        let ok = new_expense("  Lunch ", dec!(12.50)).validate().unwrap();
        assert_eq!(ok.title, "Lunch");

        assert!(new_expense("   ", dec!(1)).validate().is_err());
        assert!(new_expense(&"x".repeat(101), dec!(1)).validate().is_err());
        assert!(new_expense(&"x".repeat(100), dec!(1)).validate().is_ok());
        assert!(new_expense("Lunch", dec!(0)).validate().is_err());
        assert!(new_expense("Lunch", dec!(0.01)).validate().is_ok());
    }

    #[test]
    fn test_update_validation_only_checks_present_fields() {
        let update = ExpenseUpdate {
            amount: Some(dec!(3)),
            ..Default::default()
        };
        assert!(update.validate().is_ok());

        let bad = ExpenseUpdate {
            amount: Some(dec!(-1)),
            ..Default::default()
        };
        assert!(bad.validate().is_err());
        assert!(ExpenseUpdate::default().is_empty());
    }

    #[test]
    fn test_filter_from_query_rejects_out_of_range_values() {
        let bad_month = ExpenseQuery {
            month: Some(13),
            ..Default::default()
        };
        assert!(ExpenseFilter::from_query(bad_month).is_err());

        let bad_year = ExpenseQuery {
            year: Some(1999),
            ..Default::default()
        };
        assert!(ExpenseFilter::from_query(bad_year).is_err());

        let bad_category = ExpenseQuery {
            category: Some("Rent".into()),
            ..Default::default()
        };
        assert!(ExpenseFilter::from_query(bad_category).is_err());
    }

    #[test]
    fn test_filter_date_range() {
        let filter = ExpenseFilter {
            month: Some(2),
            year: Some(2024),
            ..Default::default()
        };
        let (start, end) = filter.date_range().unwrap().unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());

        let year_only = ExpenseFilter {
            year: Some(2023),
            ..Default::default()
        };
        let (start, end) = year_only.date_range().unwrap().unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

        assert!(ExpenseFilter::default().date_range().unwrap().is_none());
    }

    #[test]
    fn test_filter_describe() {
        assert_eq!(
            ExpenseFilter::default().describe(),
            "Expenses retrieved successfully"
        );
        let filter = ExpenseFilter {
            category: Some(ExpenseCategory::Food),
            month: Some(10),
            year: Some(2024),
        };
        assert_eq!(
            filter.describe(),
            "Expenses retrieved successfully (filtered by: category: Food, month: October 2024)"
        );
        let year_only = ExpenseFilter {
            year: Some(2023),
            ..Default::default()
        };
        assert_eq!(
            year_only.describe(),
            "Expenses retrieved successfully (filtered by: year: 2023)"
        );
    }
}
