use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

use crate::constants::{MAX_PERIOD_YEAR, MIN_PERIOD_YEAR};
use crate::errors::{Error, Result};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Today's date in UTC. All "current month/year" defaults derive from this.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn current_month() -> u32 {
    today().month()
}

pub fn current_year() -> i32 {
    today().year()
}

pub fn validate_month(month: u32) -> Result<u32> {
    if (1..=12).contains(&month) {
        Ok(month)
    } else {
        Err(Error::invalid_input("Month must be between 1 and 12"))
    }
}

pub fn validate_year(year: i32) -> Result<i32> {
    if (MIN_PERIOD_YEAR..=MAX_PERIOD_YEAR).contains(&year) {
        Ok(year)
    } else {
        Err(Error::invalid_input(format!(
            "Year must be between {} and {}",
            MIN_PERIOD_YEAR, MAX_PERIOD_YEAR
        )))
    }
}

/// Half-open date range `[first day of month, first day of next month)`.
pub fn month_range(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate)> {
    let month = validate_month(month)?;
    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| Error::invalid_input(format!("Invalid period {}-{}", year, month)))?;
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .ok_or_else(|| Error::invalid_input(format!("Invalid period {}-{}", year, month)))?;
    Ok((start, end))
}

/// Half-open date range covering a whole calendar year.
pub fn year_range(year: i32) -> Result<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| Error::invalid_input(format!("Invalid year {}", year)))?;
    let end = NaiveDate::from_ymd_opt(year + 1, 1, 1)
        .ok_or_else(|| Error::invalid_input(format!("Invalid year {}", year)))?;
    Ok((start, end))
}

/// Parses a calendar date given either as `YYYY-MM-DD` or as an RFC 3339
/// timestamp, in which case the UTC date is used.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .map_err(|_| Error::invalid_input(format!("Invalid date '{}'", raw)))
}

pub fn deserialize_date<'de, D>(deserializer: D) -> std::result::Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).map_err(serde::de::Error::custom)
}

pub fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| parse_date(&raw).map_err(serde::de::Error::custom))
        .transpose()
}

/// English month name for 1-based `month`, empty for out-of-range input.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|idx| MONTH_NAMES.get(idx as usize))
        .copied()
        .unwrap_or("")
}
