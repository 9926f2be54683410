//! Conversions between domain money values and SQLite REAL columns.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::errors::StorageError;
use expense_insight_core::Result;

pub fn decimal_to_f64(value: Decimal) -> Result<f64> {
    value
        .to_f64()
        .ok_or_else(|| StorageError::InvalidData(format!("Amount {} is out of range", value)).into())
}

pub fn f64_to_decimal(value: f64) -> Result<Decimal> {
    Decimal::from_f64(value)
        .map(|d| d.normalize())
        .ok_or_else(|| StorageError::InvalidData(format!("Stored amount {} is not finite", value)).into())
}
