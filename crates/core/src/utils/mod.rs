pub mod time_utils;

use uuid::Uuid;

use crate::errors::{Error, Result, ValidationError};

/// Rejects identifiers that cannot name a stored record.
pub fn ensure_record_id(id: &str) -> Result<()> {
    Uuid::parse_str(id)
        .map(|_| ())
        .map_err(|_| Error::Validation(ValidationError::InvalidId(id.to_string())))
}

/// Fresh identifier for a new record.
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}
