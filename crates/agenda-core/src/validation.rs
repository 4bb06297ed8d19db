use chrono::{DateTime, Utc};

use crate::error::ValidationError;

/// Field checks shared by every entity kind.
pub struct Validator;

impl Validator {
    /// Validate a required string field against inclusive length bounds.
    ///
    /// Checks run in a fixed order: presence, then maximum, then minimum.
    /// Length is counted in UTF-16 code units, so a character outside the
    /// Basic Multilingual Plane counts as two.
    pub fn validate_string_field(
        field: &'static str,
        value: Option<&str>,
        min_len: usize,
        max_len: usize,
    ) -> Result<(), ValidationError> {
        let value = value.ok_or(ValidationError::NullField { field })?;
        let len = value.encode_utf16().count();
        if len > max_len {
            return Err(ValidationError::TooLong {
                field,
                max: max_len,
                actual: len,
            });
        }
        if len < min_len {
            return Err(ValidationError::TooShort {
                field,
                min: min_len,
                actual: len,
            });
        }
        Ok(())
    }

    /// Validate a required date that must lie strictly after the current instant.
    pub fn validate_future_date(
        field: &'static str,
        value: Option<DateTime<Utc>>,
    ) -> Result<(), ValidationError> {
        Self::validate_future_date_at(field, value, Utc::now())
    }

    /// Same as [`Validator::validate_future_date`] with an explicit "now".
    pub fn validate_future_date_at(
        field: &'static str,
        value: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Result<(), ValidationError> {
        let value = value.ok_or(ValidationError::NullField { field })?;
        if value <= now {
            return Err(ValidationError::PastDate { field });
        }
        Ok(())
    }
}

/// One row of an entity's field table: display name plus length bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub name: &'static str,
    pub min_len: usize,
    pub max_len: usize,
}

impl FieldRule {
    pub const fn new(name: &'static str, min_len: usize, max_len: usize) -> Self {
        Self {
            name,
            min_len,
            max_len,
        }
    }

    /// Validate `value` against this rule and hand back the owned string.
    pub fn accept(&self, value: Option<String>) -> Result<String, ValidationError> {
        Validator::validate_string_field(self.name, value.as_deref(), self.min_len, self.max_len)?;
        value.ok_or(ValidationError::NullField { field: self.name })
    }
}
