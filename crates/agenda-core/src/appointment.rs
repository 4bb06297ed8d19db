use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entity::Record;
use crate::error::ValidationError;
use crate::validation::{FieldRule, Validator};

pub const APPOINTMENT_ID: FieldRule = FieldRule::new("appointment ID", 1, 10);
pub const DESCRIPTION: FieldRule = FieldRule::new("description", 1, 50);

/// Appointment string-field table in declaration order. The date has no
/// length bound and is checked by [`Validator::validate_future_date`].
pub const FIELDS: &[FieldRule] = &[APPOINTMENT_ID, DESCRIPTION];

/// Display name of the date field in validation errors.
pub const APPOINTMENT_DATE: &str = "appointment date";

/// A scheduled appointment.
///
/// The date must be in the future when written. It is not re-checked
/// afterwards, so a stored appointment can drift into the past.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    appointment_id: String,
    appointment_date: DateTime<Utc>,
    description: String,
}

impl Appointment {
    /// Build an appointment, validating ID, date, then description.
    /// The first invalid field aborts construction.
    pub fn new(
        appointment_id: impl Into<Option<String>>,
        appointment_date: impl Into<Option<DateTime<Utc>>>,
        description: impl Into<Option<String>>,
    ) -> Result<Self, ValidationError> {
        let appointment_id = APPOINTMENT_ID.accept(appointment_id.into())?;
        let appointment_date = accept_date(appointment_date.into())?;
        let description = DESCRIPTION.accept(description.into())?;
        Ok(Self {
            appointment_id,
            appointment_date,
            description,
        })
    }

    /// Get the appointment ID. It is fixed at construction.
    pub fn appointment_id(&self) -> &str {
        &self.appointment_id
    }

    /// Get the date as last written.
    pub fn appointment_date(&self) -> DateTime<Utc> {
        self.appointment_date
    }

    /// Get the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Set the date. It must be strictly after now; unchanged on error.
    pub fn set_appointment_date(
        &mut self,
        appointment_date: impl Into<Option<DateTime<Utc>>>,
    ) -> Result<(), ValidationError> {
        self.appointment_date = accept_date(appointment_date.into())?;
        Ok(())
    }

    /// Set the description (1-50 chars). Unchanged on error.
    pub fn set_description(
        &mut self,
        description: impl Into<Option<String>>,
    ) -> Result<(), ValidationError> {
        self.description = DESCRIPTION.accept(description.into())?;
        Ok(())
    }
}

fn accept_date(value: Option<DateTime<Utc>>) -> Result<DateTime<Utc>, ValidationError> {
    Validator::validate_future_date(APPOINTMENT_DATE, value)?;
    value.ok_or(ValidationError::NullField {
        field: APPOINTMENT_DATE,
    })
}

impl Record for Appointment {
    const KIND: &'static str = "appointment";

    fn id(&self) -> &str {
        &self.appointment_id
    }
}
