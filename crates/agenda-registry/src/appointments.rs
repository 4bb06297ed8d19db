use chrono::{DateTime, Utc};

use agenda_core::appointment::{APPOINTMENT_DATE, DESCRIPTION};
use agenda_core::Appointment;

use crate::registry::Registry;

pub type AppointmentRegistry = Registry<Appointment>;

impl Registry<Appointment> {
    pub fn add_appointment(&self, appointment: Appointment) -> bool {
        self.add(appointment)
    }

    pub fn delete_appointment(&self, appointment_id: &str) -> bool {
        self.delete(appointment_id)
    }

    pub fn update_appointment_date(
        &self,
        appointment_id: &str,
        appointment_date: impl Into<Option<DateTime<Utc>>>,
    ) -> bool {
        let appointment_date = appointment_date.into();
        self.update(appointment_id, APPOINTMENT_DATE, |a| {
            a.set_appointment_date(appointment_date)
        })
    }

    pub fn update_appointment_description(
        &self,
        appointment_id: &str,
        description: impl Into<Option<String>>,
    ) -> bool {
        let description = description.into();
        self.update(appointment_id, DESCRIPTION.name, |a| {
            a.set_description(description)
        })
    }
}
