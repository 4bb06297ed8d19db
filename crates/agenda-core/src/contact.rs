use serde::Serialize;

use crate::entity::Record;
use crate::error::ValidationError;
use crate::validation::FieldRule;

pub const CONTACT_ID: FieldRule = FieldRule::new("contact ID", 1, 10);
pub const FIRST_NAME: FieldRule = FieldRule::new("first name", 1, 10);
pub const LAST_NAME: FieldRule = FieldRule::new("last name", 1, 10);
pub const PHONE_NUMBER: FieldRule = FieldRule::new("phone number", 1, 10);
pub const ADDRESS: FieldRule = FieldRule::new("address", 1, 30);

/// Contact field table in declaration order.
pub const FIELDS: &[FieldRule] = &[CONTACT_ID, FIRST_NAME, LAST_NAME, PHONE_NUMBER, ADDRESS];

/// A person's contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    contact_id: String,
    first_name: String,
    last_name: String,
    phone_number: String,
    address: String,
}

impl Contact {
    /// Build a contact, validating fields in declaration order.
    /// The first invalid field aborts construction.
    pub fn new(
        contact_id: impl Into<Option<String>>,
        first_name: impl Into<Option<String>>,
        last_name: impl Into<Option<String>>,
        phone_number: impl Into<Option<String>>,
        address: impl Into<Option<String>>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            contact_id: CONTACT_ID.accept(contact_id.into())?,
            first_name: FIRST_NAME.accept(first_name.into())?,
            last_name: LAST_NAME.accept(last_name.into())?,
            phone_number: PHONE_NUMBER.accept(phone_number.into())?,
            address: ADDRESS.accept(address.into())?,
        })
    }

    /// Get the contact ID. It is fixed at construction.
    pub fn contact_id(&self) -> &str {
        &self.contact_id
    }

    /// Get the first name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Get the last name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Get the phone number.
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Get the address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Set the first name (1-10 chars). Unchanged on error.
    pub fn set_first_name(
        &mut self,
        first_name: impl Into<Option<String>>,
    ) -> Result<(), ValidationError> {
        self.first_name = FIRST_NAME.accept(first_name.into())?;
        Ok(())
    }

    /// Set the last name (1-10 chars). Unchanged on error.
    pub fn set_last_name(
        &mut self,
        last_name: impl Into<Option<String>>,
    ) -> Result<(), ValidationError> {
        self.last_name = LAST_NAME.accept(last_name.into())?;
        Ok(())
    }

    /// Set the phone number (1-10 chars). Unchanged on error.
    pub fn set_phone_number(
        &mut self,
        phone_number: impl Into<Option<String>>,
    ) -> Result<(), ValidationError> {
        self.phone_number = PHONE_NUMBER.accept(phone_number.into())?;
        Ok(())
    }

    /// Set the address (1-30 chars). Unchanged on error.
    pub fn set_address(&mut self, address: impl Into<Option<String>>) -> Result<(), ValidationError> {
        self.address = ADDRESS.accept(address.into())?;
        Ok(())
    }
}

impl Record for Contact {
    const KIND: &'static str = "contact";

    fn id(&self) -> &str {
        &self.contact_id
    }
}
