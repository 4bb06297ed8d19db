use agenda_core::contact::{ADDRESS, FIRST_NAME, LAST_NAME, PHONE_NUMBER};
use agenda_core::Contact;

use crate::registry::Registry;

pub type ContactRegistry = Registry<Contact>;

impl Registry<Contact> {
    pub fn add_contact(&self, contact: Contact) -> bool {
        self.add(contact)
    }

    pub fn delete_contact(&self, contact_id: &str) -> bool {
        self.delete(contact_id)
    }

    pub fn update_contact_first_name(
        &self,
        contact_id: &str,
        first_name: impl Into<Option<String>>,
    ) -> bool {
        let first_name = first_name.into();
        self.update(contact_id, FIRST_NAME.name, |c| c.set_first_name(first_name))
    }

    pub fn update_contact_last_name(
        &self,
        contact_id: &str,
        last_name: impl Into<Option<String>>,
    ) -> bool {
        let last_name = last_name.into();
        self.update(contact_id, LAST_NAME.name, |c| c.set_last_name(last_name))
    }

    pub fn update_contact_phone_number(
        &self,
        contact_id: &str,
        phone_number: impl Into<Option<String>>,
    ) -> bool {
        let phone_number = phone_number.into();
        self.update(contact_id, PHONE_NUMBER.name, |c| {
            c.set_phone_number(phone_number)
        })
    }

    pub fn update_contact_address(
        &self,
        contact_id: &str,
        address: impl Into<Option<String>>,
    ) -> bool {
        let address = address.into();
        self.update(contact_id, ADDRESS.name, |c| c.set_address(address))
    }
}
