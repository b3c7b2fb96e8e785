//! Contact entity and the domain event emitted when one is created.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Maximum length of a contact name.
pub const MAX_NAME_LEN: usize = 50;

/// Maximum length of a contact phone number.
pub const MAX_PHONE_LEN: usize = 9;

/// Maximum length of a contact email address.
pub const MAX_EMAIL_LEN: usize = 80;

/// A contact record owned by local persistence.
///
/// The region reference must resolve to an existing region at create and
/// update time; the workflows enforce it against the remote region service.
/// Records are never physically removed: [`Contact::mark_deleted`] sets the
/// soft-delete flag and list/count operations skip flagged rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Unique identifier for the contact
    pub id: String,

    /// Display name (max 50 characters)
    pub name: String,

    /// Phone number without the area code (max 9 characters)
    pub phone: String,

    /// Email address (max 80 characters)
    pub email: String,

    /// Identifier of the region the contact belongs to
    pub region_id: String,

    /// Soft-delete flag
    #[serde(default)]
    pub is_deleted: bool,
}

impl Contact {
    /// Build a validated contact. Field limits match the backing schema.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        region_id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let phone = phone.into();
        let email = email.into();

        check_len("name", &name, MAX_NAME_LEN)?;
        check_len("phone", &phone, MAX_PHONE_LEN)?;
        check_len("email", &email, MAX_EMAIL_LEN)?;

        Ok(Self {
            id: id.into(),
            name,
            phone,
            email,
            region_id: region_id.into(),
            is_deleted: false,
        })
    }

    /// Overwrite the mutable fields from an incoming record.
    ///
    /// The caller is responsible for re-validating the region reference
    /// before applying it.
    pub fn apply_update(&mut self, incoming: &Contact) {
        self.name = incoming.name.clone();
        self.phone = incoming.phone.clone();
        self.email = incoming.email.clone();
        self.region_id = incoming.region_id.clone();
    }

    /// Set the soft-delete flag. The record stays in storage.
    pub fn mark_deleted(&mut self) {
        self.is_deleted = true;
    }
}

fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

/// Snapshot of a contact at creation time, published to the message channel.
///
/// Fire-and-forget: once handed to the publisher there is no receipt
/// tracking. The downstream consumer performs the durable write.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactCreatedEvent {
    /// Identifier of the contact being announced
    pub id: String,

    /// Name at creation time
    pub name: String,

    /// Phone at creation time
    pub phone: String,

    /// Email at creation time
    pub email: String,

    /// Region reference at creation time
    pub region_id: String,

    /// RFC 3339 timestamp of when the snapshot was taken
    pub occurred_at: String,
}

impl ContactCreatedEvent {
    /// Capture a snapshot of `contact`, stamped with the current time.
    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            id: contact.id.clone(),
            name: contact.name.clone(),
            phone: contact.phone.clone(),
            email: contact.email.clone(),
            region_id: contact.region_id.clone(),
            occurred_at: Utc::now().to_rfc3339(),
        }
    }
}
