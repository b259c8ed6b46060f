// src/domain/contact/entity.rs
use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContactId(pub Uuid);

impl From<ContactId> for Uuid {
    fn from(value: ContactId) -> Self {
        value.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Lead left through the public contact form. Shown to admins both as a
/// contact and as a proposal.
#[derive(Debug, Clone)]
pub struct Contact {
    pub id: ContactId,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub mensaje: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewContact {
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub mensaje: String,
    pub created_at: DateTime<Utc>,
}
