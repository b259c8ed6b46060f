use crate::domain::contact::Contact;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactDto {
    pub id: Uuid,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub mensaje: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Contact> for ContactDto {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id.into(),
            nombre: contact.nombre,
            apellido: contact.apellido,
            email: contact.email,
            mensaje: contact.mensaje,
            created_at: contact.created_at,
            updated_at: contact.updated_at,
        }
    }
}
