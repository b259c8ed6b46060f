// src/application/commands/contacts.rs
use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::{
    application::{
        dto::ContactDto, error::ApplicationResult, forms::ContactForm, ports::time::Clock,
    },
    domain::contact::{ContactId, ContactRepository, NewContact},
};

pub struct ContactCommandService {
    repo: Arc<dyn ContactRepository>,
    clock: Arc<dyn Clock>,
}

impl ContactCommandService {
    pub fn new(repo: Arc<dyn ContactRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn submit_contact(&self, form: ContactForm) -> ApplicationResult<ContactDto> {
        form.validate()?;
        let contact = NewContact {
            nombre: form.nombre.trim().to_owned(),
            apellido: form.apellido.trim().to_owned(),
            email: form.email.trim().to_owned(),
            mensaje: form.mensaje,
            created_at: self.clock.now(),
        };
        let stored = self.repo.insert(contact).await?;
        Ok(stored.into())
    }

    pub async fn delete_contact(&self, id: Uuid) -> ApplicationResult<()> {
        self.repo.delete(ContactId(id)).await?;
        Ok(())
    }
}
