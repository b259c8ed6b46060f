// tests/support/mocks/repos.rs
use async_trait::async_trait;
use std::{
    collections::HashMap,
    sync::{
        Mutex,
        atomic::{AtomicBool, AtomicI64, Ordering},
    },
};
use talentos_backoffice::domain::{
    contact::{Contact, ContactId, ContactRepository, NewContact},
    errors::{DomainError, DomainResult},
    material::{MaterialId, MaterialRepository, MaterialSubmission, NewMaterialSubmission},
    slider::{NewSliderImage, SliderImage, SliderImageId, SliderRepository},
    talent::{
        NewTalent, Talent, TalentId, TalentKind, TalentReadRepository, TalentUpdate,
        TalentWriteRepository,
    },
};
use uuid::Uuid;

/// One store for every talent table. Serves as both the read and the write
/// repository.
#[derive(Default)]
pub struct MemoryTalentRepo {
    rows: Mutex<HashMap<TalentKind, Vec<Talent>>>,
    last_id: AtomicI64,
    fail_orden_for: Mutex<Option<i64>>,
}

impl MemoryTalentRepo {
    pub fn seed(&self, kind: TalentKind, talent: Talent) {
        self.last_id.fetch_max(talent.id.0, Ordering::SeqCst);
        self.rows
            .lock()
            .unwrap()
            .entry(kind)
            .or_default()
            .push(talent);
    }

    /// Makes `set_orden` fail for the row with `id`.
    pub fn fail_set_orden_for(&self, id: i64) {
        *self.fail_orden_for.lock().unwrap() = Some(id);
    }

    pub fn get(&self, kind: TalentKind, id: i64) -> Option<Talent> {
        self.rows
            .lock()
            .unwrap()
            .get(&kind)
            .and_then(|rows| rows.iter().find(|row| row.id.0 == id).cloned())
    }

    pub fn all(&self, kind: TalentKind) -> Vec<Talent> {
        self.rows
            .lock()
            .unwrap()
            .get(&kind)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl TalentWriteRepository for MemoryTalentRepo {
    async fn insert(&self, kind: TalentKind, talent: NewTalent) -> DomainResult<Talent> {
        let mut rows = self.rows.lock().unwrap();
        let table = rows.entry(kind).or_default();
        if table
            .iter()
            .any(|row| row.slug.as_deref() == Some(talent.slug.as_str()))
        {
            return Err(DomainError::Conflict(format!("slug already exists in {kind}")));
        }
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let created = Talent {
            id: TalentId::new(id)?,
            nombre: talent.nombre,
            slug: Some(talent.slug),
            video_url: talent.video_url,
            imagen_principal_url: talent.imagen_principal_url,
            imagen_portada_url: talent.imagen_portada_url,
            imagenes_urls: talent.imagenes_urls,
            imagen_principal_index: talent.imagen_principal_index,
            bloques: talent.bloques,
            orden: talent.orden,
            created_at: talent.created_at,
            updated_at: talent.updated_at,
        };
        table.push(created.clone());
        Ok(created)
    }

    async fn update(&self, kind: TalentKind, update: TalentUpdate) -> DomainResult<Talent> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .get_mut(&kind)
            .and_then(|table| table.iter_mut().find(|row| row.id == update.id))
            .ok_or_else(|| DomainError::NotFound(format!("talent {} not found", update.id)))?;
        row.nombre = update.nombre;
        if let Some(slug) = update.slug {
            row.slug = Some(slug);
        }
        row.video_url = update.video_url;
        row.imagen_principal_url = update.imagen_principal_url;
        row.imagen_portada_url = update.imagen_portada_url;
        row.imagenes_urls = update.imagenes_urls;
        row.imagen_principal_index = update.imagen_principal_index;
        row.bloques = update.bloques;
        row.updated_at = update.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, kind: TalentKind, id: TalentId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let table = rows.entry(kind).or_default();
        let before = table.len();
        table.retain(|row| row.id != id);
        if table.len() == before {
            return Err(DomainError::NotFound(format!("talent {id} not found")));
        }
        Ok(())
    }

    async fn set_orden(&self, kind: TalentKind, id: TalentId, orden: i32) -> DomainResult<()> {
        if *self.fail_orden_for.lock().unwrap() == Some(id.0) {
            return Err(DomainError::Persistence("connection reset".into()));
        }
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows
            .get_mut(&kind)
            .and_then(|table| table.iter_mut().find(|row| row.id == id))
        {
            row.orden = orden;
        }
        Ok(())
    }
}

#[async_trait]
impl TalentReadRepository for MemoryTalentRepo {
    async fn list(&self, kind: TalentKind) -> DomainResult<Vec<Talent>> {
        let mut rows = self.all(kind);
        rows.sort_by_key(|row| (row.orden, row.created_at));
        Ok(rows)
    }

    async fn find_by_id(&self, kind: TalentKind, id: TalentId) -> DomainResult<Option<Talent>> {
        Ok(self.get(kind, id.0))
    }

    async fn find_by_slug(&self, kind: TalentKind, slug: &str) -> DomainResult<Option<Talent>> {
        Ok(self
            .all(kind)
            .into_iter()
            .find(|row| row.slug.as_deref() == Some(slug)))
    }

    async fn slugs_with_prefix(
        &self,
        kind: TalentKind,
        prefix: &str,
        exclude: Option<TalentId>,
    ) -> DomainResult<Vec<String>> {
        Ok(self
            .all(kind)
            .into_iter()
            .filter(|row| Some(row.id) != exclude)
            .filter_map(|row| row.slug)
            .filter(|slug| slug.starts_with(prefix))
            .collect())
    }

    async fn max_orden(&self, kind: TalentKind) -> DomainResult<Option<i32>> {
        Ok(self.all(kind).iter().map(|row| row.orden).max())
    }

    async fn count(&self, kind: TalentKind) -> DomainResult<u64> {
        Ok(self.all(kind).len() as u64)
    }
}

#[derive(Default)]
pub struct MemoryContactRepo {
    rows: Mutex<Vec<Contact>>,
}

impl MemoryContactRepo {
    pub fn all(&self) -> Vec<Contact> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactRepository for MemoryContactRepo {
    async fn insert(&self, contact: NewContact) -> DomainResult<Contact> {
        let created = Contact {
            id: ContactId(Uuid::new_v4()),
            nombre: contact.nombre,
            apellido: contact.apellido,
            email: contact.email,
            mensaje: contact.mensaje,
            created_at: contact.created_at,
            updated_at: contact.created_at,
        };
        self.rows.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn list(&self) -> DomainResult<Vec<Contact>> {
        let mut rows = self.all();
        rows.reverse();
        Ok(rows)
    }

    async fn delete(&self, id: ContactId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.id != id);
        if rows.len() == before {
            return Err(DomainError::NotFound(format!("contact {id} not found")));
        }
        Ok(())
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.rows.lock().unwrap().len() as u64)
    }
}

#[derive(Default)]
pub struct MemoryMaterialRepo {
    rows: Mutex<Vec<MaterialSubmission>>,
}

impl MemoryMaterialRepo {
    pub fn all(&self) -> Vec<MaterialSubmission> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl MaterialRepository for MemoryMaterialRepo {
    async fn insert(&self, submission: NewMaterialSubmission) -> DomainResult<MaterialSubmission> {
        let created = MaterialSubmission {
            id: MaterialId(Uuid::new_v4()),
            profile: submission.profile,
            reel_url: submission.reel_url,
            cv_pdf_url: submission.cv_pdf_url,
            imagenes_urls: submission.imagenes_urls,
            created_at: submission.created_at,
            updated_at: submission.created_at,
        };
        self.rows.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn list(&self) -> DomainResult<Vec<MaterialSubmission>> {
        let mut rows = self.all();
        rows.reverse();
        Ok(rows)
    }

    async fn delete(&self, id: MaterialId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.id != id);
        if rows.len() == before {
            return Err(DomainError::NotFound(format!("material {} not found", id.0)));
        }
        Ok(())
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.rows.lock().unwrap().len() as u64)
    }
}

/// Slider rows. `fail_inserts` makes every insert fail.
#[derive(Default)]
pub struct MemorySliderRepo {
    rows: Mutex<Vec<SliderImage>>,
    fail_inserts: AtomicBool,
}

impl MemorySliderRepo {
    pub fn fail_inserts(&self) {
        self.fail_inserts.store(true, Ordering::SeqCst);
    }

    pub fn seed(&self, image: SliderImage) {
        self.rows.lock().unwrap().push(image);
    }

    pub fn all(&self) -> Vec<SliderImage> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl SliderRepository for MemorySliderRepo {
    async fn insert(&self, image: NewSliderImage) -> DomainResult<SliderImage> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("insert rejected".into()));
        }
        let created = SliderImage {
            id: SliderImageId(Uuid::new_v4()),
            imagen_url: image.imagen_url,
            alt_text: image.alt_text,
            orden: image.orden,
            created_at: image.created_at,
            updated_at: image.created_at,
        };
        self.rows.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn list(&self) -> DomainResult<Vec<SliderImage>> {
        let mut rows = self.all();
        rows.sort_by_key(|row| row.orden);
        Ok(rows)
    }

    async fn delete(&self, id: SliderImageId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.id != id);
        if rows.len() == before {
            return Err(DomainError::NotFound(format!("slider image {} not found", id.0)));
        }
        Ok(())
    }

    async fn max_orden(&self) -> DomainResult<Option<i32>> {
        Ok(self.rows.lock().unwrap().iter().map(|row| row.orden).max())
    }

    async fn set_orden(&self, id: SliderImageId, orden: i32) -> DomainResult<()> {
        if let Some(row) = self
            .rows
            .lock()
            .unwrap()
            .iter_mut()
            .find(|row| row.id == id)
        {
            row.orden = orden;
        }
        Ok(())
    }
}
