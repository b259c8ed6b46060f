// tests/support/builders.rs
use super::mocks::fixed_now;
use chrono::Duration;
use talentos_backoffice::domain::talent::{Block, BlockKind, Talent, TalentId};

pub struct TalentBuilder {
    id: i64,
    nombre: String,
    slug: Option<String>,
    imagenes: Vec<String>,
    portada: Option<String>,
    principal: i32,
    orden: i32,
}

impl TalentBuilder {
    pub fn new(id: i64, nombre: impl Into<String>) -> Self {
        Self {
            id,
            nombre: nombre.into(),
            slug: None,
            imagenes: Vec::new(),
            portada: None,
            principal: 0,
            orden: 0,
        }
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn images(mut self, urls: &[&str]) -> Self {
        self.imagenes = urls.iter().map(|url| url.to_string()).collect();
        self
    }

    pub fn portada(mut self, url: impl Into<String>) -> Self {
        self.portada = Some(url.into());
        self
    }

    pub fn principal(mut self, index: i32) -> Self {
        self.principal = index;
        self
    }

    pub fn orden(mut self, orden: i32) -> Self {
        self.orden = orden;
        self
    }

    pub fn build(self) -> Talent {
        let created_at = fixed_now() - Duration::days(30) + Duration::minutes(self.id);
        Talent {
            id: TalentId::new(self.id).unwrap(),
            nombre: self.nombre,
            slug: self.slug,
            video_url: None,
            imagen_principal_url: self
                .imagenes
                .get(self.principal as usize)
                .cloned(),
            imagen_portada_url: self.portada,
            imagenes_urls: self.imagenes,
            imagen_principal_index: self.principal,
            bloques: vec![Block {
                tipo: BlockKind::Teatro,
                contenido: "Hamlet (2022)".into(),
                order: 0,
            }],
            orden: self.orden,
            created_at,
            updated_at: created_at,
        }
    }
}
