// src/application/commands/talents/create.rs
use super::TalentCommandService;
use crate::{
    application::{
        dto::TalentDto,
        error::ApplicationResult,
        forms::TalentForm,
        uploads::{self, MAX_IMAGE_BYTES, TALENT_BUCKET, UploadedFile},
    },
    domain::{
        ordering::next_orden,
        talent::{CoverSelection, ImageSet, NewTalent, TalentKind},
    },
};

pub struct CreateTalentCommand {
    pub kind: TalentKind,
    pub form: TalentForm,
    pub images: Vec<UploadedFile>,
    /// Raw `imagenPortada` field.
    pub imagen_portada: Option<String>,
}

impl TalentCommandService {
    pub async fn create_talent(&self, command: CreateTalentCommand) -> ApplicationResult<TalentDto> {
        let kind = command.kind;
        let talent = command.form.validated()?;
        let images = uploads::non_empty(command.images);
        uploads::ensure_images(&images, MAX_IMAGE_BYTES)?;
        let cover = CoverSelection::from_wire(command.imagen_portada.as_deref())?;
        cover.ensure_within(images.len())?;

        let uploaded =
            uploads::upload_images(self.storage.as_ref(), TALENT_BUCKET, kind.as_str(), &images)
                .await?;
        let image_set = ImageSet::new(Vec::new(), uploaded);
        let principal = image_set.resolve_principal(talent.imagen_principal);
        let portada = image_set.resolve_cover(cover, None)?;

        let slug = self
            .slug_service
            .generate_unique_slug(kind, &talent.nombre, None)
            .await?;
        let orden = next_orden(self.read_repo.max_orden(kind).await?);
        let now = self.clock.now();

        let new_talent = NewTalent {
            nombre: talent.nombre,
            slug,
            video_url: talent.video_url,
            imagen_principal_url: principal.url,
            imagen_portada_url: portada,
            imagenes_urls: image_set.into_urls(),
            imagen_principal_index: principal.index,
            bloques: talent.bloques,
            orden,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(kind, new_talent).await?;
        Ok(created.into())
    }
}
