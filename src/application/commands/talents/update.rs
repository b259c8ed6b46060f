// src/application/commands/talents/update.rs
use super::{TalentCommandService, talent_id};
use crate::{
    application::{
        dto::TalentDto,
        error::{ApplicationError, ApplicationResult},
        forms::{TalentForm, talent::parse_existing_images},
        uploads::{self, MAX_IMAGE_BYTES, TALENT_BUCKET, UploadedFile},
    },
    domain::talent::{CoverSelection, ImageSet, TalentKind, TalentUpdate},
};

pub struct UpdateTalentCommand {
    pub kind: TalentKind,
    pub id: i64,
    pub form: TalentForm,
    pub images: Vec<UploadedFile>,
    /// Raw `existingImages` JSON: the stored URLs the editor kept.
    pub existing_images: Option<String>,
    /// Raw `imagenPortada` field. `None` when the key was not sent.
    pub imagen_portada: Option<String>,
}

impl TalentCommandService {
    pub async fn update_talent(&self, command: UpdateTalentCommand) -> ApplicationResult<TalentDto> {
        let kind = command.kind;
        let id = talent_id(command.id)?;
        let current = self
            .read_repo
            .find_by_id(kind, id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("talent {id} not found")))?;

        let talent = command.form.validated()?;
        let images = uploads::non_empty(command.images);
        uploads::ensure_images(&images, MAX_IMAGE_BYTES)?;
        let existing =
            parse_existing_images(command.existing_images.as_deref(), &current.imagenes_urls);
        let cover = CoverSelection::from_wire(command.imagen_portada.as_deref())?;
        cover.ensure_within(existing.len() + images.len())?;

        let uploaded =
            uploads::upload_images(self.storage.as_ref(), TALENT_BUCKET, kind.as_str(), &images)
                .await?;
        let image_set = ImageSet::new(existing, uploaded);
        let principal = image_set.resolve_principal(talent.imagen_principal);
        let portada = image_set.resolve_cover(cover, current.imagen_portada_url.as_deref())?;

        let slug = if current.nombre != talent.nombre || current.slug.is_none() {
            Some(
                self.slug_service
                    .generate_unique_slug(kind, &talent.nombre, Some(id))
                    .await?,
            )
        } else {
            None
        };

        let update = TalentUpdate {
            id,
            nombre: talent.nombre,
            slug,
            video_url: talent.video_url,
            imagen_principal_url: principal.url,
            imagen_portada_url: portada,
            imagenes_urls: image_set.into_urls(),
            imagen_principal_index: principal.index,
            bloques: talent.bloques,
            updated_at: self.clock.now(),
        };

        let updated = self.write_repo.update(kind, update).await?;
        Ok(updated.into())
    }
}
