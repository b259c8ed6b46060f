// src/application/commands/slider.rs
use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use crate::{
    application::{
        dto::SliderImageDto,
        error::{ApplicationError, ApplicationResult},
        ordering::{SliderOrdering, reorder},
        ports::{storage::ObjectStorage, time::Clock},
        uploads::{self, MAX_IMAGE_BYTES, SLIDER_BUCKET, UploadedFile},
    },
    domain::{
        ordering::{next_orden, positions_from_ids},
        slider::{
            NewSliderImage, SliderImage, SliderImageId, SliderRepository, entity::DEFAULT_ALT_TEXT,
        },
    },
};

pub struct AddSliderImageCommand {
    pub imagen_url: String,
    pub alt_text: Option<String>,
}

pub struct UploadSliderImageCommand {
    pub file: Option<UploadedFile>,
    pub alt_text: Option<String>,
}

pub struct SliderCommandService {
    repo: Arc<dyn SliderRepository>,
    storage: Arc<dyn ObjectStorage>,
    clock: Arc<dyn Clock>,
}

impl SliderCommandService {
    pub fn new(
        repo: Arc<dyn SliderRepository>,
        storage: Arc<dyn ObjectStorage>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            storage,
            clock,
        }
    }

    /// Appends an already hosted image at the end of the slider.
    pub async fn add_image(&self, command: AddSliderImageCommand) -> ApplicationResult<SliderImageDto> {
        let imagen_url = command.imagen_url.trim().to_owned();
        if imagen_url.is_empty() {
            return Err(ApplicationError::validation("imagen_url is required"));
        }
        let created = self.append(imagen_url, command.alt_text).await?;
        Ok(created.into())
    }

    /// Stores the file, then appends it. The stored object is removed again
    /// when the row cannot be written.
    pub async fn upload_image(
        &self,
        command: UploadSliderImageCommand,
    ) -> ApplicationResult<SliderImageDto> {
        let file = command
            .file
            .filter(|file| !file.is_empty())
            .ok_or_else(|| ApplicationError::validation("no image was provided"))?;
        uploads::ensure_image(&file, MAX_IMAGE_BYTES)?;

        let key = uploads::image_key("slider", &file);
        let url = self
            .storage
            .upload(SLIDER_BUCKET, &key, file.data.clone(), &file.storage_content_type())
            .await?;

        match self.append(url, command.alt_text).await {
            Ok(created) => Ok(created.into()),
            Err(err) => {
                if let Err(cleanup) = self.storage.remove(SLIDER_BUCKET, &key).await {
                    warn!(path = %key, error = %cleanup, "failed to remove orphaned slider image");
                }
                Err(err)
            }
        }
    }

    async fn append(&self, imagen_url: String, alt_text: Option<String>) -> ApplicationResult<SliderImage> {
        let orden = next_orden(self.repo.max_orden().await?);
        let image = NewSliderImage {
            imagen_url,
            alt_text: Some(
                alt_text
                    .filter(|alt| !alt.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_ALT_TEXT.to_owned()),
            ),
            orden,
            created_at: self.clock.now(),
        };
        Ok(self.repo.insert(image).await?)
    }

    pub async fn delete_image(&self, id: Uuid) -> ApplicationResult<()> {
        self.repo.delete(SliderImageId(id)).await?;
        Ok(())
    }

    /// Positions become the index of each id in `ids`.
    pub async fn reorder_images(&self, ids: Vec<Uuid>) -> ApplicationResult<usize> {
        if ids.is_empty() {
            return Err(ApplicationError::validation("ids must not be empty"));
        }
        let items = positions_from_ids(ids.into_iter().map(SliderImageId).collect());
        let collection = SliderOrdering::new(Arc::clone(&self.repo));
        Ok(reorder(&collection, items).await?)
    }
}
