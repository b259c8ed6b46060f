// src/application/commands/materials.rs
use std::sync::Arc;

use uuid::Uuid;

use crate::{
    application::{
        dto::MaterialDto,
        error::{ApplicationError, ApplicationResult},
        forms::{MaterialForm, MaterialWizard},
        ports::{storage::ObjectStorage, time::Clock},
        uploads::{
            self, CV_BUCKET, MATERIAL_BUCKET, MAX_MATERIAL_IMAGE_BYTES, MAX_MATERIAL_IMAGES,
            UploadedFile,
        },
    },
    domain::material::{MaterialId, MaterialRepository, NewMaterialSubmission},
};

pub struct SubmitMaterialCommand {
    pub form: MaterialForm,
    pub cv: Option<UploadedFile>,
    pub images: Vec<UploadedFile>,
}

pub struct MaterialCommandService {
    repo: Arc<dyn MaterialRepository>,
    storage: Arc<dyn ObjectStorage>,
    clock: Arc<dyn Clock>,
}

impl MaterialCommandService {
    pub fn new(
        repo: Arc<dyn MaterialRepository>,
        storage: Arc<dyn ObjectStorage>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            storage,
            clock,
        }
    }

    pub async fn submit_material(
        &self,
        command: SubmitMaterialCommand,
    ) -> ApplicationResult<MaterialDto> {
        let application = MaterialWizard::complete(command.form)?;

        let cv = command.cv.filter(|file| !file.is_empty());
        if let Some(cv) = &cv {
            uploads::ensure_pdf(cv)?;
        }
        let images = uploads::non_empty(command.images);
        if images.len() > MAX_MATERIAL_IMAGES {
            return Err(ApplicationError::validation(format!(
                "at most {MAX_MATERIAL_IMAGES} images can be attached"
            )));
        }
        uploads::ensure_images(&images, MAX_MATERIAL_IMAGE_BYTES)?;

        let cv_pdf_url = match &cv {
            Some(cv) => Some(self.store_cv(cv).await?),
            None => None,
        };
        let imagenes_urls =
            uploads::upload_images(self.storage.as_ref(), MATERIAL_BUCKET, "material", &images)
                .await?;

        let submission = NewMaterialSubmission {
            profile: application.profile,
            reel_url: application.reel_url,
            cv_pdf_url,
            imagenes_urls,
            created_at: self.clock.now(),
        };
        let stored = self.repo.insert(submission).await?;
        Ok(stored.into())
    }

    /// Stores a CV on its own and returns its public URL.
    pub async fn upload_cv(&self, file: UploadedFile) -> ApplicationResult<String> {
        if file.is_empty() {
            return Err(ApplicationError::validation("no file was provided"));
        }
        uploads::ensure_pdf(&file)?;
        self.store_cv(&file).await
    }

    async fn store_cv(&self, file: &UploadedFile) -> ApplicationResult<String> {
        let key = uploads::cv_key(self.clock.now(), file);
        self.storage
            .upload(CV_BUCKET, &key, file.data.clone(), &file.storage_content_type())
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("failed to upload CV: {err}")))
    }

    pub async fn delete_material(&self, id: Uuid) -> ApplicationResult<()> {
        self.repo.delete(MaterialId(id)).await?;
        Ok(())
    }
}
