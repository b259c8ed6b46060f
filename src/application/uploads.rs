// src/application/uploads.rs
//! File parts received from multipart forms and the rules they must pass
//! before anything is written to object storage.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::storage::ObjectStorage,
};

pub const TALENT_BUCKET: &str = "talentos-imagenes";
pub const SLIDER_BUCKET: &str = "slider-imagenes";
pub const MATERIAL_BUCKET: &str = "material-imagenes";
pub const CV_BUCKET: &str = "cv-pdfs";

const MIB: usize = 1024 * 1024;
pub const MAX_IMAGE_BYTES: usize = 10 * MIB;
pub const MAX_MATERIAL_IMAGE_BYTES: usize = 5 * MIB;
pub const MAX_MATERIAL_IMAGES: usize = 10;
pub const MAX_PDF_BYTES: usize = 10 * MIB;

const IMAGE_MIME_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/webp",
    "image/gif",
];
const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "gif"];
const PDF_MIME_TYPE: &str = "application/pdf";

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl UploadedFile {
    pub fn new(file_name: impl Into<String>, content_type: Option<String>, data: Bytes) -> Self {
        Self {
            file_name: file_name.into(),
            content_type,
            data,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Lower-cased extension taken from the file name, if any.
    pub fn extension(&self) -> Option<String> {
        let (_, ext) = self.file_name.rsplit_once('.')?;
        (!ext.is_empty()).then(|| ext.to_ascii_lowercase())
    }

    fn mime(&self) -> Option<String> {
        self.content_type
            .as_deref()
            .map(|mime| mime.trim().to_ascii_lowercase())
    }

    pub fn is_image(&self) -> bool {
        let by_mime = self
            .mime()
            .is_some_and(|mime| IMAGE_MIME_TYPES.contains(&mime.as_str()));
        let by_extension = self
            .extension()
            .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()));
        by_mime || by_extension
    }

    pub fn is_pdf(&self) -> bool {
        self.mime().as_deref() == Some(PDF_MIME_TYPE)
    }

    /// Content type sent to storage. Falls back to the extension when the
    /// client did not label the part.
    pub fn storage_content_type(&self) -> String {
        if let Some(mime) = self.mime().filter(|mime| !mime.is_empty()) {
            return mime;
        }
        match self.extension().as_deref() {
            Some("png") => "image/png".into(),
            Some("webp") => "image/webp".into(),
            Some("gif") => "image/gif".into(),
            Some("jpg" | "jpeg") => "image/jpeg".into(),
            Some("pdf") => PDF_MIME_TYPE.into(),
            _ => "application/octet-stream".into(),
        }
    }
}

/// Drops zero-byte parts, which browsers send for untouched file inputs.
pub fn non_empty(files: Vec<UploadedFile>) -> Vec<UploadedFile> {
    files.into_iter().filter(|file| !file.is_empty()).collect()
}

pub fn ensure_image(file: &UploadedFile, max_bytes: usize) -> ApplicationResult<()> {
    if !file.is_image() {
        return Err(ApplicationError::validation(format!(
            "file \"{}\" is not a valid image; accepted formats: PNG, JPG, JPEG, WEBP, GIF",
            file.file_name
        )));
    }
    if file.len() > max_bytes {
        return Err(ApplicationError::validation(format!(
            "file \"{}\" exceeds the {} MB limit",
            file.file_name,
            max_bytes / MIB
        )));
    }
    Ok(())
}

pub fn ensure_images(files: &[UploadedFile], max_bytes: usize) -> ApplicationResult<()> {
    files.iter().try_for_each(|file| ensure_image(file, max_bytes))
}

pub fn ensure_pdf(file: &UploadedFile) -> ApplicationResult<()> {
    if !file.is_pdf() {
        return Err(ApplicationError::validation("the CV file must be a PDF"));
    }
    if file.len() > MAX_PDF_BYTES {
        return Err(ApplicationError::validation(format!(
            "the CV file must not exceed {} MB",
            MAX_PDF_BYTES / MIB
        )));
    }
    Ok(())
}

/// `{folder}/{uuid}.{ext}`, defaulting the extension to `jpg`.
pub fn image_key(folder: &str, file: &UploadedFile) -> String {
    let ext = file.extension().unwrap_or_else(|| "jpg".into());
    format!("{folder}/{}.{ext}", Uuid::new_v4())
}

/// `cv-pdfs/{millis}_{rand}.pdf`.
pub fn cv_key(now: DateTime<Utc>, file: &UploadedFile) -> String {
    let ext = file.extension().unwrap_or_else(|| "pdf".into());
    let simple = Uuid::new_v4().simple().to_string();
    let suffix = &simple[..6];
    format!("{CV_BUCKET}/{}_{suffix}.{ext}", now.timestamp_millis())
}

/// Uploads `files` one after another under `folder` and returns their public
/// URLs in order. A failure names the 1-based position and file name; files
/// stored before it are left in place.
pub async fn upload_images(
    storage: &dyn ObjectStorage,
    bucket: &str,
    folder: &str,
    files: &[UploadedFile],
) -> ApplicationResult<Vec<String>> {
    let mut urls = Vec::with_capacity(files.len());
    for (position, file) in files.iter().enumerate() {
        let key = image_key(folder, file);
        let url = storage
            .upload(bucket, &key, file.data.clone(), &file.storage_content_type())
            .await
            .map_err(|err| {
                ApplicationError::infrastructure(format!(
                    "failed to upload image {} (\"{}\"): {err}",
                    position + 1,
                    file.file_name
                ))
            })?;
        urls.push(url);
    }
    Ok(urls)
}
