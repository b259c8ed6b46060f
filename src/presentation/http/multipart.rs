// src/presentation/http/multipart.rs
//! Buffers a multipart body into text fields and file parts.

use crate::application::uploads::UploadedFile;
use axum::extract::Multipart;
use std::collections::HashMap;

use super::error::{HttpError, HttpResult};

#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    files: HashMap<String, Vec<UploadedFile>>,
}

impl MultipartForm {
    /// Parts with a file name are files; everything else is text. A repeated
    /// text field keeps its last value.
    pub async fn read(mut multipart: Multipart) -> HttpResult<Self> {
        let mut form = Self::default();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(HttpError::from_multipart)?
        {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };
            match field.file_name().map(str::to_owned) {
                Some(file_name) => {
                    let content_type = field.content_type().map(str::to_owned);
                    let data = field.bytes().await.map_err(HttpError::from_multipart)?;
                    form.files
                        .entry(name)
                        .or_default()
                        .push(UploadedFile::new(file_name, content_type, data));
                }
                None => {
                    let text = field.text().await.map_err(HttpError::from_multipart)?;
                    form.fields.insert(name, text);
                }
            }
        }
        Ok(form)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn take_files(&mut self, name: &str) -> Vec<UploadedFile> {
        self.files.remove(name).unwrap_or_default()
    }

    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        self.take_files(name).into_iter().next()
    }
}
