// src/domain/talent/images.rs
//! Principal and cover selection over a talent's image list.
//!
//! Clients pick images by position in the list they were shown, which is the
//! kept images followed by the files uploaded in the same request.

use crate::domain::errors::{DomainError, DomainResult};

/// Cover image instruction carried by an update request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverSelection {
    /// Field absent: leave the stored cover untouched.
    Keep,
    /// Field present but empty or `null`.
    Clear,
    /// Position in the combined image list.
    Index(i64),
}

impl CoverSelection {
    pub fn from_wire(raw: Option<&str>) -> DomainResult<Self> {
        let Some(raw) = raw else {
            return Ok(CoverSelection::Keep);
        };
        let value = raw.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("null") {
            return Ok(CoverSelection::Clear);
        }
        value
            .parse::<i64>()
            .map(CoverSelection::Index)
            .map_err(|_| DomainError::Validation(format!("imagenPortada must be an index, got '{value}'")))
    }

    /// Rejects an index that cannot exist in a list of `len` images.
    pub fn ensure_within(&self, len: usize) -> DomainResult<()> {
        match self {
            CoverSelection::Index(index)
                if usize::try_from(*index).map_or(true, |index| index >= len) =>
            {
                Err(DomainError::Validation(format!(
                    "imagenPortada index {index} is outside the {len} available images"
                )))
            }
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalImage {
    pub index: i32,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ImageSet {
    existing: Vec<String>,
    uploaded: Vec<String>,
}

impl ImageSet {
    pub fn new(existing: Vec<String>, uploaded: Vec<String>) -> Self {
        Self { existing, uploaded }
    }

    pub fn len(&self) -> usize {
        self.existing.len() + self.uploaded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn url_at(&self, index: i64) -> Option<&str> {
        let index = usize::try_from(index).ok()?;
        let url = match index.checked_sub(self.existing.len()) {
            None => self.existing.get(index),
            Some(offset) => self.uploaded.get(offset),
        };
        url.map(String::as_str)
    }

    /// Out-of-range requests fall back to the first image.
    pub fn resolve_principal(&self, requested: i64) -> PrincipalImage {
        if self.is_empty() {
            return PrincipalImage {
                index: 0,
                url: None,
            };
        }
        let index = match self.url_at(requested) {
            Some(_) => requested,
            None => 0,
        };
        PrincipalImage {
            index: i32::try_from(index).unwrap_or(0),
            url: self.url_at(index).map(str::to_owned),
        }
    }

    pub fn resolve_cover(
        &self,
        selection: CoverSelection,
        stored: Option<&str>,
    ) -> DomainResult<Option<String>> {
        match selection {
            CoverSelection::Keep => Ok(stored.map(str::to_owned)),
            CoverSelection::Clear => Ok(None),
            CoverSelection::Index(index) => self
                .url_at(index)
                .map(|url| Some(url.to_owned()))
                .ok_or_else(|| {
                    DomainError::Validation(format!(
                        "imagenPortada index {index} is outside the {} available images",
                        self.len()
                    ))
                }),
        }
    }

    pub fn into_urls(self) -> Vec<String> {
        let mut urls = self.existing;
        urls.extend(self.uploaded);
        urls
    }
}
