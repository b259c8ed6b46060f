// tests/support/mocks/storage.rs
use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Mutex;
use talentos_backoffice::application::{
    error::{ApplicationError, ApplicationResult},
    ports::storage::ObjectStorage,
};

#[derive(Debug, Clone)]
pub struct StoredObject {
    pub bucket: String,
    pub path: String,
    pub content_type: String,
    pub size: usize,
    pub url: String,
}

/// Object store that keeps uploads in memory. `fail_from` makes the n-th
/// upload (0-based) and every later one fail.
#[derive(Default)]
pub struct MemoryStorage {
    objects: Mutex<Vec<StoredObject>>,
    removed: Mutex<Vec<(String, String)>>,
    fail_from: Mutex<Option<usize>>,
}

impl MemoryStorage {
    pub fn fail_uploads_from(&self, position: usize) {
        *self.fail_from.lock().unwrap() = Some(position);
    }

    pub fn objects(&self) -> Vec<StoredObject> {
        self.objects.lock().unwrap().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.objects().into_iter().map(|object| object.url).collect()
    }

    pub fn removed(&self) -> Vec<(String, String)> {
        self.removed.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStorage for MemoryStorage {
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        data: Bytes,
        content_type: &str,
    ) -> ApplicationResult<String> {
        let mut objects = self.objects.lock().unwrap();
        if self
            .fail_from
            .lock()
            .unwrap()
            .is_some_and(|from| objects.len() >= from)
        {
            return Err(ApplicationError::infrastructure("storage unavailable"));
        }
        let url = format!("https://storage.test/{bucket}/{path}");
        objects.push(StoredObject {
            bucket: bucket.to_owned(),
            path: path.to_owned(),
            content_type: content_type.to_owned(),
            size: data.len(),
            url: url.clone(),
        });
        Ok(url)
    }

    async fn remove(&self, bucket: &str, path: &str) -> ApplicationResult<()> {
        self.removed
            .lock()
            .unwrap()
            .push((bucket.to_owned(), path.to_owned()));
        Ok(())
    }
}
