// tests/support/mocks/images.rs
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use blog_core::application::ApplicationResult;

/// Hands out predictable URLs and remembers what was deleted.
#[derive(Debug, Default)]
pub struct FakeImageStore {
    uploads: AtomicUsize,
    deleted: Mutex<Vec<String>>,
}

impl FakeImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.load(Ordering::SeqCst)
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl blog_core::application::ports::images::ImageStore for FakeImageStore {
    async fn upload(&self, _source: &str) -> ApplicationResult<String> {
        let n = self.uploads.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(format!("https://images.test/blog/upload-{n}.png"))
    }

    async fn delete(&self, url: &str) -> ApplicationResult<()> {
        self.deleted.lock().unwrap().push(url.to_string());
        Ok(())
    }
}
