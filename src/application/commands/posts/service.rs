// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::{images::ImageStore, time::Clock},
    },
    domain::post::{
        Category, PostReadRepository, PostWriteRepository, services::PostSlugService,
    },
};

pub struct PostCommandService {
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) slug_service: Arc<PostSlugService>,
    pub(super) image_store: Arc<dyn ImageStore>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PostCommandService {
    pub fn new(
        write_repo: Arc<dyn PostWriteRepository>,
        read_repo: Arc<dyn PostReadRepository>,
        slug_service: Arc<PostSlugService>,
        image_store: Arc<dyn ImageStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            image_store,
            clock,
        }
    }

    /// Blank input is rejected; an unrecognised name falls back to the
    /// default category.
    pub(super) fn resolve_category(raw: &str) -> ApplicationResult<Category> {
        if raw.trim().is_empty() {
            return Err(ApplicationError::validation("category is required"));
        }
        Ok(raw.parse().unwrap_or_else(|_| {
            let fallback = Category::default();
            tracing::warn!(category = raw, %fallback, "unknown category, using fallback");
            fallback
        }))
    }

    pub(super) async fn upload_image(
        &self,
        image: Option<String>,
    ) -> ApplicationResult<Option<String>> {
        match image.filter(|source| !source.trim().is_empty()) {
            Some(source) => Ok(Some(self.image_store.upload(&source).await?)),
            None => Ok(None),
        }
    }

    /// Best effort: a hosted image that outlives its post is only wasted
    /// storage, so failures are logged and swallowed.
    pub(super) async fn discard_image(&self, image_url: &str) {
        if let Err(err) = self.image_store.delete(image_url).await {
            tracing::warn!(image_url, error = %err, "failed to delete hosted image");
        }
    }
}
