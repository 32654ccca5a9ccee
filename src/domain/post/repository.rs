use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post, PostUpdate};
use crate::domain::post::value_objects::{Category, PostId, PostSlug};
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Optional narrowing applied to post listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostListFilter {
    pub category: Option<Category>,
    pub author_id: Option<UserId>,
}

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    /// Fails with `DomainError::DuplicateSlug` when the slug is already taken.
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;
    async fn delete(&self, id: PostId) -> DomainResult<()>;
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;
    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>>;
    /// Newest first (`created_at DESC, id DESC`). Returns the page and the
    /// total number of posts matching `filter`.
    async fn list_page(
        &self,
        filter: PostListFilter,
        limit: u32,
        offset: u64,
    ) -> DomainResult<(Vec<Post>, u64)>;
}
