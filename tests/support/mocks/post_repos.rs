// tests/support/mocks/post_repos.rs
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use blog_core::domain::errors::{DomainError, DomainResult};
use blog_core::domain::post::{
    NewPost, Post, PostId, PostListFilter, PostReadRepository, PostSlug, PostUpdate,
    PostWriteRepository,
};
use uuid::Uuid;

/// Backing storage shared by the read and write sides.
pub type PostStore = Arc<Mutex<Vec<Post>>>;

fn slug_taken(posts: &[Post], slug: &PostSlug, except: Option<PostId>) -> bool {
    posts
        .iter()
        .any(|p| &p.slug == slug && Some(p.id) != except)
}

/* -------------------------------- PostWriteRepository -------------------------------- */

pub struct InMemoryPostWrite {
    store: PostStore,
}

impl InMemoryPostWrite {
    pub fn new(store: PostStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryPostWrite {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut posts = self.store.lock().unwrap();
        if slug_taken(&posts, &post.slug, None) {
            return Err(DomainError::DuplicateSlug(post.slug.into_inner()));
        }

        let created = Post {
            id: PostId::new(Uuid::new_v4()),
            title: post.title,
            slug: post.slug,
            content: post.content,
            category: post.category,
            author_id: post.author_id,
            image_url: post.image_url,
            created_at: post.created_at,
            updated_at: post.updated_at,
        };
        posts.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut posts = self.store.lock().unwrap();
        if let Some(slug) = &update.slug {
            if slug_taken(&posts, slug, Some(update.id)) {
                return Err(DomainError::DuplicateSlug(slug.as_str().to_string()));
            }
        }

        let post = posts
            .iter_mut()
            .find(|p| p.id == update.id)
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        if let Some(title) = update.title {
            post.title = title;
        }
        if let Some(slug) = update.slug {
            post.slug = slug;
        }
        if let Some(content) = update.content {
            post.content = content;
        }
        if let Some(category) = update.category {
            post.category = category;
        }
        if let Some(image_url) = update.image_url {
            post.image_url = Some(image_url);
        }
        post.updated_at = update.updated_at;
        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let mut posts = self.store.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}

/* -------------------------------- PostReadRepository -------------------------------- */

pub struct InMemoryPostRead {
    store: PostStore,
}

impl InMemoryPostRead {
    pub fn new(store: PostStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PostReadRepository for InMemoryPostRead {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let posts = self.store.lock().unwrap();
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        let posts = self.store.lock().unwrap();
        Ok(posts.iter().find(|p| &p.slug == slug).cloned())
    }

    async fn list_page(
        &self,
        filter: PostListFilter,
        limit: u32,
        offset: u64,
    ) -> DomainResult<(Vec<Post>, u64)> {
        let posts = self.store.lock().unwrap();
        let mut matching: Vec<Post> = posts
            .iter()
            .filter(|p| filter.category.is_none_or(|c| p.category == c))
            .filter(|p| filter.author_id.is_none_or(|a| p.author_id == a))
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.as_uuid().cmp(&a.id.as_uuid()))
        });

        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((page, total))
    }
}

/// Never reports a slug as taken, so the slug service always proposes the
/// bare base slug. Simulates a writer that lost the race between lookup and
/// insert.
pub struct SlugBlindPostRead {
    inner: InMemoryPostRead,
}

impl SlugBlindPostRead {
    pub fn new(store: PostStore) -> Self {
        Self {
            inner: InMemoryPostRead::new(store),
        }
    }
}

#[async_trait]
impl PostReadRepository for SlugBlindPostRead {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_slug(&self, _slug: &PostSlug) -> DomainResult<Option<Post>> {
        Ok(None)
    }

    async fn list_page(
        &self,
        filter: PostListFilter,
        limit: u32,
        offset: u64,
    ) -> DomainResult<(Vec<Post>, u64)> {
        self.inner.list_page(filter, limit, offset).await
    }
}
