// src/application/commands/posts/create.rs
use super::PostCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        post::{Category, NewPost, Post, PostContent, PostTitle},
        user::UserId,
    },
};

/// Slug derivation and insert are not atomic; a concurrent writer can take
/// the slug in between. Each retry re-derives from fresh storage state.
const SLUG_ATTEMPTS: usize = 3;

pub struct CreatePostCommand {
    pub title: String,
    pub content: String,
    pub category: String,
    pub image: Option<String>,
}

impl CreatePostCommand {
    pub fn builder() -> CreatePostCommandBuilder {
        CreatePostCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreatePostCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    category: Option<String>,
    image: Option<String>,
}

impl CreatePostCommandBuilder {
    pub fn title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn content(mut self, content: Option<String>) -> Self {
        self.content = content;
        self
    }

    pub fn category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    pub fn image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }

    pub fn build(self) -> Result<CreatePostCommand, &'static str> {
        Ok(CreatePostCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            category: self.category.ok_or("category is required")?,
            image: self.image,
        })
    }
}

impl PostCommandService {
    pub async fn create_post(
        &self,
        actor: &AuthenticatedUser,
        command: CreatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let title = PostTitle::new(command.title)?;
        let content = PostContent::new(command.content)?;
        let category = Self::resolve_category(&command.category)?;
        let image_url = self.upload_image(command.image).await?;

        let draft = Draft {
            title,
            content,
            category,
            author_id: actor.id,
            image_url: image_url.clone(),
        };
        match self.insert_with_unique_slug(draft).await {
            Ok(created) => {
                tracing::info!(
                    post_id = %created.id,
                    user_id = %actor.id,
                    slug = %created.slug,
                    "post created"
                );
                Ok(created.into())
            }
            Err(err) => {
                if let Some(image_url) = image_url.as_deref() {
                    self.discard_image(image_url).await;
                }
                Err(err)
            }
        }
    }

    async fn insert_with_unique_slug(&self, draft: Draft) -> ApplicationResult<Post> {
        for attempt in 1..=SLUG_ATTEMPTS {
            let slug = self
                .slug_service
                .generate_unique_slug(&draft.title, None)
                .await?;
            let now = self.clock.now();
            let new_post = NewPost {
                title: draft.title.clone(),
                slug,
                content: draft.content.clone(),
                category: draft.category,
                author_id: draft.author_id,
                image_url: draft.image_url.clone(),
                created_at: now,
                updated_at: now,
            };

            match self.write_repo.insert(new_post).await {
                Ok(created) => return Ok(created),
                Err(DomainError::DuplicateSlug(slug)) => {
                    tracing::warn!(%slug, attempt, "slug taken concurrently, retrying");
                }
                Err(err) => return Err(err.into()),
            }
        }

        Err(ApplicationError::conflict(
            "could not allocate a unique slug for this title",
        ))
    }
}

/// Validated fields shared by every insert attempt.
struct Draft {
    title: PostTitle,
    content: PostContent,
    category: Category,
    author_id: UserId,
    image_url: Option<String>,
}
