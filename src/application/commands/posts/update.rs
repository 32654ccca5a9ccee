// src/application/commands/posts/update.rs
use super::{PostCommandService, policy::ensure_author};
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{PostContent, PostId, PostTitle, PostUpdate},
};

pub struct UpdatePostCommand {
    pub id: String,
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
}

impl PostCommandService {
    pub async fn update_post(
        &self,
        actor: &AuthenticatedUser,
        command: UpdatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let UpdatePostCommand {
            id,
            title,
            content,
            category,
            image,
        } = command;

        let id = PostId::parse(&id)?;
        let post = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;
        ensure_author(actor, &post)?;

        let title = title.map(PostTitle::new).transpose()?;
        let content = content.map(PostContent::new).transpose()?;
        let category = category
            .as_deref()
            .map(Self::resolve_category)
            .transpose()?;
        if image.as_deref().is_some_and(|source| source.trim().is_empty()) {
            return Err(ApplicationError::validation("image cannot be empty"));
        }

        let mut update = PostUpdate::new(id, self.clock.now());
        if let Some(title) = title {
            let slug = self
                .slug_service
                .generate_unique_slug(&title, Some(post.id))
                .await?;
            update = update.with_title(title).with_slug(slug);
        }
        if let Some(content) = content {
            update = update.with_content(content);
        }
        if let Some(category) = category {
            update = update.with_category(category);
        }
        let uploaded = self.upload_image(image).await?;
        if let Some(image_url) = uploaded.as_deref() {
            update = update.with_image_url(image_url);
        }

        if update.is_empty() {
            return Ok(post.into());
        }

        let updated = match self.write_repo.update(update).await {
            Ok(updated) => updated,
            Err(err) => {
                if let Some(image_url) = uploaded.as_deref() {
                    self.discard_image(image_url).await;
                }
                return Err(err.into());
            }
        };
        tracing::info!(post_id = %updated.id, user_id = %actor.id, "post updated");

        if let (Some(_), Some(replaced)) = (uploaded.as_deref(), post.image_url.as_deref()) {
            self.discard_image(replaced).await;
        }
        Ok(updated.into())
    }
}
