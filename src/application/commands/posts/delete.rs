// src/application/commands/posts/delete.rs
use super::{PostCommandService, policy::ensure_author};
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostId,
};

pub struct DeletePostCommand {
    pub id: String,
}

impl PostCommandService {
    pub async fn delete_post(
        &self,
        actor: &AuthenticatedUser,
        command: DeletePostCommand,
    ) -> ApplicationResult<()> {
        let id = PostId::parse(&command.id)?;
        let post = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;
        ensure_author(actor, &post)?;

        self.write_repo.delete(id).await?;
        tracing::info!(post_id = %id, user_id = %actor.id, "post deleted");

        if let Some(image_url) = post.image_url.as_deref() {
            self.discard_image(image_url).await;
        }
        Ok(())
    }
}
