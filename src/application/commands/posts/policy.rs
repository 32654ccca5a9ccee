use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{Post, specifications::AuthorOnlyMutation},
};

pub(super) fn ensure_author(actor: &AuthenticatedUser, post: &Post) -> ApplicationResult<()> {
    if AuthorOnlyMutation::new(post, actor.id).is_satisfied() {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(
            "only the author can modify this post",
        ))
    }
}
