use crate::domain::post::entity::Post;
use crate::domain::user::UserId;

/// A post may only be updated or deleted by the user who wrote it.
pub struct AuthorOnlyMutation<'a> {
    post: &'a Post,
    actor_id: UserId,
}

impl<'a> AuthorOnlyMutation<'a> {
    pub fn new(post: &'a Post, actor_id: UserId) -> Self {
        Self { post, actor_id }
    }

    pub fn is_satisfied(&self) -> bool {
        self.post.author_id == self.actor_id
    }
}
