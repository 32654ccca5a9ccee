use crate::domain::errors::DomainError;

const CNT_POST_SLUG: &str = "posts_slug_key";
const CNT_POST_AUTHOR: &str = "posts_author_id_fkey";
const CNT_POST_CATEGORY_CHECK: &str = "posts_category_chk";
const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_USER_USERNAME: &str = "users_username_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return map_constraint(constraint);
            }

            match db_err.code().as_deref() {
                Some("23505") => DomainError::Conflict("unique constraint violated".into()),
                Some("23503") => DomainError::NotFound("referenced record not found".into()),
                Some("23514") => DomainError::Validation("check constraint violated".into()),
                _ => DomainError::Persistence(db_err.message().to_string()),
            }
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

fn map_constraint(constraint: &str) -> DomainError {
    match constraint {
        CNT_POST_SLUG => DomainError::DuplicateSlug("slug already exists".into()),
        CNT_USER_EMAIL => DomainError::Conflict("email is already registered".into()),
        CNT_USER_USERNAME => DomainError::DuplicateUsername("username already exists".into()),
        CNT_POST_AUTHOR => DomainError::NotFound("author not found".into()),
        CNT_POST_CATEGORY_CHECK => DomainError::Validation("unknown post category".into()),
        other => DomainError::Persistence(format!("database constraint violation: {other}")),
    }
}
