use crate::application::dto::UserDto;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users except the caller.", body = [UserDto]),
        (status = 401, description = "Not authenticated.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn list_users(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<UserDto>>> {
    state
        .services
        .user_queries
        .list_other_users(&user)
        .await
        .into_http()
        .map(Json)
}
