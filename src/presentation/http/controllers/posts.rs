// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::{CreatePostCommand, DeletePostCommand, UpdatePostCommand},
    dto::PostDto,
    queries::posts::{GetPostByIdQuery, ListPostsQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, JsonBody, QueryParams};
use crate::presentation::http::openapi::{MessageResponse, PostListResponse};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PostListParams {
    /// 1-based page number. Defaults to 1.
    pub page: Option<u32>,
    /// Page size, 1 to 100. Defaults to 10.
    pub limit: Option<u32>,
    /// Only return posts in this category.
    pub category: Option<String>,
}

impl From<PostListParams> for ListPostsQuery {
    fn from(params: PostListParams) -> Self {
        Self {
            page: params.page,
            limit: params.limit,
            category: params.category,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    /// Data URI or remote URL of the cover image.
    pub image: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/posts",
    params(PostListParams),
    responses(
        (status = 200, description = "Newest posts first.", body = PostListResponse),
        (status = 400, description = "Unknown category or malformed paging.", body = ErrorResponse)
    ),
    security(()),
    tag = "Posts"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    QueryParams(params): QueryParams<PostListParams>,
) -> HttpResult<Json<PostListResponse>> {
    state
        .services
        .post_queries
        .list_posts(params.into())
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/posts/mine",
    params(PostListParams),
    responses(
        (status = 200, description = "The caller's posts, newest first.", body = PostListResponse),
        (status = 401, description = "Not authenticated.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn list_my_posts(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    QueryParams(params): QueryParams<PostListParams>,
) -> HttpResult<Json<PostListResponse>> {
    state
        .services
        .post_queries
        .list_posts_by_author(&user, params.into())
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    params(("id" = String, Path, description = "Post id (UUID)")),
    responses(
        (status = 200, description = "The post.", body = PostDto),
        (status = 400, description = "Malformed id.", body = ErrorResponse),
        (status = 404, description = "No such post.", body = ErrorResponse)
    ),
    security(()),
    tag = "Posts"
)]
pub async fn get_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_queries
        .get_post_by_id(GetPostByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created.", body = PostDto),
        (status = 400, description = "Missing or blank fields.", body = ErrorResponse),
        (status = 401, description = "Not authenticated.", body = ErrorResponse),
        (status = 409, description = "No free slug could be allocated.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    JsonBody(payload): JsonBody<CreatePostRequest>,
) -> HttpResult<(StatusCode, Json<PostDto>)> {
    let command = CreatePostCommand::builder()
        .title(payload.title)
        .content(payload.content)
        .category(payload.category)
        .image(payload.image)
        .build()
        .map_err(HttpError::bad_request)?;

    let post = state
        .services
        .post_commands
        .create_post(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(post)))
}

#[utoipa::path(
    put,
    path = "/api/posts/{id}",
    params(("id" = String, Path, description = "Post id (UUID)")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated.", body = PostDto),
        (status = 400, description = "Malformed id or blank field.", body = ErrorResponse),
        (status = 401, description = "Not authenticated.", body = ErrorResponse),
        (status = 403, description = "Caller is not the author.", body = ErrorResponse),
        (status = 404, description = "No such post.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdatePostRequest>,
) -> HttpResult<Json<PostDto>> {
    let command = UpdatePostCommand {
        id,
        title: payload.title,
        content: payload.content,
        category: payload.category,
        image: payload.image,
    };

    state
        .services
        .post_commands
        .update_post(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    params(("id" = String, Path, description = "Post id (UUID)")),
    responses(
        (status = 200, description = "Post deleted.", body = MessageResponse),
        (status = 400, description = "Malformed id.", body = ErrorResponse),
        (status = 401, description = "Not authenticated.", body = ErrorResponse),
        (status = 403, description = "Caller is not the author.", body = ErrorResponse),
        (status = 404, description = "No such post.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .post_commands
        .delete_post(&user, DeletePostCommand { id })
        .await
        .into_http()?;

    Ok(Json(MessageResponse::new("post deleted successfully")))
}
