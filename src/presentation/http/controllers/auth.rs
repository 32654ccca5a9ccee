// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::users::{AuthSession, LoginUserCommand, SignupCommand, UpdateProfileCommand},
    dto::{AuthTokenDto, UserDto},
};
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, JsonBody};
use crate::presentation::http::openapi::MessageResponse;
use crate::presentation::http::session::{
    clear_session_cookie, session_cookie, set_cookie_header,
};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    http::{HeaderName, StatusCode},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SignupRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    /// Data URI or remote URL of the new profile picture.
    pub profile_pic: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub user: UserDto,
    pub token: AuthTokenDto,
}

type WithCookie<T> = ([(HeaderName, String); 1], Json<T>);

fn respond_with_session(state: &HttpState, session: AuthSession) -> WithCookie<AuthResponse> {
    let cookie = session_cookie(&session.token, state.settings.secure_cookies);
    (
        set_cookie_header(&cookie),
        Json(AuthResponse {
            user: session.user,
            token: session.token,
        }),
    )
}

#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created, session cookie set.", body = AuthResponse),
        (status = 400, description = "Missing or invalid fields.", body = ErrorResponse),
        (status = 409, description = "Email already registered.", body = ErrorResponse)
    ),
    security(()),
    tag = "Auth"
)]
pub async fn signup(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<SignupRequest>,
) -> HttpResult<(StatusCode, WithCookie<AuthResponse>)> {
    let command = SignupCommand::builder()
        .full_name(payload.full_name)
        .email(payload.email)
        .password(payload.password)
        .build()
        .map_err(HttpError::bad_request)?;

    let session = state
        .services
        .user_commands
        .signup(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, respond_with_session(&state, session)))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in, session cookie set.", body = AuthResponse),
        (status = 400, description = "Missing fields.", body = ErrorResponse),
        (status = 401, description = "Invalid credentials.", body = ErrorResponse)
    ),
    security(()),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> HttpResult<WithCookie<AuthResponse>> {
    let command = LoginUserCommand {
        email: payload.email.unwrap_or_default(),
        password: payload.password.unwrap_or_default(),
    };

    let session = state
        .services
        .user_commands
        .login(command)
        .await
        .into_http()?;

    Ok(respond_with_session(&state, session))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Session cookie cleared.", body = MessageResponse)
    ),
    security(()),
    tag = "Auth"
)]
pub async fn logout(Extension(state): Extension<HttpState>) -> WithCookie<MessageResponse> {
    let cookie = clear_session_cookie(state.settings.secure_cookies);
    (
        set_cookie_header(&cookie),
        Json(MessageResponse::new("logged out successfully")),
    )
}

#[utoipa::path(
    get,
    path = "/api/auth/check",
    responses(
        (status = 200, description = "The authenticated user.", body = UserDto),
        (status = 401, description = "Not authenticated.", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn check(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_queries
        .current_user(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/auth/profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile picture replaced.", body = UserDto),
        (status = 400, description = "profile_pic missing.", body = ErrorResponse),
        (status = 401, description = "Not authenticated.", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn update_profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    JsonBody(payload): JsonBody<UpdateProfileRequest>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_commands
        .update_profile(
            &user,
            UpdateProfileCommand {
                profile_pic: payload.profile_pic,
            },
        )
        .await
        .into_http()
        .map(Json)
}
