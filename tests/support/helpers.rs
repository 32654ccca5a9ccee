// tests/support/helpers.rs
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use serde_json::Value;
use tower::util::ServiceExt as _;

/// Fires one request at a clone of `router`.
pub async fn send(router: &Router, request: Request<Body>) -> Response {
    router.clone().oneshot(request).await.expect("router is infallible")
}

pub fn json_request(method: Method, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn empty_request(method: Method, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected a JSON body")
}

/// The `Set-Cookie` header of `resp`, if it carries one.
pub fn set_cookie(resp: &Response) -> Option<String> {
    resp.headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// Asserts the `{ "error", "message" }` shape with the expected status.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content-type: {content_type}"
    );
    let json = read_json(resp).await;
    let error = json.get("error").and_then(Value::as_str).unwrap_or("");
    let message = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(error, expected_error, "unexpected error field: {json}");
    assert!(!message.is_empty(), "expected a non-empty message: {json}");
}

/// Signs up a fresh account and returns its bearer token and user object.
pub async fn signup(router: &Router, full_name: &str, email: &str, password: &str) -> (String, Value) {
    let resp = send(
        router,
        json_request(
            Method::POST,
            "/api/auth/signup",
            None,
            serde_json::json!({ "full_name": full_name, "email": email, "password": password }),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED, "signup failed");
    let json = read_json(resp).await;
    let token = json["token"]["token"].as_str().expect("token").to_string();
    (token, json["user"].clone())
}

/// Creates a post as the holder of `token` and returns the post object.
pub async fn create_post(router: &Router, token: &str, title: &str, category: &str) -> Value {
    let resp = send(
        router,
        json_request(
            Method::POST,
            "/api/posts",
            Some(token),
            serde_json::json!({
                "title": title,
                "content": format!("Body of {title}"),
                "category": category,
            }),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED, "create post failed");
    read_json(resp).await
}
