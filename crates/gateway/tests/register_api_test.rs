//! Integration tests for the registration endpoint.
//!
//! The router is driven in-process with the real hasher and token issuer;
//! only the user store is mocked, so no database is required.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use tower::ServiceExt;

use common::{AppError, JwtConfig};
use domain::User;
use gateway_lib::response::RegisterResponse;
use gateway_lib::routes::create_router;
use gateway_lib::state::AppState;
use register_service_lib::providers::{Clock, SystemClock, UuidGenerator};
use register_service_lib::repository::MockUserRepository;
use register_service_lib::security::{Argon2Hasher, Claims, JwtIssuer};
use register_service_lib::RegistrationService;

const SECRET: &str = "test-secret-key-for-testing-only-32chars";

fn app(users: MockUserRepository, secret: &str) -> Router {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let jwt = JwtConfig {
        secret: secret.to_string(),
        ..JwtConfig::default()
    };

    let service = RegistrationService::new(
        Arc::new(users),
        Arc::new(Argon2Hasher::new()),
        Arc::new(JwtIssuer::new(jwt, clock.clone())),
        clock,
        Arc::new(UuidGenerator),
    );

    create_router(AppState::new(Arc::new(service)))
}

async fn send(app: Router, method: &str, uri: &str, body: &str) -> (StatusCode, RegisterResponse) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json"
    );

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: RegisterResponse = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn test_register_customer() {
    let mut users = MockUserRepository::new();
    users
        .expect_exists_by_document()
        .withf(|document: &str| document == "218.486.310-65")
        .times(1)
        .returning(|_| Ok(false));
    users
        .expect_insert()
        .withf(|user: &User| {
            !user.is_anonymous
                && user.document == "218.486.310-65"
                && user.password_hash.starts_with("$argon2id$")
        })
        .times(1)
        .returning(|_| Ok(()));

    let (status, body) = send(
        app(users, SECRET),
        "POST",
        "/register",
        r#"{"cpf":"218.486.310-65","pass":"12345678"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.status, 200);
    assert_eq!(body.message, "success");

    let token = body.access_token.expect("token on success");
    let claims = decode::<Claims>(
        &token,
        &DecodingKey::from_secret(SECRET.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .unwrap()
    .claims;
    assert_eq!(claims.exp - claims.iat, 2 * 3600);
}

#[tokio::test]
async fn test_register_anonymous() {
    let mut users = MockUserRepository::new();
    users.expect_exists_by_document().never();
    users
        .expect_insert()
        .withf(|user: &User| user.is_anonymous)
        .times(1)
        .returning(|_| Ok(()));

    let (status, body) = send(
        app(users, SECRET),
        "POST",
        "/register",
        r#"{"cpf":"","pass":""}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.access_token.is_some());
}

#[tokio::test]
async fn test_register_malformed_body() {
    let mut users = MockUserRepository::new();
    users.expect_insert().never();

    let (status, body) = send(app(users, SECRET), "POST", "/register", "{cpf").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.status, 400);
    assert_eq!(body.message, "error to parse the request body");
    assert_eq!(body.access_token, None);
}

#[tokio::test]
async fn test_register_oversized_body_is_malformed() {
    let mut users = MockUserRepository::new();
    users.expect_exists_by_document().never();
    users.expect_insert().never();

    let oversized = format!(
        r#"{{"cpf":"218.486.310-65","pass":"{}"}}"#,
        "x".repeat(2 * 1024 * 1024)
    );
    let (status, body) = send(app(users, SECRET), "POST", "/register", &oversized).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.status, 400);
    assert_eq!(body.message, "error to parse the request body");
    assert_eq!(body.access_token, None);
}

#[tokio::test]
async fn test_register_invalid_cpf() {
    let mut users = MockUserRepository::new();
    users.expect_exists_by_document().never();

    let (status, body) = send(
        app(users, SECRET),
        "POST",
        "/register",
        r#"{"cpf":"123","pass":"12345678"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body.message, "invalid cpf or password");
}

#[tokio::test]
async fn test_register_short_password() {
    let mut users = MockUserRepository::new();
    users.expect_exists_by_document().never();

    let (status, body) = send(
        app(users, SECRET),
        "POST",
        "/register",
        r#"{"cpf":"784.655.630-47","pass":"123"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body.message, "invalid cpf or password");
}

#[tokio::test]
async fn test_register_document_in_use_looks_like_invalid_credentials() {
    let mut users = MockUserRepository::new();
    users.expect_exists_by_document().returning(|_| Ok(true));
    users.expect_insert().never();

    let (status, body) = send(
        app(users, SECRET),
        "POST",
        "/register",
        r#"{"cpf":"218.486.310-65","pass":"12345678"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body.message, "invalid cpf or password");
}

#[tokio::test]
async fn test_register_storage_failure_hides_cause() {
    let mut users = MockUserRepository::new();
    users
        .expect_exists_by_document()
        .returning(|_| Err(AppError::internal("connection reset")));

    let (status, body) = send(
        app(users, SECRET),
        "POST",
        "/register",
        r#"{"cpf":"218.486.310-65","pass":"12345678"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.message, "internal server error");
}

#[tokio::test]
async fn test_register_missing_signing_key() {
    let mut users = MockUserRepository::new();
    users.expect_insert().times(1).returning(|_| Ok(()));

    let (status, body) = send(app(users, ""), "POST", "/register", "{}").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.access_token, None);
}

#[tokio::test]
async fn test_wrong_method_is_not_allowed() {
    let (status, body) = send(
        app(MockUserRepository::new(), SECRET),
        "GET",
        "/register",
        "",
    )
    .await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body.status, 405);
    assert_eq!(body.message, "method not allowed");
}

#[tokio::test]
async fn test_unknown_route_is_not_allowed() {
    let (status, body) = send(
        app(MockUserRepository::new(), SECRET),
        "POST",
        "/login",
        r#"{"cpf":"","pass":""}"#,
    )
    .await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body.message, "method not allowed");
}
