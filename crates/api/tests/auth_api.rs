//! HTTP-level integration tests for registration, login, logout, and the
//! current-user endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, post_json_auth};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Register a user via the API.
async fn register_user(app: axum::Router, name: &str, email: &str, password: &str) {
    let body = serde_json::json!({ "name": name, "email": email, "password": password });
    let response = post_json(app, "/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

/// Log in via the API and return the plaintext access token.
async fn login_user(app: axum::Router, email: &str, password: &str) -> String {
    let body = serde_json::json!({ "email": email, "password": password });
    let response = post_json(app, "/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["access_token"].as_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

/// Successful registration returns 201 with no echoed data.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_success(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "name": "Ayu",
        "email": "ayu@test.com",
        "password": "a-strong-password"
    });
    let response = post_json(app, "/register", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"], serde_json::Value::Null);
}

/// Registering the same email twice returns 409.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_duplicate_email(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    register_user(app, "First", "dup@test.com", "password-one").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "name": "Second",
        "email": "dup@test.com",
        "password": "password-two"
    });
    let response = post_json(app, "/register", body).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

/// A too-short password is rejected with 422 before any row is written.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_short_password(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "name": "Shorty",
        "email": "shorty@test.com",
        "password": "short"
    });
    let response = post_json(app, "/register", body).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Successful login returns the user summary and a token, visible once.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    register_user(app, "Budi", "budi@test.com", "budi-password").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "email": "budi@test.com", "password": "budi-password" });
    let response = post_json(app, "/login", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["access_token"].is_string(), "response must contain access_token");
    assert_eq!(json["user"]["name"], "Budi");
    assert_eq!(json["user"]["email"], "budi@test.com");
    // The plaintext token is never the stored value.
    assert_ne!(json["access_token"].as_str().unwrap().len(), 0);
}

/// Login with a wrong password returns the fixed 401 envelope.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    register_user(app, "Citra", "citra@test.com", "citra-password").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "email": "citra@test.com", "password": "incorrect" });
    let response = post_json(app, "/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Invalid credentials");
    assert_eq!(json["data"], serde_json::Value::Null);
}

/// Login with an unknown email is indistinguishable from a bad password.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_unknown_email(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "ghost@test.com", "password": "whatever" });
    let response = post_json(app, "/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Invalid credentials");
}

// ---------------------------------------------------------------------------
// Current user & logout
// ---------------------------------------------------------------------------

/// GET /user returns the authenticated user's summary.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_current_user(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    register_user(app, "Dewi", "dewi@test.com", "dewi-password").await;
    let token = login_user(common::build_test_app(pool.clone()), "dewi@test.com", "dewi-password").await;

    let response = get_auth(common::build_test_app(pool), "/user", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Dewi");
    assert_eq!(json["email"], "dewi@test.com");
    assert_eq!(json["role"], "USER");
    assert!(json.get("password_hash").is_none(), "hash must never leak");
}

/// GET /user without a token returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_current_user_requires_token(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/user").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Logout revokes only the presented token; a second session stays valid.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_logout_revokes_only_this_token(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    register_user(app, "Eka", "eka@test.com", "eka-password").await;

    let token_a = login_user(common::build_test_app(pool.clone()), "eka@test.com", "eka-password").await;
    let token_b = login_user(common::build_test_app(pool.clone()), "eka@test.com", "eka-password").await;

    // Log out with token A.
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/logout",
        &token_a,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Token A is gone...
    let response = get_auth(common::build_test_app(pool.clone()), "/user", &token_a).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // ...but token B still authenticates.
    let response = get_auth(common::build_test_app(pool), "/user", &token_b).await;
    assert_eq!(response.status(), StatusCode::OK);
}
