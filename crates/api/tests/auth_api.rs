//! HTTP-level integration tests for registration, login, token refresh,
//! logout, and the member directory.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_member, get, get_auth, post_json, post_json_auth, TEST_PASSWORD};
use ikilen_db::repositories::MemberRepo;
use sqlx::PgPool;

fn registration(username: &str) -> serde_json::Value {
    serde_json::json!({
        "username": username,
        "password": "password123",
        "email": format!("{username}@example.com"),
        "first_name": "John",
        "last_name": "Doe",
    })
}

async fn login(app: axum::Router, username: &str, password: &str) -> axum::response::Response {
    let body = serde_json::json!({ "username": username, "password": password });
    post_json(app, "/api/v1/auth/login", body).await
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_returns_tokens_and_member(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app, "/api/v1/auth/register", registration("johndoe")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert!(json["refresh_token"].is_string());
    assert_eq!(json["expires_in"], 900);
    assert_eq!(json["member"]["username"], "johndoe");
    assert_eq!(json["member"]["is_active"], true);
    assert!(json["member"].get("password_hash").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_duplicate_username_is_conflict(pool: PgPool) {
    let app = common::build_test_app(pool);

    let first = post_json(app.clone(), "/api/v1/auth/register", registration("dup")).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let mut again = registration("dup");
    again["email"] = serde_json::json!("other@example.com");
    let second = post_json(app, "/api/v1/auth/register", again).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(second).await["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_short_password_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let mut body = registration("shorty");
    body["password"] = serde_json::json!("short");
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Login / refresh / logout
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_success_records_last_login(pool: PgPool) {
    let member = create_member(&pool, "loginuser").await;
    assert!(member.last_login_at.is_none());
    let app = common::build_test_app(pool.clone());

    let response = login(app, "loginuser", TEST_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["member"]["id"], member.id);

    let reloaded = MemberRepo::find_by_id(&pool, member.id).await.unwrap().unwrap();
    assert!(reloaded.last_login_at.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_wrong_password_is_unauthorized(pool: PgPool) {
    create_member(&pool, "wrongpw").await;
    let app = common::build_test_app(pool);

    let response = login(app, "wrongpw", "incorrect_password").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_unknown_user_is_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = login(app, "ghost", TEST_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_deactivated_member_is_forbidden(pool: PgPool) {
    let member = create_member(&pool, "gone").await;
    MemberRepo::deactivate(&pool, member.id).await.unwrap();
    let app = common::build_test_app(pool);

    let response = login(app, "gone", TEST_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn refresh_rotates_token(pool: PgPool) {
    create_member(&pool, "rotator").await;
    let app = common::build_test_app(pool);

    let json = body_json(login(app.clone(), "rotator", TEST_PASSWORD).await).await;
    let old_refresh = json["refresh_token"].as_str().unwrap().to_string();

    let body = serde_json::json!({ "refresh_token": old_refresh });
    let response = post_json(app.clone(), "/api/v1/auth/refresh", body.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let refreshed = body_json(response).await;
    assert_ne!(refreshed["refresh_token"], serde_json::json!(old_refresh));

    // The old token was revoked by the rotation.
    let reused = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(reused.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn logout_revokes_refresh_tokens(pool: PgPool) {
    create_member(&pool, "leaver").await;
    let app = common::build_test_app(pool);

    let json = body_json(login(app.clone(), "leaver", TEST_PASSWORD).await).await;
    let access = json["access_token"].as_str().unwrap();
    let refresh = json["refresh_token"].as_str().unwrap();

    let response =
        post_json_auth(app.clone(), "/api/v1/auth/logout", serde_json::json!({}), access).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let body = serde_json::json!({ "refresh_token": refresh });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Authenticated reads
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn me_requires_token(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/auth/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn me_returns_current_member(pool: PgPool) {
    let (member, token) = common::member_with_token(&pool, "selfie").await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], member.id);
    assert_eq!(json["data"]["email"], "selfie@example.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn garbage_token_is_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/members", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn members_listed_by_first_name(pool: PgPool) {
    let (_, token) = common::member_with_token(&pool, "zed").await;
    create_member(&pool, "amy").await;
    create_member(&pool, "mia").await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/members", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["username"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["amy", "mia", "zed"]);
}
