#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use ikilen_api::auth::jwt::{generate_access_token, JwtConfig};
use ikilen_api::auth::password::hash_password;
use ikilen_api::config::{ServerConfig, VotingConfig};
use ikilen_api::router::build_app_router;
use ikilen_api::state::AppState;
use ikilen_db::models::member::{CreateMember, Member};
use ikilen_db::repositories::MemberRepo;
use ikilen_events::EventBus;

pub const TEST_PASSWORD: &str = "test_password_123!";

/// Build a test `ServerConfig` with safe defaults and the standard 80%
/// approval threshold.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-for-integration-tests".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
        voting: VotingConfig {
            retry_delay: Duration::from_millis(10),
            ..VotingConfig::default()
        },
    }
}

/// Build the application router over `pool` with the production middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = Arc::new(test_config());
    let state = AppState::new(pool, Arc::clone(&config), Arc::new(EventBus::default()));
    build_app_router(state, &config)
}

/// Insert a member directly, with [`TEST_PASSWORD`] as the password.
pub async fn create_member(pool: &PgPool, username: &str) -> Member {
    let input = CreateMember {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
        first_name: format!("{username}-first"),
        last_name: "Member".to_string(),
    };
    MemberRepo::create(pool, &input)
        .await
        .expect("member creation should succeed")
}

/// Mint an access token for `member` signed with the test secret.
pub fn token_for(member: &Member) -> String {
    generate_access_token(member.id, &member.username, &test_config().jwt)
        .expect("token generation should succeed")
}

/// Create a member and return it with a valid access token.
pub async fn member_with_token(pool: &PgPool, username: &str) -> (Member, String) {
    let member = create_member(pool, username).await;
    let token = token_for(&member);
    (member, token)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_vec(&json).unwrap()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    json: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::from(serde_json::to_vec(&json).unwrap()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a raw (possibly malformed) body.
pub async fn post_raw_auth(app: Router, uri: &str, body: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
