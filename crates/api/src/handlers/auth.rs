//! Handlers for the `/auth` resource (register, login, refresh, logout, me).

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use ikilen_core::error::CoreError;
use ikilen_core::member::{validate_email, validate_name_part, validate_username, MIN_PASSWORD_LENGTH};
use ikilen_db::models::member::{CreateMember, Member, MemberResponse};
use ikilen_db::models::session::CreateSession;
use ikilen_db::repositories::{MemberRepo, SessionRepo};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthMember;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Request body for `POST /auth/refresh`.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Token payload returned by register, login, and refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub member: MemberResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create a member account and sign it in. Duplicate usernames or emails
/// are rejected with 409 by their unique constraints.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let Json(input) = payload?;

    let username = input.username.trim().to_string();
    let email = input.email.trim().to_lowercase();
    validate_username(&username)
        .and_then(|_| validate_email(&email))
        .and_then(|_| validate_name_part("first_name", &input.first_name))
        .and_then(|_| validate_name_part("last_name", &input.last_name))
        .and_then(|_| validate_password_strength(&input.password, MIN_PASSWORD_LENGTH))
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let member = MemberRepo::create(
        &state.pool,
        &CreateMember {
            username,
            email,
            password_hash,
            first_name: input.first_name.trim().to_string(),
            last_name: input.last_name.trim().to_string(),
        },
    )
    .await?;

    tracing::info!(member_id = member.id, username = %member.username, "Member registered");

    let response = create_auth_response(&state, &member).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/v1/auth/login
///
/// Authenticate with username + password. Returns access and refresh tokens.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Json<AuthResponse>> {
    let Json(input) = payload?;

    let member = MemberRepo::find_by_username(&state.pool, input.username.trim())
        .await?
        .ok_or_else(invalid_credentials)?;

    let password_valid = verify_password(&input.password, &member.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::debug!(member_id = member.id, "Login rejected: bad password");
        return Err(invalid_credentials());
    }

    if !member.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    MemberRepo::record_login(&state.pool, member.id).await?;
    tracing::info!(member_id = member.id, "Member logged in");

    Ok(Json(create_auth_response(&state, &member).await?))
}

/// POST /api/v1/auth/refresh
///
/// Exchange a valid refresh token for new access + refresh tokens. The old
/// session is revoked.
pub async fn refresh(
    State(state): State<AppState>,
    payload: Result<Json<RefreshRequest>, JsonRejection>,
) -> AppResult<Json<AuthResponse>> {
    let Json(input) = payload?;
    let token_hash = hash_refresh_token(&input.refresh_token);

    let session = SessionRepo::find_by_refresh_token_hash(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    SessionRepo::revoke(&state.pool, session.id).await?;

    let member = MemberRepo::find_by_id(&state.pool, session.member_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Member no longer exists".into())))?;

    if !member.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    Ok(Json(create_auth_response(&state, &member).await?))
}

/// POST /api/v1/auth/logout
///
/// Revoke all sessions for the authenticated member. Returns 204 No Content.
pub async fn logout(State(state): State<AppState>, auth: AuthMember) -> AppResult<StatusCode> {
    let revoked = SessionRepo::revoke_all_for_member(&state.pool, auth.member_id).await?;
    tracing::info!(member_id = auth.member_id, revoked, "Member logged out");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthMember,
) -> AppResult<Json<DataResponse<MemberResponse>>> {
    let member = MemberRepo::find_by_id(&state.pool, auth.member_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Member",
            id: auth.member_id,
        }))?;
    Ok(Json(DataResponse {
        data: MemberResponse::from(&member),
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "Invalid username or password".into(),
    ))
}

/// Generate access + refresh tokens, persist a session row, and build the response.
async fn create_auth_response(state: &AppState, member: &Member) -> AppResult<AuthResponse> {
    let access_token = generate_access_token(member.id, &member.username, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let (refresh_plaintext, refresh_hash) = generate_refresh_token();
    let expires_at =
        Utc::now() + chrono::Duration::days(state.config.jwt.refresh_token_expiry_days);

    SessionRepo::create(
        &state.pool,
        &CreateSession {
            member_id: member.id,
            refresh_token_hash: refresh_hash,
            expires_at,
        },
    )
    .await?;

    Ok(AuthResponse {
        access_token,
        refresh_token: refresh_plaintext,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        member: MemberResponse::from(member),
    })
}
