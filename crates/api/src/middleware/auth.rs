//! JWT bearer-token extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use ikilen_core::error::CoreError;
use ikilen_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The member making the request, taken from `Authorization: Bearer <token>`.
///
/// Add it as a handler parameter to require authentication.
#[derive(Debug, Clone)]
pub struct AuthMember {
    pub member_id: DbId,
    pub username: String,
}

impl FromRequestParts<AppState> for AuthMember {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| unauthorized("Missing Authorization header"))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| unauthorized("Invalid Authorization format. Expected: Bearer <token>"))?;

        let claims = validate_token(token, &state.config.jwt)
            .map_err(|_| unauthorized("Invalid or expired token"))?;

        Ok(AuthMember {
            member_id: claims.sub,
            username: claims.username,
        })
    }
}

fn unauthorized(msg: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(msg.to_string()))
}
