//! Shared response envelope types for API handlers.
//!
//! All resource responses use a `{ "data": ... }` envelope. Auth endpoints
//! are the exception and return their token payload directly.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// `T = Option<_>` serializes absence as `{ "data": null }`.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
