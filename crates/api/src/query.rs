//! Query parameter types shared by handler modules.

use serde::Deserialize;

/// `?active=` filter for investment listings. Omitted means all.
#[derive(Debug, Deserialize)]
pub struct ActiveFilterParams {
    pub active: Option<bool>,
}

/// `?year=` filter for contribution history.
#[derive(Debug, Deserialize)]
pub struct YearParams {
    pub year: Option<i32>,
}

/// `?limit=` for series endpoints. Clamped by the handler.
#[derive(Debug, Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}
