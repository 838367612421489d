//! Validation rules for investment proposals.

use crate::types::Timestamp;

/// Maximum length of an investment name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Validate the fields of a new investment proposal.
///
/// Returns the first problem found as a human-readable message.
pub fn validate_proposal(
    name: &str,
    total_amount: f64,
    return_rate: f64,
    start_date: Timestamp,
    end_date: Option<Timestamp>,
) -> Result<(), String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Investment name must not be empty".to_string());
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(format!(
            "Investment name must be at most {MAX_NAME_LENGTH} characters"
        ));
    }
    if !total_amount.is_finite() || total_amount <= 0.0 {
        return Err("Total amount must be a positive number".to_string());
    }
    if !return_rate.is_finite() || !(0.0..=100.0).contains(&return_rate) {
        return Err("Return rate must be between 0 and 100 percent".to_string());
    }
    if let Some(end) = end_date {
        if end < start_date {
            return Err("End date must not precede start date".to_string());
        }
    }
    Ok(())
}
