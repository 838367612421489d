//! Member ledger transaction kinds and validation.
//!
//! Contributions and dividends credit a member's balance; withdrawals and
//! fees debit it. Amounts are always stored as positive numbers and the
//! kind determines the direction.

/// Money paid in by a member.
pub const KIND_CONTRIBUTION: &str = "contribution";

/// Earnings paid out to a member's balance.
pub const KIND_DIVIDEND: &str = "dividend";

/// Money taken out by a member.
pub const KIND_WITHDRAWAL: &str = "withdrawal";

/// Charges deducted from a member's balance.
pub const KIND_FEE: &str = "fee";

/// All valid transaction kinds.
pub const VALID_KINDS: &[&str] = &[KIND_CONTRIBUTION, KIND_DIVIDEND, KIND_WITHDRAWAL, KIND_FEE];

/// Number of recent transactions shown on the dashboard.
pub const DASHBOARD_RECENT_TRANSACTIONS: i64 = 5;

/// Validate that a kind string is one of the accepted values.
pub fn validate_kind(kind: &str) -> Result<(), String> {
    if VALID_KINDS.contains(&kind) {
        Ok(())
    } else {
        Err(format!(
            "Invalid transaction type '{kind}'. Must be one of: {}",
            VALID_KINDS.join(", ")
        ))
    }
}

/// Validate a transaction amount. Must be finite and strictly positive.
pub fn validate_amount(amount: f64) -> Result<(), String> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err("Transaction amount must be a positive number".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_kinds_accepted() {
        for kind in VALID_KINDS {
            assert!(validate_kind(kind).is_ok(), "{kind} should be accepted");
        }
    }

    #[test]
    fn unknown_kind_rejected() {
        let err = validate_kind("transfer").unwrap_err();
        assert!(err.contains("Invalid transaction type"));
        assert!(err.contains("contribution"));
    }

    #[test]
    fn kinds_are_case_sensitive() {
        assert!(validate_kind("Contribution").is_err());
    }

    #[test]
    fn amount_must_be_positive() {
        assert!(validate_amount(500.0).is_ok());
        assert!(validate_amount(0.01).is_ok());
        assert!(validate_amount(0.0).is_err());
        assert!(validate_amount(-1.0).is_err());
        assert!(validate_amount(f64::INFINITY).is_err());
    }
}
