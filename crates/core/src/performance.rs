//! Group and monthly performance reporting rules.

/// Calendar month labels, in order, as stored in `monthly_performance.month`.
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Default number of monthly data points returned.
pub const DEFAULT_MONTHLY_LIMIT: i64 = 6;

/// Upper bound on monthly data points per request.
pub const MAX_MONTHLY_LIMIT: i64 = 120;

/// Position of a month label in the calendar (1-based), if valid.
pub fn month_number(month: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|m| *m == month)
        .map(|idx| idx as u32 + 1)
}

/// Validate a month label.
pub fn validate_month(month: &str) -> Result<(), String> {
    month_number(month).map(|_| ()).ok_or_else(|| {
        format!(
            "Invalid month '{month}'. Must be one of: {}",
            MONTHS.join(", ")
        )
    })
}

/// Clamp a requested monthly limit into `1..=MAX_MONTHLY_LIMIT`.
pub fn clamp_monthly_limit(limit: Option<i64>) -> i64 {
    limit
        .unwrap_or(DEFAULT_MONTHLY_LIMIT)
        .clamp(1, MAX_MONTHLY_LIMIT)
}

/// Validate a group performance snapshot.
pub fn validate_group_snapshot(
    total_members: i32,
    total_assets: f64,
    active_investments: i32,
) -> Result<(), String> {
    if total_members < 0 {
        return Err("Total members must not be negative".to_string());
    }
    if active_investments < 0 {
        return Err("Active investments must not be negative".to_string());
    }
    if !total_assets.is_finite() || total_assets < 0.0 {
        return Err("Total assets must be a non-negative number".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_numbers() {
        assert_eq!(month_number("Jan"), Some(1));
        assert_eq!(month_number("Dec"), Some(12));
        assert_eq!(month_number("jan"), None);
        assert_eq!(month_number("January"), None);
    }

    #[test]
    fn month_validation_lists_choices() {
        let err = validate_month("Foo").unwrap_err();
        assert!(err.contains("Jan, Feb"));
    }

    #[test]
    fn limit_clamping() {
        assert_eq!(clamp_monthly_limit(None), 6);
        assert_eq!(clamp_monthly_limit(Some(0)), 1);
        assert_eq!(clamp_monthly_limit(Some(12)), 12);
        assert_eq!(clamp_monthly_limit(Some(10_000)), MAX_MONTHLY_LIMIT);
    }

    #[test]
    fn group_snapshot() {
        assert!(validate_group_snapshot(48, 245_890.0, 12).is_ok());
        assert!(validate_group_snapshot(-1, 0.0, 0).is_err());
        assert!(validate_group_snapshot(1, -5.0, 0).is_err());
        assert!(validate_group_snapshot(1, 5.0, -2).is_err());
    }
}
