//! Member registration rules.

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum username length.
pub const MAX_USERNAME_LENGTH: usize = 50;

/// Validate a username: non-empty, bounded, no whitespace.
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.is_empty() {
        return Err("Username is required".to_string());
    }
    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(format!(
            "Username must be at most {MAX_USERNAME_LENGTH} characters"
        ));
    }
    if username.chars().any(char::is_whitespace) {
        return Err("Username must not contain whitespace".to_string());
    }
    Ok(())
}

/// Loose email sanity check: one `@` with something on both sides and a dot
/// in the domain part.
pub fn validate_email(email: &str) -> Result<(), String> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(format!("Invalid email address '{email}'"))
    }
}

/// Validate that a display name part (first or last name) is present.
pub fn validate_name_part(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{field} is required"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usernames() {
        assert!(validate_username("johndoe").is_ok());
        assert!(validate_username("").is_err());
        assert!(validate_username("john doe").is_err());
        assert!(validate_username(&"a".repeat(51)).is_err());
    }

    #[test]
    fn emails() {
        assert!(validate_email("john.doe@example.com").is_ok());
        assert!(validate_email("john.doe").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("a@b@c.com").is_err());
        assert!(validate_email("a@example.").is_err());
    }

    #[test]
    fn name_parts() {
        assert!(validate_name_part("First name", "John").is_ok());
        let err = validate_name_part("Last name", "  ").unwrap_err();
        assert_eq!(err, "Last name is required");
    }
}
