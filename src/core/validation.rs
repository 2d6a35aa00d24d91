//! Waitlist email validation
//!
//! The only validated user input on the page. The accepted shape is
//! `local-part@domain.tld`: a non-empty local part without whitespace or
//! `@`, and a non-empty domain without whitespace or `@` that contains an
//! interior dot. Anything else is a single failure mode, surfaced as a
//! transient inline message.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Validate an email address for the waitlist form.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let Some((local, domain)) = email.split_once('@') else {
        return Err(ValidationError::InvalidEmail);
    };

    let part_ok = |part: &str| !part.is_empty() && !part.contains(['@', ' ', '\t', '\n', '\r']);
    if !part_ok(local) || !part_ok(domain) {
        return Err(ValidationError::InvalidEmail);
    }

    // The domain needs a dot with at least one character on each side.
    let has_interior_dot = domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len());
    if !has_interior_dot {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_address() {
        assert!(validate_email("a@b.co").is_ok());
        assert!(validate_email("admin@corp.example.com").is_ok());
        assert!(validate_email("it.ops+deploy@example.io").is_ok());
    }

    #[test]
    fn test_rejects_missing_tld_dot() {
        assert_eq!(validate_email("a@b"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_rejects_whitespace_in_local_part() {
        assert_eq!(
            validate_email("a b@c.com"),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_rejects_empty_local_part() {
        assert_eq!(validate_email("@c.com"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_rejects_empty_or_missing_at() {
        assert_eq!(validate_email(""), Err(ValidationError::InvalidEmail));
        assert_eq!(
            validate_email("nobody.example.com"),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_rejects_second_at_sign() {
        assert_eq!(
            validate_email("a@b@c.com"),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_rejects_dot_at_domain_edge() {
        assert_eq!(validate_email("a@.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("a@com."), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_error_message_is_user_facing() {
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
    }
}
