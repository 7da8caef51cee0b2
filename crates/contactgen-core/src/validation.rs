use crate::error::{Error, Result};

/// Validate the seed email address.
///
/// This checks:
/// - exactly one `@`
/// - non-empty local part and domain
/// - no whitespace or control characters
/// - a dotted domain without empty labels
pub fn validate_email(email: &str) -> Result<()> {
    if email.is_empty() {
        return Err(Error::InvalidEmail("email is required".to_string()));
    }
    if email.chars().any(|ch| ch.is_whitespace() || ch.is_control()) {
        return Err(Error::InvalidEmail(format!("'{email}' contains whitespace")));
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(Error::InvalidEmail(format!(
            "'{email}' must contain exactly one '@'"
        )));
    };

    if local.is_empty() {
        return Err(Error::InvalidEmail(format!("'{email}' has an empty local part")));
    }
    if domain.is_empty() {
        return Err(Error::InvalidEmail(format!("'{email}' has an empty domain")));
    }
    if !domain.contains('.') || domain.split('.').any(str::is_empty) {
        return Err(Error::InvalidEmail(format!(
            "'{email}' has an invalid domain '{domain}'"
        )));
    }

    Ok(())
}

/// Validate the output file path.
pub fn validate_output_path(path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(Error::InvalidOutputPath);
    }
    Ok(())
}
