//! Credential validation shared by the auth dialog and the sign-up server function.
//!
//! Email syntax follows the browser's `input[type=email]` rule: a local part of
//! `atext` characters and dots, an `@`, then one or more dot-separated host labels.

use thiserror::Error;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password should be at least 6 characters")]
    PasswordTooShort,
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let Some((local, domain)) = email.split_once('@') else {
        return Err(ValidationError::InvalidEmail);
    };
    let local_ok = !local.is_empty() && local.chars().all(is_local_char);
    let domain_ok = !domain.is_empty() && domain.split('.').all(is_host_label);
    if local_ok && domain_ok {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Email first, then password; reports the first problem found.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), ValidationError> {
    validate_email(email)?;
    validate_password(password)
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || "!#$%&'*+/=?^_`{|}~-".contains(c)
}

fn is_host_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) => {
            label.len() <= 63
                && first.is_ascii_alphanumeric()
                && last.is_ascii_alphanumeric()
                && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        for email in ["ada@example.com", "first.last+tag@mail.co.uk", "x@localhost", "o'neil@a-b.io"] {
            assert_eq!(validate_email(email), Ok(()), "{email}");
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "",
            "plainaddress",
            "@example.com",
            "ada@",
            "ada@@example.com",
            "ada@exa mple.com",
            "ada@-example.com",
            "ada@example..com",
            "ada example@example.com",
        ] {
            assert_eq!(validate_email(email), Err(ValidationError::InvalidEmail), "{email}");
        }
    }

    #[test]
    fn test_password_length_boundary() {
        assert_eq!(validate_password("12345"), Err(ValidationError::PasswordTooShort));
        assert_eq!(validate_password("123456"), Ok(()));
        // counted in characters, not bytes
        assert_eq!(validate_password("ééééé"), Err(ValidationError::PasswordTooShort));
    }

    #[test]
    fn test_credentials_reports_email_first() {
        assert_eq!(
            validate_credentials("nope", "1"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_credentials("ada@example.com", "1"),
            Err(ValidationError::PasswordTooShort)
        );
        assert!(validate_credentials("ada@example.com", "secret").is_ok());
    }
}
