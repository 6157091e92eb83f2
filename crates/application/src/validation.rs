//! Local checks run before any request leaves the client.

use std::sync::OnceLock;

use easytv_domain::codes::ClientError;
use regex::Regex;

const EMAIL_PATTERN: &str = r"(?-u)^\w+([.-]?\w+)*@\w+([.-]?\w+)*(\.\w{2,3})+$";

fn email_regex() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).ok()).as_ref()
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_some_and(|re| re.is_match(email))
}

/// Every field must hold something other than whitespace.
pub fn require_filled(fields: &[&str]) -> Result<(), ClientError> {
    if fields.iter().any(|f| f.trim().is_empty()) {
        Err(ClientError::MissingFields)
    } else {
        Ok(())
    }
}

pub fn require_email(email: &str) -> Result<(), ClientError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ClientError::InvalidEmail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        for email in ["user@example.com", "first.last@mail.example.gr", "a-b@c-d.org"] {
            assert!(is_valid_email(email), "{email}");
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "",
            "plain",
            "@example.com",
            "user@",
            "user@example",
            "user@example.c",
            "user@example.info",
            "us er@example.com",
            "χρήστης@example.com",
        ] {
            assert!(!is_valid_email(email), "{email}");
        }
    }

    #[test]
    fn test_require_filled() {
        assert_eq!(require_filled(&["a", "b"]), Ok(()));
        assert_eq!(require_filled(&["a", "  "]), Err(ClientError::MissingFields));
        assert_eq!(require_filled(&[""]), Err(ClientError::MissingFields));
    }
}
