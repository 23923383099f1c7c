use crate::error::{EngineError, Result};

/// An email address of the shape `<local>@<domain>`.
///
/// Only the minimal shape is checked: both parts non-empty, exactly one `@`,
/// no whitespace. A bare domain such as `a@b` is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn parse(value: &str) -> Result<Self> {
        let invalid = || EngineError::ValidationError(format!("Invalid email address: {value:?}"));

        if value.chars().any(char::is_whitespace) {
            return Err(invalid());
        }
        let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return Err(invalid());
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        assert!(Email::parse("david@gmail.com").is_ok());
        assert!(Email::parse("a@b").is_ok());
    }

    #[test]
    fn test_invalid_addresses() {
        for value in ["a", "", "@gmail.com", "david@", "da vid@gmail.com", "a@b@c"] {
            assert!(
                matches!(Email::parse(value), Err(EngineError::ValidationError(_))),
                "{value:?} should be rejected"
            );
        }
    }
}
