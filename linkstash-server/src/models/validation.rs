//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more of a record's required fields were absent or empty
    MissingFields { fields: &'static [&'static str] },

    /// A single required field was absent or empty
    Required { resource: &'static str, field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields { fields } => {
                write!(f, "Missing required fields: {}", fields.join(", "))
            }
            Self::Required { resource, field } => {
                let mut chars = resource.chars();
                match chars.next() {
                    Some(first) => write!(
                        f,
                        "{}{} {} is required",
                        first.to_uppercase(),
                        chars.as_str(),
                        field
                    ),
                    None => write!(f, "{} is required", field),
                }
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Present and non-empty, the way a form field counts as filled in.
pub(crate) fn filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::MissingFields {
            fields: &["id", "url", "created"],
        };
        assert_eq!(err.to_string(), "Missing required fields: id, url, created");

        let err = ValidationError::Required {
            resource: "folder",
            field: "name",
        };
        assert_eq!(err.to_string(), "Folder name is required");
    }

    #[test]
    fn filled_rejects_empty() {
        assert!(filled(&Some("x".into())));
        assert!(!filled(&Some(String::new())));
        assert!(!filled(&None));
    }
}
