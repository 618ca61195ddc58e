//! Folder names

use serde::{Deserialize, Serialize};

use super::validation::{filled, ValidationError};

/// POST /api/folders body
#[derive(Debug, Default, Deserialize)]
pub struct CreateFolderRequest {
    pub name: Option<String>,
}

/// Folder response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderResponse {
    pub name: String,
}

/// Non-empty folder name. Uniqueness is left to the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FolderName(String);

impl FolderName {
    pub fn new(name: Option<String>) -> Result<Self, ValidationError> {
        if !filled(&name) {
            return Err(ValidationError::Required {
                resource: "folder",
                field: "name",
            });
        }
        Ok(Self(name.unwrap_or_default()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for FolderName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_any_non_empty_name() {
        assert_eq!(FolderName::new(Some("Read later".into())).unwrap().as_str(), "Read later");
        assert!(FolderName::new(Some(" ".into())).is_ok());
    }

    #[test]
    fn rejects_missing_or_empty() {
        assert!(matches!(
            FolderName::new(None),
            Err(ValidationError::Required { field: "name", .. })
        ));
        assert!(FolderName::new(Some(String::new())).is_err());
    }
}
