//! Link records and request bodies

use serde::{Deserialize, Serialize};

use super::validation::{filled, ValidationError};

const LINK_REQUIRED_FIELDS: &[&str] = &["id", "url", "created"];

/// A stored bookmark.
///
/// `id` and `created` are chosen by the client; `created` is an opaque
/// string used only for ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: String,
    pub url: String,
    pub notes: String,
    pub folder: String,
    pub tags: Vec<String>,
    pub created: String,
}

/// POST /api/links body
#[derive(Debug, Default, Deserialize)]
pub struct CreateLinkRequest {
    pub id: Option<String>,
    pub url: Option<String>,
    pub notes: Option<String>,
    pub folder: Option<String>,
    pub tags: Option<Vec<String>>,
    pub created: Option<String>,
}

/// PUT /api/links/{id} body
#[derive(Debug, Default, Deserialize)]
pub struct UpdateLinkRequest {
    pub url: Option<String>,
    pub notes: Option<String>,
    pub folder: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Validated link ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink(Link);

impl NewLink {
    /// Require `id`, `url` and `created`; default the rest to empty.
    pub fn from_request(req: CreateLinkRequest) -> Result<Self, ValidationError> {
        if !(filled(&req.id) && filled(&req.url) && filled(&req.created)) {
            return Err(ValidationError::MissingFields {
                fields: LINK_REQUIRED_FIELDS,
            });
        }

        Ok(Self(Link {
            id: req.id.unwrap_or_default(),
            url: req.url.unwrap_or_default(),
            notes: req.notes.unwrap_or_default(),
            folder: req.folder.unwrap_or_default(),
            tags: req.tags.unwrap_or_default(),
            created: req.created.unwrap_or_default(),
        }))
    }

    pub fn as_link(&self) -> &Link {
        &self.0
    }

    pub fn into_link(self) -> Link {
        self.0
    }
}

/// Full replacement of a link's mutable fields.
///
/// Fields missing from the request are written as empty, not kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkUpdate {
    pub url: String,
    pub notes: String,
    pub folder: String,
    pub tags: Vec<String>,
}

impl From<UpdateLinkRequest> for LinkUpdate {
    fn from(req: UpdateLinkRequest) -> Self {
        Self {
            url: req.url.unwrap_or_default(),
            notes: req.notes.unwrap_or_default(),
            folder: req.folder.unwrap_or_default(),
            tags: req.tags.unwrap_or_default(),
        }
    }
}
