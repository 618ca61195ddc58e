//! Domain models with validation at construction
//!
//! Request bodies are deserialized loosely (every field optional) and then
//! converted into validated types. Invalid input returns ValidationError,
//! not panic.

pub mod folder;
pub mod link;
pub mod tags;
pub mod validation;

pub use folder::{CreateFolderRequest, FolderName, FolderResponse};
pub use link::{CreateLinkRequest, Link, LinkUpdate, NewLink, UpdateLinkRequest};
pub use validation::ValidationError;
