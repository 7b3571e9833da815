//! Note records

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// A note on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier, a ULID string for notes created at runtime
    pub id: String,
    /// Display name, matched exactly by the `note` query
    pub name: String,
    /// Body text
    pub text: String,
}

impl Note {
    /// Create a new note with a freshly generated id
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Ulid::new().to_string(),
            name: name.into(),
            text: text.into(),
        }
    }

    /// Set a specific note id (used when seeding fixtures)
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}
