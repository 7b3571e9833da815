use serde::{Deserialize, Serialize};

/// A comment on a note, related to its note and author by id only.
///
/// Comments carry no identity of their own; a `note_id` or `user_id` with no
/// matching record resolves to nothing rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Id of the note this comment belongs to
    pub note_id: String,
    /// Id of the comment's author
    pub user_id: String,
    /// Comment body
    pub text: String,
}

impl Comment {
    pub fn new(
        note_id: impl Into<String>,
        user_id: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            note_id: note_id.into(),
            user_id: user_id.into(),
            text: text.into(),
        }
    }
}
