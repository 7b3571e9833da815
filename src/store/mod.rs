//! Storage layer
//!
//! - [`Store`]: the interface resolvers read and append through
//! - [`MemoryStore`]: in-memory implementation seeded from fixtures

mod memory;

pub use memory::MemoryStore;

use crate::schema::{Comment, Note, User};

/// Read and append operations over the three collections.
///
/// Every method hands back owned snapshots, so callers observe a consistent
/// view of a collection as of the call, regardless of concurrent appends.
pub trait Store: Send + Sync {
    /// All users.
    fn users(&self) -> Vec<User>;

    /// All notes, in insertion order.
    fn notes(&self) -> Vec<Note>;

    /// All comments, in insertion order.
    fn comments(&self) -> Vec<Comment>;

    /// The user with the given id, if any.
    fn user(&self, id: &str) -> Option<User>;

    /// The first note whose name matches exactly (case-sensitive).
    fn note_by_name(&self, name: &str) -> Option<Note>;

    /// Comments on a note, optionally narrowed to a single author.
    ///
    /// An empty `user_id` counts as absent and applies no filter. Order is
    /// insertion order; no record is ever reordered.
    fn comments_for_note(&self, note_id: &str, user_id: Option<&str>) -> Vec<Comment>;

    /// Append a new note and return it.
    fn create_note(&self, name: String, text: String) -> Note;
}
