//! Append-only in-memory store

use parking_lot::RwLock;

use super::Store;
use crate::schema::{Comment, Note, User};

/// In-memory store holding the three collections for the process lifetime.
///
/// Users and comments are fixed at construction. Notes are append-only behind
/// a lock; the store is shared across requests as `Arc<MemoryStore>`.
pub struct MemoryStore {
    users: Vec<User>,
    comments: Vec<Comment>,
    notes: RwLock<Vec<Note>>,
}

impl MemoryStore {
    /// Empty store with no seed data.
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            comments: Vec::new(),
            notes: RwLock::new(Vec::new()),
        }
    }

    /// Store seeded with arbitrary collections.
    pub fn with_seed(users: Vec<User>, notes: Vec<Note>, comments: Vec<Comment>) -> Self {
        Self {
            users,
            comments,
            notes: RwLock::new(notes),
        }
    }

    /// Store seeded with the literal fixtures loaded at process start.
    pub fn with_fixtures() -> Self {
        Self {
            users: vec![User::new("1", "Maxim"), User::new("2", "Alex")],
            comments: vec![
                Comment::new("1", "1", "Круто!"),
                Comment::new("1", "2", "А мне не очень понравилось"),
            ],
            notes: RwLock::new(vec![
                Note::new("Books", "Books to read").with_id("1"),
                Note::new("Music", "Music to listen").with_id("2"),
            ]),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for MemoryStore {
    fn users(&self) -> Vec<User> {
        self.users.clone()
    }

    fn notes(&self) -> Vec<Note> {
        self.notes.read().clone()
    }

    fn comments(&self) -> Vec<Comment> {
        self.comments.clone()
    }

    fn user(&self, id: &str) -> Option<User> {
        self.users.iter().find(|user| user.id == id).cloned()
    }

    fn note_by_name(&self, name: &str) -> Option<Note> {
        self.notes
            .read()
            .iter()
            .find(|note| note.name == name)
            .cloned()
    }

    fn comments_for_note(&self, note_id: &str, user_id: Option<&str>) -> Vec<Comment> {
        self.comments
            .iter()
            .filter(|comment| comment.note_id == note_id)
            .filter(|comment| match user_id {
                Some(id) if !id.is_empty() => comment.user_id == id,
                _ => true,
            })
            .cloned()
            .collect()
    }

    fn create_note(&self, name: String, text: String) -> Note {
        let note = Note::new(name, text);
        tracing::debug!(id = %note.id, name = %note.name, "appending note");
        self.notes.write().push(note.clone());
        note
    }
}
