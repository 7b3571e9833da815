//! Note board domain types
//!
//! This module defines the core records behind the API:
//! - [`User`]: fixture-only account records
//! - [`Note`]: the only collection that grows at runtime
//! - [`Comment`]: remarks tied to a note and a user by id

mod comment;
mod note;
mod user;

pub use comment::Comment;
pub use note::Note;
pub use user::User;
