//! notegraph: a minimal GraphQL API over in-memory notes, users and comments
//!
//! All state lives in a [`store::MemoryStore`] built once at startup and
//! shared with the resolvers through the schema context. The binary fronts
//! this library with a small CLI (`serve`, `query`, `schema`).

pub mod graphql;
pub mod schema;
pub mod store;

pub use graphql::{build_schema, MutationRoot, NoteSchema, QueryRoot};
pub use schema::{Comment, Note, User};
pub use store::{MemoryStore, Store};
