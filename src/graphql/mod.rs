//! GraphQL API for the note board
//!
//! Provides the full query interface over the shared store:
//! - [`QueryRoot`]: read operations (`notes`, `note`)
//! - [`MutationRoot`]: the single write operation (`createNote`)

mod mutation;
mod query;
mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use types::*;

use async_graphql::{EmptySubscription, Schema};
use std::sync::Arc;

use crate::store::MemoryStore;

/// Schema over the shared store
pub type NoteSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the store injected as context data
pub fn build_schema(store: Arc<MemoryStore>) -> NoteSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_schema() -> NoteSchema {
        build_schema(Arc::new(MemoryStore::with_fixtures()))
    }

    #[tokio::test]
    async fn notes_returns_fixtures_in_order() {
        let response = fixture_schema().execute("{ notes { id name text } }").await;
        assert!(response.errors.is_empty());

        let data = response.data.into_json().unwrap();
        let notes = data["notes"].as_array().unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0]["name"], "Books");
        assert_eq!(notes[1]["name"], "Music");
    }

    #[tokio::test]
    async fn note_misses_resolve_to_null() {
        let response = fixture_schema()
            .execute(r#"{ note(name: "nonexistent") { id } }"#)
            .await;
        assert!(response.errors.is_empty());

        let data = response.data.into_json().unwrap();
        assert!(data["note"].is_null());
    }

    #[tokio::test]
    async fn missing_required_argument_is_a_validation_error() {
        let response = fixture_schema().execute("{ note { id } }").await;
        assert!(!response.errors.is_empty());
    }
}
