use async_graphql::{Context, Object, Result};
use std::sync::Arc;

use super::types::Note;
use crate::store::{MemoryStore, Store};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a new note and append it to the shared collection
    ///
    /// The note gets a freshly generated id; names are not checked for
    /// uniqueness. The append is visible to all subsequent reads.
    async fn create_note(&self, ctx: &Context<'_>, name: String, text: String) -> Result<Note> {
        let store = ctx.data::<Arc<MemoryStore>>()?;
        Ok(store.create_note(name, text).into())
    }
}
