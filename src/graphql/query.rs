use async_graphql::{Context, Object, Result};
use std::sync::Arc;

use super::types::Note;
use crate::store::{MemoryStore, Store};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All notes, in insertion order
    async fn notes(&self, ctx: &Context<'_>) -> Result<Vec<Note>> {
        let store = ctx.data::<Arc<MemoryStore>>()?;
        Ok(store.notes().into_iter().map(Into::into).collect())
    }

    /// The first note whose name matches exactly, or null when none does
    async fn note(&self, ctx: &Context<'_>, name: String) -> Result<Option<Note>> {
        let store = ctx.data::<Arc<MemoryStore>>()?;
        Ok(store.note_by_name(&name).map(Into::into))
    }
}
