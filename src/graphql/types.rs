//! GraphQL output types
//!
//! Thin wrappers over the domain records in [`crate::schema`]. Scalar fields
//! are direct reads; the relationship fields (`Comment.author`,
//! `Note.comments`) resolve against the shared store from the request context.

use async_graphql::{Context, Object, Result, ID};
use std::sync::Arc;

use crate::schema as domain;
use crate::store::{MemoryStore, Store};

pub struct User(domain::User);

#[Object]
impl User {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }
}

impl From<domain::User> for User {
    fn from(user: domain::User) -> Self {
        Self(user)
    }
}

pub struct Comment(domain::Comment);

#[Object]
impl Comment {
    async fn text(&self) -> &str {
        &self.0.text
    }

    /// The comment's author, or null when no user has the referenced id
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let store = ctx.data::<Arc<MemoryStore>>()?;
        Ok(store.user(&self.0.user_id).map(Into::into))
    }
}

impl From<domain::Comment> for Comment {
    fn from(comment: domain::Comment) -> Self {
        Self(comment)
    }
}

pub struct Note(domain::Note);

#[Object]
impl Note {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn text(&self) -> &str {
        &self.0.text
    }

    /// Comments on this note in insertion order, optionally narrowed to one
    /// author; an absent or empty `userId` applies no filter
    async fn comments(&self, ctx: &Context<'_>, user_id: Option<ID>) -> Result<Vec<Comment>> {
        let store = ctx.data::<Arc<MemoryStore>>()?;
        Ok(store
            .comments_for_note(&self.0.id, user_id.as_ref().map(|id| id.as_str()))
            .into_iter()
            .map(Into::into)
            .collect())
    }
}

impl From<domain::Note> for Note {
    fn from(note: domain::Note) -> Self {
        Self(note)
    }
}
