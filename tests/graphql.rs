//! End-to-end tests executing GraphQL documents against a fixture store.

use std::sync::Arc;

use notegraph::{build_schema, Comment, MemoryStore, Note, NoteSchema};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn fixture_schema() -> NoteSchema {
    build_schema(Arc::new(MemoryStore::with_fixtures()))
}

async fn execute(schema: &NoteSchema, query: &str) -> Value {
    let response = schema.execute(query).await;
    assert!(
        response.errors.is_empty(),
        "unexpected errors: {:?}",
        response.errors
    );
    response.data.into_json().unwrap()
}

#[tokio::test]
async fn note_by_name_returns_the_full_record() {
    let schema = fixture_schema();
    let data = execute(&schema, r#"{ note(name: "Books") { id name text } }"#).await;

    assert_eq!(
        data["note"],
        json!({ "id": "1", "name": "Books", "text": "Books to read" })
    );
}

#[tokio::test]
async fn note_by_unknown_name_is_null() {
    let schema = fixture_schema();
    let data = execute(&schema, r#"{ note(name: "nonexistent") { id } }"#).await;

    assert_eq!(data["note"], Value::Null);
}

#[tokio::test]
async fn notes_length_is_monotonic_across_creates() {
    let schema = fixture_schema();
    let mut previous = 0;

    for i in 0..3 {
        let data = execute(&schema, "{ notes { id } }").await;
        let len = data["notes"].as_array().unwrap().len();
        assert!(len >= previous);
        previous = len;

        let mutation = format!(
            r#"mutation {{ createNote(name: "Note {i}", text: "body") {{ id }} }}"#
        );
        execute(&schema, &mutation).await;
    }

    let data = execute(&schema, "{ notes { id } }").await;
    assert_eq!(data["notes"].as_array().unwrap().len(), previous + 1);
}

#[tokio::test]
async fn created_note_is_visible_with_a_fresh_id() {
    let schema = fixture_schema();

    let before = execute(&schema, "{ notes { id } }").await;
    let existing: Vec<String> = before["notes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|note| note["id"].as_str().unwrap().to_string())
        .collect();

    let created = execute(
        &schema,
        r#"mutation { createNote(name: "Travel", text: "Plan a trip") { id name text } }"#,
    )
    .await;
    let new_id = created["createNote"]["id"].as_str().unwrap().to_string();
    assert_eq!(created["createNote"]["name"], "Travel");
    assert_eq!(created["createNote"]["text"], "Plan a trip");
    assert!(!existing.contains(&new_id));

    let after = execute(&schema, "{ notes { id name text } }").await;
    let notes = after["notes"].as_array().unwrap();
    let travel = notes.iter().find(|note| note["id"] == json!(new_id)).unwrap();
    assert_eq!(travel["name"], "Travel");
    assert_eq!(travel["text"], "Plan a trip");
}

#[tokio::test]
async fn comments_come_back_in_insertion_order() {
    let schema = fixture_schema();
    let data = execute(
        &schema,
        r#"{ note(name: "Books") { comments { text author { id name } } } }"#,
    )
    .await;

    assert_eq!(
        data["note"]["comments"],
        json!([
            { "text": "Круто!", "author": { "id": "1", "name": "Maxim" } },
            { "text": "А мне не очень понравилось", "author": { "id": "2", "name": "Alex" } },
        ])
    );
}

#[tokio::test]
async fn comments_filter_by_user_id() {
    let schema = fixture_schema();

    let data = execute(
        &schema,
        r#"{ note(name: "Books") { comments(userId: "1") { text } } }"#,
    )
    .await;
    assert_eq!(data["note"]["comments"], json!([{ "text": "Круто!" }]));

    let data = execute(
        &schema,
        r#"{ note(name: "Books") { comments(userId: "99") { text } } }"#,
    )
    .await;
    assert_eq!(data["note"]["comments"], json!([]));

    // An empty userId behaves as if the argument were absent.
    let data = execute(
        &schema,
        r#"{ note(name: "Books") { comments(userId: "") { text } } }"#,
    )
    .await;
    assert_eq!(data["note"]["comments"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn author_is_null_for_a_dangling_user_id() {
    // A single comment pointing at a user that does not exist.
    let store = MemoryStore::with_seed(
        vec![],
        vec![Note::new("Orphans", "no authors here").with_id("n1")],
        vec![Comment::new("n1", "99", "ghost")],
    );
    let schema = build_schema(Arc::new(store));

    let data = execute(&schema, "{ notes { comments { text author { id } } } }").await;

    assert_eq!(
        data["notes"][0]["comments"],
        json!([{ "text": "ghost", "author": Value::Null }])
    );
}
