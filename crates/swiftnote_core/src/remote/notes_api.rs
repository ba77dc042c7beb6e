//! Typed note operations over the GraphQL transport.
//!
//! # Responsibility
//! - Define the [`NotesApi`] seam the store depends on.
//! - Hold the four operation documents and their response shapes.
//!
//! # Invariants
//! - Every document selects exactly the fields `Note` deserializes.
//! - `delete`/`update` are keyed by id only; the full note never travels on
//!   those mutations.

use crate::model::note::{Note, NoteId};
use crate::remote::graphql::{GraphQlClient, RemoteResult};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

const LIST_NOTES: &str = "\
query ListNotes {
  listNotes {
    items { id name description completed client }
  }
}";

const CREATE_NOTE: &str = "\
mutation CreateNote($input: CreateNoteInput!) {
  createNote(input: $input) { id name description completed client }
}";

const DELETE_NOTE: &str = "\
mutation DeleteNote($input: DeleteNoteInput!) {
  deleteNote(input: $input) { id name description completed client }
}";

const UPDATE_NOTE: &str = "\
mutation UpdateNote($input: UpdateNoteInput!) {
  updateNote(input: $input) { id name description completed client }
}";

/// Remote note operations.
///
/// The store depends on this seam so hosts can wire the real client and
/// tests can substitute recording fakes.
#[async_trait]
pub trait NotesApi: Send + Sync {
    /// Reads the full remote list.
    async fn list_notes(&self) -> RemoteResult<Vec<Note>>;
    /// Creates one note from a client-built record.
    async fn create_note(&self, note: &Note) -> RemoteResult<Note>;
    /// Deletes one note by id, returning the deleted record.
    async fn delete_note(&self, id: NoteId) -> RemoteResult<Note>;
    /// Sets the completed flag of one note by id.
    async fn update_note(&self, id: NoteId, completed: bool) -> RemoteResult<Note>;
}

#[derive(Deserialize)]
struct ListNotesData {
    #[serde(rename = "listNotes")]
    list_notes: NoteConnection,
}

#[derive(Deserialize)]
struct NoteConnection {
    items: Vec<Note>,
}

#[derive(Deserialize)]
struct CreateNoteData {
    #[serde(rename = "createNote")]
    create_note: Note,
}

#[derive(Deserialize)]
struct DeleteNoteData {
    #[serde(rename = "deleteNote")]
    delete_note: Note,
}

#[derive(Deserialize)]
struct UpdateNoteData {
    #[serde(rename = "updateNote")]
    update_note: Note,
}

#[async_trait]
impl NotesApi for GraphQlClient {
    async fn list_notes(&self) -> RemoteResult<Vec<Note>> {
        let data: ListNotesData = self.execute("listNotes", LIST_NOTES, json!({})).await?;
        Ok(data.list_notes.items)
    }

    async fn create_note(&self, note: &Note) -> RemoteResult<Note> {
        let data: CreateNoteData = self
            .execute("createNote", CREATE_NOTE, json!({ "input": note }))
            .await?;
        Ok(data.create_note)
    }

    async fn delete_note(&self, id: NoteId) -> RemoteResult<Note> {
        let data: DeleteNoteData = self
            .execute("deleteNote", DELETE_NOTE, json!({ "input": { "id": id } }))
            .await?;
        Ok(data.delete_note)
    }

    async fn update_note(&self, id: NoteId, completed: bool) -> RemoteResult<Note> {
        let data: UpdateNoteData = self
            .execute(
                "updateNote",
                UPDATE_NOTE,
                json!({ "input": { "id": id, "completed": completed } }),
            )
            .await?;
        Ok(data.update_note)
    }
}
