//! Core logic for the swiftnote note-taking app.
//! State transitions and remote sync live here; rendering hosts stay thin.

pub mod logging;
pub mod model;
pub mod remote;
pub mod service;
pub mod state;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{DraftValidationError, FormDraft, Note, NoteId};
pub use remote::graphql::{GraphQlClient, GraphQlErrorEntry, RemoteError, RemoteResult};
pub use remote::notes_api::NotesApi;
pub use service::note_store::{NoteStore, NoteStoreError};
pub use state::app_state::{reduce, Action, AppState, FormField};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
