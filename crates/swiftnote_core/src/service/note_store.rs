//! Optimistic note store.
//!
//! # Responsibility
//! - Own the application state and apply reducer transitions.
//! - Mirror every local mutation with the matching remote operation.
//!
//! # Invariants
//! - Local state is updated before the remote call is issued.
//! - Remote failures after an optimistic update are logged, never rolled
//!   back. Local state stays the source of truth until the next full load;
//!   this eventual-consistency gap is accepted, not accidental.
//! - Delete/toggle resolve their target by id, never by value or reference.

use crate::model::note::{DraftValidationError, Note, NoteId};
use crate::remote::notes_api::NotesApi;
use crate::state::app_state::{reduce, Action, AppState, FormField};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store operation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteStoreError {
    /// Draft failed submission validation; surface this to the user.
    InvalidDraft(DraftValidationError),
    /// Target note is not in the local list.
    NoteNotFound(NoteId),
}

impl Display for NoteStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDraft(err) => write!(f, "{err}"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
        }
    }
}

impl Error for NoteStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDraft(err) => Some(err),
            Self::NoteNotFound(_) => None,
        }
    }
}

impl From<DraftValidationError> for NoteStoreError {
    fn from(value: DraftValidationError) -> Self {
        Self::InvalidDraft(value)
    }
}

/// Application facade combining state, reducer and remote sync.
///
/// Methods take `&mut self`, so reducer invocations are serialized by
/// construction; hosts that want fire-and-forget remote calls spawn the
/// returned futures on their own runtime.
pub struct NoteStore<A: NotesApi> {
    state: AppState,
    api: A,
    client_id: String,
}

impl<A: NotesApi> NoteStore<A> {
    /// Creates a store with an explicitly injected session client id.
    pub fn new(api: A, client_id: impl Into<String>) -> Self {
        Self {
            state: AppState::initial(),
            api,
            client_id: client_id.into(),
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Session client id stamped onto created notes.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Updates one form draft field.
    pub fn set_input(&mut self, field: FormField, value: impl Into<String>) {
        self.dispatch(Action::SetInput {
            field,
            value: value.into(),
        });
    }

    /// Loads the full remote list into local state.
    ///
    /// Failures are absorbed into state: the sticky error flag is set, the
    /// failure is logged and the current list stays untouched.
    pub async fn fetch_notes(&mut self) {
        match self.api.list_notes().await {
            Ok(notes) => {
                info!(
                    "event=notes_fetched module=store status=ok count={}",
                    notes.len()
                );
                self.dispatch(Action::SetNotes(notes));
            }
            Err(err) => {
                error!("event=notes_fetched module=store status=error detail={err}");
                self.dispatch(Action::Error);
            }
        }
    }

    /// Submits the current draft as a new note.
    ///
    /// The note is added locally and the form reset before the remote
    /// create is issued. A remote failure is logged only; the optimistic
    /// note stays in the list.
    ///
    /// # Errors
    /// - [`NoteStoreError::InvalidDraft`] when name or description is empty
    ///   after trimming; no state change and no remote call happen.
    pub async fn create_note(&mut self) -> Result<Note, NoteStoreError> {
        self.state.form.validate()?;
        let note = Note::from_draft(&self.state.form, self.client_id.clone());
        self.dispatch(Action::AddNote(note.clone()));
        self.dispatch(Action::ResetForm);

        match self.api.create_note(&note).await {
            Ok(_) => info!("event=note_created module=store status=ok id={}", note.id),
            Err(err) => error!(
                "event=note_created module=store status=error id={} detail={err}",
                note.id
            ),
        }
        Ok(note)
    }

    /// Deletes one note by id.
    ///
    /// The note is removed locally before the remote delete is issued. A
    /// remote failure is logged only; the note is not restored.
    ///
    /// # Errors
    /// - [`NoteStoreError::NoteNotFound`] when `id` is not in the local
    ///   list; no state change and no remote call happen.
    pub async fn delete_note(&mut self, id: NoteId) -> Result<(), NoteStoreError> {
        if !self.state.notes.iter().any(|note| note.id == id) {
            return Err(NoteStoreError::NoteNotFound(id));
        }
        let remaining = self
            .state
            .notes
            .iter()
            .filter(|note| note.id != id)
            .cloned()
            .collect();
        self.dispatch(Action::SetNotes(remaining));

        match self.api.delete_note(id).await {
            Ok(_) => info!("event=note_deleted module=store status=ok id={id}"),
            Err(err) => error!("event=note_deleted module=store status=error id={id} detail={err}"),
        }
        Ok(())
    }

    /// Flips the completed flag of one note by id, returning the new value.
    ///
    /// The flag is flipped locally before the remote update is issued. A
    /// remote failure is logged only; the flag is not reverted.
    ///
    /// # Errors
    /// - [`NoteStoreError::NoteNotFound`] when `id` is not in the local
    ///   list; no state change and no remote call happen.
    pub async fn toggle_note(&mut self, id: NoteId) -> Result<bool, NoteStoreError> {
        let completed = match self.state.notes.iter().find(|note| note.id == id) {
            Some(note) => !note.completed,
            None => return Err(NoteStoreError::NoteNotFound(id)),
        };
        let toggled = self
            .state
            .notes
            .iter()
            .cloned()
            .map(|mut note| {
                if note.id == id {
                    note.completed = completed;
                }
                note
            })
            .collect();
        self.dispatch(Action::SetNotes(toggled));

        match self.api.update_note(id, completed).await {
            Ok(_) => info!(
                "event=note_toggled module=store status=ok id={id} completed={completed}"
            ),
            Err(err) => error!(
                "event=note_toggled module=store status=error id={id} detail={err}"
            ),
        }
        Ok(completed)
    }

    fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
    }
}
