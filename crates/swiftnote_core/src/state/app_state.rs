//! Application state and pure action reducer.
//!
//! # Responsibility
//! - Hold the full state: notes list, load flags, form draft.
//! - Map `(state, action)` to the next state without side effects.
//!
//! # Invariants
//! - `reduce` is pure and total over `Action`.
//! - Notes stay in most-recent-first insertion order.
//! - Once set, `error` is never cleared by any transition.

use crate::model::note::{FormDraft, Note};

/// Typed key for one form draft field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
}

/// State transition descriptors accepted by [`reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the notes list and end loading.
    SetNotes(Vec<Note>),
    /// Record a failed list load. Sticky: no transition clears it again.
    Error,
    /// Prepend one note to the list.
    AddNote(Note),
    /// Reset the form to the empty draft.
    ResetForm,
    /// Update one form draft field.
    SetInput { field: FormField, value: String },
}

/// Full application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// Most-recent-first notes.
    pub notes: Vec<Note>,
    /// True until the first `SetNotes`/`Error` resolves the initial load.
    pub loading: bool,
    /// Sticky load-failure flag.
    pub error: bool,
    /// In-progress form input.
    pub form: FormDraft,
}

impl AppState {
    /// Initial state: empty list, loading, clean flags, empty draft.
    pub fn initial() -> Self {
        Self {
            notes: Vec::new(),
            loading: true,
            error: false,
            form: FormDraft::default(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Computes the next state for one action.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        Action::SetNotes(notes) => AppState {
            notes,
            loading: false,
            ..state
        },
        Action::Error => AppState {
            loading: false,
            error: true,
            ..state
        },
        Action::AddNote(note) => {
            let mut notes = state.notes;
            notes.insert(0, note);
            AppState { notes, ..state }
        }
        Action::ResetForm => AppState {
            form: FormDraft::default(),
            ..state
        },
        Action::SetInput { field, value } => {
            let mut form = state.form;
            match field {
                FormField::Name => form.name = value,
                FormField::Description => form.description = value,
            }
            AppState { form, ..state }
        }
    }
}
