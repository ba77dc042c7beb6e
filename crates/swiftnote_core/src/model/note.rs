//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record shared with the remote API.
//! - Define the transient form draft and its submission validation.
//!
//! # Invariants
//! - `id` is assigned once at creation and never changes.
//! - Serialized field names match the remote schema exactly, so this struct
//!   doubles as the wire shape for create/list payloads.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// Canonical note record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable global id, client-generated before the remote create resolves.
    pub id: NoteId,
    pub name: String,
    pub description: String,
    pub completed: bool,
    /// Owning session identifier, injected at the composition root.
    pub client: String,
}

impl Note {
    /// Creates a note from a draft with a fresh generated id.
    ///
    /// # Invariants
    /// - `completed` starts as `false`.
    /// - The generated id is never reused for another note.
    pub fn from_draft(draft: &FormDraft, client: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name.clone(),
            description: draft.description.clone(),
            completed: false,
            client: client.into(),
        }
    }
}

/// Transient, uncommitted form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub name: String,
    pub description: String,
}

impl FormDraft {
    /// Rejects drafts that cannot be submitted.
    ///
    /// # Errors
    /// - [`DraftValidationError::EmptyName`] when the name is empty after
    ///   trimming.
    /// - [`DraftValidationError::EmptyDescription`] when the description is
    ///   empty after trimming.
    pub fn validate(&self) -> Result<(), DraftValidationError> {
        if self.name.trim().is_empty() {
            return Err(DraftValidationError::EmptyName);
        }
        if self.description.trim().is_empty() {
            return Err(DraftValidationError::EmptyDescription);
        }
        Ok(())
    }
}

/// Draft submission validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftValidationError {
    EmptyName,
    EmptyDescription,
}

impl Display for DraftValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "note name must not be empty"),
            Self::EmptyDescription => write!(f, "note description must not be empty"),
        }
    }
}

impl Error for DraftValidationError {}
