//! Domain model for notes and form input.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Keep one note shape shared between local state and the remote wire.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId` assigned at creation.

pub mod note;
