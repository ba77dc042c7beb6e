//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate reducer transitions and remote calls into use-case APIs.
//! - Keep UI hosts decoupled from transport and state-transition details.

pub mod note_store;
