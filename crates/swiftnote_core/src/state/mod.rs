//! Application state and its pure transition function.
//!
//! # Responsibility
//! - Keep all UI-facing state in one value that hosts can snapshot.
//! - Keep state transitions side-effect free and testable in isolation.

pub mod app_state;
