//! Remote sync client for the managed notes API.
//!
//! # Responsibility
//! - Keep GraphQL transport details inside the core remote boundary.
//! - Expose the four note operations behind a mockable trait seam.
//!
//! # Invariants
//! - Remote failures surface as rejected calls, never panics.
//! - No operation retries or reconciles; callers own that policy.

pub mod graphql;
pub mod notes_api;
