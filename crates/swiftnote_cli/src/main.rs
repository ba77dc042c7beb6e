//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `swiftnote_core` wiring without a UI host.
//! - Probe the remote endpoint once when one is configured.

use swiftnote_core::{GraphQlClient, NoteStore};
use uuid::Uuid;

#[tokio::main]
async fn main() {
    println!("swiftnote_core version={}", swiftnote_core::core_version());

    if std::env::var("SWIFTNOTE_API_URL").is_err() {
        println!("remote probe skipped: SWIFTNOTE_API_URL is not set");
        return;
    }

    let client = match GraphQlClient::from_env() {
        Ok(client) => client,
        Err(err) => {
            eprintln!("remote client setup failed: {err}");
            std::process::exit(1);
        }
    };
    println!("endpoint={}", client.endpoint());

    // One session id per process, injected at the composition root.
    let mut store = NoteStore::new(client, Uuid::new_v4().to_string());
    store.fetch_notes().await;

    let state = store.state();
    if state.error {
        eprintln!("remote probe failed: note list did not load");
        std::process::exit(1);
    }
    println!("notes={}", state.notes.len());
}
