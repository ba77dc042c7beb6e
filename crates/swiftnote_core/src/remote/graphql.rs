//! GraphQL HTTP transport.
//!
//! # Responsibility
//! - Own endpoint/timeout configuration and the HTTP client handle.
//! - Execute operation documents and decode the `{data, errors}` envelope.
//!
//! # Invariants
//! - A non-empty `errors` array always surfaces as [`RemoteError::GraphQl`],
//!   even when the response also carries partial data.
//! - Transport, status and decode failures never panic.

use log::{debug, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Endpoint used when `SWIFTNOTE_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:20002/graphql";

/// Per-request timeout in seconds when `SWIFTNOTE_API_TIMEOUT_SECS` is unset.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub type RemoteResult<T> = Result<T, RemoteError>;

/// Remote call failure.
#[derive(Debug)]
pub enum RemoteError {
    /// Network-level failure: connect, timeout, non-2xx status, bad body.
    Transport(reqwest::Error),
    /// The service answered with GraphQL-level errors.
    GraphQl(Vec<GraphQlErrorEntry>),
    /// A 2xx response without the expected `data` payload.
    MissingData(&'static str),
}

impl Display for RemoteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "graphql transport failure: {err}"),
            Self::GraphQl(entries) => {
                let messages: Vec<&str> = entries
                    .iter()
                    .map(|entry| entry.message.as_str())
                    .collect();
                write!(f, "graphql service errors: {}", messages.join("; "))
            }
            Self::MissingData(operation) => {
                write!(f, "graphql response carries no data for `{operation}`")
            }
        }
    }
}

impl Error for RemoteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::GraphQl(_) | Self::MissingData(_) => None,
        }
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}

/// One entry of a GraphQL `errors` array. Only the message is kept.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlErrorEntry {
    pub message: String,
}

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Value,
}

#[derive(Deserialize)]
struct GraphQlEnvelope<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlErrorEntry>,
}

/// HTTP client bound to one GraphQL endpoint.
pub struct GraphQlClient {
    http: Client,
    endpoint: String,
}

impl GraphQlClient {
    /// Creates a client for the given endpoint with the default timeout.
    ///
    /// # Errors
    /// - Returns a transport error when the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>) -> RemoteResult<Self> {
        Self::with_timeout(endpoint, DEFAULT_TIMEOUT_SECS)
    }

    /// Creates a client with an explicit per-request timeout.
    pub fn with_timeout(endpoint: impl Into<String>, timeout_secs: u64) -> RemoteResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// Creates a client from `SWIFTNOTE_API_URL` and
    /// `SWIFTNOTE_API_TIMEOUT_SECS`, falling back to defaults.
    pub fn from_env() -> RemoteResult<Self> {
        let endpoint =
            std::env::var("SWIFTNOTE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let timeout_secs = std::env::var("SWIFTNOTE_API_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self::with_timeout(endpoint, timeout_secs)
    }

    /// Returns the configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Executes one operation document and decodes its `data` payload.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        query: &str,
        variables: Value,
    ) -> RemoteResult<T> {
        debug!("event=graphql_request module=remote operation={operation}");
        let response = self
            .http
            .post(&self.endpoint)
            .json(&GraphQlRequest { query, variables })
            .send()
            .await?
            .error_for_status()?;

        let envelope: GraphQlEnvelope<T> = response.json().await?;
        if !envelope.errors.is_empty() {
            warn!(
                "event=graphql_errors module=remote operation={operation} count={}",
                envelope.errors.len()
            );
            return Err(RemoteError::GraphQl(envelope.errors));
        }
        envelope.data.ok_or(RemoteError::MissingData(operation))
    }
}
