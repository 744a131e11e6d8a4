use crate::config::Environment;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{Value, json};

/// Capability seam over the upstream GraphQL endpoint so repositories can be
/// exercised against a stub in tests.
#[async_trait]
pub trait GraphqlExecutor: Send + Sync {
    /// Run one query and return the envelope's `data` field untouched.
    async fn execute(&self, query: &str, variables: Value) -> DomainResult<Value>;
}

/// The `{data, errors?}` wrapper every Hygraph response arrives in. A
/// non-empty error list is a failure even when the HTTP status is 2xx.
#[derive(Debug, Deserialize)]
struct GraphqlEnvelope {
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphqlErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorEntry {
    message: String,
    /// Source locations and field path, kept verbatim for the log.
    #[serde(default)]
    locations: Option<Value>,
    #[serde(default)]
    path: Option<Value>,
}

pub struct HygraphClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
    environment: Environment,
}

impl HygraphClient {
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>, environment: Environment) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            token: token.into(),
            environment,
        }
    }
}

#[async_trait]
impl GraphqlExecutor for HygraphClient {
    async fn execute(&self, query: &str, variables: Value) -> DomainResult<Value> {
        // Query logging is development-only; the bearer token never appears
        // in any log line.
        if self.environment.is_development() {
            tracing::debug!(query, %variables, "executing GraphQL query");
        }

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await
            .map_err(|err| {
                DomainError::Transport(format!("request to content store failed: {err}"))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|err| {
            DomainError::Transport(format!("reading content store response failed: {err}"))
        })?;

        decode_envelope(status, &body)
    }
}

/// Unwrap one HTTP response into the envelope's `data` field.
fn decode_envelope(status: StatusCode, body: &str) -> DomainResult<Value> {
    if !status.is_success() {
        return Err(DomainError::Transport(format!(
            "HTTP {}: {}. {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("unknown"),
            body
        )));
    }

    let envelope: GraphqlEnvelope = serde_json::from_str(body)
        .map_err(|err| DomainError::RemoteQuery(format!("malformed response envelope: {err}")))?;

    if let Some(first) = envelope.errors.first() {
        // Only the first message travels up; the rest stay in the log.
        tracing::error!(
            errors = ?envelope
                .errors
                .iter()
                .map(|e| (&e.message, &e.locations, &e.path))
                .collect::<Vec<_>>(),
            "GraphQL query returned errors"
        );
        return Err(DomainError::RemoteQuery(first.message.clone()));
    }

    Ok(envelope.data.unwrap_or(Value::Null))
}
