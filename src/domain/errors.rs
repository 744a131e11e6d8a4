// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// Non-2xx answer from the content store. The message carries the
    /// numeric status, status text and raw response body.
    #[error("transport error: {0}")]
    Transport(String),
    /// 2xx answer whose GraphQL envelope carried a non-empty error list.
    #[error("GraphQL error: {0}")]
    RemoteQuery(String),
}
