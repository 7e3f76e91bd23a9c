//! Error types for the Indian Food skill Lambda functions.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while handling a skill request.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport error talking to the food service (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Food service answered with an unexpected status
    #[error("Food service error: {0}")]
    FoodService(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Intent name outside the set this skill handles
    #[error("Invalid intent: {0}")]
    InvalidIntent(String),

    /// Event is missing something the router needs
    #[error("Malformed event: {0}")]
    MalformedEvent(String),

    /// Event came from an application other than the configured one
    #[error("Invalid application ID: {0}")]
    InvalidApplicationId(String),
}
