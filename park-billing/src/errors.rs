use chrono::{DateTime, Utc};
use thiserror::Error;

/// Error types for billing operations
#[derive(Error, Debug)]
pub enum BillingError {
    /// Error parsing a backend timestamp
    #[error("Failed to parse entry timestamp: {0}")]
    InvalidTimestamp(#[from] chrono::ParseError),

    /// The reference instant precedes the entry instant
    #[error("Reference instant {reference} is earlier than entry instant {entry}")]
    ReferenceBeforeEntry {
        entry: DateTime<Utc>,
        reference: DateTime<Utc>,
    },

    /// A fee policy failed validation
    #[error("Invalid fee policy: {0}")]
    InvalidPolicy(String),

    /// Error reading a policy file
    #[error("Failed to read policy file: {0}")]
    Io(#[from] std::io::Error),

    /// Error deserializing a policy file
    #[error("Failed to parse policy file: {0}")]
    Serialization(#[from] serde_json::Error),
}
