//! Shared error types for the crate

use crate::core::types::TypeId;
use thiserror::Error;

/// Main error type for markscan operations
#[derive(Debug, Error)]
pub enum Error {
    /// A required argument was missing or malformed
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The host type system could not answer a metadata query.
    ///
    /// Distinct from an empty result: a type with no methods resolves to an
    /// empty set, a type the host cannot enumerate resolves to this error.
    #[error("Host lookup failed for type `{type_id}`: {message}")]
    HostLookup { type_id: TypeId, message: String },

    /// Wrapped external errors
    #[error(transparent)]
    External(#[from] anyhow::Error),
}

impl Error {
    /// Create an invalid-argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a host lookup error for a specific type
    pub fn host_lookup(type_id: impl Into<TypeId>, message: impl Into<String>) -> Self {
        Self::HostLookup {
            type_id: type_id.into(),
            message: message.into(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
