//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Gavel authorization core
#[derive(Error, Debug)]
pub enum Error {
    /// No usable credential where one is required.
    ///
    /// Covers a missing bearer, a missing refresh cookie, and every kind of
    /// token failure (forged, expired, malformed, superseded session). The
    /// message never distinguishes the underlying cause.
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Opaque message surfaced to the caller
        message: String,
    },

    /// Credential was valid but the identity fails a scoped policy
    #[error("Forbidden: {message}")]
    Forbidden {
        /// Which policy denied the request
        message: String,
    },

    /// Resource not found error
    ///
    /// For an authenticated user whose row vanished between token issuance
    /// and role lookup this is fatal - no policy decision is meaningful.
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Revocation of an already-absent session
    ///
    /// Soft signal: callers treat it as success to keep logout idempotent.
    #[error("Session conflict: {message}")]
    SessionConflict {
        /// Description of the conflicting session operation
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Cache operation error
    #[error("Cache error: {message}")]
    Cache {
        /// Description of the cache error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Persistence collaborator error
    #[error("Database error: {message}")]
    Database {
        /// Description of the database error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },
}

impl Error {
    /// Credential failure with the uniform opaque message
    pub fn invalid_token() -> Self {
        Error::Unauthorized {
            message: crate::constants::INVALID_TOKEN_MESSAGE.to_string(),
        }
    }

    /// Credential failure with a specific message
    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Error::Unauthorized {
            message: message.into(),
        }
    }

    /// Policy denial
    pub fn forbidden<S: Into<String>>(message: S) -> Self {
        Error::Forbidden {
            message: message.into(),
        }
    }

    /// Missing resource
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Error::NotFound {
            resource: resource.into(),
        }
    }

    /// Soft session-revocation conflict
    pub fn session_conflict<S: Into<String>>(message: S) -> Self {
        Error::SessionConflict {
            message: message.into(),
        }
    }

    /// Configuration error without a source
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Cache error without a source
    pub fn cache<S: Into<String>>(message: S) -> Self {
        Error::Cache {
            message: message.into(),
            source: None,
        }
    }

    /// Internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Error::Internal {
            message: message.into(),
        }
    }

    /// True for errors a caller may safely swallow (idempotent operations)
    pub fn is_soft(&self) -> bool {
        matches!(self, Error::SessionConflict { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::INVALID_TOKEN_MESSAGE;

    #[test]
    fn test_invalid_token_message_is_uniform() {
        let err = Error::invalid_token();
        match err {
            Error::Unauthorized { message } => assert_eq!(message, INVALID_TOKEN_MESSAGE),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_session_conflict_is_soft() {
        assert!(Error::session_conflict("already gone").is_soft());
        assert!(!Error::forbidden("nope").is_soft());
        assert!(!Error::invalid_token().is_soft());
    }

    #[test]
    fn test_display_includes_kind() {
        let err = Error::forbidden("group leadership required");
        assert_eq!(err.to_string(), "Forbidden: group leadership required");
    }
}
