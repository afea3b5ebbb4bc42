//! Error extension utilities
//!
//! Context extension methods for converting external errors into the
//! domain error type at infrastructure seams.
//!
//! # Example
//!
//! ```ignore
//! use gavel_infrastructure::error_ext::ErrorContext;
//!
//! let content = std::fs::read_to_string(&path)
//!     .config_context(format!("Failed to read config file: {}", path.display()))?;
//! ```

use gavel_domain::error::{Error, Result};
use std::fmt;

/// Extension trait for adding context to fallible operations
pub trait ErrorContext<T> {
    /// Wrap the error as an internal domain error with context
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Wrap with lazily built context
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;

    /// Wrap as a configuration error
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized;

    /// Wrap as a cache error
    fn cache_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| Error::Internal {
            message: format!("{context}: {e}"),
        })
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| Error::Internal {
            message: format!("{}: {e}", f()),
        })
    }

    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| Error::Config {
            message: context.to_string(),
            source: Some(Box::new(e)),
        })
    }

    fn cache_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| Error::Cache {
            message: context.to_string(),
            source: Some(Box::new(e)),
        })
    }
}
