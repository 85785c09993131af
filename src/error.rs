//! Error types for cache construction.
//!
//! Construction is the only fallible step in the lifetime of a cache. Once a
//! cache exists, every operation is total: a miss is reported through the
//! return value (`None`, `false`), never through an error.
//!
//! ```
//! use cacherno::{CacheError, LruCache};
//!
//! let err = LruCache::<&str, i32>::new(0).unwrap_err();
//! assert_eq!(err, CacheError::InvalidCapacity);
//! assert_eq!(err.to_string(), "must provide a positive size");
//! ```

use thiserror::Error;

/// Error returned when a cache cannot be constructed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CacheError {
    /// The requested capacity was zero.
    #[error("must provide a positive size")]
    InvalidCapacity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_capacity_message() {
        assert_eq!(
            CacheError::InvalidCapacity.to_string(),
            "must provide a positive size"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&CacheError::InvalidCapacity);
    }
}
