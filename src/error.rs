//! Directory error types.
//!
//! The only fallible operation is the initial feed load. Once records are in
//! memory, filtering, sorting, suggestion and URL codec calls are total —
//! missing record fields degrade gracefully instead of erroring.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The feed could not be reached (DNS, connect, transport failure).
    #[error("Failed to reach doctor feed: {0}")]
    Fetch(String),

    /// The feed answered with a non-success HTTP status.
    #[error("Doctor feed returned HTTP {status}")]
    Status { status: u16 },

    /// The feed answered but the payload is not a well-formed record list.
    #[error("Malformed doctor feed payload: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_feed() {
        let err = DirectoryError::Status { status: 502 };
        assert_eq!(err.to_string(), "Doctor feed returned HTTP 502");

        let err = DirectoryError::Fetch("connection refused".into());
        assert!(err.to_string().contains("connection refused"));
    }
}
