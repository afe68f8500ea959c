//! Error types for request execution.
//!
//! # Design
//! Only one failure originates in this crate: `RequestCreationFailed`, raised
//! when assembly cannot parse the target URL. Everything else is whatever the
//! transport reported, forwarded verbatim through the `transparent` variant
//! so callers see the transport's own message. Serialization problems in the
//! body encoder are deliberately NOT errors; the request proceeds with an
//! absent body instead.

/// Boxed error as reported by a [`Transport`](crate::Transport).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors carried in an [`Outcome`](crate::Outcome).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The target URL could not be turned into a usable request. No network
    /// I/O was attempted.
    #[error("unable to create the URL request")]
    RequestCreationFailed,

    /// The transport reported a failure (DNS, connect, TLS, body read, ...).
    #[error(transparent)]
    Transport(#[from] BoxError),
}

impl Error {
    /// True when this is the assembly-stage failure.
    pub fn is_request_creation_failed(&self) -> bool {
        matches!(self, Error::RequestCreationFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_creation_failed_display() {
        let err = Error::RequestCreationFailed;
        assert_eq!(err.to_string(), "unable to create the URL request");
        assert!(err.is_request_creation_failed());
    }

    #[test]
    fn transport_error_is_forwarded_verbatim() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "connection reset");
        let err = Error::from(BoxError::from(io));
        assert_eq!(err.to_string(), "connection reset");
        assert!(!err.is_request_creation_failed());
    }
}
