//! Error types for credential verification.

use std::fmt;

/// Errors from verifying a session credential.
///
/// Callers at the network edge treat every variant uniformly as "no valid
/// session"; the variants exist so the denial can be logged with a precise
/// reason without leaking it to the requester.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    /// The token signature does not verify against the configured key.
    InvalidSignature,
    /// The token is validly signed but past its expiry.
    Expired,
    /// The token was signed with an algorithm other than the configured one.
    UnsupportedAlgorithm { alg: String },
    /// The token could not be parsed at all.
    Malformed { reason: String },
    /// The configured verification key could not be loaded.
    InvalidKey { reason: String },
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSignature => write!(f, "token signature is invalid"),
            Self::Expired => write!(f, "token has expired"),
            Self::UnsupportedAlgorithm { alg } => {
                write!(f, "token signed with unsupported algorithm: {alg}")
            }
            Self::Malformed { reason } => write!(f, "malformed token: {reason}"),
            Self::InvalidKey { reason } => {
                write!(f, "invalid verification key: {reason}")
            }
        }
    }
}

impl std::error::Error for CredentialError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_signature_display() {
        let err = CredentialError::InvalidSignature;
        assert!(err.to_string().contains("signature"));
    }

    #[test]
    fn unsupported_algorithm_display() {
        let err = CredentialError::UnsupportedAlgorithm {
            alg: "HS256".to_string(),
        };
        assert!(err.to_string().contains("HS256"));
    }

    #[test]
    fn malformed_display() {
        let err = CredentialError::Malformed {
            reason: "not base64".to_string(),
        };
        assert!(err.to_string().contains("not base64"));
    }
}
