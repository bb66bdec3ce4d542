//! Error types for token signing and verification.
//!
//! Every failure is a variant of the closed [`Error`] enum so callers can
//! tell an expired token from a forged one without matching on strings.
//! [`Error::BadSignature`] is deliberately coarse: it never says which
//! structural or cryptographic check rejected the token.

use std::time::Duration;
use thiserror::Error;

/// Failure inside the payload codec (serialization plus base64).
#[derive(Debug, Error)]
pub enum CodecError {
    /// The value could not be serialized by the payload format.
    #[error("payload serialization failed: {0}")]
    Serialize(String),
    /// The bytes did not deserialize into the requested type.
    #[error("payload deserialization failed: {0}")]
    Deserialize(String),
    /// The field was not valid unpadded URL-safe base64.
    #[error("invalid base64 field: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// An error from key handling, signing or verification.
///
/// # Example
///
/// ```
/// use signet::{Error, Signer};
///
/// let signer = Signer::new(b"secret".to_vec()).unwrap();
/// let err = signer.verify::<String>("not a token", std::time::Duration::ZERO).unwrap_err();
/// assert!(err.is_bad_signature());
/// assert!(matches!(err, Error::BadSignature));
/// ```
#[derive(Debug, Error)]
pub enum Error {
    /// The secret key is empty.
    #[error("invalid secret key: key must not be empty")]
    InvalidKey,
    /// The field encoding alphabet contains the token separator.
    #[error("field encoding alphabet contains the token separator {0:?}")]
    SeparatorInAlphabet(char),
    /// The payload could not be encoded while signing.
    #[error("payload encoding failed: {0}")]
    Encoding(#[source] CodecError),
    /// The token is malformed or its signature does not match.
    #[error("bad signature")]
    BadSignature,
    /// The signature is valid but the token is older than allowed.
    #[error("signature expired: age {age:?} exceeds max age {max_age:?}")]
    SignatureExpired {
        /// Time elapsed since the token was signed.
        age: Duration,
        /// The maximum age the caller accepted.
        max_age: Duration,
    },
    /// The authenticated payload did not decode into the requested type.
    #[error("payload decoding failed: {0}")]
    Decoding(#[source] CodecError),
    /// The OS entropy source failed.
    #[error("entropy source failed: {0}")]
    Entropy(String),
    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns `true` for [`Error::BadSignature`].
    #[must_use]
    pub const fn is_bad_signature(&self) -> bool {
        matches!(self, Self::BadSignature)
    }

    /// Returns `true` for [`Error::SignatureExpired`].
    #[must_use]
    pub const fn is_expired(&self) -> bool {
        matches!(self, Self::SignatureExpired { .. })
    }

    /// Returns `true` for [`Error::Decoding`].
    #[must_use]
    pub const fn is_decoding(&self) -> bool {
        matches!(self, Self::Decoding(_))
    }

    /// Returns `true` for [`Error::Encoding`].
    #[must_use]
    pub const fn is_encoding(&self) -> bool {
        matches!(self, Self::Encoding(_))
    }

    /// Returns `true` for [`Error::InvalidKey`].
    #[must_use]
    pub const fn is_invalid_key(&self) -> bool {
        matches!(self, Self::InvalidKey)
    }
}

/// Result type for signet operations.
pub type Result<T> = std::result::Result<T, Error>;
