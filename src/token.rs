//! Token wire format.
//!
//! ```text
//! <payload_b64> ":" <timestamp_b64> ":" <signature_b64>
//! ```
//!
//! A token contains exactly two separators. Parsing splits into at most
//! three parts and rejects anything else outright; nothing is partially
//! parsed.

use crate::encoding::SEPARATOR;
use crate::error::{Error, Result};
use core::fmt;

/// A signed token as produced by [`Signer::sign`](crate::Signer::sign).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    /// Assembles a token from its signed message and encoded signature.
    pub(crate) fn assemble(message: String, signature: &str) -> Self {
        let mut token = message;
        token.reserve(1 + signature.len());
        token.push(SEPARATOR);
        token.push_str(signature);
        Self(token)
    }

    /// Returns the token text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the token and returns its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Splits the token into its three fields.
    pub fn parts(&self) -> Result<TokenParts<'_>> {
        TokenParts::parse(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Token").field(&self.0).finish()
    }
}

/// The three borrowed fields of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenParts<'a> {
    payload: &'a str,
    timestamp: &'a str,
    signature: &'a str,
}

impl<'a> TokenParts<'a> {
    /// Splits `token` into payload, timestamp and signature fields.
    ///
    /// Fails with [`Error::BadSignature`] unless the token contains exactly
    /// two separators.
    pub fn parse(token: &'a str) -> Result<Self> {
        if token.matches(SEPARATOR).count() != 2 {
            return Err(Error::BadSignature);
        }
        let mut fields = token.splitn(3, SEPARATOR);
        match (fields.next(), fields.next(), fields.next()) {
            (Some(payload), Some(timestamp), Some(signature)) => Ok(Self {
                payload,
                timestamp,
                signature,
            }),
            _ => Err(Error::BadSignature),
        }
    }

    /// The encoded payload field.
    #[must_use]
    pub const fn payload(&self) -> &'a str {
        self.payload
    }

    /// The encoded timestamp field.
    #[must_use]
    pub const fn timestamp(&self) -> &'a str {
        self.timestamp
    }

    /// The encoded signature field.
    #[must_use]
    pub const fn signature(&self) -> &'a str {
        self.signature
    }

    /// The signed message: `payload ":" timestamp`.
    #[must_use]
    pub fn signed_message(&self) -> String {
        signed_message(self.payload, self.timestamp)
    }
}

/// Joins the payload and timestamp fields into the MAC input.
#[must_use]
pub fn signed_message(payload: &str, timestamp: &str) -> String {
    let mut message = String::with_capacity(payload.len() + 1 + timestamp.len());
    message.push_str(payload);
    message.push(SEPARATOR);
    message.push_str(timestamp);
    message
}
