//! Token signing and verification.
//!
//! # Construction
//!
//! ```text
//! payload_field   = base64(serialize(payload))
//! timestamp_field = base64(decimal(now_nanos))
//! message         = payload_field ":" timestamp_field
//! token           = message ":" base64(MAC(key, message))
//! ```
//!
//! # Verification order
//!
//! 1. Split into exactly three fields, else [`Error::BadSignature`].
//! 2. Recompute the MAC over the first two fields and compare the encoded
//!    signatures in constant time, else [`Error::BadSignature`].
//! 3. Only then decode the timestamp and check freshness
//!    ([`Error::SignatureExpired`]).
//! 4. Only then decode the payload ([`Error::Decoding`]).
//!
//! Nothing in the token is trusted before step 2 succeeds.

use crate::codec::{Codec, Format, Json};
use crate::encoding::{check_separator_free, encode_field};
use crate::error::{Error, Result};
use crate::key::SecretKey;
use crate::mac::{MacAlgorithm, constant_time_eq};
use crate::time::{Clock, SystemClock, decode_timestamp, elapsed_since, encode_timestamp};
use crate::token::{Token, TokenParts, signed_message};
use crate::tracing_compat::{debug, trace};
use core::fmt;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

/// Signs values into tokens and verifies tokens back into values.
///
/// A signer holds one key, one MAC algorithm, one payload format and one
/// clock, all fixed at construction. It has no interior mutability and can
/// be shared freely across threads.
///
/// # Example
///
/// ```
/// use signet::Signer;
/// use std::time::Duration;
///
/// let signer = Signer::new(b"my secret key".to_vec()).unwrap();
/// let token = signer.sign("some complicated object").unwrap();
///
/// let value: String = signer.verify(token.as_str(), Duration::from_secs(10)).unwrap();
/// assert_eq!(value, "some complicated object");
/// ```
pub struct Signer<F = Json, C = SystemClock> {
    key: SecretKey,
    algorithm: MacAlgorithm,
    codec: Codec<F>,
    clock: Arc<C>,
}

impl Signer {
    /// Creates an HMAC-SHA256 / JSON / wall-clock signer.
    ///
    /// Fails with [`Error::InvalidKey`] if `key` is empty.
    pub fn new(key: impl Into<Vec<u8>>) -> Result<Self> {
        Self::builder(SecretKey::new(key)?).build()
    }

    /// Starts a builder for a signer with non-default parts.
    #[must_use]
    pub fn builder(key: SecretKey) -> SignerBuilder {
        SignerBuilder::new(key)
    }
}

impl<F: Format, C: Clock> Signer<F, C> {
    /// Returns the MAC algorithm.
    #[must_use]
    pub const fn algorithm(&self) -> MacAlgorithm {
        self.algorithm
    }

    /// Returns the payload format.
    #[must_use]
    pub const fn format(&self) -> &F {
        self.codec.format()
    }

    /// Returns the clock.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns the encoded MAC of an arbitrary message under this signer's key.
    #[must_use]
    pub fn signature(&self, message: &str) -> String {
        encode_field(&self.algorithm.compute(&self.key, message.as_bytes()))
    }

    /// Signs `payload`, stamping it with the current time.
    ///
    /// Fails with [`Error::Encoding`] if the payload cannot be serialized.
    pub fn sign<T: Serialize + ?Sized>(&self, payload: &T) -> Result<Token> {
        let payload_field = self.codec.encode(payload).map_err(Error::Encoding)?;
        let timestamp_field = encode_timestamp(self.clock.now_nanos());
        let message = signed_message(&payload_field, &timestamp_field);
        let signature = self.signature(&message);
        let token = Token::assemble(message, &signature);
        trace!(len = token.as_str().len(), "token signed");
        Ok(token)
    }

    /// Verifies `token` and decodes its payload.
    ///
    /// `max_age` of [`Duration::ZERO`] disables the freshness check.
    ///
    /// # Errors
    ///
    /// - [`Error::BadSignature`]: malformed token, MAC mismatch, or (when
    ///   `max_age` is non-zero) an unparseable timestamp.
    /// - [`Error::SignatureExpired`]: valid MAC, but older than `max_age`.
    /// - [`Error::Decoding`]: valid MAC, but the payload is not a `T`.
    pub fn verify<T: DeserializeOwned>(&self, token: &str, max_age: Duration) -> Result<T> {
        let now = self.clock.now_nanos();
        let parts = self.authenticate(token)?;

        if !max_age.is_zero() {
            let signed_at = decode_timestamp(parts.timestamp()).ok_or(Error::BadSignature)?;
            check_age(now, signed_at, max_age)?;
        }

        let value = self.codec.decode(parts.payload()).map_err(Error::Decoding)?;
        trace!(len = token.len(), "token verified");
        Ok(value)
    }

    /// Like [`verify`](Self::verify), but also returns the signing time.
    ///
    /// The timestamp is always decoded here, so an unparseable timestamp is
    /// [`Error::BadSignature`] even when `max_age` is zero.
    pub fn verify_timed<T: DeserializeOwned>(
        &self,
        token: &str,
        max_age: Duration,
    ) -> Result<Verified<T>> {
        let now = self.clock.now_nanos();
        let parts = self.authenticate(token)?;

        let signed_at = decode_timestamp(parts.timestamp()).ok_or(Error::BadSignature)?;
        if !max_age.is_zero() {
            check_age(now, signed_at, max_age)?;
        }

        let value = self.codec.decode(parts.payload()).map_err(Error::Decoding)?;
        trace!(len = token.len(), signed_at, "token verified");
        Ok(Verified { value, signed_at })
    }

    /// Splits the token and checks its MAC. Nothing else is examined.
    fn authenticate<'t>(&self, token: &'t str) -> Result<TokenParts<'t>> {
        let parts = TokenParts::parse(token)?;
        let expected = self.signature(&parts.signed_message());
        if constant_time_eq(expected.as_bytes(), parts.signature().as_bytes()) {
            Ok(parts)
        } else {
            Err(Error::BadSignature)
        }
    }
}

fn check_age(now: i64, signed_at: i64, max_age: Duration) -> Result<()> {
    // A timestamp in the future has no age yet.
    match elapsed_since(now, signed_at) {
        Some(age) if age > max_age => Err(Error::SignatureExpired { age, max_age }),
        _ => Ok(()),
    }
}

impl<F: Clone, C> Clone for Signer<F, C> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            algorithm: self.algorithm,
            codec: self.codec.clone(),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<F: Format, C> fmt::Debug for Signer<F, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer")
            .field("key", &self.key)
            .field("algorithm", &self.algorithm)
            .field("format", &self.codec.format().name())
            .finish_non_exhaustive()
    }
}

/// A verified payload together with the time it was signed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verified<T> {
    value: T,
    signed_at: i64,
}

impl<T> Verified<T> {
    /// The decoded payload.
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the wrapper and returns the payload.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Signing time in nanoseconds since the Unix epoch.
    #[must_use]
    pub const fn signed_at_nanos(&self) -> i64 {
        self.signed_at
    }
}

/// Builder for [`Signer`].
///
/// # Example
///
/// ```
/// use signet::{MacAlgorithm, SecretKey, Signer};
/// use signet::codec::MessagePack;
///
/// let key = SecretKey::new(b"k".to_vec()).unwrap();
/// let signer = Signer::builder(key)
///     .algorithm(MacAlgorithm::HmacSha1)
///     .format(MessagePack)
///     .build()
///     .unwrap();
/// assert_eq!(signer.algorithm(), MacAlgorithm::HmacSha1);
/// ```
#[derive(Debug)]
pub struct SignerBuilder<F = Json, C = SystemClock> {
    key: SecretKey,
    algorithm: MacAlgorithm,
    format: F,
    clock: Arc<C>,
}

impl SignerBuilder {
    /// Starts a builder with HMAC-SHA256, JSON and the system clock.
    #[must_use]
    pub fn new(key: SecretKey) -> Self {
        Self {
            key,
            algorithm: MacAlgorithm::default(),
            format: Json,
            clock: Arc::new(SystemClock),
        }
    }
}

impl<F: Format, C: Clock> SignerBuilder<F, C> {
    /// Sets the MAC algorithm.
    #[must_use]
    pub fn algorithm(mut self, algorithm: MacAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the payload format.
    #[must_use]
    pub fn format<G: Format>(self, format: G) -> SignerBuilder<G, C> {
        SignerBuilder {
            key: self.key,
            algorithm: self.algorithm,
            format,
            clock: self.clock,
        }
    }

    /// Sets the clock.
    #[must_use]
    pub fn clock<D: Clock>(self, clock: Arc<D>) -> SignerBuilder<F, D> {
        SignerBuilder {
            key: self.key,
            algorithm: self.algorithm,
            format: self.format,
            clock,
        }
    }

    /// Builds the signer.
    ///
    /// Fails with [`Error::SeparatorInAlphabet`] if the field encoding could
    /// ever produce the token separator.
    pub fn build(self) -> Result<Signer<F, C>> {
        check_separator_free()?;
        debug!(
            algorithm = %self.algorithm,
            format = self.format.name(),
            key_len = self.key.len(),
            "signer constructed"
        );
        Ok(Signer {
            key: self.key,
            algorithm: self.algorithm,
            codec: Codec::new(self.format),
            clock: self.clock,
        })
    }
}
