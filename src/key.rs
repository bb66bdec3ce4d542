//! Secret key material for token signing.
//!
//! A [`SecretKey`] is owned by exactly one signer. Its bytes never appear in
//! `Debug` or `Display` output and are zeroed when the key is dropped.

use crate::error::{Error, Result};
use core::fmt;
use zeroize::{ZeroizeOnDrop, Zeroizing};

/// Default length of keys produced by [`SecretKey::generate`].
pub const DEFAULT_KEY_LEN: usize = 32;

/// A shared secret used to compute token MACs.
///
/// Any non-empty byte sequence is accepted. HMAC handles keys of every
/// length, but keys shorter than the MAC output add little security.
///
/// # Example
///
/// ```
/// use signet::SecretKey;
///
/// let key = SecretKey::new(b"my secret key".to_vec()).unwrap();
/// assert_eq!(key.len(), 13);
///
/// assert!(SecretKey::new(Vec::new()).is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey {
    bytes: Zeroizing<Vec<u8>>,
}

impl SecretKey {
    /// Wraps caller-supplied key material.
    ///
    /// Fails with [`Error::InvalidKey`] if `bytes` is empty.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = Zeroizing::new(bytes.into());
        if bytes.is_empty() {
            return Err(Error::InvalidKey);
        }
        Ok(Self { bytes })
    }

    /// Generates `len` bytes of key material from the OS entropy source.
    pub fn generate(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(Error::InvalidKey);
        }
        let mut bytes = Zeroizing::new(vec![0u8; len]);
        getrandom::fill(bytes.as_mut_slice()).map_err(|e| Error::Entropy(e.to_string()))?;
        Ok(Self { bytes })
    }

    /// Returns the key material.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the key length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`; empty keys cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl TryFrom<&[u8]> for SecretKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::new(bytes.to_vec())
    }
}

impl TryFrom<&str> for SecretKey {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::new(s.as_bytes().to_vec())
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey(<{} bytes redacted>)", self.bytes.len())
    }
}

impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(...)")
    }
}

// Copies made before the Vec was handed over are not reachable from here.
impl ZeroizeOnDrop for SecretKey {}
