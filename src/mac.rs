//! Keyed MAC computation and constant-time comparison.
//!
//! The algorithm is fixed per signer. Tokens carry no algorithm identifier,
//! so a token produced under one algorithm simply fails verification under
//! the other.

use crate::key::SecretKey;
use core::fmt;
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;
type HmacSha1 = Hmac<Sha1>;

/// MAC algorithm used to sign tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MacAlgorithm {
    /// HMAC-SHA256, 32-byte tags.
    #[default]
    HmacSha256,
    /// HMAC-SHA1, 20-byte tags.
    HmacSha1,
}

impl MacAlgorithm {
    /// Length in bytes of the raw tag.
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            Self::HmacSha256 => 32,
            Self::HmacSha1 => 20,
        }
    }

    /// Length in characters of the encoded signature field.
    #[must_use]
    pub const fn encoded_len(self) -> usize {
        // Unpadded base64: 4 chars per 3 bytes, rounded up.
        (self.output_len() * 4).div_ceil(3)
    }

    /// Stable name, matching the serde representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HmacSha256 => "hmac-sha256",
            Self::HmacSha1 => "hmac-sha1",
        }
    }

    /// Computes the raw tag of `message` under `key`.
    #[must_use]
    pub fn compute(self, key: &SecretKey, message: &[u8]) -> Vec<u8> {
        match self {
            Self::HmacSha256 => hmac_tag::<HmacSha256>(key.as_bytes(), message),
            Self::HmacSha1 => hmac_tag::<HmacSha1>(key.as_bytes(), message),
        }
    }
}

fn hmac_tag<M: KeyInit + Mac>(key: &[u8], message: &[u8]) -> Vec<u8> {
    let mut mac = <M as KeyInit>::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(message);
    mac.finalize().into_bytes().to_vec()
}

impl fmt::Display for MacAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compares two byte strings without an early exit on the first mismatch.
///
/// Lengths are compared first and may short-circuit; length is not secret.
#[must_use]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
