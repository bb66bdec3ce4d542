//! Binary-to-text encoding for token fields.
//!
//! All three token fields use the RFC 4648 §5 URL-safe alphabet without
//! padding. The alphabet never contains [`SEPARATOR`], which is what makes
//! the three-field split unambiguous.

use crate::error::{CodecError, Error, Result};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Character separating the payload, timestamp and signature fields.
pub const SEPARATOR: char = ':';

/// The RFC 4648 §5 alphabet produced by [`encode_field`].
pub const FIELD_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Encodes raw bytes as an unpadded URL-safe base64 field.
#[must_use]
pub fn encode_field(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decodes an unpadded URL-safe base64 field.
///
/// Padded input and characters outside [`FIELD_ALPHABET`] are rejected.
pub fn decode_field(field: &str) -> std::result::Result<Vec<u8>, CodecError> {
    Ok(URL_SAFE_NO_PAD.decode(field)?)
}

/// Returns `true` if `c` can appear in an encoded field.
#[must_use]
pub fn is_field_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Checks that the field alphabet cannot produce the separator.
///
/// Signers call this at construction so a bad alphabet/separator pairing
/// fails up front instead of producing tokens that split ambiguously.
pub fn check_separator_free() -> Result<()> {
    if FIELD_ALPHABET.contains(SEPARATOR) || is_field_char(SEPARATOR) {
        return Err(Error::SeparatorInAlphabet(SEPARATOR));
    }
    Ok(())
}
