//! Payload codec: structured serialization followed by field encoding.
//!
//! [`Codec`] maps any serde value to a separator-free text field and back.
//! The serialization step is delegated to a pluggable [`Format`].

pub mod format;

pub use format::{Format, Json, MessagePack, PayloadFormat};

use crate::encoding::{decode_field, encode_field};
use crate::error::CodecError;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Reversible mapping between values and payload fields.
///
/// # Example
///
/// ```
/// use signet::codec::{Codec, Json};
///
/// let codec = Codec::new(Json);
/// let field = codec.encode("foo string").unwrap();
/// assert!(!field.contains(':'));
/// let back: String = codec.decode(&field).unwrap();
/// assert_eq!(back, "foo string");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Codec<F = Json> {
    format: F,
}

impl<F: Format> Codec<F> {
    /// Creates a codec over the given format.
    #[must_use]
    pub const fn new(format: F) -> Self {
        Self { format }
    }

    /// Returns the underlying format.
    #[must_use]
    pub const fn format(&self) -> &F {
        &self.format
    }

    /// Serializes `value` and encodes the bytes as a field.
    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, CodecError> {
        let bytes = self.format.serialize(value)?;
        Ok(encode_field(&bytes))
    }

    /// Decodes a field and deserializes it into `T`.
    pub fn decode<T: DeserializeOwned>(&self, field: &str) -> Result<T, CodecError> {
        let bytes = decode_field(field)?;
        self.format.deserialize(&bytes)
    }
}
