//! Timestamp field encoding.
//!
//! The field is the ASCII decimal nanosecond count, base64-encoded with the
//! same alphabet as the other token fields.

use crate::encoding::{decode_field, encode_field};
use std::time::Duration;

/// Encodes a nanosecond timestamp as a token field.
#[must_use]
pub fn encode_timestamp(nanos: i64) -> String {
    encode_field(nanos.to_string().as_bytes())
}

/// Decodes a timestamp field.
///
/// Returns `None` for invalid base64, non-UTF-8 bytes, or text that is not
/// a signed 64-bit decimal integer.
#[must_use]
pub fn decode_timestamp(field: &str) -> Option<i64> {
    let bytes = decode_field(field).ok()?;
    let text = std::str::from_utf8(&bytes).ok()?;
    text.parse().ok()
}

/// Time elapsed from `then` to `now`, or `None` if `then` is in the future.
#[must_use]
pub fn elapsed_since(now: i64, then: i64) -> Option<Duration> {
    let delta = i128::from(now) - i128::from(then);
    if delta < 0 {
        return None;
    }
    // |i64::MAX - i64::MIN| fits in u64.
    Some(Duration::from_nanos(u64::try_from(delta).unwrap_or(u64::MAX)))
}
