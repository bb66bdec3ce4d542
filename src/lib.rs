//! Signet: tamper-evident, time-limited signed tokens.
//!
//! # Overview
//!
//! A token binds a serialized payload to the time it was signed with a keyed
//! MAC. Anyone holding the same key can later confirm that the payload was
//! produced by a key holder and is no older than a chosen maximum age. This
//! is the signed-cookie / signed-session primitive that avoids server-side
//! session storage.
//!
//! Tokens provide authentication only. The payload is readable by anyone
//! who can decode base64.
//!
//! # Wire format
//!
//! ```text
//! <payload_b64> ":" <timestamp_b64> ":" <signature_b64>
//! ```
//!
//! Every field is unpadded URL-safe base64. The timestamp decodes to the
//! decimal nanosecond count since the Unix epoch; the signature decodes to
//! the raw MAC over `payload_b64 ":" timestamp_b64`.
//!
//! # Module Structure
//!
//! - [`signer`]: [`Signer`], the sign / verify entry point
//! - [`codec`]: payload serialization formats and the payload codec
//! - [`token`]: token type and three-field parsing
//! - [`mac`]: MAC algorithms and constant-time comparison
//! - [`key`]: secret key material
//! - [`time`]: clocks and the timestamp field
//! - [`encoding`]: field encoding and the separator
//! - [`config`]: runtime configuration
//! - [`error`](mod@error): error types
//! - [`tracing_compat`]: optional tracing integration (requires `tracing-integration` feature)
//!
//! # Example
//!
//! ```
//! use signet::{Error, Signer};
//! use std::time::Duration;
//!
//! let signer = Signer::new(b"foo".to_vec())?;
//! let token = signer.sign("foo string")?;
//!
//! let value: String = signer.verify(token.as_str(), Duration::ZERO)?;
//! assert_eq!(value, "foo string");
//!
//! let err = signer.verify::<String>("bad signature", Duration::ZERO).unwrap_err();
//! assert!(matches!(err, Error::BadSignature));
//! # Ok::<(), Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

pub mod codec;
pub mod config;
pub mod encoding;
pub mod error;
pub mod key;
pub mod mac;
pub mod signer;
pub mod time;
pub mod token;
pub mod tracing_compat;

#[cfg(any(test, feature = "test-internals"))]
pub mod test_utils;

pub use codec::{Codec, Format, Json, MessagePack, PayloadFormat};
pub use config::SignerConfig;
pub use error::{CodecError, Error, Result};
pub use key::SecretKey;
pub use mac::MacAlgorithm;
pub use signer::{Signer, SignerBuilder, Verified};
pub use time::{Clock, ManualClock, SystemClock};
pub use token::{Token, TokenParts};
