//! Time sources and the token timestamp field.
//!
//! Tokens record signing time as nanoseconds since the Unix epoch. The
//! [`Clock`] trait lets production code read the wall clock while tests pin
//! time with a [`ManualClock`].

pub mod clock;
pub mod stamp;

pub use clock::{Clock, ManualClock, SystemClock};
pub use stamp::{decode_timestamp, elapsed_since, encode_timestamp};
