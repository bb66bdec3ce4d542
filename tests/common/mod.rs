//! Shared fixtures for signer integration tests.

#![allow(dead_code)]

use signet::{Json, ManualClock, SecretKey, Signer};
use std::sync::Arc;

/// 2023-11-14T22:13:20Z in nanoseconds.
pub const T0: i64 = 1_700_000_000_000_000_000;

pub fn init_test_logging() {
    signet::test_utils::init_test_logging();
}

pub fn key(s: &str) -> SecretKey {
    SecretKey::try_from(s).expect("non-empty test key")
}

/// A JSON signer whose clock starts at [`T0`] and only moves when told to.
pub fn manual_signer(secret: &str) -> (Signer<Json, ManualClock>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::starting_at(T0));
    let signer = Signer::builder(key(secret))
        .clock(Arc::clone(&clock))
        .build()
        .expect("signer builds");
    (signer, clock)
}

/// Returns `token` with the character at `index` replaced by a different
/// field-alphabet character.
pub fn substitute_char(token: &str, index: usize) -> String {
    token
        .char_indices()
        .map(|(i, c)| {
            if i == index {
                if c == 'A' { 'B' } else { 'A' }
            } else {
                c
            }
        })
        .collect()
}
