use crate::common::{T0, key, substitute_char};
use proptest::prelude::*;
use signet::{Error, ManualClock, Signer};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

fn signer_at(secret: &[u8], now: i64) -> (Signer<signet::Json, ManualClock>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::starting_at(now));
    let signer = Signer::builder(signet::SecretKey::new(secret.to_vec()).unwrap())
        .clock(Arc::clone(&clock))
        .build()
        .unwrap();
    (signer, clock)
}

proptest! {
    #[test]
    fn roundtrip_any_string(secret in proptest::collection::vec(any::<u8>(), 1..64), payload in ".*") {
        let (signer, _) = signer_at(&secret, T0);
        let token = signer.sign(&payload).unwrap();
        prop_assert_eq!(token.as_str().matches(':').count(), 2);
        let back: String = signer.verify(token.as_str(), Duration::ZERO).unwrap();
        prop_assert_eq!(back, payload);
    }

    #[test]
    fn roundtrip_any_map(map in proptest::collection::btree_map(".{0,8}", any::<i64>(), 0..8)) {
        let (signer, _) = signer_at(b"foo", T0);
        let token = signer.sign(&map).unwrap();
        let back: BTreeMap<String, i64> = signer.verify(token.as_str(), Duration::ZERO).unwrap();
        prop_assert_eq!(back, map);
    }

    #[test]
    fn single_substitution_is_bad_signature(payload in ".{0,32}", index in any::<prop::sample::Index>()) {
        let (signer, _) = signer_at(b"foo", T0);
        let token = signer.sign(&payload).unwrap().into_string();
        let positions: Vec<usize> = token
            .char_indices()
            .filter(|(_, c)| *c != ':')
            .map(|(i, _)| i)
            .collect();
        let position = positions[index.index(positions.len())];
        let tampered = substitute_char(&token, position);
        let result = signer.verify::<String>(&tampered, Duration::from_secs(1));
        prop_assert!(matches!(result, Err(Error::BadSignature)));
    }

    #[test]
    fn different_key_is_bad_signature(a in "[a-z]{1,16}", b in "[a-z]{1,16}", payload in ".{0,16}") {
        prop_assume!(a != b);
        let (signer, _) = signer_at(a.as_bytes(), T0);
        let other = Signer::builder(key(&b)).build().unwrap();
        let token = signer.sign(&payload).unwrap();
        let result = other.verify::<String>(token.as_str(), Duration::from_secs(1));
        prop_assert!(matches!(result, Err(Error::BadSignature)));
    }

    #[test]
    fn expiry_boundary_holds(delta_ns in 2u64..10_000_000_000) {
        let (signer, clock) = signer_at(b"foo", T0);
        let token = signer.sign("x").unwrap();
        clock.advance(Duration::from_nanos(delta_ns));

        let under = signer.verify::<String>(token.as_str(), Duration::from_nanos(delta_ns - 1));
        prop_assert!(matches!(under, Err(Error::SignatureExpired { .. })), "expected SignatureExpired, got {:?}", under);
        let over = signer.verify::<String>(token.as_str(), Duration::from_nanos(delta_ns + 1));
        prop_assert!(over.is_ok());
        let never = signer.verify::<String>(token.as_str(), Duration::ZERO);
        prop_assert!(never.is_ok());
    }

    #[test]
    fn arbitrary_input_never_panics(input in ".{0,96}", max_age_ms in 0u64..10_000) {
        let (signer, _) = signer_at(b"foo", T0);
        let result = signer.verify::<serde_json::Value>(&input, Duration::from_millis(max_age_ms));
        prop_assert!(matches!(result, Err(Error::BadSignature)));
    }
}
