use crate::common::{self, T0, manual_signer};
use signet::Error;
use signet::time::Clock;
use std::time::Duration;

#[test]
fn boundary_one_nanosecond_either_side() {
    common::init_test_logging();
    let (signer, clock) = manual_signer("foo");
    let token = signer.sign("payload").unwrap();
    let delta = Duration::from_secs(30);
    clock.advance(delta);

    let under = signer.verify::<String>(token.as_str(), delta - Duration::from_nanos(1));
    assert!(matches!(under, Err(Error::SignatureExpired { .. })));

    let over = signer.verify::<String>(token.as_str(), delta + Duration::from_nanos(1));
    assert_eq!(over.unwrap(), "payload");
}

#[test]
fn elapsed_equal_to_max_age_is_accepted() {
    let (signer, clock) = manual_signer("foo");
    let token = signer.sign("payload").unwrap();
    clock.advance(Duration::from_millis(250));
    let value: String = signer
        .verify(token.as_str(), Duration::from_millis(250))
        .unwrap();
    assert_eq!(value, "payload");
}

#[test]
fn zero_max_age_never_expires() {
    let (signer, clock) = manual_signer("foo");
    let token = signer.sign("payload").unwrap();
    clock.set(i64::MAX);
    assert_eq!(clock.now_nanos(), i64::MAX);
    let value: String = signer.verify(token.as_str(), Duration::ZERO).unwrap();
    assert_eq!(value, "payload");
}

#[test]
fn expired_error_reports_age() {
    let (signer, clock) = manual_signer("foo");
    let token = signer.sign("payload").unwrap();
    clock.advance(Duration::from_secs(90));
    match signer.verify::<String>(token.as_str(), Duration::from_secs(60)) {
        Err(Error::SignatureExpired { age, max_age }) => {
            assert_eq!(age, Duration::from_secs(90));
            assert_eq!(max_age, Duration::from_secs(60));
        }
        other => panic!("expected SignatureExpired, got {other:?}"),
    }
}

#[test]
fn clock_is_read_per_call() {
    let (signer, clock) = manual_signer("foo");
    let token = signer.sign("payload").unwrap();
    let max_age = Duration::from_secs(10);

    assert!(signer.verify::<String>(token.as_str(), max_age).is_ok());
    clock.advance(Duration::from_secs(11));
    assert!(
        signer
            .verify::<String>(token.as_str(), max_age)
            .unwrap_err()
            .is_expired()
    );
}

#[test]
fn verify_timed_returns_signing_instant() {
    let (signer, clock) = manual_signer("foo");
    let token = signer.sign(&[1u32, 2, 3]).unwrap();
    clock.advance(Duration::from_secs(1));
    let second = signer.sign(&[4u32]).unwrap();

    let first = signer
        .verify_timed::<Vec<u32>>(token.as_str(), Duration::ZERO)
        .unwrap();
    let later = signer
        .verify_timed::<Vec<u32>>(second.as_str(), Duration::ZERO)
        .unwrap();
    assert_eq!(first.signed_at_nanos(), T0);
    assert_eq!(later.signed_at_nanos(), T0 + 1_000_000_000);
    assert_eq!(first.into_value(), vec![1, 2, 3]);
}

#[test]
fn verify_timed_enforces_max_age() {
    let (signer, clock) = manual_signer("foo");
    let token = signer.sign("x").unwrap();
    clock.advance(Duration::from_secs(2));
    let err = signer
        .verify_timed::<String>(token.as_str(), Duration::from_secs(1))
        .unwrap_err();
    assert!(err.is_expired());
}
