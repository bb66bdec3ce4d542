use crate::common::{self, manual_signer};
use signet::encoding::encode_field;
use signet::{Error, Signer};
use std::time::Duration;

fn assert_bad(signer: &Signer<signet::Json, signet::ManualClock>, token: &str, max_age: Duration) {
    match signer.verify::<serde_json::Value>(token, max_age) {
        Err(Error::BadSignature) => {}
        other => panic!("{token:?}: expected BadSignature, got {other:?}"),
    }
}

#[test]
fn separator_counts_other_than_two_rejected() {
    common::init_test_logging();
    let (signer, _) = manual_signer("foo");
    let valid = signer.sign("x").unwrap().into_string();

    for token in [
        String::new(),
        "not a valid token".to_string(),
        "one:sep".to_string(),
        "a:b:c:d".to_string(),
        format!("{valid}:"),
        format!(":{valid}"),
        valid.replacen(':', "", 1),
    ] {
        assert_bad(&signer, &token, Duration::ZERO);
        assert_bad(&signer, &token, Duration::from_secs(1));
    }
}

#[test]
fn empty_fields_rejected() {
    let (signer, _) = manual_signer("foo");
    assert_bad(&signer, "::", Duration::ZERO);
    assert_bad(&signer, "::AAAA", Duration::ZERO);
}

#[test]
fn truncated_signature_rejected() {
    let (signer, _) = manual_signer("foo");
    let mut token = signer.sign("x").unwrap().into_string();
    token.pop();
    assert_bad(&signer, &token, Duration::ZERO);
}

#[test]
fn extended_signature_rejected() {
    let (signer, _) = manual_signer("foo");
    let mut token = signer.sign("x").unwrap().into_string();
    token.push('A');
    assert_bad(&signer, &token, Duration::ZERO);
}

#[test]
fn non_ascii_input_rejected() {
    let (signer, _) = manual_signer("foo");
    assert_bad(&signer, "ä:ö:ü", Duration::ZERO);
    assert_bad(&signer, "\u{0}:\u{0}:\u{0}", Duration::from_secs(1));
}

#[test]
fn authenticated_but_undecodable_payload_is_decoding_error() {
    let (signer, _) = manual_signer("foo");
    // Valid MAC over a payload field that is not base64 at all.
    let message = format!("***:{}", encode_field(b"1"));
    let token = format!("{message}:{}", signer.signature(&message));
    let err = signer.verify::<String>(&token, Duration::ZERO).unwrap_err();
    assert!(err.is_decoding(), "{err}");
}

#[test]
fn authenticated_but_non_numeric_timestamp_is_bad_signature_when_checked() {
    let (signer, _) = manual_signer("foo");
    let payload = encode_field(b"\"p\"");
    let message = format!("{payload}:{}", encode_field(b"yesterday"));
    let token = format!("{message}:{}", signer.signature(&message));

    assert_bad(&signer, &token, Duration::from_secs(1));
    let value: String = signer.verify(&token, Duration::ZERO).unwrap();
    assert_eq!(value, "p");
}
