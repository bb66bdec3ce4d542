//! Test logging helpers.
//!
//! Available to unit tests and, through the `test-internals` feature, to
//! integration tests. Not part of the stable API.

use std::sync::Once;

static INIT_LOGGING: Once = Once::new();

/// Installs a test-writer `tracing` subscriber once per process.
pub fn init_test_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(false)
            .try_init();
    });
}

#[doc(hidden)]
pub fn log_phase(name: &str) {
    tracing::info!(test = name, "test phase start");
}

#[doc(hidden)]
pub fn log_complete(name: &str) {
    tracing::info!(test = name, "test complete");
}

#[doc(hidden)]
pub fn log_assertion(message: &str, expected: &str, actual: &str, passed: bool) {
    if passed {
        tracing::debug!(message, expected, actual, "assertion passed");
    } else {
        tracing::error!(message, expected, actual, "assertion failed");
    }
}

/// Logs the start of a named test.
#[macro_export]
macro_rules! test_phase {
    ($name:expr) => {
        $crate::test_utils::log_phase($name)
    };
}

/// Logs the end of a named test.
#[macro_export]
macro_rules! test_complete {
    ($name:expr) => {
        $crate::test_utils::log_complete($name)
    };
}

/// Asserts `cond`, logging the expected and actual values either way.
#[macro_export]
macro_rules! assert_with_log {
    ($cond:expr, $msg:expr, $expected:expr, $actual:expr) => {{
        let passed: bool = $cond;
        let expected = format!("{:?}", $expected);
        let actual = format!("{:?}", $actual);
        $crate::test_utils::log_assertion($msg, &expected, &actual, passed);
        assert!(passed, "{}: expected {}, actual {}", $msg, expected, actual);
    }};
}
