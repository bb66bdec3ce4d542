//! Optional tracing integration.
//!
//! With the `tracing-integration` feature the macros here are the `tracing`
//! crate's own. Without it they expand to nothing, so call sites pay no cost
//! and need no `cfg` of their own.

#[cfg(feature = "tracing-integration")]
pub use tracing::{debug, trace};

#[cfg(not(feature = "tracing-integration"))]
mod noop {
    #[doc(hidden)]
    #[macro_export]
    macro_rules! __signet_tracing_noop {
        ($($arg:tt)*) => {};
    }
}

#[cfg(not(feature = "tracing-integration"))]
pub use crate::__signet_tracing_noop as debug;
#[cfg(not(feature = "tracing-integration"))]
pub use crate::__signet_tracing_noop as trace;
