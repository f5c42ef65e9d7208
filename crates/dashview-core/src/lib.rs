#![forbid(unsafe_code)]

//! Core: deterministic time, task scheduling, input coalescing, and one-shot
//! visibility observation for the dashview page runtime.
//!
//! Nothing in this crate touches a real DOM or clock. The host advances time
//! and runs animation frames explicitly, which keeps every behavior
//! reproducible in native tests and usable from `wasm32-unknown-unknown`.

pub mod animation;
pub mod debounce;
pub mod frame_coalescer;
pub mod logging;
pub mod scheduler;
pub mod visibility;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
