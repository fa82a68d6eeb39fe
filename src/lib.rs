//! Bounded, serializable crash reports from failure cause chains.
//!
//! Fatal-error reporting pipelines want a compact, structured summary of an
//! error and the chain of causes behind it, safe to serialize and ship as
//! telemetry. This crate walks a failure's "caused by" links and produces a
//! [`FailureDetail`]: a one-line summary message plus a [`CrashReport`]
//! holding at most [`MAX_CAUSE_CHAIN_SIZE`] causes, each with at most
//! [`MAX_STACK_TRACE_SIZE`] stack frame strings.
//!
//! The walk is total over its input: excess causes and frames are silently
//! dropped, and re-entering an already-recorded failure instance (by
//! address, not by value equality) stops the walk, so even cyclic chains
//! terminate.
//!
//! Error types adapt to the capture via the [`Failure`] trait; leaf types
//! only need to provide a message and a type name.
//!
//! ```
//! use crash_report::{capture, Failure};
//!
//! struct Corrupted;
//!
//! impl Failure for Corrupted {
//!     fn message(&self) -> Option<String> {
//!         Some("cache file corrupted".to_owned())
//!     }
//!
//!     fn type_name(&self) -> String {
//!         "cache::Corrupted".to_owned()
//!     }
//! }
//!
//! let detail = capture(&Corrupted);
//!
//! assert_eq!(detail.summary_message, "Crashed: cache file corrupted");
//! assert_eq!(detail.crash.causes.len(), 1);
//! assert_eq!(detail.crash.causes[0].type_name, "cache::Corrupted");
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms, nonstandard_style)]
#![warn(future_incompatible, missing_docs)]

mod capture;
mod failure;
mod report;

pub use self::{
    capture::capture,
    failure::Failure,
    report::{CrashCode, CrashReport, FailureDetail, ThrowableRecord},
};

/// At most this many [`ThrowableRecord`]s appear in a [`CrashReport`].
///
/// Part of the output contract; changing it changes observable output.
pub const MAX_CAUSE_CHAIN_SIZE: usize = 5;

/// At most this many stack frame strings appear in a [`ThrowableRecord`].
///
/// Part of the output contract; changing it changes observable output.
pub const MAX_STACK_TRACE_SIZE: usize = 1000;
