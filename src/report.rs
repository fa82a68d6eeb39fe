use std::fmt;

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Report category code.
///
/// Capture always emits [`CrashCode::Unknown`]; finer categorization is
/// owned by the surrounding reporting pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum CrashCode {
    /// Unclassified crash.
    #[display("UNKNOWN")]
    Unknown,
}

/// Bounded record of a single failure in a cause chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThrowableRecord {
    /// Failure message; empty if the failure carried none.
    pub message: String,

    /// Fully-qualified runtime type name of the failure value.
    pub type_name: String,

    /// Frame strings, outermost first, at most
    /// [`MAX_STACK_TRACE_SIZE`](crate::MAX_STACK_TRACE_SIZE) of them.
    pub stack_trace: Vec<String>,
}

/// Bounded summary of a cause chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrashReport {
    /// Report category code.
    pub code: CrashCode,

    /// Captured causes, root failure first, each subsequent entry the direct
    /// cause of the previous one, at most
    /// [`MAX_CAUSE_CHAIN_SIZE`](crate::MAX_CAUSE_CHAIN_SIZE) of them.
    pub causes: Vec<ThrowableRecord>,
}

/// Structured failure report plus its one-line summary.
///
/// Returned by value from [`capture`](crate::capture()); plain data with no
/// ties back to the captured failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureDetail {
    /// `"Crashed: "` followed by every cause message, `", "`-joined, in
    /// chain order. Absent messages participate as empty segments.
    pub summary_message: String,

    /// The bounded crash report.
    pub crash: CrashReport,
}

impl fmt::Display for FailureDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary_message)
    }
}
