use std::ptr;

use crate::{
    report::{CrashCode, CrashReport, FailureDetail, ThrowableRecord},
    Failure, MAX_CAUSE_CHAIN_SIZE, MAX_STACK_TRACE_SIZE,
};

/// Captures a failure and its cause chain into a bounded [`FailureDetail`].
///
/// Walks the [`cause`](Failure::cause) links starting at `failure`,
/// recording at most [`MAX_CAUSE_CHAIN_SIZE`] causes with at most
/// [`MAX_STACK_TRACE_SIZE`] stack frame strings each. The walk stops when a
/// cause is absent, when it re-enters an already-recorded instance (cycles
/// are detected by instance identity, never by value equality), or when the
/// chain limit is reached. Truncation at either level leaves no marker in
/// the returned data.
///
/// Pure and total: every call builds fresh output and always succeeds.
pub fn capture(failure: &dyn Failure) -> FailureDetail {
    let mut visited: Vec<*const dyn Failure> = Vec::with_capacity(MAX_CAUSE_CHAIN_SIZE);
    let mut causes = Vec::with_capacity(MAX_CAUSE_CHAIN_SIZE);

    let mut current = failure;

    loop {
        visited.push(ptr::from_ref(current));
        causes.push(record(current));

        let Some(next) = current.cause() else { break };

        // A cause stored inline as its parent's first field shares the
        // parent's address, so identity is the full pointer (address and
        // metadata), not the address alone.
        if visited.iter().any(|&seen| ptr::eq(seen, next)) {
            tracing::debug!("cause chain cycles back on itself; truncating report");
            break;
        }

        if causes.len() >= MAX_CAUSE_CHAIN_SIZE {
            tracing::debug!(
                limit = MAX_CAUSE_CHAIN_SIZE,
                "cause chain exceeds limit; truncating report"
            );
            break;
        }

        current = next;
    }

    let summary_message = format!("Crashed: {}", join_messages(&causes));

    FailureDetail {
        summary_message,
        crash: CrashReport {
            code: CrashCode::Unknown,
            causes,
        },
    }
}

fn record(failure: &dyn Failure) -> ThrowableRecord {
    let stack_trace = failure
        .stack_frames()
        .into_iter()
        .take(MAX_STACK_TRACE_SIZE)
        .collect();

    ThrowableRecord {
        message: failure.message().unwrap_or_default(),
        type_name: failure.type_name(),
        stack_trace,
    }
}

fn join_messages(causes: &[ThrowableRecord]) -> String {
    causes
        .iter()
        .map(|cause| cause.message.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
