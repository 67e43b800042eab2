//! Debug narration sink.
//!
//! The scanner and the descriptor registry can narrate what they see on
//! each line (descriptor fragments, stack pushes and pops, nesting
//! anomalies). Callers that want that narration supply a `DebugSink`;
//! callers that do not simply leave it out. Presence or absence of a sink
//! never changes scan results or match answers.

/// A capability that accepts single-string debug messages.
pub trait DebugSink {
    fn debug(&self, message: &str);
}

/// A `DebugSink` that forwards every message to `tracing::debug!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DebugSink for TracingSink {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "idlcheck_core", "{message}");
    }
}

/// Emit to an optional sink without the caller spelling out the match.
pub(crate) fn narrate(sink: Option<&dyn DebugSink>, message: &str) {
    if let Some(sink) = sink {
        sink.debug(message);
    }
}
