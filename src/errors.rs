//! Error handling for idlcheck-core.
//! One error enum for the crate, `thiserror` only, zero `anyhow`.

use std::io;

/// Errors that can fail a scan call or a block-kind construction.
///
/// Nesting anomalies found during a scan (stack underflow, mismatched
/// delimiter kinds, unterminated blocks) are diagnostics, not errors:
/// they are narrated to the debug sink and the scan continues.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The target file does not exist or could not be opened/read.
    /// Fatal to the scan call; no partial cache entry is retained.
    #[error("failed to read {path}: {source}")]
    FileAccess {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A custom block-kind delimiter pattern failed to compile.
    #[error("invalid block pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
