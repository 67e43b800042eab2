//! Block range scanner - Single-pass discovery of special-block ranges,
//! cached per file path.
//!
//! All configured kinds share one nesting stack, so a comment enclosing
//! an embedded-native block (or the reverse) resolves correctly even when
//! the two kinds open and close in interleaved order.

use std::fs::File;
use std::io::{BufRead, BufReader};

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::debug::{narrate, DebugSink};
use crate::errors::ScanError;

use super::types::{BlockKind, BlockRange};

/// Per-path cache of discovered ranges.
///
/// Populated at most once per path per run and never invalidated: callers
/// guarantee scanned files do not change mid-run. Keys are the exact path
/// strings callers pass; two spellings of one file are two entries.
#[derive(Debug, Default, Clone)]
pub struct ScanCache {
    ranges: FxHashMap<String, Vec<BlockRange>>,
}

impl ScanCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.ranges.contains_key(path)
    }

    pub fn get(&self, path: &str) -> Option<&[BlockRange]> {
        self.ranges.get(path).map(Vec::as_slice)
    }

    fn insert(&mut self, path: &str, ranges: Vec<BlockRange>) {
        self.ranges.insert(path.to_string(), ranges);
    }

    /// Drop every cached entry, forcing subsequent scans to re-read.
    pub fn clear(&mut self) {
        self.ranges.clear();
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

/// An open block on the nesting stack: which kind it belongs to (index
/// into the scanner's kind list) and the line its start token was seen on.
#[derive(Debug, Clone, Copy)]
struct OpenBlock {
    kind: usize,
    start_line: u32,
}

/// Line-by-line scanner for special-block ranges.
pub struct BlockRangeScanner {
    kinds: Vec<BlockKind>,
    sink: Option<Box<dyn DebugSink>>,
}

impl BlockRangeScanner {
    /// A scanner for the two built-in categories, block comments checked
    /// first.
    pub fn new() -> Self {
        Self::with_kinds(vec![BlockKind::block_comment(), BlockKind::embedded_native()])
    }

    /// A scanner for a custom kind list; kinds are checked per line in
    /// the order given.
    pub fn with_kinds(kinds: Vec<BlockKind>) -> Self {
        Self { kinds, sink: None }
    }

    /// Attach a debug sink to narrate stack activity and anomalies.
    pub fn with_sink(mut self, sink: Box<dyn DebugSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn kinds(&self) -> &[BlockKind] {
        &self.kinds
    }

    /// Scan a file for special-block ranges, reading it at most once.
    ///
    /// The first call for a path runs the scan and stores the result in
    /// `cache`; later calls for the same path return the stored slice
    /// without touching the filesystem. A file that cannot be opened or
    /// read fails with [`ScanError::FileAccess`] and leaves no cache
    /// entry behind.
    pub fn scan_file<'c>(
        &self,
        cache: &'c mut ScanCache,
        path: &str,
    ) -> Result<&'c [BlockRange], ScanError> {
        if !cache.contains(path) {
            let ranges = self.scan_uncached(path)?;
            tracing::debug!(path, ranges = ranges.len(), "scan complete");
            cache.insert(path, ranges);
        }
        Ok(cache.get(path).unwrap_or(&[]))
    }

    fn scan_uncached(&self, path: &str) -> Result<Vec<BlockRange>, ScanError> {
        let sink = self.sink.as_deref();
        narrate(sink, &format!("Scanning {path} for special blocks"));

        let file = File::open(path).map_err(|source| ScanError::FileAccess {
            path: path.to_string(),
            source,
        })?;
        let reader = BufReader::new(file);

        let mut ranges = Vec::new();
        let mut stack: SmallVec<[OpenBlock; 8]> = SmallVec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| ScanError::FileAccess {
                path: path.to_string(),
                source,
            })?;
            let line_no = (index + 1) as u32;

            for (kind_index, kind) in self.kinds.iter().enumerate() {
                // A block that starts and ends on one line carries no
                // cross-line nesting information: inert for this kind.
                if kind.contains_whole(&line) {
                    narrate(
                        sink,
                        &format!("({path}, Line {line_no}): {kind} starts and ends on this line."),
                    );
                    continue;
                }

                if kind.is_start(&line) {
                    narrate(sink, &format!("Pushing to stack: {kind}, line: {line_no}"));
                    stack.push(OpenBlock {
                        kind: kind_index,
                        start_line: line_no,
                    });
                }

                if kind.is_end(&line) {
                    let Some(open) = stack.pop() else {
                        // End token with nothing open: the start is outside
                        // the scanned window or the input is malformed.
                        narrate(
                            sink,
                            &format!("({path}, Line {line_no}): end token with an empty stack, skipping."),
                        );
                        tracing::warn!(path, line = line_no, "block end token with no open block");
                        continue;
                    };
                    narrate(
                        sink,
                        &format!(
                            "Popped from stack. Last seen: {}, line: {}",
                            self.kinds[open.kind], open.start_line
                        ),
                    );
                    if open.kind == kind_index {
                        ranges.push(BlockRange::new(open.start_line, line_no, path));
                    } else {
                        // Delimiters of different kinds closed out of
                        // order; restore the entry and resynchronize.
                        narrate(
                            sink,
                            &format!(
                                "Pushing to stack: {}, line: {}",
                                self.kinds[open.kind], open.start_line
                            ),
                        );
                        tracing::warn!(path, line = line_no, "mismatched block kinds closed out of order");
                        stack.push(open);
                    }
                }
            }
        }

        // Whatever is still open at end of file never terminated; those
        // blocks produce no ranges.
        if !stack.is_empty() {
            tracing::warn!(path, open_blocks = stack.len(), "unterminated blocks dropped at end of file");
        }

        Ok(ranges)
    }
}

impl Default for BlockRangeScanner {
    fn default() -> Self {
        Self::new()
    }
}
