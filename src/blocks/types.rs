//! Block types - Delimiter-pair categories and the line ranges they span.

use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::ScanError;

/// One category of special block, defined by a start and end delimiter.
///
/// The delimiters are regex fragments, not literal strings, so a category
/// can tolerate formatting variation (the embedded-native start accepts
/// both `%{C++` and `%{ C++`). Two kinds are equal iff both fragments are
/// equal; the compiled matchers are derived state.
#[derive(Debug, Clone)]
pub struct BlockKind {
    start_pattern: String,
    end_pattern: String,
    start_re: Regex,
    end_re: Regex,
    whole_re: Regex,
}

impl BlockKind {
    /// Build a kind from start/end delimiter fragments.
    pub fn new(start_pattern: &str, end_pattern: &str) -> Result<Self, ScanError> {
        Ok(Self {
            start_pattern: start_pattern.to_string(),
            end_pattern: end_pattern.to_string(),
            start_re: Regex::new(&format!(r"^\s*{start_pattern}"))?,
            // End token must be the last non-whitespace content.
            end_re: Regex::new(&format!(r"{end_pattern}\s*$"))?,
            // Start token with the end token later in the same line.
            whole_re: Regex::new(&format!(r"{start_pattern}.*{end_pattern}"))?,
        })
    }

    /// The `/* ... */` block comment category.
    pub fn block_comment() -> Self {
        Self::new(r"/\*", r"\*/").expect("built-in block pattern compiles")
    }

    /// The `%{C++ ... %}` embedded-native code category.
    pub fn embedded_native() -> Self {
        Self::new(r"%\{\s*C\+\+", r"%\}").expect("built-in block pattern compiles")
    }

    pub fn start_pattern(&self) -> &str {
        &self.start_pattern
    }

    pub fn end_pattern(&self) -> &str {
        &self.end_pattern
    }

    /// Whether the line, after leading whitespace, begins with the start
    /// delimiter.
    pub fn is_start(&self, line: &str) -> bool {
        self.start_re.is_match(line)
    }

    /// Whether the line ends with the end delimiter, allowing trailing
    /// whitespace only.
    pub fn is_end(&self, line: &str) -> bool {
        self.end_re.is_match(line)
    }

    /// Whether a complete block of this kind starts and ends within the
    /// line.
    pub fn contains_whole(&self, line: &str) -> bool {
        self.whole_re.is_match(line)
    }
}

impl PartialEq for BlockKind {
    fn eq(&self, other: &Self) -> bool {
        self.start_pattern == other.start_pattern && self.end_pattern == other.end_pattern
    }
}

impl Eq for BlockKind {}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[BlockKind ({})]", self.start_pattern)
    }
}

/// The inclusive line interval occupied by one special block instance.
///
/// Line numbers are 1-indexed and the interval is inclusive on both ends.
/// Granularity is whole lines; a block never starts or ends partway
/// through a line as far as ranges are concerned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRange {
    start_line: u32,
    end_line: u32,
    file_path: String,
}

impl BlockRange {
    pub fn new(start_line: u32, end_line: u32, file_path: impl Into<String>) -> Self {
        debug_assert!(start_line >= 1 && start_line <= end_line);
        Self {
            start_line,
            end_line,
            file_path: file_path.into(),
        }
    }

    pub fn start_line(&self) -> u32 {
        self.start_line
    }

    pub fn end_line(&self) -> u32 {
        self.end_line
    }

    /// The path of the file this range was scanned from, as the caller
    /// spelled it.
    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// Whether the given line number falls within the range.
    pub fn contains(&self, line: u32) -> bool {
        line >= self.start_line && line <= self.end_line
    }

    /// Number of lines the range spans.
    pub fn len(&self) -> usize {
        (self.end_line - self.start_line + 1) as usize
    }

    /// Always false: a range spans at least one line. Provided alongside
    /// `len` for convention.
    pub fn is_empty(&self) -> bool {
        false
    }
}
