//! Block subsystem - Special-block range discovery.
//!
//! A special block is a delimited region of IDL source that must be
//! interpreted differently than ordinary code: a `/* ... */` block
//! comment or a `%{C++ ... %}` embedded-native section. The scanner maps
//! each file to the inclusive line ranges those blocks occupy.

mod scanner;
mod types;

pub use scanner::{BlockRangeScanner, ScanCache};
pub use types::{BlockKind, BlockRange};
