//! idlcheck-core: Core analysis engine for IDL patch inspection
//!
//! This crate provides the structural-analysis components for idlcheck:
//! - Blocks: Single-pass scanning of special-block ranges (block
//!   comments, embedded-native sections) with a per-path cache
//! - Descriptors: Detection of compatibility-sensitive annotations in
//!   individual diff lines
//!
//! The two subsystems are independent: the surrounding tool hands file
//! paths to the block scanner and diff lines to the descriptor registry.
//! Everything is synchronous and single-threaded; the cache and the
//! registry are plain owned values the embedding tool constructs itself.

pub mod blocks;
pub mod debug;
pub mod descriptors;
pub mod errors;

// Re-exports for convenience
pub use blocks::{BlockKind, BlockRange, BlockRangeScanner, ScanCache};
pub use debug::{DebugSink, TracingSink};
pub use descriptors::{Descriptor, DescriptorRegistry};
pub use errors::ScanError;
