//! Descriptor subsystem - Detection of compatibility-sensitive IDL
//! annotations inside individual diff lines.

mod registry;
mod types;

pub use registry::DescriptorRegistry;
pub use types::Descriptor;
