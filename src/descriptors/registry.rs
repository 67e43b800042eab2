//! Descriptor registry - The set of known descriptors for one run.
//!
//! The surrounding tool registers every descriptor it knows about at
//! startup, then queries individual diff lines while walking a patch.
//! The registry is a plain owned value, not process-global state, so each
//! test (or each embedding tool) builds its own.

use crate::debug::{narrate, DebugSink};

use super::types::Descriptor;

/// Descriptors from the XPIDL grammar, with whether each one alters the
/// binary calling contract when added or removed.
const XPIDL_DESCRIPTORS: &[(&str, bool)] = &[
    ("notxpcom", true),
    ("nostdcall", true),
    ("implicit_jscontext", true),
    ("optional_argc", true),
    ("noscript", false),
    ("scriptable", false),
    ("builtinclass", false),
    ("function", false),
    ("infallible", false),
];

/// The known-descriptor set, queried once per diff line.
#[derive(Debug, Default, Clone)]
pub struct DescriptorRegistry {
    descriptors: Vec<Descriptor>,
}

impl DescriptorRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-populated with the standard XPIDL descriptor set.
    pub fn with_xpidl_defaults() -> Self {
        let mut registry = Self::new();
        for &(token, affects) in XPIDL_DESCRIPTORS {
            registry.register(token, affects);
        }
        registry
    }

    /// Register a descriptor token.
    ///
    /// Uniqueness is not enforced; registering the same token twice leaves
    /// a second, functionally redundant entry in the set.
    pub fn register(&mut self, token: impl Into<String>, affects_binary_compat: bool) -> &Descriptor {
        self.descriptors.push(Descriptor::new(token, affects_binary_compat));
        self.descriptors.last().unwrap()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Whether any registered descriptor appears in the given diff line.
    pub fn line_has_any_descriptor(&self, line: &str, sink: Option<&dyn DebugSink>) -> bool {
        self.descriptors.iter().any(|desc| desc.is_in_line(line, sink))
    }

    /// Whether some registered descriptor both appears in the given diff
    /// line and is flagged as affecting binary compatibility.
    ///
    /// The flag is read explicitly per matching descriptor; a match whose
    /// descriptor does not affect compatibility contributes nothing.
    pub fn line_affects_binary_compat(&self, line: &str, sink: Option<&dyn DebugSink>) -> bool {
        for desc in &self.descriptors {
            if desc.is_in_line(line, sink) && desc.affects_binary_compat() {
                narrate(
                    sink,
                    &format!("Descriptor: {} affects binary compatibility.", desc.token()),
                );
                return true;
            }
        }
        narrate(sink, "No descriptors found affecting binary compatibility.");
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compat_flag_is_consulted_not_assumed() {
        let mut registry = DescriptorRegistry::new();
        registry.register("noscript", false);
        let line = "+ [noscript] void hiddenFromScript();";
        assert!(registry.line_has_any_descriptor(line, None));
        assert!(!registry.line_affects_binary_compat(line, None));
    }

    #[test]
    fn duplicate_registration_is_redundant_not_rejected() {
        let mut registry = DescriptorRegistry::new();
        registry.register("notxpcom", true);
        registry.register("notxpcom", true);
        assert_eq!(registry.len(), 2);
        assert!(registry.line_has_any_descriptor("+[notxpcom] void f();", None));
    }
}
