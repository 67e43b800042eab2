//! Descriptor matching tests: diff-line recognition and the binary
//! compatibility flag.

use std::cell::RefCell;

use idlcheck_core::{DebugSink, DescriptorRegistry};

/// A sink that records every message, for asserting narration happens.
#[derive(Default)]
struct RecordingSink {
    messages: RefCell<Vec<String>>,
}

impl DebugSink for RecordingSink {
    fn debug(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// A registered token inside the bracketed list of a `+` diff line
/// matches.
#[test]
fn test_descriptor_in_added_line() {
    let mut registry = DescriptorRegistry::new();
    registry.register("notxpcom", true);

    assert!(registry.line_has_any_descriptor("+  [notxpcom] long getValue();", None));
    assert!(registry.line_affects_binary_compat("+  [notxpcom] long getValue();", None));
}

/// Removed (`-`) lines qualify the same way added lines do.
#[test]
fn test_descriptor_in_removed_line() {
    let mut registry = DescriptorRegistry::new();
    registry.register("notxpcom", true);

    assert!(registry.line_has_any_descriptor("- [notxpcom] long getValue();", None));
}

/// The compatibility answer follows the flag of the matching descriptor,
/// not the mere existence of a match.
#[test]
fn test_compat_flag_false_still_matches_but_does_not_affect() {
    let mut registry = DescriptorRegistry::new();
    registry.register("noscript", false);

    let line = "+ [noscript] void internalOnly();";
    assert!(registry.line_has_any_descriptor(line, None));
    assert!(!registry.line_affects_binary_compat(line, None));
}

/// Without a `+`/`-` diff marker a line never matches, whatever the
/// brackets contain.
#[test]
fn test_no_diff_marker_never_matches() {
    let registry = DescriptorRegistry::with_xpidl_defaults();

    assert!(!registry.line_has_any_descriptor("[notxpcom] long getValue();", None));
    assert!(!registry.line_has_any_descriptor("  [scriptable, uuid(x)] interface nsIFoo", None));
}

/// Fragments are compared without trimming: a stray space in the diff
/// defeats the match. Known limitation, preserved deliberately.
#[test]
fn test_stray_space_fragment_not_matched() {
    let mut registry = DescriptorRegistry::new();
    registry.register("nostdcall", true);

    assert!(!registry.line_has_any_descriptor("+[notxpcom, nostdcall] void f();", None));
    // The same token as first fragment, with no stray space, matches.
    assert!(registry.line_has_any_descriptor("+[nostdcall, notxpcom] void f();", None));
}

/// The first compatibility-affecting match wins even when other
/// registered descriptors also appear.
#[test]
fn test_mixed_flags_in_one_line() {
    let mut registry = DescriptorRegistry::new();
    registry.register("scriptable", false);
    registry.register("notxpcom", true);

    assert!(registry.line_affects_binary_compat("+[scriptable,notxpcom] void f();", None));
}

/// The stock XPIDL set knows the calling-convention descriptors as
/// compatibility-affecting and the scripting-visibility ones as not.
#[test]
fn test_xpidl_defaults() {
    let registry = DescriptorRegistry::with_xpidl_defaults();
    assert!(!registry.is_empty());

    assert!(registry.line_affects_binary_compat("+[notxpcom] void f();", None));
    assert!(registry.line_affects_binary_compat("+[nostdcall] void f();", None));
    assert!(!registry.line_affects_binary_compat("+[noscript] void f();", None));
    assert!(!registry.line_affects_binary_compat("+[builtinclass] void f();", None));
}

/// An empty registry answers false for everything.
#[test]
fn test_empty_registry() {
    let registry = DescriptorRegistry::new();
    assert!(registry.is_empty());
    assert!(!registry.line_has_any_descriptor("+[notxpcom] void f();", None));
    assert!(!registry.line_affects_binary_compat("+[notxpcom] void f();", None));
}

/// Matching narrates each fragment seen to the sink; leaving the sink
/// out changes nothing but the narration.
#[test]
fn test_sink_narrates_fragments() {
    let mut registry = DescriptorRegistry::new();
    registry.register("notxpcom", true);
    let sink = RecordingSink::default();

    let line = "+[scriptable,notxpcom] void f();";
    assert!(registry.line_has_any_descriptor(line, Some(&sink)));
    let messages = sink.messages.borrow();
    assert!(
        messages.iter().any(|m| m.contains("scriptable")),
        "fragment narration missing: {:?}",
        messages
    );

    assert!(registry.line_has_any_descriptor(line, None));
}
