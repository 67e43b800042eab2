//! Descriptor types - A descriptor is a named IDL annotation that may
//! prefix a method or attribute, e.g. the `notxpcom` in:
//!
//! ```idl
//! [notxpcom] long getSomeValue();
//! ```
//!
//! Some descriptors change the binary calling contract of the interface
//! they appear in, which forces a new IID when they are added or removed.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::debug::{narrate, DebugSink};

/// A diff line carrying an attribute list: optional leading whitespace,
/// a `+`/`-` marker, optional whitespace, then `[attr1,attr2,...]`.
/// The bracket capture is greedy, so nested brackets fold into group 1.
static DIFF_ATTR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[+-]\s*\[(.*)\](.*)").unwrap());

/// A single compatibility-sensitive IDL annotation.
///
/// Immutable after creation: tokens never change meaning mid-run, and a
/// descriptor never flips between affecting and not affecting binary
/// compatibility. Cheap to create; never reuse one for a different token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    token: String,
    affects_binary_compat: bool,
}

impl Descriptor {
    pub fn new(token: impl Into<String>, affects_binary_compat: bool) -> Self {
        Self {
            token: token.into(),
            affects_binary_compat,
        }
    }

    /// The token that invokes this descriptor in IDL source.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Whether adding or removing this descriptor changes the binary
    /// calling contract (and therefore requires a new IID).
    pub fn affects_binary_compat(&self) -> bool {
        self.affects_binary_compat
    }

    /// Whether this descriptor appears in a diff line.
    ///
    /// Only lines that start (after whitespace) with a `+`/`-` diff marker
    /// followed by a bracketed attribute list qualify. The list is split
    /// on commas with no trimming, and each fragment is compared for exact
    /// equality with the token, so a fragment carrying a stray space
    /// (`[notxpcom, nostdcall]` yields `" nostdcall"`) does not match
    /// `"nostdcall"`. That literal comparison is intentional.
    pub fn is_in_line(&self, line: &str, sink: Option<&dyn DebugSink>) -> bool {
        let Some(captures) = DIFF_ATTR_RE.captures(line) else {
            return false;
        };
        for attr in captures[1].split(',') {
            narrate(sink, &format!("Found descriptor: {attr}"));
            if attr == self.token {
                return true;
            }
        }
        false
    }
}
