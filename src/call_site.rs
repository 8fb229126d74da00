// SPDX-License-Identifier: MIT OR Apache-2.0

//! Explicit source locations for debug traces.
//!
//! Debug trace lines carry the location that emitted them.  Rather than
//! walking the stack at runtime, the location is captured at compile time by
//! [`call_site!`](crate::call_site!) and passed down as a plain value; the
//! [`debug!`](crate::debug) macro does the capture so ordinary call sites
//! never build one by hand.

use std::fmt::{self, Display};

/// A captured call site: module, function, and line.
///
/// Displays as `module.function():line`, with the module shortened to its
/// last path segment so the trace column stays narrow.
///
/// ```
/// let site = logbook::CallSite::new("logbook::registry", "get_log", 42);
/// assert_eq!(site.to_string(), "registry.get_log():42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    module: &'static str,
    function: &'static str,
    line: u32,
}

impl CallSite {
    /// A call site from already-plain parts.
    pub fn new(module: &'static str, function: &'static str, line: u32) -> Self {
        Self {
            module,
            function,
            line,
        }
    }

    /// Internal constructor for [`call_site!`](crate::call_site!): `probe` is
    /// the `type_name` of a function item declared inside the caller.
    #[doc(hidden)]
    pub fn from_probe(module: &'static str, probe: &'static str, line: u32) -> Self {
        Self {
            module,
            function: enclosing_fn(probe),
            line,
        }
    }

    /// Full `module_path!()` of the call site.
    pub fn module(&self) -> &'static str {
        self.module
    }

    /// Name of the enclosing function.
    pub fn function(&self) -> &'static str {
        self.function
    }

    /// Source line of the capture.
    pub fn line(&self) -> u32 {
        self.line
    }
}

impl Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let module = self.module.rsplit("::").next().unwrap_or(self.module);
        write!(f, "{}.{}():{}", module, self.function, self.line)
    }
}

/*
Boilerplate notes.

# CallSite

Copy is in, two static strs and a u32.
PartialEq/Eq/Hash are data equality, well defined and handy for dedup in tests.
Ord makes no sense across modules.
Default makes no sense, a site with no site is nothing.
Display is implemented, it is the wire format of the trace column.
*/

/// Peels the probe and any closure frames off a `type_name` path, leaving the
/// enclosing function's name.
fn enclosing_fn(probe: &'static str) -> &'static str {
    let mut segments: Vec<&'static str> = probe.split("::").collect();
    segments.pop();
    while segments.last().is_some_and(|segment| *segment == "{{closure}}") {
        segments.pop();
    }
    segments.pop().unwrap_or(probe)
}
