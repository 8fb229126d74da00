// SPDX-License-Identifier: MIT OR Apache-2.0

//! Declarative macro front-end.
//!
//! The channel operations that want a call site or a format string are wrapped
//! in macros here so ordinary call sites stay one line.  Everything expands to
//! plain method calls on [`LogChannel`](crate::LogChannel); there is no hidden
//! dispatch behind these.

/// Captures the current call site as a [`CallSite`](crate::CallSite) value.
///
/// The function name is recovered from a probe function declared inside the
/// caller, so the macro works in free functions, methods, and closures alike.
///
/// ```
/// fn lookup() -> logbook::CallSite {
///     logbook::call_site!()
/// }
/// assert_eq!(lookup().function(), "lookup");
/// ```
#[macro_export]
macro_rules! call_site {
    () => {{
        fn __here() {}
        fn __name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::CallSite::from_probe(::core::module_path!(), __name_of(__here), ::core::line!())
    }};
}

/// Writes a debug trace line carrying the caller's location.
///
/// Expands to [`LogChannel::debug_at`](crate::LogChannel::debug_at) with a
/// [`call_site!`](crate::call_site!) capture.  A no-op unless the channel was
/// created with `debug` set.  The optional third argument adjusts the rendered
/// indent level for this line only.
///
/// ```rust no_run
/// # use logbook::{ChannelOptions, LogRegistry};
/// # let registry = LogRegistry::new();
/// let log = registry.get_log_with("Fetcher", ChannelOptions { debug: true, ..Default::default() })?;
/// logbook::debug!(log, "entering retry loop");
/// logbook::debug!(log, "one level deeper", 1);
/// # Ok::<(), logbook::Error>(())
/// ```
#[macro_export]
macro_rules! debug {
    ($channel:expr, $message:expr $(,)?) => {
        $crate::debug!($channel, $message, 0)
    };
    ($channel:expr, $message:expr, $modifier:expr $(,)?) => {
        $channel.debug_at(
            $crate::call_site!(),
            ::core::convert::AsRef::<str>::as_ref(&$message),
            $modifier,
        )
    };
}

/// Formatted write: timestamp prefix, then the `format!`-style text.
///
/// Expands to [`LogChannel::write_fmt`](crate::LogChannel::write_fmt).  No
/// newline is appended; end the format string with `\n` when the next write
/// should start on a fresh line.
///
/// ```rust no_run
/// # use logbook::LogRegistry;
/// # let registry = LogRegistry::new();
/// let log = registry.get_log("Fetcher")?;
/// logbook::logf!(log, "fetched {} of {} records\n", 7, 23);
/// # Ok::<(), logbook::Error>(())
/// ```
#[macro_export]
macro_rules! logf {
    ($channel:expr, $($arg:tt)*) => {
        $channel.write_fmt(::core::format_args!($($arg)*))
    };
}
