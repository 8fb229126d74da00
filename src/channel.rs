// SPDX-License-Identifier: MIT OR Apache-2.0

//! The write half: a channel owning one append-mode log file.
//!
//! A [`LogChannel`] is created by the registry, never directly.  It owns the
//! open file handle for its creator's log, stamps lines with the wall-clock
//! time, flushes after every write, and echoes everything to stdout when the
//! channel was created in debug mode.
//!
//! # Locking
//!
//! All mutable state (the file handle, the indent counter, the write-failure
//! flag) lives behind a single mutex, held for the duration of one logical
//! write.  A multi-line error trace therefore cannot interleave with another
//! writer's line, which is the implicit single-writer assumption the on-disk
//! format depends on.
//!
//! # Write failures
//!
//! Construction fails fast with [`Error`], but the write operations are
//! infallible by contract: a channel that loses its file mid-run reports the
//! first failure to stderr and drops the rest.  Logging infrastructure should
//! not take the program down with it.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::call_site::CallSite;
use crate::error::Error;
use crate::stamp::{self, DEFAULT_FILE_STAMP, padding};

/// Horizontal rule written by [`LogChannel::spacer`].
const SPACER: &str = "=--------------------------------------------------=";

/// The triple rule written by [`LogChannel::debug_spacer`].
const DEBUG_SPACER: [&str; 3] = [
    "=-----------------------------------------------------------=",
    "=|||||||||||||||||||||||||||||||||||||||||||||||||||||||||||=",
    "=-----------------------------------------------------------=",
];

/// Width of the call-site column in debug trace lines.
const SITE_WIDTH: usize = 40;

/// Options for creating a channel, used with
/// [`LogRegistry::get_log_with`](crate::LogRegistry::get_log_with).
///
/// ```
/// use logbook::ChannelOptions;
///
/// let options = ChannelOptions { debug: true, ..Default::default() };
/// assert_eq!(options.file_stamp, logbook::DEFAULT_FILE_STAMP);
/// ```
#[derive(Debug, Clone)]
pub struct ChannelOptions {
    /// Echo every write to stdout and enable the debug-trace operations.
    pub debug: bool,
    /// chrono strftime string appended to the creator name in the file name.
    /// Must be a valid format string; the default produces `_March-07_14.32`.
    pub file_stamp: String,
}

impl Default for ChannelOptions {
    fn default() -> Self {
        Self {
            debug: false,
            file_stamp: DEFAULT_FILE_STAMP.to_string(),
        }
    }
}

#[derive(Debug)]
struct ChannelState {
    file: File,
    indent: i32,
    write_failed: bool,
}

/// A named log: one append-mode file, optionally echoed to stdout.
///
/// Channels are handed out by [`LogRegistry`](crate::LogRegistry) as
/// `Arc<LogChannel>` and are safe to share across threads.
#[derive(Debug)]
pub struct LogChannel {
    creator: String,
    path: PathBuf,
    debug: bool,
    state: Mutex<ChannelState>,
}

/*
Boilerplate notes.

# LogChannel

Clone is out, the channel owns its file handle; share the Arc instead.
PartialEq could mean path equality or provenance, ambiguous either way, skip.
Default makes no sense, construction needs a creator and a root.
Display is not sensible, Debug is enough for diagnostics.
Send/Sync hold because the mutable half lives behind the Mutex.
*/

impl LogChannel {
    /// Creates the per-creator directory, opens the log file for append, and
    /// writes the header lines.
    pub(crate) fn create(
        root: &Path,
        creator: &str,
        options: &ChannelOptions,
    ) -> Result<Arc<Self>, Error> {
        if creator.is_empty() {
            return Err(Error::EmptyCreatorName);
        }
        let dir = root.join(creator);
        fs::create_dir_all(&dir).map_err(|source| Error::CreateDir {
            path: dir.clone(),
            source,
        })?;

        let path = dir.join(format!(
            "{}{}.log",
            creator,
            stamp::file_stamp(&options.file_stamp)
        ));
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| Error::CreateFile {
                path: path.clone(),
                source,
            })?;

        let channel = Self {
            creator: creator.to_string(),
            path,
            debug: options.debug,
            state: Mutex::new(ChannelState {
                file,
                indent: 0,
                write_failed: false,
            }),
        };
        channel.write_header()?;
        Ok(Arc::new(channel))
    }

    fn write_header(&self) -> Result<(), Error> {
        let mut state = self.lock();
        let mut lines = vec![
            format!("{}Log created by {}.", stamp::line_stamp(), self.creator),
            SPACER.to_string(),
        ];
        if self.debug {
            lines.push(SPACER.to_string());
            lines.push(format!("{}Debug enabled!", stamp::line_stamp()));
            lines.push(SPACER.to_string());
        }
        for line in &lines {
            writeln!(state.file, "{line}").map_err(|source| Error::WriteHeader {
                path: self.path.clone(),
                source,
            })?;
            if self.debug {
                println!("{line}");
            }
        }
        state.file.flush().map_err(|source| Error::WriteHeader {
            path: self.path.clone(),
            source,
        })
    }

    /// Name of the component this channel logs for.
    pub fn creator(&self) -> &str {
        &self.creator
    }

    /// Path of the backing log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether this channel echoes to stdout and emits debug traces.
    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Current value of the indent counter.
    pub fn indent_level(&self) -> i32 {
        self.lock().indent
    }

    /// Appends `line` with a `[HH:MM:SS] - ` prefix and flushes.
    pub fn write(&self, line: &str) {
        let mut state = self.lock();
        let text = format!("{}{}", stamp::line_stamp(), line);
        self.emit_line(&mut state, &text);
    }

    /// Appends `line` exactly as given, for pre-formatted content.
    pub fn write_no_stamp(&self, line: &str) {
        let mut state = self.lock();
        self.emit_line(&mut state, line);
    }

    /// Appends the timestamp prefix followed by the formatted text, with no
    /// implicit newline.  Usually invoked through [`logf!`](crate::logf).
    pub fn write_fmt(&self, args: std::fmt::Arguments<'_>) {
        let mut state = self.lock();
        let text = format!("{}{}", stamp::line_stamp(), args);
        let result = write!(state.file, "{text}").and_then(|_| state.file.flush());
        self.note_outcome(&mut state, result);
        if self.debug {
            print!("{text}");
            let _ = std::io::stdout().flush();
        }
    }

    /// Writes a stamped `ERROR!` marker, then the error and its `source()`
    /// chain with every line individually stamped.
    pub fn write_error(&self, error: &dyn std::error::Error) {
        let mut state = self.lock();
        let marker = format!("{}ERROR!", stamp::line_stamp());
        self.emit_line(&mut state, &marker);
        for line in render_trace(error).lines() {
            let text = format!("{}{}", stamp::line_stamp(), line);
            self.emit_line(&mut state, &text);
        }
    }

    /// Writes an unstamped horizontal rule, for visually delimiting sections.
    pub fn spacer(&self) {
        let mut state = self.lock();
        self.emit_line(&mut state, SPACER);
    }

    /// Writes one debug trace line at `site`, or does nothing when the channel
    /// is not in debug mode.  Usually invoked through [`debug!`](crate::debug);
    /// call this directly to supply a hand-built location.
    pub fn debug_at(&self, site: CallSite, message: &str, indent_modifier: i32) {
        if !self.debug {
            return;
        }
        let mut state = self.lock();
        let text = debug_line(site, message, state.indent + indent_modifier);
        self.emit_line(&mut state, &text);
    }

    /// Increments the indent counter for subsequent debug traces.
    pub fn indent(&self) {
        self.lock().indent += 1;
    }

    /// Decrements the indent counter.  No bounds checking; negative levels
    /// render the same as level zero.
    pub fn unindent(&self) {
        self.lock().indent -= 1;
    }

    /// Writes the decorative triple rule as debug traces, or does nothing when
    /// the channel is not in debug mode.
    pub fn debug_spacer(&self) {
        if !self.debug {
            return;
        }
        let site = crate::call_site!();
        let mut state = self.lock();
        for rule in DEBUG_SPACER {
            // modifier is the negative of the current level, so the rule
            // renders at effective indent zero regardless of nesting
            let text = debug_line(site, rule, 0);
            self.emit_line(&mut state, &text);
        }
    }

    /// Flushes the underlying file handle.
    ///
    /// Every write already flushes; this exists for the explicit shutdown path.
    pub fn flush(&self) {
        let mut state = self.lock();
        let result = state.file.flush();
        self.note_outcome(&mut state, result);
    }

    fn lock(&self) -> MutexGuard<'_, ChannelState> {
        // a poisoned write is still a write; logging often happens mid-unwind
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Appends `text` and a newline, flushes, mirrors to stdout in debug mode.
    fn emit_line(&self, state: &mut ChannelState, text: &str) {
        let result = writeln!(state.file, "{text}").and_then(|_| state.file.flush());
        self.note_outcome(state, result);
        if self.debug {
            println!("{text}");
        }
    }

    /// First write failure on a channel goes to stderr; later ones are dropped.
    fn note_outcome(&self, state: &mut ChannelState, result: std::io::Result<()>) {
        if let Err(err) = result {
            if !state.write_failed {
                state.write_failed = true;
                eprintln!("logbook: write to {} failed: {err}", self.path.display());
            }
        }
    }
}

/// Lays out one debug trace line at the given effective indent level.
///
/// The indentation is a dash-pair per level plus one, padded with spaces to
/// `4 * level + 4` columns; levels below zero render as level zero.
fn debug_line(site: CallSite, message: &str, level: i32) -> String {
    let effective = level.max(0) as usize;
    let dashes = "--".repeat(effective + 1);
    let indent = format!("{}{}", dashes, padding(&dashes, 4 * effective + 4));
    let site = site.to_string();
    format!(
        "{}DEBUG:\t{}{}|-|{}{}",
        stamp::line_stamp(),
        site,
        padding(&site, SITE_WIDTH),
        indent,
        message,
    )
}

/// Renders an error and its `source()` chain, one cause per line.
fn render_trace(error: &dyn std::error::Error) -> String {
    let mut trace = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        trace.push_str("\nCaused by: ");
        trace.push_str(&cause.to_string());
        source = cause.source();
    }
    trace
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> CallSite {
        CallSite::new("logbook::channel", "caller", 7)
    }

    fn body(line: &str) -> &str {
        line.split_once(" - ").expect("stamped").1
    }

    #[test]
    fn debug_line_at_level_zero() {
        let line = debug_line(site(), "hello", 0);
        assert_eq!(
            body(&line),
            format!("DEBUG:\t{:<40}|-|--  hello", "channel.caller():7")
        );
    }

    #[test]
    fn debug_line_scales_with_level() {
        // level 2: three dash-pairs padded to 12 columns
        let line = debug_line(site(), "m", 2);
        assert!(line.ends_with("|-|------      m"), "got {line:?}");
    }

    #[test]
    fn debug_line_clamps_negative_levels() {
        assert_eq!(
            body(&debug_line(site(), "m", -3)),
            body(&debug_line(site(), "m", 0))
        );
    }

    #[test]
    fn debug_line_pads_site_column() {
        let line = debug_line(site(), "m", 0);
        let column = line.split_once("DEBUG:\t").unwrap().1;
        let site_part = column.split_once("|-|").unwrap().0;
        assert_eq!(site_part.len(), SITE_WIDTH);
    }

    #[test]
    fn render_trace_walks_source_chain() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = Error::CreateDir {
            path: PathBuf::from("/nope"),
            source,
        };
        let trace = render_trace(&error);
        let lines: Vec<&str> = trace.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "failed to create log directory /nope");
        assert_eq!(lines[1], "Caused by: denied");
    }
}
