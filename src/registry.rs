// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registry of active log channels, keyed by creator name.
//!
//! The registry is the only way to obtain a [`LogChannel`].  It is an ordinary
//! value with no process-global state behind it: construct one at your
//! composition point, share it by reference (or clone the `Arc`s it hands
//! out), and call [`shutdown`](LogRegistry::shutdown) on the way out.
//!
//! # Lookup semantics
//!
//! - [`get_log`](LogRegistry::get_log) returns the existing channel for a name
//!   unconditionally, creating one with default options only when none exists.
//! - [`get_log_with`](LogRegistry::get_log_with) additionally compares the
//!   requested debug flag against the existing channel's: on a mismatch the
//!   old channel is flushed and *replaced* in the registry.  Outstanding
//!   `Arc`s to the old channel stay usable; its file handle closes when the
//!   last one drops.
//!
//! # Layout
//!
//! Channels live under the registry root (default `Logs`), one directory per
//! creator, one timestamped file per channel:
//!
//! ```text
//! Logs/
//!   Fetcher/
//!     Fetcher_March-07_14.32.log
//! ```
//!
//! # Examples
//!
//! ```rust no_run
//! use logbook::LogRegistry;
//!
//! let registry = LogRegistry::new();
//! let log = registry.get_log("Fetcher")?;
//! log.write("starting up");
//!
//! // The second lookup returns the same channel.
//! let same = registry.get_log("Fetcher")?;
//! assert!(std::sync::Arc::ptr_eq(&log, &same));
//!
//! registry.shutdown();
//! # Ok::<(), logbook::Error>(())
//! ```
//!
//! Requesting a different debug state replaces the registry entry:
//!
//! ```rust no_run
//! use logbook::{ChannelOptions, LogRegistry};
//!
//! let registry = LogRegistry::new();
//! let quiet = registry.get_log("Fetcher")?;
//! let noisy = registry.get_log_with(
//!     "Fetcher",
//!     ChannelOptions { debug: true, ..Default::default() },
//! )?;
//! assert!(!std::sync::Arc::ptr_eq(&quiet, &noisy));
//! # Ok::<(), logbook::Error>(())
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::channel::{ChannelOptions, LogChannel};
use crate::error::Error;

/// Hands out and tracks one [`LogChannel`] per creator name.
#[derive(Debug)]
pub struct LogRegistry {
    root: PathBuf,
    channels: Mutex<HashMap<String, Arc<LogChannel>>>,
}

impl Default for LogRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl LogRegistry {
    /// A registry rooted at `Logs` in the working directory.
    pub fn new() -> Self {
        Self::with_root("Logs")
    }

    /// A registry rooted at an explicit directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            channels: Mutex::new(HashMap::new()),
        }
    }

    /// The directory all channels are created under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the channel registered for `creator`, creating one with
    /// [`ChannelOptions::default`] when none exists.
    ///
    /// An existing channel is returned unconditionally; its debug state is not
    /// consulted.  Use [`get_log_with`](Self::get_log_with) to require one.
    pub fn get_log(&self, creator: &str) -> Result<Arc<LogChannel>, Error> {
        let mut channels = self.lock();
        if let Some(existing) = channels.get(creator) {
            return Ok(existing.clone());
        }
        let channel = LogChannel::create(&self.root, creator, &ChannelOptions::default())?;
        channels.insert(creator.to_string(), channel.clone());
        Ok(channel)
    }

    /// Returns the channel registered for `creator` if its debug flag matches
    /// `options.debug`; otherwise creates a replacement with `options` and
    /// overwrites the registry entry.
    ///
    /// The replaced channel is flushed first.  Callers still holding its `Arc`
    /// can keep writing to it; the old file handle closes when the last
    /// reference drops.
    pub fn get_log_with(
        &self,
        creator: &str,
        options: ChannelOptions,
    ) -> Result<Arc<LogChannel>, Error> {
        let mut channels = self.lock();
        if let Some(existing) = channels.get(creator) {
            if existing.is_debug() == options.debug {
                return Ok(existing.clone());
            }
            existing.flush();
        }
        let channel = LogChannel::create(&self.root, creator, &options)?;
        channels.insert(creator.to_string(), channel.clone());
        Ok(channel)
    }

    /// Whether a channel is currently registered for `creator`.
    pub fn contains(&self, creator: &str) -> bool {
        self.lock().contains_key(creator)
    }

    /// Number of registered channels.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the registry holds no channels.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Flushes every registered channel and clears the registry.
    ///
    /// Channels handed out earlier remain usable through their `Arc`s; this
    /// only ends the registry's own interest in them.
    pub fn shutdown(&self) {
        let mut channels = self.lock();
        for channel in channels.values() {
            channel.flush();
        }
        channels.clear();
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Arc<LogChannel>>> {
        self.channels
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
