//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# logbook

logbook is a small, opinionated library for named, file-backed logs.

# The problem

Facade crates answer the question "where do log lines go" with "wherever the
subscriber was configured to put them".  That is the right answer for services
and the wrong one for tools: when a program is built from a handful of
long-lived components, what you often want is one plain-text file *per
component*, sitting next to the binary, appended and flushed line by line so a
crash loses nothing and `tail -f` always works.

logbook does exactly that and nothing more.  There is no level hierarchy, no
filtering language, no pluggable sink.  A component asks the registry for a
channel by name; the channel owns one append-mode file under
`Logs/<name>/` and stamps every line with the wall-clock time.

# The API

```rust no_run
use logbook::LogRegistry;

let registry = LogRegistry::new();
let log = registry.get_log("Fetcher")?;
log.write("starting up");
logbook::logf!(log, "fetched {} records\n", 23);
# Ok::<(), logbook::Error>(())
```

Channels created in debug mode additionally echo every line to stdout and
accept indentation-aware trace lines that carry their call site:

```rust no_run
use logbook::{ChannelOptions, LogRegistry};

let registry = LogRegistry::new();
let log = registry.get_log_with("Fetcher", ChannelOptions { debug: true, ..Default::default() })?;
logbook::debug!(log, "entering retry loop");
log.indent();
logbook::debug!(log, "attempt 1");
log.unindent();
# Ok::<(), logbook::Error>(())
```

# Lifecycle

The registry is an ordinary value, not a process-wide global.  Construct one at
your composition point, pass it (or the channels it hands out) to the
components that log, and call [`LogRegistry::shutdown`] on the way out.
Channels are shared as `Arc`s; a channel replaced in the registry stays usable
through outstanding references and its file handle closes with the last one.

# Concurrency

One mutex per channel, held for the duration of a single logical write, so a
multi-line error trace cannot interleave with another writer's line.  Every
write flushes before returning.
*/

mod call_site;
mod channel;
mod error;
mod macros;
mod registry;
mod stamp;

pub use call_site::CallSite;
pub use channel::{ChannelOptions, LogChannel};
pub use error::Error;
pub use registry::LogRegistry;
pub use stamp::{DEFAULT_FILE_STAMP, padding};
