// SPDX-License-Identifier: MIT OR Apache-2.0

//! Debug tracing: call sites, indentation arithmetic, the debug spacer.

use logbook::{ChannelOptions, LogChannel, LogRegistry, debug};
use std::sync::Arc;

fn contents(channel: &LogChannel) -> String {
    std::fs::read_to_string(channel.path()).expect("read log file")
}

fn line_count(channel: &LogChannel) -> usize {
    contents(channel).lines().count()
}

fn debug_channel(registry: &LogRegistry, creator: &str) -> Arc<LogChannel> {
    registry
        .get_log_with(
            creator,
            ChannelOptions {
                debug: true,
                ..Default::default()
            },
        )
        .expect("create debug channel")
}

#[test]
fn silent_when_debug_is_disabled() {
    let root = tempfile::tempdir().expect("tempdir");
    let registry = LogRegistry::with_root(root.path());
    let log = registry.get_log("Quiet").expect("create");
    let before = line_count(&log);

    debug!(log, "invisible");
    log.indent();
    debug!(log, "still invisible", 2);
    log.debug_spacer();

    assert_eq!(line_count(&log), before);
}

#[test]
fn trace_line_carries_call_site_and_message() {
    let root = tempfile::tempdir().expect("tempdir");
    let registry = LogRegistry::with_root(root.path());
    let log = debug_channel(&registry, "Tracer");

    debug!(log, "checking cache");
    let text = contents(&log);
    let last = text.lines().last().expect("line");
    let body = last.split_once(" - ").expect("stamped").1;
    assert!(body.starts_with("DEBUG:\t"), "got {body:?}");
    assert!(
        body.contains("debug_trace.trace_line_carries_call_site_and_message():"),
        "got {body:?}"
    );
    assert!(body.ends_with("|-|--  checking cache"), "got {body:?}");
}

#[test]
fn site_column_width() {
    let root = tempfile::tempdir().expect("tempdir");
    let registry = LogRegistry::with_root(root.path());
    let log = debug_channel(&registry, "Tracer");

    debug!(log, "m");
    let text = contents(&log);
    let last = text.lines().last().expect("line");
    let column = last.split_once("DEBUG:\t").expect("tag").1;
    let site = column.split_once("|-|").expect("divider").0;
    assert_eq!(site.len(), 40);
}

#[test]
fn indent_counter_is_exact_and_padding_scales() {
    let root = tempfile::tempdir().expect("tempdir");
    let registry = LogRegistry::with_root(root.path());
    let log = debug_channel(&registry, "Nester");

    log.indent();
    log.indent();
    log.indent();
    log.unindent();
    assert_eq!(log.indent_level(), 2);

    // level 2: three dash-pairs padded to 4*2+4 columns
    debug!(log, "deep");
    let text = contents(&log);
    assert!(
        text.lines().last().expect("line").ends_with("|-|------      deep"),
        "got {text:?}"
    );
}

#[test]
fn indent_modifier_shifts_a_single_line() {
    let root = tempfile::tempdir().expect("tempdir");
    let registry = LogRegistry::with_root(root.path());
    let log = debug_channel(&registry, "Shifter");

    debug!(log, "shifted", 1);
    debug!(log, "back");
    let text = contents(&log);
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[lines.len() - 2].ends_with("|-|----    shifted"));
    assert!(lines[lines.len() - 1].ends_with("|-|--  back"));
}

#[test]
fn negative_levels_render_like_zero() {
    let root = tempfile::tempdir().expect("tempdir");
    let registry = LogRegistry::with_root(root.path());
    let log = debug_channel(&registry, "Under");

    log.unindent();
    assert_eq!(log.indent_level(), -1);

    debug!(log, "floored");
    let text = contents(&log);
    assert!(
        text.lines().last().expect("line").ends_with("|-|--  floored"),
        "got {text:?}"
    );
}

#[test]
fn debug_spacer_writes_three_rules_at_indent_zero() {
    let root = tempfile::tempdir().expect("tempdir");
    let registry = LogRegistry::with_root(root.path());
    let log = debug_channel(&registry, "Ruler");

    log.indent();
    log.indent();
    let before = line_count(&log);
    log.debug_spacer();

    let text = contents(&log);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), before + 3);
    for line in &lines[before..] {
        assert!(line.contains("channel.debug_spacer():"), "got {line:?}");
        assert!(line.contains("|-|--  ="), "got {line:?}");
    }
    assert!(lines[before].ends_with("=-----------------------------------------------------------="));
    assert!(lines[before + 1].ends_with("=|||||||||||||||||||||||||||||||||||||||||||||||||||||||||||="));
}
