// SPDX-License-Identifier: MIT OR Apache-2.0

//! Timestamp and padding helpers shared by the channel write paths.

use chrono::Local;

/// strftime spelling of the per-line prefix, e.g. `[14:32:07] - `.
pub(crate) const LINE_STAMP: &str = "[%H:%M:%S] - ";

/// Default strftime suffix for log file names, e.g. `_March-07_14.32`.
pub const DEFAULT_FILE_STAMP: &str = "_%B-%d_%H.%M";

/// Formats the current wall-clock time as a line prefix.
pub(crate) fn line_stamp() -> String {
    Local::now().format(LINE_STAMP).to_string()
}

/// Formats the current wall-clock time with `format`, for file names.
pub(crate) fn file_stamp(format: &str) -> String {
    Local::now().format(format).to_string()
}

/// Returns the run of spaces that pads `value` out to `width` columns.
///
/// Empty when `value` already fills the column.
///
/// ```
/// assert_eq!(logbook::padding("--", 4), "  ");
/// assert_eq!(logbook::padding("------", 4), "");
/// ```
pub fn padding(value: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(value.chars().count()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn line_stamp_is_well_formed() {
        let stamp = line_stamp();
        assert!(stamp.starts_with('['));
        assert!(stamp.ends_with("] - "));
        NaiveTime::parse_from_str(&stamp[1..9], "%H:%M:%S").expect("clock portion parses");
    }

    #[test]
    fn padding_fills_to_width() {
        assert_eq!(padding("", 4), "    ");
        assert_eq!(padding("ab", 6), "    ");
    }

    #[test]
    fn padding_is_empty_at_or_past_width() {
        assert_eq!(padding("abcd", 4), "");
        assert_eq!(padding("abcdef", 4), "");
    }
}
