//! Hostname inference.
//!
//! The first run of word characters, dots and hyphens that is followed either
//! by the end of the message or by whitespace and a single-line remainder is
//! taken as the hostname.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

// `\w` and `\s` are ASCII only, `.` stops at any line terminator and `$` also
// matches in front of one trailing line terminator.
static HOSTNAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"([0-9A-Za-z_.\-]+)",
        r"([ \t\n\x0B\x0C\r]+([^\n\r\x{85}\x{2028}\x{2029}]*))?",
        r"(?:\r\n|[\n\r\x{85}\x{2028}\x{2029}])?\z",
    ))
    .expect("hostname pattern is valid")
});

/// Find the hostname token, without consuming anything.
pub fn find_hostname(input: &str) -> Option<&str> {
    HOSTNAME_REGEX
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|host| host.as_str())
}

/// Strip the hostname from the message.
///
/// The message loses as many leading characters as the hostname is long, plus
/// exactly one separator, wherever the hostname was actually found.
pub fn strip_hostname(input: &str) -> (Option<&str>, &str) {
    if input.is_empty() {
        return (None, input);
    }

    let Some(host) = find_hostname(input) else {
        trace!(message = "No hostname found in message.");
        return (None, input);
    };

    // hostnames are ASCII, byte length is character length
    let rest = input
        .char_indices()
        .nth(host.len() + 1)
        .map_or("", |(pos, _)| &input[pos..]);

    (Some(host), rest)
}
