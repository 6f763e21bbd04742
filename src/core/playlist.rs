// M3U playlist filtering and renumbering

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::denylist::Denylist;
use crate::error::{PlaylistError, Result};

/// Required first line of every playlist
pub const HEADER_MARKER: &str = "#EXTM3U";

/// Prefix of the line describing one entry
pub const ENTRY_MARKER: &str = "#EXTINF";

/// Attribute injected into every kept entry
pub const CHANNEL_NUMBER_ATTR: &str = "channel-number";

/// Characters that end a line. `\r\n` counts as a single break.
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

static GROUP_TITLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"group-title="([^"]*)""#).expect("group-title pattern is valid")
});

/// One trimmed, non-blank playlist line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `#EXTINF` line introducing an entry
    Metadata(&'a str),
    /// Any other `#` line
    Directive(&'a str),
    /// Locator of the current entry
    Reference(&'a str),
}

impl<'a> Line<'a> {
    pub fn classify(line: &'a str) -> Self {
        if line.starts_with(ENTRY_MARKER) {
            Line::Metadata(line)
        } else if line.starts_with('#') {
            Line::Directive(line)
        } else {
            Line::Reference(line)
        }
    }
}

/// Whether reference lines currently belong to a kept entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryState {
    #[default]
    Emitting,
    SkippingEntry,
}

/// Output of a successful [`transform`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    /// Rewritten playlist, lines joined by `\n`, no trailing newline
    pub text: String,
    /// Entries kept and numbered
    pub channels: usize,
    /// Entries removed because of their category
    pub filtered: usize,
    /// Directive and comment lines dropped
    pub ignored: usize,
}

/// Value of the first `group-title="..."` attribute, taken literally
pub fn category_label(line: &str) -> Option<&str> {
    GROUP_TITLE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Splice `channel-number="<number>"` in after the first space-delimited token.
pub fn insert_channel_number(line: &str, number: usize) -> String {
    let attribute = format!("{}=\"{}\"", CHANNEL_NUMBER_ATTR, number);
    match line.split_once(' ') {
        Some((first, rest)) => format!("{} {} {}", first, attribute, rest),
        None => format!("{} {}", line, attribute),
    }
}

/// Split `raw` into lines on every line break, not only `\n` and `\r\n`.
///
/// A trailing break does not produce a final empty line.
pub fn split_lines(raw: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = raw;

    while let Some(pos) = rest.find(LINE_BREAKS) {
        lines.push(&rest[..pos]);
        let tail = &rest[pos..];
        let break_len = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(1, char::len_utf8)
        };
        rest = &tail[break_len..];
    }

    if !rest.is_empty() {
        lines.push(rest);
    }
    lines
}

/// Validate the header, drop denied entries, directives and blank lines,
/// and number the surviving entries from 1.
pub fn transform(raw: &str, denylist: &Denylist) -> Result<Transformed> {
    let mut lines = split_lines(raw).into_iter().map(str::trim);

    let header = match lines.next() {
        Some(first) if first.starts_with(HEADER_MARKER) => first,
        _ => return Err(PlaylistError::MissingHeader),
    };

    let mut output = vec![header.to_string()];
    let mut state = EntryState::Emitting;
    let mut counter = 1usize;
    let mut filtered = 0usize;
    let mut ignored = 0usize;

    for line in lines.filter(|l| !l.is_empty()) {
        match Line::classify(line) {
            Line::Metadata(meta) => {
                state = EntryState::Emitting;

                if let Some(label) = category_label(meta) {
                    if let Some(keyword) = denylist.matching(label) {
                        log::info!("Filtering radio channel (group: {}, keyword: {})", label, keyword);
                        state = EntryState::SkippingEntry;
                        filtered += 1;
                        continue;
                    }
                }

                output.push(insert_channel_number(meta, counter));
                counter += 1;
            }
            Line::Directive(directive) => {
                log::info!("Ignoring non-standard directive/comment line: {}", directive);
                ignored += 1;
            }
            Line::Reference(reference) => {
                if state == EntryState::Emitting {
                    output.push(reference.to_string());
                }
            }
        }
    }

    let channels = counter - 1;
    log::info!("Kept and numbered {} TV channels", channels);

    Ok(Transformed {
        text: output.join("\n"),
        channels,
        filtered,
        ignored,
    })
}
