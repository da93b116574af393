//! Parser for the Unicode emoji registry (`emoji-test.txt`).
//!
//! Format:
//! ```text
//! # Version: 15.1
//! # group: Smileys & Emotion
//! # subgroup: face-smiling
//! 1F600                                                  ; fully-qualified     # 😀 E1.0 grinning face
//! 263A FE0F                                              ; fully-qualified     # ☺️ E0.6 smiling face
//! 263A                                                   ; unqualified         # ☺ E0.6 smiling face
//! ```
//!
//! `group:` and `subgroup:` comments set state for every following line.
//! Data lines carry the codepoints and qualification status left of `#`; the
//! right side holds the literal sequence, an optional `E<version>` marker,
//! and the name. The parser is tolerant: lines it cannot make sense of are
//! skipped and counted, never reported as errors.

use std::path::Path;

use emoji_atlas_catalog::DEFAULT_VERSION;
use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::error::SourceError;

/// Qualification status of a registry line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qualification {
    FullyQualified,
    MinimallyQualified,
    Unqualified,
    Component,
    Unknown,
}

impl Qualification {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FullyQualified => "fully-qualified",
            Self::MinimallyQualified => "minimally-qualified",
            Self::Unqualified => "unqualified",
            Self::Component => "component",
            Self::Unknown => "unknown",
        }
    }

    /// Classify the left-hand side of a data line (`1F600 ; fully-qualified`).
    pub fn from_status(status: &str) -> Self {
        // "fully-qualified" is checked first: it is the only status that
        // makes an entry authoritative.
        if status.contains(Self::FullyQualified.as_str()) {
            Self::FullyQualified
        } else if status.contains(Self::MinimallyQualified.as_str()) {
            Self::MinimallyQualified
        } else if status.contains(Self::Unqualified.as_str()) {
            Self::Unqualified
        } else if status.contains(Self::Component.as_str()) {
            Self::Component
        } else {
            Self::Unknown
        }
    }

    pub fn is_fully_qualified(self) -> bool {
        self == Self::FullyQualified
    }
}

/// One accepted registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub name: String,
    /// Empty when the line appeared before any `group:` directive.
    pub group: String,
    pub subgroup: String,
    pub version: String,
    pub qualification: Qualification,
}

/// Line counts gathered while parsing, for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryStats {
    pub lines: usize,
    /// First entry seen for a sequence.
    pub accepted: usize,
    /// Fully-qualified lines that replaced an earlier non-qualified entry.
    pub superseded: usize,
    /// Lines dropped because an entry for the sequence already won.
    pub discarded: usize,
    pub malformed: usize,
}

/// A parsed registry, keyed by character sequence in first-acceptance order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Value of the `# Version:` header comment, if present.
    pub data_version: Option<String>,
    pub entries: IndexMap<String, RegistryEntry>,
    pub stats: RegistryStats,
}

impl Registry {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, emoji: &str) -> Option<&RegistryEntry> {
        self.entries.get(emoji)
    }

    /// Record a parsed line under the qualification precedence rule: the
    /// first fully-qualified entry for a sequence wins, and a fully-qualified
    /// line always replaces a non-fully-qualified one (keeping its position).
    fn accept(&mut self, emoji: &str, entry: RegistryEntry) {
        match self.entries.entry(emoji.to_string()) {
            Entry::Vacant(v) => {
                v.insert(entry);
                self.stats.accepted += 1;
            }
            Entry::Occupied(mut o) => {
                if entry.qualification.is_fully_qualified()
                    && !o.get().qualification.is_fully_qualified()
                {
                    o.insert(entry);
                    self.stats.superseded += 1;
                } else {
                    self.stats.discarded += 1;
                }
            }
        }
    }
}

/// Parse a registry file from a path.
pub fn parse_registry_file(path: &Path) -> Result<Registry, SourceError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(parse_registry(&contents))
}

/// Parse registry text. Never fails; see the module docs.
pub fn parse_registry(text: &str) -> Registry {
    let text = strip_bom(text);
    let mut registry = Registry::default();
    let mut group = String::new();
    let mut subgroup = String::new();

    for (line_no, raw) in text.lines().enumerate() {
        registry.stats.lines += 1;
        let line = raw.trim();

        if line.is_empty() {
            continue;
        }

        if let Some(comment) = line.strip_prefix('#') {
            match parse_directive(comment) {
                Some(Directive::Group(value)) => {
                    group = value.to_string();
                    subgroup.clear();
                }
                Some(Directive::Subgroup(value)) => subgroup = value.to_string(),
                Some(Directive::Version(value)) => {
                    if registry.data_version.is_none() {
                        registry.data_version = Some(value.to_string());
                    }
                }
                None => {}
            }
            continue;
        }

        let Some(parsed) = parse_data_line(line) else {
            log::debug!("Skipping malformed registry line {}: {}", line_no + 1, line);
            registry.stats.malformed += 1;
            continue;
        };

        registry.accept(
            parsed.emoji,
            RegistryEntry {
                name: parsed.name,
                group: group.clone(),
                subgroup: subgroup.clone(),
                version: parsed.version.unwrap_or(DEFAULT_VERSION).to_string(),
                qualification: parsed.qualification,
            },
        );
    }

    log::debug!(
        "Registry: {} lines, {} accepted, {} superseded, {} discarded, {} malformed",
        registry.stats.lines,
        registry.stats.accepted,
        registry.stats.superseded,
        registry.stats.discarded,
        registry.stats.malformed,
    );

    registry
}

// ---------------------------------------------------------------------------
// Line parsing
// ---------------------------------------------------------------------------

/// Drop a leading UTF-8 byte order mark, which `trim` leaves in place.
pub(crate) fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{FEFF}').unwrap_or(text)
}

#[derive(Debug, PartialEq, Eq)]
enum Directive<'a> {
    Group(&'a str),
    Subgroup(&'a str),
    Version(&'a str),
}

/// Recognize `group:`, `subgroup:` and `Version:` comments (text after `#`).
fn parse_directive(comment: &str) -> Option<Directive<'_>> {
    let comment = comment.trim_start();
    if let Some(value) = strip_prefix_ignore_case(comment, "group:") {
        return Some(Directive::Group(value.trim()));
    }
    if let Some(value) = strip_prefix_ignore_case(comment, "subgroup:") {
        return Some(Directive::Subgroup(value.trim()));
    }
    if let Some(value) = strip_prefix_ignore_case(comment, "version:") {
        return Some(Directive::Version(value.trim()));
    }
    None
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}

#[derive(Debug, PartialEq, Eq)]
struct DataLine<'a> {
    emoji: &'a str,
    name: String,
    version: Option<&'a str>,
    qualification: Qualification,
}

/// Split a data line into its parts. `None` if there is no `#` or nothing
/// after it.
fn parse_data_line(line: &str) -> Option<DataLine<'_>> {
    // Split on the first '#' only: names such as "keycap: #" contain more.
    let (left, right) = line.split_once('#')?;

    let mut tokens = right.split_whitespace();
    let emoji = tokens.next()?;

    let mut version = None;
    let mut name_tokens = Vec::new();
    for token in tokens {
        match version_marker(token) {
            Some(v) if version.is_none() => version = Some(v),
            _ => name_tokens.push(token),
        }
    }

    Some(DataLine {
        emoji,
        name: name_tokens.join(" "),
        version,
        qualification: Qualification::from_status(left),
    })
}

/// `E13.1` → `Some("13.1")`; anything else → `None`.
fn version_marker(token: &str) -> Option<&str> {
    let version = token.strip_prefix('E')?;
    let is_number = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    let valid = match version.split_once('.') {
        Some((major, minor)) => is_number(major) && is_number(minor),
        None => is_number(version),
    };
    valid.then_some(version)
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
