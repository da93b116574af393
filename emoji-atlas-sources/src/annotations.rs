//! Parser for CLDR annotation documents (`annotations.json`).
//!
//! CLDR has published its emoji annotations in several JSON layouts over the
//! years. Rather than branching on each one inline, every known layout is an
//! [`AnnotationShape`] that either recognizes the document structurally or
//! declines; the first shape to recognize it is authoritative. Supporting a
//! new layout means adding a variant.
//!
//! A document that no shape recognizes is an error: the layout contract is
//! broken and guessing would silently lose every keyword.

use std::path::Path;

use emoji_atlas_catalog::KeywordSet;
use indexmap::IndexMap;
use serde_json::Value;

use crate::error::SourceError;
use crate::registry::strip_bom;

/// Names and keywords for one character sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotation {
    /// Text-to-speech name. The first non-empty one seen wins.
    pub name: Option<String>,
    pub keywords: KeywordSet,
}

/// The JSON layouts the parser understands, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationShape {
    /// `{"annotations": {"annotations": {"😀": {"default": [..], "tts": [..]}}}}`,
    /// or the same under `annotationsDerived`.
    KeyedObject,
    /// `{"main": {"<lang>": {"annotations": [{"cp": "😀", "keywords": [..], "tts": ".."}]}}}`;
    /// the language key is whichever comes first.
    LanguageArray,
    /// Arrays of `{"cp": "😀", "annotations": {"default": {"tts": "..", "keywords": [..]}}}`
    /// under `annotations.annotations`, `annotationsDerived.annotations`,
    /// `main.<lang>.annotations.annotations`, or a bare top-level `annotations`.
    NestedDefault,
}

impl AnnotationShape {
    pub const ALL: [Self; 3] = [Self::KeyedObject, Self::LanguageArray, Self::NestedDefault];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::KeyedObject => "keyed object",
            Self::LanguageArray => "language array",
            Self::NestedDefault => "nested default",
        }
    }

    /// Extract raw entries if the document has this shape.
    fn recognize(self, doc: &Value) -> Option<Vec<RawEntry<'_>>> {
        match self {
            Self::KeyedObject => {
                let map = ["annotations", "annotationsDerived"]
                    .iter()
                    .find_map(|root| doc.get(root)?.get("annotations")?.as_object())?;
                Some(
                    map.iter()
                        .map(|(emoji, entry)| RawEntry {
                            emoji: emoji.as_str(),
                            name: tts_name(entry.get("tts")),
                            keywords: string_list(entry.get("default")),
                        })
                        .collect(),
                )
            }
            Self::LanguageArray => {
                let list = first_language(doc)?.get("annotations")?.as_array()?;
                Some(
                    list.iter()
                        .filter_map(|entry| {
                            Some(RawEntry {
                                emoji: entry.get("cp")?.as_str()?,
                                name: tts_name(entry.get("tts")),
                                keywords: string_list(entry.get("keywords")),
                            })
                        })
                        .collect(),
                )
            }
            Self::NestedDefault => {
                let list = nested_default_candidates(doc).find_map(Value::as_array)?;
                Some(
                    list.iter()
                        .filter_map(|entry| {
                            let default = entry.get("annotations")?.get("default")?;
                            Some(RawEntry {
                                emoji: entry.get("cp")?.as_str()?,
                                name: tts_name(default.get("tts")),
                                keywords: string_list(default.get("keywords")),
                            })
                        })
                        .collect(),
                )
            }
        }
    }
}

/// Accumulated annotations keyed by character sequence, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct Annotations {
    /// The layout the entries were read from, or `None` for an empty map.
    pub shape: Option<AnnotationShape>,
    pub entries: IndexMap<String, Annotation>,
}

impl Annotations {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, emoji: &str) -> Option<&Annotation> {
        self.entries.get(emoji)
    }

    /// Add one entry: the first non-empty name wins, keywords are unioned.
    pub fn add(&mut self, emoji: &str, name: Option<&str>, keywords: &KeywordSet) {
        if emoji.is_empty() {
            return;
        }
        let slot = self.entries.entry(emoji.to_string()).or_default();
        if slot.name.is_none() {
            slot.name = name
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string);
        }
        slot.keywords.union_with(keywords);
    }

    /// Merge another document (e.g. the derived set) into this one with the
    /// same policy as [`Annotations::add`]. Entries already present keep
    /// their position; new ones are appended.
    pub fn merge(&mut self, other: Annotations) {
        if self.shape.is_none() {
            self.shape = other.shape;
        }
        for (emoji, annotation) in other.entries {
            self.add(&emoji, annotation.name.as_deref(), &annotation.keywords);
        }
    }
}

/// Parse an annotation document from a file path.
pub fn parse_annotations_file(path: &Path) -> Result<Annotations, SourceError> {
    let contents = std::fs::read_to_string(path)?;
    parse_annotations(&contents)
}

/// Parse annotation document text.
pub fn parse_annotations(text: &str) -> Result<Annotations, SourceError> {
    let doc: Value = serde_json::from_str(strip_bom(text))?;
    parse_annotations_value(&doc)
}

/// Parse an already-decoded annotation document.
pub fn parse_annotations_value(doc: &Value) -> Result<Annotations, SourceError> {
    let (shape, raw) = AnnotationShape::ALL
        .iter()
        .find_map(|shape| shape.recognize(doc).map(|raw| (*shape, raw)))
        .ok_or_else(|| {
            SourceError::unrecognized_shape(format!(
                "expected one of: {}",
                AnnotationShape::ALL.map(AnnotationShape::as_str).join(", ")
            ))
        })?;

    log::debug!("Annotation document has {} shape ({} entries)", shape.as_str(), raw.len());

    let mut annotations = Annotations {
        shape: Some(shape),
        entries: IndexMap::with_capacity(raw.len()),
    };
    for entry in raw {
        let keywords: KeywordSet = entry.keywords.iter().collect();
        annotations.add(entry.emoji, entry.name, &keywords);
    }
    Ok(annotations)
}

// ---------------------------------------------------------------------------
// JSON helpers
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct RawEntry<'a> {
    emoji: &'a str,
    name: Option<&'a str>,
    keywords: Vec<&'a str>,
}

/// `main.<first language>`.
fn first_language(doc: &Value) -> Option<&Value> {
    doc.get("main")?.as_object()?.values().next()
}

fn nested_default_candidates(doc: &Value) -> impl Iterator<Item = &Value> {
    [
        doc.get("annotations").and_then(|v| v.get("annotations")),
        doc.get("annotationsDerived").and_then(|v| v.get("annotations")),
        first_language(doc)
            .and_then(|v| v.get("annotations"))
            .and_then(|v| v.get("annotations")),
        doc.get("annotations"),
    ]
    .into_iter()
    .flatten()
}

/// A `tts` value: either a string or a list whose first non-empty string wins.
fn tts_name(value: Option<&Value>) -> Option<&str> {
    match value? {
        Value::String(s) => Some(s.trim()).filter(|s| !s.is_empty()),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .find(|s| !s.is_empty()),
        _ => None,
    }
}

/// A keyword list: an array of strings, or a single `a | b | c` string as in
/// older CLDR exports.
fn string_list(value: Option<&Value>) -> Vec<&str> {
    match value {
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
        Some(Value::String(s)) => s.split('|').collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
#[path = "tests/annotations_tests.rs"]
mod tests;
