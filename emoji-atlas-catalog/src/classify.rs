//! Heuristics used only when no emoji registry is available.
//!
//! Annotation files describe far more than emoji (punctuation, arrows,
//! currency signs), and they carry no categories. [`looks_like_emoji`] keeps
//! obviously non-emoji entries out, and [`guess_category`] places the rest by
//! matching words in the name and keywords.

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::UNCATEGORIZED;

const ZWJ: char = '\u{200D}';
const VS16: char = '\u{FE0F}';

/// Codepoint ranges that mark a sequence as emoji-like.
const EMOJI_RANGES: &[RangeInclusive<char>] = &[
    // Skin tone modifiers
    '\u{1F3FB}'..='\u{1F3FF}',
    // Misc symbols & pictographs through symbols & pictographs extended-A
    '\u{1F300}'..='\u{1FAFF}',
    // Misc symbols + dingbats
    '\u{2600}'..='\u{27BF}',
    // Regional indicators (flags)
    '\u{1F1E6}'..='\u{1F1FF}',
];

/// Heart and card suit symbols.
const EXTRA_SYMBOLS: &[char] = &[
    '\u{2660}', '\u{2661}', '\u{2662}', '\u{2663}', '\u{2664}', '\u{2665}', '\u{2666}', '\u{2764}',
];

/// Decide whether a character sequence is plausibly an emoji.
///
/// ```
/// use emoji_atlas_catalog::classify::looks_like_emoji;
///
/// assert!(looks_like_emoji("👩\u{200D}💻"));
/// assert!(looks_like_emoji("🇯🇵"));
/// assert!(!looks_like_emoji("§"));
/// ```
pub fn looks_like_emoji(sequence: &str) -> bool {
    sequence.chars().any(|c| {
        c == ZWJ
            || c == VS16
            || EXTRA_SYMBOLS.contains(&c)
            || EMOJI_RANGES.iter().any(|range| range.contains(&c))
    })
}

/// Category names in the order their signatures are tried.
pub const CATEGORIES: &[&str] = &[
    "Smileys & Emotion",
    "People & Body",
    "Animals & Nature",
    "Food & Drink",
    "Activities",
    "Travel & Places",
    "Objects",
    "Symbols",
    "Flags",
];

/// Word patterns per category, parallel to [`CATEGORIES`]. A trailing `\w*`
/// marks a stem (`smil` matches `smile`, `smiling`).
const SIGNATURE_PATTERNS: &[&str] = &[
    r"face|smil\w*|grin\w*|cry\w*|tears?|kiss\w*|hearts?|love|angry|sad|joy|emoji",
    r"hands?|thumbs?|person|people|man|men|woman|women|family|baby|gesture\w*|body|eyes?|mouth|nose|ears?",
    r"cat|dog|monkey|bear|flowers?|trees?|leaf|leaves|sun|moon|star|rain\w*|clouds?|animals?|nature|plants?",
    r"food|drink\w*|pizza|burger|fruit|vegetables?|cake|coffee|tea|beer|wine",
    r"balls?|sports?|games?|trophy|medal|celebrat\w*|party|music\w*|guitar|violin",
    r"car|bus|train|ship|boat|plane|airplane|rocket|bike|bicycle|traffic|map|building|beach|mountain",
    r"phone|computer|laptop|camera|tv|watch|tools?|key|lock|bulb|bag|money|card|gift|book|scissors",
    r"arrows?|symbol|sign|mark|cross|check|star|sparkles|recycl\w*|infinity|om|atom|peace|copyright|tm",
    r"flag",
];

static SIGNATURES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    CATEGORIES
        .iter()
        .zip(SIGNATURE_PATTERNS)
        .filter_map(|(category, pattern)| {
            Regex::new(&format!(r"\b(?:{pattern})\b"))
                .ok()
                .map(|re| (*category, re))
        })
        .collect()
});

/// Guess a category from a display name and its keywords.
///
/// Signatures are tried in [`CATEGORIES`] order and the first match wins;
/// nothing matching yields [`UNCATEGORIZED`].
///
/// ```
/// use emoji_atlas_catalog::classify::guess_category;
///
/// assert_eq!(guess_category("grinning face", ["smile"]), "Smileys & Emotion");
/// assert_eq!(guess_category("flag: Japan", ["flag"]), "Flags");
/// assert_eq!(guess_category("zzz", Vec::<&str>::new()), "Uncategorized");
/// ```
pub fn guess_category<I, S>(name: &str, keywords: I) -> &'static str
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut text = name.to_lowercase();
    for keyword in keywords {
        text.push(' ');
        text.push_str(&keyword.as_ref().to_lowercase());
    }

    SIGNATURES
        .iter()
        .find(|(_, re)| re.is_match(&text))
        .map(|(category, _)| *category)
        .unwrap_or(UNCATEGORIZED)
}

#[cfg(test)]
#[path = "tests/classify_tests.rs"]
mod tests;
