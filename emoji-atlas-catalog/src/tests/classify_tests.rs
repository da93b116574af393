use super::*;

// -- looks_like_emoji --

#[test]
fn test_zwj_sequence_is_emoji() {
    assert!(looks_like_emoji("👨\u{200D}👩\u{200D}👧"));
}

#[test]
fn test_variation_selector_is_emoji() {
    // Digit one + VS16 + combining enclosing keycap
    assert!(looks_like_emoji("1\u{FE0F}\u{20E3}"));
}

#[test]
fn test_skin_tone_modifier_is_emoji() {
    assert!(looks_like_emoji("\u{1F3FD}"));
}

#[test]
fn test_pictograph_ranges() {
    assert!(looks_like_emoji("😀"));
    assert!(looks_like_emoji("🫠"));
    assert!(looks_like_emoji("☀"));
    assert!(looks_like_emoji("✂"));
}

#[test]
fn test_regional_indicators() {
    assert!(looks_like_emoji("🇫🇷"));
}

#[test]
fn test_hearts_and_suits() {
    assert!(looks_like_emoji("♠"));
    assert!(looks_like_emoji("❤"));
}

#[test]
fn test_plain_text_is_not_emoji() {
    assert!(!looks_like_emoji("a"));
    assert!(!looks_like_emoji("§"));
    assert!(!looks_like_emoji("→"));
    assert!(!looks_like_emoji("€"));
    assert!(!looks_like_emoji(""));
}

// -- guess_category --

#[test]
fn test_guess_smileys() {
    assert_eq!(guess_category("face with tears of joy", ["laugh"]), "Smileys & Emotion");
    assert_eq!(guess_category("smiling cat", Vec::<String>::new()), "Smileys & Emotion");
}

#[test]
fn test_guess_people() {
    assert_eq!(guess_category("thumbs up", ["+1"]), "People & Body");
    assert_eq!(guess_category("woman technologist", ["coder"]), "People & Body");
}

#[test]
fn test_guess_animals() {
    assert_eq!(guess_category("dog", ["pet"]), "Animals & Nature");
}

#[test]
fn test_guess_food() {
    assert_eq!(guess_category("hot beverage", ["coffee", "steaming"]), "Food & Drink");
}

#[test]
fn test_guess_travel_and_objects() {
    assert_eq!(guess_category("rocket", ["space"]), "Travel & Places");
    assert_eq!(guess_category("mobile phone", ["cell"]), "Objects");
}

#[test]
fn test_guess_flags() {
    assert_eq!(guess_category("flag: Germany", ["flag"]), "Flags");
}

#[test]
fn test_first_signature_wins() {
    // "heart" (Smileys) outranks "arrow" (Symbols)
    assert_eq!(guess_category("heart with arrow", ["cupid"]), "Smileys & Emotion");
}

#[test]
fn test_word_boundaries() {
    // "states" must not trigger the Symbols "star" signature
    assert_eq!(guess_category("flag: United States", Vec::<&str>::new()), "Flags");
}

#[test]
fn test_guess_uncategorized() {
    assert_eq!(guess_category("zzz", ["sleep"]), UNCATEGORIZED);
    assert_eq!(guess_category("", Vec::<&str>::new()), UNCATEGORIZED);
}

#[test]
fn test_signatures_compile() {
    assert_eq!(SIGNATURES.len(), CATEGORIES.len());
}
