use super::*;

const KEYED_OBJECT: &str = r#"{
  "annotations": {
    "identity": { "language": "en" },
    "annotations": {
      "😀": { "default": ["face", "grin", "grinning face"], "tts": ["grinning face"] },
      "🔥": { "default": ["Flame", "hot"], "tts": ["fire"] },
      "§": { "default": ["section"], "tts": ["section"] }
    }
  }
}"#;

const LANGUAGE_ARRAY: &str = r#"{
  "main": {
    "en-GB": {
      "annotations": [
        { "cp": "😀", "keywords": ["face", "grin"], "tts": "grinning face" },
        { "cp": "🐕", "keywords": ["pet"], "tts": "dog" }
      ]
    },
    "fr": {
      "annotations": [
        { "cp": "😀", "keywords": ["visage"], "tts": "visage rieur" }
      ]
    }
  }
}"#;

const NESTED_DEFAULT: &str = r#"{
  "annotationsDerived": {
    "annotations": [
      { "cp": "🇩🇪", "annotations": { "default": { "tts": "flag: Germany", "keywords": ["flag"] } } },
      { "cp": "👍🏽", "annotations": { "default": { "tts": "thumbs up: medium skin tone", "keywords": ["+1", "hand"] } } },
      { "annotations": { "default": { "tts": "no cp", "keywords": [] } } }
    ]
  }
}"#;

#[test]
fn test_keyed_object_shape() {
    let ann = parse_annotations(KEYED_OBJECT).unwrap();
    assert_eq!(ann.shape, Some(AnnotationShape::KeyedObject));
    assert_eq!(ann.len(), 3);

    let grin = ann.get("😀").unwrap();
    assert_eq!(grin.name.as_deref(), Some("grinning face"));
    assert_eq!(grin.keywords.iter().collect::<Vec<_>>(), vec!["face", "grin", "grinning face"]);

    let fire = ann.get("🔥").unwrap();
    assert!(fire.keywords.contains("flame"));
    assert!(!fire.keywords.iter().any(|k| k == "Flame"));
}

#[test]
fn test_language_array_takes_first_language() {
    let ann = parse_annotations(LANGUAGE_ARRAY).unwrap();
    assert_eq!(ann.shape, Some(AnnotationShape::LanguageArray));
    assert_eq!(ann.len(), 2);
    assert_eq!(ann.get("😀").unwrap().name.as_deref(), Some("grinning face"));
    assert!(!ann.get("😀").unwrap().keywords.contains("visage"));
    assert_eq!(ann.get("🐕").unwrap().name.as_deref(), Some("dog"));
}

#[test]
fn test_nested_default_shape() {
    let ann = parse_annotations(NESTED_DEFAULT).unwrap();
    assert_eq!(ann.shape, Some(AnnotationShape::NestedDefault));
    assert_eq!(ann.len(), 2);
    assert_eq!(ann.get("🇩🇪").unwrap().name.as_deref(), Some("flag: Germany"));
    assert!(ann.get("👍🏽").unwrap().keywords.contains("+1"));
}

#[test]
fn test_nested_default_under_main_language() {
    let doc = r#"{"main": {"en": {"annotations": {"annotations": [
        { "cp": "🐈", "annotations": { "default": { "tts": "cat", "keywords": ["pet"] } } }
    ]}}}}"#;
    let ann = parse_annotations(doc).unwrap();
    assert_eq!(ann.shape, Some(AnnotationShape::NestedDefault));
    assert_eq!(ann.get("🐈").unwrap().name.as_deref(), Some("cat"));
}

#[test]
fn test_nested_default_bare_top_level_array() {
    let doc = r#"{"annotations": [
        { "cp": "🐈", "annotations": { "default": { "tts": "cat", "keywords": ["pet"] } } }
    ]}"#;
    let ann = parse_annotations(doc).unwrap();
    assert_eq!(ann.shape, Some(AnnotationShape::NestedDefault));
    assert_eq!(ann.len(), 1);
}

#[test]
fn test_keyed_object_wins_over_later_shapes() {
    // Both a keyed object and a main.<lang> array are present: the first
    // recognizer in order is authoritative.
    let doc = r#"{
        "annotations": { "annotations": { "🔥": { "default": ["hot"], "tts": ["fire"] } } },
        "main": { "en": { "annotations": [ { "cp": "🐕", "keywords": [], "tts": "dog" } ] } }
    }"#;
    let ann = parse_annotations(doc).unwrap();
    assert_eq!(ann.shape, Some(AnnotationShape::KeyedObject));
    assert!(ann.get("🐕").is_none());
}

#[test]
fn test_duplicate_entries_merge_within_document() {
    let doc = r#"{"main": {"en": {"annotations": [
        { "cp": "🔥", "keywords": ["hot"], "tts": "" },
        { "cp": "🔥", "keywords": ["HOT", "flame"], "tts": "fire" },
        { "cp": "🔥", "keywords": ["tool"], "tts": "flame" }
    ]}}}"#;
    let ann = parse_annotations(doc).unwrap();
    let fire = ann.get("🔥").unwrap();
    assert_eq!(fire.name.as_deref(), Some("fire"));
    assert_eq!(fire.keywords.iter().collect::<Vec<_>>(), vec!["hot", "flame", "tool"]);
}

#[test]
fn test_tts_string_or_array() {
    assert_eq!(tts_name(Some(&serde_json::json!("  fire "))), Some("fire"));
    assert_eq!(tts_name(Some(&serde_json::json!(["", "fire"]))), Some("fire"));
    assert_eq!(tts_name(Some(&serde_json::json!([]))), None);
    assert_eq!(tts_name(Some(&serde_json::json!(42))), None);
    assert_eq!(tts_name(None), None);
}

#[test]
fn test_pipe_separated_keywords() {
    let doc = r#"{"annotations": {"annotations": {"🔥": {"default": "flame | hot | tool", "tts": "fire"}}}}"#;
    let ann = parse_annotations(doc).unwrap();
    assert_eq!(
        ann.get("🔥").unwrap().keywords.iter().collect::<Vec<_>>(),
        vec!["flame", "hot", "tool"]
    );
}

#[test]
fn test_unrecognized_shape_is_error() {
    let err = parse_annotations(r#"{"emoji": []}"#).unwrap_err();
    assert!(matches!(err, SourceError::UnrecognizedShape(_)));

    let err = parse_annotations(r#"[1, 2, 3]"#).unwrap_err();
    assert!(matches!(err, SourceError::UnrecognizedShape(_)));

    let err = parse_annotations(r#"{"annotations": {"identity": {}}}"#).unwrap_err();
    assert!(matches!(err, SourceError::UnrecognizedShape(_)));
}

#[test]
fn test_invalid_json_is_error() {
    let err = parse_annotations("{ not json").unwrap_err();
    assert!(matches!(err, SourceError::Json(_)));
}

#[test]
fn test_recognized_but_empty() {
    let ann = parse_annotations(r#"{"annotations": {"annotations": {}}}"#).unwrap();
    assert!(ann.is_empty());
    assert_eq!(ann.shape, Some(AnnotationShape::KeyedObject));
}

#[test]
fn test_merge_base_and_derived() {
    let mut base = parse_annotations(KEYED_OBJECT).unwrap();
    let derived = parse_annotations(
        r#"{"annotationsDerived": {"annotations": {
            "🔥": { "default": ["flame", "burn"], "tts": ["other name"] },
            "👍🏽": { "default": ["+1"], "tts": ["thumbs up: medium skin tone"] }
        }}}"#,
    )
    .unwrap();

    base.merge(derived);

    assert_eq!(base.len(), 4);
    let fire = base.get("🔥").unwrap();
    assert_eq!(fire.name.as_deref(), Some("fire"));
    assert_eq!(fire.keywords.iter().collect::<Vec<_>>(), vec!["flame", "hot", "burn"]);

    let order: Vec<&str> = base.entries.keys().map(String::as_str).collect();
    assert_eq!(order.last(), Some(&"👍🏽"));
}

#[test]
fn test_merge_fills_missing_name() {
    let mut base = Annotations::default();
    base.add("🔥", None, &KeywordSet::from_iter(["hot"]));
    let mut other = Annotations::default();
    other.add("🔥", Some("fire"), &KeywordSet::new());

    base.merge(other);
    assert_eq!(base.get("🔥").unwrap().name.as_deref(), Some("fire"));
}

#[test]
fn test_leading_bom_is_ignored() {
    let annotations = parse_annotations(
        "\u{FEFF}{\"annotations\": {\"annotations\": {\"🔥\": {\"default\": [\"flame\"], \"tts\": [\"fire\"]}}}}",
    )
    .unwrap();
    assert_eq!(annotations.get("🔥").unwrap().name.as_deref(), Some("fire"));
}
