use emoji_atlas_catalog::*;
use std::fs;
use tempfile::TempDir;

fn record(slug: &str, emoji: &str, name: &str, category: &str) -> CatalogRecord {
    CatalogRecord {
        slug: slug.to_string(),
        emoji: emoji.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        subgroup: None,
        keywords: tokenize_keywords(name),
        version: DEFAULT_VERSION.to_string(),
    }
}

#[test]
fn record_serializes_with_catalog_field_names() {
    let mut rec = record("grinning-face", "😀", "grinning face", "Smileys & Emotion");
    rec.subgroup = Some("face-smiling".to_string());

    let value = serde_json::to_value(&rec).unwrap();
    assert_eq!(value["slug"], "grinning-face");
    assert_eq!(value["char"], "😀");
    assert_eq!(value["name"], "grinning face");
    assert_eq!(value["category"], "Smileys & Emotion");
    assert_eq!(value["subgroup"], "face-smiling");
    assert_eq!(value["keywords"], serde_json::json!(["grinning", "face"]));
    assert_eq!(value["version"], "1.0");
}

#[test]
fn absent_subgroup_is_omitted() {
    let rec = record("dog", "🐕", "dog", "Animals & Nature");
    let text = serde_json::to_string(&rec).unwrap();
    assert!(!text.contains("subgroup"));
}

#[test]
fn write_then_load_catalog() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("out").join("emojis.json");
    let records = vec![
        record("dog", "🐕", "dog", "Animals & Nature"),
        record("grinning-face", "😀", "grinning face", "Smileys & Emotion"),
    ];

    write_catalog(&path, &records).unwrap();

    let loaded = load_catalog(&path).unwrap();
    assert_eq!(loaded, records);
    assert!(!tmp.path().join("out").join("emojis.json.tmp").exists());

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("[\n"));
    assert!(text.ends_with("]\n"));
}

#[test]
fn write_is_byte_stable() {
    let records = vec![record("fire", "🔥", "fire", "Travel & Places")];
    let a = to_catalog_string(&records).unwrap();
    let b = to_catalog_string(&records.clone()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn load_rejects_unnormalized_keywords() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("emojis.json");
    fs::write(
        &path,
        r#"[{"slug":"fire","char":"🔥","name":"fire","category":"Travel & Places","keywords":["Fire"],"version":"0.6"}]"#,
    )
    .unwrap();

    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, CatalogIoError::Json { .. }));
    assert!(err.to_string().contains("not lowercase"));
}

#[test]
fn load_rejects_duplicate_keywords() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("emojis.json");
    fs::write(
        &path,
        r#"[{"slug":"fire","char":"🔥","name":"fire","category":"Travel & Places","keywords":["fire","fire"],"version":"0.6"}]"#,
    )
    .unwrap();

    assert!(load_catalog(&path).is_err());
}

#[test]
fn load_missing_file_is_io_error() {
    let tmp = TempDir::new().unwrap();
    let err = load_catalog(&tmp.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, CatalogIoError::Io { .. }));
}
