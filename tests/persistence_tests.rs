//! Catalog store tests
//!
//! Exercise the JSON store against a temporary directory.

use gifcat::core::io::FileTimestamps;
use gifcat::domain::entities::{Catalog, CatalogEntry};
use gifcat::domain::repositories::{CatalogError, CatalogRepository};
use gifcat::infrastructure::persistence::JsonCatalogStore;
use gifcat::scan;
use rstest::*;
use std::fs;
use tempfile::{TempDir, tempdir};

#[fixture]
fn store_dir() -> TempDir {
    tempdir().unwrap()
}

fn entry(comments: &[u8]) -> CatalogEntry {
    let mut data = b"GIF89a\x20\x00\x10\x00\x82\x2C".to_vec();
    if !comments.is_empty() {
        data.extend_from_slice(&[0x21, 0xFE, comments.len() as u8]);
        data.extend_from_slice(comments);
    }
    data.push(0x3B);

    CatalogEntry::from_scan(
        scan(&data).unwrap(),
        FileTimestamps {
            created: Some("2024-05-06 07:08:09".to_string()),
            modified: Some("2024-05-06 07:08:10".to_string()),
        },
    )
}

#[rstest]
fn test_missing_store_loads_empty(store_dir: TempDir) {
    let store = JsonCatalogStore::new(store_dir.path().join("catalog.json"));
    assert!(!store.exists());
    assert!(store.load().unwrap().is_empty());
}

#[rstest]
fn test_save_then_load(store_dir: TempDir) {
    let store = JsonCatalogStore::new(store_dir.path().join("catalog.json"));

    let mut catalog = Catalog::new();
    catalog.insert("gifs/a.gif".to_string(), entry(b"first"));
    catalog.insert("gifs/b.gif".to_string(), entry(b""));
    store.save(&catalog).unwrap();

    assert!(store.exists());
    assert_eq!(store.load().unwrap(), catalog);
}

#[rstest]
fn test_save_rewrites_whole_file(store_dir: TempDir) {
    let store = JsonCatalogStore::new(store_dir.path().join("catalog.json"));

    let mut catalog = Catalog::new();
    catalog.insert("a.gif".to_string(), entry(b"x"));
    catalog.insert("b.gif".to_string(), entry(b"y"));
    store.save(&catalog).unwrap();

    catalog.remove("a.gif");
    store.save(&catalog).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert!(loaded.contains_key("b.gif"));
    assert!(!store_dir.path().join("catalog.json.tmp").exists());
}

#[rstest]
fn test_store_file_layout(store_dir: TempDir) {
    let path = store_dir.path().join("catalog.json");
    let store = JsonCatalogStore::new(&path);

    let mut catalog = Catalog::new();
    catalog.insert("dir/anim.gif".to_string(), entry(b"hey"));
    store.save(&catalog).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\n    \"dir/anim.gif\": {\n        \"version\": \"89a\""));

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let record = &value["dir/anim.gif"];
    assert_eq!(record["width"], 32);
    assert_eq!(record["height"], 16);
    assert_eq!(record["color_count"], 8);
    assert_eq!(record["compression"], "LZW");
    assert_eq!(record["number_format"], "Little-endian");
    assert_eq!(record["background_color"], "0x82");
    assert_eq!(record["image_count"], 1);
    assert_eq!(record["comments"], "hey");
    assert_eq!(record["creation_date"], "2024-05-06 07:08:09");
}

#[rstest]
fn test_save_creates_parent_dirs(store_dir: TempDir) {
    let store = JsonCatalogStore::new(store_dir.path().join("nested/deeper/catalog.json"));
    store.save(&Catalog::new()).unwrap();
    assert!(store.load().unwrap().is_empty());
}

#[rstest]
fn test_malformed_store_is_an_error(store_dir: TempDir) {
    let path = store_dir.path().join("catalog.json");
    fs::write(&path, "{ not json").unwrap();

    let store = JsonCatalogStore::new(&path);
    assert!(matches!(store.load(), Err(CatalogError::Json { .. })));
}

#[rstest]
fn test_missing_optional_fields_load(store_dir: TempDir) {
    let path = store_dir.path().join("catalog.json");
    fs::write(
        &path,
        r#"{
    "old.gif": {
        "version": "87a",
        "width": 1,
        "height": 2,
        "color_count": 2,
        "compression": "LZW",
        "number_format": "Little-endian",
        "background_color": "0x0",
        "image_count": 0
    }
}"#,
    )
    .unwrap();

    let catalog = JsonCatalogStore::new(&path).load().unwrap();
    let old = &catalog["old.gif"];
    assert_eq!(old.version, "87a");
    assert_eq!(old.comments, "");
    assert_eq!(old.creation_date, None);
}
