//! Use case tests
//!
//! Folder scans run against real files in a temporary tree.

use gifcat::application::dto::ScanOptions;
use gifcat::application::{ScanFolderUseCase, catalog_key, scan_file, search, set_field};
use gifcat::domain::entities::{Catalog, EditError};
use gifcat::domain::repositories::CatalogRepository;
use gifcat::infrastructure::persistence::JsonCatalogStore;
use gifcat::{BodyEnd, ScanError, ScanFileError};
use rstest::*;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::{TempDir, tempdir};

fn gif_bytes(width: u16, frames: usize, comment: Option<&str>) -> Vec<u8> {
    let mut data = b"GIF89a".to_vec();
    data.extend_from_slice(&width.to_le_bytes());
    data.extend_from_slice(&8u16.to_le_bytes());
    data.push(0x80);
    data.extend_from_slice(&[0x00, 0x00]);
    if let Some(text) = comment {
        data.extend_from_slice(&[0x21, 0xFE, text.len() as u8]);
        data.extend_from_slice(text.as_bytes());
        data.push(0x00);
    }
    for _ in 0..frames {
        data.push(0x2C);
        data.extend_from_slice(&[0x00; 4]);
    }
    data.push(0x3B);
    data
}

fn write(root: &Path, rel: &str, data: &[u8]) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, data).unwrap();
}

#[fixture]
fn gif_tree() -> TempDir {
    let dir = tempdir().unwrap();
    let root = dir.path();

    write(root, "top.gif", &gif_bytes(100, 1, Some("Top level")));
    write(root, "holiday/beach.GIF", &gif_bytes(200, 3, Some("sunny")));
    write(root, "holiday/deep/snow.gif", &gif_bytes(4242, 2, None));
    write(root, "holiday/notes.txt", b"GIF89a but not a gif file name");
    write(root, "fake.gif", b"\x89PNG\r\n\x1a\n not really");
    write(root, "broken.gif", b"GIF89a\x01");
    dir
}

#[rstest]
fn test_discover_finds_gif_extensions(gif_tree: TempDir) {
    let files = ScanFolderUseCase::default().discover(gif_tree.path()).unwrap();
    let names: Vec<_> = files
        .iter()
        .map(|p| p.strip_prefix(gif_tree.path()).unwrap().to_string_lossy().replace('\\', "/"))
        .collect();
    assert_eq!(
        names,
        vec![
            "broken.gif",
            "fake.gif",
            "holiday/beach.GIF",
            "holiday/deep/snow.gif",
            "top.gif",
        ]
    );
}

#[rstest]
fn test_discover_respects_max_depth(gif_tree: TempDir) {
    let use_case = ScanFolderUseCase::new(ScanOptions::default().with_max_depth(1));
    let files = use_case.discover(gif_tree.path()).unwrap();
    assert_eq!(files.len(), 4);
    assert!(files.iter().all(|p| !p.ends_with("snow.gif")));
}

#[test]
fn test_discover_rejects_missing_root() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");
    assert!(ScanFolderUseCase::default().discover(&missing).is_err());
}

#[rstest]
#[case(ScanOptions::default())]
#[case(ScanOptions::sequential())]
fn test_scan_folder_catalogs_and_reports(gif_tree: TempDir, #[case] options: ScanOptions) {
    let root = gif_tree.path();
    let mut catalog = Catalog::new();
    let calls = AtomicUsize::new(0);
    let progress = |_done: usize, total: usize| {
        assert_eq!(total, 5);
        calls.fetch_add(1, Ordering::Relaxed);
    };

    let report = ScanFolderUseCase::new(options)
        .execute(root, &mut catalog, Some(&progress))
        .unwrap();

    assert_eq!(report.discovered, 5);
    assert_eq!(report.cataloged, 3);
    assert_eq!(report.skipped, vec![root.join("fake.gif")]);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].path, root.join("broken.gif"));
    assert!(report.failures[0].reason.contains("truncated"));
    assert_eq!(calls.load(Ordering::Relaxed), 5);

    let beach = &catalog[&catalog_key(&root.join("holiday/beach.GIF"))];
    assert_eq!(beach.width, 200);
    assert_eq!(beach.image_count, 3);
    assert_eq!(beach.comments, "sunny");
    assert_eq!(beach.color_count, 2);
    assert!(beach.modified_date.is_some());

    let snow = &catalog[&catalog_key(&root.join("holiday/deep/snow.gif"))];
    assert_eq!(snow.image_count, 2);
    assert_eq!(snow.comments, "");
}

#[rstest]
fn test_rescan_replaces_entries(gif_tree: TempDir) {
    let root = gif_tree.path();
    let use_case = ScanFolderUseCase::new(ScanOptions::sequential());
    let mut catalog = Catalog::new();
    use_case.execute(root, &mut catalog, None).unwrap();

    write(root, "top.gif", &gif_bytes(100, 4, Some("changed")));
    use_case.execute(root, &mut catalog, None).unwrap();

    assert_eq!(catalog.len(), 3);
    let top = &catalog[&catalog_key(&root.join("top.gif"))];
    assert_eq!(top.image_count, 4);
    assert_eq!(top.comments, "changed");
}

#[test]
fn test_scan_file_errors() {
    let dir = tempdir().unwrap();

    let missing = scan_file(&dir.path().join("missing.gif")).unwrap_err();
    assert!(matches!(missing, ScanFileError::Io { .. }));

    let path = dir.path().join("x.gif");
    fs::write(&path, b"nope").unwrap();
    let err = scan_file(&path).unwrap_err();
    assert!(err.is_not_a_gif());
    assert!(matches!(err, ScanFileError::Scan(ScanError::NotAGif)));
}

#[test]
fn test_scan_file_reports_missing_trailer() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cut.gif");
    let mut data = gif_bytes(10, 2, None);
    data.pop();
    fs::write(&path, data).unwrap();

    let scanned = scan_file(&path).unwrap();
    assert_eq!(scanned.entry.image_count, 2);
    assert_eq!(scanned.body.images, BodyEnd::EndOfStream);
}

#[rstest]
fn test_search_is_case_insensitive(gif_tree: TempDir) {
    let mut catalog = Catalog::new();
    ScanFolderUseCase::default()
        .execute(gif_tree.path(), &mut catalog, None)
        .unwrap();

    let by_comment = search(&catalog, "SUNNY");
    assert_eq!(by_comment.len(), 1);
    assert!(by_comment[0].0.ends_with("beach.GIF"));

    let by_path = search(&catalog, "holiday");
    assert_eq!(by_path.len(), 2);

    let by_width = search(&catalog, "4242");
    assert_eq!(by_width.len(), 1);

    assert!(search(&catalog, "").is_empty());
    assert!(search(&catalog, "no such thing").is_empty());
}

#[rstest]
fn test_edit_and_persist(gif_tree: TempDir) {
    let root = gif_tree.path();
    let store = JsonCatalogStore::new(root.join("catalog.json"));
    let mut catalog = store.load().unwrap();
    ScanFolderUseCase::default()
        .execute(root, &mut catalog, None)
        .unwrap();

    let key = catalog_key(&root.join("top.gif"));
    set_field(&mut catalog, &key, "comments", "edited by hand").unwrap();
    set_field(&mut catalog, &key, "height", "99").unwrap();
    store.save(&catalog).unwrap();

    let reloaded = store.load().unwrap();
    assert_eq!(reloaded[&key].comments, "edited by hand");
    assert_eq!(reloaded[&key].height, 99);
    assert_eq!(search(&reloaded, "BY HAND").len(), 1);
}

#[test]
fn test_edit_errors() {
    let mut catalog = Catalog::new();
    assert_eq!(
        set_field(&mut catalog, "a.gif", "comments", "x"),
        Err(EditError::UnknownPath("a.gif".to_string()))
    );
    assert_eq!(
        set_field(&mut catalog, "a.gif", "colour", "x"),
        Err(EditError::UnknownField("colour".to_string()))
    );
}
