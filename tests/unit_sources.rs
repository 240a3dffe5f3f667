// tests/unit_sources.rs
//! Tests for dataset table loading and parsing.

use std::fs;
use std::path::Path;

use anyhow::Result;
use tempfile::TempDir;

use hypernym_core::error::HypernymError;
use hypernym_core::sources;

// --- Name table ---

#[test]
fn test_load_names_parses_tab_table() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("words.txt");
    fs::write(&path, "n01440764\ttench, Tinca tinca\nn01443537\tgoldfish\n")?;

    let names = sources::load_names(&path)?;
    assert_eq!(names.len(), 2);
    assert_eq!(names["n01440764"], "tench, Tinca tinca");
    Ok(())
}

#[test]
fn test_load_names_ignores_extra_fields_and_blanks() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("words.txt");
    fs::write(&path, "n01440764\ttench\textra\tcolumns\n\nn01443537\tgoldfish\n")?;

    let names = sources::load_names(&path)?;
    assert_eq!(names.len(), 2);
    assert_eq!(names["n01440764"], "tench");
    Ok(())
}

#[test]
fn test_load_names_rejects_untabbed_line() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("words.txt");
    fs::write(&path, "n01440764\ttench\nn01443537 goldfish\n")?;

    let err = sources::load_names(&path).unwrap_err();
    match err {
        HypernymError::Parse { line, .. } => assert_eq!(line, 2),
        other => panic!("expected parse error, got {other}"),
    }
    Ok(())
}

// --- Edge list ---

#[test]
fn test_load_edges_parses_pairs() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("wordnet.is_a.txt");
    fs::write(&path, "n00001740 n01861778\n\nn01861778 n02084071\n")?;

    let edges = sources::load_edges(&path)?;
    assert_eq!(edges.len(), 2);
    assert_eq!(
        edges[0],
        ("n00001740".to_string(), "n01861778".to_string())
    );
    Ok(())
}

#[test]
fn test_load_edges_rejects_wrong_field_count() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("wordnet.is_a.txt");
    fs::write(&path, "n00001740 n01861778 n02084071\n")?;

    let err = sources::load_edges(&path).unwrap_err();
    match err {
        HypernymError::Parse { line, message, .. } => {
            assert_eq!(line, 1);
            assert!(message.contains("3 fields"), "got: {message}");
        }
        other => panic!("expected parse error, got {other}"),
    }
    Ok(())
}

#[test]
fn test_load_edges_missing_file_is_io_error() {
    let err = sources::load_edges(Path::new("/nonexistent/wordnet.is_a.txt")).unwrap_err();
    assert!(matches!(err, HypernymError::Io { .. }));
}

// --- Class index ---

#[test]
fn test_load_class_index_builds_both_maps() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("imagenet_class_index.json");
    fs::write(
        &path,
        r#"{"0": ["n01440764", "tench"], "5": ["n01443537", "goldfish"]}"#,
    )?;

    let index = sources::load_class_index(&path)?;
    assert_eq!(index.class_of["n01440764"], 0);
    assert_eq!(index.class_of["n01443537"], 5);
    assert_eq!(index.short_names[&5], "goldfish");
    Ok(())
}

#[test]
fn test_load_class_index_rejects_non_numeric_key() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("imagenet_class_index.json");
    fs::write(&path, r#"{"zero": ["n01440764", "tench"]}"#)?;

    let err = sources::load_class_index(&path).unwrap_err();
    match err {
        HypernymError::Parse { message, .. } => assert!(message.contains("zero"), "got: {message}"),
        other => panic!("expected parse error, got {other}"),
    }
    Ok(())
}

#[test]
fn test_load_class_index_rejects_malformed_json() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("imagenet_class_index.json");
    fs::write(&path, "not json at all")?;

    let err = sources::load_class_index(&path).unwrap_err();
    assert!(matches!(err, HypernymError::Parse { .. }));
    Ok(())
}

// --- Split listing ---

#[test]
fn test_list_leaf_dirs_filters_non_wnid_entries() -> Result<()> {
    let dir = TempDir::new()?;
    let split = dir.path().join("train");
    fs::create_dir_all(split.join("n01440764"))?;
    fs::create_dir_all(split.join("n01443537"))?;
    fs::create_dir_all(split.join("logs"))?;
    fs::create_dir_all(split.join("n123"))?;
    fs::write(split.join("n99999999"), "a file, not a directory")?;

    let leaves = sources::list_leaf_dirs(&split)?;
    assert_eq!(
        leaves.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["n01440764", "n01443537"]
    );
    Ok(())
}

#[test]
fn test_list_leaf_dirs_missing_split_is_io_error() {
    let err = sources::list_leaf_dirs(Path::new("/nonexistent/train")).unwrap_err();
    assert!(matches!(err, HypernymError::Io { .. }));
}

// --- Composition ---

#[test]
fn test_load_dataset_info_composes_tables() -> Result<()> {
    let dir = TempDir::new()?;
    let root = dir.path().join("dataset");
    let info_dir = dir.path().join("info");
    fs::create_dir_all(root.join("train").join("n01440764"))?;
    fs::create_dir_all(&info_dir)?;
    fs::write(info_dir.join("words.txt"), "n01440764\ttench\n")?;
    fs::write(
        info_dir.join("imagenet_class_index.json"),
        r#"{"0": ["n01440764", "tench"]}"#,
    )?;

    let info = sources::load_dataset_info(&root, &info_dir, "train")?;
    assert_eq!(info.leaf_ids.len(), 1);
    assert!(info.leaf_ids.contains("n01440764"));
    assert_eq!(info.names["n01440764"], "tench");
    assert_eq!(info.class_index.class_of["n01440764"], 0);
    Ok(())
}
