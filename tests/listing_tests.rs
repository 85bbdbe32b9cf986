// Integration tests for candidate listing

use std::fs;

use hashseek::finder::list_files;
use tempfile::TempDir;

#[test]
fn test_lists_only_top_level_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.bin"), "one").unwrap();
    fs::write(dir.path().join("b.bin"), "two").unwrap();
    let nested = dir.path().join("nested");
    fs::create_dir(&nested).unwrap();
    fs::write(nested.join("c.bin"), "three").unwrap();

    let mut files = list_files(&[dir.path().to_path_buf()]);
    files.sort();

    // The nested directory is neither listed nor descended into
    assert_eq!(
        files,
        vec![dir.path().join("a.bin"), dir.path().join("b.bin")]
    );
}

#[test]
fn test_missing_folder_is_skipped_silently() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.bin"), "one").unwrap();
    let missing = dir.path().join("not-here");

    let files = list_files(&[missing, dir.path().to_path_buf()]);
    assert_eq!(files, vec![dir.path().join("a.bin")]);
}

#[test]
fn test_folders_accumulate_in_order() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    fs::write(first.path().join("a.bin"), "one").unwrap();
    fs::write(second.path().join("b.bin"), "two").unwrap();

    let files = list_files(&[first.path().to_path_buf(), second.path().to_path_buf()]);
    assert_eq!(
        files,
        vec![first.path().join("a.bin"), second.path().join("b.bin")]
    );
}

#[test]
fn test_no_folders_no_files() {
    assert!(list_files(&[]).is_empty());
}

#[test]
fn test_empty_folder_contributes_nothing() {
    let dir = TempDir::new().unwrap();
    assert!(list_files(&[dir.path().to_path_buf()]).is_empty());
}
