// Candidate listing
// Non-recursive enumeration of the files directly inside chosen folders

use std::fs;
use std::path::PathBuf;

/// List the files directly inside each folder.
///
/// Folders that do not exist (or cannot be read) are skipped without an
/// error, subdirectories are not descended into, and non-file entries are
/// dropped. Paths come back in the order the file system reports them.
pub fn list_files(folders: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for folder in folders {
        let entries = match fs::read_dir(folder) {
            Ok(entries) => entries,
            Err(_) => continue,
        };

        for entry in entries.flatten() {
            match entry.file_type() {
                Ok(file_type) if file_type.is_file() => files.push(entry.path()),
                _ => {}
            }
        }
    }

    files
}

// Tests in tests/listing_tests.rs
