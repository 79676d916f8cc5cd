use crate::entry::{Entry, EntryKind};
use crate::error::{AppError, Result};
use std::fs;
use std::path::Path;

/// Lists the children of `path` in the order the OS hands them out.
///
/// No sorting, no hidden-file filtering, no metadata beyond the kind. Fails if `path`
/// is missing or is not a directory.
pub fn read_directory(path: &Path) -> Result<Vec<Entry>> {
    let read_dir = fs::read_dir(path).map_err(|e| AppError::io("list", path, e))?;

    let mut entries = Vec::new();
    for dir_entry in read_dir {
        let dir_entry = dir_entry.map_err(|e| AppError::io("list", path, e))?;
        let name = dir_entry.file_name().to_string_lossy().to_string();
        // Follows symlinks; a dangling link is a File.
        let kind = if dir_entry.path().is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        entries.push(Entry::new(name, kind));
    }

    log::debug!("Listed {} entries in {}", entries.len(), path.display());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs::File;
    use tempfile::TempDir;

    fn as_set(entries: Vec<Entry>) -> HashSet<(String, EntryKind)> {
        entries.into_iter().map(|e| (e.name, e.kind)).collect()
    }

    #[test]
    fn lists_children_with_kinds() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("alpha")).unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();
        File::create(dir.path().join(".hidden")).unwrap();

        let listed = as_set(read_directory(dir.path()).unwrap());
        let expected: HashSet<_> = [
            ("alpha".to_string(), EntryKind::Directory),
            ("notes.txt".to_string(), EntryKind::File),
            (".hidden".to_string(), EntryKind::File),
        ]
        .into_iter()
        .collect();
        assert_eq!(listed, expected);
    }

    #[test]
    fn empty_directory_lists_nothing() {
        let dir = TempDir::new().unwrap();
        assert!(read_directory(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn does_not_recurse() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("outer/inner")).unwrap();
        let listed = read_directory(dir.path()).unwrap();
        assert_eq!(listed, vec![Entry::new("outer", EntryKind::Directory)]);
    }

    #[test]
    fn missing_path_fails() {
        let dir = TempDir::new().unwrap();
        let err = read_directory(&dir.path().join("nope")).unwrap_err();
        assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
    }

    #[test]
    fn file_path_fails() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("plain.txt");
        File::create(&file).unwrap();
        assert!(matches!(read_directory(&file), Err(AppError::Io { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn symlink_to_directory_is_a_directory() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("real")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("dangling")).unwrap();

        let listed = as_set(read_directory(dir.path()).unwrap());
        assert!(listed.contains(&("link".to_string(), EntryKind::Directory)));
        assert!(listed.contains(&("dangling".to_string(), EntryKind::File)));
    }
}
