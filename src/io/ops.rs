use crate::entry::EntryKind;
use crate::error::{AppError, Result};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Component, Path, PathBuf};

/// `parent/name`, where `name` must be a single plain component that stays inside `parent`.
fn child_path(parent: &Path, name: &str, action: &'static str) -> Result<PathBuf> {
    let invalid = |reason: &str| {
        AppError::io(
            action,
            parent,
            io::Error::new(io::ErrorKind::InvalidInput, reason.to_string()),
        )
    };
    if name.trim().is_empty() {
        return Err(invalid("name must not be blank"));
    }
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(parent.join(name)),
        _ => Err(invalid("name must not contain path separators")),
    }
}

pub fn create_directory(parent: &Path, name: &str) -> Result<PathBuf> {
    let new_dir = child_path(parent, name, "create directory in")?;
    fs::create_dir(&new_dir).map_err(|e| AppError::io("create directory", &new_dir, e))?;
    log::info!("Created directory {}", new_dir.display());
    Ok(new_dir)
}

/// Creates an empty file. An existing file of the same name is left untouched and the
/// call fails with `AlreadyExists`.
pub fn create_file(parent: &Path, name: &str) -> Result<PathBuf> {
    let new_file = child_path(parent, name, "create file in")?;
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&new_file)
        .map_err(|e| AppError::io("create file", &new_file, e))?;
    log::info!("Created file {}", new_file.display());
    Ok(new_file)
}

/// Removes a file, or an empty directory. Never recursive.
pub fn delete(path: &Path, kind: EntryKind) -> Result<()> {
    let is_link = fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);

    // Directory links on Windows are removed like directories.
    let result = match kind {
        EntryKind::Directory if !is_link || cfg!(windows) => fs::remove_dir(path),
        _ => fs::remove_file(path),
    };
    result.map_err(|e| AppError::io("delete", path, e))?;
    log::info!("Deleted {} {}", kind.label().to_lowercase(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::read_directory;
    use crate::entry::Entry;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn create_directory_then_list() {
        let dir = TempDir::new().unwrap();
        create_directory(dir.path(), "sub").unwrap();
        let listed = read_directory(dir.path()).unwrap();
        assert!(listed.contains(&Entry::new("sub", EntryKind::Directory)));
    }

    #[test]
    fn create_directory_twice_fails() {
        let dir = TempDir::new().unwrap();
        create_directory(dir.path(), "sub").unwrap();
        File::create(dir.path().join("sub/keep.txt")).unwrap();

        let err = create_directory(dir.path(), "sub").unwrap_err();
        assert_eq!(err.io_kind(), Some(io::ErrorKind::AlreadyExists));
        assert!(dir.path().join("sub/keep.txt").exists());
        assert_eq!(read_directory(dir.path()).unwrap().len(), 1);
    }

    #[test]
    fn blank_names_are_rejected() {
        let dir = TempDir::new().unwrap();
        for name in ["", "   "] {
            let err = create_directory(dir.path(), name).unwrap_err();
            assert_eq!(err.io_kind(), Some(io::ErrorKind::InvalidInput));
            let err = create_file(dir.path(), name).unwrap_err();
            assert_eq!(err.io_kind(), Some(io::ErrorKind::InvalidInput));
        }
        assert!(read_directory(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn names_leaving_the_directory_are_rejected() {
        let root = TempDir::new().unwrap();
        let parent = root.path().join("inner");
        fs::create_dir(&parent).unwrap();
        let absolute = root.path().join("abs").to_string_lossy().to_string();

        for name in ["../escaped", "a/b", ".", "..", absolute.as_str()] {
            let err = create_directory(&parent, name).unwrap_err();
            assert_eq!(err.io_kind(), Some(io::ErrorKind::InvalidInput), "{name}");
            let err = create_file(&parent, name).unwrap_err();
            assert_eq!(err.io_kind(), Some(io::ErrorKind::InvalidInput), "{name}");
        }
        assert!(read_directory(&parent).unwrap().is_empty());
        assert_eq!(read_directory(root.path()).unwrap().len(), 1);
    }

    #[test]
    fn create_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = create_file(dir.path(), "a.txt").unwrap();
        let listed = read_directory(dir.path()).unwrap();
        assert!(listed.contains(&Entry::new("a.txt", EntryKind::File)));
        assert_eq!(fs::metadata(path).unwrap().len(), 0);
    }

    #[test]
    fn create_file_does_not_truncate() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "keep me").unwrap();

        let err = create_file(dir.path(), "a.txt").unwrap_err();
        assert_eq!(err.io_kind(), Some(io::ErrorKind::AlreadyExists));
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");
    }

    #[test]
    fn create_in_missing_parent_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");
        assert!(create_file(&missing, "a.txt").is_err());
        assert!(create_directory(&missing, "sub").is_err());
    }

    #[test]
    fn delete_non_empty_directory_fails() {
        let dir = TempDir::new().unwrap();
        let sub = create_directory(dir.path(), "sub").unwrap();
        fs::write(sub.join("inner.txt"), "data").unwrap();

        assert!(matches!(
            delete(&sub, EntryKind::Directory),
            Err(AppError::Io { .. })
        ));
        assert_eq!(fs::read_to_string(sub.join("inner.txt")).unwrap(), "data");
    }

    #[test]
    fn delete_empty_directory_and_file() {
        let dir = TempDir::new().unwrap();
        let sub = create_directory(dir.path(), "sub").unwrap();
        let file = create_file(dir.path(), "a.txt").unwrap();

        delete(&sub, EntryKind::Directory).unwrap();
        delete(&file, EntryKind::File).unwrap();
        assert!(read_directory(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn delete_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let err = delete(&dir.path().join("ghost"), EntryKind::File).unwrap_err();
        assert_eq!(err.io_kind(), Some(io::ErrorKind::NotFound));
    }

    #[cfg(unix)]
    #[test]
    fn delete_directory_symlink_removes_only_the_link() {
        let dir = TempDir::new().unwrap();
        let real = create_directory(dir.path(), "real").unwrap();
        fs::write(real.join("inner.txt"), "data").unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        delete(&link, EntryKind::Directory).unwrap();
        assert!(!link.exists());
        assert!(real.join("inner.txt").exists());
    }
}
