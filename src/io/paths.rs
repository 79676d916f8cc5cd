use crate::error::{AppError, Result};
use std::path::{Component, Path, PathBuf};

/// The user's home directory.
pub fn home_dir() -> Result<PathBuf> {
    directories::UserDirs::new()
        .map(|ud| ud.home_dir().to_path_buf())
        .ok_or(AppError::NoHomeDirectory)
}

/// True for `/` on Unix and for drive or share roots on Windows.
pub fn is_root(path: &Path) -> bool {
    path.parent().is_none()
}

/// Makes `input` absolute against `base` and folds `.` and `..` without touching the
/// filesystem, so symlinked paths keep the name the user typed.
pub fn resolve(base: &Path, input: &Path) -> PathBuf {
    let joined = if input.is_absolute() {
        input.to_path_buf()
    } else {
        base.join(input)
    };

    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            // `pop` on a root is a no-op, so `/..` stays `/`.
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
