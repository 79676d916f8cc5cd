// Pinned directories - one-click shortcuts shown beside the panels
use directories::UserDirs;
use std::path::{Path, PathBuf};

/// Session-only list of shortcut directories. Duplicates are allowed and nothing is
/// ever removed.
///
/// Which pins still exist is checked on pin and on `refresh_visible`, not on every frame.
#[derive(Clone, Debug, Default)]
pub struct PinnedDirectories {
    paths: Vec<PathBuf>,
    visible: Vec<PathBuf>,
}

impl PinnedDirectories {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        let mut pinned = Self {
            paths,
            visible: Vec::new(),
        };
        pinned.refresh_visible();
        pinned
    }

    /// Home, Downloads and Desktop for the current user.
    pub fn seeded() -> Self {
        let Some(user_dirs) = UserDirs::new() else {
            log::warn!("No user directories available, starting without pinned directories");
            return Self::default();
        };
        let home = user_dirs.home_dir();
        let downloads = user_dirs
            .download_dir()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| home.join("Downloads"));
        let desktop = user_dirs
            .desktop_dir()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| home.join("Desktop"));
        Self::new(vec![home.to_path_buf(), downloads, desktop])
    }

    pub fn add(&mut self, path: PathBuf) {
        log::info!("Pinned {}", path.display());
        if path.is_dir() {
            self.visible.push(path.clone());
        }
        self.paths.push(path);
    }

    pub fn all(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Pinned paths that were directories at the last check, in pin order.
    pub fn visible(&self) -> &[PathBuf] {
        &self.visible
    }

    pub fn refresh_visible(&mut self) {
        self.visible = self.paths.iter().filter(|p| p.is_dir()).cloned().collect();
    }
}

/// Short label for a pinned path: its last component, or the whole path for a root.
pub fn pinned_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
