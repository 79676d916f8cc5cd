// Navigation state - one panel's location and its last listing
use crate::entry::{Entry, EntryKind};
use crate::error::{AppError, Result};
use crate::io::{self, paths};
use std::path::{Path, PathBuf};

const MAX_HISTORY: usize = 100;

/// What `PanelState::open` did with an entry.
#[derive(Debug, PartialEq, Eq)]
pub enum Opened {
    /// The panel moved into the directory.
    Directory(PathBuf),
    /// A file was picked; the caller launches it. The panel did not move.
    File(PathBuf),
}

/// One navigable directory view.
///
/// Every move lists the target first and only commits when that listing succeeds, so a
/// failed navigation leaves the panel exactly where it was.
#[derive(Clone, Debug)]
pub struct PanelState {
    current_path: PathBuf,
    entries: Vec<Entry>,
    pub selected_index: Option<usize>,
    /// Directories this panel has left, most recent last.
    history: Vec<PathBuf>,
}

impl PanelState {
    /// A panel at `start_path` with nothing listed yet. Call `refresh` to populate it.
    pub fn new(start_path: PathBuf) -> Self {
        Self {
            current_path: start_path,
            entries: Vec::new(),
            selected_index: None,
            history: Vec::new(),
        }
    }

    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.selected_index.and_then(|idx| self.entries.get(idx))
    }

    pub fn path_of(&self, entry: &Entry) -> PathBuf {
        self.current_path.join(&entry.name)
    }

    /// Re-lists the current directory. On failure the previous listing is kept.
    pub fn refresh(&mut self) -> Result<()> {
        let entries = io::read_directory(&self.current_path)?;
        self.entries = entries;
        self.selected_index = match self.selected_index {
            Some(_) if self.entries.is_empty() => None,
            Some(idx) => Some(idx.min(self.entries.len() - 1)),
            None => None,
        };
        Ok(())
    }

    pub fn has_history(&self) -> bool {
        !self.history.is_empty()
    }

    fn navigate_to(&mut self, path: PathBuf) -> Result<()> {
        let previous = self.current_path.clone();
        self.enter(path)?;
        if previous != self.current_path {
            if self.history.len() == MAX_HISTORY {
                self.history.remove(0);
            }
            self.history.push(previous);
        }
        Ok(())
    }

    fn enter(&mut self, path: PathBuf) -> Result<()> {
        let entries = io::read_directory(&path)?;
        log::info!("Navigated to {}", path.display());
        self.current_path = path;
        self.entries = entries;
        self.selected_index = None;
        Ok(())
    }

    /// Returns to the most recently left directory. Returns `false` with no history.
    ///
    /// The entry is consumed even when listing it fails, so a directory that has since
    /// vanished does not block the rest of the history.
    pub fn history_back(&mut self) -> Result<bool> {
        let Some(previous) = self.history.pop() else {
            return Ok(false);
        };
        self.enter(previous)?;
        Ok(true)
    }

    pub fn open(&mut self, entry: &Entry) -> Result<Opened> {
        let full_path = self.path_of(entry);
        match entry.kind {
            EntryKind::Directory => {
                self.navigate_to(full_path.clone())?;
                Ok(Opened::Directory(full_path))
            }
            EntryKind::File => Ok(Opened::File(full_path)),
        }
    }

    /// Moves to the parent directory. Returns `false` at the filesystem root.
    pub fn go_back(&mut self) -> Result<bool> {
        let Some(parent) = self.current_path.parent().map(Path::to_path_buf) else {
            return Ok(false);
        };
        let came_from = self.current_path.file_name().map(|n| n.to_os_string());
        self.navigate_to(parent)?;

        // Keep the cursor on the directory we just left.
        if let Some(name) = came_from {
            let name = name.to_string_lossy();
            self.selected_index = self.entries.iter().position(|e| e.name == name);
        }
        Ok(true)
    }

    pub fn go_home(&mut self, home: &Path) -> Result<()> {
        self.navigate_to(home.to_path_buf())
    }

    /// Navigates to a user-typed path. Relative input is taken from the current directory.
    pub fn change_path(&mut self, input: &str) -> Result<()> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(AppError::NotADirectory(input.to_string()));
        }
        let target = paths::resolve(&self.current_path, Path::new(trimmed));
        if !target.is_dir() {
            return Err(AppError::NotADirectory(trimmed.to_string()));
        }
        self.navigate_to(target)
    }

    pub fn open_pinned(&mut self, pinned: &Path) -> Result<()> {
        self.navigate_to(pinned.to_path_buf())
    }
}
