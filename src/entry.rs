use std::fmt;
use std::path::Path;

/// What a directory child is, as far as the browser cares.
///
/// Symlinks, devices, sockets and the like fold into these two kinds: anything that
/// resolves to a directory is a `Directory`, everything else is a `File`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::File => "File",
            EntryKind::Directory => "Folder",
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, EntryKind::Directory)
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Display grouping for files, picked from the extension. Only affects icon and colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FileType {
    Script,
    Image,
    Text,
    Media,
    Other,
}

impl FileType {
    pub fn from_name(name: &str) -> Self {
        let extension = Path::new(name)
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "sh" | "bash" | "zsh" => FileType::Script,
            "jpg" | "jpeg" | "png" | "gif" | "bmp" => FileType::Image,
            "txt" | "md" | "log" | "csv" | "ini" | "conf" => FileType::Text,
            "mp3" | "wav" | "flac" | "mp4" | "avi" | "mkv" => FileType::Media,
            _ => FileType::Other,
        }
    }
}

/// One child of a listed directory. Built fresh on every listing, never cached.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
}

impl Entry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }

    /// `None` for directories.
    pub fn file_type(&self) -> Option<FileType> {
        match self.kind {
            EntryKind::Directory => None,
            EntryKind::File => Some(FileType::from_name(&self.name)),
        }
    }

    pub fn get_icon(&self) -> &'static str {
        match self.file_type() {
            None => "📁",
            Some(FileType::Script) => "📜",
            Some(FileType::Image) => "🖼",
            Some(FileType::Text) => "📝",
            Some(FileType::Media) => "🎵",
            Some(FileType::Other) => "📄",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(EntryKind::Directory.label(), "Folder");
        assert_eq!(EntryKind::File.to_string(), "File");
    }

    #[test]
    fn test_entry_is_dir() {
        assert!(Entry::new("src", EntryKind::Directory).is_dir());
        assert!(!Entry::new("main.rs", EntryKind::File).is_dir());
    }

    #[test]
    fn test_file_type_from_extension() {
        assert_eq!(FileType::from_name("build.sh"), FileType::Script);
        assert_eq!(FileType::from_name("Photo.JPG"), FileType::Image);
        assert_eq!(FileType::from_name("notes.md"), FileType::Text);
        assert_eq!(FileType::from_name("song.flac"), FileType::Media);
        assert_eq!(FileType::from_name("main.rs"), FileType::Other);
        assert_eq!(FileType::from_name("Makefile"), FileType::Other);
        // Only the last extension counts
        assert_eq!(FileType::from_name("backup.sh.gz"), FileType::Other);
    }

    #[test]
    fn test_icons_follow_file_type() {
        let pictures = Entry::new("pictures.png", EntryKind::Directory);
        assert_eq!(pictures.file_type(), None);
        assert_eq!(pictures.get_icon(), "📁");
        assert_eq!(Entry::new("run.sh", EntryKind::File).get_icon(), "📜");
        assert_eq!(Entry::new("clip.mkv", EntryKind::File).get_icon(), "🎵");
        assert_eq!(Entry::new("data.bin", EntryKind::File).get_icon(), "📄");
    }
}
