use crate::entry::EntryKind;
use std::path::PathBuf;

/// What the text prompt will create once submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptKind {
    CreateDirectory,
    CreateFile,
}

impl PromptKind {
    pub fn title(&self) -> &'static str {
        match self {
            PromptKind::CreateDirectory => "New Folder",
            PromptKind::CreateFile => "New File",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PromptKind::CreateDirectory => "Enter directory name:",
            PromptKind::CreateFile => "Enter file name:",
        }
    }
}

/// The entry a delete confirmation is waiting on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteTarget {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Normal,
    Prompt(PromptKind),
    DeleteConfirm(DeleteTarget),
    Error(String),
}

// Mode state - modal dialog and its input buffer
pub struct ModeState {
    pub mode: AppMode,
    pub input_buffer: String,
    pub focus_input: bool,
}

impl ModeState {
    pub fn new() -> Self {
        Self {
            mode: AppMode::Normal,
            input_buffer: String::new(),
            focus_input: false,
        }
    }

    pub fn set_mode(&mut self, mode: AppMode) {
        self.mode = mode;
    }

    pub fn open_prompt(&mut self, kind: PromptKind) {
        self.input_buffer.clear();
        self.focus_input = true;
        self.mode = AppMode::Prompt(kind);
    }

    /// Back to `Normal`, dropping whatever was typed.
    pub fn reset(&mut self) {
        self.mode = AppMode::Normal;
        self.input_buffer.clear();
        self.focus_input = false;
    }
}
