use crate::state::{PanelId, PromptKind};
use std::path::PathBuf;

/// A user intent collected while drawing a frame and applied once the frame is laid out.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Panels
    Focus(PanelId),
    Select(PanelId, usize),
    SelectDelta(i32),
    Open(PanelId, usize),
    OpenSelected,
    SwitchPanel,

    // Navigation (active panel)
    GoBack,
    HistoryBack,
    GoHome,
    Refresh,
    ChangePath(String),
    OpenPinned(PathBuf),
    AddPinned,

    // File operations (active panel)
    Prompt(PromptKind),
    SubmitPrompt,
    RequestDelete,
    ConfirmDelete,
    EditSelected,

    // Modals
    Cancel,
}
