pub mod mode;
pub mod navigation;
pub mod panels;
pub mod pinned;
pub mod ui;

pub use mode::{AppMode, DeleteTarget, ModeState, PromptKind};
pub use navigation::{Opened, PanelState};
pub use panels::{PanelId, Panels};
pub use pinned::{pinned_label, PinnedDirectories};
pub use ui::UIState;
