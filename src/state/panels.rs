// Two side-by-side panels and which one has focus
use crate::state::PanelState;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelId {
    Left,
    Right,
}

impl PanelId {
    pub fn other(self) -> Self {
        match self {
            PanelId::Left => PanelId::Right,
            PanelId::Right => PanelId::Left,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PanelId::Left => "Left",
            PanelId::Right => "Right",
        }
    }
}

pub struct Panels {
    pub left: PanelState,
    pub right: PanelState,
    pub active: PanelId,
}

impl Panels {
    /// Both panels start at `start_path`; the right one has focus.
    pub fn new(start_path: PathBuf) -> Self {
        Self {
            left: PanelState::new(start_path.clone()),
            right: PanelState::new(start_path),
            active: PanelId::Right,
        }
    }

    pub fn get(&self, id: PanelId) -> &PanelState {
        match id {
            PanelId::Left => &self.left,
            PanelId::Right => &self.right,
        }
    }

    pub fn get_mut(&mut self, id: PanelId) -> &mut PanelState {
        match id {
            PanelId::Left => &mut self.left,
            PanelId::Right => &mut self.right,
        }
    }

    pub fn active(&self) -> &PanelState {
        self.get(self.active)
    }

    pub fn active_mut(&mut self) -> &mut PanelState {
        self.get_mut(self.active)
    }

    pub fn focus(&mut self, id: PanelId) {
        self.active = id;
    }

    pub fn switch_focus(&mut self) {
        self.active = self.active.other();
    }

    /// The inactive panel, if it currently shows `dir`.
    pub fn inactive_showing(&self, dir: &Path) -> Option<PanelId> {
        let other = self.active.other();
        (self.get(other).current_path() == dir).then_some(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_switching() {
        let mut panels = Panels::new(std::env::temp_dir());
        assert_eq!(panels.active, PanelId::Right);
        panels.switch_focus();
        assert_eq!(panels.active, PanelId::Left);
        panels.focus(PanelId::Right);
        assert_eq!(panels.active, PanelId::Right);
    }

    #[test]
    fn test_inactive_showing() {
        let tmp = std::env::temp_dir();
        let panels = Panels::new(tmp.clone());
        assert_eq!(panels.inactive_showing(&tmp), Some(PanelId::Left));
        assert_eq!(panels.inactive_showing(&tmp.join("elsewhere")), None);
    }
}
