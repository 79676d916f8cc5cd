// Input handling for sgfm
// Keyboard shortcuts, translated into deferred actions

use crate::action::Action;
use crate::app::Sgfm;
use crate::state::{AppMode, PromptKind};
use eframe::egui;

impl Sgfm {
    pub fn handle_input(&mut self, ctx: &egui::Context) {
        // 1. Modal dialogs
        match &self.mode.mode {
            AppMode::DeleteConfirm(_) => {
                if ctx.input(|i| i.key_pressed(egui::Key::Y) || i.key_pressed(egui::Key::Enter)) {
                    self.pending.push(Action::ConfirmDelete);
                }
                if ctx.input(|i| i.key_pressed(egui::Key::N) || i.key_pressed(egui::Key::Escape)) {
                    self.pending.push(Action::Cancel);
                }
                return;
            }
            AppMode::Error(_) => {
                if ctx.input(|i| i.key_pressed(egui::Key::Escape) || i.key_pressed(egui::Key::Enter)) {
                    self.pending.push(Action::Cancel);
                }
                return;
            }
            AppMode::Prompt(_) => {
                // Enter is read by the prompt's text field itself
                if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
                    self.pending.push(Action::Cancel);
                }
                return;
            }
            AppMode::Normal => {}
        }

        // 2. Leave keys alone while the path field is being edited
        if ctx.wants_keyboard_input() {
            return;
        }

        // 3. Normal mode shortcuts
        if ctx.input(|i| i.key_pressed(egui::Key::Backspace)) {
            self.pending.push(Action::GoBack);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowLeft) && i.modifiers.alt) {
            self.pending.push(Action::HistoryBack);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.pending.push(Action::OpenSelected);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowDown)) {
            self.pending.push(Action::SelectDelta(1));
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowUp)) {
            self.pending.push(Action::SelectDelta(-1));
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Tab)) {
            self.pending.push(Action::SwitchPanel);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Delete)) {
            self.pending.push(Action::RequestDelete);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::F5)) {
            self.pending.push(Action::Refresh);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::E) && !i.modifiers.any()) {
            self.pending.push(Action::EditSelected);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::N) && i.modifiers.command) {
            let kind = if ctx.input(|i| i.modifiers.shift) {
                PromptKind::CreateDirectory
            } else {
                PromptKind::CreateFile
            };
            self.pending.push(Action::Prompt(kind));
        }
    }
}
