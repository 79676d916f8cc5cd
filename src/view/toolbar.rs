// Toolbar, path field and status bar

use crate::action::Action;
use crate::app::Sgfm;
use crate::io::paths;
use crate::state::PromptKind;
use crate::style;
use eframe::egui;

impl Sgfm {
    pub(crate) fn render_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                let at_root = paths::is_root(self.panels.active().current_path());
                let has_selection = self.panels.active().selected_entry().is_some();
                let has_history = self.panels.active().has_history();

                if ui
                    .add_enabled(has_selection, egui::Button::new("📂 Open"))
                    .on_hover_text("Open selected (Enter)")
                    .clicked()
                {
                    self.pending.push(Action::OpenSelected);
                }
                if ui
                    .add_enabled(!at_root, egui::Button::new("⬆ Back"))
                    .on_hover_text("Parent directory (Backspace)")
                    .clicked()
                {
                    self.pending.push(Action::GoBack);
                }
                if ui
                    .add_enabled(has_history, egui::Button::new("↶ History"))
                    .on_hover_text("Previously visited directory (Alt+Left)")
                    .clicked()
                {
                    self.pending.push(Action::HistoryBack);
                }
                if ui.button("🏠 Home").clicked() {
                    self.pending.push(Action::GoHome);
                }
                if ui.button("⟳").on_hover_text("Refresh (F5)").clicked() {
                    self.pending.push(Action::Refresh);
                }

                ui.separator();

                if ui
                    .button("📁 New Folder")
                    .on_hover_text("Ctrl+Shift+N")
                    .clicked()
                {
                    self.pending.push(Action::Prompt(PromptKind::CreateDirectory));
                }
                if ui.button("📄 New File").on_hover_text("Ctrl+N").clicked() {
                    self.pending.push(Action::Prompt(PromptKind::CreateFile));
                }
                if ui
                    .add_enabled(has_selection, egui::Button::new("🗑 Delete"))
                    .on_hover_text("Delete")
                    .clicked()
                {
                    self.pending.push(Action::RequestDelete);
                }
                if ui
                    .add_enabled(has_selection, egui::Button::new("✏ Edit"))
                    .on_hover_text(format!("Open in {} (E)", self.config.editor.program))
                    .clicked()
                {
                    self.pending.push(Action::EditSelected);
                }
            });
            ui.add_space(2.0);
            self.render_path_field(ui);
            ui.add_space(4.0);
        });
    }

    fn render_path_field(&mut self, ui: &mut egui::Ui) {
        if !self.ui.path_input_dirty {
            self.ui.path_input = self
                .panels
                .active()
                .current_path()
                .to_string_lossy()
                .to_string();
        }

        ui.horizontal(|ui| {
            ui.label(format!("{}:", self.panels.active.label()));
            let response = ui.add_sized(
                [ui.available_width(), 20.0],
                egui::TextEdit::singleline(&mut self.ui.path_input),
            );
            if response.changed() {
                self.ui.path_input_dirty = true;
            }
            if response.lost_focus() {
                if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    self.pending
                        .push(Action::ChangePath(self.ui.path_input.clone()));
                } else {
                    self.ui.path_input_dirty = false;
                }
            }
        });
    }

    pub(crate) fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let panel = self.panels.active();
                ui.label(format!("{} items", panel.entries().len()));
                if let Some((message, _)) = &self.ui.info_message {
                    ui.separator();
                    ui.colored_label(egui::Color32::from_rgb(0, 170, 0), message.as_str());
                }
                ui.separator();
                style::truncated_label(ui, panel.current_path().display().to_string());
            });
        });
    }
}
