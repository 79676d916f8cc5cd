// Modal rendering: name prompt, delete confirmation, error message

use crate::action::Action;
use crate::app::Sgfm;
use crate::state::AppMode;
use crate::style;
use eframe::egui;

impl Sgfm {
    pub(crate) fn render_modals(&mut self, ctx: &egui::Context) {
        match self.mode.mode.clone() {
            AppMode::Normal => {}
            AppMode::Prompt(kind) => {
                egui::Window::new(kind.title())
                    .collapsible(false)
                    .resizable(false)
                    .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                    .default_width(style::modal_width(ctx))
                    .show(ctx, |ui| {
                        ui.label(kind.label());
                        let response = ui.text_edit_singleline(&mut self.mode.input_buffer);
                        if self.mode.focus_input {
                            response.request_focus();
                            self.mode.focus_input = false;
                        }
                        let submitted =
                            response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                        let blank = self.mode.input_buffer.trim().is_empty();

                        ui.add_space(8.0);
                        ui.horizontal(|ui| {
                            if ui.add_enabled(!blank, egui::Button::new("Create")).clicked()
                                || (submitted && !blank)
                            {
                                self.pending.push(Action::SubmitPrompt);
                            }
                            if ui.button("Cancel").clicked() {
                                self.pending.push(Action::Cancel);
                            }
                        });
                    });
            }
            AppMode::DeleteConfirm(target) => {
                egui::Window::new("Confirm")
                    .collapsible(false)
                    .resizable(false)
                    .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                    .default_width(style::modal_width(ctx))
                    .show(ctx, |ui| {
                        ui.label(format!(
                            "Are you sure you want to delete '{}'?",
                            target.name
                        ));
                        if target.kind.is_dir() {
                            ui.weak("Only empty folders can be deleted.");
                        }
                        ui.add_space(8.0);
                        ui.horizontal(|ui| {
                            if ui.button("Yes (y)").clicked() {
                                self.pending.push(Action::ConfirmDelete);
                            }
                            if ui.button("No (n)").clicked() {
                                self.pending.push(Action::Cancel);
                            }
                        });
                    });
            }
            AppMode::Error(message) => {
                egui::Window::new("Error")
                    .collapsible(false)
                    .resizable(false)
                    .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                    .default_width(style::modal_width(ctx))
                    .show(ctx, |ui| {
                        ui.colored_label(egui::Color32::RED, message.as_str());
                        ui.add_space(8.0);
                        if ui.button("OK").clicked() {
                            self.pending.push(Action::Cancel);
                        }
                    });
            }
        }
    }
}
