// Panel rendering for sgfm
// Two independent (name, kind) tables side by side

use crate::action::Action;
use crate::app::Sgfm;
use crate::state::PanelId;
use crate::style;
use eframe::egui;

impl Sgfm {
    pub(crate) fn render_panel(&mut self, ui: &mut egui::Ui, id: PanelId) {
        let is_active = self.panels.active == id;
        let panel = self.panels.get(id);

        ui.push_id(id, |ui| {
            let title = egui::RichText::new(panel.current_path().display().to_string()).strong();
            let title = if is_active {
                title.color(style::ACTIVE_HEADER)
            } else {
                title
            };
            if style::truncated_label_with_sense(ui, title, egui::Sense::click()).clicked() {
                self.pending.push(Action::Focus(id));
            }
            ui.separator();

            use egui_extras::{Column, TableBuilder};
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .resizable(false)
                .sense(egui::Sense::click())
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::exact(style::ICON_COL_WIDTH))
                .column(Column::remainder().clip(true))
                .column(Column::exact(style::KIND_COL_WIDTH));

            if is_active {
                if let Some(idx) = panel.selected_index {
                    table = table.scroll_to_row(idx, None);
                }
            }

            table
                .header(style::HEADER_HEIGHT, |mut header| {
                    header.col(|ui| {
                        ui.label("");
                    });
                    header.col(|ui| {
                        ui.strong("Name");
                    });
                    header.col(|ui| {
                        ui.strong("Type");
                    });
                })
                .body(|body| {
                    body.rows(style::ROW_HEIGHT, panel.entries().len(), |mut row| {
                        let row_index = row.index();
                        let entry = &panel.entries()[row_index];
                        row.set_selected(panel.selected_index == Some(row_index));

                        row.col(|ui| {
                            ui.label(egui::RichText::new(entry.get_icon()).size(style::ICON_SIZE));
                        });
                        row.col(|ui| {
                            let text = egui::RichText::new(&entry.name);
                            let text = match style::entry_color(entry) {
                                Some(color) => text.color(color),
                                None => text,
                            };
                            style::truncated_label(ui, text);
                        });
                        row.col(|ui| {
                            ui.label(entry.kind.label());
                        });

                        let response = row.response();
                        if response.clicked() {
                            self.pending.push(Action::Select(id, row_index));
                        }
                        if response.double_clicked() {
                            self.pending.push(Action::Open(id, row_index));
                        }
                        response.context_menu(|ui| {
                            if ui.button("📂 Open").clicked() {
                                self.pending.push(Action::Open(id, row_index));
                                ui.close();
                            }
                            if !entry.is_dir() && ui.button("✏ Edit").clicked() {
                                self.pending.push(Action::Select(id, row_index));
                                self.pending.push(Action::EditSelected);
                                ui.close();
                            }
                            ui.separator();
                            if ui.button("🗑 Delete").clicked() {
                                self.pending.push(Action::Select(id, row_index));
                                self.pending.push(Action::RequestDelete);
                                ui.close();
                            }
                        });
                    });
                });

            // Clicking empty space below the rows still focuses the panel
            let rest = ui.allocate_response(ui.available_size(), egui::Sense::click());
            if rest.clicked() {
                self.pending.push(Action::Focus(id));
            }
        });
    }
}
