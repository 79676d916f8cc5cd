use crate::action::Action;
use crate::app::Sgfm;
use crate::state::pinned_label;
use crate::style;
use eframe::egui;

impl Sgfm {
    pub(crate) fn render_pinned(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("pinned_panel")
            .resizable(true)
            .default_width(self.config.panel.pinned_width)
            .width_range(style::PINNED_MIN..=style::PINNED_MAX)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    ui.heading("Pinned");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .button("➕")
                            .on_hover_text("Pin a directory")
                            .clicked()
                        {
                            self.pending.push(Action::AddPinned);
                        }
                    });
                });
                ui.separator();

                egui::ScrollArea::vertical()
                    .id_salt("pinned_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for path in self.pinned.visible() {
                            let text = egui::RichText::new(format!("📁 {}", pinned_label(path)))
                                .color(style::DIR_COLOR);
                            let response =
                                style::truncated_label_with_sense(ui, text, egui::Sense::click())
                                    .on_hover_text(path.display().to_string());
                            if response.double_clicked() {
                                self.pending.push(Action::OpenPinned(path.clone()));
                            }
                        }
                    });
            });
    }
}
