// Layout constants and theme handling for sgfm

use crate::entry::{Entry, FileType};
use eframe::egui;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn apply(&self, ctx: &egui::Context) {
        match self {
            Theme::Light => ctx.set_visuals(egui::Visuals::light()),
            Theme::Dark => ctx.set_visuals(egui::Visuals::dark()),
        }
    }
}

// --- Sizing ---
pub const ICON_SIZE: f32 = 14.0;
pub const ICON_COL_WIDTH: f32 = 30.0;
pub const KIND_COL_WIDTH: f32 = 80.0;
pub const ROW_HEIGHT: f32 = 24.0;
pub const HEADER_HEIGHT: f32 = 20.0;

// --- Panel constraints ---
pub const PINNED_MIN: f32 = 120.0;
pub const PINNED_MAX: f32 = 400.0;

// --- Colors ---
pub const DIR_COLOR: egui::Color32 = egui::Color32::from_rgb(120, 180, 255);
pub const ACTIVE_HEADER: egui::Color32 = egui::Color32::from_rgb(120, 180, 255);
pub const SCRIPT_COLOR: egui::Color32 = egui::Color32::from_rgb(100, 200, 100);
pub const IMAGE_COLOR: egui::Color32 = egui::Color32::from_rgb(200, 120, 220);
pub const TEXT_COLOR: egui::Color32 = egui::Color32::from_rgb(150, 210, 150);
pub const MEDIA_COLOR: egui::Color32 = egui::Color32::from_rgb(230, 200, 90);

// --- Modals ---
pub const MODAL_MIN_WIDTH: f32 = 300.0;
pub const MODAL_MAX_WIDTH: f32 = 500.0;
pub const MODAL_WIDTH_RATIO: f32 = 0.6;

// --- Timing ---
pub const MESSAGE_TIMEOUT_SECS: u64 = 5;

// --- Helper functions ---

/// Name colour for a table row. `None` keeps the theme's text colour.
pub fn entry_color(entry: &Entry) -> Option<egui::Color32> {
    match entry.file_type() {
        None => Some(DIR_COLOR),
        Some(FileType::Script) => Some(SCRIPT_COLOR),
        Some(FileType::Image) => Some(IMAGE_COLOR),
        Some(FileType::Text) => Some(TEXT_COLOR),
        Some(FileType::Media) => Some(MEDIA_COLOR),
        Some(FileType::Other) => None,
    }
}

pub fn modal_width(ctx: &egui::Context) -> f32 {
    let width = ctx.input(|i| {
        i.viewport()
            .inner_rect
            .map(|r| r.width())
            .unwrap_or(800.0)
    });
    (width * MODAL_WIDTH_RATIO).clamp(MODAL_MIN_WIDTH, MODAL_MAX_WIDTH)
}

pub fn truncated_label(
    ui: &mut egui::Ui,
    text: impl Into<egui::WidgetText>,
) -> egui::Response {
    ui.add(egui::Label::new(text).truncate())
}

pub fn truncated_label_with_sense(
    ui: &mut egui::Ui,
    text: impl Into<egui::WidgetText>,
    sense: egui::Sense,
) -> egui::Response {
    ui.add(egui::Label::new(text).truncate().sense(sense))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntryKind;

    #[test]
    fn test_entry_colors() {
        let folder = Entry::new("music", EntryKind::Directory);
        assert_eq!(entry_color(&folder), Some(DIR_COLOR));
        let image = Entry::new("cat.gif", EntryKind::File);
        assert_eq!(entry_color(&image), Some(IMAGE_COLOR));
        let plain = Entry::new("Cargo.lock", EntryKind::File);
        assert_eq!(entry_color(&plain), None);
    }
}
