mod action;
mod app;
mod config;
mod entry;
mod error;
mod input;
mod io;
mod state;
mod style;
mod view;

use app::Sgfm;
use config::Config;
use eframe::egui;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("SGFM - Simple GUI File Manager"),
        ..Default::default()
    };

    eframe::run_native(
        "sgfm",
        options,
        Box::new(|cc| Ok(Box::new(Sgfm::new(cc, config)))),
    )
}
