use crate::action::Action;
use crate::config::Config;
use crate::entry::EntryKind;
use crate::error::AppError;
use crate::io::{self, paths};
use crate::state::{
    AppMode, DeleteTarget, ModeState, Opened, PanelId, Panels, PinnedDirectories, PromptKind,
    UIState,
};
use crate::style;
use eframe::egui;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub struct Sgfm {
    pub panels: Panels,
    pub pinned: PinnedDirectories,
    pub mode: ModeState,
    pub ui: UIState,
    pub config: Config,
    // Deferred actions collected while drawing
    pub(crate) pending: Vec<Action>,
}

impl Sgfm {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        config.theme.mode.apply(&cc.egui_ctx);

        let start_path = match std::env::current_dir() {
            Ok(path) => path,
            Err(e) => {
                log::warn!("Working directory unavailable ({}), starting at home", e);
                paths::home_dir().unwrap_or_else(|_| PathBuf::from("/"))
            }
        };
        Self::with_config(config, start_path, PinnedDirectories::seeded())
    }

    /// Builds the controller without a window and lists both panels.
    pub fn with_config(config: Config, start_path: PathBuf, pinned: PinnedDirectories) -> Self {
        let mut app = Self {
            panels: Panels::new(start_path),
            pinned,
            mode: ModeState::new(),
            ui: UIState::new(),
            config,
            pending: Vec::new(),
        };

        for id in [PanelId::Left, PanelId::Right] {
            if let Err(err) = app.panels.get_mut(id).refresh() {
                app.report(err);
            }
        }
        app
    }

    /// Applies one action. Any failure becomes the error dialog.
    pub fn dispatch(&mut self, action: Action) {
        log::debug!("Dispatching {:?}", action);
        if let Err(err) = self.apply(action) {
            self.report(err);
        }
    }

    fn apply(&mut self, action: Action) -> Result<(), AppError> {
        match action {
            Action::Focus(id) => self.panels.focus(id),
            Action::Select(id, index) => {
                self.panels.focus(id);
                self.panels.get_mut(id).selected_index = Some(index);
            }
            Action::SelectDelta(delta) => self.move_selection(delta),
            Action::Open(id, index) => {
                self.panels.focus(id);
                self.panels.get_mut(id).selected_index = Some(index);
                self.open_selected()?;
            }
            Action::OpenSelected => self.open_selected()?,
            Action::SwitchPanel => self.panels.switch_focus(),

            Action::GoBack => {
                self.panels.active_mut().go_back()?;
            }
            Action::HistoryBack => {
                if !self.panels.active_mut().history_back()? {
                    self.ui.set_info("No earlier directory".to_string());
                }
            }
            Action::GoHome => {
                let home = paths::home_dir()?;
                self.panels.active_mut().go_home(&home)?;
            }
            Action::Refresh => {
                self.pinned.refresh_visible();
                self.panels.active_mut().refresh()?;
            }
            Action::ChangePath(input) => {
                self.ui.path_input_dirty = false;
                self.panels.active_mut().change_path(&input)?;
            }
            Action::OpenPinned(path) => {
                if let Err(err) = self.panels.active_mut().open_pinned(&path) {
                    self.pinned.refresh_visible();
                    return Err(err);
                }
            }
            Action::AddPinned => self.pick_pinned_directory(),

            Action::Prompt(kind) => self.mode.open_prompt(kind),
            Action::SubmitPrompt => self.submit_prompt()?,
            Action::RequestDelete => self.request_delete(),
            Action::ConfirmDelete => self.confirm_delete()?,
            Action::EditSelected => self.edit_selected()?,

            Action::Cancel => self.mode.reset(),
        }
        Ok(())
    }

    pub(crate) fn report(&mut self, err: AppError) {
        match err.io_kind() {
            Some(kind) => log::error!("{} [{:?}]", err, kind),
            None => log::error!("{}", err),
        }
        self.mode.reset();
        self.mode.set_mode(AppMode::Error(err.to_string()));
    }

    fn move_selection(&mut self, delta: i32) {
        let panel = self.panels.active_mut();
        let len = panel.entries().len();
        if len == 0 {
            panel.selected_index = None;
            return;
        }
        let next = match panel.selected_index {
            Some(current) if delta < 0 => current.saturating_sub(delta.unsigned_abs() as usize),
            Some(current) => current.saturating_add(delta as usize),
            None if delta < 0 => len - 1,
            None => 0,
        };
        panel.selected_index = Some(next.min(len - 1));
    }

    fn open_selected(&mut self) -> Result<(), AppError> {
        let panel = self.panels.active_mut();
        let Some(entry) = panel.selected_entry().cloned() else {
            return Ok(());
        };
        match panel.open(&entry)? {
            Opened::Directory(path) => log::debug!("Entered {}", path.display()),
            Opened::File(path) => io::open_with_default_app(&path)?,
        }
        Ok(())
    }

    /// Re-lists the active panel after a change in `dir`, and the other panel too if it
    /// is looking at the same place.
    fn refresh_after_change(&mut self, dir: &Path) -> Result<(), AppError> {
        if let Some(other) = self.panels.inactive_showing(dir) {
            if let Err(err) = self.panels.get_mut(other).refresh() {
                log::warn!("Could not refresh {} panel: {}", other.label(), err);
            }
        }
        self.panels.active_mut().refresh()
    }

    fn submit_prompt(&mut self) -> Result<(), AppError> {
        let kind = match &self.mode.mode {
            AppMode::Prompt(kind) => *kind,
            _ => return Ok(()),
        };
        let name = self.mode.input_buffer.clone();
        if name.trim().is_empty() {
            return Ok(());
        }
        self.mode.reset();

        let dir = self.panels.active().current_path().to_path_buf();
        match kind {
            PromptKind::CreateDirectory => {
                io::create_directory(&dir, &name)?;
                self.ui.set_info(format!("Created folder: {}", name));
            }
            PromptKind::CreateFile => {
                io::create_file(&dir, &name)?;
                self.ui.set_info(format!("Created file: {}", name));
            }
        }
        self.refresh_after_change(&dir)
    }

    fn request_delete(&mut self) {
        let panel = self.panels.active();
        let Some(entry) = panel.selected_entry() else {
            self.ui.set_info("Nothing selected".to_string());
            return;
        };
        let target = DeleteTarget {
            path: panel.path_of(entry),
            name: entry.name.clone(),
            kind: entry.kind,
        };
        self.mode.set_mode(AppMode::DeleteConfirm(target));
    }

    fn confirm_delete(&mut self) -> Result<(), AppError> {
        let target = match &self.mode.mode {
            AppMode::DeleteConfirm(target) => target.clone(),
            _ => return Ok(()),
        };
        self.mode.reset();

        io::delete(&target.path, target.kind)?;
        self.ui.set_info(format!("Deleted {}", target.name));
        let dir = self.panels.active().current_path().to_path_buf();
        self.refresh_after_change(&dir)
    }

    fn edit_selected(&mut self) -> Result<(), AppError> {
        let panel = self.panels.active();
        let Some(entry) = panel.selected_entry() else {
            self.ui.set_info("Select a file to edit".to_string());
            return Ok(());
        };
        if entry.kind != EntryKind::File {
            self.ui.set_info("Only files can be edited".to_string());
            return Ok(());
        }
        let path = panel.path_of(entry);

        let editor = &self.config.editor;
        let status = io::open_in_editor(&editor.program, &editor.args, &path)?;
        if !status.success() {
            log::warn!("{} exited with {}", editor.program, status);
            self.ui
                .set_info(format!("{} exited with {}", editor.program, status));
        }
        Ok(())
    }

    fn pick_pinned_directory(&mut self) {
        let picked = rfd::FileDialog::new()
            .set_directory(self.panels.active().current_path())
            .set_title("Pin Directory")
            .pick_folder();
        if let Some(path) = picked {
            self.pinned.add(path);
        }
    }
}

impl eframe::App for Sgfm {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui.clear_expired_messages(style::MESSAGE_TIMEOUT_SECS);
        self.handle_input(ctx);

        self.render_toolbar(ctx);
        self.render_status_bar(ctx);
        self.render_pinned(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |columns| {
                self.render_panel(&mut columns[0], PanelId::Left);
                self.render_panel(&mut columns[1], PanelId::Right);
            });
        });
        self.render_modals(ctx);

        // Apply deferred actions
        for action in std::mem::take(&mut self.pending) {
            self.dispatch(action);
        }

        if self.ui.info_message.is_some() {
            ctx.request_repaint_after(Duration::from_secs(1));
        }
    }
}
