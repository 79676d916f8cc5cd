use crate::error::{AppError, Result};
use std::path::Path;
use std::process::{Command, ExitStatus};

/// Hands `path` to the desktop's default handler and returns immediately.
///
/// Only launch failures are seen here; whatever the handler does afterwards is not.
pub fn open_with_default_app(path: &Path) -> Result<()> {
    open::that_detached(path).map_err(|source| AppError::Spawn {
        program: "default application".to_string(),
        source,
    })?;
    log::info!("Opened {} with the default application", path.display());
    Ok(())
}

/// Runs `program [args..] path` and waits for it to exit. The UI thread blocks meanwhile.
pub fn open_in_editor(program: &str, args: &[String], path: &Path) -> Result<ExitStatus> {
    log::info!("Editing {} with {}", path.display(), program);
    Command::new(program)
        .args(args)
        .arg(path)
        .status()
        .map_err(|source| AppError::Spawn {
            program: program.to_string(),
            source,
        })
}
