mod directory;
mod launch;
mod ops;
pub mod paths;

pub use directory::read_directory;
pub use launch::{open_in_editor, open_with_default_app};
pub use ops::{create_directory, create_file, delete};
