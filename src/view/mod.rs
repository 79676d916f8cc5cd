pub mod modals;
pub mod panels;
pub mod pinned;
pub mod toolbar;
