pub mod app_state;
pub mod file_chooser;
