//! roster TUI: ratatui application shell.
//!
//! The rendering collaborator for `roster-core`: it maps terminal input to
//! [`roster_core::ModalInput`]s and draws the modal state and result set.

pub mod app;
pub mod event;
pub mod layout;
pub mod theme;
pub mod widgets;

pub use app::App;

/// Start the TUI over `directory` with the given configuration.
pub fn run(directory: roster_core::Directory, config: roster_core::config::Config) -> anyhow::Result<()> {
    App::new(directory, config)?.run()
}
