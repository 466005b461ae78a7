//! Ratatui widgets for the roster TUI.

pub mod header;
pub mod help;
pub mod results;
pub mod search_box;
