//! Configuration types for roster.
//!
//! [`Config::load`] reads `~/.config/roster/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::load_from`] reads an
//! explicit path. [`Config::defaults`] returns the same defaults without
//! touching the filesystem (useful in tests).

use crate::lifecycle::ModalOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[ui]
theme           = "light"
modal_width_pct = 60
show_hints      = true

[keybindings]
open           = "Ctrl+k"
dismiss        = "Esc"
toggle_person  = "Alt+p"
toggle_vehicle = "Alt+v"
toggle_theme   = "Ctrl+t"
help           = "?"
quit           = "q"

[search]
reset_on_close = false
trim_query     = false
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// `light` or `dark`.
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_modal_width_pct")]
    pub modal_width_pct: u16,
    /// Show the key hints in the header and modal footer.
    #[serde(default = "default_show_hints")]
    pub show_hints: bool,
}

fn default_theme() -> String { "light".to_string() }
fn default_modal_width_pct() -> u16 { 60 }
fn default_show_hints() -> bool { true }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            modal_width_pct: default_modal_width_pct(),
            show_hints: default_show_hints(),
        }
    }
}

/// `[keybindings]` section of `config.toml`. Values are chord strings such
/// as `Ctrl+k`, `Alt+p` or `Esc`, parsed by the TUI.
#[derive(Debug, Clone, Deserialize)]
pub struct KeybindingsConfig {
    #[serde(default = "default_open")]
    pub open: String,
    #[serde(default = "default_dismiss")]
    pub dismiss: String,
    #[serde(default = "default_toggle_person")]
    pub toggle_person: String,
    #[serde(default = "default_toggle_vehicle")]
    pub toggle_vehicle: String,
    #[serde(default = "default_toggle_theme")]
    pub toggle_theme: String,
    #[serde(default = "default_help")]
    pub help: String,
    #[serde(default = "default_quit")]
    pub quit: String,
}

fn default_open() -> String { "Ctrl+k".to_string() }
fn default_dismiss() -> String { "Esc".to_string() }
fn default_toggle_person() -> String { "Alt+p".to_string() }
fn default_toggle_vehicle() -> String { "Alt+v".to_string() }
fn default_toggle_theme() -> String { "Ctrl+t".to_string() }
fn default_help() -> String { "?".to_string() }
fn default_quit() -> String { "q".to_string() }

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            open: default_open(),
            dismiss: default_dismiss(),
            toggle_person: default_toggle_person(),
            toggle_vehicle: default_toggle_vehicle(),
            toggle_theme: default_toggle_theme(),
            help: default_help(),
            quit: default_quit(),
        }
    }
}

/// `[search]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub reset_on_close: bool,
    #[serde(default)]
    pub trim_query: bool,
}

impl SearchConfig {
    pub fn modal_options(&self) -> ModalOptions {
        ModalOptions {
            reset_on_close: self.reset_on_close,
            trim_query: self.trim_query,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/roster/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
            tracing::info!(path = %path.display(), "wrote default config");
        }

        Self::load_from(&path)
    }

    /// Load an explicit file layered on top of the built-in defaults. The
    /// format follows the file extension (TOML, YAML or JSON).
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(true))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("roster")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
