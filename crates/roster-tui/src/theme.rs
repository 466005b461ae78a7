//! Colour themes for the roster TUI.
//!
//! Themes are defined as TOML files embedded in the binary via
//! [`include_str!`]. There are two: [`ThemeKind::Light`] (the default) and
//! [`ThemeKind::Dark`], switched at runtime with the theme toggle.

use config::{Config, File, FileFormat};
use ratatui::style::{Color, Modifier, Style};
use roster_core::VehicleStatus;
use serde::Deserialize;

const LIGHT_THEME_SRC: &str = include_str!("themes/light.toml");
const DARK_THEME_SRC: &str = include_str!("themes/dark.toml");

// ---------------------------------------------------------------------------
// Raw (serde) types, mirroring the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawStyle {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    dim: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    underlined: bool,
}

impl From<RawStyle> for Style {
    fn from(raw: RawStyle) -> Self {
        let modifiers = [
            (raw.bold, Modifier::BOLD),
            (raw.dim, Modifier::DIM),
            (raw.italic, Modifier::ITALIC),
            (raw.underlined, Modifier::UNDERLINED),
        ]
        .into_iter()
        .filter_map(|(on, m)| on.then_some(m))
        .fold(Modifier::empty(), |acc, m| acc | m);

        let mut style = Style::default().add_modifier(modifiers);
        if let Some(fg) = raw.fg.as_deref().and_then(parse_color) {
            style = style.fg(fg);
        }
        if let Some(bg) = raw.bg.as_deref().and_then(parse_color) {
            style = style.bg(bg);
        }
        style
    }
}

#[derive(Debug, Deserialize)]
struct RawText {
    primary: RawStyle,
    muted: RawStyle,
    heading: RawStyle,
    count: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawBorders {
    focused: RawStyle,
    unfocused: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawSearch {
    highlight: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawFilters {
    active: RawStyle,
    inactive: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawStatus {
    in_use: RawStyle,
    maintenance: RawStyle,
    off: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    text: RawText,
    borders: RawBorders,
    search: RawSearch,
    filters: RawFilters,
    status: RawStatus,
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Light,
    Dark,
}

impl ThemeKind {
    /// Parse the `[ui] theme` config value. Unknown names fall back to light.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => ThemeKind::Dark,
            _ => ThemeKind::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeKind::Light => ThemeKind::Dark,
            ThemeKind::Dark => ThemeKind::Light,
        }
    }
}

/// Application colour theme. All styles are pre-resolved ratatui [`Style`]
/// values.
#[derive(Debug, Clone)]
pub struct Theme {
    pub kind: ThemeKind,

    pub text_primary: Style,
    pub text_muted: Style,
    /// Result group titles.
    pub heading: Style,
    /// Count badge beside a group title.
    pub count: Style,

    pub border_focused: Style,
    pub border_unfocused: Style,

    /// Inline highlight applied to matched spans.
    pub search_highlight: Style,

    pub filter_active: Style,
    pub filter_inactive: Style,

    status_in_use: Style,
    status_maintenance: Style,
    status_off: Style,
}

impl Theme {
    /// Load one of the embedded themes.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed; the unit tests load both.
    pub fn load(kind: ThemeKind) -> Self {
        let src = match kind {
            ThemeKind::Light => LIGHT_THEME_SRC,
            ThemeKind::Dark => DARK_THEME_SRC,
        };
        Self::from_toml_str(src, kind).expect("embedded theme must be valid TOML")
    }

    pub fn load_default() -> Self {
        Self::load(ThemeKind::Light)
    }

    /// Parse a theme from a TOML string.
    pub fn from_toml_str(src: &str, kind: ThemeKind) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            kind,
            text_primary: raw.text.primary.into(),
            text_muted: raw.text.muted.into(),
            heading: raw.text.heading.into(),
            count: raw.text.count.into(),
            border_focused: raw.borders.focused.into(),
            border_unfocused: raw.borders.unfocused.into(),
            search_highlight: raw.search.highlight.into(),
            filter_active: raw.filters.active.into(),
            filter_inactive: raw.filters.inactive.into(),
            status_in_use: raw.status.in_use.into(),
            status_maintenance: raw.status.maintenance.into(),
            status_off: raw.status.off.into(),
        })
    }

    /// Badge style for a vehicle status.
    pub fn status_style(&self, status: VehicleStatus) -> Style {
        match status {
            VehicleStatus::InUse => self.status_in_use,
            VehicleStatus::Maintenance => self.status_maintenance,
            VehicleStatus::Off => self.status_off,
        }
    }

    pub fn filter_style(&self, active: bool) -> Style {
        if active {
            self.filter_active
        } else {
            self.filter_inactive
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Colour names, `#rrggbb` and bare indices follow ratatui's parser;
/// `indexed:N` is accepted as well. Unknown names leave the colour unset.
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    match s.strip_prefix("indexed:") {
        Some(n) => n.parse().ok().map(Color::Indexed),
        None => s.parse().ok(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
