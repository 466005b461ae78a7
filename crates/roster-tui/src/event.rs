//! Semantic application events: crossterm events mapped to a widget-agnostic
//! vocabulary so the app shell never matches on raw key codes.
//!
//! # Usage
//!
//! Build a [`Keymap`] from the `[keybindings]` config section once at startup,
//! then call [`Keymap::map`] on every [`crossterm::event::Event`] with the
//! current [`InputMode`].
//!
//! # Default keybindings
//!
//! | Key(s)                | Mode    | Event                          |
//! |-----------------------|---------|--------------------------------|
//! | `Ctrl+k` (`Super+k`)  | any     | `Open`                         |
//! | `Esc`                 | any     | `Dismiss`                      |
//! | `Ctrl+c`              | any     | `Quit`                         |
//! | `Ctrl+t`              | any     | `ToggleTheme`                  |
//! | `q`                   | browse  | `Quit`                         |
//! | `?`                   | browse  | `ToggleHelp`                   |
//! | `Alt+p`               | typing  | `ToggleFilter(Person)`         |
//! | `Alt+v`               | typing  | `ToggleFilter(Vehicle)`        |
//! | printable char        | typing  | `Char(c)`                      |
//! | `Backspace`           | typing  | `Backspace`                    |
//! | `←` / `→`             | typing  | `CursorLeft` / `CursorRight`   |
//! | left mouse button     | any     | `Click { column, row }`        |
//! | terminal resize       | any     | `Resize(w, h)`                 |

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};
use roster_core::{config::KeybindingsConfig, EntityKind};
use std::str::FromStr;

/// A semantic application event derived from a raw crossterm [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Exit the application.
    Quit,
    /// Open the search modal.
    Open,
    /// Dismiss the topmost overlay (help popup, then search modal).
    Dismiss,
    /// Toggle narrowing of the results to one kind.
    ToggleFilter(EntityKind),
    /// Flip between the light and dark theme.
    ToggleTheme,
    /// Show or hide the keybinding popup.
    ToggleHelp,
    /// A printable character for the query input.
    Char(char),
    /// Delete the character before the cursor.
    Backspace,
    CursorLeft,
    CursorRight,
    /// Left mouse button pressed at this cell.
    Click { column: u16, row: u16 },
    /// The terminal was resized to the given (width, height).
    Resize(u16, u16),
}

/// Which key vocabulary is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Modal closed: single letters are shortcuts.
    Browse,
    /// Modal open: printable characters edit the query.
    Typing,
}

// ---------------------------------------------------------------------------
// Chords
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum KeyChordError {
    #[error("empty key binding")]
    Empty,
    #[error("unknown modifier {0:?} (expected ctrl, alt, shift or super)")]
    UnknownModifier(String),
    #[error("unknown key {0:?}")]
    UnknownKey(String),
}

/// A key plus modifiers, parsed from strings like `Ctrl+k`, `Alt+p` or `Esc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    code: KeyCode,
    modifiers: KeyModifiers,
}

impl KeyChord {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Whether `key` triggers this chord.
    ///
    /// Shift is ignored for character keys (it is already encoded in the
    /// character), and Super stands in for Ctrl so `Cmd+k` works wherever
    /// `Ctrl+k` does.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        if normalise(self.modifiers, self.code) != normalise(key.modifiers, key.code) {
            return false;
        }
        match (self.code, key.code) {
            (KeyCode::Char(a), KeyCode::Char(b)) if !self.modifiers.is_empty() => {
                a.eq_ignore_ascii_case(&b)
            }
            (a, b) => a == b,
        }
    }
}

fn normalise(mut modifiers: KeyModifiers, code: KeyCode) -> KeyModifiers {
    if matches!(code, KeyCode::Char(_)) {
        modifiers.remove(KeyModifiers::SHIFT);
    }
    if modifiers.contains(KeyModifiers::SUPER) {
        modifiers.remove(KeyModifiers::SUPER);
        modifiers.insert(KeyModifiers::CONTROL);
    }
    modifiers
}

impl FromStr for KeyChord {
    type Err = KeyChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(KeyChordError::Empty);
        }
        // A lone "+" is the plus key, not a separator.
        let (mods, key) = match s.rsplit_once('+') {
            Some((mods, "")) => (mods.strip_suffix('+').unwrap_or(mods), "+"),
            Some((mods, key)) => (mods, key),
            None => ("", s),
        };

        let mut modifiers = KeyModifiers::NONE;
        for m in mods.split('+').filter(|m| !m.is_empty()) {
            modifiers |= match m.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => KeyModifiers::CONTROL,
                "alt" | "option" | "meta" => KeyModifiers::ALT,
                "shift" => KeyModifiers::SHIFT,
                "super" | "cmd" | "command" => KeyModifiers::SUPER,
                other => return Err(KeyChordError::UnknownModifier(other.to_string())),
            };
        }

        let code = match key.to_ascii_lowercase().as_str() {
            "esc" | "escape" => KeyCode::Esc,
            "enter" | "return" => KeyCode::Enter,
            "tab" => KeyCode::Tab,
            "backspace" => KeyCode::Backspace,
            "space" => KeyCode::Char(' '),
            f if f.len() > 1 && f.starts_with('f') => f[1..]
                .parse::<u8>()
                .map(KeyCode::F)
                .map_err(|_| KeyChordError::UnknownKey(key.to_string()))?,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return Err(KeyChordError::UnknownKey(key.to_string())),
                }
            }
        };

        Ok(Self { code, modifiers })
    }
}

impl std::fmt::Display for KeyChord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (flag, name) in [
            (KeyModifiers::CONTROL, "Ctrl+"),
            (KeyModifiers::ALT, "Alt+"),
            (KeyModifiers::SHIFT, "Shift+"),
            (KeyModifiers::SUPER, "Super+"),
        ] {
            if self.modifiers.contains(flag) {
                f.write_str(name)?;
            }
        }
        match self.code {
            KeyCode::Esc => f.write_str("Esc"),
            KeyCode::Enter => f.write_str("Enter"),
            KeyCode::Tab => f.write_str("Tab"),
            KeyCode::Backspace => f.write_str("Backspace"),
            KeyCode::F(n) => write!(f, "F{n}"),
            KeyCode::Char(' ') => f.write_str("Space"),
            KeyCode::Char(c) if !self.modifiers.is_empty() => write!(f, "{}", c.to_ascii_uppercase()),
            KeyCode::Char(c) => write!(f, "{c}"),
            other => write!(f, "{other:?}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Keymap
// ---------------------------------------------------------------------------

/// Resolved key bindings.
#[derive(Debug, Clone)]
pub struct Keymap {
    pub open: KeyChord,
    pub dismiss: KeyChord,
    pub toggle_person: KeyChord,
    pub toggle_vehicle: KeyChord,
    pub toggle_theme: KeyChord,
    pub help: KeyChord,
    pub quit: KeyChord,
}

impl Keymap {
    pub fn from_config(cfg: &KeybindingsConfig) -> Result<Self, KeyChordError> {
        Ok(Self {
            open: cfg.open.parse()?,
            dismiss: cfg.dismiss.parse()?,
            toggle_person: cfg.toggle_person.parse()?,
            toggle_vehicle: cfg.toggle_vehicle.parse()?,
            toggle_theme: cfg.toggle_theme.parse()?,
            help: cfg.help.parse()?,
            quit: cfg.quit.parse()?,
        })
    }

    /// Map a raw crossterm [`Event`] to an [`AppEvent`].
    ///
    /// Returns `None` for events with no meaning in `mode` (unbound keys,
    /// mouse moves, focus changes).
    pub fn map(&self, event: Event, mode: InputMode) -> Option<AppEvent> {
        match event {
            Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
            Event::Mouse(m) if m.kind == MouseEventKind::Down(MouseButton::Left) => {
                Some(AppEvent::Click { column: m.column, row: m.row })
            }
            Event::Key(key) => self.map_key(&key, mode),
            _ => None,
        }
    }

    fn map_key(&self, key: &KeyEvent, mode: InputMode) -> Option<AppEvent> {
        // Global shortcuts, honoured whatever has focus
        if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
            return Some(AppEvent::Quit);
        }
        if self.open.matches(key) {
            return Some(AppEvent::Open);
        }
        if self.dismiss.matches(key) {
            return Some(AppEvent::Dismiss);
        }
        if self.toggle_theme.matches(key) {
            return Some(AppEvent::ToggleTheme);
        }

        match mode {
            InputMode::Browse => {
                if self.help.matches(key) {
                    Some(AppEvent::ToggleHelp)
                } else if self.quit.matches(key) {
                    Some(AppEvent::Quit)
                } else {
                    None
                }
            }
            InputMode::Typing => {
                if self.toggle_person.matches(key) {
                    return Some(AppEvent::ToggleFilter(EntityKind::Person));
                }
                if self.toggle_vehicle.matches(key) {
                    return Some(AppEvent::ToggleFilter(EntityKind::Vehicle));
                }
                match key.code {
                    KeyCode::Char(c)
                        if key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT =>
                    {
                        Some(AppEvent::Char(c))
                    }
                    KeyCode::Backspace => Some(AppEvent::Backspace),
                    KeyCode::Left => Some(AppEvent::CursorLeft),
                    KeyCode::Right => Some(AppEvent::CursorRight),
                    _ => None,
                }
            }
        }
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeybindingsConfig::default())
            .expect("default keybindings must parse")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
