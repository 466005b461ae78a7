//! Search box: query input, close button, filter chips and footer hints.
//!
//! # Editing
//!
//! - `Char(c)` inserts at the cursor.
//! - `Backspace` deletes the character before the cursor.
//! - `CursorLeft` / `CursorRight` move the cursor by one character.

use crate::event::{AppEvent, KeyChord};
use crate::layout::{chip_label, ModalLayout, INPUT_PREFIX_WIDTH};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};
use roster_core::EntityKind;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct QueryInputState {
    /// The text typed by the user.
    pub text: String,
    /// Byte offset of the cursor within `text`.
    pub cursor: usize,
}

impl QueryInputState {
    /// Replace the text and move the cursor to the end.
    pub fn set(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.text.len();
    }

    /// Apply an editing event. Returns `true` if the text changed.
    pub fn handle(&mut self, event: &AppEvent) -> bool {
        match event {
            AppEvent::Char(c) => {
                self.text.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                tracing::debug!(query = %self.text, cursor = self.cursor, "query: char inserted");
                true
            }
            AppEvent::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                let prev = self.prev_boundary();
                self.text.remove(prev);
                self.cursor = prev;
                tracing::debug!(query = %self.text, cursor = self.cursor, "query: backspace");
                true
            }
            AppEvent::CursorLeft => {
                self.cursor = self.prev_boundary();
                false
            }
            AppEvent::CursorRight => {
                if self.cursor < self.text.len() {
                    self.cursor = self.text[self.cursor..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| self.cursor + i)
                        .unwrap_or(self.text.len());
                }
                false
            }
            _ => false,
        }
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    /// Absolute terminal position of the text cursor within `input`.
    pub fn cursor_position(&self, input: Rect) -> (u16, u16) {
        let col = u16::try_from(self.text[..self.cursor].chars().count()).unwrap_or(u16::MAX);
        let x = input
            .x
            .saturating_add(INPUT_PREFIX_WIDTH)
            .saturating_add(col)
            .min(input.right().saturating_sub(1));
        (x, input.y)
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct SearchBox<'a> {
    input: &'a QueryInputState,
    filter: Option<EntityKind>,
    total: usize,
    layout: &'a ModalLayout,
    theme: &'a Theme,
    /// `None` hides the footer hints.
    hints: Option<(&'a KeyChord, &'a KeyChord)>,
}

impl<'a> SearchBox<'a> {
    pub fn new(
        input: &'a QueryInputState,
        filter: Option<EntityKind>,
        total: usize,
        layout: &'a ModalLayout,
        theme: &'a Theme,
    ) -> Self {
        Self { input, filter, total, layout, theme, hints: None }
    }

    /// Show the filter shortcuts in the footer.
    pub fn hints(mut self, person: &'a KeyChord, vehicle: &'a KeyChord) -> Self {
        self.hints = Some((person, vehicle));
        self
    }
}

impl Widget for SearchBox<'_> {
    /// Renders into the rects of `self.layout`; `area` is the search box.
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        Block::bordered()
            .border_style(self.theme.border_focused)
            .render(area, buf);

        let l = self.layout;

        let query = if self.input.text.is_empty() {
            Span::styled("Search...", self.theme.text_muted)
        } else {
            Span::raw(self.input.text.as_str())
        };
        Paragraph::new(Line::from(vec![Span::styled("⌕ ", self.theme.text_muted), query]))
            .render(l.input, buf);

        Paragraph::new(Line::from(Span::styled(" ✕ ", self.theme.text_muted))).render(l.close_button, buf);

        for kind in EntityKind::ALL {
            let active = self.filter == Some(kind);
            Paragraph::new(Line::from(Span::styled(chip_label(kind), self.theme.filter_style(active))))
                .render(l.chip(kind), buf);
        }

        let mut footer = vec![
            Span::styled("esc", self.theme.count),
            Span::styled(" to close", self.theme.text_muted),
        ];
        if let Some((person, vehicle)) = self.hints {
            footer.push(Span::styled(
                format!("  ·  {person} people  ·  {vehicle} vehicles"),
                self.theme.text_muted,
            ));
        }
        Paragraph::new(Line::from(footer)).render(l.footer, buf);

        let count = format!("{} result{}", self.total, if self.total == 1 { "" } else { "s" });
        let x = l.footer.right().saturating_sub(count.chars().count() as u16);
        if x > l.footer.x {
            buf.set_string(x, l.footer.y, count, Style::default().add_modifier(Modifier::DIM));
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> QueryInputState {
        let mut input = QueryInputState::default();
        for c in s.chars() {
            input.handle(&AppEvent::Char(c));
        }
        input
    }

    #[test]
    fn char_insert_and_backspace() {
        let mut input = typed("foo");
        assert_eq!(input.text, "foo");
        assert_eq!(input.cursor, 3);
        assert!(input.handle(&AppEvent::Backspace));
        assert_eq!(input.text, "fo");
        assert_eq!(input.cursor, 2);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut input = QueryInputState::default();
        assert!(!input.handle(&AppEvent::Backspace));
    }

    #[test]
    fn cursor_moves_over_multibyte_chars() {
        let mut input = typed("né");
        input.handle(&AppEvent::CursorLeft);
        assert_eq!(input.cursor, 1);
        input.handle(&AppEvent::Char('x'));
        assert_eq!(input.text, "nxé");
        input.handle(&AppEvent::CursorRight);
        assert_eq!(input.cursor, input.text.len());
    }

    #[test]
    fn set_moves_cursor_to_end() {
        let mut input = typed("abc");
        input.set("");
        assert_eq!(input.cursor, 0);
        input.set("tresor");
        assert_eq!(input.cursor, 6);
    }

    #[test]
    fn cursor_position_accounts_for_prefix() {
        let input = typed("ab");
        let area = Rect::new(10, 5, 40, 1);
        assert_eq!(input.cursor_position(area), (14, 5));
    }

    #[test]
    fn cursor_position_clamps_queries_longer_than_u16() {
        let mut input = QueryInputState::default();
        input.set(&"x".repeat(70_000));

        let area = Rect::new(10, 5, 40, 1);
        assert_eq!(input.cursor_position(area), (area.right() - 1, 5));

        let edge = Rect::new(u16::MAX - 20, 0, 20, 1);
        assert_eq!(input.cursor_position(edge), (edge.right() - 1, 0));
    }
}
