//! Header bar and background screen shown behind the search modal.

use crate::event::Keymap;
use crate::layout::ScreenLayout;
use crate::theme::{Theme, ThemeKind};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use roster_core::{Directory, EntityKind};

/// Renders the header (search button + theme toggle) and the body hints.
///
/// When `dimmed` is set the whole background is drawn with
/// [`Modifier::DIM`] so the modal stands out.
pub struct Header<'a> {
    layout: &'a ScreenLayout,
    theme: &'a Theme,
    keymap: &'a Keymap,
    directory: &'a Directory,
    show_hints: bool,
    dimmed: bool,
}

impl<'a> Header<'a> {
    pub fn new(
        layout: &'a ScreenLayout,
        theme: &'a Theme,
        keymap: &'a Keymap,
        directory: &'a Directory,
    ) -> Self {
        Self { layout, theme, keymap, directory, show_hints: true, dimmed: false }
    }

    pub fn show_hints(mut self, show: bool) -> Self {
        self.show_hints = show;
        self
    }

    pub fn dimmed(mut self, dimmed: bool) -> Self {
        self.dimmed = dimmed;
        self
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let l = self.layout;
        let t = self.theme;

        Block::bordered()
            .title(" roster ")
            .border_style(t.border_unfocused)
            .render(l.header, buf);

        let chord = self.keymap.open.to_string();
        let label = "⌕ Search here...";
        let pad = (l.search_button.width as usize).saturating_sub(label.chars().count() + chord.len() + 2);
        Paragraph::new(Line::from(vec![
            Span::styled(format!(" {label}{}", " ".repeat(pad)), t.text_muted),
            Span::styled(format!("{chord} "), t.count),
        ]))
        .style(t.filter_inactive)
        .render(l.search_button, buf);

        let toggle = match t.kind {
            ThemeKind::Light => " ☀ light ",
            ThemeKind::Dark => " ☾ dark ",
        };
        Paragraph::new(Line::from(Span::styled(toggle, t.filter_inactive))).render(l.theme_toggle, buf);

        let mut body = vec![
            Line::default(),
            Line::from(Span::styled(
                format!(
                    "  {} entries: {} people, {} vehicles",
                    self.directory.len(),
                    self.directory.count(EntityKind::Person),
                    self.directory.count(EntityKind::Vehicle),
                ),
                t.text_primary,
            )),
        ];
        if self.show_hints {
            body.push(Line::default());
            body.push(Line::from(Span::styled(
                format!(
                    "  {chord} or click the search bar to search  ·  {} help  ·  {} quit",
                    self.keymap.help, self.keymap.quit
                ),
                t.text_muted,
            )));
        }
        Paragraph::new(body).render(l.body, buf);

        if self.dimmed {
            buf.set_style(area, ratatui::style::Style::default().add_modifier(Modifier::DIM));
        }
    }
}
