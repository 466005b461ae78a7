//! Help popup: centred floating overlay listing the active keybindings.
//!
//! Toggle with `?` while the search modal is closed; close with `?`,
//! `Escape` or any click.

use crate::event::Keymap;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

pub struct HelpPopup<'a> {
    keymap: &'a Keymap,
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    pub fn new(keymap: &'a Keymap, theme: &'a Theme) -> Self {
        Self { keymap, theme }
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(64, 14, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" roster keybindings (? to close) ")
            .border_style(self.theme.border_focused.add_modifier(Modifier::BOLD));

        let inner = block.inner(popup);
        block.render(popup, buf);

        let k = self.keymap;
        let bindings: [(String, &str); 10] = [
            (k.open.to_string(), "Open the search modal"),
            (k.dismiss.to_string(), "Close the modal or this popup"),
            (k.toggle_person.to_string(), "Only people (again to clear)"),
            (k.toggle_vehicle.to_string(), "Only vehicles (again to clear)"),
            (k.toggle_theme.to_string(), "Switch light / dark theme"),
            ("← / →".to_string(), "Move the query cursor"),
            ("Click outside".to_string(), "Close the modal"),
            (k.help.to_string(), "Toggle this help popup"),
            (k.quit.to_string(), "Quit (modal closed)"),
            ("Ctrl+C".to_string(), "Quit"),
        ];

        let lines: Vec<Line> = bindings
            .into_iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<18}", key),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(desc),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
