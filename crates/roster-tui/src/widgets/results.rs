//! Results panel: grouped hits with highlighted matches, below the search box.
//!
//! Each non-empty group gets a heading with its count. People show name and
//! location; vehicles show name, a status badge, and the driver and usage
//! time when known. An empty result set renders a "No results" notice.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};
use roster_core::{search::Span as MatchSpan, Entity, Field, Hit, ResultSet};

pub struct ResultsPanel<'a> {
    results: &'a ResultSet,
    theme: &'a Theme,
}

impl<'a> ResultsPanel<'a> {
    pub fn new(results: &'a ResultSet, theme: &'a Theme) -> Self {
        Self { results, theme }
    }
}

impl Widget for ResultsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::bordered().border_style(self.theme.border_unfocused);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.results.is_empty() {
            let pad = inner.height.saturating_sub(1) / 2;
            let mut lines = vec![Line::default(); pad as usize];
            lines.push(Line::from(Span::styled("No results", self.theme.heading)));
            Paragraph::new(lines).alignment(Alignment::Center).render(inner, buf);
            return;
        }

        let mut lines: Vec<Line> = Vec::new();
        for group in self.results.groups().filter(|g| !g.is_empty()) {
            if !lines.is_empty() {
                lines.push(Line::default());
            }
            lines.push(Line::from(vec![
                Span::styled(group.kind.plural(), self.theme.heading),
                Span::raw(" "),
                Span::styled(format!(" {} ", group.count()), self.theme.count),
            ]));
            for hit in &group.hits {
                lines.extend(hit_lines(hit, inner.width, self.theme));
            }
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

fn hit_lines(hit: &Hit, width: u16, theme: &Theme) -> Vec<Line<'static>> {
    match &hit.entity {
        Entity::Person(p) => {
            let mut name = vec![Span::styled("  ● ", theme.text_muted)];
            name.extend(highlighted(&p.name, hit.highlight(Field::Name), theme.text_primary, theme));
            let mut location = vec![Span::raw("    ")];
            location.extend(highlighted(&p.location, hit.highlight(Field::Location), theme.text_muted, theme));
            vec![Line::from(name), Line::from(location)]
        }
        Entity::Vehicle(v) => {
            let mut name = vec![Span::styled("  ▣ ", theme.text_muted)];
            name.extend(highlighted(&v.name, hit.highlight(Field::Name), theme.text_primary, theme));

            // Right-align the status badge when there is room for it.
            let badge = format!(" {} ", v.status);
            let used = Line::from(name.clone()).width() + badge.chars().count();
            if used < width as usize {
                name.push(Span::raw(" ".repeat(width as usize - used)));
            } else {
                name.push(Span::raw(" "));
            }
            name.push(Span::styled(badge, theme.status_style(v.status)));

            let mut lines = vec![Line::from(name)];
            let mut detail = vec![Span::raw("    ")];
            if let Some(driver) = v.driver.as_deref() {
                detail.push(Span::styled("Driven by ", theme.text_muted));
                detail.extend(highlighted(driver, hit.highlight(Field::Driver), theme.text_muted, theme));
            }
            if let Some(time) = v.time.as_deref() {
                if v.driver.is_some() {
                    detail.push(Span::styled(" · ", theme.text_muted));
                }
                detail.push(Span::styled(time.to_string(), theme.text_muted));
            }
            if detail.len() > 1 {
                lines.push(Line::from(detail));
            }
            lines
        }
    }
}

/// Render `text` with matched spans in the highlight style, or as plain text
/// when the field carries no annotation.
fn highlighted(text: &str, spans: Option<&[MatchSpan]>, base: Style, theme: &Theme) -> Vec<Span<'static>> {
    match spans {
        Some(spans) => spans
            .iter()
            .map(|s| {
                let style = if s.matched { theme.search_highlight } else { base };
                Span::styled(s.text.clone(), style)
            })
            .collect(),
        None => vec![Span::styled(text.to_string(), base)],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
