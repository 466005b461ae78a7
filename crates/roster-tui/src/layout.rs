//! Screen geometry shared by rendering and mouse hit-testing.
//!
//! Both functions are pure: the draw pass and the click handler call them
//! with the same terminal area and therefore agree on where every control is.

use ratatui::layout::{Constraint, Layout, Margin, Position, Rect};
use roster_core::EntityKind;

pub const HEADER_HEIGHT: u16 = 3;
/// Width of the "search here" button in the header.
const SEARCH_BUTTON_WIDTH: u16 = 34;
const THEME_TOGGLE_WIDTH: u16 = 9;

/// Rows between the top of the screen and the modal.
const MODAL_TOP: u16 = 4;
const MODAL_MIN_WIDTH: u16 = 44;
/// Borders + input row + spacer + chips row + footer row.
const SEARCH_BOX_HEIGHT: u16 = 6;
const CLOSE_BUTTON_WIDTH: u16 = 3;
/// Glyph and space drawn before the query text.
pub const INPUT_PREFIX_WIDTH: u16 = 2;

/// Label drawn inside a filter chip.
pub fn chip_label(kind: EntityKind) -> String {
    format!(" {} ", kind.plural())
}

fn chip_width(kind: EntityKind) -> u16 {
    chip_label(kind).chars().count() as u16
}

/// One row of `inner`, or an empty rect if `inner` is too short.
fn row(inner: Rect, offset: u16) -> Rect {
    if offset < inner.height {
        Rect::new(inner.x, inner.y + offset, inner.width, 1)
    } else {
        Rect::new(inner.x, inner.y, 0, 0)
    }
}

// ---------------------------------------------------------------------------
// Background screen
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub search_button: Rect,
    pub theme_toggle: Rect,
    pub body: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    let [header, body] =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Fill(1)]).areas(area);
    let inner = header.inner(Margin::new(1, 1));

    let search_button = Rect { width: SEARCH_BUTTON_WIDTH.min(inner.width), ..inner };
    let toggle_width = THEME_TOGGLE_WIDTH.min(inner.width);
    let theme_toggle = Rect {
        x: inner.right().saturating_sub(toggle_width),
        width: toggle_width,
        ..inner
    };

    ScreenLayout { header, search_button, theme_toggle, body }
}

// ---------------------------------------------------------------------------
// Search modal
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalLayout {
    /// Bordered box holding the input, chips and footer.
    pub search_box: Rect,
    pub input: Rect,
    pub close_button: Rect,
    pub person_chip: Rect,
    pub vehicle_chip: Rect,
    pub footer: Rect,
    /// Results panel below the search box.
    pub results: Rect,
}

impl ModalLayout {
    pub fn chip(&self, kind: EntityKind) -> Rect {
        match kind {
            EntityKind::Person => self.person_chip,
            EntityKind::Vehicle => self.vehicle_chip,
        }
    }

    /// Whether `pos` lands on the modal. Anything else is a click-away.
    pub fn contains(&self, pos: Position) -> bool {
        self.search_box.contains(pos) || self.results.contains(pos)
    }
}

pub fn modal_layout(area: Rect, width_pct: u16) -> ModalLayout {
    let pct = u32::from(width_pct.clamp(20, 100));
    let width = (u32::from(area.width) * pct / 100) as u16;
    let width = width.max(MODAL_MIN_WIDTH).min(area.width);
    let x = area.x + (area.width - width) / 2;
    let top = area.y + MODAL_TOP.min(area.height);

    let search_box = Rect::new(x, top, width, SEARCH_BOX_HEIGHT).intersection(area);
    let inner = search_box.inner(Margin::new(1, 1));

    let input_row = row(inner, 0);
    let close_width = CLOSE_BUTTON_WIDTH.min(input_row.width);
    let close_button = Rect {
        x: input_row.right().saturating_sub(close_width),
        width: close_width,
        ..input_row
    };
    let input = Rect { width: input_row.width.saturating_sub(close_width), ..input_row };

    let chips = row(inner, 2);
    let person_chip = Rect { width: chip_width(EntityKind::Person).min(chips.width), ..chips };
    let vehicle_x = person_chip.right().saturating_add(1);
    let vehicle_chip = Rect {
        x: vehicle_x,
        width: chip_width(EntityKind::Vehicle).min(chips.right().saturating_sub(vehicle_x)),
        ..chips
    };

    let footer = row(inner, 3);

    let results_top = search_box.bottom().saturating_add(1).min(area.bottom());
    let results = Rect::new(
        x,
        results_top,
        width,
        area.bottom().saturating_sub(results_top).saturating_sub(1),
    );

    ModalLayout { search_box, input, close_button, person_chip, vehicle_chip, footer, results }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
