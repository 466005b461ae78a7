//! Top-level application state and the main event loop.
//!
//! [`App::run`] acquires the terminal through a [`TerminalSession`], drives
//! the crossterm event loop, and releases the terminal when the session is
//! dropped, on normal exit, error or panic.

use crate::{
    event::{AppEvent, InputMode, Keymap},
    layout::{modal_layout, screen_layout},
    theme::{Theme, ThemeKind},
    widgets::{
        header::Header,
        help::HelpPopup,
        results::ResultsPanel,
        search_box::{QueryInputState, SearchBox},
    },
};
use crossterm::{
    event::{self as ct_event, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Position, Rect},
    Frame, Terminal,
};
use roster_core::{config::Config, Directory, EntityKind, ModalInput, SearchModal};
use std::{cell::Cell, io, time::Duration};

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub modal: SearchModal,
    pub input: QueryInputState,
    pub keymap: Keymap,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    pub quit: bool,
    /// Terminal area of the last draw, used for mouse hit-testing.
    viewport: Cell<Rect>,
}

impl AppState {
    pub fn input_mode(&self) -> InputMode {
        if self.modal.is_open() && !self.show_help {
            InputMode::Typing
        } else {
            InputMode::Browse
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(directory: Directory, config: Config) -> anyhow::Result<Self> {
        let keymap = Keymap::from_config(&config.keybindings)?;
        let theme = Theme::load(ThemeKind::from_name(&config.ui.theme));
        let modal = SearchModal::new(directory, config.search.modal_options());

        let state = AppState {
            modal,
            input: QueryInputState::default(),
            keymap,
            theme,
            config,
            show_help: false,
            quit: false,
            viewport: Cell::new(Rect::default()),
        };

        Ok(App { state })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Acquire the terminal, run the event loop, and release the terminal.
    pub fn run(mut self) -> anyhow::Result<()> {
        let mut session = TerminalSession::start()?;
        tracing::info!(entities = self.state.modal.directory().len(), "tui started");
        self.event_loop(&mut session.terminal)
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                let raw = ct_event::read()?;
                if let Event::Key(key) = &raw {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                }
                if let Some(ev) = self.state.keymap.map(raw, self.state.input_mode()) {
                    tracing::debug!(mode = ?self.state.input_mode(), event = ?ev, "input event");
                    self.handle(ev);
                }
            }
        }
        Ok(())
    }

    /// Apply one semantic event to the application state.
    pub fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        match event {
            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }
            AppEvent::Resize(_, _) => {}
            AppEvent::ToggleTheme => toggle_theme(s),
            AppEvent::ToggleHelp => {
                if !s.modal.is_open() {
                    s.show_help = !s.show_help;
                    tracing::debug!(show = s.show_help, "help popup toggled");
                }
            }
            AppEvent::Dismiss => {
                if s.show_help {
                    s.show_help = false;
                } else {
                    s.modal.apply(ModalInput::Dismiss);
                }
            }
            AppEvent::Open => {
                s.show_help = false;
                s.modal.apply(ModalInput::Open);
            }
            AppEvent::ToggleFilter(kind) => {
                s.modal.apply(ModalInput::ToggleFilter(kind));
            }
            AppEvent::Char(_) | AppEvent::Backspace | AppEvent::CursorLeft | AppEvent::CursorRight => {
                if s.modal.is_open() && s.input.handle(&event) {
                    s.modal.apply(ModalInput::QueryChanged(s.input.text.clone()));
                }
            }
            AppEvent::Click { column, row } => click(s, Position::new(column, row)),
        }

        // The modal may have reset its query on close.
        if s.input.text != s.modal.query() {
            s.input.set(s.modal.query());
        }
    }
}

fn toggle_theme(s: &mut AppState) {
    let kind = s.theme.kind.toggled();
    tracing::debug!(theme = ?kind, "theme toggled");
    s.theme = Theme::load(kind);
}

/// Route a left click using the geometry of the last draw.
fn click(s: &mut AppState, pos: Position) {
    let area = s.viewport.get();

    if s.show_help {
        s.show_help = false;
        return;
    }

    if s.modal.is_open() {
        let l = modal_layout(area, s.config.ui.modal_width_pct);
        if l.close_button.contains(pos) {
            s.modal.apply(ModalInput::Close);
        } else if let Some(kind) = EntityKind::ALL.into_iter().find(|k| l.chip(*k).contains(pos)) {
            s.modal.apply(ModalInput::ToggleFilter(kind));
        } else if !l.contains(pos) {
            tracing::debug!(?pos, "click-away");
            s.modal.apply(ModalInput::Close);
        }
        return;
    }

    let screen = screen_layout(area);
    if screen.search_button.contains(pos) {
        s.modal.apply(ModalInput::Open);
    } else if screen.theme_toggle.contains(pos) {
        toggle_theme(s);
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    state.viewport.set(area);

    let screen = screen_layout(area);
    let show_hints = state.config.ui.show_hints;
    frame.render_widget(
        Header::new(&screen, &state.theme, &state.keymap, state.modal.directory())
            .show_hints(show_hints)
            .dimmed(state.modal.is_open()),
        area,
    );

    if state.modal.is_open() {
        let l = modal_layout(area, state.config.ui.modal_width_pct);
        let results = state.modal.results();

        let mut search_box = SearchBox::new(&state.input, state.modal.filter(), results.total(), &l, &state.theme);
        if show_hints {
            search_box = search_box.hints(&state.keymap.toggle_person, &state.keymap.toggle_vehicle);
        }
        frame.render_widget(search_box, l.search_box);
        if !l.results.is_empty() {
            frame.render_widget(ResultsPanel::new(results, &state.theme), l.results);
        }

        if !state.show_help && !l.input.is_empty() {
            let (cx, cy) = state.input.cursor_position(l.input);
            frame.set_cursor_position((cx, cy));
        }
    }

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.keymap, &state.theme), area);
    }
}

// ---------------------------------------------------------------------------
// Terminal session
// ---------------------------------------------------------------------------

/// Raw mode, alternate screen and mouse capture, held for the lifetime of
/// the value and released on drop.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn start() -> anyhow::Result<Self> {
        install_panic_hook();
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
        tracing::debug!("terminal released");
    }
}

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;
    use roster_core::ModalState;

    const AREA: Rect = Rect { x: 0, y: 0, width: 100, height: 40 };

    fn app() -> App {
        App::new(Directory::sample(), Config::defaults()).unwrap()
    }

    fn render(app: &App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(AREA.width, AREA.height)).unwrap();
        terminal.draw(|frame| draw(frame, app.state())).unwrap();
        let buf = terminal.backend().buffer();
        (0..AREA.height)
            .map(|y| (0..AREA.width).map(|x| buf[(x, y)].symbol()).collect::<String>())
            .collect()
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle(AppEvent::Char(c));
        }
    }

    #[test]
    fn typing_while_closed_is_ignored() {
        let mut app = app();
        type_str(&mut app, "abc");
        assert_eq!(app.state().modal.query(), "");
    }

    #[test]
    fn typing_updates_results() {
        let mut app = app();
        app.handle(AppEvent::Open);
        type_str(&mut app, "tresor");
        assert_eq!(app.state().modal.query(), "tresor");
        assert_eq!(app.state().modal.results().total(), 2);

        app.handle(AppEvent::Backspace);
        assert_eq!(app.state().modal.query(), "treso");
    }

    #[test]
    fn dismiss_closes_help_before_modal() {
        let mut app = app();
        app.handle(AppEvent::ToggleHelp);
        assert!(app.state().show_help);
        app.handle(AppEvent::Dismiss);
        assert!(!app.state().show_help);
        assert_eq!(app.state().modal.state(), ModalState::Closed);
    }

    #[test]
    fn help_not_toggled_while_open() {
        let mut app = app();
        app.handle(AppEvent::Open);
        app.handle(AppEvent::ToggleHelp);
        assert!(!app.state().show_help);
    }

    #[test]
    fn click_header_button_opens_and_click_away_closes() {
        let mut app = app();
        render(&app);
        let button = screen_layout(AREA).search_button;
        app.handle(AppEvent::Click { column: button.x + 1, row: button.y });
        assert!(app.state().modal.is_open());

        render(&app);
        app.handle(AppEvent::Click { column: 0, row: AREA.height - 1 });
        assert!(!app.state().modal.is_open());
    }

    #[test]
    fn click_chip_toggles_filter_and_close_button_closes() {
        let mut app = app();
        app.handle(AppEvent::Open);
        render(&app);
        let l = modal_layout(AREA, 60);

        let chip = l.chip(EntityKind::Vehicle);
        app.handle(AppEvent::Click { column: chip.x, row: chip.y });
        assert_eq!(app.state().modal.filter(), Some(EntityKind::Vehicle));
        app.handle(AppEvent::Click { column: chip.x, row: chip.y });
        assert_eq!(app.state().modal.filter(), None);

        // Clicking inside the results panel keeps the modal open.
        app.handle(AppEvent::Click { column: l.results.x + 2, row: l.results.y + 2 });
        assert!(app.state().modal.is_open());

        app.handle(AppEvent::Click { column: l.close_button.x + 1, row: l.close_button.y });
        assert!(!app.state().modal.is_open());
    }

    #[test]
    fn click_theme_toggle() {
        let mut app = app();
        render(&app);
        let toggle = screen_layout(AREA).theme_toggle;
        app.handle(AppEvent::Click { column: toggle.x + 1, row: toggle.y });
        assert_eq!(app.state().theme.kind, ThemeKind::Dark);
        app.handle(AppEvent::ToggleTheme);
        assert_eq!(app.state().theme.kind, ThemeKind::Light);
    }

    #[test]
    fn reset_on_close_resyncs_input() {
        let mut config = Config::defaults();
        config.search.reset_on_close = true;
        let mut app = App::new(Directory::sample(), config).unwrap();
        app.handle(AppEvent::Open);
        type_str(&mut app, "akwa");
        app.handle(AppEvent::Dismiss);
        app.handle(AppEvent::Open);
        assert_eq!(app.state().input.text, "");
        assert_eq!(app.state().input.cursor, 0);
    }

    #[test]
    fn renders_highlighted_results() {
        let mut app = app();
        app.handle(AppEvent::Open);
        type_str(&mut app, "tresor");
        let rows = render(&app);
        assert!(rows.iter().any(|r| r.contains("⌕ tresor")));
        assert!(rows.iter().any(|r| r.contains("Driven by Tresor Manock")));
        assert!(rows.iter().any(|r| r.contains("2 results")));
    }

    #[test]
    fn renders_no_results() {
        let mut app = app();
        app.handle(AppEvent::Open);
        type_str(&mut app, "zzz");
        let rows = render(&app);
        assert!(rows.iter().any(|r| r.contains("No results")));
    }

    #[test]
    fn closed_screen_shows_directory_summary() {
        let rows = render(&app());
        assert!(rows.iter().any(|r| r.contains("6 entries: 3 people, 3 vehicles")));
        assert!(rows.iter().any(|r| r.contains("Search here...")));
    }

    #[test]
    fn bad_keybinding_is_an_error() {
        let mut config = Config::defaults();
        config.keybindings.open = "Hyper+k".to_string();
        assert!(App::new(Directory::sample(), config).is_err());
    }
}
