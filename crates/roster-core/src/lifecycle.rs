//! Search modal lifecycle: open/closed state, query text and kind filter.
//!
//! [`SearchModal`] is the only owner of this state. Every input is applied
//! synchronously; whenever the query or filter changes the result set is
//! re-derived from the directory before [`SearchModal::apply`] returns.
//!
//! # Transitions
//!
//! | State  | Input            | Effect |
//! |--------|------------------|--------|
//! | Closed | `Open`           | → Open |
//! | Open   | `Close`/`Dismiss`| → Closed (optionally resetting query + filter) |
//! | Open   | `ToggleFilter(k)`| filter = `k`, or `None` if it already was `k` |
//! | any    | `QueryChanged(s)`| query = `s`, state unchanged |
//!
//! Everything else is ignored.

use crate::directory::Directory;
use crate::search::{search, ResultSet};
use crate::types::EntityKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// Semantic inputs accepted by the modal. Key and pointer handling live in
/// the UI layer, which translates raw events into these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalInput {
    /// Explicit open request (pointer or open shortcut).
    Open,
    /// Explicit close request (close button or click-away).
    Close,
    /// Dismiss key. Ignored while closed.
    Dismiss,
    /// The query input now holds this text.
    QueryChanged(String),
    /// Toggle narrowing to one kind. Ignored while closed.
    ToggleFilter(EntityKind),
}

/// Policies applied by the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalOptions {
    /// Clear query and filter on the Open → Closed transition. Off by
    /// default: a reopened modal shows the previous search.
    pub reset_on_close: bool,
    /// Search with the trimmed query. The stored text stays as typed.
    pub trim_query: bool,
}

pub struct SearchModal {
    directory: Directory,
    options: ModalOptions,
    state: ModalState,
    query: String,
    filter: Option<EntityKind>,
    results: ResultSet,
}

impl SearchModal {
    pub fn new(directory: Directory, options: ModalOptions) -> Self {
        let results = search(directory.entities(), "", None);
        Self {
            directory,
            options,
            state: ModalState::Closed,
            query: String::new(),
            filter: None,
            results,
        }
    }

    /// Apply one input. Returns `true` if any observable state changed.
    pub fn apply(&mut self, input: ModalInput) -> bool {
        match input {
            ModalInput::Open => self.open(),
            ModalInput::Close | ModalInput::Dismiss => self.close(),
            ModalInput::QueryChanged(text) => self.set_query(text),
            ModalInput::ToggleFilter(kind) => self.toggle_filter(kind),
        }
    }

    pub fn open(&mut self) -> bool {
        if self.state == ModalState::Open {
            return false;
        }
        self.state = ModalState::Open;
        tracing::debug!(query = %self.query, filter = ?self.filter, "modal opened");
        true
    }

    pub fn close(&mut self) -> bool {
        if self.state == ModalState::Closed {
            return false;
        }
        self.state = ModalState::Closed;
        if self.options.reset_on_close && (!self.query.is_empty() || self.filter.is_some()) {
            self.query.clear();
            self.filter = None;
            self.refresh();
        }
        tracing::debug!(reset = self.options.reset_on_close, "modal closed");
        true
    }

    pub fn set_query(&mut self, text: String) -> bool {
        if text == self.query {
            return false;
        }
        self.query = text;
        self.refresh();
        true
    }

    pub fn toggle_filter(&mut self, kind: EntityKind) -> bool {
        if self.state == ModalState::Closed {
            return false;
        }
        self.filter = if self.filter == Some(kind) { None } else { Some(kind) };
        tracing::debug!(filter = ?self.filter, "filter toggled");
        self.refresh();
        true
    }

    fn refresh(&mut self) {
        let query = if self.options.trim_query { self.query.trim() } else { self.query.as_str() };
        self.results = search(self.directory.entities(), query, self.filter);
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    /// Query text as typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filter(&self) -> Option<EntityKind> {
        self.filter
    }

    /// The result set for the current query and filter.
    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
