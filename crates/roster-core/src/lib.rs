//! roster-core: directory search engine and search modal state.
//!
//! This crate holds every piece of roster that has logic but no I/O beyond
//! loading: the immutable [`Directory`], the pure [`search`] function and the
//! [`SearchModal`] lifecycle controller, plus shared types and configuration.
//!
//! # Architecture
//!
//! ```text
//! input event ──► SearchModal ──► search(directory, query, filter) ──► ResultSet ──► renderer
//! ```
//!
//! Everything runs synchronously on the caller's thread.

pub mod config;
pub mod directory;
pub mod lifecycle;
pub mod search;
pub mod types;

pub use directory::{Directory, DirectoryError};
pub use lifecycle::{ModalInput, ModalOptions, ModalState, SearchModal};
pub use search::{search, Field, Hit, ResultSet, Span};
pub use types::{Entity, EntityKind, Person, Vehicle, VehicleStatus};
