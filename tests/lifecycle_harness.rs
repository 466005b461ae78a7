#![allow(unused)]
//! Search modal lifecycle integration harness.
//!
//! # What this covers
//!
//! - **Transitions**: open/close/dismiss from both states, including the
//!   no-op cases, and the change flag returned by every input.
//! - **Query and filter handling**: results are recomputed on every change;
//!   filter toggling is idempotent over two presses; inputs that only make
//!   sense while open are ignored while closed.
//! - **Close policy**: query and filter persist across close by default, and
//!   are cleared when `reset_on_close` is set.
//! - **Property: results always equal a fresh `search`** of the current query
//!   and filter, for any input sequence.
//!
//! # Running
//!
//! ```sh
//! cargo test --test lifecycle_harness
//! ```

mod common;
use common::*;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use roster_core::{search, EntityKind, ModalInput, ModalOptions, ModalState, SearchModal};
use rstest::rstest;

fn modal(options: ModalOptions) -> SearchModal {
    SearchModal::new(directory_of(sample_entities()), options)
}

// ---------------------------------------------------------------------------
// Transitions
// ---------------------------------------------------------------------------

#[test]
fn starts_closed_with_full_results() {
    let m = modal(ModalOptions::default());
    assert_eq!(m.state(), ModalState::Closed);
    assert_eq!(m.query(), "");
    assert_eq!(m.filter(), None);
    assert_eq!(m.results().total(), 6);
}

#[rstest]
#[case::dismiss(ModalInput::Dismiss)]
#[case::close(ModalInput::Close)]
fn closing_while_closed_is_a_no_op(#[case] input: ModalInput) {
    let mut m = modal(ModalOptions::default());
    assert!(!m.apply(input));
    assert_eq!(m.state(), ModalState::Closed);
}

#[test]
fn open_then_dismiss() {
    let mut m = modal(ModalOptions::default());
    assert!(m.apply(ModalInput::Open));
    assert!(m.is_open());
    assert!(!m.apply(ModalInput::Open), "opening twice changes nothing");
    assert!(m.apply(ModalInput::Dismiss));
    assert_eq!(m.state(), ModalState::Closed);
}

#[test]
fn typing_recomputes_results() {
    let mut m = modal(ModalOptions::default());
    m.apply(ModalInput::Open);
    m.apply(ModalInput::QueryChanged("tresor".into()));
    assert_groups!(m.results(), people: ["Tresor Manock"], vehicles: ["Truck #237"]);

    m.apply(ModalInput::QueryChanged("tresorx".into()));
    assert_no_results!(m.results());
}

#[test]
fn filter_toggle_is_idempotent_over_two_presses() {
    let mut m = modal(ModalOptions::default());
    m.apply(ModalInput::Open);
    m.apply(ModalInput::QueryChanged("rui".into()));
    let before = m.results().clone();

    m.apply(ModalInput::ToggleFilter(EntityKind::Vehicle));
    assert_eq!(m.filter(), Some(EntityKind::Vehicle));
    assert_groups!(m.results(), people: [], vehicles: ["Rui Silvestre"]);

    m.apply(ModalInput::ToggleFilter(EntityKind::Vehicle));
    assert_eq!(m.filter(), None);
    assert_eq!(m.results(), &before);
}

#[test]
fn toggling_the_other_kind_switches_filter() {
    let mut m = modal(ModalOptions::default());
    m.apply(ModalInput::Open);
    m.apply(ModalInput::ToggleFilter(EntityKind::Person));
    m.apply(ModalInput::ToggleFilter(EntityKind::Vehicle));
    assert_eq!(m.filter(), Some(EntityKind::Vehicle));
}

#[test]
fn filter_toggle_ignored_while_closed() {
    let mut m = modal(ModalOptions::default());
    assert!(!m.apply(ModalInput::ToggleFilter(EntityKind::Person)));
    assert_eq!(m.filter(), None);
}

// ---------------------------------------------------------------------------
// Close policy
// ---------------------------------------------------------------------------

#[test]
fn query_and_filter_persist_across_close_by_default() {
    let mut m = modal(ModalOptions::default());
    m.apply(ModalInput::Open);
    m.apply(ModalInput::QueryChanged("akwa".into()));
    m.apply(ModalInput::ToggleFilter(EntityKind::Person));
    m.apply(ModalInput::Dismiss);
    m.apply(ModalInput::Open);

    assert_eq!(m.query(), "akwa");
    assert_eq!(m.filter(), Some(EntityKind::Person));
    assert_eq!(m.results().people.count(), 2);
}

#[test]
fn reset_on_close_clears_state() {
    let mut m = modal(ModalOptions { reset_on_close: true, ..ModalOptions::default() });
    m.apply(ModalInput::Open);
    m.apply(ModalInput::QueryChanged("akwa".into()));
    m.apply(ModalInput::ToggleFilter(EntityKind::Person));
    m.apply(ModalInput::Close);

    assert_eq!(m.query(), "");
    assert_eq!(m.filter(), None);
    assert_eq!(m.results().total(), 6);
}

#[test]
fn trim_query_option() {
    let mut m = modal(ModalOptions { trim_query: true, ..ModalOptions::default() });
    m.apply(ModalInput::Open);
    m.apply(ModalInput::QueryChanged("  akwa ".into()));
    assert_eq!(m.query(), "  akwa ", "the typed text is kept as-is");
    assert_eq!(m.results().people.count(), 2);

    let mut untrimmed = modal(ModalOptions::default());
    untrimmed.apply(ModalInput::Open);
    untrimmed.apply(ModalInput::QueryChanged("  akwa ".into()));
    assert_no_results!(untrimmed.results());
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn arb_input() -> impl Strategy<Value = ModalInput> {
    prop_oneof![
        Just(ModalInput::Open),
        Just(ModalInput::Close),
        Just(ModalInput::Dismiss),
        "[a-z ]{0,4}".prop_map(ModalInput::QueryChanged),
        Just(ModalInput::ToggleFilter(EntityKind::Person)),
        Just(ModalInput::ToggleFilter(EntityKind::Vehicle)),
    ]
}

proptest! {
    #[test]
    fn results_track_query_and_filter(inputs in proptest::collection::vec(arb_input(), 0..24)) {
        let mut m = modal(ModalOptions::default());
        for input in inputs {
            m.apply(input);
            let fresh = search(m.directory().entities(), m.query(), m.filter());
            prop_assert_eq!(m.results(), &fresh);
        }
    }
}
