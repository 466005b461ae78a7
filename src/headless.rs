//! One-shot query mode: run a single search and print the grouped results as
//! plain text. Matched spans are wrapped in `[` `]`.
//!
//! The query goes through a [`SearchModal`] so the `[search]` options apply
//! exactly as they do in the TUI.

use roster_core::{
    search::Span, Directory, Entity, EntityKind, Field, Hit, ModalInput, ModalOptions, ResultSet,
    SearchModal,
};
use std::fmt::Write as _;
use std::io::Write;

pub fn run(
    directory: Directory,
    options: ModalOptions,
    query: &str,
    filter: Option<EntityKind>,
) -> anyhow::Result<()> {
    let results = query_results(directory, options, query, filter);
    tracing::info!(query, ?filter, total = results.total(), "headless query");

    let mut out = std::io::stdout().lock();
    out.write_all(render(&results).as_bytes())?;
    out.flush()?;
    Ok(())
}

fn query_results(
    directory: Directory,
    options: ModalOptions,
    query: &str,
    filter: Option<EntityKind>,
) -> ResultSet {
    let mut modal = SearchModal::new(directory, options);
    modal.apply(ModalInput::Open);
    modal.apply(ModalInput::QueryChanged(query.to_string()));
    if let Some(kind) = filter {
        modal.apply(ModalInput::ToggleFilter(kind));
    }
    modal.results().clone()
}

pub fn render(results: &ResultSet) -> String {
    if results.is_empty() {
        return "No results\n".to_string();
    }

    let mut out = String::new();
    for group in results.groups().filter(|g| !g.is_empty()) {
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = writeln!(out, "{} ({})", group.kind.plural(), group.count());
        for hit in &group.hits {
            let _ = writeln!(out, "  {}", hit_line(hit));
        }
    }
    out
}

fn hit_line(hit: &Hit) -> String {
    let field = |field: Field, text: &str| marked(text, hit.highlight(field));

    match &hit.entity {
        Entity::Person(p) => {
            format!("{} · {}", field(Field::Name, &p.name), field(Field::Location, &p.location))
        }
        Entity::Vehicle(v) => {
            let mut line = format!("{} · {}", field(Field::Name, &v.name), v.status);
            if let Some(driver) = v.driver.as_deref() {
                let _ = write!(line, " · driven by {}", field(Field::Driver, driver));
            }
            if let Some(time) = v.time.as_deref() {
                let _ = write!(line, " · {time}");
            }
            line
        }
    }
}

fn marked(text: &str, spans: Option<&[Span]>) -> String {
    let Some(spans) = spans else {
        return text.to_string();
    };
    spans
        .iter()
        .map(|s| if s.matched { format!("[{}]", s.text) } else { s.text.clone() })
        .collect()
}
