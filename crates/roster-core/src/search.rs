//! Query engine: literal, case-insensitive substring search with highlighting.
//!
//! [`search`] is a pure function of the collection, the query text and the
//! active kind filter. It returns a [`ResultSet`] partitioned into a person
//! group and a vehicle group, each in directory order, with every searchable
//! field of every hit split into plain and matched [`Span`]s.
//!
//! # Searchable fields
//!
//! | Variant | Fields |
//! |---------|--------|
//! | Person  | name, location |
//! | Vehicle | name, driver (when assigned) |
//!
//! The query is never interpreted as a pattern: `a.b` only matches the three
//! characters `a`, `.`, `b`. The same [`Matcher`] drives both the inclusion
//! test and the highlight split.
//!
//! Case folding is Unicode simple case folding (`É` matches `é`, and `s`
//! also matches `ſ`), not locale-aware lowercasing.

use crate::types::{Entity, EntityKind};
use regex::{Regex, RegexBuilder};

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// A searchable attribute of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Location,
    Driver,
}

/// One piece of a highlighted field. Concatenating every span's `text`
/// reproduces the original field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub matched: bool,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), matched: false }
    }

    pub fn matched(text: impl Into<String>) -> Self {
        Self { text: text.into(), matched: true }
    }
}

/// Highlight annotation for one searchable field of a hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldHighlight {
    pub field: Field,
    pub spans: Vec<Span>,
}

/// An entity that passed the query and filter.
#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    pub entity: Entity,
    /// Empty when the query was empty.
    pub highlights: Vec<FieldHighlight>,
}

impl Hit {
    /// Spans for `field`, or `None` when the field was not annotated (empty
    /// query, absent driver, or a field the variant does not search).
    pub fn highlight(&self, field: Field) -> Option<&[Span]> {
        self.highlights
            .iter()
            .find(|h| h.field == field)
            .map(|h| h.spans.as_slice())
    }
}

/// All hits of one kind, in directory order.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub kind: EntityKind,
    pub hits: Vec<Hit>,
}

impl Group {
    fn new(kind: EntityKind) -> Self {
        Self { kind, hits: Vec::new() }
    }

    pub fn count(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

/// The grouped, counted outcome of a query.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    pub people: Group,
    pub vehicles: Group,
}

impl Default for ResultSet {
    fn default() -> Self {
        Self {
            people: Group::new(EntityKind::Person),
            vehicles: Group::new(EntityKind::Vehicle),
        }
    }
}

impl ResultSet {
    pub fn group(&self, kind: EntityKind) -> &Group {
        match kind {
            EntityKind::Person => &self.people,
            EntityKind::Vehicle => &self.vehicles,
        }
    }

    /// Both groups, people first.
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        [&self.people, &self.vehicles].into_iter()
    }

    pub fn total(&self) -> usize {
        self.people.count() + self.vehicles.count()
    }

    /// True when nothing matched; the renderer shows "No results".
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    fn push(&mut self, hit: Hit) {
        match hit.entity.kind() {
            EntityKind::Person => self.people.hits.push(hit),
            EntityKind::Vehicle => self.vehicles.hits.push(hit),
        }
    }
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

/// Literal, case-insensitive matcher for one non-empty query.
#[derive(Debug, Clone)]
pub struct Matcher {
    /// `None` only when the escaped query exceeds the regex size limit, in
    /// which case nothing matches.
    regex: Option<Regex>,
}

impl Matcher {
    /// Build a matcher, or `None` for the empty query.
    pub fn new(query: &str) -> Option<Self> {
        if query.is_empty() {
            return None;
        }
        let regex = RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
            .map_err(|err| tracing::warn!(%err, len = query.len(), "query cannot be compiled; matching nothing"))
            .ok();
        Some(Self { regex })
    }

    /// Split `text` into alternating plain and matched spans, left to right.
    /// Empty pieces are dropped; original casing is preserved.
    pub fn split(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        let mut last = 0;
        if let Some(re) = &self.regex {
            for m in re.find_iter(text) {
                if m.start() > last {
                    spans.push(Span::plain(&text[last..m.start()]));
                }
                spans.push(Span::matched(m.as_str()));
                last = m.end();
            }
        }
        if last < text.len() {
            spans.push(Span::plain(&text[last..]));
        }
        spans
    }

    fn hit(&self, entity: &Entity) -> Option<Hit> {
        let highlights: Vec<FieldHighlight> = searchable_fields(entity)
            .into_iter()
            .map(|(field, text)| FieldHighlight { field, spans: self.split(text) })
            .collect();

        let matched = highlights
            .iter()
            .any(|h| h.spans.iter().any(|s| s.matched));

        matched.then(|| Hit { entity: entity.clone(), highlights })
    }
}

/// The fields of `entity` that take part in the containment test. An
/// unassigned driver is simply absent.
pub fn searchable_fields(entity: &Entity) -> Vec<(Field, &str)> {
    match entity {
        Entity::Person(p) => vec![(Field::Name, p.name.as_str()), (Field::Location, p.location.as_str())],
        Entity::Vehicle(v) => {
            let mut fields = vec![(Field::Name, v.name.as_str())];
            if let Some(driver) = v.driver.as_deref() {
                fields.push((Field::Driver, driver));
            }
            fields
        }
    }
}

/// Derive the visible result set for `query` and `filter`.
///
/// An empty query includes every entity whose kind passes the filter and
/// produces no highlight annotations. No trimming is performed here.
pub fn search(collection: &[Entity], query: &str, filter: Option<EntityKind>) -> ResultSet {
    let matcher = Matcher::new(query);
    let mut results = ResultSet::default();

    for entity in collection {
        if filter.is_some_and(|kind| kind != entity.kind()) {
            continue;
        }
        let hit = match &matcher {
            None => Some(Hit { entity: entity.clone(), highlights: Vec::new() }),
            Some(m) => m.hit(entity),
        };
        if let Some(hit) = hit {
            results.push(hit);
        }
    }

    tracing::debug!(
        query,
        filter = ?filter,
        people = results.people.count(),
        vehicles = results.vehicles.count(),
        "search"
    );
    results
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
