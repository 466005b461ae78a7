//! Core types for roster-core.
//!
//! This module defines the two entity variants held by the directory
//! ([`Person`] and [`Vehicle`]), the [`Entity`] sum type that wraps them, and
//! the [`EntityKind`] discriminant used for filtering and grouping.

use serde::Deserialize;

/// A person record in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Person {
    /// Unique within the person namespace only.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Location label (district, depot, …).
    pub location: String,
    /// Avatar URI. Carried for the renderer; never searched.
    #[serde(default)]
    pub avatar: String,
}

/// A vehicle record in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Vehicle {
    /// Unique within the vehicle namespace only.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Current operating status.
    pub status: VehicleStatus,
    /// Name of the assigned driver, if any.
    #[serde(default)]
    pub driver: Option<String>,
    /// Usage-time label such as `05h/08h`.
    #[serde(default)]
    pub time: Option<String>,
}

/// Operating status of a [`Vehicle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum VehicleStatus {
    #[serde(rename = "In use", alias = "InUse", alias = "in_use")]
    InUse,
    #[serde(alias = "maintenance")]
    Maintenance,
    #[serde(alias = "off")]
    Off,
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleStatus::InUse => write!(f, "In use"),
            VehicleStatus::Maintenance => write!(f, "Maintenance"),
            VehicleStatus::Off => write!(f, "Off"),
        }
    }
}

/// Which variant an [`Entity`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Person,
    Vehicle,
}

impl EntityKind {
    /// Both kinds, in display order.
    pub const ALL: [EntityKind; 2] = [EntityKind::Person, EntityKind::Vehicle];

    /// Plural heading used for result groups.
    pub fn plural(self) -> &'static str {
        match self {
            EntityKind::Person => "People",
            EntityKind::Vehicle => "Vehicles",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Person => write!(f, "person"),
            EntityKind::Vehicle => write!(f, "vehicle"),
        }
    }
}

impl std::str::FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "person" | "people" | "client" => Ok(EntityKind::Person),
            "vehicle" | "vehicles" | "car" => Ok(EntityKind::Vehicle),
            other => Err(format!("unknown entity kind: {other}")),
        }
    }
}

/// A directory entry: exactly one of the two variants.
///
/// The serialised form is internally tagged by `type`. `"Client"` is
/// accepted as an older spelling of `"Person"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum Entity {
    #[serde(alias = "Client")]
    Person(Person),
    Vehicle(Vehicle),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Person(_) => EntityKind::Person,
            Entity::Vehicle(_) => EntityKind::Vehicle,
        }
    }

    /// Display name, shared by both variants.
    pub fn name(&self) -> &str {
        match self {
            Entity::Person(p) => &p.name,
            Entity::Vehicle(v) => &v.name,
        }
    }

    pub fn as_person(&self) -> Option<&Person> {
        match self {
            Entity::Person(p) => Some(p),
            Entity::Vehicle(_) => None,
        }
    }

    pub fn as_vehicle(&self) -> Option<&Vehicle> {
        match self {
            Entity::Vehicle(v) => Some(v),
            Entity::Person(_) => None,
        }
    }
}

impl From<Person> for Entity {
    fn from(p: Person) -> Self {
        Entity::Person(p)
    }
}

impl From<Vehicle> for Entity {
    fn from(v: Vehicle) -> Self {
        Entity::Vehicle(v)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
