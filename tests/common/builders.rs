//! Test builders: ergonomic constructors for directory entities.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use roster_core::{Directory, Entity, Person, Vehicle, VehicleStatus};

// ---------------------------------------------------------------------------
// PersonBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Person`] fixtures.
///
/// ```rust
/// let p = PersonBuilder::new(7, "Ada Lovelace").location("London").build();
/// ```
pub struct PersonBuilder {
    id: u64,
    name: String,
    location: String,
    avatar: String,
}

impl PersonBuilder {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            location: "Nowhere".to_string(),
            avatar: String::new(),
        }
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = avatar.into();
        self
    }

    pub fn build(self) -> Entity {
        Entity::Person(Person {
            id: self.id,
            name: self.name,
            location: self.location,
            avatar: self.avatar,
        })
    }
}

// ---------------------------------------------------------------------------
// VehicleBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Vehicle`] fixtures. Defaults to an unassigned vehicle
/// that is `Off`.
pub struct VehicleBuilder {
    id: String,
    name: String,
    status: VehicleStatus,
    driver: Option<String>,
    time: Option<String>,
}

impl VehicleBuilder {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: VehicleStatus::Off,
            driver: None,
            time: None,
        }
    }

    pub fn status(mut self, status: VehicleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn driver(mut self, driver: impl Into<String>) -> Self {
        self.driver = Some(driver.into());
        self
    }

    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn build(self) -> Entity {
        Entity::Vehicle(Vehicle {
            id: self.id,
            name: self.name,
            status: self.status,
            driver: self.driver,
            time: self.time,
        })
    }
}

/// Build a [`Directory`], panicking on duplicate identities.
pub fn directory_of(entities: Vec<Entity>) -> Directory {
    Directory::new(entities).expect("test directory must have unique ids")
}
