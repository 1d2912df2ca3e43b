//! Location catalogs.
//!
//! A [Catalog] is the read-only source of every [Location] the router knows
//! about. The routing core trusts the catalog to hold unique ids; the loaders
//! in this module are where that is enforced.

mod campus;
#[cfg(test)]
mod test;

use crate::error::CatalogError;
use crate::geo::{Location, LocationId};

use log::debug;
use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub use campus::campus_locations;

/// Supplies the full, ordered set of locations.
pub trait Catalog {
    fn locations(&self) -> &[Location];

    /// Finds a location by its identifier.
    fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations().iter().find(|location| location.id == id)
    }

    fn contains(&self, id: LocationId) -> bool {
        self.location(id).is_some()
    }
}

impl Catalog for [Location] {
    fn locations(&self) -> &[Location] {
        self
    }
}

impl Catalog for Vec<Location> {
    fn locations(&self) -> &[Location] {
        self.as_slice()
    }
}

/// A fixed, in-memory catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticCatalog {
    locations: Vec<Location>,
}

impl StaticCatalog {
    /// Wraps the given locations, rejecting an empty set or repeated ids.
    pub fn new(locations: Vec<Location>) -> Result<Self, CatalogError> {
        if locations.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = FxHashSet::default();
        if let Some(duplicate) = locations.iter().find(|location| !seen.insert(location.id)) {
            return Err(CatalogError::DuplicateId(duplicate.id));
        }

        Ok(Self { locations })
    }

    /// The sixteen-point campus map.
    pub fn campus() -> Self {
        Self {
            locations: campus_locations(),
        }
    }

    /// Reads a JSON array of locations, `[{"id": 1, "name": "..", "x": 0, "y": 0}, ...]`.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let locations: Vec<Location> = serde_json::from_reader(reader)?;
        debug!("Parsed {} locations from catalog", locations.len());

        Self::new(locations)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let file = File::open(path.as_ref())?;
        Self::from_json_reader(BufReader::new(file))
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

impl Catalog for StaticCatalog {
    fn locations(&self) -> &[Location] {
        &self.locations
    }
}
