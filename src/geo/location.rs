use geo::{Distance, Euclidean, Point};
use rstar::{Envelope, AABB};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// The stable identifier of a [Location] within a catalog.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct LocationId(pub u32);

impl From<u32> for LocationId {
    fn from(value: u32) -> Self {
        LocationId(value)
    }
}

impl Display for LocationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A planar position, as handed to a renderer.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Coordinate> for Point {
    fn from(value: Coordinate) -> Self {
        Point::new(value.x, value.y)
    }
}

/// A named point on the map.
///
/// Locations are immutable once catalogued; every graph and route
/// refers back to them by [LocationId].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl Location {
    pub fn new(id: impl Into<LocationId>, name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            x,
            y,
        }
    }

    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.x, self.y)
    }

    #[inline]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The straight-line (Euclidean) distance between two locations.
    #[inline]
    pub fn distance(&self, other: &Location) -> f64 {
        Euclidean.distance(self.position(), other.position())
    }
}

impl rstar::RTreeObject for Location {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.x, self.y])
    }
}

impl rstar::PointDistance for Location {
    fn distance_2(
        &self,
        point: &<Self::Envelope as Envelope>::Point,
    ) -> <<Self::Envelope as Envelope>::Point as rstar::Point>::Scalar {
        let [x, y] = *point;
        (self.x - x).powi(2) + (self.y - y).powi(2)
    }
}
