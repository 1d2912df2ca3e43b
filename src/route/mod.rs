//! Solved routes and the service that produces them.

#[doc(hidden)]
pub mod service;

#[doc(inline)]
pub use service::RouteService;

use crate::catalog::Catalog;
use crate::error::RouteError;
use crate::geo::{Coordinate, Location, LocationId};
use crate::graph::Weight;
use crate::solver::Solution;

use serde::{Deserialize, Serialize};

/// Rounds a distance to two decimal places for presentation.
#[inline]
pub fn round_distance(distance: Weight) -> Weight {
    (distance * 100.0).round() / 100.0
}

/// A walking route, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Location ids from the start to the end, inclusive.
    pub path: Vec<LocationId>,
    /// The total distance travelled, to two decimal places.
    pub distance: Weight,
    /// The position of each entry in `path`.
    pub coordinates: Vec<Coordinate>,
}

impl Route {
    /// The route which starts and ends at `location` without moving.
    pub fn stationary(location: &Location) -> Self {
        Route {
            path: vec![location.id],
            distance: 0.0,
            coordinates: vec![location.coordinate()],
        }
    }

    /// Resolves the coordinates of a solved path against the catalog it was
    /// built from.
    pub fn from_solution<C>(solution: Solution, catalog: &C) -> Result<Route, RouteError>
    where
        C: Catalog + ?Sized,
    {
        let coordinates = solution
            .path
            .iter()
            .map(|id| {
                catalog
                    .location(*id)
                    .map(Location::coordinate)
                    .ok_or(RouteError::MissingLocation(*id))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Route {
            path: solution.path,
            distance: round_distance(solution.distance),
            coordinates,
        })
    }

    pub fn start(&self) -> Option<LocationId> {
        self.path.first().copied()
    }

    pub fn end(&self) -> Option<LocationId> {
        self.path.last().copied()
    }
}

/// The result of a routing request, before it is collapsed for callers.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome {
    Found(Route),
    /// Both locations exist but no path joins them.
    Unreachable,
    /// The given id is not in the catalog.
    NotFound(LocationId),
}

impl RouteOutcome {
    pub fn route(self) -> Option<Route> {
        match self {
            RouteOutcome::Found(route) => Some(route),
            RouteOutcome::Unreachable | RouteOutcome::NotFound(_) => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, RouteOutcome::Found(_))
    }
}
