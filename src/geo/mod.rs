//! Planar primitives shared by the graph builder and the solver.

#[doc(hidden)]
pub mod location;

#[doc(inline)]
pub use location::{Coordinate, Location, LocationId};
