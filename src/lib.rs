#![doc = include_str!("../readme.md")]

#[cfg(feature = "mimalloc")]
use mimalloc::MiMalloc;
#[cfg_attr(feature = "mimalloc", global_allocator)]
#[cfg(feature = "mimalloc")]
static GLOBAL: MiMalloc = MiMalloc;

pub mod catalog;
pub mod config;
pub mod error;
pub mod geo;
pub mod graph;
pub mod route;
pub mod solver;
#[cfg(feature = "tracing")]
pub mod util;

#[doc(inline)]
pub use catalog::{Catalog, StaticCatalog};
#[doc(inline)]
pub use config::{NeighborStrategy, RouteConfig};
#[doc(inline)]
pub use error::{Result, RouteError};
#[doc(inline)]
pub use geo::{Coordinate, Location, LocationId};
#[doc(inline)]
pub use graph::{Edge, Graph, GraphBuilder};
#[doc(inline)]
pub use route::{Route, RouteOutcome, RouteService};
#[doc(inline)]
pub use solver::{Dijkstra, ShortestPath, Solution};
