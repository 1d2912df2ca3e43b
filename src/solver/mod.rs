//! Shortest paths across the navigation graph.

#[doc(hidden)]
pub mod definition;
#[doc(hidden)]
pub mod dijkstra;
mod implementation;

#[doc(inline)]
pub use definition::{ShortestPath, Solution};
#[doc(inline)]
pub use dijkstra::Dijkstra;
