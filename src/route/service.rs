use crate::catalog::{Catalog, StaticCatalog};
use crate::config::RouteConfig;
use crate::error::RouteError;
use crate::geo::{Location, LocationId};
use crate::graph::{Graph, GraphBuilder, GraphCache};
use crate::route::{Route, RouteOutcome};
use crate::solver::ShortestPath;

use log::{debug, error, info, warn};
use std::sync::Arc;
#[cfg(feature = "tracing")]
use tracing::Level;

/// Answers routing requests over a fixed catalog.
///
/// Unless caching is enabled, every request builds its own graph, so a
/// service may be shared freely between threads.
#[derive(Debug)]
pub struct RouteService<C>
where
    C: Catalog,
{
    catalog: C,
    config: RouteConfig,
    cache: Option<GraphCache>,
}

impl RouteService<StaticCatalog> {
    /// A service over the campus map with the default configuration.
    pub fn campus() -> Self {
        RouteService::new(StaticCatalog::campus(), RouteConfig::default())
    }
}

impl<C> RouteService<C>
where
    C: Catalog,
{
    pub fn new(catalog: C, config: RouteConfig) -> Self {
        let cache = config.cache.then(GraphCache::new);

        Self {
            catalog,
            config,
            cache,
        }
    }

    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Every location the service can route between.
    pub fn locations(&self) -> &[Location] {
        self.catalog.locations()
    }

    /// Builds, or fetches from cache, the graph for the configured K.
    pub fn graph(&self) -> Arc<Graph> {
        let builder = GraphBuilder::from_config(&self.config);

        match &self.cache {
            Some(cache) => cache.query(&builder, self.catalog.locations()),
            None => Arc::new(builder.build(self.catalog.locations())),
        }
    }

    /// Routes between two locations, keeping unknown ids, unreachable
    /// targets and found routes distinct.
    ///
    /// Errors only when the graph and catalog disagree, which is a defect.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), level = Level::INFO))]
    pub fn route(&self, from: LocationId, to: LocationId) -> Result<RouteOutcome, RouteError> {
        let Some(origin) = self.catalog.location(from) else {
            return Ok(RouteOutcome::NotFound(from));
        };

        if !self.catalog.contains(to) {
            return Ok(RouteOutcome::NotFound(to));
        }

        if from == to {
            debug!("Start and end are both {from}, skipping search");
            return Ok(RouteOutcome::Found(Route::stationary(origin)));
        }

        let graph = self.graph();
        match graph.shortest_path(from, to) {
            Some(solution) => Route::from_solution(solution, &self.catalog).map(RouteOutcome::Found),
            None => Ok(RouteOutcome::Unreachable),
        }
    }

    /// Routes between two locations, collapsing every failure into `None`.
    ///
    /// Each failure is logged with its cause before it is discarded.
    pub fn get_route(&self, from: LocationId, to: LocationId) -> Option<Route> {
        match self.route(from, to) {
            Ok(RouteOutcome::Found(route)) => Some(route),
            Ok(RouteOutcome::NotFound(id)) => {
                warn!("Cannot route {from} -> {to}: location {id} does not exist");
                None
            }
            Ok(RouteOutcome::Unreachable) => {
                info!(
                    "No route {from} -> {to} within the {}-nearest graph",
                    self.config.neighbors
                );
                None
            }
            Err(err) => {
                error!("Routing {from} -> {to} failed: {err}");
                None
            }
        }
    }
}
