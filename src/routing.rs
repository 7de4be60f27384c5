//! Route queries against a populated graph.
//!
//! 1. Resolve the source and target names, failing fast on unknown names.
//! 2. Enumerate every simple directed path between them.
//! 3. Render the paths and group them by total cost, ascending.
//!
//! A failing query returns only its error, never a partial result.

pub mod route;

use tracing::debug;

use crate::error::RouteError;
use crate::graph::RouteGraph;
use crate::graph::search::find_all_paths;
use crate::routing::route::{Route, RouteList, rank_paths};

/// Finds every route between two named locations, one [`Route`] per
/// distinct total cost, sorted ascending by cost. Within a route the
/// display paths keep the search's discovery order.
pub fn find_all_routes(
    graph: &RouteGraph,
    source: &str,
    target: &str,
) -> Result<RouteList, RouteError> {
    debug!("Searching all routes {source} -> {target}");

    let source_id = graph
        .lookup(source)
        .ok_or_else(|| RouteError::SourceNotFound(source.to_string()))?;
    let target_id = graph
        .lookup(target)
        .ok_or_else(|| RouteError::TargetNotFound(target.to_string()))?;

    let paths = find_all_paths(graph, source_id, target_id);
    let routes = rank_paths(graph, paths);

    if routes.is_empty() {
        return Err(RouteError::NoRouteFound {
            origin: source.to_string(),
            target: target.to_string(),
        });
    }

    Ok(routes)
}

/// Finds the cheapest route between two named locations: exactly the first
/// element of [`find_all_routes`], carrying every path that ties for the
/// minimum cost.
pub fn find_best_route(
    graph: &RouteGraph,
    source: &str,
    target: &str,
) -> Result<Route, RouteError> {
    let routes = find_all_routes(graph, source, target)?;

    routes
        .into_iter()
        .next()
        .ok_or_else(|| RouteError::NoRouteFound {
            origin: source.to_string(),
            target: target.to_string(),
        })
}
