use rustc_hash::FxHashSet;
use tracing::debug;

use crate::{LocationId, RouteGraph};

/// A simple directed path discovered by the search, together with the sum
/// of its connection costs. Locations are ordered from source to target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredPath {
    pub locations: Vec<LocationId>,
    pub cost: u64,
}

/// Enumerates every simple directed path (no repeated location) from source
/// to target, depth-first, following outgoing connections in insertion
/// order. A path is complete on its first arrival at the target and must
/// contain at least one connection, so a query with `source == target`
/// yields no paths.
///
/// All traversal state lives on the call stack of this function: the set of
/// locations currently on the active path is local to the call and unwinds
/// with it, so repeated or concurrent searches over the same graph never
/// observe each other.
pub fn find_all_paths(
    graph: &RouteGraph,
    source: LocationId,
    target: LocationId,
) -> Vec<DiscoveredPath> {
    let mut paths = vec![];
    let mut trail = vec![];
    let mut on_trail = FxHashSet::default();

    visit(graph, source, target, 0, &mut trail, &mut on_trail, &mut paths);

    debug!("Found {} simple paths to {target:?}", paths.len());
    paths
}

fn visit(
    graph: &RouteGraph,
    current: LocationId,
    target: LocationId,
    cost: u64,
    trail: &mut Vec<LocationId>,
    on_trail: &mut FxHashSet<LocationId>,
    paths: &mut Vec<DiscoveredPath>,
) {
    trail.push(current);

    if current == target && trail.len() > 1 {
        debug!("Completed path {trail:?} with cost {cost}");
        paths.push(DiscoveredPath {
            locations: trail.clone(),
            cost,
        });
        trail.pop();
        return;
    }

    on_trail.insert(current);

    for &connection in graph.outgoing(current) {
        if !on_trail.contains(&connection.destination) {
            visit(
                graph,
                connection.destination,
                target,
                cost + connection.cost,
                trail,
                on_trail,
                paths,
            );
        }
    }

    on_trail.remove(&current);
    trail.pop();
}
