use std::collections::BTreeMap;
use std::ops::Deref;

use tracing::debug;

use crate::format::render_path;
use crate::graph::RouteGraph;
use crate::graph::search::DiscoveredPath;

/// All the routes between a source and a target that share one total cost,
/// as rendered display paths in discovery order. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub paths: Vec<String>,
    pub cost: u64,
}

/// Routes between a source and a target, strictly ascending by cost.
/// Each cost value appears in at most one route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteList(Vec<Route>);

impl From<Vec<Route>> for RouteList {
    fn from(routes: Vec<Route>) -> Self {
        Self(routes)
    }
}

impl Deref for RouteList {
    type Target = Vec<Route>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for RouteList {
    type Item = Route;
    type IntoIter = std::vec::IntoIter<Route>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Ranks discovered paths into a [`RouteList`]: each path is rendered once,
/// paths are grouped by their total cost keeping discovery order within the
/// group, and the groups are sorted ascending by cost.
pub fn rank_paths(graph: &RouteGraph, paths: Vec<DiscoveredPath>) -> RouteList {
    let mut groups: BTreeMap<u64, Vec<String>> = BTreeMap::new();

    for path in paths {
        let rendered = render_path(path.locations.iter().map(|&id| graph.name(id)));
        groups.entry(path.cost).or_default().push(rendered);
    }

    debug!("Ranked paths into {} cost groups", groups.len());

    let routes = groups
        .into_iter()
        .map(|(cost, paths)| Route { paths, cost })
        .collect::<Vec<_>>();

    routes.into()
}
