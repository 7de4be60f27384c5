use rustc_hash::FxHashMap;

/// Uniquely identifies a location that belongs to a graph.
/// Ids are indices into the owning graph's location arena and are only
/// meaningful for the graph that handed them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocationId(pub(crate) usize);

/// A named vertex of the route graph.
/// Two locations with the same name are the same vertex: names are unique
/// and case-sensitive within a graph instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub name: String,
    /// Outgoing connections in insertion order.
    /// This order fixes the discovery order of the path search.
    pub outgoing: Vec<Connection>,
}

/// A directed, weighted edge towards a destination location.
/// Belongs to exactly one origin location's outgoing list; the destination
/// is a non-owning id into the graph that owns both endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub destination: LocationId,
    pub cost: u64,
}

/// Directed weighted graph of named locations.
/// Owns all locations and their connections. Grown incrementally by edge
/// insertion (endpoints are created on first mention) and cleared as a whole
/// by [`RouteGraph::reset`]. Searches only ever borrow the graph immutably.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RouteGraph {
    locations: Vec<Location>,
    names: FxHashMap<String, LocationId>,
}

impl RouteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a directed connection between two named locations, creating
    /// any endpoint that is not yet part of the graph.
    /// Duplicate and cyclic edges are valid graph shapes; nothing is
    /// deduplicated here.
    pub fn add_connection(&mut self, origin: &str, destination: &str, cost: u64) {
        let origin = self.intern(origin);
        let destination = self.intern(destination);
        self.locations[origin.0]
            .outgoing
            .push(Connection { destination, cost });
    }

    /// Discards all locations and connections.
    /// Afterwards the graph behaves as if newly constructed.
    pub fn reset(&mut self) {
        self.locations.clear();
        self.names.clear();
    }

    /// Resolves a location name, `None` if the name is not in the graph.
    pub fn lookup(&self, name: &str) -> Option<LocationId> {
        self.names.get(name).copied()
    }

    /// Gets the name of a location of this graph.
    pub fn name(&self, location: LocationId) -> &str {
        &self.locations[location.0].name
    }

    /// Gets an iterator over the outgoing connections of a location,
    /// in insertion order.
    pub fn outgoing(&self, location: LocationId) -> impl Iterator<Item = &Connection> {
        self.locations[location.0].outgoing.iter()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    fn intern(&mut self, name: &str) -> LocationId {
        if let Some(&id) = self.names.get(name) {
            return id;
        }

        let id = LocationId(self.locations.len());
        self.locations.push(Location {
            name: name.to_string(),
            outgoing: vec![],
        });
        self.names.insert(name.to_string(), id);
        id
    }
}

pub mod search;

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn add_connection_creates_endpoints_once() {
        let mut graph = RouteGraph::new();
        graph.add_connection("A", "B", 5);
        graph.add_connection("A", "C", 3);
        graph.add_connection("B", "A", 2);

        assert_eq!(graph.len(), 3);

        let a = graph.lookup("A").unwrap();
        let b = graph.lookup("B").unwrap();
        let c = graph.lookup("C").unwrap();

        assert_eq!(graph.name(a), "A");
        assert_eq!(
            graph.outgoing(a).copied().collect::<Vec<_>>(),
            vec![
                Connection {
                    destination: b,
                    cost: 5
                },
                Connection {
                    destination: c,
                    cost: 3
                }
            ]
        );
        assert_eq!(graph.outgoing(c).count(), 0);
    }

    #[test]
    fn add_connection_keeps_duplicate_edges() {
        let mut graph = RouteGraph::new();
        graph.add_connection("A", "B", 5);
        graph.add_connection("A", "B", 5);
        graph.add_connection("A", "B", 7);

        let a = graph.lookup("A").unwrap();
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.outgoing(a).count(), 3);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let mut graph = RouteGraph::new();
        graph.add_connection("Porto", "Lisbon", 3);

        assert!(graph.lookup("Porto").is_some());
        assert!(graph.lookup("porto").is_none());
        assert!(graph.lookup(" Porto").is_none());
    }

    #[test]
    fn reset_discards_all_state() {
        let mut graph = RouteGraph::new();
        graph.add_connection("A", "B", 5);
        graph.reset();

        assert!(graph.is_empty());
        assert_eq!(graph.lookup("A"), None);
        assert_eq!(graph.lookup("B"), None);

        // the graph is reusable after a reset
        graph.add_connection("B", "C", 1);
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.lookup("B"), Some(LocationId(0)));
    }
}
