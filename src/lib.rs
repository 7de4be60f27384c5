#![doc = include_str!("../README.md")]

mod error;
mod format;
mod graph;
mod routing;
mod table;

pub use error::{RouteError, TableError};
pub use format::render_path;
pub use graph::search::{DiscoveredPath, find_all_paths};
pub use graph::{Connection, Location, LocationId, RouteGraph};
pub use routing::route::{Route, RouteList, rank_paths};
pub use routing::{find_all_routes, find_best_route};
pub use table::{EdgeRow, append_result_row, load_graph, read_edge_rows};
