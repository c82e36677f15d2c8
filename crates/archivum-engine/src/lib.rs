// Engine module - Core interpretation logic (filtering, grouping, ordering)
// This layer sits between the loaded dataset (store) and CLI presentation.
// Everything here is pure: no I/O, no clocks, no global state.

pub mod daily;
pub mod detail;
pub mod filter;
pub mod graph;
pub mod grid;
pub mod timeline;

pub use daily::pick_daily;
pub use detail::{DetailView, Source};
pub use filter::{Filter, KindSelection, filter_records};
pub use graph::{Graph, GraphEdge, GraphNode, MAP_EXPORT_FILENAME, build_graph, to_dot};
pub use grid::{Card, GridId, Grids, build_grids, destination};
pub use timeline::{Orientation, TimelineEntry, build_timeline, jump_to_year};
