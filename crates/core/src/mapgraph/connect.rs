//! Converts planned paths into directed edges between adjacent layers.

use super::model::{MapGraph, MapPath};

/// Walks each path from the boss end downward and inserts the corresponding
/// upward edge (lower layer -> higher layer). Paths routinely share segments;
/// set-based adjacency keeps re-insertion idempotent.
pub(super) fn apply_path_edges(graph: &mut MapGraph, paths: &[MapPath]) {
    for path in paths {
        for pair in path.points.windows(2) {
            let higher = pair[0];
            let lower = pair[1];
            let from = graph.node_id_at(lower).expect("path points stay inside the grid");
            let to = graph.node_id_at(higher).expect("path points stay inside the grid");
            graph.add_edge(from, to);
        }
    }
}
