//! Detection and resolution of diagonal edge crossings in 2x2 grid cells.

use rand_chacha::ChaCha8Rng;

use crate::types::Point;

use super::model::MapGraph;
use super::rng::unit_value;

const REMOVE_BOTH_DIAGONALS_BELOW: f64 = 0.2;
const REMOVE_RISING_DIAGONAL_BELOW: f64 = 0.6;

/// Scans every 2x2 cell (columns outer, layers inner) and resolves cells
/// where both diagonal edges exist. Both straight alternatives are added
/// before any removal, so a route through the cell always survives.
pub(super) fn resolve_cross_connections(rng: &mut ChaCha8Rng, graph: &mut MapGraph) {
    let grid_width = graph.grid_width() as i32;
    let layer_count = graph.layer_count() as i32;
    for column in 0..grid_width - 1 {
        for layer in 0..layer_count - 1 {
            resolve_cell(rng, graph, Point::new(column, layer));
        }
    }
}

fn resolve_cell(rng: &mut ChaCha8Rng, graph: &mut MapGraph, corner: Point) {
    let top = Point::new(corner.x, corner.y + 1);
    let right = Point::new(corner.x + 1, corner.y);
    let top_right = Point::new(corner.x + 1, corner.y + 1);

    let (Some(corner_id), Some(top_id), Some(right_id), Some(top_right_id)) = (
        graph.node_id_at(corner),
        graph.node_id_at(top),
        graph.node_id_at(right),
        graph.node_id_at(top_right),
    ) else {
        return;
    };

    let all_active = [corner_id, top_id, right_id, top_right_id]
        .iter()
        .all(|&id| graph.node(id).active);
    if !all_active {
        return;
    }

    // A cross exists only when both diagonals are already present.
    let rising = graph.has_edge(corner_id, top_right_id);
    let falling = graph.has_edge(right_id, top_id);
    if !(rising && falling) {
        return;
    }

    graph.add_edge(corner_id, top_id);
    graph.add_edge(right_id, top_right_id);

    let roll = unit_value(rng);
    if roll < REMOVE_BOTH_DIAGONALS_BELOW {
        graph.remove_edge(corner_id, top_right_id);
        graph.remove_edge(right_id, top_id);
    } else if roll < REMOVE_RISING_DIAGONAL_BELOW {
        graph.remove_edge(corner_id, top_right_id);
    } else {
        graph.remove_edge(right_id, top_id);
    }
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use crate::types::Point;

    use super::super::model::MapGraph;
    use super::*;

    fn graph_with_cross() -> MapGraph {
        let mut graph = MapGraph::allocate(2, 2);
        let corner = graph.node_id_at(Point::new(0, 0)).unwrap();
        let right = graph.node_id_at(Point::new(1, 0)).unwrap();
        let top = graph.node_id_at(Point::new(0, 1)).unwrap();
        let top_right = graph.node_id_at(Point::new(1, 1)).unwrap();
        graph.add_edge(corner, top_right);
        graph.add_edge(right, top);
        graph
    }

    #[test]
    fn crossed_cell_gains_both_straight_alternatives() {
        for seed in 0..50 {
            let mut graph = graph_with_cross();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            resolve_cross_connections(&mut rng, &mut graph);

            assert!(graph.has_edge_between(Point::new(0, 0), Point::new(0, 1)));
            assert!(graph.has_edge_between(Point::new(1, 0), Point::new(1, 1)));
        }
    }

    #[test]
    fn crossed_cell_never_keeps_both_diagonals() {
        for seed in 0..50 {
            let mut graph = graph_with_cross();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            resolve_cross_connections(&mut rng, &mut graph);

            let rising = graph.has_edge_between(Point::new(0, 0), Point::new(1, 1));
            let falling = graph.has_edge_between(Point::new(1, 0), Point::new(0, 1));
            assert!(!(rising && falling), "seed {seed} left the cross unresolved");
        }
    }

    #[test]
    fn every_removal_branch_occurs_across_seeds() {
        let mut outcomes = std::collections::BTreeSet::new();
        for seed in 0..200 {
            let mut graph = graph_with_cross();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            resolve_cross_connections(&mut rng, &mut graph);

            let rising = graph.has_edge_between(Point::new(0, 0), Point::new(1, 1));
            let falling = graph.has_edge_between(Point::new(1, 0), Point::new(0, 1));
            outcomes.insert((rising, falling));
        }
        assert!(outcomes.contains(&(false, false)), "remove-both branch never taken");
        assert!(outcomes.contains(&(false, true)), "remove-rising branch never taken");
        assert!(outcomes.contains(&(true, false)), "remove-falling branch never taken");
    }

    #[test]
    fn single_diagonal_cells_are_left_untouched() {
        let mut graph = MapGraph::allocate(2, 2);
        let corner = graph.node_id_at(Point::new(0, 0)).unwrap();
        let top_right = graph.node_id_at(Point::new(1, 1)).unwrap();
        graph.add_edge(corner, top_right);

        let mut rng = ChaCha8Rng::seed_from_u64(3);
        resolve_cross_connections(&mut rng, &mut graph);

        assert!(graph.has_edge_between(Point::new(0, 0), Point::new(1, 1)));
        assert!(!graph.has_edge_between(Point::new(0, 0), Point::new(0, 1)));
        assert!(!graph.has_edge_between(Point::new(1, 0), Point::new(1, 1)));
    }

    #[test]
    fn cells_with_an_inactive_corner_are_skipped() {
        let mut graph = graph_with_cross();
        let top = graph.node_id_at(Point::new(0, 1)).unwrap();
        graph.node_mut(top).active = false;

        let mut rng = ChaCha8Rng::seed_from_u64(3);
        resolve_cross_connections(&mut rng, &mut graph);

        assert!(graph.has_edge_between(Point::new(0, 0), Point::new(1, 1)));
        assert!(graph.has_edge_between(Point::new(1, 0), Point::new(0, 1)));
        assert!(!graph.has_edge_between(Point::new(0, 0), Point::new(0, 1)));
    }
}
