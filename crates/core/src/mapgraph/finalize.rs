//! Final pruning and entry-point marking on the assembled graph.

use crate::types::{NodeId, NodeState};

use super::model::MapGraph;

/// Deactivates nodes no path ever touched and promotes the surviving layer-0
/// nodes to `Attainable`, the prerequisite-free entry state.
pub(super) fn finalize_graph(graph: &mut MapGraph) {
    let all_ids: Vec<NodeId> = graph.nodes().map(|node| node.id).collect();
    for id in all_ids {
        if graph.node(id).is_isolated() {
            graph.node_mut(id).active = false;
        }
    }

    let start_ids: Vec<NodeId> = graph.layer_nodes(0).map(|node| node.id).collect();
    for id in start_ids {
        if graph.node(id).active {
            graph.node_mut(id).state = NodeState::Attainable;
        }
    }
}
