//! Node-grid allocation and blueprint assignment for the map graph.

use rand_chacha::ChaCha8Rng;

use crate::config::{LayerConfig, MapConfig};
use crate::types::{BlueprintKey, Point};

use super::model::MapGraph;
use super::rng::{random_index, unit_value};

/// Allocates the full `[layer_count][grid_width]` node grid and assigns each
/// node its content blueprint. No edges are created here.
pub(super) fn build_node_grid(rng: &mut ChaCha8Rng, config: &MapConfig) -> MapGraph {
    let mut graph = MapGraph::allocate(config.grid_width, config.layers.len());

    for (layer_index, layer_config) in config.layers.iter().enumerate() {
        for column in 0..config.grid_width {
            let point = Point::new(column as i32, layer_index as i32);
            let id = graph.node_id_at(point).expect("allocated grid covers every slot");
            graph.node_mut(id).blueprint =
                pick_blueprint(rng, layer_config, &config.random_blueprints);
        }
    }

    graph
}

fn pick_blueprint(
    rng: &mut ChaCha8Rng,
    layer_config: &LayerConfig,
    pool: &[BlueprintKey],
) -> Option<BlueprintKey> {
    if unit_value(rng) < layer_config.randomize_nodes {
        // Empty pool means "no blueprint", not an error.
        if pool.is_empty() {
            return None;
        }
        return Some(pool[random_index(rng, pool.len())].clone());
    }
    Some(layer_config.default_blueprint.clone())
}
