//! High-level map-graph generation composing the five pipeline stages.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::config::{ConfigError, MapConfig};

use super::builder::build_node_grid;
use super::connect::apply_path_edges;
use super::crossings::resolve_cross_connections;
use super::finalize::finalize_graph;
use super::model::GeneratedMap;
use super::paths::plan_paths;

pub struct MapGenerator {
    seed: u64,
    config: MapConfig,
}

impl MapGenerator {
    pub fn new(seed: u64, config: MapConfig) -> Self {
        Self { seed, config }
    }

    /// Runs one full generation pass. Each call rebuilds the graph from
    /// scratch with a fresh generator stream, so repeated calls with the same
    /// seed and config produce identical maps.
    pub fn generate(&self) -> Result<GeneratedMap, ConfigError> {
        self.config.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);

        let mut graph = build_node_grid(&mut rng, &self.config);
        let planned = plan_paths(&mut rng, &self.config);
        apply_path_edges(&mut graph, &planned.paths);
        resolve_cross_connections(&mut rng, &mut graph);
        finalize_graph(&mut graph);

        Ok(GeneratedMap {
            graph,
            boss_point: planned.boss_point,
            paths: planned.paths,
            diagnostics: planned.diagnostics,
        })
    }
}
