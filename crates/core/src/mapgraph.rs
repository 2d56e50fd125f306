//! Layered map-graph generation domain split into coherent submodules.

pub mod model;

mod builder;
mod connect;
mod crossings;
mod finalize;
mod generator;
mod paths;
mod rng;

pub use generator::MapGenerator;
pub use model::{
    GeneratedMap, MapGraph, MapPath, MapSnapshot, Node, NodeSnapshot, PathDiagnostics,
};

use crate::config::{ConfigError, MapConfig};

pub fn generate_map(seed: u64, config: &MapConfig) -> Result<GeneratedMap, ConfigError> {
    MapGenerator::new(seed, config.clone()).generate()
}
