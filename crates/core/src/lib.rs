pub mod config;
pub mod content;
pub mod mapgraph;
pub mod types;

pub use config::{ConfigError, IntRange, LayerConfig, MapConfig};
pub use mapgraph::{
    GeneratedMap, MapGenerator, MapGraph, MapPath, MapSnapshot, Node, NodeSnapshot,
    PathDiagnostics, generate_map,
};
pub use types::*;
