//! Generation configuration consumed, not computed, by the map-graph pipeline.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;
use serde::{Deserialize, Serialize};

use crate::content::{self, keys};
use crate::types::BlueprintKey;

/// Inclusive integer range sampled once per generation decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: usize,
    pub max: usize,
}

impl IntRange {
    pub fn exact(value: usize) -> Self {
        Self { min: value, max: value }
    }

    pub fn sample(&self, rng: &mut ChaCha8Rng) -> usize {
        debug_assert!(self.min <= self.max);
        let range_size = (self.max - self.min + 1) as u64;
        self.min + (rng.next_u64() % range_size) as usize
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayerConfig {
    /// Presentation spacing from the previous layer; carried for the host,
    /// never read by the graph math.
    pub layer_distance: IntRange,
    /// Probability that a node swaps its layer default for a pool draw.
    pub randomize_nodes: f64,
    pub default_blueprint: BlueprintKey,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub grid_width: usize,
    pub layers: Vec<LayerConfig>,
    /// How many distinct layer-0 columns path planning aims to reach.
    pub starting_node_count: IntRange,
    /// How many columns directly below the boss anchor the generated paths.
    pub pre_boss_node_count: IntRange,
    pub random_blueprints: Vec<BlueprintKey>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    ZeroGridWidth,
    TooFewLayers { layer_count: usize },
    InvalidRandomizeProbability { layer_index: usize },
    EmptyRange { field: &'static str },
    CountRangeExceedsGridWidth { field: &'static str, grid_width: usize },
}

impl MapConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width == 0 {
            return Err(ConfigError::ZeroGridWidth);
        }
        // A map needs a boss layer plus the pre-boss layer anchoring paths.
        if self.layers.len() < 2 {
            return Err(ConfigError::TooFewLayers { layer_count: self.layers.len() });
        }
        for (layer_index, layer) in self.layers.iter().enumerate() {
            if !(0.0..=1.0).contains(&layer.randomize_nodes) {
                return Err(ConfigError::InvalidRandomizeProbability { layer_index });
            }
            if layer.layer_distance.min > layer.layer_distance.max {
                return Err(ConfigError::EmptyRange { field: "layer_distance" });
            }
        }
        for (field, range) in [
            ("starting_node_count", self.starting_node_count),
            ("pre_boss_node_count", self.pre_boss_node_count),
        ] {
            if range.min > range.max {
                return Err(ConfigError::EmptyRange { field });
            }
            if range.max > self.grid_width {
                return Err(ConfigError::CountRangeExceedsGridWidth {
                    field,
                    grid_width: self.grid_width,
                });
            }
        }
        Ok(())
    }

    pub fn build_default() -> Self {
        let layer_count = 15;
        let mut layers = Vec::with_capacity(layer_count);
        for layer_index in 0..layer_count {
            let (default_blueprint, randomize_nodes) = match layer_index {
                0 => (keys::ENCOUNTER_MONSTER, 0.0),
                8 => (keys::SITE_TREASURE, 0.0),
                13 => (keys::SITE_REST, 0.0),
                14 => (keys::ENCOUNTER_BOSS, 0.0),
                _ => (keys::ENCOUNTER_MONSTER, 0.35),
            };
            layers.push(LayerConfig {
                layer_distance: IntRange { min: 80, max: 120 },
                randomize_nodes,
                default_blueprint: BlueprintKey::from(default_blueprint),
            });
        }

        Self {
            grid_width: 7,
            layers,
            starting_node_count: IntRange { min: 2, max: 3 },
            pre_boss_node_count: IntRange { min: 3, max: 5 },
            random_blueprints: content::default_random_pool(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self::build_default()
    }
}
