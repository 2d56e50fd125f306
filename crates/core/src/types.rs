use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct NodeId;
}

/// Grid coordinate: `x` is the column inside a layer, `y` is the layer index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Progress state of a map node. Generation only ever produces `Unvisited`
/// and `Attainable`; the later states belong to the run loop driving the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NodeState {
    Unvisited,
    Attainable,
    Visited,
    Locked,
}

/// Content descriptor assigned to a node, either a layer default or a draw
/// from the configured random pool.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BlueprintKey(pub String);

impl BlueprintKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BlueprintKey {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}
