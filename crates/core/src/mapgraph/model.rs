//! Public data models for the generated layered map graph.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use slotmap::SlotMap;
use xxhash_rust::xxh3::xxh3_64;

use crate::types::{BlueprintKey, NodeId, NodeState, Point};

#[derive(Clone, Debug)]
pub struct Node {
    pub id: NodeId,
    pub point: Point,
    pub blueprint: Option<BlueprintKey>,
    pub active: bool,
    pub state: NodeState,
    /// Edges toward the next layer.
    pub outgoing: BTreeSet<NodeId>,
    /// Edges from the previous layer.
    pub incoming: BTreeSet<NodeId>,
}

impl Node {
    pub fn column(&self) -> usize {
        self.point.x as usize
    }

    pub fn layer(&self) -> usize {
        self.point.y as usize
    }

    pub fn is_isolated(&self) -> bool {
        self.outgoing.is_empty() && self.incoming.is_empty()
    }
}

/// Ordered point sequence spanning boss point down to a layer-0 column,
/// stepping exactly one layer at a time after the boss prefix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapPath {
    pub points: Vec<Point>,
}

impl MapPath {
    pub fn terminal_column(&self) -> i32 {
        self.points.last().expect("paths are never empty").x
    }
}

/// Node arena plus layer-major grid index. The shape is fixed once allocated;
/// later stages only touch edges, active flags, and states.
#[derive(Clone, Debug)]
pub struct MapGraph {
    grid_width: usize,
    layer_count: usize,
    nodes: SlotMap<NodeId, Node>,
    grid: Vec<NodeId>,
}

impl MapGraph {
    pub(super) fn allocate(grid_width: usize, layer_count: usize) -> Self {
        let mut nodes = SlotMap::with_key();
        let mut grid = Vec::with_capacity(layer_count * grid_width);
        for layer in 0..layer_count {
            for column in 0..grid_width {
                let node = Node {
                    id: NodeId::default(), // Will be overwritten
                    point: Point::new(column as i32, layer as i32),
                    blueprint: None,
                    active: true,
                    state: NodeState::Unvisited,
                    outgoing: BTreeSet::new(),
                    incoming: BTreeSet::new(),
                };
                let id = nodes.insert(node);
                nodes[id].id = id;
                grid.push(id);
            }
        }
        Self { grid_width, layer_count, nodes, grid }
    }

    pub fn grid_width(&self) -> usize {
        self.grid_width
    }

    pub fn layer_count(&self) -> usize {
        self.layer_count
    }

    /// Out-of-range lookups return `None`; grid edges are expected queries.
    pub fn node_id_at(&self, point: Point) -> Option<NodeId> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        let column = point.x as usize;
        let layer = point.y as usize;
        if column >= self.grid_width || layer >= self.layer_count {
            return None;
        }
        Some(self.grid[layer * self.grid_width + column])
    }

    pub fn node_at(&self, point: Point) -> Option<&Node> {
        self.node_id_at(point).map(|id| &self.nodes[id])
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub(super) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }

    /// Nodes in layer-major grid order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.grid.iter().map(|&id| &self.nodes[id])
    }

    pub fn layer_nodes(&self, layer: usize) -> impl Iterator<Item = &Node> {
        let start = layer * self.grid_width;
        self.grid[start..start + self.grid_width].iter().map(|&id| &self.nodes[id])
    }

    /// Inserts the edge into both endpoints' adjacency sets in one step.
    /// Re-adding an existing edge is a no-op.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) {
        debug_assert_eq!(
            self.nodes[to].point.y,
            self.nodes[from].point.y + 1,
            "edges must connect a layer to the layer directly above it"
        );
        self.nodes[from].outgoing.insert(to);
        self.nodes[to].incoming.insert(from);
    }

    /// Removes the edge from both endpoints' adjacency sets in one step.
    pub fn remove_edge(&mut self, from: NodeId, to: NodeId) {
        self.nodes[from].outgoing.remove(&to);
        self.nodes[to].incoming.remove(&from);
    }

    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.nodes[from].outgoing.contains(&to)
    }

    pub fn has_edge_between(&self, from: Point, to: Point) -> bool {
        match (self.node_id_at(from), self.node_id_at(to)) {
            (Some(from_id), Some(to_id)) => self.has_edge(from_id, to_id),
            _ => false,
        }
    }

    /// Targets of a node's outgoing edges as points, in column order.
    pub fn outgoing_points(&self, id: NodeId) -> Vec<Point> {
        let mut points: Vec<Point> =
            self.nodes[id].outgoing.iter().map(|&target| self.nodes[target].point).collect();
        points.sort();
        points
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.grid_width as u32).to_le_bytes());
        bytes.extend((self.layer_count as u32).to_le_bytes());
        for node in self.nodes() {
            bytes.push(u8::from(node.active));
            bytes.push(match node.state {
                NodeState::Unvisited => 0,
                NodeState::Attainable => 1,
                NodeState::Visited => 2,
                NodeState::Locked => 3,
            });
            match &node.blueprint {
                None => bytes.push(0),
                Some(blueprint) => {
                    bytes.push(1);
                    bytes.extend((blueprint.0.len() as u32).to_le_bytes());
                    bytes.extend(blueprint.0.as_bytes());
                }
            }
            let targets = self.outgoing_points(node.id);
            bytes.extend((targets.len() as u32).to_le_bytes());
            for target in targets {
                bytes.extend(target.x.to_le_bytes());
                bytes.extend(target.y.to_le_bytes());
            }
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}

/// Outcome of the path-planning diversity loop, reported to the caller so a
/// shortfall is visible instead of silently treated as success.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathDiagnostics {
    /// Total random walks performed, bounded by the planner's attempt cap.
    pub attempts: u32,
    pub target_start_columns: usize,
    pub distinct_start_columns: usize,
}

impl PathDiagnostics {
    pub fn met_target(&self) -> bool {
        self.distinct_start_columns >= self.target_start_columns
    }
}

#[derive(Clone, Debug)]
pub struct GeneratedMap {
    pub graph: MapGraph,
    pub boss_point: Point,
    pub paths: Vec<MapPath>,
    pub diagnostics: PathDiagnostics,
}

impl GeneratedMap {
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = self.graph.canonical_bytes();
        bytes.extend(self.boss_point.x.to_le_bytes());
        bytes.extend(self.boss_point.y.to_le_bytes());
        bytes.extend(self.diagnostics.attempts.to_le_bytes());
        bytes.extend((self.diagnostics.target_start_columns as u32).to_le_bytes());
        bytes.extend((self.diagnostics.distinct_start_columns as u32).to_le_bytes());
        bytes.extend((self.paths.len() as u32).to_le_bytes());
        for path in &self.paths {
            bytes.extend((path.points.len() as u32).to_le_bytes());
            for point in &path.points {
                bytes.extend(point.x.to_le_bytes());
                bytes.extend(point.y.to_le_bytes());
            }
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    pub fn snapshot(&self) -> MapSnapshot {
        let layers = (0..self.graph.layer_count())
            .map(|layer| {
                self.graph
                    .layer_nodes(layer)
                    .map(|node| NodeSnapshot {
                        point: node.point,
                        blueprint: node.blueprint.clone(),
                        active: node.active,
                        state: node.state,
                        next: self.graph.outgoing_points(node.id),
                    })
                    .collect()
            })
            .collect();

        MapSnapshot {
            grid_width: self.graph.grid_width(),
            boss_point: self.boss_point,
            diagnostics: self.diagnostics,
            layers,
        }
    }
}

/// Serializable read-only view of a finalized map for host consumption.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapSnapshot {
    pub grid_width: usize,
    pub boss_point: Point,
    pub diagnostics: PathDiagnostics,
    pub layers: Vec<Vec<NodeSnapshot>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub point: Point,
    pub blueprint: Option<BlueprintKey>,
    pub active: bool,
    pub state: NodeState,
    pub next: Vec<Point>,
}
