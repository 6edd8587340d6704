//! Adjacency model of the relationship web.
//!
//! A [`RelationshipGraph`] holds three views of the same directed edge set:
//! a binary presence matrix, the dominant type per pair, and the winning
//! edge's metadata. The three always agree: `matrix[i][j] == 1` exactly when
//! `type_matrix[i][j] != 0` and exactly when `edge(i, j)` is `Some`.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::Serialize;

use super::kind::priority_of;
use super::prune::TypeMask;
use crate::records::{Character, RelationshipEdge};

/// Metadata of the winning edge between an ordered pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeInfo {
    #[serde(rename = "type")]
    pub kind: u32,
    pub type_name: String,
    pub value: f64,
}

impl From<&RelationshipEdge> for EdgeInfo {
    fn from(edge: &RelationshipEdge) -> Self {
        Self {
            kind: edge.kind,
            type_name: edge.type_name.clone(),
            value: edge.value,
        }
    }
}

/// Square, directed relationship graph over an indexed character list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelationshipGraph {
    matrix: Vec<Vec<u8>>,
    type_matrix: Vec<Vec<u32>>,
    edge_info: HashMap<(usize, usize), EdgeInfo>,
}

impl RelationshipGraph {
    /// A graph of `n` nodes without edges.
    pub fn with_size(n: usize) -> Self {
        Self {
            matrix: vec![vec![0; n]; n],
            type_matrix: vec![vec![0; n]; n],
            edge_info: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.matrix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    pub fn matrix(&self) -> &[Vec<u8>] {
        &self.matrix
    }

    pub fn type_matrix(&self) -> &[Vec<u32>] {
        &self.type_matrix
    }

    pub fn edge(&self, source: usize, target: usize) -> Option<&EdgeInfo> {
        self.edge_info.get(&(source, target))
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edge_info.len()
    }

    /// Directed edges in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = ((usize, usize), &EdgeInfo)> + '_ {
        let n = self.len();
        (0..n)
            .flat_map(move |i| (0..n).map(move |j| (i, j)))
            .filter_map(move |key| self.edge_info.get(&key).map(|info| (key, info)))
    }

    /// Whether node `i` has an edge in either direction.
    pub fn has_incident_edge(&self, i: usize) -> bool {
        (0..self.len()).any(|j| self.matrix[i][j] > 0 || self.matrix[j][i] > 0)
    }

    /// Presence matrix as weights for the chord layout.
    pub fn weights(&self) -> Vec<Vec<f64>> {
        self.matrix
            .iter()
            .map(|row| row.iter().map(|&w| f64::from(w)).collect())
            .collect()
    }

    /// Copy of the graph keeping only edges whose type the mask allows.
    pub fn masked(&self, mask: &TypeMask) -> Self {
        let mut out = Self::with_size(self.len());
        for ((i, j), info) in &self.edge_info {
            if mask.allows(info.kind) {
                out.insert(*i, *j, info.clone());
            }
        }
        out
    }

    /// Sub-graph over `keep` (old indices, ascending); node `keep[k]` becomes `k`.
    pub fn restrict(&self, keep: &[usize]) -> Self {
        let mut out = Self::with_size(keep.len());
        for (new_i, &old_i) in keep.iter().enumerate() {
            for (new_j, &old_j) in keep.iter().enumerate() {
                if let Some(info) = self.edge_info.get(&(old_i, old_j)) {
                    out.insert(new_i, new_j, info.clone());
                }
            }
        }
        out
    }

    fn insert(&mut self, i: usize, j: usize, info: EdgeInfo) {
        self.matrix[i][j] = 1;
        self.type_matrix[i][j] = info.kind;
        self.edge_info.insert((i, j), info);
    }
}

/// Builds a [`RelationshipGraph`] from loaded characters.
///
/// Character `k` of the input becomes node `k`. Relationship targets are
/// resolved by nickname; when two characters share a nickname the later one
/// receives the edges.
pub struct GraphBuilder<'a> {
    characters: &'a [Character],
    index: HashMap<&'a str, usize>,
    graph: RelationshipGraph,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(characters: &'a [Character]) -> Self {
        let index = characters
            .iter()
            .enumerate()
            .map(|(i, c)| (c.nickname(), i))
            .collect();

        Self {
            characters,
            index,
            graph: RelationshipGraph::with_size(characters.len()),
        }
    }

    /// Fold every valid relationship into the graph.
    pub fn build(mut self) -> RelationshipGraph {
        for (source, character) in self.characters.iter().enumerate() {
            for edge in character.detail.relationships() {
                if let Some(target) = self.resolve(character, &edge) {
                    if target != source {
                        self.add_edge(source, target, &edge);
                    }
                }
            }
        }
        self.graph
    }

    /// Target index of a usable edge; `None` for edges that never count.
    fn resolve(&self, owner: &Character, edge: &RelationshipEdge) -> Option<usize> {
        if edge.kind == 0 || edge.target_name == owner.nickname() {
            return None;
        }
        // NaN fails this comparison too
        if !(edge.value > 0.0) {
            return None;
        }
        self.index.get(edge.target_name.as_str()).copied()
    }

    fn add_edge(&mut self, source: usize, target: usize, edge: &RelationshipEdge) {
        let graph = &mut self.graph;
        graph.matrix[source][target] = 1;

        let candidate = priority_of(edge.kind);
        match graph.edge_info.entry((source, target)) {
            Entry::Vacant(slot) => {
                slot.insert(EdgeInfo::from(edge));
                graph.type_matrix[source][target] = edge.kind;
            }
            Entry::Occupied(mut slot) => {
                let existing = priority_of(slot.get().kind);
                if candidate > existing {
                    slot.insert(EdgeInfo::from(edge));
                    graph.type_matrix[source][target] = edge.kind;
                } else if candidate == existing && edge.value > slot.get().value {
                    slot.get_mut().value = edge.value;
                }
            }
        }
    }
}

/// Build the graph for `characters`.
pub fn build(characters: &[Character]) -> RelationshipGraph {
    GraphBuilder::new(characters).build()
}
