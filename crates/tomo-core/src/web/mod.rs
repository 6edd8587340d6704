//! The relationship web: graph model, builder and pruning filter.
//!
//! # Components
//!
//! - [`RelationshipGraph`] - binary adjacency, dominant-type matrix and edge metadata
//! - [`GraphBuilder`] - folds per-character relationship lists into a graph
//! - [`prune`] / [`filter`] - type masking followed by isolated-node removal
//! - [`WebGraph`] - a graph together with the characters its nodes stand for

mod error;
mod graph;
mod kind;
mod prune;

pub use error::WebError;
pub use graph::{build, EdgeInfo, GraphBuilder, RelationshipGraph};
pub use kind::{color_of, priority_of, RelationshipKind, UNKNOWN_KIND_COLOR};
pub use prune::{filter, prune, Pruned, TypeMask};

use std::sync::Arc;

use crate::records::Character;

/// A relationship graph and its node list; node `k` is `characters[k]`.
#[derive(Debug, Clone, Default)]
pub struct WebGraph {
    pub characters: Vec<Arc<Character>>,
    pub graph: RelationshipGraph,
}

impl WebGraph {
    /// Graph over every given character, nothing pruned.
    pub fn build(characters: Vec<Character>) -> Self {
        let graph = build(&characters);
        Self {
            characters: characters.into_iter().map(Arc::new).collect(),
            graph,
        }
    }

    /// Graph over the characters that have at least one valid relationship.
    ///
    /// This is the baseline every type filter starts from.
    pub fn baseline(characters: Vec<Character>) -> Self {
        Self::build(characters).filter(&TypeMask::all())
    }

    /// Apply a type mask and drop the characters it leaves isolated.
    pub fn filter(&self, mask: &TypeMask) -> Self {
        let (graph, characters) = filter(&self.graph, &self.characters, mask);
        Self { characters, graph }
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// No node or no edge left to draw.
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty() || self.graph.edge_count() == 0
    }

    pub fn nickname(&self, index: usize) -> Option<&str> {
        self.characters.get(index).map(|c| c.nickname())
    }
}
