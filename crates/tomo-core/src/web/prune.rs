//! Type filtering and isolated-node removal.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::graph::RelationshipGraph;
use super::kind::RelationshipKind;

/// Which relationship type codes survive a filter pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeMask {
    /// No type masking; unknown codes survive too.
    #[default]
    All,
    /// Only the listed codes survive.
    Only(BTreeSet<u32>),
}

impl TypeMask {
    pub fn all() -> Self {
        TypeMask::All
    }

    pub fn only(codes: impl IntoIterator<Item = u32>) -> Self {
        TypeMask::Only(codes.into_iter().collect())
    }

    /// Every known [`RelationshipKind`], which is what a full set of filter
    /// checkboxes produces.
    pub fn known() -> Self {
        Self::only(RelationshipKind::ALL.iter().map(|k| k.code()))
    }

    pub fn allows(&self, code: u32) -> bool {
        match self {
            TypeMask::All => code != 0,
            TypeMask::Only(codes) => codes.contains(&code),
        }
    }

    /// Whether the mask can let nothing through.
    pub fn is_empty(&self) -> bool {
        matches!(self, TypeMask::Only(codes) if codes.is_empty())
    }
}

/// Result of a filter pass: the re-indexed graph and the original indices of
/// the nodes it kept, in their original relative order.
#[derive(Debug, Clone, PartialEq)]
pub struct Pruned {
    pub graph: RelationshipGraph,
    pub kept: Vec<usize>,
}

/// Drop edges the mask rejects, then drop nodes left without any edge.
///
/// Node removal repeats until nothing changes. A node survives only with an
/// incident edge whose other endpoint also survives that same pass, so the
/// second pass never removes anything; the loop just makes that explicit.
pub fn prune(graph: &RelationshipGraph, mask: &TypeMask) -> Pruned {
    let mut current = graph.masked(mask);
    let mut kept: Vec<usize> = (0..graph.len()).collect();

    loop {
        let survivors: Vec<usize> = (0..current.len())
            .filter(|&i| current.has_incident_edge(i))
            .collect();

        if survivors.len() == current.len() {
            break;
        }

        current = current.restrict(&survivors);
        kept = survivors.iter().map(|&i| kept[i]).collect();
    }

    Pruned {
        graph: current,
        kept,
    }
}

/// [`prune`] that also carries a parallel item list through the re-indexing.
pub fn filter<T: Clone>(graph: &RelationshipGraph, items: &[T], mask: &TypeMask) -> (RelationshipGraph, Vec<T>) {
    debug_assert_eq!(graph.len(), items.len());

    let Pruned { graph, kept } = prune(graph, mask);
    let items = kept.iter().map(|&i| items[i].clone()).collect();
    (graph, items)
}
