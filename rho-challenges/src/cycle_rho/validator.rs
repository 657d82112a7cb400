use super::graph::CycleGraph;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    Validated,
    NotGood,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Validated)
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validation::Validated => write!(f, "Validated!"),
            Validation::NotGood => write!(f, "Not Good!"),
        }
    }
}

/// First conflict found by [`find_conflict`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conflict {
    RepeatedLabel { node: usize, label: usize },
    RepeatedLength { edge: usize, length: usize },
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conflict::RepeatedLabel { node, label } => {
                write!(f, "Node {} repeats label {}", node, label)
            }
            Conflict::RepeatedLength { edge, length } => {
                write!(f, "Edge {} repeats length {}", edge, length)
            }
        }
    }
}

/// Rechecks a labeling from scratch, ignoring any incremental bookkeeping.
///
/// Lengths are recomputed from the endpoint labels. The label pass runs first,
/// and a zero length needs two equal labels, so the length pass never sees 0.
pub fn find_conflict(graph: &CycleGraph) -> Option<Conflict> {
    let mut label_seen = vec![false; graph.modulus];
    let mut length_seen = vec![false; graph.edges.len()];

    for (node, n) in graph.nodes.iter().enumerate() {
        if label_seen[n.label] {
            return Some(Conflict::RepeatedLabel {
                node,
                label: n.label,
            });
        }
        label_seen[n.label] = true;
    }

    for (edge, e) in graph.edges.iter().enumerate() {
        let length = graph.distance(graph.nodes[e.left].label, graph.nodes[e.right].label);
        if length_seen[length - 1] {
            return Some(Conflict::RepeatedLength { edge, length });
        }
        length_seen[length - 1] = true;
    }
    None
}

pub fn validate(graph: &CycleGraph) -> Validation {
    match find_conflict(graph) {
        Some(_) => Validation::NotGood,
        None => Validation::Validated,
    }
}
