use anyhow::{anyhow, Result};

/// Index of a node in [`CycleGraph::nodes`].
pub type NodeId = usize;
/// Index of an edge in [`CycleGraph::edges`].
pub type EdgeId = usize;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    pub label: usize,
    /// Edge arriving from the predecessor.
    pub left: EdgeId,
    /// Edge leaving towards the successor.
    pub right: EdgeId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Edge {
    pub length: usize,
    pub left: NodeId,
    pub right: NodeId,
}

/// Circular distance between two labels in `[0, modulus)`.
pub fn circular_distance(a: usize, b: usize, modulus: usize) -> usize {
    let diff = a.abs_diff(b);
    diff.min(modulus - diff)
}

/// Disjoint union of simple cycles stored as two flat arenas.
///
/// Node `i` owns edge `i`, which points at the next node of the same cycle.
/// Relations are arena indices, so the node -> edge -> node loop carries no
/// ownership cycle.
#[derive(Debug, Clone)]
pub struct CycleGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    /// First node of every cycle, in input order.
    pub heads: Vec<NodeId>,
    pub cycle_sizes: Vec<usize>,
    pub modulus: usize,
}

impl CycleGraph {
    pub fn new(cycle_sizes: &[usize]) -> Result<Self> {
        if let Some((i, &size)) = cycle_sizes.iter().enumerate().find(|&(_, &s)| s < 3) {
            return Err(anyhow!(
                "Cycle {} has size {}. Every cycle must have at least 3 nodes",
                i,
                size
            ));
        }
        let num_nodes: usize = cycle_sizes.iter().sum();

        let mut nodes = Vec::with_capacity(num_nodes);
        let mut edges = Vec::with_capacity(num_nodes);
        let mut heads = Vec::with_capacity(cycle_sizes.len());
        let mut offset = 0;
        for &size in cycle_sizes {
            heads.push(offset);
            for j in 0..size {
                let id = offset + j;
                nodes.push(Node {
                    label: 0,
                    left: offset + (j + size - 1) % size,
                    right: id,
                });
                edges.push(Edge {
                    length: 0,
                    left: id,
                    right: offset + (j + 1) % size,
                });
            }
            offset += size;
        }

        Ok(Self {
            nodes,
            edges,
            heads,
            cycle_sizes: cycle_sizes.to_vec(),
            modulus: 2 * num_nodes + 1,
        })
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn successor(&self, node: NodeId) -> NodeId {
        self.edges[self.nodes[node].right].right
    }

    pub fn predecessor(&self, node: NodeId) -> NodeId {
        self.edges[self.nodes[node].left].left
    }

    /// Nodes of the cycle starting at `head`, in successor order.
    pub fn cycle(&self, head: NodeId) -> CycleIter<'_> {
        CycleIter {
            graph: self,
            head,
            next: Some(head),
        }
    }

    pub fn distance(&self, a: usize, b: usize) -> usize {
        circular_distance(a, b, self.modulus)
    }

    /// Recomputes `edge.length` from the current labels of its endpoints.
    pub fn refresh_edge(&mut self, edge: EdgeId) {
        let (left, right) = (self.edges[edge].left, self.edges[edge].right);
        let length = self.distance(self.nodes[left].label, self.nodes[right].label);
        self.edges[edge].length = length;
    }

    /// Installs `labels` (one per node, in arena order) and recomputes every
    /// edge length.
    pub fn apply_labels(&mut self, labels: &[usize]) -> Result<()> {
        if labels.len() != self.nodes.len() {
            return Err(anyhow!(
                "Invalid number of labels. Expected: {}, Actual: {}",
                self.nodes.len(),
                labels.len()
            ));
        }
        if let Some(&label) = labels.iter().find(|&&l| l >= self.modulus) {
            return Err(anyhow!(
                "Label {} is outside of [0, {})",
                label,
                self.modulus
            ));
        }
        for (node, &label) in self.nodes.iter_mut().zip(labels) {
            node.label = label;
        }
        for edge in 0..self.edges.len() {
            self.refresh_edge(edge);
        }
        Ok(())
    }

    pub fn labels(&self) -> Vec<usize> {
        self.nodes.iter().map(|n| n.label).collect()
    }
}

pub struct CycleIter<'a> {
    graph: &'a CycleGraph,
    head: NodeId,
    next: Option<NodeId>,
}

impl<'a> Iterator for CycleIter<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        let successor = self.graph.successor(current);
        self.next = (successor != self.head).then_some(successor);
        Some(current)
    }
}
