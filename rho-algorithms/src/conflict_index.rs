use rho_challenges::cycle_rho::{CycleGraph, EdgeId, NodeId};

/// Tracks which nodes currently violate the labeling constraints.
///
/// `bad_nodes` holds one entry per open violation a node takes part in (a
/// shared label, a zero-length incident edge, a duplicated incident length),
/// so drawing uniformly from it favours the most conflicted nodes. Entries are
/// never deduplicated.
#[derive(Debug, Clone)]
pub struct ConflictIndex {
    label_buckets: Vec<Vec<NodeId>>,
    length_buckets: Vec<Vec<EdgeId>>,
    bad_nodes: Vec<NodeId>,
}

impl ConflictIndex {
    pub fn new(graph: &CycleGraph) -> Self {
        Self {
            label_buckets: vec![Vec::new(); graph.modulus],
            length_buckets: vec![Vec::new(); graph.num_nodes() + 1],
            bad_nodes: Vec::new(),
        }
    }

    /// Indexes every node and edge of `graph` as currently labelled.
    pub fn build(graph: &CycleGraph) -> Self {
        let mut index = Self::new(graph);
        for node in 0..graph.nodes.len() {
            index.add_node(graph, node);
        }
        for edge in 0..graph.edges.len() {
            index.add_edge(graph, edge);
        }
        index
    }

    pub fn bad_nodes(&self) -> &[NodeId] {
        &self.bad_nodes
    }

    /// Weighted count of open violations.
    pub fn score(&self) -> usize {
        self.bad_nodes.len()
    }

    pub fn is_resolved(&self) -> bool {
        self.bad_nodes.is_empty()
    }

    pub fn nodes_with_label(&self, label: usize) -> &[NodeId] {
        &self.label_buckets[label]
    }

    pub fn edges_with_length(&self, length: usize) -> &[EdgeId] {
        &self.length_buckets[length]
    }

    pub fn add_node(&mut self, graph: &CycleGraph, node: NodeId) {
        let bucket = &mut self.label_buckets[graph.nodes[node].label];
        bucket.push(node);

        if bucket.len() > 1 {
            self.bad_nodes.push(node);
            if bucket.len() == 2 {
                self.bad_nodes.push(bucket[0]);
            }
        }
    }

    pub fn remove_node(&mut self, graph: &CycleGraph, node: NodeId) {
        let bucket = &mut self.label_buckets[graph.nodes[node].label];
        take_one(bucket, node);

        if !bucket.is_empty() {
            let remaining = (bucket.len() == 1).then(|| bucket[0]);
            take_one(&mut self.bad_nodes, node);
            if let Some(other) = remaining {
                take_one(&mut self.bad_nodes, other);
            }
        }
    }

    pub fn add_edge(&mut self, graph: &CycleGraph, edge: EdgeId) {
        let e = &graph.edges[edge];
        let bucket = &mut self.length_buckets[e.length];
        bucket.push(edge);

        if e.length == 0 {
            self.bad_nodes.push(e.left);
            self.bad_nodes.push(e.right);
        } else if bucket.len() > 1 {
            self.bad_nodes.push(e.left);
            self.bad_nodes.push(e.right);
            if bucket.len() == 2 {
                let first = &graph.edges[bucket[0]];
                self.bad_nodes.push(first.left);
                self.bad_nodes.push(first.right);
            }
        }
    }

    pub fn remove_edge(&mut self, graph: &CycleGraph, edge: EdgeId) {
        let e = &graph.edges[edge];
        let bucket = &mut self.length_buckets[e.length];
        take_one(bucket, edge);

        if e.length == 0 {
            take_one(&mut self.bad_nodes, e.left);
            take_one(&mut self.bad_nodes, e.right);
        } else if !bucket.is_empty() {
            let remaining = (bucket.len() == 1).then(|| bucket[0]);
            take_one(&mut self.bad_nodes, e.left);
            take_one(&mut self.bad_nodes, e.right);
            if let Some(other) = remaining {
                let other = &graph.edges[other];
                take_one(&mut self.bad_nodes, other.left);
                take_one(&mut self.bad_nodes, other.right);
            }
        }
    }
}

/// Removes one occurrence of `item`. Order is not preserved.
fn take_one(list: &mut Vec<usize>, item: usize) {
    if let Some(pos) = list.iter().position(|&x| x == item) {
        list.swap_remove(pos);
    }
}
