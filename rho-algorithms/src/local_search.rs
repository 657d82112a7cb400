use crate::{conflict_index::ConflictIndex, params::Params};
use anyhow::Result;
use logging_timer::time;
use rand::Rng;
use rho_challenges::cycle_rho::{CycleGraph, NodeId};

/// Randomized repair search over a labelled [`CycleGraph`].
///
/// The graph and its [`ConflictIndex`] only change through [`LocalSearch::set_node`],
/// so the index always describes the current labels.
pub struct LocalSearch<R: Rng> {
    graph: CycleGraph,
    index: ConflictIndex,
    rng: R,
    params: Params,
    update_step: f64,
    num_updates: u64,
}

impl<R: Rng> LocalSearch<R> {
    /// Engine over `graph` with a uniformly random starting labeling.
    pub fn new(graph: CycleGraph, params: Params, rng: R) -> Self {
        let mut search = Self::unlabelled(graph, params, rng);
        search.initialize_random_labels();
        search
    }

    /// Engine over `graph` starting from the given labels.
    pub fn with_labels(
        mut graph: CycleGraph,
        labels: &[usize],
        params: Params,
        rng: R,
    ) -> Result<Self> {
        graph.apply_labels(labels)?;
        let index = ConflictIndex::build(&graph);
        let update_step = params.update_step(graph.num_nodes());
        Ok(Self {
            graph,
            index,
            rng,
            params,
            update_step,
            num_updates: 0,
        })
    }

    fn unlabelled(graph: CycleGraph, params: Params, rng: R) -> Self {
        let index = ConflictIndex::new(&graph);
        let update_step = params.update_step(graph.num_nodes());
        Self {
            graph,
            index,
            rng,
            params,
            update_step,
            num_updates: 0,
        }
    }

    /// Draws every label uniformly from `[0, K)` and rebuilds the index:
    /// nodes first, then every edge once all lengths are known.
    pub fn initialize_random_labels(&mut self) {
        self.index = ConflictIndex::new(&self.graph);
        let modulus = self.graph.modulus;
        for node in 0..self.graph.nodes.len() {
            self.graph.nodes[node].label = self.rng.gen_range(0..modulus);
            self.index.add_node(&self.graph, node);
        }
        for edge in 0..self.graph.edges.len() {
            self.graph.refresh_edge(edge);
            self.index.add_edge(&self.graph, edge);
        }
    }

    pub fn graph(&self) -> &CycleGraph {
        &self.graph
    }

    pub fn index(&self) -> &ConflictIndex {
        &self.index
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn num_updates(&self) -> u64 {
        self.num_updates
    }

    pub fn labels(&self) -> Vec<usize> {
        self.graph.labels()
    }

    pub fn into_graph(self) -> CycleGraph {
        self.graph
    }

    /// Relabels `node` and keeps both incident edges and the index in sync.
    pub fn set_node(&mut self, node: NodeId, label: usize) {
        let (left, right) = (self.graph.nodes[node].left, self.graph.nodes[node].right);

        self.index.remove_edge(&self.graph, left);
        self.index.remove_edge(&self.graph, right);
        self.index.remove_node(&self.graph, node);

        self.graph.nodes[node].label = label;
        self.graph.refresh_edge(left);
        self.graph.refresh_edge(right);

        self.index.add_node(&self.graph, node);
        self.index.add_edge(&self.graph, left);
        self.index.add_edge(&self.graph, right);
    }

    /// One repair step. Proposes random relabels of random bad nodes until one
    /// lowers the score or is accepted anyway; the acceptance probability grows
    /// after every rejection. Returns the number of proposals made.
    pub fn update(&mut self) -> u64 {
        if self.index.is_resolved() {
            return 0;
        }
        let modulus = self.graph.modulus;
        let mut p = self.params.base_accept_probability;
        let mut proposals = 0;

        loop {
            proposals += 1;
            let bad_nodes = self.index.bad_nodes();
            let node = bad_nodes[self.rng.gen_range(0..bad_nodes.len())];
            let old_label = self.graph.nodes[node].label;
            let old_score = self.index.score();

            let new_label = self.rng.gen_range(0..modulus);
            self.set_node(node, new_label);

            if self.index.score() < old_score || self.rng.gen::<f64>() < p {
                break;
            }
            self.set_node(node, old_label);
            p += (1.0 - p) * self.update_step;
        }

        self.num_updates += 1;
        if self.params.greedy_polish && !self.index.is_resolved() {
            let bad_nodes = self.index.bad_nodes();
            let node = bad_nodes[self.rng.gen_range(0..bad_nodes.len())];
            self.get_optimal_label(node);
        }
        proposals
    }

    /// Tries every label on `node`, leaves it on the one with the lowest score
    /// and returns that label. The current label wins ties.
    pub fn get_optimal_label(&mut self, node: NodeId) -> usize {
        let mut best_score = self.index.score();
        let mut best_label = self.graph.nodes[node].label;

        for label in 0..self.graph.modulus {
            self.set_node(node, label);
            if self.index.score() < best_score {
                best_score = self.index.score();
                best_label = label;
            }
        }
        self.set_node(node, best_label);
        best_label
    }

    /// Updates until no conflict is left. Does not terminate on instances
    /// the search cannot solve.
    #[time("debug")]
    pub fn solve(&mut self) {
        while !self.index.is_resolved() {
            self.update();
            self.log_progress();
        }
        log::debug!("Converged after {} updates", self.num_updates);
    }

    /// Like [`LocalSearch::solve`], but gives up after `max_updates` updates
    /// made by this call. Returns whether every conflict was resolved.
    #[time("debug")]
    pub fn solve_with_budget(&mut self, max_updates: Option<u64>) -> bool {
        let Some(max_updates) = max_updates else {
            self.solve();
            return true;
        };
        let start = self.num_updates;
        while !self.index.is_resolved() {
            if self.num_updates - start >= max_updates {
                log::warn!(
                    "No convergence after {} updates, {} bad node entries left",
                    max_updates,
                    self.index.score()
                );
                return false;
            }
            self.update();
            self.log_progress();
        }
        log::debug!("Converged after {} updates", self.num_updates);
        true
    }

    fn log_progress(&self) {
        let interval = self.params.progress_interval;
        if interval > 0 && self.num_updates % interval == 0 {
            log::debug!(
                "Update {}: {} bad node entries",
                self.num_updates,
                self.index.score()
            );
        }
    }
}
