mod graph;
pub use graph::*;
mod validator;
pub use validator::*;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub cycle_sizes: Vec<usize>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub labels: Vec<usize>,
}

impl Solution {
    pub fn new() -> Self {
        Self { labels: Vec::new() }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge {
    pub seed: [u8; 32],
    pub cycle_sizes: Vec<usize>,
    pub num_nodes: usize,
    pub modulus: usize,
}

impl Challenge {
    pub fn generate_instance(seed: &[u8; 32], track: &Track) -> Result<Self> {
        // fails early on cycles shorter than 3
        let graph = CycleGraph::new(&track.cycle_sizes)?;
        Ok(Self {
            seed: seed.clone(),
            cycle_sizes: track.cycle_sizes.clone(),
            num_nodes: graph.num_nodes(),
            modulus: graph.modulus,
        })
    }

    pub fn build_graph(&self) -> Result<CycleGraph> {
        CycleGraph::new(&self.cycle_sizes)
    }

    /// Graph carrying the labels of `solution`.
    pub fn labelled_graph(&self, solution: &Solution) -> Result<CycleGraph> {
        let mut graph = self.build_graph()?;
        graph.apply_labels(&solution.labels)?;
        Ok(graph)
    }

    pub fn validate(&self, solution: &Solution) -> Result<Validation> {
        let graph = self.labelled_graph(solution)?;
        Ok(validate(&graph))
    }

    conditional_pub!(
        fn verify_solution(&self, solution: &Solution) -> Result<()> {
            let graph = self.labelled_graph(solution)?;
            if let Some(edge) = graph.edges.iter().position(|e| e.length == 0) {
                return Err(anyhow!(
                    "Edge {} has length 0 (nodes {} and {} share label {})",
                    edge,
                    graph.edges[edge].left,
                    graph.edges[edge].right,
                    graph.nodes[graph.edges[edge].left].label
                ));
            }
            match find_conflict(&graph) {
                Some(conflict) => Err(anyhow!("{}", conflict)),
                None => Ok(()),
            }
        }
    );
}
