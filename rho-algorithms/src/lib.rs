pub mod conflict_index;
pub use conflict_index::ConflictIndex;
pub mod local_search;
pub use local_search::LocalSearch;
pub mod params;
pub use params::Params;

use anyhow::Result;
use rand::{rngs::SmallRng, SeedableRng};
use rho_challenges::cycle_rho::{Challenge, Solution};
use serde_json::{Map, Value};

/// Searches for a rho labeling of `challenge` and hands the final labeling to
/// `save_solution`. With a `max_updates` budget the labeling may still carry
/// conflicts when it is saved.
pub fn solve_challenge(
    challenge: &Challenge,
    save_solution: &dyn Fn(&Solution) -> Result<()>,
    hyperparameters: &Option<Map<String, Value>>,
) -> Result<()> {
    let params = Params::initialize(hyperparameters);
    let max_updates = params.max_updates;
    let rng = SmallRng::from_seed(challenge.seed.clone());
    let mut search = LocalSearch::new(challenge.build_graph()?, params, rng);

    if !search.solve_with_budget(max_updates) {
        log::warn!(
            "Saving unconverged labeling for cycle sizes {:?}",
            challenge.cycle_sizes
        );
    }
    save_solution(&Solution {
        labels: search.labels(),
    })
}
